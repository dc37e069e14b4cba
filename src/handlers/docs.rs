//! API documentation endpoint.
//!
//! Serves an OpenAPI 3.0 document generated from a static route catalog.
//! The document is mounted outside the middleware chain.

use axum::Json;
use serde_json::{Map, Value, json};

/// Path the document is served from.
pub const DOCS_PATH: &str = "/swagger/v1/swagger.json";

/// One documented operation.
#[derive(Debug, Clone, Copy)]
pub struct RouteDoc {
    pub method: &'static str,
    pub path: &'static str,
    pub description: &'static str,
    /// Status code returned on success.
    pub success: u16,
    pub takes_body: bool,
}

pub const ROUTES: &[RouteDoc] = &[
    RouteDoc {
        method: "get",
        path: "/",
        description: "Root path for health check.",
        success: 200,
        takes_body: false,
    },
    RouteDoc {
        method: "post",
        path: "/users",
        description: "Creates a new user. Requires a valid name and optional age.",
        success: 201,
        takes_body: true,
    },
    RouteDoc {
        method: "get",
        path: "/users",
        description: "Returns a list of all users.",
        success: 200,
        takes_body: false,
    },
    RouteDoc {
        method: "get",
        path: "/users/{id}",
        description: "Returns a user by their unique ID.",
        success: 200,
        takes_body: false,
    },
    RouteDoc {
        method: "put",
        path: "/users/{id}",
        description: "Updates an existing user by ID.",
        success: 200,
        takes_body: true,
    },
    RouteDoc {
        method: "delete",
        path: "/users/{id}",
        description: "Deletes a user by ID.",
        success: 204,
        takes_body: false,
    },
];

fn operation(route: &RouteDoc) -> Value {
    let mut op = json!({
        "description": route.description,
        "responses": {
            route.success.to_string(): { "description": "Success" }
        }
    });

    if route.path != "/" {
        op["security"] = json!([{ "bearer": [] }]);
    }
    if route.path.contains("{id}") {
        op["parameters"] = json!([{
            "name": "id",
            "in": "path",
            "required": true,
            "schema": { "type": "integer", "format": "int64" }
        }]);
    }
    if route.takes_body {
        op["requestBody"] = json!({
            "required": true,
            "content": {
                "application/json": {
                    "schema": { "$ref": "#/components/schemas/User" }
                }
            }
        });
    }

    op
}

/// Build the OpenAPI document for `routes`.
pub fn openapi_document(routes: &[RouteDoc]) -> Value {
    let mut paths = Map::new();
    for route in routes {
        let entry = paths
            .entry(route.path)
            .or_insert_with(|| Value::Object(Map::new()));
        entry[route.method] = operation(route);
    }

    json!({
        "openapi": "3.0.1",
        "info": {
            "title": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION")
        },
        "paths": paths,
        "components": {
            "schemas": {
                "User": {
                    "type": "object",
                    "required": ["name"],
                    "properties": {
                        "name": { "type": "string", "maxLength": 100 },
                        "age": {
                            "type": "integer",
                            "nullable": true,
                            "minimum": 0,
                            "maximum": 100
                        }
                    }
                }
            },
            "securitySchemes": {
                "bearer": { "type": "http", "scheme": "bearer" }
            }
        }
    })
}

pub async fn openapi() -> Json<Value> {
    Json(openapi_document(ROUTES))
}
