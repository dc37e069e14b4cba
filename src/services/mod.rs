//! Business rules separated from HTTP handlers.

pub mod validation;
