//! Data models for user records and their wire representations.

/// User record, request payload and response body
pub mod user;
