//! API data transfer objects.
//!
//! Request and response bodies for the REST surface, plus the enumerations shared between
//! the wire format and the domain layer. Requests reject unknown fields; every DTO uses
//! camelCase keys.

pub mod api;
pub mod application;
pub mod auth;
pub mod document;
pub mod health;
pub mod llm;
pub mod notification;
pub mod scholarship;
pub mod user;
