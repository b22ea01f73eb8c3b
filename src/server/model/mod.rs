//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and transformed
//! to DTOs at the controller boundary. Parameter types carry validated input from controllers
//! into services; building one from a request DTO is where request validation happens.

pub mod application;
pub mod auth;
pub mod document;
pub mod scholarship;
pub mod user;
pub mod user_profile;
