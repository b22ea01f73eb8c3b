//! SeaORM entity definitions for the scholarship database.
//!
//! Enumerated columns (roles, statuses, priorities, document types) are stored as
//! upper-snake strings and parsed into domain enums by the server's repositories.

pub mod prelude;

pub mod application;
pub mod document;
pub mod scholarship;
pub mod user;
pub mod user_profile;
