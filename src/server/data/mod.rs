//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models, parsing stored enum strings at this boundary so the service layer never
//! sees raw entity rows.

pub mod application;
pub mod document;
pub mod scholarship;
pub mod user;
pub mod user_profile;

#[cfg(test)]
mod test;
