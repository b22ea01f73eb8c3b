//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Ownership checks, status-change notifications, deduplication
//! - **Orchestration**: Coordinating repository calls with the LLM service and the hub
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod application;
pub mod auth;
pub mod document;
pub mod llm;
pub mod scholarship;
pub mod scholarship_seeder;
pub mod user;

#[cfg(test)]
mod test;
