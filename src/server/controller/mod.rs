pub mod application;
pub mod auth;
pub mod document;
pub mod health;
pub mod llm;
pub mod notification;
pub mod scholarship;
pub mod user;
