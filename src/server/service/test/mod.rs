mod application;
mod auth;
mod document;
mod llm;
mod scholarship_seeder;
