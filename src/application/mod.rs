/// Application layer - Session, use cases and DTOs
///
/// This layer orchestrates the dependency-tracking domain and coordinates
/// with infrastructure through ports.
pub mod dto;
pub mod factories;
pub mod read_models;
pub mod session;
pub mod use_cases;
