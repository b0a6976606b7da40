/// Application layer - Use cases, DTOs and the operator dialogue
///
/// This layer contains the application logic that orchestrates
/// domain services and coordinates with infrastructure through ports.
pub mod dto;
pub mod interaction;
pub mod use_cases;
