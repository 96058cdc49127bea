// Application layer - use cases orchestrating the domain repositories
pub mod dto;
pub mod errors;
pub mod services;
