// Infrastructure layer - implements interfaces defined in the domain layer
pub mod apis;
pub mod logging;
pub mod persistence;
pub mod repositories;
