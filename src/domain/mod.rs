// Domain layer - core models and the repository interfaces they are stored through
pub mod errors;
pub mod models;
pub mod repositories;
