pub mod character_service;
pub mod refresh_service;
pub mod reputation_service;
