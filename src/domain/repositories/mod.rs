pub mod armory_repository;
pub mod character_repository;
pub mod config_repository;
