pub mod file_character_repository;
pub mod file_config_repository;
