pub mod character;
pub mod config;
pub mod reputation;
