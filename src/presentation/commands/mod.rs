pub mod character_commands;
pub mod helpers;
pub mod registry;
pub mod reputation_commands;
