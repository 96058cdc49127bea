// Presentation layer - string commands in, JSON envelopes out
pub mod commands;
pub mod errors;
