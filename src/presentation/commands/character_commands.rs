use crate::app::AppState;
use crate::application::dto::character_dto::{CharacterDto, CharacterKeyDto, CharacterSummaryDto};
use crate::presentation::commands::helpers::{expect_arg_count, log_command, map_command_error};
use crate::presentation::errors::CommandError;

/// `addchar <realm> <name>`
pub async fn add_character(
    args: &[String],
    app_state: &AppState,
) -> Result<CharacterSummaryDto, CommandError> {
    expect_arg_count("addchar", "<realm> <name>", args, 2..=2)?;
    log_command(format!("addchar {} {}", args[0], args[1]));

    app_state
        .character_service
        .add_character(&args[0], &args[1])
        .await
        .map_err(map_command_error(format!(
            "Failed to add character {}/{}",
            args[0], args[1]
        )))
}

/// `delchar <realm> <name>`
pub async fn delete_character(
    args: &[String],
    app_state: &AppState,
) -> Result<CharacterKeyDto, CommandError> {
    expect_arg_count("delchar", "<realm> <name>", args, 2..=2)?;
    log_command(format!("delchar {} {}", args[0], args[1]));

    app_state
        .character_service
        .delete_character(&args[0], &args[1])
        .await
        .map_err(map_command_error(format!(
            "Failed to delete character {}/{}",
            args[0], args[1]
        )))
}

/// `listchars`
pub async fn list_characters(
    args: &[String],
    app_state: &AppState,
) -> Result<Vec<CharacterSummaryDto>, CommandError> {
    expect_arg_count("listchars", "no arguments", args, 0..=0)?;
    log_command("listchars");

    app_state
        .character_service
        .list_characters()
        .await
        .map_err(map_command_error("Failed to list characters"))
}

/// `addnote <realm> <name> <note...>`; the note is every remaining argument joined by spaces
pub async fn add_note(
    args: &[String],
    app_state: &AppState,
) -> Result<Vec<String>, CommandError> {
    expect_arg_count("addnote", "<realm> <name> <note>", args, 3..=usize::MAX)?;
    log_command(format!("addnote {} {}", args[0], args[1]));

    let note = args[2..].join(" ");
    app_state
        .character_service
        .add_note(&args[0], &args[1], &note)
        .await
        .map_err(map_command_error(format!(
            "Failed to add note to {}/{}",
            args[0], args[1]
        )))
}

/// `getdatastore`
pub async fn get_datastore(
    args: &[String],
    app_state: &AppState,
) -> Result<Vec<CharacterDto>, CommandError> {
    expect_arg_count("getdatastore", "no arguments", args, 0..=0)?;
    log_command("getdatastore");

    app_state
        .character_service
        .get_datastore()
        .await
        .map_err(map_command_error("Failed to read character store"))
}
