use serde::Serialize;

use crate::app::AppState;
use crate::presentation::commands::{character_commands, reputation_commands};
use crate::presentation::errors::CommandError;

/// Response body: `{"data": ...}` on success, `{"error": "..."}` otherwise.
#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
enum Envelope<T> {
    Data(T),
    Error(String),
}

/// Run the command named by `args[0]` with the remaining arguments.
///
/// Always returns a JSON envelope; failures never escape as Rust errors.
pub async fn dispatch(app_state: &AppState, args: &[String]) -> Vec<u8> {
    let Some((command, params)) = args.split_first() else {
        return respond::<()>(Err(CommandError::BadRequest(
            "no command given".to_string(),
        )));
    };

    match command.trim().to_ascii_lowercase().as_str() {
        "addchar" => respond(character_commands::add_character(params, app_state).await),
        "delchar" => respond(character_commands::delete_character(params, app_state).await),
        "listchars" => respond(character_commands::list_characters(params, app_state).await),
        "addnote" => respond(character_commands::add_note(params, app_state).await),
        "getdatastore" => respond(character_commands::get_datastore(params, app_state).await),
        "getrep" => respond(reputation_commands::get_reputation(params, app_state).await),
        "" => respond::<()>(Err(CommandError::BadRequest(
            "no command given".to_string(),
        ))),
        _ => respond::<()>(Err(CommandError::BadRequest(format!(
            "unknown command: {}",
            command
        )))),
    }
}

fn respond<T: Serialize>(result: Result<T, CommandError>) -> Vec<u8> {
    let envelope = match result {
        Ok(data) => Envelope::Data(data),
        Err(error) => Envelope::Error(error.message().to_string()),
    };

    serde_json::to_vec(&envelope).expect("response envelope must serialize")
}
