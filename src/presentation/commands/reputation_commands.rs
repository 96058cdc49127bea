use crate::app::AppState;
use crate::application::dto::character_dto::ReputationDto;
use crate::presentation::commands::helpers::{expect_arg_count, log_command, map_command_error};
use crate::presentation::errors::CommandError;

const LEGION_FILTER: &str = "legion";

/// `getrep <realm> <name> [legion]`
pub async fn get_reputation(
    args: &[String],
    app_state: &AppState,
) -> Result<Vec<ReputationDto>, CommandError> {
    expect_arg_count("getrep", "<realm> <name> [legion]", args, 2..=3)?;

    let legion_only = match args.get(2) {
        None => false,
        Some(filter) if filter.eq_ignore_ascii_case(LEGION_FILTER) => true,
        Some(filter) => {
            return Err(CommandError::BadRequest(format!(
                "unknown reputation filter: {}",
                filter
            )));
        }
    };
    log_command(format!(
        "getrep {} {} (legion only: {})",
        args[0], args[1], legion_only
    ));

    app_state
        .reputation_service
        .get_reputation(&args[0], &args[1], legion_only)
        .await
        .map_err(map_command_error(format!(
            "Failed to get reputation for {}/{}",
            args[0], args[1]
        )))
}
