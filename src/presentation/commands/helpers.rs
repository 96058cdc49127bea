use std::fmt::Display;
use std::ops::RangeInclusive;

use crate::infrastructure::logging::logger;
use crate::presentation::errors::CommandError;

pub fn log_command(command: impl AsRef<str>) {
    logger::debug(&format!("Command: {}", command.as_ref()));
}

pub fn map_command_error<E>(context: impl AsRef<str>) -> impl FnOnce(E) -> CommandError
where
    E: Display + Into<CommandError>,
{
    let context = context.as_ref().to_string();

    move |error| {
        logger::error(&format!("{}: {}", context, error));
        error.into()
    }
}

/// Reject a parameter list whose length falls outside `accepted`.
pub fn expect_arg_count(
    command: &str,
    usage: &str,
    args: &[String],
    accepted: RangeInclusive<usize>,
) -> Result<(), CommandError> {
    if accepted.contains(&args.len()) {
        return Ok(());
    }

    let error = CommandError::BadRequest(format!("{} expects {}", command, usage));
    logger::warn(&format!(
        "Rejected {} with {} argument(s)",
        command,
        args.len()
    ));
    Err(error)
}
