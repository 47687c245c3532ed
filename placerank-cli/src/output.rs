//! JSON envelope output for query subcommands.

use std::io::Write;

use placerank_ranking::QueryOutcome;
use serde::Serialize;

use crate::CliError;

fn write_outcome<T>(writer: &mut dyn Write, outcome: &QueryOutcome<T>) -> Result<(), CliError>
where
    T: Serialize,
{
    let payload = serde_json::to_string_pretty(outcome).map_err(CliError::SerializeOutcome)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

/// Print the query result as a `QueryOutcome` envelope.
///
/// Every failure after argument parsing, from configuration and missing
/// inputs to catalogue errors, is printed as
/// `{"success": false, "message": ..., "results": []}` and then returned so
/// the process exits non-zero.
pub(crate) fn report<T>(
    writer: &mut dyn Write,
    result: Result<Vec<T>, CliError>,
) -> Result<(), CliError>
where
    T: Serialize,
{
    match result {
        Ok(results) => write_outcome(writer, &QueryOutcome::ok(results)),
        Err(err) => {
            write_outcome(writer, &QueryOutcome::<T>::failure(err.to_string()))?;
            Err(err)
        }
    }
}
