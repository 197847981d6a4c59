use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::export::{convert_workbook, ensure_writable};
use crate::ui::messages::info;

/// Handle the `convert` subcommand
pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Convert {
        input,
        output,
        force,
    } = cmd
    {
        ensure_writable(input, output, *force)?;
        let sheets = convert_workbook(input, output)?;
        info(format!("{sheets} sheet(s) copied"));
    }
    Ok(())
}
