use crate::cli::commands::{print_diagnostics, warn_custom_thresholds};
use crate::cli::parser::Commands;
use crate::config::{Config, Overrides};
use crate::core::run_pipeline;
use crate::errors::AppResult;
use crate::export::ensure_writable;
use crate::models::Category;
use crate::ui::messages::{header, info, item, success};

/// Handle the `process` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Process {
        input,
        output,
        first_threshold,
        second_threshold,
        force,
    } = cmd
    {
        let overrides = Overrides {
            output: output.clone(),
            first_threshold: *first_threshold,
            second_threshold: *second_threshold,
            ..Overrides::from(input)
        };
        let pipeline = cfg.pipeline_config(&overrides)?;

        header(format!("Processing {}", pipeline.input_path.display()));
        info(format!(
            "Reading sheet '{}' from {} (headers on row {})",
            pipeline.sheet_name,
            pipeline.input_path.display(),
            pipeline.header_row + 1
        ));

        warn_custom_thresholds(&pipeline.thresholds);
        ensure_writable(&pipeline.input_path, &pipeline.output_path, *force)?;

        let run = run_pipeline(&pipeline)?;
        print_diagnostics(&run.table, &run.analysis);

        let totals = run.analysis.pivot.totals();
        success(format!(
            "{} day(s) summarized into '{}'",
            run.analysis.pivot.days.len(),
            crate::export::report::PIVOT_SHEET
        ));
        for cat in Category::ALL {
            item(format!("{}: {}", cat.label(), totals[cat.index()]));
        }
    }
    Ok(())
}
