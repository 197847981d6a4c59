use crate::cli::commands::{print_diagnostics, warn_custom_thresholds};
use crate::cli::parser::Commands;
use crate::config::{Config, Overrides};
use crate::core::analyze;
use crate::errors::AppResult;
use crate::import::load_table;
use crate::models::Category;
use crate::ui::messages::header;
use crate::utils::table::{Column, Table};

/// Handle the `summary` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary { input, json } = cmd {
        let pipeline = cfg.pipeline_config(&Overrides::from(input))?;

        let table = load_table(&pipeline.input_path, &pipeline.sheet_name, pipeline.header_row)?;
        let analysis = analyze(&table, &pipeline.thresholds)?;

        if *json {
            println!("{}", serde_json::to_string_pretty(&analysis.pivot.rows())?);
            return Ok(());
        }

        header(format!("Day summary of sheet '{}'", table.sheet_name));
        warn_custom_thresholds(&pipeline.thresholds);
        print_diagnostics(&table, &analysis);
        println!();

        let mut columns = vec![Column::left("DAY")];
        columns.extend(Category::ALL.iter().map(|c| Column::right(c.label())));
        columns.push(Column::right("TOTAL"));
        let mut out = Table::new(columns);

        for d in &analysis.pivot.days {
            let mut row = vec![d.day.to_string()];
            row.extend(d.counts.iter().map(usize::to_string));
            row.push(d.total().to_string());
            out.add_row(row);
        }

        let totals = analysis.pivot.totals();
        let mut last = vec!["Σ".to_string()];
        last.extend(totals.iter().map(usize::to_string));
        last.push(totals.iter().sum::<usize>().to_string());
        out.add_row(last);

        print!("{}", out.render());
    }
    Ok(())
}
