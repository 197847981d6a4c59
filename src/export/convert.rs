//! Legacy workbook → XLSX conversion, every sheet copied as-is.

use crate::errors::AppResult;
use crate::export::notify_export_success;
use crate::ui::messages::info;
use calamine::{Data, Reader, open_workbook_auto};
use rust_xlsxwriter::{Format, Workbook};
use std::path::Path;

/// Copy all sheets of `input` (xls, xlsx, xlsb, ods) into a new XLSX file.
///
/// Cell types are kept; date cells keep their serial value with a date format.
/// Returns the number of sheets written.
pub fn convert_workbook(input: &Path, output: &Path) -> AppResult<usize> {
    info(format!(
        "Converting {} → {}",
        input.display(),
        output.display()
    ));

    let mut source = open_workbook_auto(input)?;
    let mut target = Workbook::new();

    let datetime_fmt = Format::new().set_num_format("yyyy-mm-dd hh:mm:ss");
    let time_fmt = Format::new().set_num_format("hh:mm:ss");

    let names = source.sheet_names();
    for name in &names {
        let range = source.worksheet_range(name)?;
        let worksheet = target.add_worksheet();
        worksheet.set_name(name)?;

        let Some((start_row, start_col)) = range.start() else {
            continue;
        };

        for (r, row) in range.rows().enumerate() {
            let row_idx = start_row + r as u32;
            for (c, cell) in row.iter().enumerate() {
                let col_idx = (start_col as usize + c) as u16;
                match cell {
                    Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => {
                        worksheet.write_string(row_idx, col_idx, s)?;
                    }
                    Data::Int(i) => {
                        worksheet.write_number(row_idx, col_idx, *i as f64)?;
                    }
                    Data::Float(f) => {
                        worksheet.write_number(row_idx, col_idx, *f)?;
                    }
                    Data::Bool(b) => {
                        worksheet.write_boolean(row_idx, col_idx, *b)?;
                    }
                    Data::DateTime(dt) => {
                        let serial = dt.as_f64();
                        let fmt = if serial < 1.0 { &time_fmt } else { &datetime_fmt };
                        worksheet.write_number_with_format(row_idx, col_idx, serial, fmt)?;
                    }
                    Data::Error(_) | Data::Empty => {}
                }
            }
        }
    }

    target.save(output)?;

    notify_export_success("Conversion", output);
    Ok(names.len())
}
