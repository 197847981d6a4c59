// src/export/xlsx.rs

use crate::errors::AppResult;
use crate::export::notify_export_success;
use crate::export::report::{Report, ReportCell, ReportSheet};
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

const MAX_COLUMN_WIDTH: usize = 60;

/// Write every sheet of `report` to an XLSX file, with styled headers and
/// auto-sized columns.
pub fn write_report(report: &Report, path: &Path) -> AppResult<()> {
    info(format!("Writing report to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let styles = Styles::new();

    for sheet in &report.sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(&sheet.name)?;
        write_sheet(worksheet, sheet, &styles)?;
    }

    workbook.save(path)?;

    notify_export_success("XLSX report", path);
    Ok(())
}

struct Styles {
    header: Format,
    text: [Format; 2],
    number: [Format; 2],
}

impl Styles {
    fn new() -> Self {
        let header = Format::new()
            .set_bold()
            .set_font_color(Color::RGB(0xFFFFFF))
            .set_background_color(Color::RGB(0x2F75B5))
            .set_pattern(FormatPattern::Solid)
            .set_border(FormatBorder::Thin);

        let band = |bg: u32| {
            Format::new()
                .set_background_color(Color::RGB(bg))
                .set_pattern(FormatPattern::Solid)
                .set_border(FormatBorder::Thin)
        };

        Self {
            header,
            text: [band(0xEAF3FB), band(0xFFFFFF)],
            number: [
                band(0xEAF3FB).set_align(FormatAlign::Right),
                band(0xFFFFFF).set_align(FormatAlign::Right),
            ],
        }
    }
}

fn write_sheet(worksheet: &mut Worksheet, sheet: &ReportSheet, styles: &Styles) -> AppResult<()> {
    // ---------------------------
    // Header
    // ---------------------------
    for (col, header) in sheet.headers.iter().enumerate() {
        worksheet.write_with_format(0, col as u16, header.as_str(), &styles.header)?;
    }
    worksheet.set_freeze_panes(1, 0)?;

    let mut col_widths: Vec<usize> = sheet
        .headers
        .iter()
        .map(|h| UnicodeWidthStr::width(h.as_str()))
        .collect();

    // ---------------------------
    // Rows
    // ---------------------------
    for (row_index, cells) in sheet.rows.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band = row_index % 2;

        for (col, cell) in cells.iter().enumerate() {
            let c = col as u16;
            match cell {
                ReportCell::Text(s) => {
                    worksheet.write_with_format(row, c, s.as_str(), &styles.text[band])?;
                }
                ReportCell::Number(n) => {
                    worksheet.write_with_format(row, c, *n, &styles.number[band])?;
                }
                ReportCell::Empty => {
                    worksheet.write_blank(row, c, &styles.text[band])?;
                }
            }

            if let Some(w) = col_widths.get_mut(col) {
                *w = (*w).max(UnicodeWidthStr::width(cell.display().as_str()));
            }
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet.set_column_width(c as u16, (*w).min(MAX_COLUMN_WIDTH) as f64 + 2.0)?;
    }

    Ok(())
}
