//! Workbook renderer on top of `rust_xlsxwriter`.

use rust_xlsxwriter::{ColNum, Format, RowNum, Workbook, Worksheet};

use super::cell::CellValue;
use crate::error::{ServiceError, ServiceResult};

/// ## Summary
/// Serializes a header row plus data rows into a single-sheet `.xlsx` file
/// held in memory.
///
/// The header is bold and frozen. Empty cells are left blank.
///
/// ## Errors
/// Returns [`ServiceError::XlsxError`] if the sheet name is rejected, the data
/// exceeds worksheet limits, or the workbook cannot be serialized.
#[tracing::instrument(skip(header, rows), fields(rows = rows.len()))]
pub fn render_workbook<R: AsRef<[CellValue]>>(
    sheet_name: &str,
    header: &[&str],
    rows: &[R],
) -> ServiceResult<Vec<u8>> {
    let mut workbook = Workbook::new();
    let fmt_header = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name)?;

    for (col_idx, title) in header.iter().enumerate() {
        worksheet.write_string_with_format(0, cast_col_num(col_idx)?, *title, &fmt_header)?;
    }

    for (row_idx, row) in rows.iter().enumerate() {
        let row_num = cast_row_num(row_idx + 1)?;
        for (col_idx, value) in row.as_ref().iter().enumerate() {
            write_cell(worksheet, row_num, cast_col_num(col_idx)?, value)?;
        }
    }

    worksheet.set_freeze_panes(1, 0)?;
    worksheet.autofit();

    let buffer = workbook.save_to_buffer()?;
    tracing::debug!(bytes = buffer.len(), "Workbook rendered");

    Ok(buffer)
}

fn write_cell(
    worksheet: &mut Worksheet,
    row: RowNum,
    col: ColNum,
    value: &CellValue,
) -> ServiceResult<()> {
    match value {
        CellValue::Empty => {}
        CellValue::Text(val) => {
            worksheet.write_string(row, col, val)?;
        }
        CellValue::Integer(val) => {
            // f64 holds every i32 exactly; wider values stay lossless as text.
            if let Ok(small) = i32::try_from(*val) {
                worksheet.write_number(row, col, small)?;
            } else {
                worksheet.write_string(row, col, val.to_string())?;
            }
        }
    }
    Ok(())
}

fn cast_row_num(value: usize) -> ServiceResult<RowNum> {
    RowNum::try_from(value)
        .map_err(|_e| ServiceError::Render(format!("row index overflow: {value}")))
}

fn cast_col_num(value: usize) -> ServiceResult<ColNum> {
    ColNum::try_from(value)
        .map_err(|_e| ServiceError::Render(format!("column index overflow: {value}")))
}
