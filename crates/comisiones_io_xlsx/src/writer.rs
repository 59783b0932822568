//! XLSX writer kernel that turns one `DataFrame` per sheet into styled workbook output.

use std::collections::BTreeSet;
use std::path::PathBuf;

use log::debug;
use polars::prelude::{AnyValue, DataFrame};
use rust_xlsxwriter::{Format, FormatAlign, FormatBorder, Workbook, Worksheet};

use crate::conf::{EnumFmtKey, derive_default_xlsx_formats};
use crate::spec::{
    EnumCellValue, Result, SpecCellFormat, SpecColumnFormatPlan, SpecXlsxReport,
    SpecXlsxSheetWriteOptions, XlsxWriteError,
};
use crate::util::{
    calculate_col_width, convert_number_cell, estimate_width_len, plan_row_highlight_mask,
    sanitize_sheet_name, select_index_from_ref, validate_sheet_dimensions,
    validate_unique_columns,
};

pub struct SpecColumnFormatPlanOptions<'a> {
    /// Number of columns in the sheet.
    pub width_data: usize,
    /// Numeric column indices.
    pub cols_idx_numeric: &'a [usize],
    /// Base text format.
    pub fmt_text: &'a SpecCellFormat,
    /// Base decimal format.
    pub fmt_decimal: &'a SpecCellFormat,
    /// Patch for highlighted rows.
    pub fmt_highlight: &'a SpecCellFormat,
}

/// Stateful workbook writer.
pub struct XlsxWriter {
    path_file_out: PathBuf,
    workbook: Workbook,
    fmt_text: SpecCellFormat,
    fmt_decimal: SpecCellFormat,
    fmt_header: SpecCellFormat,
    fmt_highlight: SpecCellFormat,
    fmt_note: SpecCellFormat,
    l_reports: Vec<SpecXlsxReport>,
    if_closed: bool,
}

impl XlsxWriter {
    /// Create writer bound to output path, using [`derive_default_xlsx_formats`] presets.
    ///
    /// The workbook is buffered in memory until [`Self::close`] is called.
    pub fn new(path_file_out: PathBuf) -> Self {
        let mut dict_fmt = derive_default_xlsx_formats();
        let mut take = |key: EnumFmtKey| dict_fmt.remove(key.as_str()).unwrap_or_default();
        Self {
            path_file_out,
            workbook: Workbook::new(),
            fmt_text: take(EnumFmtKey::Text),
            fmt_decimal: take(EnumFmtKey::Decimal),
            fmt_header: take(EnumFmtKey::Header),
            fmt_highlight: take(EnumFmtKey::Highlight),
            fmt_note: take(EnumFmtKey::Note),
            l_reports: Vec::new(),
            if_closed: false,
        }
    }

    /// Return output file path as string.
    pub fn file_out(&self) -> String {
        self.path_file_out.to_string_lossy().to_string()
    }

    /// Return immutable snapshot of per-sheet write reports.
    pub fn report(&self) -> Vec<SpecXlsxReport> {
        self.l_reports.clone()
    }

    /// Flush workbook to disk, replacing any existing file. Idempotent.
    pub fn close(&mut self) -> Result<()> {
        if self.if_closed {
            return Ok(());
        }
        self.workbook.save(&self.path_file_out)?;
        self.if_closed = true;
        debug!("saved workbook {}", self.path_file_out.display());
        Ok(())
    }

    /// Write one sheet: header row, styled body, autofit widths, then notes.
    pub fn write_sheet_from_dataframe(
        &mut self,
        df_data: &DataFrame,
        sheet_name: &str,
        options: &SpecXlsxSheetWriteOptions,
    ) -> Result<()> {
        if self.if_closed {
            return Err(XlsxWriteError::Closed);
        }
        self.write_sheet(df_data, sheet_name, options)
    }

    fn write_sheet(
        &mut self,
        df_data: &DataFrame,
        sheet_name: &str,
        options: &SpecXlsxSheetWriteOptions,
    ) -> Result<()> {
        let l_colnames_df: Vec<String> = df_data
            .get_column_names_str()
            .into_iter()
            .map(ToString::to_string)
            .collect();
        validate_unique_columns(&l_colnames_df)?;

        let n_width_df = l_colnames_df.len();
        let n_height_df = df_data.height();
        let n_rows_notes = if options.notes.is_empty() {
            0
        } else {
            options.notes.len() + 1
        };
        validate_sheet_dimensions(1 + n_height_df + n_rows_notes, n_width_df)?;

        let n_idx_col_highlight = options
            .col_highlight
            .as_deref()
            .map(|ref_col| select_index_from_ref(&l_colnames_df, ref_col))
            .transpose()?;

        let l_cols_idx_numeric = derive_numeric_column_indices(df_data);
        let plan_col_formats = plan_column_formats(SpecColumnFormatPlanOptions {
            width_data: n_width_df,
            cols_idx_numeric: &l_cols_idx_numeric,
            fmt_text: &self.fmt_text,
            fmt_decimal: &self.fmt_decimal,
            fmt_highlight: &self.fmt_highlight,
        });

        let mut l_grid_body = Vec::with_capacity(n_height_df);
        for n_idx_row in 0..n_height_df {
            let mut l_row = Vec::with_capacity(n_width_df);
            for col in df_data.get_columns() {
                l_row.push(derive_cell_value_from_any_value(col.get(n_idx_row)?));
            }
            l_grid_body.push(l_row);
        }

        let l_mask_highlight = match n_idx_col_highlight {
            Some(n_idx_col) => plan_row_highlight_mask(
                &l_grid_body
                    .iter()
                    .map(|row| row[n_idx_col].clone())
                    .collect::<Vec<_>>(),
            ),
            None => vec![false; n_height_df],
        };

        let l_widths_by_col = plan_column_widths(&l_colnames_df, &l_grid_body);

        let fmt_header = derive_rust_xlsx_format(&self.fmt_header);
        let fmt_note = derive_rust_xlsx_format(&self.fmt_note);
        let l_fmt_body_by_col: Vec<Format> = plan_col_formats
            .fmts_by_col
            .iter()
            .map(derive_rust_xlsx_format)
            .collect();
        let l_fmt_highlight_by_col: Vec<Format> = plan_col_formats
            .fmts_highlight_by_col
            .iter()
            .map(derive_rust_xlsx_format)
            .collect();

        let sheet_name_clean = sanitize_sheet_name(sheet_name, "_");
        let worksheet = self.workbook.add_worksheet();
        worksheet.set_name(&sheet_name_clean)?;

        write_header(worksheet, &l_colnames_df, &fmt_header)?;

        for (n_idx_row, l_row) in l_grid_body.iter().enumerate() {
            let l_fmts = if l_mask_highlight[n_idx_row] {
                &l_fmt_highlight_by_col
            } else {
                &l_fmt_body_by_col
            };
            for (n_idx_col, value) in l_row.iter().enumerate() {
                write_cell_with_format(
                    worksheet,
                    1 + n_idx_row,
                    n_idx_col,
                    value,
                    &l_fmts[n_idx_col],
                )?;
            }
        }

        for (n_idx_col, n_width) in l_widths_by_col.iter().enumerate() {
            worksheet.set_column_width(cast_col_num(n_idx_col)?, *n_width as f64)?;
        }

        // One blank separator row sits between the body and the notes.
        let n_row_notes_start = 1 + n_height_df + 1;
        for (n_idx_note, note) in options.notes.iter().enumerate() {
            worksheet.write_string_with_format(
                cast_row_num(n_row_notes_start + n_idx_note)?,
                0,
                note,
                &fmt_note,
            )?;
        }

        let report = SpecXlsxReport {
            sheet_name: sheet_name_clean,
            n_rows_header: 1,
            n_rows_body: n_height_df,
            n_rows_highlighted: l_mask_highlight.iter().filter(|if_hl| **if_hl).count(),
            n_rows_notes,
            widths_by_col: l_widths_by_col,
        };
        debug!(
            "wrote sheet {:?}: {} body rows, {} highlighted, {} note rows",
            report.sheet_name, report.n_rows_body, report.n_rows_highlighted, report.n_rows_notes
        );
        self.l_reports.push(report);
        Ok(())
    }
}

/// Build per-column plain/highlighted body formats.
pub fn plan_column_formats(options: SpecColumnFormatPlanOptions<'_>) -> SpecColumnFormatPlan {
    let SpecColumnFormatPlanOptions {
        width_data,
        cols_idx_numeric,
        fmt_text,
        fmt_decimal,
        fmt_highlight,
    } = options;

    let set_cols_idx_numeric: BTreeSet<usize> = cols_idx_numeric.iter().copied().collect();

    let mut fmts_by_col = Vec::with_capacity(width_data);
    let mut fmts_highlight_by_col = Vec::with_capacity(width_data);

    for col_idx in 0..width_data {
        let fmt_base = if set_cols_idx_numeric.contains(&col_idx) {
            fmt_decimal.clone()
        } else {
            fmt_text.clone()
        };

        fmts_highlight_by_col.push(fmt_base.merge(fmt_highlight));
        fmts_by_col.push(fmt_base);
    }

    SpecColumnFormatPlan {
        fmts_by_col,
        fmts_highlight_by_col,
    }
}

/// Final width per column from the header label and every body cell.
pub fn plan_column_widths(
    l_colnames: &[String],
    l_grid_body: &[Vec<EnumCellValue>],
) -> Vec<usize> {
    l_colnames
        .iter()
        .enumerate()
        .map(|(n_idx_col, c_name)| {
            let n_width_body = l_grid_body
                .iter()
                .map(|row| estimate_width_len(&row[n_idx_col]))
                .max()
                .unwrap_or(0);
            calculate_col_width(usize::max(c_name.chars().count(), n_width_body))
        })
        .collect()
}

fn derive_numeric_column_indices(df: &DataFrame) -> Vec<usize> {
    df.get_columns()
        .iter()
        .enumerate()
        .filter_map(|(n_idx, c_col)| {
            if c_col.dtype().is_numeric() {
                Some(n_idx)
            } else {
                None
            }
        })
        .collect()
}

fn derive_cell_value_from_any_value(value: AnyValue<'_>) -> EnumCellValue {
    match value {
        AnyValue::Null => EnumCellValue::None,
        AnyValue::String(val) => EnumCellValue::String(val.to_string()),
        AnyValue::StringOwned(val) => EnumCellValue::String(val.to_string()),
        AnyValue::Boolean(val) => {
            EnumCellValue::String(if val { "True" } else { "False" }.to_string())
        }
        AnyValue::UInt32(val) => EnumCellValue::Number(val as f64),
        AnyValue::UInt64(val) => EnumCellValue::Number(val as f64),
        AnyValue::Int32(val) => EnumCellValue::Number(val as f64),
        AnyValue::Int64(val) => EnumCellValue::Number(val as f64),
        AnyValue::Float32(val) => convert_number_cell(val as f64),
        AnyValue::Float64(val) => convert_number_cell(val),
        _ => EnumCellValue::String(value.to_string()),
    }
}

fn write_header(
    worksheet: &mut Worksheet,
    l_colnames: &[String],
    fmt_header: &Format,
) -> Result<()> {
    for (col_idx, cell_value) in l_colnames.iter().enumerate() {
        if cell_value.is_empty() {
            worksheet.write_blank(0, cast_col_num(col_idx)?, fmt_header)?;
        } else {
            worksheet.write_string_with_format(
                0,
                cast_col_num(col_idx)?,
                cell_value,
                fmt_header,
            )?;
        }
    }
    Ok(())
}

fn write_cell_with_format(
    worksheet: &mut Worksheet,
    row_idx: usize,
    col_idx: usize,
    value: &EnumCellValue,
    format: &Format,
) -> Result<()> {
    let n_row = cast_row_num(row_idx)?;
    let n_col = cast_col_num(col_idx)?;
    match value {
        EnumCellValue::None => {
            worksheet.write_blank(n_row, n_col, format)?;
        }
        EnumCellValue::String(val) if val.is_empty() => {
            worksheet.write_blank(n_row, n_col, format)?;
        }
        EnumCellValue::String(val) => {
            worksheet.write_string_with_format(n_row, n_col, val, format)?;
        }
        EnumCellValue::Number(val) => {
            worksheet.write_number_with_format(n_row, n_col, *val, format)?;
        }
    }
    Ok(())
}

/// Convert a format spec into a `rust_xlsxwriter` format.
pub fn derive_rust_xlsx_format(spec: &SpecCellFormat) -> Format {
    let mut format = Format::new();

    if let Some(val) = spec.font_size {
        format = format.set_font_size(val as f64);
    }
    if spec.bold.unwrap_or(false) {
        format = format.set_bold();
    }
    if spec.italic.unwrap_or(false) {
        format = format.set_italic();
    }
    if let Some(val) = &spec.align
        && let Some(align) = derive_format_align(val)
    {
        format = format.set_align(align);
    }

    if let Some(val) = &spec.num_format {
        format = format.set_num_format(val.clone());
    }
    if let Some(val) = &spec.bg_color {
        format = format.set_background_color(val.as_str());
    }
    if let Some(val) = &spec.font_color {
        format = format.set_font_color(val.as_str());
    }
    if let Some(val) = spec.border {
        format = format.set_border(derive_format_border(val));
    }

    format
}

fn derive_format_border(border: i64) -> FormatBorder {
    match border {
        1 => FormatBorder::Thin,
        2 => FormatBorder::Medium,
        5 => FormatBorder::Thick,
        _ => FormatBorder::None,
    }
}

fn derive_format_align(align: &str) -> Option<FormatAlign> {
    match align.trim().to_ascii_lowercase().as_str() {
        "general" => Some(FormatAlign::General),
        "left" => Some(FormatAlign::Left),
        "center" => Some(FormatAlign::Center),
        "right" => Some(FormatAlign::Right),
        _ => None,
    }
}

fn cast_row_num(value: usize) -> Result<u32> {
    u32::try_from(value).map_err(|_| XlsxWriteError::IndexOverflow(value))
}

fn cast_col_num(value: usize) -> Result<u16> {
    u16::try_from(value).map_err(|_| XlsxWriteError::IndexOverflow(value))
}
