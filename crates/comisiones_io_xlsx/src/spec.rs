//! Shared XLSX specification models.

use polars::prelude::PolarsError;
use rust_xlsxwriter::XlsxError;
use thiserror::Error;

////////////////////////////////////////////////////////////////////////////////
// #region CellFormatSpecification

/// Cell format specification; every `None` field falls back to Excel defaults.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SpecCellFormat {
    /// Font size in points.
    pub font_size: Option<i64>,
    /// Bold style.
    pub bold: Option<bool>,
    /// Italic style.
    pub italic: Option<bool>,
    /// Horizontal alignment.
    pub align: Option<String>,
    /// Border style for all sides.
    pub border: Option<i64>,

    /// Number format code.
    pub num_format: Option<String>,
    /// Background fill color (solid pattern).
    pub bg_color: Option<String>,
    /// Font color.
    pub font_color: Option<String>,
}

/// Normalized cell value during conversion/write pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum EnumCellValue {
    /// Missing/blank value.
    None,
    /// Text value.
    String(String),
    /// Numeric value.
    Number(f64),
}

impl EnumCellValue {
    /// `true` for blanks and empty strings.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::None => true,
            Self::String(s) => s.is_empty(),
            Self::Number(_) => false,
        }
    }
}

impl SpecCellFormat {
    /// Return a new format by overlaying `patch` onto `self`.
    pub fn with_(&self, patch: SpecCellFormat) -> SpecCellFormat {
        self.merge(&patch)
    }

    /// Merge two formats with right-side non-`None` overwrite semantics.
    pub fn merge(&self, other: &SpecCellFormat) -> SpecCellFormat {
        SpecCellFormat {
            font_size: other.font_size.or(self.font_size),
            bold: other.bold.or(self.bold),
            italic: other.italic.or(self.italic),
            align: other.align.clone().or_else(|| self.align.clone()),
            border: other.border.or(self.border),
            num_format: other.num_format.clone().or_else(|| self.num_format.clone()),
            bg_color: other.bg_color.clone().or_else(|| self.bg_color.clone()),
            font_color: other.font_color.clone().or_else(|| self.font_color.clone()),
        }
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region ColumnFormatSpecification

/// Planned formats by column for the body rows of one sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecColumnFormatPlan {
    /// Format for plain rows.
    pub fmts_by_col: Vec<SpecCellFormat>,
    /// Format for highlighted rows (plain format with highlight patch).
    pub fmts_highlight_by_col: Vec<SpecCellFormat>,
}

impl SpecColumnFormatPlan {
    /// Pick the format of one body cell.
    pub fn select(&self, col_idx: usize, if_highlight: bool) -> &SpecCellFormat {
        if if_highlight {
            &self.fmts_highlight_by_col[col_idx]
        } else {
            &self.fmts_by_col[col_idx]
        }
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region WriteOptions

/// Per-sheet call options.
#[derive(Default, Debug, Clone)]
pub struct SpecXlsxSheetWriteOptions {
    /// Column (by name) whose non-empty value marks a row as highlighted.
    pub col_highlight: Option<String>,
    /// Text lines written in column A after one blank separator row.
    pub notes: Vec<String>,
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region ReportSpecification

/// Per-sheet write report.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpecXlsxReport {
    /// Sanitized sheet name in the workbook.
    pub sheet_name: String,
    /// Header rows written (always 1).
    pub n_rows_header: usize,
    /// Body rows written.
    pub n_rows_body: usize,
    /// Body rows that received the highlight fill.
    pub n_rows_highlighted: usize,
    /// Blank separator plus note lines.
    pub n_rows_notes: usize,
    /// Final width per column.
    pub widths_by_col: Vec<usize>,
}

impl SpecXlsxReport {
    /// Total worksheet rows in use.
    pub fn n_rows_total(&self) -> usize {
        self.n_rows_header + self.n_rows_body + self.n_rows_notes
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Errors

/// Writer failures.
#[derive(Debug, Error)]
pub enum XlsxWriteError {
    #[error("xlsx write error: {0}")]
    Xlsx(#[from] XlsxError),

    #[error("dataframe access error: {0}")]
    Polars(#[from] PolarsError),

    #[error("Duplicate column names detected: {0}")]
    DuplicateColumns(String),

    #[error("Column not found: {0:?}")]
    ColumnNotFound(String),

    #[error("Sheet too large: {0}")]
    SheetTooLarge(String),

    #[error("index overflow: {0}")]
    IndexOverflow(usize),

    #[error("Cannot write after close().")]
    Closed,
}

pub type Result<T> = std::result::Result<T, XlsxWriteError>;

// #endregion
////////////////////////////////////////////////////////////////////////////////
