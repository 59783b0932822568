//! `comisiones_io_xlsx` v1:
//! XLSX writer kernel for the commissions sample workbooks.
//!
//! - `conf`   : Excel limits, palette and default format presets
//! - `spec`   : specs/models/options/errors
//! - `util`   : pure helper functions
//! - `writer` : `rust_xlsxwriter`-backed sheet writer
pub mod conf;
pub mod spec;
pub mod util;
pub mod writer;

pub use conf::{
    C_COLOR_HEADER_BG, C_COLOR_HIGHLIGHT_BG, C_NUM_FORMAT_DECIMAL, EnumFmtKey,
    N_LEN_EXCEL_SHEET_NAME_MAX, N_NCOLS_EXCEL_MAX, N_NROWS_EXCEL_MAX, N_WIDTH_CELL_MAX,
    N_WIDTH_CELL_PADDING, derive_default_xlsx_formats, select_default_xlsx_format,
};
pub use spec::{
    EnumCellValue, SpecCellFormat, SpecColumnFormatPlan, SpecXlsxReport,
    SpecXlsxSheetWriteOptions, XlsxWriteError,
};
pub use util::{
    calculate_col_width, estimate_width_len, plan_row_highlight_mask, render_decimal_grouped,
    sanitize_sheet_name,
};
pub use writer::{XlsxWriter, plan_column_formats, plan_column_widths};
