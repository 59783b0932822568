//! Workbook specs, run options/report and the generator error type.

use std::io;
use std::path::{Path, PathBuf};

use comisiones_io_xlsx::{SpecXlsxReport, SpecXlsxSheetWriteOptions, XlsxWriteError};
use polars::prelude::{DataFrame, PolarsError};
use thiserror::Error;

use crate::conf::{C_DIR_OUT_DEFAULT, C_ENV_DIR_OUT};

////////////////////////////////////////////////////////////////////////////////
// #region SampleWorkbook

/// One single-sheet sample workbook, ready to persist.
#[derive(Debug, Clone)]
pub struct SpecSampleWorkbook {
    /// File name inside the output directory.
    pub file_name: &'static str,
    /// Sheet name.
    pub sheet_name: &'static str,
    /// Body rows; column names become the header row.
    pub df: DataFrame,
    /// Column whose non-empty value highlights the row.
    pub col_highlight: Option<&'static str>,
    /// Lines written after a blank row below the table.
    pub notes: Vec<String>,
}

impl SpecSampleWorkbook {
    /// Presentation options handed to the sheet writer.
    pub fn derive_sheet_write_options(&self) -> SpecXlsxSheetWriteOptions {
        SpecXlsxSheetWriteOptions {
            col_highlight: self.col_highlight.map(ToString::to_string),
            notes: self.notes.clone(),
        }
    }

    /// Rows the sheet occupies: header, body, and blank + notes when present.
    pub fn n_rows_expected(&self) -> usize {
        let n_rows_notes = if self.notes.is_empty() {
            0
        } else {
            self.notes.len() + 1
        };
        1 + self.df.height() + n_rows_notes
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region RunOptionsAndReport

/// Run options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecGenerateOptions {
    /// Directory receiving the workbooks; created when missing.
    pub dir_out: PathBuf,
}

impl Default for SpecGenerateOptions {
    fn default() -> Self {
        Self {
            dir_out: Path::new(env!("CARGO_MANIFEST_DIR")).join(C_DIR_OUT_DEFAULT),
        }
    }
}

impl SpecGenerateOptions {
    /// Defaults, with `COMISIONES_MUESTRA_DIR` overriding the output directory.
    pub fn from_env() -> Self {
        Self::from_dir_override(std::env::var_os(C_ENV_DIR_OUT).map(PathBuf::from))
    }

    fn from_dir_override(dir_out: Option<PathBuf>) -> Self {
        match dir_out {
            Some(dir) if !dir.as_os_str().is_empty() => Self { dir_out: dir },
            _ => Self::default(),
        }
    }
}

/// One written file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecGeneratedFile {
    pub path: PathBuf,
    pub report: SpecXlsxReport,
}

/// Result of a full run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpecGenerateReport {
    pub files: Vec<SpecGeneratedFile>,
}

impl SpecGenerateReport {
    /// Look up a written file by its file name.
    pub fn find(&self, file_name: &str) -> Option<&SpecGeneratedFile> {
        self.files
            .iter()
            .find(|file| file.path.file_name().is_some_and(|name| name == file_name))
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Errors

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("failed to create output directory {}: {source}", path.display())]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("failed to build sample table: {0}")]
    Table(#[from] PolarsError),

    #[error("failed to write {file}: {source}")]
    Write {
        file: String,
        source: XlsxWriteError,
    },
}

impl GenerateError {
    pub(crate) fn create_dir(path: &Path, source: io::Error) -> Self {
        Self::CreateDir {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn write(file: &str, source: XlsxWriteError) -> Self {
        Self::Write {
            file: file.to_string(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, GenerateError>;

// #endregion
////////////////////////////////////////////////////////////////////////////////
