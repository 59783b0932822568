//! Persisting sample workbooks to the output directory.

use std::fs;
use std::path::Path;

use comisiones_io_xlsx::XlsxWriter;
use log::{debug, info};

use crate::spec::{
    GenerateError, Result, SpecGenerateOptions, SpecGenerateReport, SpecGeneratedFile,
    SpecSampleWorkbook,
};
use crate::table::build_all;

/// Write `book` into `dir_out` (created when missing), overwriting any
/// previous file, and print the `✓ <file>` marker.
pub fn persist(book: &SpecSampleWorkbook, dir_out: &Path) -> Result<SpecGeneratedFile> {
    fs::create_dir_all(dir_out).map_err(|err| GenerateError::create_dir(dir_out, err))?;

    let path_file_out = dir_out.join(book.file_name);
    let mut writer = XlsxWriter::new(path_file_out.clone());
    writer
        .write_sheet_from_dataframe(&book.df, book.sheet_name, &book.derive_sheet_write_options())
        .map_err(|err| GenerateError::write(book.file_name, err))?;
    writer
        .close()
        .map_err(|err| GenerateError::write(book.file_name, err))?;

    let report = writer.report().pop().unwrap_or_default();
    debug!("{}: widths {:?}", book.file_name, report.widths_by_col);
    info!("wrote {} ({} rows)", writer.file_out(), report.n_rows_total());
    println!("✓ {}", book.file_name);

    Ok(SpecGeneratedFile {
        path: path_file_out,
        report,
    })
}

/// Build and persist all four workbooks in order; stops at the first failure.
pub fn generate_all(options: &SpecGenerateOptions) -> Result<SpecGenerateReport> {
    let mut report = SpecGenerateReport::default();
    for book in build_all()? {
        report.files.push(persist(&book, &options.dir_out)?);
    }
    Ok(report)
}
