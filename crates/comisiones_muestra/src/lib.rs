//! `comisiones_muestra`: sample workbooks for the commissions import.
//!
//! - `conf`     : file/sheet/column constants and note lines
//! - `data`     : literal showroom, client, order and invoice records
//! - `spec`     : workbook spec, run options/report, errors
//! - `table`    : `DataFrame` builders, one per workbook
//! - `generate` : persistence into the output directory
pub mod conf;
pub mod data;
pub mod generate;
pub mod spec;
pub mod table;

pub use generate::{generate_all, persist};
pub use spec::{
    GenerateError, SpecGenerateOptions, SpecGenerateReport, SpecGeneratedFile, SpecSampleWorkbook,
};
pub use table::{build_all, build_clients, build_invoices, build_orders, build_showrooms};
