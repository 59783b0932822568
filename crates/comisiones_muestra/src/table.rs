//! Builders turning the literal records into one `DataFrame` per workbook.

use polars::prelude::{Column, DataFrame, PolarsResult};

use crate::conf::{
    C_COL_CREDITED_INVOICES, C_FILE_CLIENTS, C_FILE_INVOICES, C_FILE_ORDERS, C_FILE_SHOWROOMS,
    C_SHEET_CLIENTS, C_SHEET_INVOICES, C_SHEET_ORDERS, C_SHEET_SHOWROOMS, L_COLS_CLIENTS,
    L_COLS_INVOICES, L_COLS_ORDERS, L_COLS_SHOWROOMS, derive_invoice_notes,
};
use crate::data::{CLIENTS, INVOICES, ORDERS, SHOWROOMS};
use crate::spec::SpecSampleWorkbook;

fn derive_text_column<T>(name: &str, records: &[T], field: impl Fn(&T) -> &'static str) -> Column {
    Column::new(name.into(), records.iter().map(field).collect::<Vec<_>>())
}

fn derive_number_column<T>(name: &str, records: &[T], field: impl Fn(&T) -> f64) -> Column {
    Column::new(name.into(), records.iter().map(field).collect::<Vec<f64>>())
}

fn derive_plain_workbook(
    file_name: &'static str,
    sheet_name: &'static str,
    df: DataFrame,
) -> SpecSampleWorkbook {
    SpecSampleWorkbook {
        file_name,
        sheet_name,
        df,
        col_highlight: None,
        notes: vec![],
    }
}

/// `Showrooms`: name and commission rate.
pub fn build_showrooms() -> PolarsResult<SpecSampleWorkbook> {
    let [c_name, c_commission] = L_COLS_SHOWROOMS;
    let df = DataFrame::new(vec![
        derive_text_column(c_name, SHOWROOMS, |s| s.name),
        derive_number_column(c_commission, SHOWROOMS, |s| s.commission_pct),
    ])?;
    Ok(derive_plain_workbook(C_FILE_SHOWROOMS, C_SHEET_SHOWROOMS, df))
}

/// `Clientes`: name and showroom.
pub fn build_clients() -> PolarsResult<SpecSampleWorkbook> {
    let [c_name, c_showroom] = L_COLS_CLIENTS;
    let df = DataFrame::new(vec![
        derive_text_column(c_name, CLIENTS, |c| c.name),
        derive_text_column(c_showroom, CLIENTS, |c| c.showroom),
    ])?;
    Ok(derive_plain_workbook(C_FILE_CLIENTS, C_SHEET_CLIENTS, df))
}

/// `Pedidos`: one row per order.
pub fn build_orders() -> PolarsResult<SpecSampleWorkbook> {
    let [c_number, c_client, c_date, c_currency, c_amount] = L_COLS_ORDERS;
    let df = DataFrame::new(vec![
        derive_text_column(c_number, ORDERS, |o| o.number),
        derive_text_column(c_client, ORDERS, |o| o.client),
        derive_text_column(c_date, ORDERS, |o| o.date),
        derive_text_column(c_currency, ORDERS, |o| o.currency),
        derive_number_column(c_amount, ORDERS, |o| o.amount),
    ])?;
    Ok(derive_plain_workbook(C_FILE_ORDERS, C_SHEET_ORDERS, df))
}

/// `Facturas`: invoices then credit-notes, credit-note rows highlighted, notes below.
pub fn build_invoices() -> PolarsResult<SpecSampleWorkbook> {
    let [
        c_number,
        c_client,
        c_orders,
        c_date_issue,
        c_date_due,
        c_currency,
        c_amount,
        c_credited,
    ] = L_COLS_INVOICES;
    let df = DataFrame::new(vec![
        derive_text_column(c_number, INVOICES, |i| i.number),
        derive_text_column(c_client, INVOICES, |i| i.client),
        derive_text_column(c_orders, INVOICES, |i| i.orders),
        derive_text_column(c_date_issue, INVOICES, |i| i.date_issue),
        derive_text_column(c_date_due, INVOICES, |i| i.date_due),
        derive_text_column(c_currency, INVOICES, |i| i.currency),
        derive_number_column(c_amount, INVOICES, |i| i.amount),
        derive_text_column(c_credited, INVOICES, |i| i.credited_invoices),
    ])?;
    Ok(SpecSampleWorkbook {
        file_name: C_FILE_INVOICES,
        sheet_name: C_SHEET_INVOICES,
        df,
        col_highlight: Some(C_COL_CREDITED_INVOICES),
        notes: derive_invoice_notes(),
    })
}

/// All four workbooks in write order.
pub fn build_all() -> PolarsResult<Vec<SpecSampleWorkbook>> {
    Ok(vec![
        build_showrooms()?,
        build_clients()?,
        build_orders()?,
        build_invoices()?,
    ])
}
