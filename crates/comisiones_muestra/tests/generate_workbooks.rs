use std::path::Path;

use calamine::{Data, Reader, Xlsx, open_workbook};
use comisiones_io_xlsx::render_decimal_grouped;
use comisiones_muestra::conf::{
    C_FILE_CLIENTS, C_FILE_INVOICES, C_FILE_ORDERS, C_FILE_SHOWROOMS, C_SHEET_CLIENTS,
    C_SHEET_INVOICES, C_SHEET_ORDERS, C_SHEET_SHOWROOMS,
};
use comisiones_muestra::data::INVOICES;
use comisiones_muestra::{SpecGenerateOptions, build_all, generate_all};

fn read_sheet(path: &Path, sheet_name: &str) -> Vec<Vec<Data>> {
    let mut workbook: Xlsx<_> = open_workbook(path).unwrap();
    let range = workbook.worksheet_range(sheet_name).unwrap();
    range.rows().map(|row| row.to_vec()).collect()
}

fn text(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.clone(),
        Data::Empty => String::new(),
        other => panic!("expected text cell, got {other:?}"),
    }
}

fn find_row<'a>(rows: &'a [Vec<Data>], number: &str) -> &'a [Data] {
    rows.iter()
        .find(|row| matches!(row.first(), Some(Data::String(s)) if s == number))
        .unwrap_or_else(|| panic!("row {number} not found"))
}

#[test]
fn writes_four_workbooks_with_expected_row_counts() {
    let dir = tempfile::tempdir().unwrap();
    let options = SpecGenerateOptions {
        dir_out: dir.path().join("excel_muestra"),
    };

    let report = generate_all(&options).unwrap();
    assert_eq!(report.files.len(), 4);

    for (file_name, sheet_name, n_rows) in [
        (C_FILE_SHOWROOMS, C_SHEET_SHOWROOMS, 1 + 5),
        (C_FILE_CLIENTS, C_SHEET_CLIENTS, 1 + 10),
        (C_FILE_ORDERS, C_SHEET_ORDERS, 1 + 15),
        (C_FILE_INVOICES, C_SHEET_INVOICES, 1 + 16 + 5 + 1 + 6),
    ] {
        let file = report.find(file_name).unwrap();
        assert_eq!(file.path, options.dir_out.join(file_name));
        assert_eq!(file.report.n_rows_total(), n_rows, "{file_name}");

        let rows = read_sheet(&file.path, sheet_name);
        assert_eq!(rows.len(), n_rows, "{file_name}");
    }
}

#[test]
fn invoice_sheet_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let options = SpecGenerateOptions {
        dir_out: dir.path().to_path_buf(),
    };
    let report = generate_all(&options).unwrap();
    let file = report.find(C_FILE_INVOICES).unwrap();
    let rows = read_sheet(&file.path, C_SHEET_INVOICES);

    let header: Vec<String> = rows[0].iter().map(text).collect();
    assert_eq!(
        header,
        vec![
            "Número",
            "Cliente",
            "Pedidos",
            "Fecha",
            "Vencimiento",
            "Moneda",
            "Importe",
            "FacturasAbonadas"
        ]
    );

    let abn = find_row(&rows, "ABN-2025-001");
    assert_eq!(text(&abn[5]), "EUR");
    assert_eq!(abn[6], Data::Float(2000.0));
    assert_eq!(text(&abn[7]), "FAC-2025-001");
    assert_eq!(text(&abn[2]), "");

    let fac = find_row(&rows, "FAC-2025-016");
    assert_eq!(text(&fac[2]), "PED-2025-005, PED-2025-006");
    assert_eq!(text(&fac[7]), "");
    assert_eq!(text(&fac[3]), "2025-04-20");

    // Blank separator, then the notes block in column A.
    assert!(rows[22].iter().all(|cell| *cell == Data::Empty));
    assert_eq!(text(&rows[23][0]), "NOTAS:");
    assert!(text(&rows[28][0]).starts_with("- Formato: Número | Cliente"));

    assert_eq!(file.report.n_rows_highlighted, 5);
}

#[test]
fn column_widths_follow_longest_content_capped() {
    let dir = tempfile::tempdir().unwrap();
    let options = SpecGenerateOptions {
        dir_out: dir.path().to_path_buf(),
    };
    let report = generate_all(&options).unwrap();

    for book in build_all().unwrap() {
        let file = report.find(book.file_name).unwrap();
        let widths = &file.report.widths_by_col;
        assert_eq!(widths.len(), book.df.width());

        for (n_idx_col, col) in book.df.get_columns().iter().enumerate() {
            let mut n_len_max = col.name().chars().count();
            for n_idx_row in 0..book.df.height() {
                let n_len = match col.get(n_idx_row).unwrap() {
                    polars::prelude::AnyValue::Float64(val) => render_decimal_grouped(val).len(),
                    polars::prelude::AnyValue::String(val) => val.chars().count(),
                    other => panic!("unexpected value {other:?}"),
                };
                n_len_max = n_len_max.max(n_len);
            }
            assert!(widths[n_idx_col] <= 35);
            assert_eq!(widths[n_idx_col], usize::min(n_len_max + 4, 35));
        }
    }
}

#[test]
fn rerun_overwrites_with_identical_cells() {
    let dir = tempfile::tempdir().unwrap();
    let options = SpecGenerateOptions {
        dir_out: dir.path().to_path_buf(),
    };

    let report_first = generate_all(&options).unwrap();
    let l_cells_first: Vec<_> = report_first
        .files
        .iter()
        .map(|file| read_sheet(&file.path, &file.report.sheet_name))
        .collect();

    let report_second = generate_all(&options).unwrap();
    let l_cells_second: Vec<_> = report_second
        .files
        .iter()
        .map(|file| read_sheet(&file.path, &file.report.sheet_name))
        .collect();

    assert_eq!(l_cells_first, l_cells_second);
    assert_eq!(report_first, report_second);
}

#[test]
fn highlighted_rows_match_credit_notes() {
    let dir = tempfile::tempdir().unwrap();
    let options = SpecGenerateOptions {
        dir_out: dir.path().to_path_buf(),
    };
    let report = generate_all(&options).unwrap();

    let n_credit_notes = INVOICES.iter().filter(|inv| inv.is_credit_note()).count();
    assert_eq!(
        report.find(C_FILE_INVOICES).unwrap().report.n_rows_highlighted,
        n_credit_notes
    );
    for file_name in [C_FILE_SHOWROOMS, C_FILE_CLIENTS, C_FILE_ORDERS] {
        assert_eq!(report.find(file_name).unwrap().report.n_rows_highlighted, 0);
    }
}
