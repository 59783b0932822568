//! Stateless helper utilities used by the XLSX writer kernel.

use std::collections::{BTreeMap, BTreeSet};

use crate::conf::{
    N_LEN_EXCEL_SHEET_NAME_MAX, N_NCOLS_EXCEL_MAX, N_NROWS_EXCEL_MAX, N_WIDTH_CELL_MAX,
    N_WIDTH_CELL_PADDING, TUP_EXCEL_ILLEGAL,
};
use crate::spec::{EnumCellValue, Result, XlsxWriteError};

////////////////////////////////////////////////////////////////////////////////
// #region CellValueConversion

/// Keep finite numbers; `NaN`/`Inf` become blank cells.
pub fn convert_number_cell(x: f64) -> EnumCellValue {
    if x.is_finite() {
        EnumCellValue::Number(x)
    } else {
        EnumCellValue::None
    }
}

/// Render a number as `#,##0.00` displays it (`12500` -> `12,500.00`).
pub fn render_decimal_grouped(x: f64) -> String {
    let c_fixed = format!("{:.2}", x.abs());
    let (c_int, c_frac) = c_fixed.split_once('.').unwrap_or((c_fixed.as_str(), "00"));

    let n_len_int = c_int.len();
    let mut c_grouped = String::with_capacity(n_len_int + n_len_int / 3);
    for (n_idx, chr) in c_int.chars().enumerate() {
        if n_idx > 0 && (n_len_int - n_idx) % 3 == 0 {
            c_grouped.push(',');
        }
        c_grouped.push(chr);
    }

    let c_sign = if x < 0.0 && c_fixed.chars().any(|chr| chr != '0' && chr != '.') {
        "-"
    } else {
        ""
    };
    format!("{c_sign}{c_grouped}.{c_frac}")
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region DataFrameLikeUtils

/// Validate that `columns` has no duplicated names.
pub fn validate_unique_columns(columns: &[String]) -> Result<()> {
    if columns.len() == columns.iter().collect::<BTreeSet<_>>().len() {
        return Ok(());
    }

    let mut dict_pos: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
    for (n_idx, c_name) in columns.iter().enumerate() {
        dict_pos.entry(c_name).or_default().push(n_idx);
    }

    let c_msg = dict_pos
        .iter()
        .filter_map(|(c_name, l_pos)| {
            if l_pos.len() > 1 {
                Some(format!(
                    "{c_name:?} x{} at indices {:?}",
                    l_pos.len(),
                    l_pos
                ))
            } else {
                None
            }
        })
        .collect::<Vec<_>>()
        .join("; ");

    Err(XlsxWriteError::DuplicateColumns(c_msg))
}

/// Resolve a column name to its position.
pub fn select_index_from_ref(columns: &[String], ref_col: &str) -> Result<usize> {
    columns
        .iter()
        .position(|c_name| c_name == ref_col)
        .ok_or_else(|| XlsxWriteError::ColumnNotFound(ref_col.to_string()))
}

/// Reject tables that do not fit one worksheet.
pub fn validate_sheet_dimensions(height_total: usize, width: usize) -> Result<()> {
    if height_total > N_NROWS_EXCEL_MAX {
        return Err(XlsxWriteError::SheetTooLarge(format!(
            "{height_total} rows exceeds Excel limit {N_NROWS_EXCEL_MAX}"
        )));
    }
    if width > N_NCOLS_EXCEL_MAX {
        return Err(XlsxWriteError::SheetTooLarge(format!(
            "{width} columns exceeds Excel limit {N_NCOLS_EXCEL_MAX}"
        )));
    }
    Ok(())
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region RowHighlight

/// Mark rows whose marker value is non-empty.
pub fn plan_row_highlight_mask(markers: &[EnumCellValue]) -> Vec<bool> {
    markers.iter().map(|value| !value.is_empty()).collect()
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region SheetNormalization

/// Replace invalid chars and trim to valid Excel sheet name.
pub fn sanitize_sheet_name(name: &str, replace_to: &str) -> String {
    let mut c_name = name.to_string();
    for c_illegal in TUP_EXCEL_ILLEGAL {
        c_name = c_name.replace(c_illegal, replace_to);
    }
    c_name = c_name.trim().to_string();
    if c_name.is_empty() {
        c_name = "Sheet".to_string();
    }

    c_name.chars().take(N_LEN_EXCEL_SHEET_NAME_MAX).collect()
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Autofit

/// Estimate displayed width (characters) for one normalized cell value.
pub fn estimate_width_len(value: &EnumCellValue) -> usize {
    match value {
        EnumCellValue::None => 0,
        EnumCellValue::String(s) => s.chars().count(),
        EnumCellValue::Number(n) => render_decimal_grouped(*n).chars().count(),
    }
}

/// Final column width for the longest recorded content: padded, then capped.
pub fn calculate_col_width(n_width_recorded: usize) -> usize {
    usize::min(N_WIDTH_CELL_MAX, n_width_recorded + N_WIDTH_CELL_PADDING)
}

// #endregion
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_decimal_grouped_uses_thousands_and_two_decimals() {
        assert_eq!(render_decimal_grouped(12500.0), "12,500.00");
        assert_eq!(render_decimal_grouped(800.0), "800.00");
        assert_eq!(render_decimal_grouped(15.0), "15.00");
        assert_eq!(render_decimal_grouped(1234567.891), "1,234,567.89");
        assert_eq!(render_decimal_grouped(-2000.5), "-2,000.50");
        assert_eq!(render_decimal_grouped(0.0), "0.00");
        assert_eq!(render_decimal_grouped(-0.001), "0.00");
    }

    #[test]
    fn non_finite_numbers_become_blank() {
        assert_eq!(convert_number_cell(2000.0), EnumCellValue::Number(2000.0));
        assert_eq!(convert_number_cell(f64::NAN), EnumCellValue::None);
        assert_eq!(convert_number_cell(f64::NEG_INFINITY), EnumCellValue::None);
    }

    #[test]
    fn validate_unique_columns_reports_positions() {
        let cols = vec!["Nombre".to_string(), "Showroom".to_string(), "Nombre".to_string()];
        let err = validate_unique_columns(&cols).unwrap_err();
        assert!(err.to_string().contains("\"Nombre\" x2 at indices [0, 2]"));
        assert!(validate_unique_columns(&cols[..2]).is_ok());
    }

    #[test]
    fn select_index_from_ref_by_name() {
        let cols = vec!["Número".to_string(), "FacturasAbonadas".to_string()];
        assert_eq!(select_index_from_ref(&cols, "FacturasAbonadas").unwrap(), 1);
        assert!(matches!(
            select_index_from_ref(&cols, "Pedidos"),
            Err(XlsxWriteError::ColumnNotFound(_))
        ));
        assert!(select_index_from_ref(&cols, "0").is_err());
    }

    #[test]
    fn highlight_mask_marks_non_empty_markers() {
        let markers = vec![
            EnumCellValue::String(String::new()),
            EnumCellValue::String("FAC-2025-001".into()),
            EnumCellValue::None,
        ];
        assert_eq!(plan_row_highlight_mask(&markers), vec![false, true, false]);
    }

    #[test]
    fn sanitize_sheet_name_strips_illegal_chars() {
        assert_eq!(sanitize_sheet_name("Facturas/Abonos", "_"), "Facturas_Abonos");
        assert_eq!(sanitize_sheet_name("  ", "_"), "Sheet");
        assert_eq!(sanitize_sheet_name(&"x".repeat(40), "_").len(), 31);
    }

    #[test]
    fn col_width_pads_and_caps() {
        assert_eq!(calculate_col_width(6), 10);
        assert_eq!(calculate_col_width(31), 35);
        assert_eq!(calculate_col_width(120), 35);
        assert_eq!(calculate_col_width(0), 4);
    }

    #[test]
    fn width_counts_chars_not_bytes() {
        assert_eq!(estimate_width_len(&EnumCellValue::String("Comisión (%)".into())), 12);
        assert_eq!(estimate_width_len(&EnumCellValue::Number(22000.0)), 9);
        assert_eq!(estimate_width_len(&EnumCellValue::None), 0);
    }
}
