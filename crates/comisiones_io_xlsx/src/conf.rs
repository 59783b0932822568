//! XLSX constants and default preset factories.

use std::collections::BTreeMap;

use crate::spec::SpecCellFormat;

/// Excel worksheet maximum row count.
pub const N_NROWS_EXCEL_MAX: usize = 1_048_576;
/// Excel worksheet maximum column count.
pub const N_NCOLS_EXCEL_MAX: usize = 16_384;
/// Excel sheet name maximum length.
pub const N_LEN_EXCEL_SHEET_NAME_MAX: usize = 31;
/// Characters added to the longest cell content of a column.
pub const N_WIDTH_CELL_PADDING: usize = 4;
/// Column width cap (character units).
pub const N_WIDTH_CELL_MAX: usize = 35;
/// Characters not allowed in sheet names.
pub const TUP_EXCEL_ILLEGAL: [&str; 7] = ["*", ":", "?", "/", "\\", "[", "]"];

/// Header fill (solid blue).
pub const C_COLOR_HEADER_BG: &str = "#2563EB";
/// Header font color.
pub const C_COLOR_HEADER_FONT: &str = "#FFFFFF";
/// Fill for highlighted body rows (credit-notes).
pub const C_COLOR_HIGHLIGHT_BG: &str = "#FEE2E2";
/// Font color of trailing note rows.
pub const C_COLOR_NOTE_FONT: &str = "#666666";
/// Two-decimal, thousands-grouped number format.
pub const C_NUM_FORMAT_DECIMAL: &str = "#,##0.00";

/// Canonical format preset keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumFmtKey {
    /// Generic text cell format.
    Text,
    /// Decimal number format.
    Decimal,
    /// Header cell format.
    Header,
    /// Patch merged over body cells of highlighted rows.
    Highlight,
    /// Trailing note row format.
    Note,
}

impl EnumFmtKey {
    /// Preset map key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Decimal => "decimal",
            Self::Header => "header",
            Self::Highlight => "highlight",
            Self::Note => "note",
        }
    }
}

/// Build default named format presets used by [`crate::writer::XlsxWriter`].
pub fn derive_default_xlsx_formats() -> BTreeMap<String, SpecCellFormat> {
    let cfg_base_fmt_spec = SpecCellFormat {
        font_size: Some(11),
        border: Some(1),
        ..Default::default()
    };

    let mut dict_fmt = BTreeMap::new();
    dict_fmt.insert(
        EnumFmtKey::Text.as_str().to_string(),
        cfg_base_fmt_spec.clone(),
    );
    dict_fmt.insert(
        EnumFmtKey::Decimal.as_str().to_string(),
        cfg_base_fmt_spec.with_(SpecCellFormat {
            num_format: Some(C_NUM_FORMAT_DECIMAL.to_string()),
            ..Default::default()
        }),
    );
    dict_fmt.insert(
        EnumFmtKey::Header.as_str().to_string(),
        cfg_base_fmt_spec.with_(SpecCellFormat {
            bold: Some(true),
            align: Some("center".to_string()),
            bg_color: Some(C_COLOR_HEADER_BG.to_string()),
            font_color: Some(C_COLOR_HEADER_FONT.to_string()),
            ..Default::default()
        }),
    );
    dict_fmt.insert(
        EnumFmtKey::Highlight.as_str().to_string(),
        SpecCellFormat {
            bg_color: Some(C_COLOR_HIGHLIGHT_BG.to_string()),
            ..Default::default()
        },
    );
    dict_fmt.insert(
        EnumFmtKey::Note.as_str().to_string(),
        SpecCellFormat {
            font_size: Some(10),
            italic: Some(true),
            font_color: Some(C_COLOR_NOTE_FONT.to_string()),
            ..Default::default()
        },
    );

    dict_fmt
}

/// Look up one preset by key.
pub fn select_default_xlsx_format(key: EnumFmtKey) -> SpecCellFormat {
    derive_default_xlsx_formats()
        .remove(key.as_str())
        .unwrap_or_default()
}
