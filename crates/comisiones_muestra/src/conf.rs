//! File, sheet and column constants for the sample workbooks.

/// Default output directory name, created next to the crate sources.
pub const C_DIR_OUT_DEFAULT: &str = "excel_muestra";
/// Environment variable overriding the output directory.
pub const C_ENV_DIR_OUT: &str = "COMISIONES_MUESTRA_DIR";

pub const C_FILE_SHOWROOMS: &str = "Showrooms_muestra.xlsx";
pub const C_FILE_CLIENTS: &str = "Clientes_muestra.xlsx";
pub const C_FILE_ORDERS: &str = "Pedidos_muestra.xlsx";
pub const C_FILE_INVOICES: &str = "Facturas_con_abonos_muestra.xlsx";

pub const C_SHEET_SHOWROOMS: &str = "Showrooms";
pub const C_SHEET_CLIENTS: &str = "Clientes";
pub const C_SHEET_ORDERS: &str = "Pedidos";
pub const C_SHEET_INVOICES: &str = "Facturas";

/// Header labels, in import order. The importer matches them verbatim.
pub const L_COLS_SHOWROOMS: [&str; 2] = ["Nombre", "Comisión (%)"];
pub const L_COLS_CLIENTS: [&str; 2] = ["Nombre", "Showroom"];
pub const L_COLS_ORDERS: [&str; 5] = ["Número", "Cliente", "Fecha", "Moneda", "Importe"];
pub const L_COLS_INVOICES: [&str; 8] = [
    "Número",
    "Cliente",
    "Pedidos",
    "Fecha",
    "Vencimiento",
    "Moneda",
    "Importe",
    "FacturasAbonadas",
];

/// Column whose non-empty value marks a credit-note row.
pub const C_COL_CREDITED_INVOICES: &str = "FacturasAbonadas";

/// Fixed lines of the invoice notes block; the layout line is appended after them.
pub const L_NOTES_INVOICES: [&str; 5] = [
    "NOTAS:",
    "- Las filas en rojo son abonos/rectificativas. El importe se puede poner en positivo; el sistema lo convierte a negativo.",
    "- La columna \"FacturasAbonadas\" indica qué factura(s) se abonan. Se pueden separar con comas.",
    "- La columna \"Pedidos\" no aplica a abonos (se ignora si hay FacturasAbonadas).",
    // Added over the earlier four-bullet fixture notes; keeps the block at six lines.
    "- Las fechas (Fecha, Vencimiento) van en formato AAAA-MM-DD.",
];

/// Notes block for the invoice sheet, ending with the column layout line.
pub fn derive_invoice_notes() -> Vec<String> {
    let mut l_notes: Vec<String> = L_NOTES_INVOICES.iter().map(ToString::to_string).collect();
    l_notes.push(format!("- Formato: {}", L_COLS_INVOICES.join(" | ")));
    l_notes
}
