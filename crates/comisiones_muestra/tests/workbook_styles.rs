use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use comisiones_muestra::conf::C_FILE_INVOICES;
use comisiones_muestra::{SpecGenerateOptions, generate_all};
use roxmltree::{Document, Node};

const C_FILL_CREDIT_NOTE: &str = "FFFEE2E2";
/// Built-in Excel id for `#,##0.00`.
const N_NUM_FMT_BUILTIN_DECIMAL: &str = "4";

fn read_part(path: &Path, name: &str) -> String {
    let mut archive = zip::ZipArchive::new(File::open(path).unwrap()).unwrap();
    let mut c_xml = String::new();
    archive
        .by_name(name)
        .unwrap()
        .read_to_string(&mut c_xml)
        .unwrap();
    c_xml
}

fn children<'a, 'i>(node: Node<'a, 'i>, tag: &str) -> Vec<Node<'a, 'i>> {
    node.children().filter(|n| n.has_tag_name(tag)).collect()
}

fn find<'a, 'i>(doc: &'a Document<'i>, tag: &str) -> Node<'a, 'i> {
    doc.descendants()
        .find(|n| n.has_tag_name(tag))
        .unwrap_or_else(|| panic!("<{tag}> not found"))
}

/// Resolved style of one cell `xf`.
#[derive(Debug)]
struct CellStyle {
    fill_rgb: Option<String>,
    num_format: Option<String>,
}

fn parse_styles(c_xml: &str) -> Vec<CellStyle> {
    let doc = Document::parse(c_xml).unwrap();

    let l_fills: Vec<Option<String>> = children(find(&doc, "fills"), "fill")
        .into_iter()
        .map(|fill| {
            fill.descendants()
                .find(|n| n.has_tag_name("fgColor"))
                .and_then(|n| n.attribute("rgb"))
                .map(ToString::to_string)
        })
        .collect();

    let dict_num_fmts: BTreeMap<String, String> = doc
        .descendants()
        .filter(|n| n.has_tag_name("numFmt"))
        .map(|n| {
            (
                n.attribute("numFmtId").unwrap().to_string(),
                n.attribute("formatCode").unwrap().to_string(),
            )
        })
        .collect();

    children(find(&doc, "cellXfs"), "xf")
        .into_iter()
        .map(|xf| {
            let n_fill: usize = xf.attribute("fillId").unwrap_or("0").parse().unwrap();
            let c_num_fmt_id = xf.attribute("numFmtId").unwrap_or("0");
            let num_format = match dict_num_fmts.get(c_num_fmt_id) {
                Some(code) => Some(code.clone()),
                None if c_num_fmt_id == N_NUM_FMT_BUILTIN_DECIMAL => {
                    Some("#,##0.00".to_string())
                }
                None => None,
            };
            CellStyle {
                fill_rgb: l_fills[n_fill].clone(),
                num_format,
            }
        })
        .collect()
}

/// Style index per cell reference (`"G18"` -> xf index).
fn parse_cell_styles(c_xml: &str) -> BTreeMap<String, usize> {
    let doc = Document::parse(c_xml).unwrap();
    doc.descendants()
        .filter(|n| n.has_tag_name("c"))
        .map(|c| {
            (
                c.attribute("r").unwrap().to_string(),
                c.attribute("s").unwrap_or("0").parse().unwrap(),
            )
        })
        .collect()
}

struct SheetStyles {
    l_styles: Vec<CellStyle>,
    dict_cells: BTreeMap<String, usize>,
}

impl SheetStyles {
    fn read(path: &Path) -> Self {
        Self {
            l_styles: parse_styles(&read_part(path, "xl/styles.xml")),
            dict_cells: parse_cell_styles(&read_part(path, "xl/worksheets/sheet1.xml")),
        }
    }

    fn style_of(&self, cell_ref: &str) -> &CellStyle {
        let n_xf = self
            .dict_cells
            .get(cell_ref)
            .unwrap_or_else(|| panic!("cell {cell_ref} not written"));
        &self.l_styles[*n_xf]
    }
}

#[test]
fn invoice_workbook_styles_read_back_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let options = SpecGenerateOptions {
        dir_out: dir.path().to_path_buf(),
    };
    let report = generate_all(&options).unwrap();
    let path = &report.find(C_FILE_INVOICES).unwrap().path;

    let sheet = SheetStyles::read(path);

    // Invoices fill rows 2-17, credit-notes rows 18-22.
    for n_row in 2..=22 {
        for c_col in ["A", "B", "C", "D", "E", "F", "G", "H"] {
            let cell_ref = format!("{c_col}{n_row}");
            let style = sheet.style_of(&cell_ref);
            if n_row >= 18 {
                assert_eq!(style.fill_rgb.as_deref(), Some(C_FILL_CREDIT_NOTE), "{cell_ref}");
            } else {
                assert_eq!(style.fill_rgb, None, "{cell_ref}");
            }
        }

        let cell_ref = format!("G{n_row}");
        assert_eq!(
            sheet.style_of(&cell_ref).num_format.as_deref(),
            Some("#,##0.00"),
            "{cell_ref}"
        );
    }

    // Blank `Pedidos` cell of a credit-note still carries the fill.
    assert_eq!(sheet.style_of("C18").fill_rgb.as_deref(), Some(C_FILL_CREDIT_NOTE));
    assert_eq!(sheet.style_of("A1").fill_rgb.as_deref(), Some("FF2563EB"));
    assert_eq!(sheet.style_of("A24").fill_rgb, None);
}
