//! Literal sample records.
//!
//! Cross-references between tables are plain text matched by the importer;
//! nothing here enforces them.

/// Showroom with its commission rate (percent).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Showroom {
    pub name: &'static str,
    pub commission_pct: f64,
}

/// Client attached to one showroom by name.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Client {
    pub name: &'static str,
    pub showroom: &'static str,
}

/// Customer order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Order {
    pub number: &'static str,
    pub client: &'static str,
    /// `YYYY-MM-DD`.
    pub date: &'static str,
    pub currency: &'static str,
    pub amount: f64,
}

/// Invoice or credit-note.
///
/// `credited_invoices` non-empty marks a credit-note; its `amount` is still
/// positive and `orders` is empty.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Invoice {
    pub number: &'static str,
    pub client: &'static str,
    /// Comma-separated order numbers.
    pub orders: &'static str,
    pub date_issue: &'static str,
    pub date_due: &'static str,
    pub currency: &'static str,
    pub amount: f64,
    /// Comma-separated invoice numbers.
    pub credited_invoices: &'static str,
}

impl Invoice {
    pub fn is_credit_note(&self) -> bool {
        !self.credited_invoices.is_empty()
    }
}

/// Split a comma-separated reference list, dropping blanks.
pub fn split_refs(refs: &str) -> impl Iterator<Item = &str> {
    refs.split(',').map(str::trim).filter(|val| !val.is_empty())
}

#[rustfmt::skip]
pub const SHOWROOMS: &[Showroom] = &[
    Showroom { name: "Milano Fashion Hub", commission_pct: 15.0 },
    Showroom { name: "Paris Luxe Showroom", commission_pct: 12.0 },
    Showroom { name: "London Style Room", commission_pct: 18.0 },
    Showroom { name: "NYC Premium Space", commission_pct: 20.0 },
    Showroom { name: "Berlin Mode Gallery", commission_pct: 14.0 },
];

#[rustfmt::skip]
pub const CLIENTS: &[Client] = &[
    Client { name: "Boutique Rossi", showroom: "Milano Fashion Hub" },
    Client { name: "Maison Dupont", showroom: "Paris Luxe Showroom" },
    Client { name: "Casa Bianchi", showroom: "Milano Fashion Hub" },
    Client { name: "Harvey & Sons", showroom: "London Style Room" },
    Client { name: "Bergdorf Select", showroom: "NYC Premium Space" },
    Client { name: "Atelier Laurent", showroom: "Paris Luxe Showroom" },
    Client { name: "KaDeWe Luxury", showroom: "Berlin Mode Gallery" },
    Client { name: "Selfridges Concession", showroom: "London Style Room" },
    Client { name: "Saks Fifth Avenue", showroom: "NYC Premium Space" },
    Client { name: "Galeries Lafayette", showroom: "Paris Luxe Showroom" },
];

const fn order(
    number: &'static str,
    client: &'static str,
    date: &'static str,
    currency: &'static str,
    amount: f64,
) -> Order {
    Order { number, client, date, currency, amount }
}

#[rustfmt::skip]
pub const ORDERS: &[Order] = &[
    order("PED-2025-001", "Boutique Rossi", "2025-01-15", "EUR", 12500.00),
    order("PED-2025-002", "Boutique Rossi", "2025-02-10", "EUR", 8750.00),
    order("PED-2025-003", "Maison Dupont", "2025-01-20", "EUR", 15300.00),
    order("PED-2025-004", "Casa Bianchi", "2025-02-01", "EUR", 6200.00),
    order("PED-2025-005", "Harvey & Sons", "2025-01-25", "EUR", 9800.00),
    order("PED-2025-006", "Harvey & Sons", "2025-03-05", "EUR", 4500.00),
    order("PED-2025-007", "Bergdorf Select", "2025-02-15", "USD", 22000.00),
    order("PED-2025-008", "Bergdorf Select", "2025-03-01", "USD", 18500.00),
    order("PED-2025-009", "Atelier Laurent", "2025-01-10", "EUR", 11200.00),
    order("PED-2025-010", "KaDeWe Luxury", "2025-02-20", "EUR", 7600.00),
    order("PED-2025-011", "Selfridges Concession", "2025-03-10", "EUR", 13400.00),
    order("PED-2025-012", "Saks Fifth Avenue", "2025-02-28", "USD", 16800.00),
    order("PED-2025-013", "Galeries Lafayette", "2025-03-15", "EUR", 19500.00),
    order("PED-2025-014", "Boutique Rossi", "2025-04-01", "EUR", 5300.00),
    order("PED-2025-015", "Maison Dupont", "2025-04-10", "EUR", 7800.00),
];

#[allow(clippy::too_many_arguments)]
const fn invoice(
    number: &'static str,
    client: &'static str,
    orders: &'static str,
    date_issue: &'static str,
    date_due: &'static str,
    currency: &'static str,
    amount: f64,
    credited_invoices: &'static str,
) -> Invoice {
    Invoice {
        number,
        client,
        orders,
        date_issue,
        date_due,
        currency,
        amount,
        credited_invoices,
    }
}

#[rustfmt::skip]
pub const INVOICES: &[Invoice] = &[
    invoice("FAC-2025-001", "Boutique Rossi", "PED-2025-001", "2025-02-01", "2025-04-01", "EUR", 12500.00, ""),
    invoice("FAC-2025-002", "Boutique Rossi", "PED-2025-002", "2025-03-01", "2025-05-01", "EUR", 8750.00, ""),
    invoice("FAC-2025-003", "Maison Dupont", "PED-2025-003", "2025-02-15", "2025-04-15", "EUR", 15300.00, ""),
    invoice("FAC-2025-004", "Casa Bianchi", "PED-2025-004", "2025-03-01", "2025-05-01", "EUR", 6200.00, ""),
    invoice("FAC-2025-005", "Harvey & Sons", "PED-2025-005", "2025-02-20", "2025-04-20", "EUR", 9800.00, ""),
    invoice("FAC-2025-006", "Harvey & Sons", "PED-2025-006", "2025-04-01", "2025-06-01", "EUR", 4500.00, ""),
    invoice("FAC-2025-007", "Bergdorf Select", "PED-2025-007", "2025-03-15", "2025-05-15", "USD", 22000.00, ""),
    invoice("FAC-2025-008", "Bergdorf Select", "PED-2025-008", "2025-04-01", "2025-06-01", "USD", 18500.00, ""),
    invoice("FAC-2025-009", "Atelier Laurent", "PED-2025-009", "2025-02-10", "2025-04-10", "EUR", 11200.00, ""),
    invoice("FAC-2025-010", "KaDeWe Luxury", "PED-2025-010", "2025-03-15", "2025-05-15", "EUR", 7600.00, ""),
    invoice("FAC-2025-011", "Selfridges Concession", "PED-2025-011", "2025-04-10", "2025-06-10", "EUR", 13400.00, ""),
    invoice("FAC-2025-012", "Saks Fifth Avenue", "PED-2025-012", "2025-03-25", "2025-05-25", "USD", 16800.00, ""),
    invoice("FAC-2025-013", "Galeries Lafayette", "PED-2025-013", "2025-04-15", "2025-06-15", "EUR", 19500.00, ""),
    invoice("FAC-2025-014", "Boutique Rossi", "PED-2025-014", "2025-05-01", "2025-07-01", "EUR", 5300.00, ""),
    invoice("FAC-2025-015", "Maison Dupont", "PED-2025-015", "2025-05-10", "2025-07-10", "EUR", 7800.00, ""),
    // Several orders on one invoice.
    invoice("FAC-2025-016", "Harvey & Sons", "PED-2025-005, PED-2025-006", "2025-04-20", "2025-06-20", "EUR", 14300.00, ""),
    // Credit-notes. Partial credit of FAC-2025-001.
    invoice("ABN-2025-001", "Boutique Rossi", "", "2025-03-15", "2025-03-15", "EUR", 2000.00, "FAC-2025-001"),
    // Full refund of FAC-2025-004.
    invoice("ABN-2025-002", "Casa Bianchi", "", "2025-04-01", "2025-04-01", "EUR", 6200.00, "FAC-2025-004"),
    // Partial credit in USD.
    invoice("ABN-2025-003", "Bergdorf Select", "", "2025-04-15", "2025-04-15", "USD", 3500.00, "FAC-2025-007"),
    // Credit against an invoice that is already settled.
    invoice("ABN-2025-004", "Maison Dupont", "", "2025-05-20", "2025-05-20", "EUR", 1500.00, "FAC-2025-003"),
    // One credit-note over two invoices.
    invoice("ABN-2025-005", "Harvey & Sons", "", "2025-05-01", "2025-05-01", "EUR", 800.00, "FAC-2025-005, FAC-2025-006"),
];
