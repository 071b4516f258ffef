use orders_util::parse_price_cents;

// Newtype over the raw id so catalog keys and order references can't be
// mixed up with quantities.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ProductId(pub u32);

/// One catalog entry. Built at load time and never mutated afterwards; a
/// later load of the same id replaces the whole entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub unit_price_cents: i64,
}

impl Product {
    /// Parses one `id,name,price` catalog line, fields trimmed.
    ///
    /// Returns `None` unless there are exactly three comma-separated
    /// fields with a numeric id and a decimal price.
    pub fn parse_line(line: &str) -> Option<Product> {
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() != 3 {
            return None;
        }

        let id: u32 = fields[0].trim().parse().ok()?;
        let name = fields[1].trim().to_string();
        let unit_price_cents = parse_price_cents(fields[2].trim())?;

        Some(Product {
            id: ProductId(id),
            name,
            unit_price_cents,
        })
    }
}
