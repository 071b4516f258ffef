use std::io;
use std::path::Path;

use orders_core::{Catalog, Product};
use tracing::{debug, info};

/// Loads the product catalog from a `id,name,price` text file.
///
/// Malformed lines are skipped with a debug log naming the line number.
/// Parsed products go through the catalog's slot policy, so duplicate ids
/// overwrite and products past the capacity ceiling are dropped.
pub fn load_catalog(path: &Path, capacity: usize) -> io::Result<Catalog> {
    let text = std::fs::read_to_string(path)?;

    let mut catalog = Catalog::with_capacity(capacity);
    for (number, line) in text.lines().enumerate() {
        match Product::parse_line(line) {
            Some(product) => {
                catalog.insert(product);
            }
            None => debug!(line = number + 1, "skipping malformed catalog line"),
        }
    }

    info!(path = %path.display(), products = catalog.len(), "catalog loaded");
    Ok(catalog)
}
