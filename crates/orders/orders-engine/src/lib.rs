pub mod loader;
pub mod report;
pub mod worker;

pub use loader::load_catalog;
pub use report::render_report;
pub use worker::{fan_out, summarize_order_file};

use orders_config::OrdersConfig;
use orders_core::{Catalog, FileSummary};
use tracing::warn;

/// Runs the pipeline for `config`: catalog fully loaded first, then one
/// worker per order file, then the summaries paired with their file names
/// in submission order.
///
/// An unavailable catalog degrades to an empty one: every order line then
/// fails its product lookup and the reports show zero activity, which is
/// the same outcome an unreadable order file has.
pub fn generate(config: &OrdersConfig) -> Vec<(String, FileSummary)> {
    let catalog_path = config.catalog_path();
    let catalog = match load_catalog(&catalog_path, config.catalog_capacity) {
        Ok(catalog) => catalog,
        Err(error) => {
            warn!(
                path = %catalog_path.display(),
                %error,
                "catalog unavailable, continuing with an empty one"
            );
            Catalog::with_capacity(config.catalog_capacity)
        }
    };

    let summaries = fan_out(config.order_paths(), |path| {
        summarize_order_file(&path, &catalog)
    });

    config.order_files.iter().cloned().zip(summaries).collect()
}

/// Generates and prints every report to stdout, one blank line between
/// reports.
pub fn run(config: &OrdersConfig) {
    for (file_name, summary) in generate(config) {
        println!("{}", render_report(&file_name, &summary));
    }
}
