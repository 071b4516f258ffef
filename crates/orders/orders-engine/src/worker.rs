use std::panic;
use std::path::Path;
use std::thread;

use orders_core::{Catalog, FileSummary, OrderLine};
use tracing::{debug, warn};

/// Runs `f` over every item on its own thread: all workers start together
/// and are all joined before any result is returned (fan-out/fan-in
/// barrier).
///
/// Join handles are collected and joined in submission order, so the
/// returned vector lines up with `items` no matter which worker finishes
/// first. A panicking worker is re-raised on the calling thread once the
/// scope has drained.
pub fn fan_out<I, T, F>(items: Vec<I>, f: F) -> Vec<T>
where
    I: Send,
    T: Send,
    F: Fn(I) -> T + Sync,
{
    thread::scope(|scope| {
        let f = &f;
        let handles: Vec<_> = items
            .into_iter()
            .map(|item| scope.spawn(move || f(item)))
            .collect();

        handles
            .into_iter()
            .map(|handle| match handle.join() {
                Ok(result) => result,
                Err(payload) => panic::resume_unwind(payload),
            })
            .collect()
    })
}

/// Builds the summary for one order file.
///
/// An unreadable file yields a zeroed summary (the report still prints,
/// showing no activity) with a warning on the log rather than an error
/// up the stack. Malformed lines and lines referencing an unknown product
/// are skipped and counted, never fatal.
///
/// Workers share `catalog` read-only; the summary is exclusively theirs.
pub fn summarize_order_file(path: &Path, catalog: &Catalog) -> FileSummary {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(error) => {
            warn!(
                path = %path.display(),
                %error,
                "order file unreadable, reporting zero activity"
            );
            return FileSummary::default();
        }
    };

    let mut summary = FileSummary::default();
    for (number, line) in text.lines().enumerate() {
        let Some(order) = OrderLine::parse_line(line) else {
            debug!(path = %path.display(), line = number + 1, "skipping malformed order line");
            summary.record_skipped();
            continue;
        };
        let Some(product) = catalog.find(order.product_id) else {
            debug!(
                path = %path.display(),
                line = number + 1,
                id = order.product_id.0,
                "skipping line for unknown product"
            );
            summary.record_skipped();
            continue;
        };
        summary.record(product, &order);
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use orders_core::{Product, ProductId};
    use std::path::PathBuf;
    use std::time::Duration;

    fn test_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("orders_worker_{}_{}", name, std::process::id()))
    }

    fn widget_catalog() -> Catalog {
        let mut catalog = Catalog::with_capacity(10);
        catalog.insert(Product {
            id: ProductId(1),
            name: "Widget".to_string(),
            unit_price_cents: 1000,
        });
        catalog
    }

    /// Workers that finish in reverse submission order must still report
    /// in submission order.
    #[test]
    fn fan_out_preserves_submission_order() {
        let delays: Vec<u64> = vec![40, 30, 20, 10, 0];
        let results = fan_out(delays.clone(), |delay| {
            thread::sleep(Duration::from_millis(delay));
            delay
        });
        assert_eq!(results, delays);
    }

    /// Two accepted lines (15.00 and -70.00, the oversized discount kept
    /// unclamped) and one line skipped for an unknown product.
    #[test]
    fn summarizes_accepted_lines_and_skips_the_rest() {
        let path = test_path("scenario");
        std::fs::write(&path, "1,2,5\n1,3,100\n9,1,0\n").expect("test file should be writable");

        let summary = summarize_order_file(&path, &widget_catalog());
        let _ = std::fs::remove_file(&path);

        assert_eq!(summary.total_cost_cents, -5500);
        assert_eq!(summary.total_quantity, 5);
        assert_eq!(summary.total_discount, 105);
        assert_eq!(summary.line_count, 2);
        assert_eq!(summary.skipped_lines, 1);
        assert_eq!(
            summary.best_line.as_ref().map(|b| b.cost_cents),
            Some(1500)
        );
    }

    #[test]
    fn malformed_line_does_not_abort_the_file() {
        let path = test_path("malformed");
        std::fs::write(&path, "1,abc,5\n1,2,5\n").expect("test file should be writable");

        let summary = summarize_order_file(&path, &widget_catalog());
        let _ = std::fs::remove_file(&path);

        assert_eq!(summary.line_count, 1);
        assert_eq!(summary.skipped_lines, 1);
        assert_eq!(summary.total_cost_cents, 1500);
    }

    #[test]
    fn unreadable_file_reports_zero_activity() {
        let path = test_path("missing");
        let summary = summarize_order_file(&path, &widget_catalog());

        assert_eq!(summary, FileSummary::default());
        assert!(summary.best_line.is_none());
    }
}
