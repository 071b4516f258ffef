//! End-to-end pipeline test: a catalog and four order files (one of them
//! deliberately absent) run through the concurrent fan-out, with results
//! checked in submission order.

use orders_config::OrdersConfig;
use orders_engine::{generate, render_report};
use std::path::PathBuf;

/// Unique per-process scratch directory, so parallel test runs don't
/// collide on the same files.
fn test_dir() -> PathBuf {
    std::env::temp_dir().join(format!("orders_e2e_{}", std::process::id()))
}

#[test]
fn pipeline_reports_in_submission_order() {
    let dir = test_dir();
    std::fs::create_dir_all(&dir).expect("scratch dir should be creatable");

    std::fs::write(dir.join("products.txt"), "1,Widget,10.00\n2,Gadget,3.50\n")
        .expect("catalog should be writable");
    // Two accepted lines (15.00, then -70.00), then an unknown product.
    std::fs::write(dir.join("a.txt"), "1,2,5\n1,3,100\n9,1,0\n")
        .expect("order file should be writable");
    std::fs::write(dir.join("b.txt"), "2,10,0\n").expect("order file should be writable");
    std::fs::write(dir.join("c.txt"), "garbage\n").expect("order file should be writable");
    // d.txt is never created: the unreadable-file path.

    let config = OrdersConfig {
        resource_dir: dir.display().to_string(),
        catalog_file: "products.txt".to_string(),
        order_files: vec![
            "a.txt".to_string(),
            "b.txt".to_string(),
            "c.txt".to_string(),
            "d.txt".to_string(),
        ],
        catalog_capacity: 10,
        log_level: "info".to_string(),
    };

    let reports = generate(&config);
    let _ = std::fs::remove_dir_all(&dir);

    let names: Vec<&str> = reports.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(names, ["a.txt", "b.txt", "c.txt", "d.txt"]);

    let (_, a) = &reports[0];
    assert_eq!(a.total_cost_cents, -5500);
    assert_eq!(a.total_quantity, 5);
    assert_eq!(a.total_discount, 105);
    assert_eq!(a.line_count, 2);
    assert_eq!(a.skipped_lines, 1);
    assert_eq!(a.best_line.as_ref().map(|b| b.cost_cents), Some(1500));

    let (_, b) = &reports[1];
    assert_eq!(b.total_cost_cents, 3500);
    assert_eq!(b.total_quantity, 10);
    assert_eq!(b.line_count, 1);
    assert_eq!(b.best_line.as_ref().map(|l| l.product_name.as_str()), Some("Gadget"));

    // A file of garbage and a missing file both report zero activity; only
    // the skip counter tells them apart.
    let (_, c) = &reports[2];
    assert_eq!(c.line_count, 0);
    assert_eq!(c.skipped_lines, 1);
    assert!(c.best_line.is_none());

    let (_, d) = &reports[3];
    assert_eq!(d.line_count, 0);
    assert_eq!(d.skipped_lines, 0);
    assert_eq!(d.total_cost_cents, 0);

    let rendered = render_report("a.txt", a);
    assert!(rendered.starts_with(" Report for a.txt \nTotal cost: -55.00\n"));
    assert!(rendered.contains("- Total after discount: 15.00\n"));
}
