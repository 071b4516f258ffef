use std::fmt::Write;

use orders_core::FileSummary;
use orders_util::format_cents;

/// Renders one file's report in the fixed console layout. Pure string
/// building; the caller decides where it goes.
///
/// The best-purchase block only appears when at least one line was
/// accepted; an all-zero summary prints just the three totals.
pub fn render_report(file_name: &str, summary: &FileSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, " Report for {file_name} ");
    let _ = writeln!(out, "Total cost: {}", format_cents(summary.total_cost_cents));
    let _ = writeln!(out, "Total items bought: {}", summary.total_quantity);
    let _ = writeln!(out, "Average discount: {:.2}", summary.average_discount());

    if let Some(best) = &summary.best_line {
        let _ = writeln!(out, "Most expensive purchase after discount:");
        let _ = writeln!(
            out,
            "- Product: {} (ID: {})",
            best.product_name, best.product_id.0
        );
        let _ = writeln!(out, "- Amount: {}", best.quantity);
        let _ = writeln!(
            out,
            "- Total after discount: {}",
            format_cents(best.cost_cents)
        );
    }

    out
}
