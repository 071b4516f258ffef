use crate::order::OrderLine;
use crate::product::{Product, ProductId};

/// The accepted line with the highest discounted cost in one file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BestLine {
    pub product_id: ProductId,
    pub product_name: String,
    pub quantity: i64,
    pub cost_cents: i64,
}

/// Running totals for one order file.
///
/// Each summary is owned exclusively by the worker processing its file and
/// only read after that worker has joined, so no synchronization is needed
/// anywhere in the accumulation path.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FileSummary {
    /// Sum of discounted line costs. Discounts are not clamped, so this
    /// can go negative.
    pub total_cost_cents: i64,
    pub total_quantity: i64,
    /// Sum of flat discount amounts, in whole currency units.
    pub total_discount: i64,
    /// Lines accepted into the totals.
    pub line_count: u64,
    /// Lines dropped as malformed or referencing an unknown product.
    pub skipped_lines: u64,
    pub best_line: Option<BestLine>,
}

impl FileSummary {
    /// Folds one accepted line into the totals.
    ///
    /// `discounted = unit_price * quantity - discount`, all in cents. The
    /// best line is replaced only on strictly greater discounted cost, so
    /// the first of equals wins; the very first accepted line always
    /// installs itself, even at a negative cost.
    pub fn record(&mut self, product: &Product, line: &OrderLine) {
        let line_cost = product.unit_price_cents * line.quantity;
        let discounted = line_cost - line.discount * 100;

        self.total_cost_cents += discounted;
        self.total_quantity += line.quantity;
        self.total_discount += line.discount;
        self.line_count += 1;

        let beats_current = match &self.best_line {
            Some(best) => discounted > best.cost_cents,
            None => true,
        };
        if beats_current {
            self.best_line = Some(BestLine {
                product_id: product.id,
                product_name: product.name.clone(),
                quantity: line.quantity,
                cost_cents: discounted,
            });
        }
    }

    /// Counts a line dropped by parsing or catalog lookup. Totals are
    /// untouched.
    pub fn record_skipped(&mut self) {
        self.skipped_lines += 1;
    }

    /// Average flat discount per accepted line; 0 for an empty summary.
    pub fn average_discount(&self) -> f64 {
        if self.line_count == 0 {
            0.0
        } else {
            self.total_discount as f64 / self.line_count as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> Product {
        Product {
            id: ProductId(1),
            name: "Widget".to_string(),
            unit_price_cents: 1000,
        }
    }

    fn line(quantity: i64, discount: i64) -> OrderLine {
        OrderLine {
            product_id: ProductId(1),
            quantity,
            discount,
        }
    }

    /// Two accepted lines against a 10.00 product: 2 units less 5 discount
    /// (15.00) and 3 units less 100 discount (-70.00). The oversized
    /// discount is folded in unclamped and the first line stays best.
    #[test]
    fn accumulates_discounted_costs_exactly() {
        let product = widget();
        let mut summary = FileSummary::default();
        summary.record(&product, &line(2, 5));
        summary.record(&product, &line(3, 100));

        assert_eq!(summary.total_cost_cents, -5500);
        assert_eq!(summary.total_quantity, 5);
        assert_eq!(summary.total_discount, 105);
        assert_eq!(summary.line_count, 2);

        let best = summary.best_line.expect("two lines were accepted");
        assert_eq!(best.cost_cents, 1500);
        assert_eq!(best.quantity, 2);
        assert_eq!(best.product_name, "Widget");
    }

    #[test]
    fn best_line_keeps_first_on_ties() {
        let product = widget();
        let mut summary = FileSummary::default();
        summary.record(&product, &line(2, 0));
        summary.record(&product, &line(4, 20)); // same 20.00 after discount

        let best = summary.best_line.expect("lines were accepted");
        assert_eq!(best.quantity, 2);
    }

    /// A file whose every discounted cost is negative still reports its
    /// greatest line rather than none.
    #[test]
    fn all_negative_file_tracks_greatest_line() {
        let product = widget();
        let mut summary = FileSummary::default();
        summary.record(&product, &line(1, 50)); // -40.00
        summary.record(&product, &line(1, 20)); // -10.00

        let best = summary.best_line.expect("lines were accepted");
        assert_eq!(best.cost_cents, -1000);
    }

    #[test]
    fn average_discount_guards_empty_summaries() {
        let mut summary = FileSummary::default();
        assert_eq!(summary.average_discount(), 0.0);
        summary.record_skipped();
        assert_eq!(summary.average_discount(), 0.0);
        assert_eq!(summary.skipped_lines, 1);

        summary.record(&widget(), &line(2, 5));
        summary.record(&widget(), &line(3, 100));
        assert_eq!(summary.average_discount(), 52.5);
    }
}
