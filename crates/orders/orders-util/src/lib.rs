pub mod money;

pub use money::{format_cents, parse_price_cents};
