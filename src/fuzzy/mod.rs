//! Lenient parsers for dates and numbers typed into cells.
//!
//! Both parsers report a miss as `None`; they never fail loudly.

mod date;
mod number;

pub use date::{fuzzy_date, parse_fuzzy_date, TzFix};
pub use number::{parse_fuzzy_number, parse_loose_number};
