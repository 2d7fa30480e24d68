//! Formatting helpers shared by the MineMonitor dashboard cards.
//!
//! Everything here is a pure function over already-parsed values: sensor
//! text goes through [`parse_metric`] once, and the formatters take the
//! resulting `Option<f64>`.

pub mod formatting;
pub mod markup;
pub mod metric;

pub use formatting::{format_difficulty, format_grouped, format_hashrate};
pub use markup::escape_html;
pub use metric::{parse_metric, present_metric};
