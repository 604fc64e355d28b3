use terbilang_core::{convert, convert_decimal};
use tracing::debug;

use super::resolve_precision;
use crate::settings::settings;

pub fn convert_cmd(number: i64) {
    let words = die!(convert(number), "Error: {}");
    println!("{words}");
}

pub fn decimal_cmd(number: f64, precision: Option<i32>) {
    let precision = die!(
        resolve_precision(precision, &settings().decimal),
        "Error: {}"
    );
    debug!(number, precision, "decimal conversion");
    let words = die!(convert_decimal(number, precision), "Error: {}");
    println!("{words}");
}
