//! # Measurement Patterns Module
//!
//! This module contains the regex used to split a measure string into amount, unit and remainder.

use lazy_static::lazy_static;
use regex::Regex;

// Amount (mixed number, simple fraction, integer or decimal), then a unit token that must end on a
// word boundary, then whatever follows. Unit alternatives are listed longest-first.
pub const MEASURE_PATTERN: &str = r"(?i)^(\d+\s+\d+/\d+|\d+/\d+|\d+\.?\d*)\s*(tablespoons|tablespoon|teaspoons|teaspoon|jiggers|jigger|dashes|dash|shots|shot|parts|part|pints|pint|gills|gill|litres|litre|liters|liter|cups|cup|tbsp|tsp|oz|cl|ml|l)\b\s*(.*)";

// Lazy static regex for the measure pattern to avoid recompilation
lazy_static! {
    pub static ref MEASURE_REGEX: Regex =
        Regex::new(MEASURE_PATTERN).expect("Measure pattern should be valid");
}
