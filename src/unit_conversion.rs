//! # Unit Conversion
//!
//! Parses free-text measure strings ("1 1/2 oz", "2 cl", "3 dashes") and
//! re-renders them in imperial or metric units for display.
//!
//! ## Features
//!
//! - Integers, decimals, simple fractions (1/2) and mixed numbers (1 1/2)
//! - A closed set of bar units, case-insensitive
//! - Trailing notes ("(Optional float)") carried through conversion
//! - Anything unparseable is passed through unchanged
//!
//! ## Usage
//!
//! ```rust
//! use cocktails::measurement_types::MeasurementSystem;
//! use cocktails::unit_conversion::convert_measure;
//!
//! assert_eq!(convert_measure("1 1/2 oz", MeasurementSystem::Metric), "37.5 ml");
//! assert_eq!(convert_measure("2 cl", MeasurementSystem::Imperial), "0.8 oz");
//! assert_eq!(convert_measure("Top up", MeasurementSystem::Metric), "Top up");
//! ```

use crate::measurement_patterns::MEASURE_REGEX;
use crate::measurement_types::{
    MeasureUnit, MeasurementSystem, ParsedMeasure, OUNCE_ML, TEASPOON_ML,
};
use crate::recipe_model::Ingredient;
use log::{debug, trace};

/// Below this many ounces, imperial output switches to teaspoons
pub const SMALL_OUNCE_THRESHOLD: f64 = 0.25;

/// Parse a measure string into amount, unit and remainder
///
/// # Returns
///
/// `None` when the string is empty, has no leading amount, uses a unit outside
/// the recognised set, or holds a fraction with a zero or non-numeric
/// denominator. Callers show the original text in that case.
pub fn parse_measure(measure: &str) -> Option<ParsedMeasure> {
    let cleaned = measure.trim();
    if cleaned.is_empty() {
        return None;
    }

    let captures = MEASURE_REGEX.captures(cleaned)?;
    let amount = parse_amount(captures.get(1)?.as_str().trim())?;
    let unit = MeasureUnit::from_token(&captures.get(2)?.as_str().to_lowercase())?;
    let remainder = captures
        .get(3)
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default();

    trace!(
        "Parsed measure '{}' -> amount={} unit={} remainder='{}'",
        measure,
        amount,
        unit,
        remainder
    );

    Some(ParsedMeasure {
        amount,
        unit,
        remainder,
    })
}

/// Parse an amount token: "2", "2.5", "1/2" or "1 1/2"
fn parse_amount(raw: &str) -> Option<f64> {
    if let Some((whole, fraction)) = raw.split_once(char::is_whitespace) {
        let whole: f64 = whole.parse().ok().filter(|v: &f64| v.is_finite())?;
        let amount = whole + parse_fraction(fraction.trim())?;
        return amount.is_finite().then_some(amount);
    }

    if raw.contains('/') {
        return parse_fraction(raw);
    }

    let amount: f64 = raw.trim_end_matches('.').parse().ok()?;
    amount.is_finite().then_some(amount)
}

fn parse_fraction(raw: &str) -> Option<f64> {
    let (numerator, denominator) = raw.split_once('/')?;
    let numerator: f64 = numerator.parse().ok().filter(|v: &f64| v.is_finite())?;
    let denominator: f64 = denominator.parse().ok().filter(|v: &f64| v.is_finite())?;

    if denominator == 0.0 {
        debug!("Rejecting fraction with zero denominator: '{}'", raw);
        return None;
    }

    let value = numerator / denominator;
    value.is_finite().then_some(value)
}

/// Convert an amount in the given unit to millilitres
pub fn to_milliliters(amount: f64, unit: MeasureUnit) -> f64 {
    amount * unit.milliliters()
}

/// Round to one decimal place, dropping ".0" for whole numbers
///
/// ```rust
/// use cocktails::unit_conversion::format_amount;
///
/// assert_eq!(format_amount(2.0), "2");
/// assert_eq!(format_amount(1.5), "1.5");
/// assert_eq!(format_amount(0.84), "0.8");
/// ```
pub fn format_amount(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if !rounded.is_finite() {
        return format!("{value:.0}");
    }
    if rounded.fract() == 0.0 {
        format!("{rounded:.0}")
    } else {
        format!("{rounded:.1}")
    }
}

/// Render a measure string in the target unit system
///
/// Unparseable input, imperial input asked for in imperial, and millilitres
/// asked for in metric are all returned verbatim. Imperial output under a
/// quarter ounce is given in teaspoons.
pub fn convert_measure(measure: &str, target: MeasurementSystem) -> String {
    let Some(parsed) = parse_measure(measure) else {
        return measure.to_string();
    };

    let ml = to_milliliters(parsed.amount, parsed.unit);
    if !ml.is_finite() {
        debug!("Amount out of range, keeping '{}' as is", measure);
        return measure.to_string();
    }

    let suffix = if parsed.remainder.is_empty() {
        String::new()
    } else {
        format!(" {}", parsed.remainder)
    };

    match target {
        MeasurementSystem::Imperial => {
            if parsed.unit.is_imperial_display() {
                return measure.to_string();
            }
            let oz = ml / OUNCE_ML;
            if oz < SMALL_OUNCE_THRESHOLD {
                format!("{} tsp{}", format_amount(ml / TEASPOON_ML), suffix)
            } else {
                format!("{} oz{}", format_amount(oz), suffix)
            }
        }
        MeasurementSystem::Metric => {
            if parsed.unit == MeasureUnit::Milliliter {
                return measure.to_string();
            }
            format!("{} ml{}", format_amount(ml), suffix)
        }
    }
}

/// Convert every ingredient measure of a recipe for display
pub fn convert_ingredients(ingredients: &[Ingredient], target: MeasurementSystem) -> Vec<Ingredient> {
    ingredients
        .iter()
        .map(|ingredient| Ingredient {
            name: ingredient.name.clone(),
            measure: convert_measure(&ingredient.measure, target),
        })
        .collect()
}
