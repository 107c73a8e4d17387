//! # Measurement Types Module
//!
//! This module defines the core types used for measure parsing and unit conversion.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Millilitres in one ounce. A 25 ml bar measure, not the US fluid ounce.
pub const OUNCE_ML: f64 = 25.0;
/// Millilitres in one teaspoon
pub const TEASPOON_ML: f64 = 4.92892;
/// Millilitres in one tablespoon
pub const TABLESPOON_ML: f64 = 14.7868;
/// Millilitres in one cup
pub const CUP_ML: f64 = 236.588;
/// Millilitres in one dash
pub const DASH_ML: f64 = 0.92;
/// Millilitres in one centilitre
pub const CENTILITER_ML: f64 = 10.0;
/// Millilitres in one pint
pub const PINT_ML: f64 = 473.176;
/// Millilitres in one gill
pub const GILL_ML: f64 = 118.294;
/// Millilitres in one litre
pub const LITER_ML: f64 = 1000.0;

/// Unit tokens recognised in a measure string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeasureUnit {
    Ounce,
    Centiliter,
    Milliliter,
    Teaspoon,
    Tablespoon,
    Cup,
    Dash,
    Shot,
    Jigger,
    Part,
    Pint,
    Gill,
    Liter,
}

impl MeasureUnit {
    /// Map a lower-cased unit token (singular or plural) to a unit
    pub fn from_token(token: &str) -> Option<Self> {
        let unit = match token {
            "oz" => MeasureUnit::Ounce,
            "cl" => MeasureUnit::Centiliter,
            "ml" => MeasureUnit::Milliliter,
            "tsp" | "teaspoon" | "teaspoons" => MeasureUnit::Teaspoon,
            "tbsp" | "tablespoon" | "tablespoons" => MeasureUnit::Tablespoon,
            "cup" | "cups" => MeasureUnit::Cup,
            "dash" | "dashes" => MeasureUnit::Dash,
            "shot" | "shots" => MeasureUnit::Shot,
            "jigger" | "jiggers" => MeasureUnit::Jigger,
            "part" | "parts" => MeasureUnit::Part,
            "pint" | "pints" => MeasureUnit::Pint,
            "gill" | "gills" => MeasureUnit::Gill,
            "l" | "litre" | "litres" | "liter" | "liters" => MeasureUnit::Liter,
            _ => return None,
        };
        Some(unit)
    }

    /// Canonical short form
    pub fn as_str(&self) -> &'static str {
        match self {
            MeasureUnit::Ounce => "oz",
            MeasureUnit::Centiliter => "cl",
            MeasureUnit::Milliliter => "ml",
            MeasureUnit::Teaspoon => "tsp",
            MeasureUnit::Tablespoon => "tbsp",
            MeasureUnit::Cup => "cup",
            MeasureUnit::Dash => "dash",
            MeasureUnit::Shot => "shot",
            MeasureUnit::Jigger => "jigger",
            MeasureUnit::Part => "part",
            MeasureUnit::Pint => "pint",
            MeasureUnit::Gill => "gill",
            MeasureUnit::Liter => "l",
        }
    }

    /// Millilitres per one of this unit
    ///
    /// Shots, jiggers and parts are all treated as one 25 ml ounce.
    pub fn milliliters(&self) -> f64 {
        match self {
            MeasureUnit::Ounce => OUNCE_ML,
            MeasureUnit::Centiliter => CENTILITER_ML,
            MeasureUnit::Milliliter => 1.0,
            MeasureUnit::Teaspoon => TEASPOON_ML,
            MeasureUnit::Tablespoon => TABLESPOON_ML,
            MeasureUnit::Cup => CUP_ML,
            MeasureUnit::Dash => DASH_ML,
            MeasureUnit::Shot | MeasureUnit::Jigger | MeasureUnit::Part => OUNCE_ML,
            MeasureUnit::Pint => PINT_ML,
            MeasureUnit::Gill => GILL_ML,
            MeasureUnit::Liter => LITER_ML,
        }
    }

    /// Units shown as-is when imperial output is requested
    ///
    /// Jiggers, pints, gills and the metric units are always converted.
    pub fn is_imperial_display(&self) -> bool {
        matches!(
            self,
            MeasureUnit::Ounce
                | MeasureUnit::Teaspoon
                | MeasureUnit::Tablespoon
                | MeasureUnit::Dash
                | MeasureUnit::Cup
                | MeasureUnit::Shot
                | MeasureUnit::Part
        )
    }
}

impl fmt::Display for MeasureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Target unit system for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementSystem {
    #[default]
    Imperial,
    Metric,
}

impl MeasurementSystem {
    /// Short label shown on the unit toggle
    pub fn unit_label(&self) -> &'static str {
        match self {
            MeasurementSystem::Imperial => "oz",
            MeasurementSystem::Metric => "ml",
        }
    }
}

impl FromStr for MeasurementSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "imperial" | "oz" => Ok(MeasurementSystem::Imperial),
            "metric" | "ml" => Ok(MeasurementSystem::Metric),
            other => Err(format!("Unknown unit system: {other}")),
        }
    }
}

impl fmt::Display for MeasurementSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeasurementSystem::Imperial => f.write_str("imperial"),
            MeasurementSystem::Metric => f.write_str("metric"),
        }
    }
}

/// A measure string split into its parts; never persisted
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedMeasure {
    /// Numeric amount (e.g., 1.5 for "1 1/2")
    pub amount: f64,
    /// Recognised unit
    pub unit: MeasureUnit,
    /// Trimmed text after the unit (e.g., "(Optional float)"), possibly empty
    pub remainder: String,
}
