//! # Ingest Mapping
//!
//! Turns raw drink objects from the third-party recipe API into `ParsedDrink`
//! values. Fetching is done elsewhere; this module only reads response
//! documents that were saved to disk (`{"drinks": [...]}`, one per letter).

use crate::dataset_errors::DatasetError;
use crate::recipe_model::Ingredient;
use log::{debug, info, warn};
use serde::Deserialize;
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

/// The API stores ingredients in fifteen numbered slots
pub const INGREDIENT_SLOTS: usize = 15;

/// Glass used when the API leaves it blank
pub const DEFAULT_GLASS: &str = "Cocktail glass";

const NON_ALCOHOLIC_MARKER: &str = "Non alcoholic";

/// One API response document
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse {
    /// `null` when a search has no hits
    pub drinks: Option<Vec<ApiDrink>>,
}

/// A drink as returned by the API
#[derive(Debug, Clone, Deserialize)]
pub struct ApiDrink {
    #[serde(rename = "idDrink")]
    pub id: String,
    #[serde(rename = "strDrink")]
    pub name: String,
    #[serde(rename = "strGlass", default)]
    pub glass: Option<String>,
    #[serde(rename = "strInstructions", default)]
    pub instructions: Option<String>,
    #[serde(rename = "strDrinkThumb", default)]
    pub thumbnail: Option<String>,
    #[serde(rename = "strAlcoholic", default)]
    pub alcoholic: Option<String>,
    /// `strIngredientN`, `strMeasureN` and every other field
    #[serde(flatten)]
    pub fields: HashMap<String, Value>,
}

/// A drink with its ingredient slots collapsed into a list
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedDrink {
    pub id: String,
    pub name: String,
    pub glass: String,
    pub instructions: String,
    pub image_url: String,
    pub is_alcoholic: bool,
    pub ingredients: Vec<Ingredient>,
}

impl ApiDrink {
    fn slot(&self, prefix: &str, index: usize) -> Option<&str> {
        self.fields
            .get(&format!("{prefix}{index}"))
            .and_then(Value::as_str)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Collapse an API drink into a `ParsedDrink`
///
/// Slots with a blank or missing ingredient name are skipped; a missing
/// measure becomes an empty string.
pub fn parse_drink(drink: &ApiDrink) -> ParsedDrink {
    let ingredients = (1..=INGREDIENT_SLOTS)
        .filter_map(|i| {
            let name = non_blank(drink.slot("strIngredient", i))?;
            let measure = non_blank(drink.slot("strMeasure", i)).unwrap_or("");
            Some(Ingredient::new(name, measure))
        })
        .collect::<Vec<Ingredient>>();

    debug!("Parsed drink '{}' with {} ingredients", drink.name, ingredients.len());

    ParsedDrink {
        id: drink.id.clone(),
        name: drink.name.clone(),
        glass: non_blank(drink.glass.as_deref())
            .unwrap_or(DEFAULT_GLASS)
            .to_string(),
        instructions: drink.instructions.clone().unwrap_or_default(),
        image_url: drink.thumbnail.clone().unwrap_or_default(),
        is_alcoholic: drink.alcoholic.as_deref() != Some(NON_ALCOHOLIC_MARKER),
        ingredients,
    }
}

/// Parse one saved API response document
pub fn parse_response(json: &str, path: &Path) -> Result<Vec<ParsedDrink>, DatasetError> {
    let response: ApiResponse =
        serde_json::from_str(json).map_err(|source| DatasetError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(response
        .drinks
        .unwrap_or_default()
        .iter()
        .map(parse_drink)
        .collect())
}

/// Read a saved API response file
pub fn read_response_file(path: &Path) -> Result<Vec<ParsedDrink>, DatasetError> {
    let json = fs::read_to_string(path).map_err(|source| DatasetError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let drinks = parse_response(&json, path)?;
    if drinks.is_empty() {
        warn!("No drinks in {}", path.display());
    }
    Ok(drinks)
}

/// Drop drinks whose id was already seen, keeping the first occurrence
pub fn dedupe_drinks(drinks: Vec<ParsedDrink>) -> Vec<ParsedDrink> {
    let total = drinks.len();
    let mut seen = HashSet::new();
    let unique: Vec<ParsedDrink> = drinks
        .into_iter()
        .filter(|drink| seen.insert(drink.id.clone()))
        .collect();

    if unique.len() != total {
        info!("Dropped {} duplicate drinks", total - unique.len());
    }
    unique
}
