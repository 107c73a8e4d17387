//! # Dataset Module
//!
//! The recipe collection lives in one JSON array file. Every maintenance pass
//! loads the whole file, transforms it in memory and rewrites it in one go:
//! output goes to a temporary file next to the target which then replaces it,
//! so readers never see a half-written dataset.

use crate::classifier::{classify, classify_recipe, meta_description, meta_title};
use crate::dataset_errors::DatasetError;
use crate::ingest::{dedupe_drinks, ParsedDrink};
use crate::overrides::{apply_overrides, RecipeOverride};
use crate::recipe_model::{Recipe, RecipeSource};
use crate::region::correct_recipe;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

/// Country written into seeded meta text
pub const SEED_COUNTRY: &str = "Global";

/// Summary of one maintenance pass
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PassReport {
    pub pass: String,
    pub total: usize,
    pub changed: usize,
    pub finished_at: DateTime<Utc>,
}

impl PassReport {
    fn new(pass: &str, total: usize, changed: usize) -> Self {
        Self {
            pass: pass.to_string(),
            total,
            changed,
            finished_at: Utc::now(),
        }
    }
}

/// Summary of a region/name correction pass
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrectionReport {
    pub total: usize,
    pub regions_changed: usize,
    pub names_fixed: usize,
    pub finished_at: DateTime<Utc>,
}

/// Read the dataset file
pub fn load_dataset(path: &Path) -> Result<Vec<Recipe>, DatasetError> {
    let json = fs::read_to_string(path).map_err(|source| DatasetError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let recipes: Vec<Recipe> = serde_json::from_str(&json).map_err(|source| DatasetError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), count = recipes.len(), "Loaded dataset");
    Ok(recipes)
}

/// Rewrite the dataset file atomically as pretty-printed JSON
pub fn save_dataset(path: &Path, recipes: &[Recipe]) -> Result<(), DatasetError> {
    let json = serde_json::to_string_pretty(recipes)?;

    let parent = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let write_error = |source: std::io::Error| DatasetError::Write {
        path: path.to_path_buf(),
        source,
    };

    fs::create_dir_all(parent).map_err(write_error)?;
    let mut temp = NamedTempFile::new_in(parent).map_err(write_error)?;
    temp.write_all(json.as_bytes()).map_err(write_error)?;
    temp.write_all(b"\n").map_err(write_error)?;

    temp.persist(path).map_err(|e| DatasetError::Persist {
        path: path.to_path_buf(),
        source: e.error,
    })?;

    info!(path = %path.display(), count = recipes.len(), "Wrote dataset");
    Ok(())
}

/// Build classified recipes from parsed API drinks
///
/// Duplicate ids are dropped (first wins) and the result is sorted by name.
pub fn seed_recipes(drinks: Vec<ParsedDrink>) -> Result<Vec<Recipe>, DatasetError> {
    let drinks = dedupe_drinks(drinks);
    if drinks.is_empty() {
        return Err(DatasetError::EmptyInput);
    }

    let non_alcoholic = drinks.iter().filter(|d| !d.is_alcoholic).count();
    let mut recipes: Vec<Recipe> = drinks.into_iter().map(seed_recipe).collect();
    recipes.sort_by_cached_key(|r| r.name.to_lowercase());

    info!(
        count = recipes.len(),
        non_alcoholic,
        "Seeded recipes from API drinks"
    );
    Ok(recipes)
}

fn seed_recipe(drink: ParsedDrink) -> Recipe {
    let names: Vec<&str> = drink.ingredients.iter().map(|i| i.name.as_str()).collect();
    let classification = classify(&drink.name, &names, &drink.instructions);
    let title = meta_title(&drink.name, &classification.primary_spirit, SEED_COUNTRY);
    let description = meta_description(
        &drink.name,
        &classification.primary_spirit,
        SEED_COUNTRY,
        &names,
    );

    let mut recipe = Recipe::new(&drink.id, &drink.name);
    recipe.apply_classification(classification);
    recipe.ingredients = drink.ingredients;
    recipe.instructions = drink.instructions;
    recipe.glassware = drink.glass;
    recipe.image_url = drink.image_url;
    recipe.meta_title = title;
    recipe.meta_description = description;
    recipe.source = RecipeSource::Api;
    recipe
}

/// Recompute slug and classification fields for every recipe
///
/// Running it twice changes nothing the second time.
pub fn regenerate(recipes: &mut [Recipe]) -> PassReport {
    let mut changed = 0;
    for recipe in recipes.iter_mut() {
        let classification = classify_recipe(recipe);
        if recipe.apply_classification(classification) {
            changed += 1;
        }
    }

    info!(total = recipes.len(), changed, "Classification pass finished");
    PassReport::new("classify", recipes.len(), changed)
}

/// Run region and name correction over every recipe
pub fn correct(recipes: &mut [Recipe]) -> CorrectionReport {
    let mut regions_changed = 0;
    let mut names_fixed = 0;

    for recipe in recipes.iter_mut() {
        let outcome = correct_recipe(recipe);
        if outcome.region_changed {
            regions_changed += 1;
        }
        if outcome.names_fixed {
            names_fixed += 1;
        }
    }

    info!(
        total = recipes.len(),
        regions_changed, names_fixed, "Correction pass finished"
    );
    CorrectionReport {
        total: recipes.len(),
        regions_changed,
        names_fixed,
        finished_at: Utc::now(),
    }
}

/// Apply an override table to the collection
pub fn patch(recipes: &mut [Recipe], overrides: &[RecipeOverride]) -> PassReport {
    let patched = apply_overrides(recipes, overrides);
    if patched == 0 {
        warn!(overrides = overrides.len(), "No recipe matched the override table");
    }
    PassReport::new("patch", recipes.len(), patched)
}

/// Primary-spirit counts, most common first (ties by label)
pub fn spirit_breakdown(recipes: &[Recipe]) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for recipe in recipes {
        *counts
            .entry(recipe.primary_spirit.label().to_string())
            .or_insert(0) += 1;
    }

    let mut breakdown: Vec<(String, usize)> = counts.into_iter().collect();
    breakdown.sort_by(|a, b| b.1.cmp(&a.1));
    breakdown
}
