//! # Region and Name Correction
//!
//! Dataset-maintenance heuristics: guess the region a cocktail comes from and
//! tidy up ingredient and recipe names. Not used at render time.
//!
//! Region lookup falls through, in order:
//!
//! 1. exact lower-cased name table
//! 2. ordered substring rules on the name
//! 3. ingredient hints (ingredients in recipe order, hints in table order)
//! 4. the recipe's recorded primary spirit
//! 5. `DEFAULT_REGION`

use crate::classification_patterns::{
    INGREDIENT_NAME_FIXES, INGREDIENT_REGION_HINTS, NAME_REGION_RULES, REGION_BY_NAME,
    SPIRIT_REGION_FALLBACK,
};
use crate::recipe_model::{Recipe, Region, Spirit, DEFAULT_REGION};
use log::trace;

/// What a correction pass changed on one recipe
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CorrectionOutcome {
    pub region_changed: bool,
    pub names_fixed: bool,
}

/// Guess a recipe's region from its name, ingredients and primary spirit
pub fn classify_region<S: AsRef<str>>(
    name: &str,
    ingredients: &[S],
    primary_spirit: Option<&Spirit>,
) -> Region {
    let lower_name = name.to_lowercase();

    if let Some(region) = REGION_BY_NAME.get(lower_name.as_str()) {
        trace!("Region for '{}' from exact name table", name);
        return region.clone();
    }

    if let Some(rule) = NAME_REGION_RULES.iter().find(|rule| {
        rule.any_of.iter().any(|kw| lower_name.contains(kw))
            && !rule.none_of.iter().any(|kw| lower_name.contains(kw))
    }) {
        trace!("Region for '{}' from name rule {:?}", name, rule.any_of);
        return rule.region.clone();
    }

    for ingredient in ingredients {
        let lower = ingredient.as_ref().to_lowercase();
        if let Some((hint, region)) = INGREDIENT_REGION_HINTS
            .iter()
            .find(|(hint, _)| lower.contains(hint))
        {
            trace!("Region for '{}' from ingredient hint '{}'", name, hint);
            return region.clone();
        }
    }

    primary_spirit
        .and_then(|spirit| {
            let label = spirit.label().to_lowercase();
            SPIRIT_REGION_FALLBACK
                .iter()
                .find(|(key, _)| *key == label)
                .map(|(_, region)| region.clone())
        })
        .unwrap_or(DEFAULT_REGION)
}

/// Correct a misspelled or unaccented ingredient name
///
/// Names found in the exception table (compared trimmed and lower-cased) are
/// replaced; everything else is only trimmed.
pub fn fix_ingredient_name(name: &str) -> String {
    let trimmed = name.trim();
    match INGREDIENT_NAME_FIXES.get(trimmed.to_lowercase().as_str()) {
        Some(fixed) => fixed.to_string(),
        None => trimmed.to_string(),
    }
}

/// Capitalise each space-separated word of an all-lowercase recipe name
///
/// Names with any uppercase letter are returned unchanged.
pub fn title_case_name(name: &str) -> String {
    if name != name.to_lowercase() {
        return name.to_string();
    }

    name.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Apply region and name corrections to one recipe in place
pub fn correct_recipe(recipe: &mut Recipe) -> CorrectionOutcome {
    let mut outcome = CorrectionOutcome::default();

    let region = classify_region(
        &recipe.name,
        &recipe.ingredient_names(),
        Some(&recipe.primary_spirit),
    );
    if recipe.region.as_ref() != Some(&region) {
        recipe.region = Some(region);
        outcome.region_changed = true;
    }

    for ingredient in &mut recipe.ingredients {
        let fixed = fix_ingredient_name(&ingredient.name);
        if fixed != ingredient.name {
            ingredient.name = fixed;
            outcome.names_fixed = true;
        }
    }

    let titled = title_case_name(&recipe.name);
    if titled != recipe.name {
        recipe.name = titled;
        outcome.names_fixed = true;
    }

    outcome
}
