//! # Classifier Module
//!
//! Derives the spirit, taste, method, strength and slug of a recipe from its
//! ingredient names and instructions.
//!
//! Every function here is total: input that matches nothing degrades to a
//! fixed default rather than an error, so a regeneration run never stops on
//! a bad record. Output depends only on the arguments.
//!
//! ## Usage
//!
//! ```rust
//! use cocktails::classifier::{classify_spirit, classify_strength, generate_slug};
//! use cocktails::recipe_model::{AlcoholStrength, Spirit};
//!
//! let (primary, secondary) = classify_spirit(&["Vodka", "Kahlua", "Cream"]);
//! assert_eq!(primary, Spirit::Vodka);
//! assert_eq!(secondary, Some(Spirit::Kahlua));
//!
//! assert_eq!(classify_strength(&["Vodka"]), AlcoholStrength::Medium);
//! assert_eq!(generate_slug("Piña Colada!"), "pia-colada");
//! ```

use crate::classification_patterns::{
    LIGHT_ALCOHOL_KEYWORDS, METHOD_RULES, SPIRIT_KEYWORDS, STRONG_SPIRIT_KEYWORDS, TASTE_KEYWORDS,
};
use crate::recipe_model::{
    AlcoholStrength, Classification, PrepMethod, Recipe, Spirit, TasteTag, DEFAULT_METHOD,
    DEFAULT_TASTE, UNCLASSIFIED_SPIRIT,
};
use lazy_static::lazy_static;
use log::{debug, trace};
use regex::Regex;

/// Number of strong-spirit ingredients from which a recipe is "Strong"
pub const STRONG_SPIRIT_THRESHOLD: usize = 3;

lazy_static! {
    static ref NON_SLUG_CHARS: Regex =
        Regex::new(r"[^a-z0-9\s-]").expect("Slug filter pattern should be valid");
    static ref WHITESPACE_RUNS: Regex =
        Regex::new(r"\s+").expect("Whitespace pattern should be valid");
    static ref HYPHEN_RUNS: Regex = Regex::new(r"-+").expect("Hyphen pattern should be valid");
}

/// Detect the primary and secondary spirit of a recipe
///
/// Each ingredient is checked against every spirit rule; matches are recorded
/// once, in the order ingredients are listed (rule order only breaks ties
/// inside a single ingredient). The first detection is the primary spirit,
/// the second (if any) the secondary.
///
/// # Returns
///
/// `(UNCLASSIFIED_SPIRIT, None)` when nothing matches
pub fn classify_spirit<S: AsRef<str>>(ingredients: &[S]) -> (Spirit, Option<Spirit>) {
    let mut found: Vec<Spirit> = Vec::new();

    for ingredient in ingredients {
        let lower = ingredient.as_ref().to_lowercase();
        for (keywords, spirit) in SPIRIT_KEYWORDS {
            if keywords.iter().any(|kw| lower.contains(kw)) && !found.contains(spirit) {
                trace!("Ingredient '{}' matched spirit {}", ingredient.as_ref(), spirit);
                found.push(spirit.clone());
            }
        }
    }

    let mut found = found.into_iter();
    match found.next() {
        Some(primary) => (primary, found.next()),
        None => (UNCLASSIFIED_SPIRIT, None),
    }
}

/// Collect the taste tags suggested by the ingredient names
///
/// Tags are deduplicated and kept in first-seen order. The result is never
/// empty: with no keyword hit it is `[DEFAULT_TASTE]`.
pub fn classify_taste<S: AsRef<str>>(ingredients: &[S]) -> Vec<TasteTag> {
    let mut tags: Vec<TasteTag> = Vec::new();

    for ingredient in ingredients {
        let lower = ingredient.as_ref().to_lowercase();
        for (keyword, tastes) in TASTE_KEYWORDS {
            if lower.contains(keyword) {
                for taste in *tastes {
                    if !tags.contains(taste) {
                        tags.push(*taste);
                    }
                }
            }
        }
    }

    if tags.is_empty() {
        tags.push(DEFAULT_TASTE);
    }

    tags
}

/// Pick the preparation method from the instructions text
///
/// Rules are tried in the order blend, layer/float, shake, stir, press, so
/// "Shake, then stir in the soda" is Shaken. No match gives `DEFAULT_METHOD`.
pub fn classify_method(instructions: &str) -> PrepMethod {
    let lower = instructions.to_lowercase();

    METHOD_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|kw| lower.contains(kw)))
        .map(|(_, method)| *method)
        .unwrap_or(DEFAULT_METHOD)
}

/// Estimate the alcohol strength tier
///
/// One or two strong-spirit ingredients both give `Medium`; only three or
/// more give `Strong`.
pub fn classify_strength<S: AsRef<str>>(ingredients: &[S]) -> AlcoholStrength {
    let mut spirit_count = 0;
    let mut has_alcohol = false;

    for ingredient in ingredients {
        let lower = ingredient.as_ref().to_lowercase();
        if STRONG_SPIRIT_KEYWORDS.iter().any(|s| lower.contains(s)) {
            spirit_count += 1;
            has_alcohol = true;
        }
        if LIGHT_ALCOHOL_KEYWORDS.iter().any(|s| lower.contains(s)) {
            has_alcohol = true;
        }
    }

    if !has_alcohol {
        AlcoholStrength::NonAlcoholic
    } else if spirit_count >= STRONG_SPIRIT_THRESHOLD {
        AlcoholStrength::Strong
    } else if spirit_count >= 1 {
        AlcoholStrength::Medium
    } else {
        AlcoholStrength::Light
    }
}

/// Build a URL-safe slug from a display name
///
/// The output only contains `[a-z0-9-]`, has no leading, trailing or doubled
/// hyphens, and `generate_slug(&generate_slug(x)) == generate_slug(x)`.
pub fn generate_slug(name: &str) -> String {
    let lower = name.to_lowercase();
    let filtered = NON_SLUG_CHARS.replace_all(&lower, "");
    let hyphenated = WHITESPACE_RUNS.replace_all(&filtered, "-");
    let collapsed = HYPHEN_RUNS.replace_all(&hyphenated, "-");
    collapsed.trim_matches('-').to_string()
}

/// Run every classifier over one recipe's name, ingredients and instructions
pub fn classify<S: AsRef<str>>(name: &str, ingredients: &[S], instructions: &str) -> Classification {
    let (primary_spirit, secondary_spirit) = classify_spirit(ingredients);
    let classification = Classification {
        slug: generate_slug(name),
        primary_spirit,
        secondary_spirit,
        taste_tags: classify_taste(ingredients),
        prep_method: classify_method(instructions),
        alcohol_strength: classify_strength(ingredients),
    };

    debug!(
        "Classified '{}': spirit={} method={} strength={} tastes={}",
        name,
        classification.primary_spirit,
        classification.prep_method,
        classification.alcohol_strength,
        classification.taste_tags.len()
    );

    classification
}

/// Classify a recipe from its own fields
pub fn classify_recipe(recipe: &Recipe) -> Classification {
    classify(&recipe.name, &recipe.ingredient_names(), &recipe.instructions)
}

/// Page title for a recipe detail page
pub fn meta_title(name: &str, spirit: &Spirit, country: &str) -> String {
    format!("{name} Cocktail Recipe | {spirit} Drink from {country}")
}

/// Page description built from the first four ingredients
pub fn meta_description<S: AsRef<str>>(
    name: &str,
    spirit: &Spirit,
    country: &str,
    ingredients: &[S],
) -> String {
    let ingredient_list = ingredients
        .iter()
        .take(4)
        .map(|i| i.as_ref())
        .collect::<Vec<&str>>()
        .join(", ");

    format!(
        "Learn how to make the perfect {name} — a {}-based cocktail from {country}. \
         Made with {ingredient_list}. Full recipe, ingredients & instructions.",
        spirit.label().to_lowercase()
    )
}
