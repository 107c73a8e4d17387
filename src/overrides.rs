//! # Recipe Overrides
//!
//! Hand-curated corrections for recipes whose API data is wrong beyond what the
//! heuristics can fix. An override is keyed by exact recipe name and replaces
//! only the fields it sets.

use crate::recipe_model::{AlcoholStrength, Ingredient, PrepMethod, Recipe, Spirit, TasteTag};
use log::info;
use std::sync::LazyLock;

/// Field replacements for one recipe
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeOverride {
    pub name: &'static str,
    pub ingredients: Option<Vec<Ingredient>>,
    pub instructions: Option<&'static str>,
    pub glassware: Option<&'static str>,
    pub primary_spirit: Option<Spirit>,
    /// `Some(None)` clears the secondary spirit
    pub secondary_spirit: Option<Option<Spirit>>,
    pub prep_method: Option<PrepMethod>,
    pub taste_tags: Option<Vec<TasteTag>>,
    pub alcohol_strength: Option<AlcoholStrength>,
    pub meta_title: Option<&'static str>,
    pub meta_description: Option<&'static str>,
}

/// The fixed override table
pub static RECIPE_OVERRIDES: LazyLock<Vec<RecipeOverride>> = LazyLock::new(|| {
    vec![RecipeOverride {
        name: "Bob Marley",
        ingredients: Some(vec![
            Ingredient::new("Grenadine", "1/3 oz"),
            Ingredient::new("Banana Liqueur", "1/3 oz"),
            Ingredient::new("Crème de Menthe", "1/3 oz"),
            Ingredient::new("Overproof Rum", "1/4 oz (Optional float)"),
        ]),
        instructions: Some(
            "Carefully layer the ingredients in a shot glass in the following order: \
             Grenadine at the bottom, Banana Liqueur in the middle, and Crème de Menthe on top. \
             Optional: float a thin layer of overproof rum on top and carefully ignite.",
        ),
        glassware: Some("Shot glass"),
        primary_spirit: Some(Spirit::Unlisted("Liqueur".to_string())),
        secondary_spirit: Some(Some(Spirit::Rum)),
        prep_method: Some(PrepMethod::Layered),
        taste_tags: Some(vec![TasteTag::Sweet, TasteTag::Herbal, TasteTag::Strong]),
        alcohol_strength: Some(AlcoholStrength::Medium),
        meta_title: Some("Bob Marley Shot Recipe | Layered Shooter"),
        meta_description: Some(
            "Celebrate with the classic Bob Marley layered shot. Learn how to layer Grenadine, \
             Banana Liqueur, and Crème de Menthe for the perfect red, yellow, and green drink.",
        ),
    }]
});

impl RecipeOverride {
    /// Copy every set field onto the recipe
    pub fn apply(&self, recipe: &mut Recipe) {
        if let Some(ingredients) = &self.ingredients {
            recipe.ingredients = ingredients.clone();
        }
        if let Some(instructions) = self.instructions {
            recipe.instructions = instructions.to_string();
        }
        if let Some(glassware) = self.glassware {
            recipe.glassware = glassware.to_string();
        }
        if let Some(spirit) = &self.primary_spirit {
            recipe.primary_spirit = spirit.clone();
        }
        if let Some(spirit) = &self.secondary_spirit {
            recipe.secondary_spirit = spirit.clone();
        }
        if let Some(method) = self.prep_method {
            recipe.prep_method = method;
        }
        if let Some(tags) = &self.taste_tags {
            recipe.taste_tags = tags.clone();
        }
        if let Some(strength) = self.alcohol_strength {
            recipe.alcohol_strength = strength;
        }
        if let Some(title) = self.meta_title {
            recipe.meta_title = title.to_string();
        }
        if let Some(description) = self.meta_description {
            recipe.meta_description = description.to_string();
        }
    }
}

/// Apply the matching overrides, returning how many recipes were patched
pub fn apply_overrides(recipes: &mut [Recipe], overrides: &[RecipeOverride]) -> usize {
    let mut patched = 0;

    for recipe in recipes.iter_mut() {
        if let Some(entry) = overrides.iter().find(|o| o.name == recipe.name) {
            entry.apply(recipe);
            patched += 1;
        }
    }

    info!("Patched {} recipes from {} overrides", patched, overrides.len());
    patched
}
