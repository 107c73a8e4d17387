//! # Catalog Queries
//!
//! Read-only access to a loaded recipe collection for listing pages, landing
//! pages, detail pages and the multi-select filter.
//!
//! ```rust
//! use cocktails::catalog::{Catalog, FilterState};
//! use cocktails::recipe_model::{Recipe, Spirit};
//!
//! let mut gin_fizz = Recipe::new("1", "Gin Fizz").with_ingredient("Gin", "2 oz");
//! gin_fizz.primary_spirit = Spirit::Gin;
//! let catalog = Catalog::new(vec![gin_fizz]);
//!
//! let filter = FilterState {
//!     spirits: vec![Spirit::Gin],
//!     ..Default::default()
//! };
//! assert_eq!(catalog.filter(&filter).len(), 1);
//! ```

use crate::recipe_model::{PrepMethod, Recipe, Spirit, TasteTag};
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

/// How many recipes a spirit landing page features
pub const FEATURED_PER_SPIRIT: usize = 3;

/// Current selections of the filter UI
///
/// Empty selections and an empty search do not filter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    pub spirits: Vec<Spirit>,
    pub tastes: Vec<TasteTag>,
    pub methods: Vec<PrepMethod>,
    pub search: String,
}

/// Landing-page data for one spirit
#[derive(Debug, Clone, PartialEq)]
pub struct SpiritSummary<'a> {
    pub spirit: Spirit,
    pub slug: &'static str,
    pub count: usize,
    pub featured: Vec<&'a Recipe>,
}

/// Landing-page data for one taste tag
#[derive(Debug, Clone, PartialEq)]
pub struct TasteSummary {
    pub taste: TasteTag,
    pub slug: &'static str,
    pub count: usize,
}

/// A loaded recipe collection
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    recipes: Vec<Recipe>,
}

impl Catalog {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    pub fn all(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn by_slug(&self, slug: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.slug == slug)
    }

    /// Recipes with the spirit as primary or secondary
    pub fn by_spirit(&self, spirit: &Spirit) -> Vec<&Recipe> {
        self.recipes
            .iter()
            .filter(|r| has_spirit(r, std::slice::from_ref(spirit)))
            .collect()
    }

    pub fn by_taste(&self, taste: TasteTag) -> Vec<&Recipe> {
        self.recipes
            .iter()
            .filter(|r| r.taste_tags.contains(&taste))
            .collect()
    }

    /// Case-insensitive match on name, ingredient names or primary spirit
    pub fn search(&self, query: &str) -> Vec<&Recipe> {
        let q = query.to_lowercase();
        self.recipes
            .iter()
            .filter(|r| {
                matches_text(r, &q) || r.primary_spirit.label().to_lowercase().contains(&q)
            })
            .collect()
    }

    /// Apply the filter UI selections
    ///
    /// Categories combine with AND; choices within a category combine with OR.
    pub fn filter(&self, filters: &FilterState) -> Vec<&Recipe> {
        let q = filters.search.to_lowercase();

        let result: Vec<&Recipe> = self
            .recipes
            .iter()
            .filter(|r| q.is_empty() || matches_text(r, &q))
            .filter(|r| filters.spirits.is_empty() || has_spirit(r, &filters.spirits))
            .filter(|r| {
                filters.tastes.is_empty() || r.taste_tags.iter().any(|t| filters.tastes.contains(t))
            })
            .filter(|r| filters.methods.is_empty() || filters.methods.contains(&r.prep_method))
            .collect();

        debug!("Filter matched {} of {} recipes", result.len(), self.recipes.len());
        result
    }

    /// Most similar recipes, excluding the recipe itself
    ///
    /// Same primary spirit scores 2, same method 1, and each shared taste tag 1.
    /// Equal scores keep dataset order.
    pub fn related(&self, recipe: &Recipe, limit: usize) -> Vec<&Recipe> {
        let mut scored: Vec<(usize, &Recipe)> = self
            .recipes
            .iter()
            .filter(|other| other.id != recipe.id)
            .map(|other| (similarity(recipe, other), other))
            .collect();

        scored.sort_by(|a, b| b.0.cmp(&a.0));
        scored.into_iter().take(limit).map(|(_, r)| r).collect()
    }

    /// Counts and featured recipes for every spirit that has any
    pub fn spirit_summaries(&self) -> Vec<SpiritSummary<'_>> {
        Spirit::ALL
            .iter()
            .filter_map(|spirit| {
                let recipes = self.by_spirit(spirit);
                let slug = spirit.slug()?;
                (!recipes.is_empty()).then(|| SpiritSummary {
                    spirit: spirit.clone(),
                    slug,
                    count: recipes.len(),
                    featured: recipes.into_iter().take(FEATURED_PER_SPIRIT).collect(),
                })
            })
            .collect()
    }

    /// Counts for every taste tag that has any
    pub fn taste_summaries(&self) -> Vec<TasteSummary> {
        TasteTag::ALL
            .iter()
            .map(|&taste| TasteSummary {
                taste,
                slug: taste.slug(),
                count: self.by_taste(taste).len(),
            })
            .filter(|summary| summary.count > 0)
            .collect()
    }

    /// Pick one recipe uniformly at random
    pub fn random<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Recipe> {
        self.recipes.choose(rng)
    }
}

/// Reverse lookup of a spirit landing-page slug
pub fn spirit_by_slug(slug: &str) -> Option<Spirit> {
    Spirit::ALL.iter().find(|s| s.slug() == Some(slug)).cloned()
}

/// Reverse lookup of a taste landing-page slug
pub fn taste_by_slug(slug: &str) -> Option<TasteTag> {
    TasteTag::ALL.iter().copied().find(|t| t.slug() == slug)
}

fn matches_text(recipe: &Recipe, lower_query: &str) -> bool {
    recipe.name.to_lowercase().contains(lower_query)
        || recipe
            .ingredients
            .iter()
            .any(|i| i.name.to_lowercase().contains(lower_query))
}

fn has_spirit(recipe: &Recipe, spirits: &[Spirit]) -> bool {
    spirits.contains(&recipe.primary_spirit)
        || recipe
            .secondary_spirit
            .as_ref()
            .is_some_and(|s| spirits.contains(s))
}

fn similarity(a: &Recipe, b: &Recipe) -> usize {
    let mut score = 0;
    if a.primary_spirit == b.primary_spirit {
        score += 2;
    }
    if a.prep_method == b.prep_method {
        score += 1;
    }
    score + b.taste_tags.iter().filter(|t| a.taste_tags.contains(t)).count()
}
