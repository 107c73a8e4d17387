//! # Recipe Data Model
//!
//! This module defines the records stored in the cocktail dataset file and the
//! closed vocabularies used to tag them.
//!
//! ## Core Concepts
//!
//! - **Recipe**: One cocktail with its ingredients, instructions and derived tags
//! - **Ingredient**: A name plus a free-text measure ("1 1/2 oz", "2 cl", "")
//! - **Spirit / TasteTag / PrepMethod / AlcoholStrength / Region**: derived tags
//! - **Classification**: The tuple produced by the classifier for one recipe
//!
//! ## Usage
//!
//! ```rust
//! use cocktails::recipe_model::{Recipe, Spirit};
//!
//! let recipe = Recipe::new("11007", "Margarita")
//!     .with_ingredient("Tequila", "1 1/2 oz")
//!     .with_ingredient("Triple sec", "1/2 oz")
//!     .with_instructions("Shake with ice and strain.");
//!
//! assert_eq!(recipe.ingredient_names(), vec!["Tequila", "Triple sec"]);
//! assert_eq!(recipe.primary_spirit, Spirit::Other);
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Primary spirit assigned when no ingredient matches any spirit keyword
pub const UNCLASSIFIED_SPIRIT: Spirit = Spirit::Other;

/// Taste tag assigned when no ingredient matches any taste keyword
pub const DEFAULT_TASTE: TasteTag = TasteTag::Refreshing;

/// Method assigned when the instructions mention no known technique
pub const DEFAULT_METHOD: PrepMethod = PrepMethod::Built;

/// Region assigned when every region heuristic misses
pub const DEFAULT_REGION: Region = Region::NorthAmerica;

/// Base spirit of a cocktail
///
/// Serialized as its display label. Labels outside the vocabulary (for example
/// `"Liqueur"` written by an override) round-trip through [`Spirit::Unlisted`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Spirit {
    Vodka,
    Gin,
    Rum,
    Tequila,
    Mezcal,
    Bourbon,
    Scotch,
    Whiskey,
    Brandy,
    Champagne,
    Wine,
    Beer,
    Absinthe,
    Amaretto,
    Kahlua,
    Baileys,
    Aperol,
    Campari,
    Vermouth,
    Pisco,
    Sake,
    Cachaca,
    NonAlcoholic,
    /// Unclassified sentinel
    #[default]
    Other,
    /// A label found in an existing dataset that is not part of the vocabulary
    Unlisted(String),
}

impl Spirit {
    /// Every vocabulary spirit in display order
    pub const ALL: [Spirit; 24] = [
        Spirit::Vodka,
        Spirit::Gin,
        Spirit::Rum,
        Spirit::Tequila,
        Spirit::Whiskey,
        Spirit::Bourbon,
        Spirit::Scotch,
        Spirit::Mezcal,
        Spirit::Brandy,
        Spirit::Champagne,
        Spirit::Wine,
        Spirit::Beer,
        Spirit::Absinthe,
        Spirit::Amaretto,
        Spirit::Kahlua,
        Spirit::Baileys,
        Spirit::Aperol,
        Spirit::Campari,
        Spirit::Vermouth,
        Spirit::Pisco,
        Spirit::Sake,
        Spirit::Cachaca,
        Spirit::NonAlcoholic,
        Spirit::Other,
    ];

    /// Get the display label
    pub fn label(&self) -> &str {
        match self {
            Spirit::Vodka => "Vodka",
            Spirit::Gin => "Gin",
            Spirit::Rum => "Rum",
            Spirit::Tequila => "Tequila",
            Spirit::Mezcal => "Mezcal",
            Spirit::Bourbon => "Bourbon",
            Spirit::Scotch => "Scotch",
            Spirit::Whiskey => "Whiskey",
            Spirit::Brandy => "Brandy",
            Spirit::Champagne => "Champagne",
            Spirit::Wine => "Wine",
            Spirit::Beer => "Beer",
            Spirit::Absinthe => "Absinthe",
            Spirit::Amaretto => "Amaretto",
            Spirit::Kahlua => "Kahlúa",
            Spirit::Baileys => "Baileys",
            Spirit::Aperol => "Aperol",
            Spirit::Campari => "Campari",
            Spirit::Vermouth => "Vermouth",
            Spirit::Pisco => "Pisco",
            Spirit::Sake => "Sake",
            Spirit::Cachaca => "Cachaça",
            Spirit::NonAlcoholic => "Non-Alcoholic",
            Spirit::Other => "Other",
            Spirit::Unlisted(label) => label,
        }
    }

    /// URL slug for spirit landing pages; `None` for unlisted labels
    pub fn slug(&self) -> Option<&'static str> {
        let slug = match self {
            Spirit::Vodka => "vodka",
            Spirit::Gin => "gin",
            Spirit::Rum => "rum",
            Spirit::Tequila => "tequila",
            Spirit::Mezcal => "mezcal",
            Spirit::Bourbon => "bourbon",
            Spirit::Scotch => "scotch",
            Spirit::Whiskey => "whiskey",
            Spirit::Brandy => "brandy",
            Spirit::Champagne => "champagne",
            Spirit::Wine => "wine",
            Spirit::Beer => "beer",
            Spirit::Absinthe => "absinthe",
            Spirit::Amaretto => "amaretto",
            Spirit::Kahlua => "kahlua",
            Spirit::Baileys => "baileys",
            Spirit::Aperol => "aperol",
            Spirit::Campari => "campari",
            Spirit::Vermouth => "vermouth",
            Spirit::Pisco => "pisco",
            Spirit::Sake => "sake",
            Spirit::Cachaca => "cachaca",
            Spirit::NonAlcoholic => "non-alcoholic",
            Spirit::Other => "other",
            Spirit::Unlisted(_) => return None,
        };
        Some(slug)
    }

    /// Map a display label back to a spirit, keeping unknown labels verbatim
    pub fn from_label(label: &str) -> Self {
        Spirit::ALL
            .iter()
            .find(|spirit| spirit.label() == label)
            .cloned()
            .unwrap_or_else(|| Spirit::Unlisted(label.to_string()))
    }
}

impl From<String> for Spirit {
    fn from(label: String) -> Self {
        Spirit::from_label(&label)
    }
}

impl From<Spirit> for String {
    fn from(spirit: Spirit) -> Self {
        match spirit {
            Spirit::Unlisted(label) => label,
            other => other.label().to_string(),
        }
    }
}

impl fmt::Display for Spirit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Flavor descriptor attached to a recipe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TasteTag {
    Sweet,
    Sour,
    Bitter,
    Floral,
    Earthy,
    Smoky,
    Spicy,
    Fruity,
    Herbal,
    Dry,
    Strong,
    Refreshing,
}

impl TasteTag {
    pub const ALL: [TasteTag; 12] = [
        TasteTag::Sweet,
        TasteTag::Sour,
        TasteTag::Bitter,
        TasteTag::Floral,
        TasteTag::Earthy,
        TasteTag::Smoky,
        TasteTag::Spicy,
        TasteTag::Fruity,
        TasteTag::Herbal,
        TasteTag::Dry,
        TasteTag::Strong,
        TasteTag::Refreshing,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TasteTag::Sweet => "Sweet",
            TasteTag::Sour => "Sour",
            TasteTag::Bitter => "Bitter",
            TasteTag::Floral => "Floral",
            TasteTag::Earthy => "Earthy",
            TasteTag::Smoky => "Smoky",
            TasteTag::Spicy => "Spicy",
            TasteTag::Fruity => "Fruity",
            TasteTag::Herbal => "Herbal",
            TasteTag::Dry => "Dry",
            TasteTag::Strong => "Strong",
            TasteTag::Refreshing => "Refreshing",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            TasteTag::Sweet => "sweet",
            TasteTag::Sour => "sour",
            TasteTag::Bitter => "bitter",
            TasteTag::Floral => "floral",
            TasteTag::Earthy => "earthy",
            TasteTag::Smoky => "smoky",
            TasteTag::Spicy => "spicy",
            TasteTag::Fruity => "fruity",
            TasteTag::Herbal => "herbal",
            TasteTag::Dry => "dry",
            TasteTag::Strong => "strong",
            TasteTag::Refreshing => "refreshing",
        }
    }
}

impl FromStr for TasteTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TasteTag::ALL
            .into_iter()
            .find(|tag| tag.label().eq_ignore_ascii_case(s) || tag.slug() == s)
            .ok_or_else(|| format!("Unknown taste tag: {s}"))
    }
}

impl fmt::Display for TasteTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Preparation technique
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PrepMethod {
    Shaken,
    Stirred,
    #[default]
    Built,
    Blended,
    Layered,
    Pressed,
}

impl PrepMethod {
    pub const ALL: [PrepMethod; 6] = [
        PrepMethod::Shaken,
        PrepMethod::Stirred,
        PrepMethod::Built,
        PrepMethod::Blended,
        PrepMethod::Layered,
        PrepMethod::Pressed,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PrepMethod::Shaken => "Shaken",
            PrepMethod::Stirred => "Stirred",
            PrepMethod::Built => "Built",
            PrepMethod::Blended => "Blended",
            PrepMethod::Layered => "Layered",
            PrepMethod::Pressed => "Pressed",
        }
    }
}

impl FromStr for PrepMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PrepMethod::ALL
            .into_iter()
            .find(|method| method.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown preparation method: {s}"))
    }
}

impl fmt::Display for PrepMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Coarse potency tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AlcoholStrength {
    #[default]
    #[serde(rename = "Non-Alcoholic")]
    NonAlcoholic,
    Light,
    Medium,
    Strong,
}

impl AlcoholStrength {
    pub fn label(&self) -> &'static str {
        match self {
            AlcoholStrength::NonAlcoholic => "Non-Alcoholic",
            AlcoholStrength::Light => "Light",
            AlcoholStrength::Medium => "Medium",
            AlcoholStrength::Strong => "Strong",
        }
    }
}

impl fmt::Display for AlcoholStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Region of origin used for the "from around the world" grouping
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Region {
    NorthAmerica,
    SouthAmerica,
    Caribbean,
    Europe,
    Asia,
    Unlisted(String),
}

impl Region {
    pub const ALL: [Region; 5] = [
        Region::NorthAmerica,
        Region::SouthAmerica,
        Region::Caribbean,
        Region::Europe,
        Region::Asia,
    ];

    pub fn label(&self) -> &str {
        match self {
            Region::NorthAmerica => "North America",
            Region::SouthAmerica => "South America",
            Region::Caribbean => "Caribbean",
            Region::Europe => "Europe",
            Region::Asia => "Asia",
            Region::Unlisted(label) => label,
        }
    }
}

impl From<String> for Region {
    fn from(label: String) -> Self {
        Region::ALL
            .iter()
            .find(|region| region.label() == label)
            .cloned()
            .unwrap_or(Region::Unlisted(label))
    }
}

impl From<Region> for String {
    fn from(region: Region) -> Self {
        match region {
            Region::Unlisted(label) => label,
            other => other.label().to_string(),
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Where a record came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RecipeSource {
    #[default]
    #[serde(rename = "API")]
    Api,
    Editorial,
}

/// One ingredient line of a recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Ingredient name (e.g., "Tequila", "Lime juice")
    pub name: String,
    /// Free-text measure, possibly empty (e.g., "1 1/2 oz", "2 cl", "Top up")
    #[serde(default)]
    pub measure: String,
}

impl Ingredient {
    pub fn new(name: &str, measure: &str) -> Self {
        Self {
            name: name.to_string(),
            measure: measure.to_string(),
        }
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.measure.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{} {}", self.measure, self.name)
        }
    }
}

/// A cocktail record as persisted in the dataset file
///
/// Fields the crate does not know about (for example `seoEnhanced`) are kept
/// in [`Recipe::extra`] and written back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<Region>,
    #[serde(default)]
    pub primary_spirit: Spirit,
    #[serde(default)]
    pub secondary_spirit: Option<Spirit>,
    #[serde(default)]
    pub prep_method: PrepMethod,
    #[serde(default)]
    pub taste_tags: Vec<TasteTag>,
    #[serde(default)]
    pub alcohol_strength: AlcoholStrength,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub instructions: String,
    #[serde(default)]
    pub glassware: String,
    #[serde(default)]
    pub garnish: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub meta_title: String,
    #[serde(default)]
    pub meta_description: String,
    #[serde(default)]
    pub source: RecipeSource,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Derived fields recomputed on every classification pass
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub slug: String,
    pub primary_spirit: Spirit,
    pub secondary_spirit: Option<Spirit>,
    pub taste_tags: Vec<TasteTag>,
    pub prep_method: PrepMethod,
    pub alcohol_strength: AlcoholStrength,
}

impl Recipe {
    /// Create an unclassified recipe with just an id and a name
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            slug: String::new(),
            country: String::new(),
            region: None,
            primary_spirit: UNCLASSIFIED_SPIRIT,
            secondary_spirit: None,
            prep_method: DEFAULT_METHOD,
            taste_tags: Vec::new(),
            alcohol_strength: AlcoholStrength::NonAlcoholic,
            ingredients: Vec::new(),
            instructions: String::new(),
            glassware: String::new(),
            garnish: String::new(),
            image_url: String::new(),
            meta_title: String::new(),
            meta_description: String::new(),
            source: RecipeSource::Api,
            extra: Map::new(),
        }
    }

    /// Append an ingredient line
    pub fn with_ingredient(mut self, name: &str, measure: &str) -> Self {
        self.ingredients.push(Ingredient::new(name, measure));
        self
    }

    /// Set the instructions text
    pub fn with_instructions(mut self, instructions: &str) -> Self {
        self.instructions = instructions.to_string();
        self
    }

    /// Ingredient names in recipe order
    pub fn ingredient_names(&self) -> Vec<&str> {
        self.ingredients.iter().map(|i| i.name.as_str()).collect()
    }

    /// Overwrite the derived fields, returning whether anything changed
    pub fn apply_classification(&mut self, classification: Classification) -> bool {
        let changed = self.slug != classification.slug
            || self.primary_spirit != classification.primary_spirit
            || self.secondary_spirit != classification.secondary_spirit
            || self.taste_tags != classification.taste_tags
            || self.prep_method != classification.prep_method
            || self.alcohol_strength != classification.alcohol_strength;

        self.slug = classification.slug;
        self.primary_spirit = classification.primary_spirit;
        self.secondary_spirit = classification.secondary_spirit;
        self.taste_tags = classification.taste_tags;
        self.prep_method = classification.prep_method;
        self.alcohol_strength = classification.alcohol_strength;

        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spirit_label_round_trip() {
        for spirit in Spirit::ALL {
            assert_eq!(Spirit::from_label(spirit.label()), spirit);
        }
        assert_eq!(
            Spirit::from_label("Liqueur"),
            Spirit::Unlisted("Liqueur".to_string())
        );
    }

    #[test]
    fn test_spirit_serializes_as_label() {
        let json = serde_json::to_string(&Spirit::Kahlua).unwrap();
        assert_eq!(json, "\"Kahlúa\"");
        let spirit: Spirit = serde_json::from_str("\"Cachaça\"").unwrap();
        assert_eq!(spirit, Spirit::Cachaca);
    }

    #[test]
    fn test_strength_serializes_with_hyphen() {
        let json = serde_json::to_string(&AlcoholStrength::NonAlcoholic).unwrap();
        assert_eq!(json, "\"Non-Alcoholic\"");
    }

    #[test]
    fn test_taste_tag_from_str() {
        assert_eq!("sweet".parse::<TasteTag>().unwrap(), TasteTag::Sweet);
        assert_eq!("Refreshing".parse::<TasteTag>().unwrap(), TasteTag::Refreshing);
        assert!("umami".parse::<TasteTag>().is_err());
    }

    #[test]
    fn test_recipe_keeps_unknown_fields() {
        let json = r#"{
            "id": "1",
            "name": "Test",
            "primarySpirit": "Liqueur",
            "secondarySpirit": null,
            "seoEnhanced": true
        }"#;
        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.primary_spirit, Spirit::Unlisted("Liqueur".to_string()));
        assert_eq!(recipe.secondary_spirit, None);
        assert_eq!(recipe.extra.get("seoEnhanced"), Some(&Value::Bool(true)));

        let back = serde_json::to_value(&recipe).unwrap();
        assert_eq!(back["seoEnhanced"], Value::Bool(true));
        assert_eq!(back["primarySpirit"], "Liqueur");
        assert!(back["secondarySpirit"].is_null());
        assert!(back.get("region").is_none());
    }

    #[test]
    fn test_apply_classification_reports_changes() {
        let mut recipe = Recipe::new("1", "Test");
        let classification = Classification {
            slug: "test".to_string(),
            primary_spirit: Spirit::Gin,
            secondary_spirit: None,
            taste_tags: vec![TasteTag::Strong],
            prep_method: PrepMethod::Stirred,
            alcohol_strength: AlcoholStrength::Medium,
        };

        assert!(recipe.apply_classification(classification.clone()));
        assert!(!recipe.apply_classification(classification));
        assert_eq!(recipe.primary_spirit, Spirit::Gin);
    }

    #[test]
    fn test_ingredient_display() {
        assert_eq!(Ingredient::new("Gin", "2 oz").to_string(), "2 oz Gin");
        assert_eq!(Ingredient::new("Ice", "").to_string(), "Ice");
    }
}
