//! # Classification Patterns Module
//!
//! Keyword tables used by the classifier and the region heuristics. Tables
//! whose order decides the outcome (first match wins) are ordered slices;
//! exact-lookup tables are hash maps.

use crate::recipe_model::{PrepMethod, Region, Spirit, TasteTag};
use std::collections::HashMap;
use std::sync::LazyLock;

/// Spirit rules in priority order
pub static SPIRIT_KEYWORDS: &[(&[&str], Spirit)] = &[
    (&["vodka"], Spirit::Vodka),
    (&["gin", "sloe gin"], Spirit::Gin),
    (
        &["rum", "dark rum", "light rum", "white rum", "spiced rum", "coconut rum", "malibu"],
        Spirit::Rum,
    ),
    (&["tequila", "reposado", "anejo", "blanco"], Spirit::Tequila),
    (&["mezcal"], Spirit::Mezcal),
    (&["bourbon"], Spirit::Bourbon),
    (&["scotch", "scotch whisky"], Spirit::Scotch),
    (
        &["whiskey", "whisky", "rye", "irish whiskey", "blended whiskey"],
        Spirit::Whiskey,
    ),
    (&["brandy", "cognac", "armagnac", "calvados"], Spirit::Brandy),
    (&["champagne", "prosecco", "sparkling wine", "cava"], Spirit::Champagne),
    (&["wine", "red wine", "white wine", "port", "sherry"], Spirit::Wine),
    (&["beer", "ale", "lager", "stout", "guinness"], Spirit::Beer),
    (&["absinthe"], Spirit::Absinthe),
    (&["amaretto", "disaronno"], Spirit::Amaretto),
    (&["kahlua", "kahlúa", "coffee liqueur"], Spirit::Kahlua),
    (&["baileys", "irish cream"], Spirit::Baileys),
    (&["aperol"], Spirit::Aperol),
    (&["campari"], Spirit::Campari),
    (&["vermouth", "dry vermouth", "sweet vermouth"], Spirit::Vermouth),
    (&["pisco"], Spirit::Pisco),
    (&["sake"], Spirit::Sake),
    (&["cachaca", "cachaça"], Spirit::Cachaca),
];

use TasteTag::*;

/// Ingredient keyword to taste tags, scanned in declaration order
pub static TASTE_KEYWORDS: &[(&str, &[TasteTag])] = &[
    // Sweet
    ("sugar", &[Sweet]),
    ("simple syrup", &[Sweet]),
    ("honey", &[Sweet]),
    ("agave", &[Sweet]),
    ("grenadine", &[Sweet, Fruity]),
    ("triple sec", &[Sweet]),
    ("cointreau", &[Sweet]),
    ("grand marnier", &[Sweet]),
    ("cream", &[Sweet]),
    ("condensed milk", &[Sweet]),
    ("chocolate", &[Sweet]),
    ("vanilla", &[Sweet]),
    ("maraschino", &[Sweet]),
    ("creme de", &[Sweet]),
    ("liqueur", &[Sweet]),
    ("kahlua", &[Sweet]),
    ("baileys", &[Sweet]),
    ("amaretto", &[Sweet]),
    ("malibu", &[Sweet]),
    ("blue curacao", &[Sweet]),
    ("galliano", &[Sweet]),
    ("frangelico", &[Sweet]),
    ("chambord", &[Sweet]),
    ("midori", &[Sweet, Fruity]),
    ("schnapps", &[Sweet]),
    // Sour / citrus
    ("lemon", &[Sour, Refreshing]),
    ("lime", &[Sour, Refreshing]),
    ("grapefruit", &[Sour, Fruity]),
    ("orange juice", &[Fruity, Sweet]),
    ("cranberry", &[Sour, Fruity]),
    ("sour mix", &[Sour]),
    ("citrus", &[Sour]),
    // Bitter
    ("bitters", &[Bitter]),
    ("angostura", &[Bitter]),
    ("campari", &[Bitter]),
    ("aperol", &[Bitter, Sweet]),
    ("fernet", &[Bitter, Herbal]),
    ("amaro", &[Bitter, Herbal]),
    ("tonic", &[Bitter, Refreshing]),
    // Herbal
    ("mint", &[Herbal, Refreshing]),
    ("basil", &[Herbal]),
    ("rosemary", &[Herbal]),
    ("thyme", &[Herbal]),
    ("chartreuse", &[Herbal]),
    ("absinthe", &[Herbal]),
    ("elderflower", &[Floral, Sweet]),
    ("st. germain", &[Floral, Sweet]),
    ("vermouth", &[Herbal, Dry]),
    // Fruity
    ("pineapple", &[Fruity, Sweet]),
    ("mango", &[Fruity, Sweet]),
    ("passion fruit", &[Fruity]),
    ("peach", &[Fruity, Sweet]),
    ("strawberry", &[Fruity, Sweet]),
    ("raspberry", &[Fruity]),
    ("blackberry", &[Fruity]),
    ("coconut", &[Fruity, Sweet]),
    ("banana", &[Fruity, Sweet]),
    ("apple", &[Fruity]),
    ("watermelon", &[Fruity, Refreshing]),
    // Smoky
    ("mezcal", &[Smoky, Strong]),
    ("scotch", &[Smoky]),
    ("lapsang", &[Smoky]),
    // Spicy
    ("tabasco", &[Spicy]),
    ("jalapeño", &[Spicy]),
    ("jalapeno", &[Spicy]),
    ("chili", &[Spicy]),
    ("pepper", &[Spicy]),
    ("ginger", &[Spicy, Refreshing]),
    ("cinnamon", &[Spicy, Sweet]),
    ("cayenne", &[Spicy]),
    ("horseradish", &[Spicy]),
    // Earthy
    ("coffee", &[Earthy, Bitter]),
    ("espresso", &[Earthy, Bitter]),
    ("cacao", &[Earthy]),
    ("tea", &[Earthy]),
    ("matcha", &[Earthy]),
    ("turmeric", &[Earthy]),
    // Refreshing
    ("soda", &[Refreshing]),
    ("club soda", &[Refreshing]),
    ("sparkling", &[Refreshing]),
    ("tonic water", &[Refreshing, Bitter]),
    ("cucumber", &[Refreshing]),
    ("ice", &[Refreshing]),
    // Floral
    ("rose", &[Floral]),
    ("lavender", &[Floral]),
    ("hibiscus", &[Floral]),
    ("violet", &[Floral]),
    // Dry
    ("dry vermouth", &[Dry]),
    ("dry gin", &[Dry]),
    // Strong
    ("bourbon", &[Strong]),
    ("whiskey", &[Strong]),
    ("rum", &[Strong]),
    ("tequila", &[Strong]),
    ("vodka", &[Strong]),
    ("gin", &[Strong]),
    ("brandy", &[Strong]),
    ("cognac", &[Strong]),
];

/// Method rules; the first rule with a keyword in the instructions wins
pub static METHOD_RULES: &[(&[&str], PrepMethod)] = &[
    (&["blend", "blender"], PrepMethod::Blended),
    (&["layer", "float"], PrepMethod::Layered),
    (&["shake", "shaken"], PrepMethod::Shaken),
    (&["stir", "stirred"], PrepMethod::Stirred),
    (&["press"], PrepMethod::Pressed),
];

/// Ingredients counted towards the "Strong" tier
pub static STRONG_SPIRIT_KEYWORDS: &[&str] = &[
    "vodka", "gin", "rum", "tequila", "whiskey", "bourbon", "scotch", "mezcal", "brandy",
    "cognac", "absinthe",
];

/// Alcohol-bearing ingredients that are not strong spirits
pub static LIGHT_ALCOHOL_KEYWORDS: &[&str] = &[
    "liqueur",
    "wine",
    "beer",
    "champagne",
    "prosecco",
    "vermouth",
    "aperol",
    "campari",
    "amaretto",
    "kahlua",
    "baileys",
    "schnapps",
    "triple sec",
    "cointreau",
    "grand marnier",
];

/// Exact lower-cased recipe name to region
pub static REGION_BY_NAME: LazyLock<HashMap<&'static str, Region>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    map.insert("margarita", Region::NorthAmerica);
    map.insert("paloma", Region::NorthAmerica);
    map.insert("mojito", Region::Caribbean);
    map.insert("daiquiri", Region::Caribbean);
    map.insert("piña colada", Region::Caribbean);
    map.insert("pina colada", Region::Caribbean);
    map.insert("caipirinha", Region::SouthAmerica);
    map.insert("pisco sour", Region::SouthAmerica);
    map.insert("negroni", Region::Europe);
    map.insert("aperol spritz", Region::Europe);
    map.insert("manhattan", Region::NorthAmerica);
    map.insert("martini", Region::NorthAmerica);
    map.insert("old fashioned", Region::NorthAmerica);
    map.insert("moscow mule", Region::NorthAmerica);
    map.insert("espresso martini", Region::Europe);
    map.insert("singapore sling", Region::Asia);
    map.insert("irish coffee", Region::Europe);
    map.insert("bloody mary", Region::Europe);
    map.insert("french 75", Region::Europe);
    map.insert("cuba libre", Region::Caribbean);
    map.insert("mai tai", Region::NorthAmerica);
    map.insert("zombie", Region::NorthAmerica);
    map.insert("dark and stormy", Region::Caribbean);
    map.insert("dark 'n' stormy", Region::Caribbean);
    map.insert("tom collins", Region::NorthAmerica);
    map.insert("gimlet", Region::Europe);
    map.insert("sidecar", Region::Europe);
    map.insert("boulevardier", Region::Europe);
    map.insert("vesper", Region::Europe);
    map.insert("americano", Region::Europe);
    // Balthazar, New York
    map.insert("french martini", Region::NorthAmerica);
    map.insert("white russian", Region::Europe);
    map.insert("champagne cocktail", Region::Europe);
    map.insert("bellini", Region::Europe);
    map.insert("kir", Region::Europe);
    map.insert("kir royale", Region::Europe);
    map.insert("pimm's cup", Region::Europe);
    map.insert("sangria", Region::Europe);
    map.insert("bramble", Region::Europe);
    map.insert("corpse reviver", Region::Europe);

    map
});

/// Substring rule on a lower-cased recipe name
#[derive(Debug)]
pub struct NameRule {
    /// Matches when the name contains any of these
    pub any_of: &'static [&'static str],
    /// ...and none of these
    pub none_of: &'static [&'static str],
    pub region: Region,
}

/// Name rules in priority order
pub static NAME_REGION_RULES: &[NameRule] = &[
    NameRule {
        any_of: &["margarita"],
        none_of: &[],
        region: Region::NorthAmerica,
    },
    NameRule {
        any_of: &["martini", "manhattan"],
        none_of: &[],
        region: Region::NorthAmerica,
    },
    NameRule {
        any_of: &["sour"],
        none_of: &["amaretto", "pisco"],
        region: Region::NorthAmerica,
    },
    NameRule {
        any_of: &["mojito", "daiquiri", "piña", "pina"],
        none_of: &[],
        region: Region::Caribbean,
    },
    NameRule {
        any_of: &["caipirinha"],
        none_of: &[],
        region: Region::SouthAmerica,
    },
    NameRule {
        any_of: &["punch"],
        none_of: &[],
        region: Region::Caribbean,
    },
    NameRule {
        any_of: &["sling"],
        none_of: &[],
        region: Region::Asia,
    },
    NameRule {
        any_of: &["spritz", "negroni", "bramble", "russian"],
        none_of: &[],
        region: Region::Europe,
    },
];

/// Ingredient substring to region, scanned in declaration order
pub static INGREDIENT_REGION_HINTS: &[(&str, Region)] = &[
    ("tequila", Region::NorthAmerica),
    ("mezcal", Region::NorthAmerica),
    ("cachaça", Region::SouthAmerica),
    ("cachaca", Region::SouthAmerica),
    ("pisco", Region::SouthAmerica),
    ("sake", Region::Asia),
    ("soju", Region::Asia),
    ("midori", Region::Asia),
    ("amaretto", Region::Europe),
    ("campari", Region::Europe),
    ("aperol", Region::Europe),
    ("prosecco", Region::Europe),
    ("champagne", Region::Europe),
    ("cognac", Region::Europe),
    ("armagnac", Region::Europe),
    ("ouzo", Region::Europe),
    ("irish cream", Region::Europe),
    ("baileys", Region::Europe),
    ("limoncello", Region::Europe),
    ("absinthe", Region::Europe),
    ("rum", Region::Caribbean),
    ("malibu", Region::Caribbean),
];

/// Lower-cased primary spirit label to region
pub static SPIRIT_REGION_FALLBACK: &[(&str, Region)] = &[
    ("tequila", Region::NorthAmerica),
    ("mezcal", Region::NorthAmerica),
    ("bourbon", Region::NorthAmerica),
    ("rye", Region::NorthAmerica),
    ("rum", Region::Caribbean),
    ("cognac", Region::Europe),
    ("amaretto", Region::Europe),
    ("campari", Region::Europe),
    ("gin", Region::Europe),
    ("scotch", Region::Europe),
];

/// Lower-cased misspelled ingredient name to its corrected form
pub static INGREDIENT_NAME_FIXES: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| {
        let mut map = HashMap::new();

        map.insert("coca-cola", "Cola");
        map.insert("coca cola", "Cola");
        map.insert("baileys irish cream", "Baileys");
        map.insert("kahlua", "Kahlúa");
        map.insert("jalapeno", "Jalapeño");
        map.insert("pina colada mix", "Piña Colada Mix");
        map.insert("creme de cacao", "Crème de Cacao");
        map.insert("creme de cassis", "Crème de Cassis");
        map.insert("creme de mure", "Crème de Mûre");
        map.insert("creme de menthe", "Crème de Menthe");
        map.insert("blue curacao", "Blue Curaçao");
        map.insert("anejo rum", "Añejo Rum");
        map.insert("jägermeister", "Jägermeister");

        map
    });

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_keywords_are_lowercase() {
        for (keywords, _) in SPIRIT_KEYWORDS {
            for keyword in *keywords {
                assert_eq!(*keyword, keyword.to_lowercase());
            }
        }
        for (keyword, _) in TASTE_KEYWORDS {
            assert_eq!(*keyword, keyword.to_lowercase());
        }
        for (keyword, _) in INGREDIENT_REGION_HINTS {
            assert_eq!(*keyword, keyword.to_lowercase());
        }
    }

    #[test]
    fn test_taste_keywords_are_unique() {
        let mut seen = HashSet::new();
        for (keyword, tags) in TASTE_KEYWORDS {
            assert!(seen.insert(*keyword), "duplicate taste keyword '{keyword}'");
            assert!(!tags.is_empty());
        }
    }

    #[test]
    fn test_method_priority_order() {
        let order: Vec<PrepMethod> = METHOD_RULES.iter().map(|(_, m)| *m).collect();
        assert_eq!(
            order,
            vec![
                PrepMethod::Blended,
                PrepMethod::Layered,
                PrepMethod::Shaken,
                PrepMethod::Stirred,
                PrepMethod::Pressed,
            ]
        );
    }

    #[test]
    fn test_exact_region_overrides() {
        assert_eq!(REGION_BY_NAME["french martini"], Region::NorthAmerica);
        assert_eq!(REGION_BY_NAME["bramble"], Region::Europe);
        assert_eq!(REGION_BY_NAME["corpse reviver"], Region::Europe);
    }
}
