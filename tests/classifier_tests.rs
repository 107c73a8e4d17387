#[cfg(test)]
mod tests {
    use cocktails::classifier::{
        classify, classify_method, classify_spirit, classify_strength, classify_taste,
        generate_slug, meta_description, meta_title,
    };
    use cocktails::recipe_model::{
        AlcoholStrength, PrepMethod, Spirit, TasteTag, DEFAULT_TASTE, UNCLASSIFIED_SPIRIT,
    };
    use cocktails::region::{classify_region, correct_recipe};
    use cocktails::recipe_model::{Recipe, Region};
    use std::collections::HashSet;

    #[test]
    fn test_known_spirit_is_primary() {
        for (ingredient, spirit) in [
            ("Vodka", Spirit::Vodka),
            ("Añejo Tequila", Spirit::Tequila),
            ("Bacardi Light Rum", Spirit::Rum),
            ("Cognac", Spirit::Brandy),
            ("Prosecco", Spirit::Champagne),
            ("Cachaça", Spirit::Cachaca),
        ] {
            let (primary, _) = classify_spirit(&[ingredient, "Orange juice"]);
            assert_eq!(primary, spirit, "ingredient {ingredient}");
        }
    }

    #[test]
    fn test_primary_follows_ingredient_order() {
        let (primary, secondary) = classify_spirit(&["Coffee liqueur", "Vodka", "Light cream"]);
        assert_eq!(primary, Spirit::Kahlua);
        assert_eq!(secondary, Some(Spirit::Vodka));

        let (primary, secondary) = classify_spirit(&["Vodka", "Coffee liqueur", "Light cream"]);
        assert_eq!(primary, Spirit::Vodka);
        assert_eq!(secondary, Some(Spirit::Kahlua));
    }

    #[test]
    fn test_no_spirit_is_unclassified() {
        assert_eq!(
            classify_spirit(&["Orange juice", "Grenadine", "Soda water"]),
            (UNCLASSIFIED_SPIRIT, None)
        );
    }

    #[test]
    fn test_taste_never_empty() {
        let empty: [&str; 0] = [];
        for ingredients in [&empty[..], &["Water"][..], &["Egg white", "Salt"][..]] {
            assert_eq!(classify_taste(ingredients), vec![DEFAULT_TASTE]);
        }
        assert!(!classify_taste(&["Campari", "Gin", "Sweet Vermouth"]).is_empty());
    }

    #[test]
    fn test_taste_tags_are_unique() {
        let tags = classify_taste(&["Lime juice", "Lemon juice", "Mint", "Soda water"]);
        let unique: HashSet<TasteTag> = tags.iter().copied().collect();
        assert_eq!(tags.len(), unique.len());
        assert!(tags.contains(&TasteTag::Sour));
        assert!(tags.contains(&TasteTag::Herbal));
    }

    #[test]
    fn test_method_tie_break_order() {
        assert_eq!(classify_method("Shake and stir"), PrepMethod::Shaken);
        assert_eq!(classify_method("Stir, then float cream on top"), PrepMethod::Layered);
        assert_eq!(classify_method("Blend, then shake"), PrepMethod::Blended);
        assert_eq!(classify_method("Build over ice"), PrepMethod::Built);
    }

    #[test]
    fn test_strength_examples() {
        assert_eq!(
            classify_strength(&["Vodka", "Vodka", "Vodka"]),
            AlcoholStrength::Strong
        );
        assert_eq!(classify_strength(&["Vodka"]), AlcoholStrength::Medium);
        assert_eq!(classify_strength(&["Rum", "Gin"]), AlcoholStrength::Medium);
        assert_eq!(classify_strength(&["Triple Sec"]), AlcoholStrength::Light);
        assert_eq!(classify_strength(&["Water"]), AlcoholStrength::NonAlcoholic);
    }

    #[test]
    fn test_slug_properties() {
        for name in [
            "Piña Colada",
            "A.D.M. (After Dinner Mint)",
            "Jack's Vanilla Coke",
            "  ",
            "Long Island Iced Tea",
            "Zizi Coin-coin",
        ] {
            let slug = generate_slug(name);
            assert_eq!(generate_slug(&slug), slug, "name {name}");
            assert!(slug
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
            assert!(!slug.starts_with('-') && !slug.ends_with('-'));
            assert!(!slug.contains("--"));
        }
        assert_eq!(generate_slug("A.D.M. (After Dinner Mint)"), "adm-after-dinner-mint");
    }

    #[test]
    fn test_full_classification_of_margarita() {
        let classification = classify(
            "Margarita",
            &["Tequila", "Triple sec", "Lime juice"],
            "Rub the rim of the glass with the lime slice. Shake the other ingredients with ice.",
        );

        assert_eq!(classification.slug, "margarita");
        assert_eq!(classification.primary_spirit, Spirit::Tequila);
        assert_eq!(classification.secondary_spirit, None);
        assert_eq!(classification.prep_method, PrepMethod::Shaken);
        assert_eq!(classification.alcohol_strength, AlcoholStrength::Medium);
        assert!(classification.taste_tags.contains(&TasteTag::Sweet));
        assert!(classification.taste_tags.contains(&TasteTag::Sour));
    }

    #[test]
    fn test_classification_is_deterministic() {
        let ingredients = ["Gin", "Campari", "Sweet Vermouth", "Orange peel"];
        let first = classify("Negroni", &ingredients, "Stir with ice.");
        let second = classify("Negroni", &ingredients, "Stir with ice.");
        assert_eq!(first, second);
    }

    #[test]
    fn test_meta_text() {
        assert_eq!(
            meta_title("Mojito", &Spirit::Rum, "Global"),
            "Mojito Cocktail Recipe | Rum Drink from Global"
        );
        let description = meta_description(
            "Mojito",
            &Spirit::Rum,
            "Global",
            &["Light rum", "Lime", "Sugar", "Mint", "Soda water"],
        );
        assert!(description.contains("rum-based cocktail from Global"));
        assert!(description.contains("Made with Light rum, Lime, Sugar, Mint."));
    }

    #[test]
    fn test_region_chain() {
        assert_eq!(classify_region("Pisco Sour", &["Pisco"], None), Region::SouthAmerica);
        assert_eq!(classify_region("Brazilian Caipirinha", &["Cachaca"], None), Region::SouthAmerica);
        assert_eq!(classify_region("Tokyo Sling", &["Gin"], None), Region::Asia);
        assert_eq!(
            classify_region("Nightcap", &["Milk"], Some(&Spirit::Scotch)),
            Region::Europe
        );
    }

    #[test]
    fn test_correction_pass_on_recipe() {
        let mut recipe = Recipe::new("1", "white russian")
            .with_ingredient("Vodka", "2 oz")
            .with_ingredient("kahlua", "1 oz");

        let outcome = correct_recipe(&mut recipe);
        assert!(outcome.region_changed && outcome.names_fixed);
        assert_eq!(recipe.name, "White Russian");
        assert_eq!(recipe.ingredients[1].name, "Kahlúa");
        assert_eq!(recipe.region, Some(Region::Europe));
    }
}
