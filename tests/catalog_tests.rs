#[cfg(test)]
mod tests {
    use cocktails::catalog::{spirit_by_slug, taste_by_slug, Catalog, FilterState};
    use cocktails::dataset::regenerate;
    use cocktails::measurement_types::MeasurementSystem;
    use cocktails::recipe_model::{PrepMethod, Recipe, Spirit, TasteTag};
    use cocktails::unit_conversion::convert_ingredients;

    fn catalog() -> Catalog {
        let mut recipes = vec![
            Recipe::new("1", "Mojito")
                .with_ingredient("Light rum", "2 oz")
                .with_ingredient("Lime", "1")
                .with_ingredient("Mint", "6 leaves")
                .with_ingredient("Soda water", "Top up")
                .with_instructions("Muddle mint with sugar and lime. Add rum, ice and soda."),
            Recipe::new("2", "Daiquiri")
                .with_ingredient("Light rum", "4.5 cl")
                .with_ingredient("Lime juice", "2.5 cl")
                .with_ingredient("Sugar syrup", "1.5 cl")
                .with_instructions("Shake with ice and strain."),
            Recipe::new("3", "Negroni")
                .with_ingredient("Gin", "1 oz")
                .with_ingredient("Campari", "1 oz")
                .with_ingredient("Sweet Vermouth", "1 oz")
                .with_instructions("Stir with ice and strain."),
            Recipe::new("4", "Virgin Mary")
                .with_ingredient("Tomato juice", "4 oz")
                .with_ingredient("Tabasco sauce", "2 dashes")
                .with_instructions("Pour over ice."),
        ];
        regenerate(&mut recipes);
        Catalog::new(recipes)
    }

    #[test]
    fn test_slug_lookup_after_classification() {
        let catalog = catalog();
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.by_slug("virgin-mary").unwrap().id, "4");
        assert!(catalog.by_slug("margarita").is_none());
    }

    #[test]
    fn test_filter_by_text_spirit_and_method() {
        let catalog = catalog();

        let filters = FilterState {
            search: "LIME".to_string(),
            ..Default::default()
        };
        assert_eq!(catalog.filter(&filters).len(), 2);

        let filters = FilterState {
            spirits: vec![Spirit::Rum],
            methods: vec![PrepMethod::Shaken],
            ..Default::default()
        };
        let names: Vec<&str> = catalog.filter(&filters).iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Daiquiri"]);

        let filters = FilterState {
            tastes: vec![TasteTag::Spicy],
            ..Default::default()
        };
        let names: Vec<&str> = catalog.filter(&filters).iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Virgin Mary"]);
    }

    #[test]
    fn test_related_prefers_same_spirit() {
        let catalog = catalog();
        let daiquiri = catalog.by_slug("daiquiri").unwrap();
        let related = catalog.related(daiquiri, 1);
        assert_eq!(related[0].name, "Mojito");
        assert!(catalog.related(daiquiri, 10).iter().all(|r| r.id != daiquiri.id));
    }

    #[test]
    fn test_landing_page_data() {
        let catalog = catalog();
        let rum = catalog
            .spirit_summaries()
            .into_iter()
            .find(|s| s.slug == "rum")
            .unwrap();
        assert_eq!(rum.count, 2);
        assert_eq!(rum.featured.len(), 2);

        assert_eq!(spirit_by_slug("cachaca"), Some(Spirit::Cachaca));
        assert_eq!(taste_by_slug("refreshing"), Some(TasteTag::Refreshing));
    }

    #[test]
    fn test_detail_page_measures() {
        let catalog = catalog();
        let daiquiri = catalog.by_slug("daiquiri").unwrap();
        let measures: Vec<String> = convert_ingredients(&daiquiri.ingredients, MeasurementSystem::Imperial)
            .into_iter()
            .map(|i| i.measure)
            .collect();
        assert_eq!(measures, vec!["1.8 oz", "1 oz", "0.6 oz"]);
    }
}
