#[cfg(test)]
mod tests {
    use cocktails::dataset::{
        correct, load_dataset, patch, regenerate, save_dataset, seed_recipes, spirit_breakdown,
    };
    use cocktails::dataset_errors::DatasetError;
    use cocktails::ingest::read_response_file;
    use cocktails::overrides::RECIPE_OVERRIDES;
    use cocktails::recipe_model::{PrepMethod, Region, Spirit};
    use serde_json::json;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn write_response(dir: &Path, name: &str, drinks: serde_json::Value) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, json!({ "drinks": drinks }).to_string()).unwrap();
        path
    }

    fn api_drink(id: &str, name: &str, ingredients: &[(&str, &str)], instructions: &str) -> serde_json::Value {
        let mut drink = json!({
            "idDrink": id,
            "strDrink": name,
            "strAlcoholic": "Alcoholic",
            "strGlass": "Old-fashioned glass",
            "strInstructions": instructions,
            "strDrinkThumb": format!("https://example.com/{id}.jpg"),
        });
        for (i, (ingredient, measure)) in ingredients.iter().enumerate() {
            drink[format!("strIngredient{}", i + 1)] = json!(ingredient);
            drink[format!("strMeasure{}", i + 1)] = json!(measure);
        }
        drink
    }

    fn seeded_dataset(dir: &Path) -> PathBuf {
        let a = write_response(
            dir,
            "a.json",
            json!([
                api_drink("1", "Bob Marley", &[("151 proof rum", "1 oz")], "Layer in a shot glass."),
                api_drink("2", "negroni", &[("Gin", "1 oz"), ("Campari", "1 oz"), ("Sweet Vermouth", "1 oz")], "Stir with ice."),
            ]),
        );
        let b = write_response(
            dir,
            "b.json",
            json!([
                api_drink("2", "Negroni (duplicate)", &[], ""),
                api_drink("3", "Cuba Libre", &[("Light rum", "2 oz"), ("Coca-Cola", "Top up")], "Build over ice."),
            ]),
        );

        let mut drinks = read_response_file(&a).unwrap();
        drinks.extend(read_response_file(&b).unwrap());
        let recipes = seed_recipes(drinks).unwrap();

        let path = dir.join("data").join("cocktails.json");
        save_dataset(&path, &recipes).unwrap();
        path
    }

    #[test]
    fn test_seed_writes_sorted_unique_records() {
        let dir = TempDir::new().unwrap();
        let path = seeded_dataset(dir.path());
        let recipes = load_dataset(&path).unwrap();

        let names: Vec<&str> = recipes.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Bob Marley", "Cuba Libre", "negroni"]);
        assert_eq!(recipes[2].slug, "negroni");
        assert_eq!(recipes[2].prep_method, PrepMethod::Stirred);
        assert_eq!(recipes[1].image_url, "https://example.com/3.jpg");
    }

    #[test]
    fn test_saved_file_uses_dataset_field_names() {
        let dir = TempDir::new().unwrap();
        let path = seeded_dataset(dir.path());
        let raw: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();

        let first = &raw[0];
        assert_eq!(first["primarySpirit"], "Rum");
        assert_eq!(first["alcoholStrength"], "Medium");
        assert_eq!(first["source"], "API");
        assert!(first["tasteTags"].is_array());
        assert!(first.get("region").is_none());
    }

    #[test]
    fn test_full_maintenance_run() {
        let dir = TempDir::new().unwrap();
        let path = seeded_dataset(dir.path());
        let mut recipes = load_dataset(&path).unwrap();

        assert_eq!(regenerate(&mut recipes).changed, 0);

        let report = correct(&mut recipes);
        assert_eq!(report.total, 3);
        assert_eq!(report.regions_changed, 3);
        assert_eq!(report.names_fixed, 2);

        let report = patch(&mut recipes, &RECIPE_OVERRIDES);
        assert_eq!(report.changed, 1);

        save_dataset(&path, &recipes).unwrap();
        let reloaded = load_dataset(&path).unwrap();
        assert_eq!(reloaded, recipes);

        let bob = &reloaded[0];
        assert_eq!(bob.primary_spirit, Spirit::Unlisted("Liqueur".to_string()));
        assert_eq!(bob.glassware, "Shot glass");
        assert_eq!(reloaded[1].ingredients[1].name, "Cola");
        assert_eq!(reloaded[1].region, Some(Region::Caribbean));
        assert_eq!(reloaded[2].name, "Negroni");
        assert_eq!(reloaded[2].region, Some(Region::Europe));
    }

    #[test]
    fn test_unknown_fields_survive_rewrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cocktails.json");
        fs::write(
            &path,
            r#"[{"id": "9", "name": "Gin Fizz", "ingredients": [{"name": "Gin", "measure": "2 oz"}], "seoEnhanced": true}]"#,
        )
        .unwrap();

        let mut recipes = load_dataset(&path).unwrap();
        regenerate(&mut recipes);
        save_dataset(&path, &recipes).unwrap();

        let raw: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw[0]["seoEnhanced"], true);
        assert_eq!(raw[0]["slug"], "gin-fizz");
        assert_eq!(raw[0]["primarySpirit"], "Gin");
    }

    #[test]
    fn test_load_errors() {
        let dir = TempDir::new().unwrap();
        let bad = dir.path().join("bad.json");
        fs::write(&bad, "{ not json").unwrap();

        assert!(matches!(load_dataset(&bad), Err(DatasetError::Parse { .. })));
        assert!(matches!(
            load_dataset(&dir.path().join("missing.json")),
            Err(DatasetError::Read { .. })
        ));
    }

    #[test]
    fn test_empty_api_input() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("x.json");
        fs::write(&path, r#"{"drinks": null}"#).unwrap();

        let drinks = read_response_file(&path).unwrap();
        assert!(matches!(seed_recipes(drinks), Err(DatasetError::EmptyInput)));
    }

    #[test]
    fn test_spirit_breakdown_after_seed() {
        let dir = TempDir::new().unwrap();
        let recipes = load_dataset(&seeded_dataset(dir.path())).unwrap();
        let breakdown = spirit_breakdown(&recipes);

        assert_eq!(breakdown[0], ("Rum".to_string(), 2));
        assert_eq!(breakdown.iter().map(|(_, n)| n).sum::<usize>(), 3);
    }
}
