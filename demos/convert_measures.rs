//! # Measurement Conversion Examples
//!
//! Classifies a handful of recipes and prints their ingredient measures in
//! both unit systems.

use cocktails::classifier::classify_recipe;
use cocktails::measurement_types::MeasurementSystem;
use cocktails::recipe_model::Recipe;
use cocktails::unit_conversion::{convert_ingredients, parse_measure};

fn main() {
    let recipes = vec![
        Recipe::new("11007", "Margarita")
            .with_ingredient("Tequila", "1 1/2 oz")
            .with_ingredient("Triple sec", "1/2 oz")
            .with_ingredient("Lime juice", "1 oz")
            .with_ingredient("Salt", "")
            .with_instructions("Rub the rim of the glass with lime, dip in salt. Shake the rest with ice and strain."),
        Recipe::new("17207", "Kir Royale")
            .with_ingredient("Creme de Cassis", "1 cl")
            .with_ingredient("Champagne", "12 cl")
            .with_instructions("Pour the cassis into a flute and top up with champagne."),
        Recipe::new("11728", "Martini")
            .with_ingredient("Gin", "1 2/3 oz")
            .with_ingredient("Dry Vermouth", "1/3 oz")
            .with_ingredient("Olive", "1")
            .with_instructions("Stir with ice and strain into a chilled glass."),
    ];

    for mut recipe in recipes {
        recipe.apply_classification(classify_recipe(&recipe));

        println!("🍸 {} ({})", recipe.name, recipe.slug);
        println!(
            "   {} | {} | {}",
            recipe.primary_spirit, recipe.prep_method, recipe.alcohol_strength
        );

        for system in [MeasurementSystem::Imperial, MeasurementSystem::Metric] {
            println!("   In {system}:");
            for ingredient in convert_ingredients(&recipe.ingredients, system) {
                println!("     • {ingredient}");
            }
        }
        println!();
    }

    println!("📏 Raw parses:");
    for text in ["1 1/2 oz", "2 cl", "3 dashes (Angostura)", "Top up", "1/0 oz"] {
        match parse_measure(text) {
            Some(parsed) => println!(
                "   '{}' -> {} {} '{}'",
                text, parsed.amount, parsed.unit, parsed.remainder
            ),
            None => println!("   '{text}' -> not a measure"),
        }
    }
}
