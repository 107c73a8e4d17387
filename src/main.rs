use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use cocktails::catalog::{spirit_by_slug, Catalog, FilterState};
use cocktails::config::AppConfig;
use cocktails::dataset::{self, load_dataset, save_dataset};
use cocktails::ingest::read_response_file;
use cocktails::measurement_types::MeasurementSystem;
use cocktails::overrides::RECIPE_OVERRIDES;
use cocktails::recipe_model::{PrepMethod, Recipe, Spirit, TasteTag};
use cocktails::unit_conversion::{convert_ingredients, convert_measure};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// cocktails - recipe dataset builder and measurement converter
#[derive(Parser)]
#[command(name = "cocktails")]
#[command(about = "Build, classify and query the cocktail recipe dataset", long_about = None)]
struct Cli {
    /// Dataset file (overrides COCKTAILS_DATA_PATH)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the dataset from saved API response files
    Seed {
        /// `{"drinks": [...]}` documents
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Recompute slug and classification fields
    Classify,
    /// Fix regions and ingredient/recipe names
    Correct,
    /// Apply the fixed override table
    Patch,
    /// Convert one measure string
    Convert {
        measure: String,
        /// imperial or metric (defaults to COCKTAILS_UNITS)
        #[arg(long)]
        to: Option<MeasurementSystem>,
    },
    /// Print a recipe with converted measures and related recipes
    Show {
        slug: String,
        #[arg(long)]
        units: Option<MeasurementSystem>,
    },
    /// List recipes matching the filter selections
    Filter {
        /// Text search over names and ingredients
        #[arg(long)]
        query: Option<String>,
        /// Spirit label or slug (repeatable)
        #[arg(long = "spirit")]
        spirits: Vec<String>,
        /// Taste tag (repeatable)
        #[arg(long = "taste")]
        tastes: Vec<TasteTag>,
        /// Preparation method (repeatable)
        #[arg(long = "method")]
        methods: Vec<PrepMethod>,
    },
    /// Print a random recipe name
    Random,
    /// Spirit and taste breakdown
    Stats,
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let (mut config, rejected) = AppConfig::load();
    if let Some(data) = cli.data {
        config.data_path = data;
    }
    cocktails::observability::init_logging(config.log_format)?;
    for setting in &rejected {
        warn!(key = setting.key, value = %setting.value, reason = %setting.reason, "Ignoring invalid setting");
    }

    info!(data = %config.data_path.display(), "Starting cocktails");

    match cli.command {
        Commands::Seed { files } => seed_command(&config, &files),
        Commands::Classify => {
            rewrite_dataset(&config, |recipes| print_report(&dataset::regenerate(recipes)))
        }
        Commands::Correct => {
            rewrite_dataset(&config, |recipes| print_report(&dataset::correct(recipes)))
        }
        Commands::Patch => rewrite_dataset(&config, |recipes| {
            print_report(&dataset::patch(recipes, &RECIPE_OVERRIDES))
        }),
        Commands::Convert { measure, to } => {
            println!("{}", convert_measure(&measure, to.unwrap_or(config.default_units)));
            Ok(())
        }
        Commands::Show { slug, units } => {
            show_command(&config, &slug, units.unwrap_or(config.default_units))
        }
        Commands::Filter {
            query,
            spirits,
            tastes,
            methods,
        } => {
            let filters = FilterState {
                spirits: spirits.iter().map(|s| parse_spirit(s)).collect(),
                tastes,
                methods,
                search: query.unwrap_or_default(),
            };
            let catalog = open_catalog(&config.data_path)?;
            for recipe in catalog.filter(&filters) {
                println!("{}\t{}", recipe.slug, recipe.name);
            }
            Ok(())
        }
        Commands::Random => {
            let catalog = open_catalog(&config.data_path)?;
            match catalog.random(&mut rand::thread_rng()) {
                Some(recipe) => println!("{}\t{}", recipe.slug, recipe.name),
                None => println!("The dataset is empty"),
            }
            Ok(())
        }
        Commands::Stats => stats_command(&config),
    }
}

fn open_catalog(path: &Path) -> Result<Catalog> {
    let recipes = load_dataset(path).with_context(|| format!("Failed to load {}", path.display()))?;
    Ok(Catalog::new(recipes))
}

/// Load, transform and atomically rewrite the dataset
fn rewrite_dataset<F>(config: &AppConfig, pass: F) -> Result<()>
where
    F: FnOnce(&mut [Recipe]) -> Result<()>,
{
    let path = &config.data_path;
    let mut recipes =
        load_dataset(path).with_context(|| format!("Failed to load {}", path.display()))?;
    pass(&mut recipes)?;
    save_dataset(path, &recipes).with_context(|| format!("Failed to write {}", path.display()))
}

fn print_report<T: Serialize>(report: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

fn parse_spirit(value: &str) -> Spirit {
    spirit_by_slug(&value.to_lowercase()).unwrap_or_else(|| Spirit::from_label(value))
}

fn seed_command(config: &AppConfig, files: &[PathBuf]) -> Result<()> {
    let mut drinks = Vec::new();
    for file in files {
        let parsed = read_response_file(file)
            .with_context(|| format!("Failed to read API response {}", file.display()))?;
        drinks.extend(parsed);
    }

    let recipes = dataset::seed_recipes(drinks).context("Seeding produced no recipes")?;
    save_dataset(&config.data_path, &recipes)
        .with_context(|| format!("Failed to write {}", config.data_path.display()))?;

    println!("Wrote {} recipes to {}", recipes.len(), config.data_path.display());
    for (spirit, count) in dataset::spirit_breakdown(&recipes) {
        println!("  {spirit}: {count}");
    }
    Ok(())
}

fn show_command(config: &AppConfig, slug: &str, units: MeasurementSystem) -> Result<()> {
    let catalog = open_catalog(&config.data_path)?;
    let recipe = catalog
        .by_slug(slug)
        .with_context(|| format!("No recipe with slug '{slug}'"))?;

    println!("{}", recipe.name);
    println!(
        "{} | {} | {} | {}",
        recipe.primary_spirit, recipe.prep_method, recipe.alcohol_strength, recipe.glassware
    );
    let tags: Vec<&str> = recipe.taste_tags.iter().map(|t| t.label()).collect();
    println!("Tastes: {}", tags.join(", "));
    println!();
    println!("Ingredients ({}):", units.unit_label());
    for ingredient in convert_ingredients(&recipe.ingredients, units) {
        println!("  - {ingredient}");
    }
    println!();
    println!("{}", recipe.instructions);

    let related = catalog.related(recipe, config.related_limit);
    if !related.is_empty() {
        println!();
        println!("Related:");
        for other in related {
            println!("  {}\t{}", other.slug, other.name);
        }
    }
    Ok(())
}

fn stats_command(config: &AppConfig) -> Result<()> {
    let catalog = open_catalog(&config.data_path)?;
    println!("{} recipes", catalog.len());

    println!("Spirit breakdown:");
    for (spirit, count) in dataset::spirit_breakdown(catalog.all()) {
        println!("  {spirit}: {count}");
    }

    println!("Taste breakdown:");
    for summary in catalog.taste_summaries() {
        println!("  {}: {}", summary.taste, summary.count);
    }
    Ok(())
}
