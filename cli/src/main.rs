mod config;
mod display;
mod form;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use config::Config;
use display::Printer;
use form::RecipeForm;
use recipebook_core::{Catalog, CatalogError, Recipe, RecipeId};
use serde::Serialize;
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "recipebook")]
#[command(about = "Personal recipe catalog", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show every recipe in the order it was added
    List {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show the category names, numbered
    Categories,
    /// Show the recipes in one category
    Category {
        /// Category label, or its number from `categories` (an existing
        /// label made of digits takes precedence over the number)
        category: String,
    },
    /// Find recipes that use an ingredient (exact, case-sensitive)
    Search { ingredient: String },
    /// Add a recipe and show where it was filed
    Add {
        #[arg(long)]
        name: String,
        /// Comma-separated ingredients
        #[arg(long)]
        ingredients: String,
        /// Steps, one per line
        #[arg(long)]
        steps: String,
        /// Cooking time in minutes
        #[arg(long)]
        time: String,
        /// Makes this a main course filed under the cuisine
        #[arg(long, conflicts_with = "dessert_type")]
        cuisine: Option<String>,
        /// Makes this a dessert filed under the type
        #[arg(long)]
        dessert_type: Option<String>,
    },
    /// Delete a recipe by its number from `list`
    Delete {
        number: usize,
        /// Remove from the recipe list only, leaving category entries behind
        #[arg(long)]
        position_only: bool,
    },
}

/// Recipe with its catalog id, for JSON output.
#[derive(Serialize)]
struct ListedRecipe<'a> {
    id: RecipeId,
    #[serde(flatten)]
    recipe: &'a Recipe,
}

fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = Config::from_env();

    let mut catalog = if config.seed {
        Catalog::seeded()
    } else {
        Catalog::new()
    };
    tracing::debug!(recipes = catalog.len(), seed = config.seed, "Catalog ready");

    let stdout = io::stdout();
    let mut printer = Printer::new(stdout.lock(), config.separator.clone());

    match cli.command {
        Commands::List { json } => {
            if json {
                let listed: Vec<ListedRecipe> = catalog
                    .iter()
                    .map(|(id, recipe)| ListedRecipe { id, recipe })
                    .collect();
                let out = serde_json::to_string_pretty(&listed)
                    .context("Failed to serialize recipes")?;
                writeln!(printer.into_inner(), "{}", out)?;
            } else {
                printer.all_recipes(&catalog)?;
            }
        }
        Commands::Categories => {
            printer.category_names(&catalog)?;
        }
        Commands::Category { category } => {
            let label = resolve_category(&catalog, &category);
            printer.category(&catalog, &label)?;
        }
        Commands::Search { ingredient } => {
            let matches = catalog.search_by_ingredient(&ingredient);
            printer.search_results(&ingredient, &matches)?;
        }
        Commands::Add {
            name,
            ingredients,
            steps,
            time,
            cuisine,
            dessert_type,
        } => {
            let recipe = RecipeForm {
                name,
                ingredients,
                steps,
                cooking_time: time,
                cuisine,
                dessert_type,
            }
            .into_recipe()?;

            let id = catalog.add(recipe);
            let filed: Vec<&str> = catalog
                .categories()
                .iter()
                .filter(|(_, bucket)| bucket.contains(&id))
                .map(|(label, _)| label.as_str())
                .collect();

            if let Some(recipe) = catalog.get(id) {
                printer.recipe(recipe)?;
            }
            let mut out = printer.into_inner();
            writeln!(out, "Recipe added successfully!")?;
            writeln!(out, "Filed under: {}", filed.join(", "))?;
        }
        Commands::Delete {
            number,
            position_only,
        } => {
            delete(&mut catalog, number, position_only, &mut printer)?;
        }
    }

    Ok(())
}

/// An existing label wins; otherwise a numeric argument selects a category
/// by its listed number. Anything else is passed through as a label.
fn resolve_category(catalog: &Catalog, arg: &str) -> String {
    if catalog.category_ids(arg).is_some() {
        return arg.to_string();
    }

    arg.parse::<usize>()
        .ok()
        .and_then(|number| catalog.category_at(number))
        .unwrap_or(arg)
        .to_string()
}

fn delete<W: Write>(
    catalog: &mut Catalog,
    number: usize,
    position_only: bool,
    printer: &mut Printer<W>,
) -> Result<()> {
    let Some(index) = number.checked_sub(1) else {
        printer.line("Recipe numbers start at 1.")?;
        return Ok(());
    };

    let outcome = if position_only {
        catalog.remove_at(index)
    } else {
        match catalog.resolve_index(index) {
            Some(id) => catalog.remove(id),
            None => Err(CatalogError::IndexOutOfRange {
                index,
                len: catalog.len(),
            }),
        }
    };

    match outcome {
        Ok(recipe) => {
            tracing::debug!(name = recipe.name(), position_only, "Deleted from CLI");
            printer.line("Recipe deleted successfully.")?;
        }
        Err(CatalogError::RecipeNotFound(_)) => printer.line("Recipe not found.")?,
        Err(e @ CatalogError::IndexOutOfRange { .. }) => printer.line(&e.to_string())?,
        Err(e) => return Err(e).context("Failed to delete recipe"),
    }

    printer.line("Recipes:")?;
    printer.recipe_names(catalog)?;
    Ok(())
}
