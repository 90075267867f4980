//! CLI entry point: dispatches the search, recipe box, and export commands.

use clap::{Parser, Subcommand};
use log::debug;
use std::io::{self, Write};
use std::path::PathBuf;

use recipe_scout::{
    export, render, JsonFileStore, RecipeBox, RecipeForm, RecipeStore, ScoutConfig, ScoutError,
};

#[derive(Parser)]
#[command(name = "recipe-scout")]
#[command(about = "Find recipes by ingredient and keep a local recipe box")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search Spoonacular for recipes matching the given ingredients
    Search {
        /// Comma-separated ingredient list, e.g. "tomato, basil, olive oil"
        ingredients: String,
    },

    /// Add a recipe to the local recipe box
    Add {
        /// Recipe name
        name: String,
        /// Comma-separated ingredient list
        #[arg(short, long)]
        ingredients: String,
        /// Preparation instructions
        #[arg(long, default_value = "")]
        instructions: String,
        /// Image URL (a placeholder is used when omitted)
        #[arg(long)]
        image: Option<String>,
    },

    /// Show every recipe saved in the recipe box
    List,

    /// Export saved recipes to a file in the given directory
    Export {
        /// Export format: "json" or "csv"
        format: String,
        /// Directory to write the export into
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },

    /// Remove every saved recipe
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

fn open_store() -> Result<JsonFileStore, ScoutError> {
    let config = ScoutConfig::load()?;
    Ok(JsonFileStore::from_config(&config))
}

#[tokio::main]
async fn main() -> Result<(), ScoutError> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Search { ingredients } => {
            // Failures are rendered as an inline message, never a crash
            println!("{}", recipe_scout::search_recipes_html(&ingredients).await);
        }

        Commands::Add {
            name,
            ingredients,
            instructions,
            image,
        } => {
            let mut recipe_box = RecipeBox::open(open_store()?)?;
            let form = RecipeForm {
                name,
                ingredients,
                instructions,
                image: image.unwrap_or_default(),
            };
            let recipe = recipe_box.add(&form)?;
            debug!("Stored {:?}", recipe);
            println!("Recipe added!");
        }

        Commands::List => {
            let recipe_box = RecipeBox::open(open_store()?)?;
            println!("{}", render::render_saved(recipe_box.recipes()));
        }

        Commands::Export { format, dir } => {
            let store = open_store()?;
            match format.as_str() {
                "json" => {
                    let path = export::export_json(&store, &dir)?;
                    println!("Exported recipes to {}", path.display());
                }
                "csv" => match export::export_csv(&store, &dir)? {
                    Some(path) => println!("Exported recipes to {}", path.display()),
                    None => println!("No recipes to export."),
                },
                other => {
                    return Err(ScoutError::BuilderError(format!(
                        "Unknown export format \"{}\". Use \"json\" or \"csv\"",
                        other
                    )));
                }
            }
        }

        Commands::Clear { yes } => {
            if !yes {
                print!("This will remove every saved recipe. Continue? [y/N]: ");
                io::stdout().flush()?;
                let mut input = String::new();
                io::stdin().read_line(&mut input)?;
                if !input.trim().eq_ignore_ascii_case("y") {
                    println!("Clear cancelled.");
                    return Ok(());
                }
            }
            open_store()?.clear()?;
            println!("{}", render::render_saved(&[]));
            println!("All saved recipes cleared.");
        }
    }

    Ok(())
}
