//! CLI frontend for the OpenD6 companion.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "od6",
    about = "OpenD6 companion — wild-die rolls, templates, characters",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Roll dice with the wild-die mechanic and record the result
    Roll {
        /// Number of dice to roll (the last one is the wild die)
        dice: u32,

        /// Flat pip bonus added to the classic total
        #[arg(short, long, default_value = "0")]
        pips: u32,

        /// Score successes (D6 Legend) instead of summing a total
        #[arg(short, long)]
        legend: bool,

        /// RNG seed for a reproducible roll
        #[arg(short, long)]
        seed: Option<u64>,

        /// Number of rolls to make
        #[arg(short = 'n', long, default_value = "1")]
        count: u32,

        /// Data directory (default: current directory)
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },

    /// Manage character templates
    Template {
        #[command(subcommand)]
        command: TemplateCommands,
    },

    /// Manage characters
    Character {
        #[command(subcommand)]
        command: CharacterCommands,
    },

    /// Show aggregate statistics over recorded rolls
    Stats {
        /// Data directory (default: current directory)
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },
}

#[derive(Subcommand)]
enum TemplateCommands {
    /// List built-in and saved templates
    List {
        /// Data directory (default: current directory)
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },

    /// Show a template's attributes, skills, and options
    Show {
        /// Template name
        name: String,

        /// Data directory (default: current directory)
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },

    /// Create a new template from a built-in base
    New {
        /// Name for the new template
        name: String,

        /// Built-in base template to copy (Fantasy, Adventure, Space)
        #[arg(short, long, default_value = "Fantasy")]
        base: String,

        /// Data directory (default: current directory)
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },

    /// Check a template for structural problems
    Validate {
        /// Template name
        name: String,

        /// Data directory (default: current directory)
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },

    /// Delete a saved template
    Delete {
        /// Template name
        name: String,

        /// Data directory (default: current directory)
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },
}

#[derive(Subcommand)]
enum CharacterCommands {
    /// Create a character from a template
    New {
        /// Character name
        name: String,

        /// Template to build from
        #[arg(short, long, default_value = "Fantasy")]
        template: String,

        /// Data directory (default: current directory)
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },

    /// Show a character sheet
    Show {
        /// Character name
        name: String,

        /// Data directory (default: current directory)
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },

    /// Show a character's point totals
    Points {
        /// Character name
        name: String,

        /// Data directory (default: current directory)
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },

    /// List saved characters
    List {
        /// Data directory (default: current directory)
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },

    /// Delete a saved character
    Delete {
        /// Character name
        name: String,

        /// Data directory (default: current directory)
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Roll {
            dice,
            pips,
            legend,
            seed,
            count,
            dir,
        } => commands::roll::run(&dir, dice, pips, legend, seed, count).await,
        Commands::Template { command } => match command {
            TemplateCommands::List { dir } => commands::template::list(&dir).await,
            TemplateCommands::Show { name, dir } => commands::template::show(&dir, &name).await,
            TemplateCommands::New { name, base, dir } => {
                commands::template::new(&dir, &name, &base).await
            }
            TemplateCommands::Validate { name, dir } => {
                commands::template::validate(&dir, &name).await
            }
            TemplateCommands::Delete { name, dir } => {
                commands::template::delete(&dir, &name).await
            }
        },
        Commands::Character { command } => match command {
            CharacterCommands::New {
                name,
                template,
                dir,
            } => commands::character::new(&dir, &name, &template).await,
            CharacterCommands::Show { name, dir } => commands::character::show(&dir, &name).await,
            CharacterCommands::Points { name, dir } => {
                commands::character::points(&dir, &name).await
            }
            CharacterCommands::List { dir } => commands::character::list(&dir).await,
            CharacterCommands::Delete { name, dir } => {
                commands::character::delete(&dir, &name).await
            }
        },
        Commands::Stats { dir } => commands::stats::run(&dir).await,
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
