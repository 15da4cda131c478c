//! Command-line interface for inspecting default application lists.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use console::style;

use crate::capplet::Capplet;
use crate::category::Category;
use crate::config::{LoaderConfig, DEFAULT_APPS_DIR};
use crate::error::Result;
use crate::items::GenericItem;
use crate::loader::Loader;
use crate::path::SearchPath;

/// Default applications - Show which preferred-application candidates are installed.
#[derive(Parser)]
#[command(name = "default-apps")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load the XML lists and print the installed candidates per category.
    List {
        /// Directory containing the *.xml lists
        #[arg(short, long, default_value = DEFAULT_APPS_DIR)]
        dir: PathBuf,

        /// Print the loaded lists as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show where an executable resolves on PATH.
    Which {
        /// Executable name (e.g., firefox)
        executable: String,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::List { dir, json } => list_command(dir, json),
        Commands::Which { executable } => which_command(&executable),
    }
}

/// Execute the list command.
fn list_command(dir: PathBuf, json: bool) -> Result<()> {
    let loader = Loader::new(LoaderConfig::from_env().with_apps_dir(dir));
    let mut capplet = Capplet::new();
    let stats = loader.load_list(&mut capplet);

    if json {
        println!("{}", serde_json::to_string_pretty(&capplet)?);
        return Ok(());
    }

    for category in Category::ALL {
        let generics = capplet.generics(category);
        println!(
            "{} ({})",
            style(category.section_tag()).bold(),
            generics.len()
        );
        for generic in generics {
            println!("  {}", format_generic(generic));
        }
    }

    println!();
    println!(
        "{} {} documents, {} entries ({} skipped documents, {} dropped entries)",
        style("Loaded").green().bold(),
        stats.documents_loaded,
        stats.entries_accepted,
        stats.documents_skipped,
        stats.entries_dropped
    );

    Ok(())
}

/// Execute the which command.
fn which_command(executable: &str) -> Result<()> {
    match SearchPath::from_env().find_program(executable) {
        Some(path) => println!("{} {}", style(executable).cyan(), path.display()),
        None => println!(
            "{} {}",
            style(executable).cyan(),
            style("not found on PATH").yellow()
        ),
    }
    Ok(())
}

/// One line describing a loaded application.
fn format_generic(generic: &GenericItem) -> String {
    let name = generic.name.as_deref().unwrap_or(&generic.executable);
    match &generic.command {
        Some(command) => format!("{name} [{command}]"),
        None => name.to_string(),
    }
}
