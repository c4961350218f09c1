use std::path::PathBuf;

use clap::{Parser, Subcommand};
use master_class_core::app::native;
use master_class_core::config::{AppConfig, CONTAINER_ID, DEFAULT_RESOURCE};
use master_class_core::error::Result;
use master_class_core::model::SelectedClass;

#[derive(Parser, Debug)]
#[command(about = "Master class selection: render the class list and build it from the festival pages")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load the class list, render it and print the selection
    Show {
        /// URL or file path of master_classes.json
        #[arg(long, default_value = DEFAULT_RESOURCE)]
        source: String,
        #[arg(long, default_value = CONTAINER_ID)]
        container_id: String,
        /// Checkbox id to check, e.g. mc-checkbox-Torstai-0 (repeatable)
        #[arg(long)]
        check: Vec<String>,
    },
    /// Build master_classes.json from the saved schedule page
    Parse {
        #[arg(long, default_value = "classes.html")]
        html: PathBuf,
        #[arg(long, default_value = DEFAULT_RESOURCE)]
        output: PathBuf,
    },
    /// Fill in wines from downloaded master_class_N.html pages
    PopulateWines {
        #[arg(long, default_value = DEFAULT_RESOURCE)]
        json: PathBuf,
        #[arg(long, default_value = ".")]
        pages: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();
    let args = Args::parse();

    match args.command {
        Command::Show {
            source,
            container_id,
            check,
        } => {
            let config = AppConfig {
                resource_url: source,
                container_id,
            };
            let outcome = native::show(&config, &check, |selected: &[SelectedClass]| {
                println!("selection changed: {} classes", selected.len());
            })
            .await?;

            print!("{}", outcome.container);
            println!("{}", serde_json::to_string_pretty(&outcome.selected)?);
        }
        Command::Parse { html, output } => {
            let classes = native::parse_schedule(&html, &output)?;
            println!("Parsed {} classes into {}", classes.len(), output.display());
        }
        Command::PopulateWines { json, pages } => {
            let report = native::populate_wines(&json, &pages)?;
            println!("Updated {} classes with wines.", report.updated);

            if !report.missing.is_empty() {
                println!("=====================================");
                println!("{} class pages are missing. Download them with:", report.missing.len());
                for page in &report.missing {
                    println!("{}", page.download_command());
                }
                println!("=====================================");
                println!("then run populate-wines again.");
            }
        }
    }

    Ok(())
}
