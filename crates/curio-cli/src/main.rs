use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use curio_core::render::{self, RenderTarget, WriterTarget};
use curio_core::{loader, Session, Source};

mod browser;
mod config;
mod theme;

#[derive(Parser)]
#[command(name = "curio", version, about = "Browse a catalog of collected items")]
struct Cli {
    /// Catalog source: an http(s) URL or a path to a JSON file
    #[arg(long, global = true)]
    catalog: Option<String>,
    /// Image path substituted when an item has no image
    #[arg(long, global = true)]
    placeholder: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render matching items as an HTML card grid
    Render {
        #[arg(long)]
        query: Option<String>,
        #[arg(long)]
        tag: Option<String>,
        /// Write the fragment to a file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// List matching items
    List {
        #[arg(long)]
        query: Option<String>,
        #[arg(long)]
        tag: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// Print the tag facet values, sorted
    Tags,
    /// Show the persisted theme, or cycle it with --toggle
    Theme {
        /// Cycle unset → dark → light → unset and persist the result
        #[arg(long)]
        toggle: bool,
    },
    /// Browse the catalog interactively
    Browse,
}

fn main() -> Result<()> {
    // Logs go to stderr so rendered output on stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = config::load_settings();
    let source = Source::parse(
        &cli.catalog
            .or(settings.catalog.clone())
            .unwrap_or_else(|| "items.json".into()),
    );
    let placeholder = cli
        .placeholder
        .or(settings.placeholder.clone())
        .unwrap_or_else(|| render::PLACEHOLDER_IMAGE.into());

    match cli.command {
        Commands::Render { query, tag, out } => {
            let session = session_for(&source, query, tag);
            let grid = render::render_grid(&session.matches(), &placeholder);
            match out {
                Some(path) => {
                    let file = std::fs::File::create(path)?;
                    WriterTarget::new(file).present(&grid)?;
                }
                None => WriterTarget::new(std::io::stdout().lock()).present(&grid)?,
            }
        }
        Commands::List { query, tag, json } => {
            let session = session_for(&source, query, tag);
            let matches = session.matches();
            if json {
                println!("{}", serde_json::to_string_pretty(&matches)?);
            } else if matches.is_empty() {
                println!("no items match");
            } else {
                for it in &matches {
                    let subtitle: Vec<&str> = [it.brand.as_deref(), it.model.as_deref()]
                        .into_iter()
                        .flatten()
                        .filter(|s| !s.is_empty())
                        .collect();
                    println!(
                        "{}\t{}\t{}",
                        it.name,
                        subtitle.join(" · "),
                        it.tags.join(",")
                    );
                }
            }
        }
        Commands::Tags => {
            let items = loader::load_or_empty(&source);
            for tag in curio_core::tag_index(&items) {
                println!("{tag}");
            }
        }
        Commands::Theme { toggle } => {
            let store = theme::ThemeFile::new();
            let current = if toggle { store.toggle() } else { store.load() };
            println!("{}", current.name());
        }
        Commands::Browse => {
            let themes = theme::ThemeFile::new();
            let alt_screen = settings
                .tui
                .as_ref()
                .and_then(|t| t.alt_screen)
                .unwrap_or(true);
            let mut session = Session::new(loader::load_or_empty(&source));
            if let Some(name) = browser::run_browser(&mut session, &themes, alt_screen)? {
                println!("{name}");
            }
        }
    }

    Ok(())
}

fn session_for(source: &Source, query: Option<String>, tag: Option<String>) -> Session {
    let mut session = Session::new(loader::load_or_empty(source));
    if let Some(q) = query {
        session.set_query(q);
    }
    session.set_tag(tag.filter(|t| !t.is_empty()));
    session
}
