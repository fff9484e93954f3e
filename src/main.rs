use std::{
    io::{IsTerminal, Read},
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::{Parser, Subcommand};
use cloister::{render, Config, Directory, DonationListing, Normalizer};

#[derive(Parser)]
#[command(name = "cloister", about = "Monastery directory — donation details tooling")]
struct Cli {
    /// Log debug events to stderr (overridden by RUST_LOG).
    #[arg(long, global = true)]
    debug: bool,

    /// Config file to use instead of ~/.config/cloister/config.toml.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Normalise a raw donation value read from FILE, or stdin when omitted.
    Normalize {
        file: Option<PathBuf>,
        /// Print the normalised methods as JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// List institutions that have donation details, one page at a time.
    List {
        /// JSON array of institutions; the embedded fallback data when omitted.
        #[arg(long)]
        data: Option<PathBuf>,
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    /// Show one institution's donation details.
    Show {
        slug: String,
        #[arg(long)]
        data: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::load().unwrap_or_else(|err| {
            tracing::warn!(%err, "falling back to built-in config");
            Config::defaults()
        }),
    };
    let normalizer = Normalizer::new(&config.labels);

    match cli.command {
        Command::Normalize { file, json } => {
            let src = read_input(file.as_deref())?;
            let raw: serde_json::Value = serde_json::from_str(&src)
                // A bare, unquoted string is still a (broken) donation value.
                .unwrap_or_else(|_| serde_json::Value::String(src.clone()));
            let methods = normalizer.normalize(&raw);

            if json {
                println!("{}", serde_json::to_string_pretty(&methods)?);
            } else {
                for line in render::render_methods(&methods, &config.labels) {
                    println!("{line}");
                }
            }
        }
        Command::List { data, page } => {
            let directory = load_directory(data.as_deref())?;
            let listing = DonationListing::build(&directory, &normalizer);
            if listing.is_empty() {
                println!("{}", config.labels.empty_listing);
                return Ok(());
            }

            let page = listing.page(page, config.directory.page_size);
            for entry in page.items {
                println!("{} ({})", entry.institution.name, entry.institution.slug);
                for line in render::render_methods(&entry.methods, &config.labels) {
                    println!("  {line}");
                }
                println!();
            }
            println!(
                "{}–{} / {} ({}/{})",
                page.first_position(),
                page.last_position(),
                page.total,
                page.number,
                page.total_pages
            );
        }
        Command::Show { slug, data } => {
            let directory = load_directory(data.as_deref())?;
            let institution = directory.find(&slug)?;

            println!("{}", institution.name);
            if let Some(order) = &institution.order {
                println!("{order}");
            }
            let methods = institution.donation_methods(&normalizer);
            if methods.is_empty() {
                println!("{}", config.labels.empty_listing);
            }
            for line in render::render_methods(&methods, &config.labels) {
                println!("  {line}");
            }
            if let Some(note) = institution.donation_note() {
                println!("{note}");
            }
        }
    }

    Ok(())
}

fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();
}

fn read_input(file: Option<&Path>) -> anyhow::Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            Ok(buf)
        }
    }
}

fn load_directory(data: Option<&Path>) -> anyhow::Result<Directory> {
    match data {
        Some(path) => Ok(Directory::from_path(path)?),
        None => Ok(Directory::fallback()),
    }
}
