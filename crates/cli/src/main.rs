// ABOUTME: CLI for extracting page sections and contact form schemas from WordPress block markup.
// ABOUTME: Reads markup or a saved GraphQL response from a file or stdin and prints JSON.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use wpblocks_extract::{load_markers, page_content_from_response, Extractor};

/// Extract typed page data from WordPress block markup and print JSON.
#[derive(Parser, Debug)]
#[command(name = "wpblocks")]
#[command(about = "Extract page sections and form schemas from WordPress markup", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// JSON file overriding the default selectors and text rules.
    #[arg(long, global = true)]
    markers: Option<PathBuf>,

    /// Treat the input as a GraphQL response and read data.page.content from it.
    #[arg(long, global = true, default_value_t = false)]
    graphql: bool,

    /// Output compact JSON instead of pretty.
    #[arg(long, global = true, default_value_t = false)]
    compact: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Hero, problem, advantages, and testimonials sections.
    Sections {
        /// Input file. Use "-" or omit to read stdin.
        input: Option<String>,
    },
    /// Contact form field schema.
    Form {
        /// Input file. Use "-" or omit to read stdin.
        input: Option<String>,
    },
    /// Sections and form schema together.
    Page {
        /// Input file. Use "-" or omit to read stdin.
        input: Option<String>,
    },
}

impl Command {
    fn input(&self) -> Option<&str> {
        match self {
            Command::Sections { input } | Command::Form { input } | Command::Page { input } => {
                input.as_deref()
            }
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let extractor = match &args.markers {
        Some(path) => {
            let markers = load_markers(path)?;
            Extractor::builder().markers(markers).build()?
        }
        None => Extractor::default(),
    };

    let raw = load_input(args.command.input())?;
    let markup = if args.graphql {
        page_content_from_response(&raw)?
    } else {
        raw
    };
    debug!(bytes = markup.len(), "loaded markup");

    match args.command {
        Command::Sections { .. } => print_json(&extractor.extract_sections(&markup), args.compact),
        Command::Form { .. } => print_json(&extractor.extract_form_fields(&markup), args.compact),
        Command::Page { .. } => print_json(&extractor.extract_page(&markup), args.compact),
    }
}

/// Prints typed output so keys keep the model's field order.
fn print_json<T: Serialize>(value: &T, compact: bool) -> Result<()> {
    if compact {
        println!("{}", serde_json::to_string(value)?);
    } else {
        println!("{}", serde_json::to_string_pretty(value)?);
    }
    Ok(())
}

fn load_input(target: Option<&str>) -> Result<String> {
    match target {
        None | Some("-") => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
        Some(target) => {
            let path = Path::new(target);
            if !path.exists() {
                return Err(anyhow!("file not found: {}", target));
            }
            fs::read_to_string(path).with_context(|| format!("failed to read {}", target))
        }
    }
}
