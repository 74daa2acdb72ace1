//! Folio: a static renderer for a multi-page internship report site.
//!
//! All content is authored as JSON documents under `content/` and compiled
//! into the binary; pages are pure functions from those documents to HTML.
//! There is no server, no persistence, and no runtime data loading - the
//! whole site is a direct mapping from the content store to markup.
//!
//! # Architecture
//!
//! - **Content store** ([`core::content::Store`]): six embedded documents
//!   (one per page topic plus the footnote source registry), parsed once at
//!   startup. Read-only for the life of the process.
//! - **Components** ([`render::components`]): Context-Actions-Result items,
//!   the evidence gallery, and the footnote list. Pure and order-preserving;
//!   empty optional input omits the block, an unresolvable footnote id fails
//!   the render.
//! - **Pages** ([`render::pages`]): one renderer per route, composed from
//!   the shared [`render::section`] primitive.
//! - **Router** ([`router`]): the fixed `NAV_ITEMS` table is both the menu
//!   and the route table; the `Router` state machine retains only the
//!   current path and recovers unknown paths with a not-found page.
//! - **Site builder** ([`site`]): writes every route (plus `404.html`) to
//!   an output directory as static HTML.
//!
//! # Examples
//!
//! ```bash
//! # Build the whole site into dist/
//! folio build
//!
//! # Print one page's document
//! folio render /experience
//!
//! # Inspect the site map and the source registry
//! folio routes --format json
//! folio sources
//! ```

pub mod core;
pub mod render;
pub mod router;
pub mod site;

mod cli;

use crate::cli::{Cli, Command};
use crate::core::content::Store;
use crate::core::error::FolioError;
use crate::core::output;
use clap::Parser;
use colored::Colorize;

fn print_routes(format: &str) -> Result<(), FolioError> {
    let map = router::site_map();
    match format {
        "json" => {
            let entries: Vec<serde_json::Value> = map
                .iter()
                .map(|(path, label)| serde_json::json!({ "path": path, "label": label }))
                .collect();
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        _ => {
            let width = map.iter().map(|(p, _)| p.len()).max().unwrap_or(0);
            for (path, label) in map {
                println!("{}", output::aligned_row(path, label, width));
            }
        }
    }
    Ok(())
}

fn print_sources(store: &Store, format: &str) -> Result<(), FolioError> {
    match format {
        "json" => {
            let entries: Vec<serde_json::Value> = store
                .sources()
                .map(|(id, entry)| {
                    serde_json::json!({ "id": id, "label": entry.label, "url": entry.url })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        _ => {
            let width = store.sources().map(|(id, _)| id.len()).max().unwrap_or(0);
            for (id, entry) in store.sources() {
                let summary = format!("{} <{}>", output::ellipsize(&entry.label, 48), entry.url);
                println!("{}", output::aligned_row(id, &summary, width));
            }
        }
    }
    Ok(())
}

pub fn run() -> Result<(), FolioError> {
    let cli = Cli::parse();

    match cli.command {
        Command::Version => {
            println!("v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Command::Build(args) => {
            let store = Store::load()?;
            let report = site::build(&store, &args.out)?;
            for page in &report.pages {
                println!(
                    "  {} {} -> {}",
                    "built".green(),
                    page.route.bold(),
                    page.file.display()
                );
            }
            println!(
                "  {} {} -> {}",
                "built".green(),
                "404".bold(),
                report.not_found.display()
            );
            println!(
                "{} {} pages written to {}",
                "done:".green().bold(),
                report.pages.len() + 1,
                args.out.display()
            );
            Ok(())
        }
        Command::Render(args) => {
            let store = Store::load()?;
            let mut router = router::Router::new(&store);
            match router.navigate(&args.path)? {
                router::Outcome::Rendered(doc) | router::Outcome::NotFound(doc) => {
                    println!("{doc}");
                }
                router::Outcome::Unchanged => unreachable!("first navigation always renders"),
            }
            Ok(())
        }
        Command::Routes(args) => print_routes(&args.format),
        Command::Sources(args) => {
            let store = Store::load()?;
            print_sources(&store, &args.format)
        }
    }
}
