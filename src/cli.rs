//! CLI struct definitions for the folio command-line interface.
//!
//! All clap-derived types live here. Dispatch logic lives in `lib.rs`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(
    name = "folio",
    version = env!("CARGO_PKG_VERSION"),
    about = "Folio renders a static multi-page internship report site from compiled-in content documents."
)]
pub(crate) struct Cli {
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(clap::Args, Debug)]
pub(crate) struct BuildCli {
    /// Output directory for the generated site.
    #[clap(long, default_value = "dist")]
    pub out: PathBuf,
}

#[derive(clap::Args, Debug)]
pub(crate) struct RenderCli {
    /// Route path to render (e.g. "/" or "/company"). Unknown paths
    /// render the not-found page.
    pub path: String,
}

#[derive(clap::Args, Debug)]
pub(crate) struct RoutesCli {
    /// Output format: 'text' or 'json'.
    #[clap(long, default_value = "text")]
    pub format: String,
}

#[derive(clap::Args, Debug)]
pub(crate) struct SourcesCli {
    /// Output format: 'text' or 'json'.
    #[clap(long, default_value = "text")]
    pub format: String,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// Build the full static site into an output directory
    Build(BuildCli),
    /// Print the HTML document for one route to stdout
    Render(RenderCli),
    /// Print the site map (route paths and labels)
    Routes(RoutesCli),
    /// List the footnote source registry
    Sources(SourcesCli),
    /// Print the folio version
    Version,
}
