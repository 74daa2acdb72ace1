//! Static site builder: renders every route to an output directory.
//!
//! Output follows the directory-per-route convention (`/company` becomes
//! `company/index.html`) so the built tree serves the route table's clean
//! paths from any static file server. A `404.html` is emitted from the
//! not-found page with no navigation item highlighted.

use crate::core::content::Store;
use crate::core::error::FolioError;
use crate::render::{layout, pages};
use crate::router::Route;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct BuiltPage {
    pub route: &'static str,
    pub file: PathBuf,
}

#[derive(Debug, Clone)]
pub struct BuildReport {
    pub pages: Vec<BuiltPage>,
    pub not_found: PathBuf,
}

fn output_path(out_dir: &Path, route_path: &str) -> PathBuf {
    if route_path == "/" {
        out_dir.join("index.html")
    } else {
        out_dir
            .join(route_path.trim_start_matches('/'))
            .join("index.html")
    }
}

/// Render the whole routed site into `out_dir`. Pages land in route-table
/// order; any render or I/O failure aborts the build.
pub fn build(store: &Store, out_dir: &Path) -> Result<BuildReport, FolioError> {
    fs::create_dir_all(out_dir)?;

    let mut built = Vec::with_capacity(Route::ALL.len());
    for route in Route::ALL {
        let body = route.render(store)?;
        let doc = layout::page_shell(route.label(), Some(route.path()), body).into_string();
        let file = output_path(out_dir, route.path());
        if let Some(parent) = file.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&file, doc)?;
        built.push(BuiltPage {
            route: route.path(),
            file,
        });
    }

    let not_found_doc =
        layout::page_shell("Page Not Found", None, pages::not_found("this address")).into_string();
    let not_found = out_dir.join("404.html");
    fs::write(&not_found, not_found_doc)?;

    Ok(BuildReport {
        pages: built,
        not_found,
    })
}
