use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::generator::templates::render_readme;
use crate::spec::{build_readme_meta, load_document};

/// Generate the README for an AsyncAPI specification file
///
/// Runs the full pipeline: load the document, extract its metadata, render
/// the README, and write it into `output` (the current directory when not
/// given). An existing README is left untouched unless `force` is set;
/// `dry_run` reports what would be written without touching the filesystem.
///
/// Returns the path of the (would-be) written file.
///
/// # Errors
///
/// Returns an error if the document cannot be loaded, the required title
/// field is missing, rendering fails, or the file cannot be written.
pub fn generate_readme_from_spec(
    spec_path: &Path,
    output: Option<&Path>,
    force: bool,
    dry_run: bool,
) -> anyhow::Result<PathBuf> {
    let doc = load_document(spec_path)?;
    let meta = build_readme_meta(&doc)?;
    let file = render_readme(&meta)?;

    let out_dir = output.unwrap_or_else(|| Path::new("."));
    let out_path = out_dir.join(&file.name);

    if dry_run {
        println!(
            "📝 Would write {} ({} bytes) → {out_path:?}",
            file.name,
            file.content.len()
        );
        return Ok(out_path);
    }

    if out_path.exists() && !force {
        println!("⚠️  Skipping existing {}: {out_path:?} (use --force to overwrite)", file.name);
        return Ok(out_path);
    }

    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create output directory {out_dir:?}"))?;
    fs::write(&out_path, &file.content)
        .with_context(|| format!("failed to write {out_path:?}"))?;
    println!("✅ Generated {} → {out_path:?}", file.name);
    Ok(out_path)
}

/// Render the README for an AsyncAPI specification file to a string
///
/// Same pipeline as [`generate_readme_from_spec`] without the emission
/// step; used by the `print` command and by host frameworks that own file
/// writing themselves.
///
/// # Errors
///
/// Returns an error if loading, extraction, or rendering fails.
pub fn render_readme_from_spec(spec_path: &Path) -> anyhow::Result<String> {
    let doc = load_document(spec_path)?;
    let meta = build_readme_meta(&doc)?;
    Ok(render_readme(&meta)?.content)
}
