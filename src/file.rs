// src/file.rs

use std::{
    error::Error,
    fs,
    path::{Path, PathBuf},
};

use crate::csv::{Delim, to_export_string};
use crate::record::{self, ProductRecord};
use crate::specs::PlatformSpec;

/// Reduce a search term to a filename stem: keep alphanumerics, spaces,
/// `-` and `_`; collapse spaces to underscores; lowercase.
pub fn sanitize_stem(term: &str) -> String {
    let kept: String = term
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '_'))
        .collect();
    let stem = kept.trim().replace(' ', "_").to_lowercase();
    if stem.is_empty() { s!("product") } else { stem }
}

/// Derive the result filename for one run, e.g. `blinkit_milk_results.csv`
/// or `swiggy_instamart_milk_manual_results.csv`.
pub fn result_filename(spec: &PlatformSpec, term: &str, manual: bool, format: Delim) -> String {
    let stem = sanitize_stem(term);
    let tag = if manual { "_manual" } else { "" };
    format!("{}_{}{}_results.{}", spec.file_stem, stem, tag, format.ext())
}

/// Resolve the output path from the user's `-o` hint (file, directory, or
/// absent) and the derived default filename.
pub fn resolve_out_path(
    out: Option<&Path>,
    default_filename: &str,
) -> Result<PathBuf, Box<dyn Error>> {
    let Some(p) = out else {
        return Ok(PathBuf::from(default_filename));
    };
    if looks_like_dir_hint(p) || p.is_dir() {
        ensure_directory(p)?;
        return Ok(p.join(default_filename));
    }
    if let Some(parent) = p.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    Ok(p.to_path_buf())
}

/// Serialize `records` to `path` in one shot.
pub fn write_records(
    path: &Path,
    records: &[ProductRecord],
    include_headers: bool,
    format: Delim,
) -> Result<(), Box<dyn Error>> {
    let headers = if include_headers {
        Some(ProductRecord::headers())
    } else {
        None
    };
    let contents = to_export_string(&headers, &record::to_rows(records), format.sep());
    fs::write(path, contents)?;
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}
