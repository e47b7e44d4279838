use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

use it_benchmark_core::BenchmarkCatalog;

/// Read a JSON or YAML document (chosen by extension) into a typed struct.
pub fn read_document<T: DeserializeOwned>(path: &str) -> Result<T, Box<dyn std::error::Error>> {
    let canonical = resolve_path(path)?;
    let contents = fs::read_to_string(&canonical)
        .map_err(|e| format!("Failed to read '{}': {}", canonical.display(), e))?;

    let is_yaml = matches!(
        canonical.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    );
    let value: T = if is_yaml {
        serde_yaml::from_str(&contents)
            .map_err(|e| format!("Failed to parse '{}': {}", canonical.display(), e))?
    } else {
        serde_json::from_str(&contents)
            .map_err(|e| format!("Failed to parse '{}': {}", canonical.display(), e))?
    };
    Ok(value)
}

/// The benchmark catalog: loaded from `path` when given, otherwise built in.
pub fn read_catalog(
    path: Option<&str>,
) -> Result<Cow<'static, BenchmarkCatalog>, Box<dyn std::error::Error>> {
    let Some(path) = path else {
        return Ok(Cow::Borrowed(BenchmarkCatalog::builtin()));
    };
    let canonical = resolve_path(path)?;
    let contents = fs::read_to_string(&canonical)
        .map_err(|e| format!("Failed to read '{}': {}", canonical.display(), e))?;
    let catalog = BenchmarkCatalog::from_json(&contents)
        .map_err(|e| format!("Invalid catalog '{}': {}", canonical.display(), e))?;
    Ok(Cow::Owned(catalog))
}

/// Resolve and validate the path.
fn resolve_path(path: &str) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let p = Path::new(path);
    let canonical = if p.is_absolute() {
        p.to_path_buf()
    } else {
        std::env::current_dir()?.join(p)
    };

    if !canonical.exists() {
        return Err(format!("File not found: {}", canonical.display()).into());
    }

    if !canonical.is_file() {
        return Err(format!("Not a file: {}", canonical.display()).into());
    }

    Ok(canonical)
}
