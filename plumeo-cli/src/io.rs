//! File I/O for the terminal frontend.
//!
//! The analysis service stays external: its JSON responses arrive as files
//! and are deserialized here before being handed to the core.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use plumeo_core::{Analysis, Consigne, Draft, ExportReport};

/// Load a text file and create a Draft
pub fn load_draft(path: &str) -> Result<Draft> {
    let path = Path::new(path);
    let canonical = path
        .canonicalize()
        .with_context(|| format!("Failed to resolve path: {}", path.display()))?;

    let content = fs::read_to_string(&canonical)
        .with_context(|| format!("Failed to read file: {}", canonical.display()))?;

    let filepath = canonical.to_string_lossy().to_string();
    let filename = canonical
        .file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    let title = canonical
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "Sans titre".to_string());

    Ok(Draft::with_file_info(title, content, filepath, filename))
}

/// Read a text file for merging into the current draft
pub fn read_text(path: &str) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
}

/// Load an analysis response (service JSON) from a file
pub fn load_analysis(path: &str) -> Result<Analysis> {
    let json = read_text(path)?;
    serde_json::from_str(&json).with_context(|| format!("Invalid analysis JSON: {}", path))
}

/// Load a consigne (service JSON) from a file
pub fn load_consigne(path: &str) -> Result<Consigne> {
    let json = read_text(path)?;
    serde_json::from_str(&json).with_context(|| format!("Invalid consigne JSON: {}", path))
}

/// Get the ~/.plumeo directory path, creating it if needed
pub fn plumeo_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not find home directory")?;
    let plumeo_dir = home.join(".plumeo");

    if !plumeo_dir.exists() {
        fs::create_dir_all(&plumeo_dir)
            .with_context(|| format!("Failed to create {}", plumeo_dir.display()))?;
    }

    Ok(plumeo_dir)
}

/// Export the full report to ~/.plumeo/report.json
pub fn export_report(report: &ExportReport) -> Result<PathBuf> {
    let export_path = plumeo_dir()?.join("report.json");

    let json = plumeo_core::to_json(report).context("Failed to serialize report")?;

    fs::write(&export_path, json)
        .with_context(|| format!("Failed to write {}", export_path.display()))?;

    Ok(export_path)
}

/// Export the reviewed text (raw or de-tagged per the configured copy mode)
/// to ~/.plumeo/correction.txt
pub fn export_correction(text: &str) -> Result<PathBuf> {
    write_export("correction.txt", text)
}

/// Export the analysis request prompt to ~/.plumeo/prompt.txt
pub fn export_prompt(prompt: &str) -> Result<PathBuf> {
    write_export("prompt.txt", prompt)
}

/// Export a consigne-generation request prompt to ~/.plumeo/consigne_prompt.txt
pub fn export_consigne_prompt(prompt: &str) -> Result<PathBuf> {
    write_export("consigne_prompt.txt", prompt)
}

/// Export an inspiration passage (or variant request prompt) to ~/.plumeo
pub fn export_inspiration(name: &str, text: &str) -> Result<PathBuf> {
    write_export(name, text)
}

fn write_export(name: &str, contents: &str) -> Result<PathBuf> {
    let export_path = plumeo_dir()?.join(name);

    fs::write(&export_path, contents)
        .with_context(|| format!("Failed to write {}", export_path.display()))?;

    Ok(export_path)
}
