use std::path::Path;

use dialoguer::{theme::ColorfulTheme, Input};

use crate::{cli::output, errors::CliError};

/// Prompts for the backup destination until an existing path is entered.
pub fn collect_destination(theme: &ColorfulTheme) -> Result<String, CliError> {
    loop {
        let destination = prompt_text(theme, "Backup destination")?;
        match validate_destination(&destination) {
            Ok(valid) => return Ok(valid),
            Err(err) => output::warning(err),
        }
    }
}

/// Prompts for the comma-separated backup sources until every entry names
/// an existing path.
pub fn collect_sources(theme: &ColorfulTheme) -> Result<Vec<String>, CliError> {
    loop {
        let raw = prompt_text(theme, "Backup source(s), separated by commas")?;
        match validate_sources(&raw) {
            Ok(valid) => return Ok(valid),
            Err(err) => output::warning(err),
        }
    }
}

fn prompt_text(theme: &ColorfulTheme, prompt: &str) -> Result<String, CliError> {
    Ok(Input::<String>::with_theme(theme)
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?)
}

fn validate_destination(destination: &str) -> Result<String, String> {
    let destination = destination.trim();
    if destination.is_empty() {
        return Err("The backup destination cannot be empty.".into());
    }
    if !Path::new(destination).exists() {
        return Err(format!("The destination {destination} does not exist."));
    }
    Ok(destination.to_string())
}

fn validate_sources(raw: &str) -> Result<Vec<String>, String> {
    if raw.trim().is_empty() {
        return Err("The backup source cannot be empty.".into());
    }
    let mut sources = Vec::new();
    for item in raw.split(',') {
        let item = item.trim();
        if item.is_empty() {
            return Err("The backup source contains an empty value.".into());
        }
        if !Path::new(item).exists() {
            return Err(format!("The source {item} does not exist."));
        }
        sources.push(item.to_string());
    }
    Ok(sources)
}
