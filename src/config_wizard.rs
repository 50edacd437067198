//! Interactive configuration wizard for creating `docbinder.toml`.
//!
//! Only the branding and output settings are prompted for; the marker and file
//! naming settings keep their defaults and can be edited in the file.

use crate::config::{Configuration, CONFIG_FILE};
use anyhow::{Context, Result};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input};
use std::path::{Path, PathBuf};

/// Run the interactive configuration wizard, starting from `current`.
pub fn run(dir: &Path, current: Configuration) -> Result<()> {
    let theme = ColorfulTheme::default();

    let title: String = Input::with_theme(&theme)
        .with_prompt("Document title")
        .with_initial_text(current.title.clone())
        .allow_empty(false)
        .interact_text()
        .with_context(|| "Failed to obtain title")?;

    let subtitle: String = Input::with_theme(&theme)
        .with_prompt("Subtitle")
        .with_initial_text(current.subtitle.clone())
        .allow_empty(true)
        .interact_text()
        .with_context(|| "Failed to obtain subtitle")?;

    let byline: String = Input::with_theme(&theme)
        .with_prompt("Brought to you by (leave empty for none)")
        .with_initial_text(current.byline.clone())
        .allow_empty(true)
        .interact_text()
        .with_context(|| "Failed to obtain byline")?;

    let title_suffix: String = Input::with_theme(&theme)
        .with_prompt("Suffix to strip from page titles")
        .with_initial_text(current.title_suffix.clone())
        .allow_empty(true)
        .interact_text()
        .with_context(|| "Failed to obtain title suffix")?;

    let outfile: String = Input::with_theme(&theme)
        .with_prompt("Output pdf file")
        .with_initial_text(current.outfile.display().to_string())
        .allow_empty(false)
        .interact_text()
        .with_context(|| "Failed to obtain output file")?;
    let mut outfile = PathBuf::from(outfile);
    let ext = outfile
        .extension()
        .map(std::ffi::OsStr::to_ascii_lowercase)
        .unwrap_or_default();
    if ext != *"pdf" {
        outfile.set_extension("pdf");
    }

    let config = Configuration {
        title,
        subtitle,
        byline,
        title_suffix,
        outfile,
        ..current
    };
    let config =
        toml::to_string_pretty(&config).with_context(|| "Failed to convert configuration to TOML")?;

    let config_path = dir.join(CONFIG_FILE);
    if config_path.exists()
        && !Confirm::with_theme(&theme)
            .with_prompt(format!("{CONFIG_FILE} already exists, do you want to override it?"))
            .interact()?
    {
        println!("Configuration:");
        println!("{}", config);
    } else {
        std::fs::write(&config_path, config)
            .with_context(|| format!("Failed to write {}", config_path.display()))?;
        println!("{} written!", config_path.display());
    }

    Ok(())
}
