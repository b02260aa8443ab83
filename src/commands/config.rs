//! Config file commands

use std::path::Path;

use anyhow::{Result, bail};
use colored::Colorize;

use crate::config::ArtgridConfig;

/// Print the effective configuration as TOML
pub fn cmd_config_show(config: &ArtgridConfig) -> Result<()> {
    let content = toml::to_string_pretty(config)?;
    println!("{content}");
    Ok(())
}

pub fn cmd_config_path(path: &Path) -> Result<()> {
    let marker = if path.exists() {
        "".normal()
    } else {
        " (not created yet)".dimmed()
    };
    println!("{}{}", path.display(), marker);
    Ok(())
}

/// Write a default config file, refusing to overwrite unless `force`
pub fn cmd_config_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "Config already exists at {} (use --force to overwrite)",
            path.display()
        );
    }

    ArtgridConfig::default().save_to(path)?;
    println!(
        "{} Wrote default config to {}",
        "✓".green(),
        path.display().to_string().cyan()
    );
    Ok(())
}
