//! Config commands: print or initialise the settings file.

use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::{info, info_span};

use crate::config::TaharaConfig;

/// Print the effective settings as TOML.
pub fn show(config: &TaharaConfig) -> Result<()> {
    let _cmd = info_span!("config_show").entered();
    print!("{}", config.to_toml()?);
    Ok(())
}

/// Write the default settings to `path`.
pub fn init(path: &Path, force: bool) -> Result<()> {
    let _cmd = info_span!("config_init").entered();
    if path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }
    let text = TaharaConfig::default().to_toml()?;
    std::fs::write(path, text)
        .with_context(|| format!("failed to write config file: {}", path.display()))?;
    info!(path = %path.display(), "settings file written");
    println!("Wrote default settings to {}", path.display());
    Ok(())
}
