use crate::types::OutputFormat;
use anyhow::{Result, bail};
use plugtrace_runtime::Config;
use std::path::Path;

pub fn show(config_path: &Path, format: OutputFormat) -> Result<()> {
    let config = Config::load_from(config_path)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&config)?),
        OutputFormat::Plain => {
            if config_path.exists() {
                println!("# {}", config_path.display());
            } else {
                println!("# {} (not found, showing defaults)", config_path.display());
            }
            print!("{}", toml::to_string_pretty(&config)?);
        }
    }

    Ok(())
}

pub fn init(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "Config already exists at {}. Use --force to overwrite",
            config_path.display()
        );
    }

    Config::default().save_to(config_path)?;
    println!("Wrote {}", config_path.display());
    Ok(())
}
