use anyhow::Result;
use storefront_config::AppConfig;

use crate::cli::ConfigFormat;

/// Show the effective configuration
pub fn execute(config: &AppConfig, format: ConfigFormat) -> Result<()> {
    println!("{}", render(config, format)?);
    Ok(())
}

fn render(config: &AppConfig, format: ConfigFormat) -> Result<String> {
    let rendered = match format {
        ConfigFormat::Toml => config.to_toml()?,
        ConfigFormat::Json => config.to_json()?,
    };
    Ok(rendered)
}
