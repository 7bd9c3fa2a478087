//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"{
    "enable_lowercase_start": true,
    "enable_english_only": true,
    "enable_no_special_chars": true,
    "enable_sensitive_patterns": true,
    "exclude": [
        "**/target/**",
        "**/vendor/**"
    ]
}
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    let config_path = Path::new("loglint.json");

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, DEFAULT_CONFIG)?;

    println!("Created loglint.json");
    println!("\nNext steps:");
    println!("  1. Edit loglint.json to toggle rules");
    println!("  2. Run: loglint check");

    Ok(())
}
