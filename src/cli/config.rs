//! Config command handler
//!
//! View and modify configuration settings.

use crate::config::Config;
use crate::error::{Error, Result};
use clap::Args;

/// Config command arguments
#[derive(Args)]
pub struct ConfigArgs {
    /// Configuration key (e.g., "ranking.listing_limit")
    pub key: Option<String>,

    /// Value to set (if not provided, shows current value)
    pub value: Option<String>,

    /// Show config file path
    #[arg(long)]
    pub path: bool,

    /// Reset config to defaults
    #[arg(long)]
    pub reset: bool,
}

/// Run the config command
pub fn run(args: ConfigArgs) -> Result<()> {
    if args.path {
        let path = Config::config_path()?;
        println!("{}", path.display());
        return Ok(());
    }

    if args.reset {
        Config::default().save()?;
        println!("Configuration reset to defaults");
        return Ok(());
    }

    let mut config = Config::load()?;

    match (&args.key, &args.value) {
        (None, None) => print!("{}", render_all(&config)),

        (Some(key), None) => match config.get(key) {
            Some(value) => println!("{}", value),
            None => {
                eprintln!("Available keys:");
                for k in Config::available_keys() {
                    eprintln!("  {}", k);
                }
                return Err(Error::Config(format!("Unknown config key: {}", key)));
            }
        },

        (Some(key), Some(value)) => {
            config.set(key, value)?;
            config.save()?;
            println!("{} = {}", key, value);
        }

        (None, Some(_)) => {
            return Err(Error::Config(
                "Must specify a key to set a value".to_string(),
            ));
        }
    }

    Ok(())
}

/// Render every key grouped by section, TOML style
fn render_all(config: &Config) -> String {
    let mut output = String::new();
    let mut section = "";

    for key in Config::available_keys() {
        let Some((head, name)) = key.split_once('.') else {
            continue;
        };
        if head != section {
            if !section.is_empty() {
                output.push('\n');
            }
            output.push_str(&format!("[{}]\n", head));
            section = head;
        }
        let value = config.get(key).unwrap_or_default();
        output.push_str(&format!("{} = {}\n", name, value));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_all_groups_sections() {
        let rendered = render_all(&Config::default());

        assert!(rendered.starts_with("[ranking]\n"));
        assert!(rendered.contains("listing_limit = 10\n"));
        assert!(rendered.contains("\n[server]\n"));
        assert!(rendered.contains("port = 7979\n"));
        assert_eq!(rendered.matches("[search]").count(), 1);
    }
}
