//! Command line arguments for the demo binary.

use clap::Parser;
use std::path::PathBuf;

use crate::config::{Config, ConfigError};
use crate::ui::overlay::Direction;

/// Terminal demo of the incoming call alert and menu overlay widgets
#[derive(Parser, Debug)]
#[command(name = "callkit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file (default: ~/.config/callkit/config.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log file, overrides `[logging] file`
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Menu placement, overrides `[menu] direction` (e.g. top-right)
    #[arg(long)]
    pub direction: Option<Direction>,

    /// Load and validate the config, then exit
    #[arg(long, default_value_t = false)]
    pub check: bool,
}

impl Cli {
    /// Config from `--config` or the default location, with CLI overrides applied.
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        if let Some(file) = &self.log_file {
            config.logging.file = Some(file.clone());
        }
        if let Some(direction) = self.direction {
            config.menu.direction = direction;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flags() {
        let cli = Cli::parse_from(["callkit", "--config", "/tmp/c.toml", "--check"]);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/c.toml")));
        assert!(cli.check);
        assert!(cli.log_file.is_none());
        assert!(cli.direction.is_none());
    }

    #[test]
    fn direction_overrides_menu_placement() {
        let dir = tempfile::TempDir::new().unwrap();
        let cli = Cli::parse_from([
            "callkit".into(),
            "--config".into(),
            dir.path().join("missing.toml").into_os_string(),
            "--direction".into(),
            "right-center".into(),
        ]);
        let config = cli.load_config().unwrap();
        assert_eq!(config.menu.direction, Direction::RightCenter);
    }

    #[test]
    fn unknown_direction_is_rejected() {
        let err = Cli::try_parse_from(["callkit", "--direction", "sideways"]).unwrap_err();
        assert!(err.to_string().contains("Unknown overlay direction 'sideways'"));
    }

    #[test]
    fn log_file_overrides_config() {
        let dir = tempfile::TempDir::new().unwrap();
        let cli = Cli::parse_from([
            "callkit".into(),
            "--config".into(),
            dir.path().join("missing.toml").into_os_string(),
            "--log-file".into(),
            dir.path().join("demo.log").into_os_string(),
        ]);
        let config = cli.load_config().unwrap();
        assert_eq!(config.logging.file, Some(dir.path().join("demo.log")));
        assert_eq!(config.menu, Config::default().menu);
    }
}
