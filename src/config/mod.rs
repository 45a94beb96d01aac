pub mod roster;

#[cfg(feature = "cli")]
use clap::{Parser, ValueEnum};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// `[Sparrow, Eagle]`
    #[default]
    Text,
    /// `["Sparrow","Eagle"]`
    Json,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "cage")]
#[command(about = "Put birds in a cage and print them ordered by size")]
pub struct CliConfig {
    /// TOML roster listing the birds; defaults to a sparrow and an eagle
    #[arg(long)]
    pub roster: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let config = CliConfig::parse_from(["cage"]);
        assert!(config.roster.is_none());
        assert_eq!(config.format, OutputFormat::Text);
        assert!(!config.verbose);
    }

    #[test]
    fn test_cli_flags() {
        let config = CliConfig::parse_from([
            "cage",
            "--roster",
            "birds.toml",
            "--format",
            "json",
            "--verbose",
        ]);
        assert_eq!(config.roster.as_deref(), Some("birds.toml"));
        assert_eq!(config.format, OutputFormat::Json);
        assert!(config.verbose);
    }
}
