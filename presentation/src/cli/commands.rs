//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tally_domain::ReportFormat;

/// Results format selectable on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// Aligned table with percentage bars
    Table,
    /// Pretty-printed JSON
    Json,
}

impl From<FormatArg> for ReportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Table => ReportFormat::Table,
            FormatArg::Json => ReportFormat::Json,
        }
    }
}

/// CLI arguments for survey-tally
#[derive(Parser, Debug)]
#[command(name = "survey-tally")]
#[command(author, version, about = "Create surveys, record responses and publish the tallies")]
#[command(long_about = r#"
survey-tally is an interactive survey tool. From its menu you can:

1. Create a survey
2. Add multiple-choice questions (2-5 options each)
3. View a survey and its questions
4. Conduct a survey, recording one response per question
5. Publish the results with counts, percentages and bars

Surveys live in memory for the duration of the session.

Configuration files are loaded from (in priority order):
1. --config <path>             Explicit config file
2. ./survey-tally.toml         Project-level config
3. ~/.config/survey-tally/config.toml   Global config

Example:
  survey-tally
  survey-tally --format json --no-color
  survey-tally -vv --progress
"#)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Format used when publishing results (overrides config)
    #[arg(short, long, value_enum, value_name = "FORMAT")]
    pub format: Option<FormatArg>,

    /// Disable colored output (overrides config)
    #[arg(long)]
    pub no_color: bool,

    /// Echo each recorded response to stderr while conducting
    #[arg(short, long)]
    pub progress: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["survey-tally"]);
        assert!(cli.config.is_none());
        assert!(!cli.no_config);
        assert!(cli.format.is_none());
        assert!(!cli.no_color);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::parse_from([
            "survey-tally",
            "-c",
            "my.toml",
            "--format",
            "json",
            "--no-color",
            "--progress",
            "-vv",
        ]);
        assert_eq!(cli.config, Some(PathBuf::from("my.toml")));
        assert_eq!(cli.format.map(ReportFormat::from), Some(ReportFormat::Json));
        assert!(cli.no_color);
        assert!(cli.progress);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(Cli::try_parse_from(["survey-tally", "--format", "yaml"]).is_err());
    }
}
