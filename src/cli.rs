//! Command-line argument parsing
//!
//! Supports:
//! - Resolving a config's editor size against a measured element
//! - Checking a config file
//! - Printing the default options
//! - Running one headless edit cycle

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Inspect and exercise inline editor configurations
#[derive(Parser, Debug)]
#[command(name = "inline-edit", version, about = "Inline editor configuration tool")]
pub struct CliArgs {
    /// Also write debug logs to this directory (daily rotation)
    #[arg(long, value_name = "DIR", global = true)]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Resolve editor size for a measured display element
    Resolve {
        /// YAML options file (defaults are used when omitted)
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Measured width of the display element
        #[arg(long, default_value_t = 0.0)]
        width: f64,

        /// Measured height of the display element
        #[arg(long, default_value_t = 0.0)]
        height: f64,

        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },

    /// Validate a YAML options file
    Check {
        #[arg(value_name = "FILE")]
        config: PathBuf,
    },

    /// Print the default options as YAML
    Defaults,

    /// Run one edit: begin on a display value, type input, complete
    Simulate {
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Display value before the edit
        #[arg(long, default_value = "")]
        display: String,

        /// Text typed into the editor
        #[arg(long)]
        input: String,

        /// Cancel instead of completing
        #[arg(long)]
        cancel: bool,

        #[arg(long, default_value_t = 0.0)]
        width: f64,

        #[arg(long, default_value_t = 0.0)]
        height: f64,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Yaml,
}

/// Measured display element size from the command line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measured {
    pub width: f64,
    pub height: f64,
}

impl Measured {
    /// Reject sizes a real element cannot have
    pub fn new(width: f64, height: f64) -> Result<Self, String> {
        for (name, value) in [("width", width), ("height", height)] {
            if !value.is_finite() || value < 0.0 {
                return Err(format!("measured {} must be a non-negative number", name));
            }
        }
        Ok(Self { width, height })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_resolve_command() {
        let args = CliArgs::try_parse_from([
            "inline-edit",
            "resolve",
            "--width",
            "40",
            "--format",
            "yaml",
        ])
        .unwrap();
        match args.command {
            CliCommand::Resolve {
                config,
                width,
                height,
                format,
            } => {
                assert!(config.is_none());
                assert_eq!(width, 40.0);
                assert_eq!(height, 0.0);
                assert_eq!(format, OutputFormat::Yaml);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_simulate_requires_input() {
        assert!(CliArgs::try_parse_from(["inline-edit", "simulate"]).is_err());
    }

    #[test]
    fn test_global_log_dir() {
        let args =
            CliArgs::try_parse_from(["inline-edit", "defaults", "--log-dir", "/tmp/logs"]).unwrap();
        assert_eq!(args.log_dir, Some(PathBuf::from("/tmp/logs")));
        assert!(matches!(args.command, CliCommand::Defaults));
    }

    #[test]
    fn test_measured_rejects_negative() {
        assert!(Measured::new(-1.0, 10.0).is_err());
        assert!(Measured::new(f64::NAN, 10.0).is_err());
        assert_eq!(
            Measured::new(40.0, 18.0),
            Ok(Measured {
                width: 40.0,
                height: 18.0
            })
        );
    }
}
