use crate::config::toml_config::{ParsingConfig, TomlConfig};
use crate::utils::error::Result;
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "greet-ages")]
#[command(about = "Load 'name: age' lines and list them sorted by age")]
pub struct CliConfig {
    /// Roster file to read [default: ages]
    #[arg(short, long)]
    pub input: Option<String>,

    /// Directory for roster.txt / roster.csv / roster.json; prints to stdout when omitted
    #[arg(short, long)]
    pub output_path: Option<String>,

    /// Comma separated output formats: inspect, csv, json
    #[arg(short, long, value_delimiter = ',')]
    pub formats: Vec<String>,

    /// Fail on ages that do not fit in 32 bits instead of reading them as zero
    #[arg(long)]
    pub strict_ages: bool,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl CliConfig {
    /// Loads the TOML file if one was given, then layers command line flags on top.
    pub fn resolve(&self) -> Result<TomlConfig> {
        let mut config = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };
        self.apply_overrides(&mut config);
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut TomlConfig) {
        if let Some(input) = &self.input {
            config.input.path = input.clone();
        }
        if let Some(output_path) = &self.output_path {
            config.output.path = Some(output_path.clone());
        }
        if !self.formats.is_empty() {
            config.output.formats = self.formats.clone();
        }
        if self.strict_ages {
            config
                .parsing
                .get_or_insert(ParsingConfig { strict_ages: None })
                .strict_ages = Some(true);
        }
    }

    pub fn verbose_enabled(&self, config: &TomlConfig) -> bool {
        self.verbose || config.verbose_logs()
    }

    pub fn json_logs_enabled(&self, config: &TomlConfig) -> bool {
        self.json_logs || config.json_logs()
    }
}
