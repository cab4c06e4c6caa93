use crate::alphabet::DEFAULT_FALLBACK;
use crate::error::{FusionError, FvResult};
use crate::scorer::{MAX_WINDOW, WINDOW_CEILING};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub chart: ChartParams,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ChartParams {
    /// Rolling-mean window applied to the P-value series
    #[arg(short = 'w', long, default_value_t = 5)]
    pub window_size: usize,

    /// Upper bound of the window slider
    #[arg(long, default_value_t = MAX_WINDOW)]
    pub max_window: usize,

    /// Score for residues missing from the table
    #[arg(long, default_value_t = DEFAULT_FALLBACK)]
    pub fallback_score: f64,
}

impl Default for ChartParams {
    fn default() -> Self {
        Self {
            window_size: 5,
            max_window: MAX_WINDOW,
            fallback_score: DEFAULT_FALLBACK,
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> FvResult<Self> {
        let content = fs::read_to_string(&path)?;
        let config: Config = serde_json::from_str(&content)?;
        debug!("Loaded config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Overwrites only the fields the user typed on the command line,
    /// leaving file values in place of clap defaults.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.chart.$field = cli.chart.$field.clone();
                }
            };
        }

        update_if_present!(window_size, "window_size");
        update_if_present!(max_window, "max_window");
        update_if_present!(fallback_score, "fallback_score");
    }

    pub fn validate(&self) -> FvResult<()> {
        let c = &self.chart;
        if c.max_window == 0 || c.max_window > WINDOW_CEILING {
            return Err(FusionError::Config(format!(
                "max_window must be in [1, {}], got {}",
                WINDOW_CEILING, c.max_window
            )));
        }
        if !c.fallback_score.is_finite() || c.fallback_score <= 0.0 {
            return Err(FusionError::Config(format!(
                "fallback_score must be a positive number, got {}",
                c.fallback_score
            )));
        }
        Ok(())
    }
}
