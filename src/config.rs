use crate::error::{CalcError, CalcResult};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Toggles for the smoothing passes of the engine.
///
/// The tuned constants of the model are not configurable; only the moving
/// averages can be switched off, which is mostly useful for inspecting raw
/// per-interval values.
#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalcParams {
    /// 3-point moving average over every pattern downscaler series.
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub smooth_patterns: bool,

    /// 2-point moving average over the ms difficulty series.
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub smooth_difficulty: bool,
}

impl Default for CalcParams {
    fn default() -> Self {
        Self {
            smooth_patterns: true,
            smooth_difficulty: true,
        }
    }
}

impl CalcParams {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> CalcResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            CalcError::Config(format!("Failed to read params file '{}': {}", path.display(), e))
        })?;

        Ok(serde_json::from_str(&content)?)
    }

    /// Copies values the user typed on the command line over the file values.
    pub fn merge_from_cli(&mut self, cli_params: &CalcParams, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$field = cli_params.$field;
                }
            };
        }

        update_if_present!(smooth_patterns, "smooth_patterns");
        update_if_present!(smooth_difficulty, "smooth_difficulty");
    }
}
