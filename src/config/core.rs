use serde::{Deserialize, Serialize};

use crate::harvest::ExclusionPolicy;
use crate::io::{GoOptions, OutputFormat};

/// Root configuration structure for sigtable
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SigtableConfig {
    /// Packages never offered as suggestions
    #[serde(default)]
    pub exclude: ExclusionPolicy,

    /// Output rendering
    #[serde(default)]
    pub output: OutputConfig,

    /// Harvesting behaviour
    #[serde(default)]
    pub harvest: HarvestConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: Option<OutputFormat>,

    /// Package clause of the generated Go file
    #[serde(default)]
    pub package: Option<String>,

    /// Header comment of the generated Go file
    #[serde(default)]
    pub header: Option<String>,
}

impl OutputConfig {
    pub fn go_options(&self) -> GoOptions {
        let defaults = GoOptions::default();
        GoOptions {
            package: self.package.clone().unwrap_or(defaults.package),
            header: self.header.clone().unwrap_or(defaults.header),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HarvestConfig {
    /// Resolve packages on a thread pool
    #[serde(default = "default_parallel")]
    pub parallel: bool,
}

fn default_parallel() -> bool {
    true
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self {
            parallel: default_parallel(),
        }
    }
}
