//! Application configuration management.
//!
//! Configuration is merged from default values, an optional TOML file and
//! environment variables, in increasing order of precedence. Command-line
//! flags are applied on top by the individual subcommands.

use crate::loader::ProfitMode;
use ait_solver::{
    Budget, ConfigurationError, CurrencyScale, exhaustive::ExhaustiveSettings,
    knapsack::KnapsackSettings,
};
use config::{ConfigBuilder, builder::DefaultState};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The main application configuration
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct AppConfig {
    /// Budget and optimizer tuning
    #[serde(default)]
    pub solver: SolverConfig,

    /// How catalog files are interpreted
    #[serde(default)]
    pub loader: LoaderConfig,
}

/// Budget and optimizer tuning
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SolverConfig {
    /// The ceiling on total purchase cost
    pub budget: f64,
    /// Minor currency units per major unit, for the knapsack table.
    /// Prices finer than one unit are charged the next whole unit.
    pub scale_factor: u32,
    /// Catalogs up to this size are solved exhaustively by the `auto` strategy,
    /// larger ones are refused by the exhaustive optimizer
    pub exhaustive_limit: usize,
    /// The largest knapsack table to allocate, in cells
    pub max_capacity: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        let knapsack = KnapsackSettings::default();
        Self {
            budget: Budget::DEFAULT,
            scale_factor: knapsack.scale.factor(),
            exhaustive_limit: ExhaustiveSettings::PRACTICAL_LIMIT,
            max_capacity: knapsack.max_capacity,
        }
    }
}

impl SolverConfig {
    pub fn budget(&self) -> Result<Budget, ConfigurationError> {
        Budget::new(self.budget)
    }

    pub fn exhaustive(&self) -> ExhaustiveSettings {
        ExhaustiveSettings {
            max_assets: Some(self.exhaustive_limit),
        }
    }

    pub fn knapsack(&self) -> Result<KnapsackSettings, ConfigurationError> {
        Ok(KnapsackSettings {
            scale: CurrencyScale::new(self.scale_factor)?,
            max_capacity: self.max_capacity,
        })
    }
}

/// How catalog files are interpreted
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoaderConfig {
    /// Whether the profit column is a percentage of the price or an amount
    pub profit_mode: ProfitMode,
    /// The CSV field delimiter, a single ASCII character
    pub delimiter: String,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            profit_mode: ProfitMode::default(),
            delimiter: ",".to_owned(),
        }
    }
}

impl AppConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. Environment variables (highest priority)
    /// 2. The config file, if given
    /// 3. Default values (lowest priority)
    ///
    /// Environment variables are mapped using the pattern
    /// `AIT_<SECTION>__<KEY>` to `<section>.<key>`:
    ///
    /// ```bash
    /// export AIT_SOLVER__BUDGET=750
    /// export AIT_LOADER__PROFIT_MODE=amount
    /// ```
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut config = Self::defaults()?;

        // Layer on config file if it is specified and exists
        if let Some(path) = path {
            if path.exists() {
                config = config.add_source(config::File::from(path))
            } else {
                return Err(anyhow::anyhow!(
                    "Config file {} does not exist",
                    path.display()
                ));
            }
        }

        Self::finish(config)
    }

    fn defaults() -> anyhow::Result<ConfigBuilder<DefaultState>> {
        Ok(config::Config::builder().add_source(config::Config::try_from(&Self::default())?))
    }

    // Override with environment variables, then deserialize
    fn finish(config: ConfigBuilder<DefaultState>) -> anyhow::Result<Self> {
        let config = config.add_source(
            config::Environment::with_prefix("AIT")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let built_config = config.build()?;
        built_config.try_deserialize().map_err(Into::into)
    }
}
