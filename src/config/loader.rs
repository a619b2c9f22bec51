//! Configuration loading functionality.
//!
//! This module provides the [`PlanLoader`] type for loading tariff
//! configuration (day plans and the flextime policy) from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{DayPlanConfig, FlextimeConfig, TariffConfig};

/// Loads and provides access to tariff configuration.
///
/// The `PlanLoader` reads YAML configuration files from a directory and
/// validates each day plan before handing it to callers. The calculation
/// functions never touch the loader; orchestration resolves plans here and
/// passes them in by value.
///
/// # Directory Structure
///
/// ```text
/// config/standard-tariff/
/// ├── flextime.yaml        # Monthly flextime credit policy (optional)
/// └── day_plans/
///     ├── standard_day.yaml
///     └── early_shift.yaml
/// ```
///
/// # Example
///
/// ```no_run
/// use time_engine::config::PlanLoader;
///
/// let loader = PlanLoader::load("./config/standard-tariff").unwrap();
/// let plan = loader.get_day_plan("standard_day").unwrap();
/// println!("Target minutes: {}", plan.target_minutes);
/// ```
#[derive(Debug, Clone)]
pub struct PlanLoader {
    config: TariffConfig,
}

impl PlanLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory
    ///
    /// # Returns
    ///
    /// Returns a `PlanLoader` instance on success, or an error if:
    /// - The day-plans directory is missing
    /// - Any file contains invalid YAML
    /// - Any day plan fails validation
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        // flextime.yaml is optional; defaults to no_evaluation
        let flextime_path = path.join("flextime.yaml");
        let flextime = if flextime_path.exists() {
            Self::load_yaml::<FlextimeConfig>(&flextime_path)?
        } else {
            FlextimeConfig::default()
        };

        let plans_dir = path.join("day_plans");
        let mut config = TariffConfig {
            flextime,
            ..Default::default()
        };

        let entries = fs::read_dir(&plans_dir).map_err(|_| EngineError::ConfigNotFound {
            path: plans_dir.display().to_string(),
        })?;

        for entry in entries.flatten() {
            let file_path = entry.path();
            if file_path.extension().and_then(|e| e.to_str()) != Some("yaml") {
                continue;
            }

            let name = file_path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or_default()
                .to_string();

            let plan = Self::load_yaml::<DayPlanConfig>(&file_path)?;
            Self::validate_plan(&name, &plan)?;
            config.day_plans.insert(name, plan);
        }

        Ok(PlanLoader { config })
    }

    /// Returns the loaded tariff configuration.
    pub fn config(&self) -> &TariffConfig {
        &self.config
    }

    /// Looks up a day plan by name.
    pub fn get_day_plan(&self, name: &str) -> Option<&DayPlanConfig> {
        self.config.day_plans.get(name)
    }

    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let contents = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path.display().to_string(),
        })?;

        serde_yaml::from_str(&contents).map_err(|e| EngineError::ConfigParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    fn validate_plan(name: &str, plan: &DayPlanConfig) -> EngineResult<()> {
        let invalid = |message: &str| EngineError::InvalidDayPlan {
            plan: name.to_string(),
            message: message.to_string(),
        };

        if plan.come_from > plan.come_to {
            return Err(invalid("come_from after come_to"));
        }
        if plan.go_from > plan.go_to {
            return Err(invalid("go_from after go_to"));
        }
        if !(0..=1440).contains(&plan.target_minutes) {
            return Err(invalid("target_minutes outside 0-1440"));
        }
        if let (Some(start), Some(end)) = (plan.core_start, plan.core_end) {
            if start > end {
                return Err(invalid("core_start after core_end"));
            }
        }
        for rule in &plan.break_rules {
            if rule.duration_minutes < 0 {
                return Err(invalid("break rule with negative duration"));
            }
        }
        Ok(())
    }
}
