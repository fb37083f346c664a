//! Scenario configuration.
//!
//! A scenario file is a YAML document listing the networks to set up, plus an
//! optional RNG seed for reproducible runs:
//!
//! ```yaml
//! seed: 42
//! networks:
//!   - name: "Paris"
//!     stations: 10
//!     slots_per_station: 10
//!     side_km: 10.0
//!     bikes: 75
//! ```
//!
//! Validation rejects shapes `setup_network` would refuse anyway (duplicate
//! names, more bikes than slots) so a bad file fails before any network is
//! built.

use std::fs::File;
use std::path::Path;

use color_eyre::Result;
use log::info;
use serde::{Deserialize, Serialize};

use crate::registry::SetupPlan;

const DEFAULT_SIDE_KM: f64 = 10.0;

fn default_side_km() -> f64 {
    DEFAULT_SIDE_KM
}

/// One network to set up.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkSetup {
    pub name: String,
    pub stations: usize,
    pub slots_per_station: usize,
    /// Side length of the square service region, in kilometers.
    #[serde(default = "default_side_km")]
    pub side_km: f64,
    pub bikes: usize,
}

impl NetworkSetup {
    pub fn to_plan(&self) -> SetupPlan {
        SetupPlan {
            name: self.name.clone(),
            station_count: self.stations,
            slots_per_station: self.slots_per_station,
            side_km: self.side_km,
            bike_count: self.bikes,
        }
    }
}

/// A full scenario: seed plus the networks to build.
#[derive(Debug, Serialize, Deserialize)]
pub struct ScenarioConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub networks: Vec<NetworkSetup>,
}

impl ScenarioConfig {
    /// Validate the scenario before running it.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.networks.is_empty() {
            return Err(ValidationError::InvalidScenario(
                "at least one network must be defined".to_string(),
            ));
        }
        for (i, setup) in self.networks.iter().enumerate() {
            if setup.name.trim().is_empty() {
                return Err(ValidationError::InvalidNetwork(format!(
                    "network #{} has an empty name",
                    i
                )));
            }
            if setup.side_km <= 0.0 {
                return Err(ValidationError::InvalidNetwork(format!(
                    "network '{}': side_km must be positive, got {}",
                    setup.name, setup.side_km
                )));
            }
            let capacity = setup.stations * setup.slots_per_station;
            if setup.bikes > capacity {
                return Err(ValidationError::InvalidNetwork(format!(
                    "network '{}': {} bikes exceed capacity of {} slots",
                    setup.name, setup.bikes, capacity
                )));
            }
            let duplicate = self.networks[..i]
                .iter()
                .any(|other| other.name.eq_ignore_ascii_case(&setup.name));
            if duplicate {
                return Err(ValidationError::InvalidScenario(format!(
                    "network name '{}' appears more than once",
                    setup.name
                )));
            }
        }
        Ok(())
    }
}

/// Load and validate a scenario from a YAML file.
pub fn load_scenario(path: &Path) -> Result<ScenarioConfig> {
    info!("Loading scenario from: {:?}", path);
    let file = File::open(path)?;
    let config: ScenarioConfig = serde_yaml::from_reader(file)?;
    config.validate()?;
    Ok(config)
}

#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid scenario: {0}")]
    InvalidScenario(String),
    #[error("Invalid network definition: {0}")]
    InvalidNetwork(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_scenario() {
        let yaml = r#"
seed: 7
networks:
  - name: "Paris"
    stations: 10
    slots_per_station: 10
    side_km: 12.5
    bikes: 75
  - name: "Lyon"
    stations: 4
    slots_per_station: 5
    bikes: 10
"#;
        let config: ScenarioConfig = serde_yaml::from_str(yaml).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.networks.len(), 2);
        assert_eq!(config.networks[0].side_km, 12.5);
        // side_km falls back to the default when omitted
        assert_eq!(config.networks[1].side_km, DEFAULT_SIDE_KM);
    }

    #[test]
    fn test_validation_rejects_overcommitted_bikes() {
        let yaml = r#"
networks:
  - name: "Lyon"
    stations: 2
    slots_per_station: 1
    bikes: 5
"#;
        let config: ScenarioConfig = serde_yaml::from_str(yaml).unwrap();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ValidationError::InvalidNetwork(_)));
    }

    #[test]
    fn test_validation_rejects_duplicate_names() {
        let yaml = r#"
networks:
  - name: "Paris"
    stations: 1
    slots_per_station: 1
    bikes: 0
  - name: "paris"
    stations: 1
    slots_per_station: 1
    bikes: 0
"#;
        let config: ScenarioConfig = serde_yaml::from_str(yaml).unwrap();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ValidationError::InvalidScenario(_)));
    }

    #[test]
    fn test_validation_rejects_empty_scenario() {
        let config = ScenarioConfig {
            seed: None,
            networks: Vec::new(),
        };
        assert!(matches!(
            config.validate().unwrap_err(),
            ValidationError::InvalidScenario(_)
        ));
    }

    #[test]
    fn test_load_scenario_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
networks:
  - name: "Marseille"
    stations: 3
    slots_per_station: 2
    bikes: 5
"#
        )
        .unwrap();

        let config = load_scenario(file.path()).unwrap();
        assert_eq!(config.networks[0].name, "Marseille");
        assert_eq!(config.networks[0].to_plan().bike_count, 5);
    }
}
