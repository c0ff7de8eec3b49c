use super::EmissionFactorTable;
use crate::model::{CarbonError, Domain, EmissionCategory};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// user overrides for the emission factor table, read from a TOML or JSON file.
///
/// # Example
///
/// ```toml
/// extend_defaults = true
///
/// [transport]
/// train = 0.035
/// car_electric = 0.071
///
/// [food]
/// local_vegetarian = 0.7
/// ```
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct EmissionFactorConfig {
    /// when true, listed factors replace the built-in ones and every other
    /// category keeps its default. when false, only listed factors exist.
    #[serde(default = "default_extend_defaults")]
    pub extend_defaults: bool,
    #[serde(default)]
    pub transport: HashMap<String, f64>,
    #[serde(default)]
    pub accommodation: HashMap<String, f64>,
    #[serde(default)]
    pub activity: HashMap<String, f64>,
    #[serde(default)]
    pub food: HashMap<String, f64>,
}

fn default_extend_defaults() -> bool {
    true
}

impl Default for EmissionFactorConfig {
    fn default() -> Self {
        Self {
            extend_defaults: true,
            transport: HashMap::new(),
            accommodation: HashMap::new(),
            activity: HashMap::new(),
            food: HashMap::new(),
        }
    }
}

impl EmissionFactorConfig {
    fn domain_factors(&self) -> [(Domain, &HashMap<String, f64>); 4] {
        [
            (Domain::Transport, &self.transport),
            (Domain::Accommodation, &self.accommodation),
            (Domain::Activity, &self.activity),
            (Domain::Food, &self.food),
        ]
    }
}

impl TryFrom<&String> for EmissionFactorConfig {
    type Error = CarbonError;

    fn try_from(f: &String) -> Result<Self, Self::Error> {
        if f.ends_with(".toml") {
            let s = std::fs::read_to_string(f).map_err(|e| {
                CarbonError::ConfigurationError(format!("failure reading {f}: {e}"))
            })?;
            toml::from_str(&s).map_err(|e| {
                CarbonError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })
        } else if f.ends_with(".json") {
            let s = std::fs::read_to_string(f).map_err(|e| {
                CarbonError::ConfigurationError(format!("failure reading {f}: {e}"))
            })?;
            serde_json::from_str(&s).map_err(|e| {
                CarbonError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })
        } else {
            Err(CarbonError::ConfigurationError(format!(
                "unsupported file type: {f}"
            )))
        }
    }
}

impl TryFrom<&EmissionFactorConfig> for EmissionFactorTable {
    type Error = CarbonError;

    fn try_from(conf: &EmissionFactorConfig) -> Result<Self, Self::Error> {
        let mut factors: HashMap<EmissionCategory, f64> = if conf.extend_defaults {
            EmissionCategory::all()
                .map(|c| (c, c.default_factor()))
                .collect()
        } else {
            HashMap::new()
        };
        for (domain, overrides) in conf.domain_factors() {
            for (name, factor) in overrides.iter() {
                let category = EmissionCategory::parse(domain, name)
                    .map_err(|e| CarbonError::ConfigurationError(e.to_string()))?;
                log::debug!("emission factor override {category} = {factor}");
                factors.insert(category, *factor);
            }
        }
        EmissionFactorTable::new(factors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::emission_category::TransportCategory;

    #[test]
    fn test_decode_toml_overrides() {
        let conf: EmissionFactorConfig = toml::from_str(
            r#"
            [transport]
            train = 0.035
            "#,
        )
        .unwrap();
        assert!(conf.extend_defaults);
        let table = EmissionFactorTable::try_from(&conf).unwrap();
        let train = EmissionCategory::Transport(TransportCategory::Train);
        let bus = EmissionCategory::Transport(TransportCategory::Bus);
        assert_eq!(table.get(&train), Some(0.035));
        assert_eq!(table.get(&bus), Some(0.089));
    }

    #[test]
    fn test_replace_defaults() {
        let conf: EmissionFactorConfig = serde_json::from_value(serde_json::json!({
            "extend_defaults": false,
            "food": { "fine_dining": 6.0 }
        }))
        .unwrap();
        let table = EmissionFactorTable::try_from(&conf).unwrap();
        assert_eq!(table.len(), 1);
        assert!(table.lookup(Domain::Transport, "train").is_err());
        assert_eq!(table.lookup(Domain::Food, "fine_dining").unwrap().1, 6.0);
    }

    #[test]
    fn test_unknown_category_in_config() {
        let conf: EmissionFactorConfig = serde_json::from_value(serde_json::json!({
            "transport": { "teleporter": 0.0 }
        }))
        .unwrap();
        let result = EmissionFactorTable::try_from(&conf);
        assert!(matches!(result, Err(CarbonError::ConfigurationError(_))));
    }

    #[test]
    fn test_unsupported_file_type() {
        let result = EmissionFactorConfig::try_from(&String::from("factors.yaml"));
        assert!(matches!(result, Err(CarbonError::ConfigurationError(_))));
    }
}
