use super::config_ops::{read_config_file, read_csv_file, read_json_file};
use super::{AppError, CarbonReport};
use crate::model::comparison::compare_routes;
use crate::model::filter::{
    filter_and_sort, ActivityCriteria, HotelCriteria, OfferingFilter, RouteCriteria, SortKey,
};
use crate::model::offering::{Activity, Hotel, Offering, OfferingKind, TransportRoute};
use clap::Subcommand;
use rayon::prelude::*;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::json;
use voyagezvert_carbon::model::{
    emission_factor::{default_table, EmissionFactorConfig, EmissionFactorTable},
    estimate::{estimate_leg, EmissionEstimate, LegQuantity},
    score::score,
    Domain,
};

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum Operation {
    /// estimate the carbon footprint of the trip legs listed in a CSV file
    Estimate {
        /// CSV file with columns domain,category,magnitude,multiplier
        #[arg(long)]
        legs_file: String,
        /// TOML or JSON file overriding the built-in emission factors
        #[arg(long)]
        emission_factors_file: Option<String>,
    },
    /// eco score of some emissions over a distance, a number of nights or a duration
    Score {
        /// kg CO2e
        #[arg(long)]
        mass: f64,
        /// km, nights or hours
        #[arg(long)]
        magnitude: f64,
        #[arg(long)]
        domain: String,
    },
    /// filter and sort offerings read from a JSON file
    Search {
        /// JSON array of offerings of a single kind
        #[arg(long)]
        offerings_file: String,
        #[arg(long, value_enum)]
        kind: OfferingKind,
        /// TOML or JSON file with search criteria. when omitted, nothing is filtered out.
        #[arg(long)]
        criteria_file: Option<String>,
        #[arg(long, value_enum, default_value_t = SortKey::Eco)]
        sort_by: SortKey,
    },
    /// summarize a JSON array of candidate routes
    Compare {
        #[arg(long)]
        routes_file: String,
    },
}

impl Operation {
    pub fn run(&self) -> Result<serde_json::Value, AppError> {
        match self {
            Operation::Estimate {
                legs_file,
                emission_factors_file,
            } => {
                let configured_table: EmissionFactorTable;
                let table = match emission_factors_file {
                    None => default_table(),
                    Some(f) => {
                        log::info!("reading emission factors from {f}");
                        let conf = EmissionFactorConfig::try_from(f)?;
                        configured_table = EmissionFactorTable::try_from(&conf)?;
                        &configured_table
                    }
                };
                let legs: Vec<LegQuantity> = read_csv_file(legs_file)?;
                if legs.is_empty() {
                    return Err(AppError::EmptyInput(legs_file.clone()));
                }
                log::info!("estimating {} legs from {legs_file}", legs.len());
                let estimates = legs
                    .par_iter()
                    .map(|leg| estimate_leg(table, leg))
                    .collect::<Result<Vec<EmissionEstimate>, _>>()?;
                let report = CarbonReport::from_estimates(estimates);
                Ok(serde_json::to_value(report)?)
            }
            Operation::Score {
                mass,
                magnitude,
                domain,
            } => {
                let domain: Domain = domain.parse()?;
                let eco_score = score(*mass, *magnitude, domain)?;
                Ok(json!({
                    "domain": domain,
                    "mass": mass,
                    "magnitude": magnitude,
                    "unit": domain.unit(),
                    "eco_score": eco_score,
                    "rating": eco_score.rating(),
                }))
            }
            Operation::Search {
                offerings_file,
                kind,
                criteria_file,
                sort_by,
            } => match kind {
                OfferingKind::Route => {
                    search::<TransportRoute, RouteCriteria>(offerings_file, criteria_file, sort_by)
                }
                OfferingKind::Hotel => {
                    search::<Hotel, HotelCriteria>(offerings_file, criteria_file, sort_by)
                }
                OfferingKind::Activity => {
                    search::<Activity, ActivityCriteria>(offerings_file, criteria_file, sort_by)
                }
            },
            Operation::Compare { routes_file } => {
                let routes: Vec<TransportRoute> = read_json_file(routes_file)?;
                match compare_routes(&routes) {
                    Some(summary) => Ok(serde_json::to_value(summary)?),
                    None => {
                        log::warn!("no routes to compare in {routes_file}");
                        Ok(serde_json::Value::Null)
                    }
                }
            }
        }
    }
}

fn search<T, F>(
    offerings_file: &String,
    criteria_file: &Option<String>,
    sort_by: &SortKey,
) -> Result<serde_json::Value, AppError>
where
    T: Offering + Serialize + DeserializeOwned,
    F: OfferingFilter<T> + DeserializeOwned + Default,
{
    let offerings: Vec<T> = read_json_file(offerings_file)?;
    let criteria: F = match criteria_file {
        Some(f) => {
            log::info!("reading search criteria from {f}");
            read_config_file(f)?
        }
        None => F::default(),
    };
    let result = filter_and_sort(&offerings, &criteria, sort_by);
    log::info!(
        "{} of {} offerings match, sorted by {sort_by}",
        result.len(),
        offerings.len()
    );
    Ok(serde_json::to_value(result)?)
}
