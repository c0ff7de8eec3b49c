use serde::{Deserialize, Serialize};
use voyagezvert_carbon::model::{
    aggregate::{aggregate, AggregateResult},
    estimate::EmissionEstimate,
    offset::{equivalents, offset_costs, CarbonEquivalents, OffsetCosts},
    score::{score_estimate, EcoScore, ScoreRating},
    suggestion::{suggest, Suggestion},
    Domain,
};

/// eco score of a single leg. legs that cannot be scored (no baseline for the
/// domain, or zero magnitude) carry no score.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct LegScore {
    pub domain: Domain,
    pub category: String,
    pub mass: f64,
    pub score: Option<EcoScore>,
    pub rating: Option<ScoreRating>,
}

/// everything known about the carbon footprint of a trip, as written by the
/// `estimate` command.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CarbonReport {
    pub aggregate: AggregateResult,
    pub leg_scores: Vec<LegScore>,
    pub suggestions: Vec<Suggestion>,
    pub offset_costs: OffsetCosts,
    pub equivalents: CarbonEquivalents,
}

impl CarbonReport {
    pub fn from_estimates(estimates: Vec<EmissionEstimate>) -> CarbonReport {
        let leg_scores = estimates.iter().map(leg_score).collect();
        let suggestions = suggest(&estimates);
        let aggregate = aggregate(&estimates);
        let offset_costs = offset_costs(aggregate.total);
        let equivalents = equivalents(aggregate.total);
        log::info!(
            "estimated {} legs totalling {:.2} kg CO2e with {} suggestions",
            aggregate.details.len(),
            aggregate.total,
            suggestions.len()
        );
        CarbonReport {
            aggregate,
            leg_scores,
            suggestions,
            offset_costs,
            equivalents,
        }
    }
}

fn leg_score(estimate: &EmissionEstimate) -> LegScore {
    let score = match score_estimate(estimate) {
        Ok(s) => Some(s),
        Err(e) => {
            log::debug!("leg {} has no eco score: {e}", estimate.category);
            None
        }
    };
    LegScore {
        domain: estimate.domain(),
        category: estimate.category.name().to_string(),
        mass: estimate.mass,
        score,
        rating: score.map(|s| s.rating()),
    }
}
