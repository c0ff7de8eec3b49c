use super::AggregateResult;
use crate::model::estimate::EmissionEstimate;
use crate::model::Domain;
use std::collections::BTreeMap;

/// folds estimates into a total and a per-domain breakdown. no estimate is
/// dropped; an empty input gives a zero total and an empty breakdown.
pub fn aggregate(estimates: &[EmissionEstimate]) -> AggregateResult {
    let breakdown = estimates
        .iter()
        .fold(BTreeMap::<Domain, f64>::new(), |mut acc, e| {
            *acc.entry(e.domain()).or_insert(0.0) += e.mass;
            acc
        });
    let total: f64 = breakdown.values().sum();
    log::debug!(
        "aggregated {} estimates into {} domains, total {total} kg CO2e",
        estimates.len(),
        breakdown.len()
    );
    AggregateResult {
        total,
        breakdown,
        details: estimates.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::estimate::estimate;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_empty_aggregate() {
        let result = aggregate(&[]);
        assert_eq!(result.total, 0.0);
        assert!(result.breakdown.is_empty());
        assert!(result.details.is_empty());
    }

    #[test]
    fn test_total_equals_breakdown_sum() {
        let estimates = vec![
            estimate(Domain::Transport, "plane_long", 1234.5, 2).unwrap(),
            estimate(Domain::Accommodation, "hotel_luxury", 3.0, 2).unwrap(),
            estimate(Domain::Transport, "tram", 7.3, 2).unwrap(),
            estimate(Domain::Food, "local_omnivore", 9.0, 1).unwrap(),
            estimate(Domain::Activity, "spa", 2.5, 1).unwrap(),
            estimate(Domain::Transport, "metro", 0.1, 3).unwrap(),
        ];
        let result = aggregate(&estimates);
        let sum: f64 = result.breakdown.values().sum();
        assert_eq!(result.total, sum);
        assert_eq!(result.breakdown.len(), 4);
        assert_eq!(result.details, estimates);
    }

    #[test]
    fn test_three_transport_legs() {
        let estimates = ["train", "plane_domestic", "bus"]
            .iter()
            .map(|mode| estimate(Domain::Transport, mode, 462.0, 1).unwrap())
            .collect::<Vec<_>>();
        assert!(approx_eq(estimates[0].mass, 18.942));
        assert!(approx_eq(estimates[1].mass, 117.81));
        assert!(approx_eq(estimates[2].mass, 41.118));
        let result = aggregate(&estimates);
        assert!(approx_eq(result.total, 177.87));
        assert_eq!(result.breakdown.len(), 1);
        assert!(approx_eq(result.breakdown[&Domain::Transport], 177.87));
        assert_eq!(result.share(&Domain::Transport), 1.0);
        assert_eq!(result.share(&Domain::Food), 0.0);
    }
}
