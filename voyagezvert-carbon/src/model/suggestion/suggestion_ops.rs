use super::{Suggestion, SuggestionRule};
use crate::model::estimate::EmissionEstimate;

/// produces one suggestion per estimate whose mass exceeds the threshold of its
/// domain, in input order. estimates are only read.
pub fn suggest(estimates: &[EmissionEstimate]) -> Vec<Suggestion> {
    estimates
        .iter()
        .filter_map(|e| {
            let domain = e.domain();
            let rule = SuggestionRule::for_domain(&domain)?;
            if !rule.applies_to(e.mass) {
                return None;
            }
            Some(Suggestion {
                domain,
                current_emissions: e.mass,
                suggestion: rule.advice.to_string(),
                potential_reduction: e.mass * rule.reduction_fraction,
                eco_alternative: rule.eco_alternative.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::estimate::{estimate, EstimateDetails};
    use crate::model::{Domain, EmissionCategory};

    fn with_mass(domain: Domain, category: &str, mass: f64) -> EmissionEstimate {
        EmissionEstimate {
            category: EmissionCategory::parse(domain, category).unwrap(),
            mass,
            details: EstimateDetails {
                value: 1.0,
                unit: domain.unit().to_string(),
                emission_factor: mass,
                multiplier: 1,
            },
        }
    }

    #[test]
    fn test_transport_threshold() {
        let result = suggest(&[with_mass(Domain::Transport, "car_petrol", 25.0)]);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].domain, Domain::Transport);
        assert!((result[0].potential_reduction - 17.5).abs() < 1e-12);
        assert_eq!(result[0].eco_alternative, "Train ou bus");

        let result = suggest(&[with_mass(Domain::Transport, "car_petrol", 15.0)]);
        assert!(result.is_empty());
    }

    #[test]
    fn test_threshold_is_strict() {
        let estimates = [
            with_mass(Domain::Transport, "bus", 20.0),
            with_mass(Domain::Accommodation, "hostel", 15.0),
            with_mass(Domain::Activity, "spa", 10.0),
        ];
        assert!(suggest(&estimates).is_empty());
    }

    #[test]
    fn test_food_never_suggests() {
        let result = suggest(&[with_mass(Domain::Food, "fine_dining", 500.0)]);
        assert!(result.is_empty());
    }

    #[test]
    fn test_follows_input_order() {
        let estimates = [
            with_mass(Domain::Activity, "helicopter_tour", 31.2),
            with_mass(Domain::Transport, "train", 5.0),
            with_mass(Domain::Accommodation, "hotel_luxury", 37.4),
        ];
        let result = suggest(&estimates);
        let domains = result.iter().map(|s| s.domain).collect::<Vec<_>>();
        assert_eq!(domains, vec![Domain::Activity, Domain::Accommodation]);
        assert!((result[0].potential_reduction - 31.2 * 0.6).abs() < 1e-12);
        assert!((result[1].potential_reduction - 37.4 * 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_three_transport_legs() {
        let estimates = ["train", "plane_domestic", "bus"]
            .iter()
            .map(|mode| estimate(Domain::Transport, mode, 462.0, 1).unwrap())
            .collect::<Vec<_>>();
        let result = suggest(&estimates);
        assert_eq!(result.len(), 2);
        assert!((result[0].current_emissions - 117.81).abs() < 1e-9);
        assert!((result[0].potential_reduction - 82.467).abs() < 1e-9);
        assert!((result[1].current_emissions - 41.118).abs() < 1e-9);
        assert!((result[1].potential_reduction - 28.7826).abs() < 1e-9);
    }
}
