use super::CarbonError;
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

/// the kind of trip leg an emission factor applies to. each domain measures
/// its legs in a different unit.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    /// kg CO2e per km per passenger
    Transport,
    /// kg CO2e per night per guest
    Accommodation,
    /// kg CO2e per hour per participant
    Activity,
    /// kg CO2e per meal
    Food,
}

impl Domain {
    pub const ALL: [Domain; 4] = [
        Domain::Transport,
        Domain::Accommodation,
        Domain::Activity,
        Domain::Food,
    ];

    /// unit of the magnitude of a leg in this domain
    pub fn unit(&self) -> &'static str {
        match self {
            Domain::Transport => "km",
            Domain::Accommodation => "nights",
            Domain::Activity => "hours",
            Domain::Food => "meals",
        }
    }

    /// emissions per unit of an "average" choice in this domain. an eco score of
    /// 5.5 corresponds to emitting exactly the baseline. food has no baseline.
    pub fn baseline(&self) -> Option<f64> {
        match self {
            Domain::Transport => Some(0.15),
            Domain::Accommodation => Some(10.0),
            Domain::Activity => Some(1.5),
            Domain::Food => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::Transport => "transport",
            Domain::Accommodation => "accommodation",
            Domain::Activity => "activity",
            Domain::Food => "food",
        }
    }
}

impl Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Domain {
    type Err = CarbonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        Domain::ALL
            .iter()
            .find(|d| d.as_str() == key)
            .copied()
            .ok_or(CarbonError::UnknownDomain(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_display() {
        for domain in Domain::ALL {
            let parsed: Domain = domain.to_string().parse().unwrap();
            assert_eq!(parsed, domain);
        }
        assert_eq!(" Transport ".parse::<Domain>().unwrap(), Domain::Transport);
    }

    #[test]
    fn test_parse_unknown_domain() {
        let result = "cruise".parse::<Domain>();
        assert_eq!(result, Err(CarbonError::UnknownDomain(String::from("cruise"))));
    }

    #[test]
    fn test_food_has_no_baseline() {
        assert_eq!(Domain::Food.baseline(), None);
        assert_eq!(Domain::Transport.baseline(), Some(0.15));
    }
}
