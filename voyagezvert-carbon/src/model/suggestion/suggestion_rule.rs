use crate::model::Domain;

/// when a leg of some domain deserves a suggestion, and what it says
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SuggestionRule {
    /// kg CO2e a leg must exceed (strictly) to trigger the rule
    pub threshold: f64,
    /// fraction of the leg's emissions the alternative avoids
    pub reduction_fraction: f64,
    pub advice: &'static str,
    pub eco_alternative: &'static str,
}

impl SuggestionRule {
    pub fn for_domain(domain: &Domain) -> Option<SuggestionRule> {
        match domain {
            Domain::Transport => Some(SuggestionRule {
                threshold: 20.0,
                reduction_fraction: 0.7,
                advice: "Considérez le train ou le covoiturage",
                eco_alternative: "Train ou bus",
            }),
            Domain::Accommodation => Some(SuggestionRule {
                threshold: 15.0,
                reduction_fraction: 0.4,
                advice: "Choisissez un hébergement éco-certifié",
                eco_alternative: "Hôtel éco-responsable ou éco-lodge",
            }),
            Domain::Activity => Some(SuggestionRule {
                threshold: 10.0,
                reduction_fraction: 0.6,
                advice: "Optez pour des activités nature et locales",
                eco_alternative: "Randonnée, vélo, ou activités culturelles locales",
            }),
            Domain::Food => None,
        }
    }

    pub fn applies_to(&self, mass: f64) -> bool {
        mass > self.threshold
    }
}
