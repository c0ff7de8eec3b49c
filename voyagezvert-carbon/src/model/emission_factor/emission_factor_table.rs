use crate::model::{CarbonError, Domain, EmissionCategory};
use itertools::Itertools;
use std::collections::HashMap;
use std::sync::LazyLock;

static DEFAULT_TABLE: LazyLock<EmissionFactorTable> = LazyLock::new(EmissionFactorTable::default);

/// the built-in emission factor table, shared across all callers.
pub fn default_table() -> &'static EmissionFactorTable {
    &DEFAULT_TABLE
}

/// lookup from (domain, category) to an emission factor in kg CO2e per unit
/// of the domain. immutable once built.
#[derive(Clone, Debug, PartialEq)]
pub struct EmissionFactorTable {
    factors: HashMap<EmissionCategory, f64>,
}

impl Default for EmissionFactorTable {
    fn default() -> Self {
        let factors = EmissionCategory::all()
            .map(|c| (c, c.default_factor()))
            .collect();
        Self { factors }
    }
}

impl EmissionFactorTable {
    /// builds a table from explicit factors. factors must be finite and non-negative.
    pub fn new(factors: HashMap<EmissionCategory, f64>) -> Result<Self, CarbonError> {
        let invalid = factors
            .iter()
            .filter(|(_, f)| !f.is_finite() || **f < 0.0)
            .map(|(c, f)| format!("{c}={f}"))
            .sorted()
            .collect_vec();
        if !invalid.is_empty() {
            return Err(CarbonError::ConfigurationError(format!(
                "emission factors must be finite and non-negative, found: {}",
                invalid.join(", ")
            )));
        }
        Ok(Self { factors })
    }

    pub fn get(&self, category: &EmissionCategory) -> Option<f64> {
        self.factors.get(category).copied()
    }

    /// finds the factor for a category name within a domain. fails if the name is
    /// not a category of the domain, or if the table holds no factor for it.
    pub fn lookup(
        &self,
        domain: Domain,
        category: &str,
    ) -> Result<(EmissionCategory, f64), CarbonError> {
        let emission_category = EmissionCategory::parse(domain, category)?;
        let factor = self
            .get(&emission_category)
            .ok_or_else(|| CarbonError::UnknownCategory {
                domain,
                category: category.to_string(),
            })?;
        Ok((emission_category, factor))
    }

    pub fn len(&self) -> usize {
        self.factors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }

    /// categories in this table, in a stable order
    pub fn categories(&self) -> Vec<EmissionCategory> {
        self.factors.keys().copied().sorted().collect_vec()
    }
}
