use super::Domain;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum CarbonError {
    #[error("no emission factor for category '{category}' in domain '{domain}'")]
    UnknownCategory { domain: Domain, category: String },
    #[error("cannot score {domain} emissions over a zero quantity")]
    DivisionByZero { domain: Domain },
    #[error("no eco score baseline exists for domain '{0}'")]
    MissingBaseline(Domain),
    #[error("unknown emission domain '{0}'")]
    UnknownDomain(String),
    #[error("failure reading emission factor configuration: {0}")]
    ConfigurationError(String),
}
