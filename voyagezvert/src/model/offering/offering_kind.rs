use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, ValueEnum, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OfferingKind {
    Route,
    Hotel,
    Activity,
}

impl Display for OfferingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            OfferingKind::Route => "route",
            OfferingKind::Hotel => "hotel",
            OfferingKind::Activity => "activity",
        };
        write!(f, "{}", s)
    }
}
