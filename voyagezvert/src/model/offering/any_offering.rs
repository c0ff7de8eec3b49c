use super::{Activity, Hotel, Offering, OfferingKind, TransportRoute};
use serde::{Deserialize, Serialize};

/// any kind of offering, tagged by kind. used where routes, hotels and
/// activities are mixed, such as an itinerary.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum AnyOffering {
    Route(TransportRoute),
    Hotel(Hotel),
    Activity(Activity),
}

impl AnyOffering {
    fn inner(&self) -> &dyn Offering {
        match self {
            AnyOffering::Route(r) => r,
            AnyOffering::Hotel(h) => h,
            AnyOffering::Activity(a) => a,
        }
    }
}

impl Offering for AnyOffering {
    fn id(&self) -> &str {
        self.inner().id()
    }

    fn kind(&self) -> OfferingKind {
        self.inner().kind()
    }

    fn price(&self) -> f64 {
        self.inner().price()
    }

    fn eco_score(&self) -> f64 {
        self.inner().eco_score()
    }

    fn carbon_footprint(&self) -> f64 {
        self.inner().carbon_footprint()
    }

    fn duration_minutes(&self) -> Option<f64> {
        self.inner().duration_minutes()
    }

    fn rating(&self) -> Option<f64> {
        self.inner().rating()
    }
}

impl From<TransportRoute> for AnyOffering {
    fn from(value: TransportRoute) -> Self {
        AnyOffering::Route(value)
    }
}

impl From<Hotel> for AnyOffering {
    fn from(value: Hotel) -> Self {
        AnyOffering::Hotel(value)
    }
}

impl From<Activity> for AnyOffering {
    fn from(value: Activity) -> Self {
        AnyOffering::Activity(value)
    }
}
