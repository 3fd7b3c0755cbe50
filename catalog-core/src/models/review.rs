use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, PickFirst, serde_as};

/// The client-supplied content of a review.
///
/// This is everything a review holds except its identifier, which the store
/// assigns on insert. Unknown fields in an incoming document are ignored.
///
/// Numeric and boolean fields also accept their string form, so
/// `"dealership": "23"` reads as dealership 23. They are always written back
/// as plain JSON numbers and booleans.
#[serde_as]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewDraft {
    /// The reviewer's name
    pub name: String,
    /// The id of the reviewed dealership. This is not checked against the
    /// dealership collection.
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    #[cfg_attr(feature = "schemars", schemars(with = "i64"))]
    pub dealership: i64,
    /// Free-text review body
    pub review: String,
    /// Whether the reviewer bought a car from the dealership
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    #[cfg_attr(feature = "schemars", schemars(with = "bool"))]
    pub purchase: bool,
    /// Date of purchase, as supplied by the client
    pub purchase_date: String,
    /// Make of the purchased car
    pub car_make: String,
    /// Model of the purchased car
    pub car_model: String,
    /// Model year of the purchased car
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    #[cfg_attr(feature = "schemars", schemars(with = "i64"))]
    pub car_year: i64,
}

/// A stored review document.
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    /// Sequential identifier of the review
    pub id: i64,
    /// The review content
    #[serde(flatten)]
    pub data: ReviewDraft,
}
