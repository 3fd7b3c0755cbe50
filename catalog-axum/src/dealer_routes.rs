//! REST API endpoints for dealerships.
//!
//! Dealerships are read-only: they can be listed, filtered by state, or
//! looked up by id.

use crate::{
    ApiApplication,
    error::{ApiError, failure},
};
use aide::axum::{ApiRouter, routing::get};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use catalog_core::{
    models::Dealership,
    ports::{Application as _, DealershipRepository as _},
};
use tracing::{Level, event};

/// Path parameter for state-specific dealership queries.
#[derive(serde::Deserialize, schemars::JsonSchema)]
struct StateName {
    /// The exact state name, e.g. `Texas`
    state: String,
}

/// Path parameter for single-dealership lookups.
#[derive(serde::Deserialize, schemars::JsonSchema)]
struct DealerId {
    /// The dealership id. Leading digits are parsed as the id, so `15abc`
    /// looks up dealership 15 and `0x17` looks up dealership 23.
    id: String,
}

/// Creates a router with dealership-related endpoints.
pub fn router<T: ApiApplication>() -> ApiRouter<T> {
    ApiRouter::new()
        .api_route_with("/fetchDealers", get(fetch_dealers::<T>), |route| {
            route.tag("dealerships")
        })
        .api_route_with(
            "/fetchDealers/{state}",
            get(fetch_dealers_by_state::<T>),
            |route| route.tag("dealerships"),
        )
        .api_route_with("/fetchDealer/{id}", get(fetch_dealer::<T>), |route| {
            route.tag("dealerships")
        })
}

/// Retrieve every dealership.
///
/// # Returns
///
/// - `200 OK`: All dealerships, possibly none
/// - `500 Internal Server Error`: Database query failed
async fn fetch_dealers<T: ApiApplication>(
    State(app): State<T>,
) -> Result<Json<Vec<Dealership>>, ApiError> {
    app.database()
        .list_dealerships()
        .await
        .map(Json)
        .map_err(|err| {
            event!(Level::ERROR, err = err.to_string());
            failure(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error fetching dealerships",
            )
        })
}

/// Retrieve the dealerships in a state.
///
/// # Returns
///
/// - `200 OK`: The matching dealerships, possibly none
/// - `500 Internal Server Error`: Database query failed
async fn fetch_dealers_by_state<T: ApiApplication>(
    State(app): State<T>,
    Path(StateName { state }): Path<StateName>,
) -> Result<Json<Vec<Dealership>>, ApiError> {
    app.database()
        .query_dealerships_by_state(&state)
        .await
        .map(Json)
        .map_err(|err| {
            event!(Level::ERROR, err = err.to_string(), state = %state);
            failure(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error fetching dealerships by state",
            )
        })
}

/// Retrieve a single dealership.
///
/// # Returns
///
/// - `200 OK`: The dealership
/// - `404 Not Found`: No dealership has this id
/// - `500 Internal Server Error`: The id is not a number, or the database
///   query failed
async fn fetch_dealer<T: ApiApplication>(
    State(app): State<T>,
    Path(DealerId { id }): Path<DealerId>,
) -> Result<Json<Dealership>, ApiError> {
    let not_found = || failure(StatusCode::NOT_FOUND, "Dealer not found");
    let fetch_failed = || {
        failure(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Error fetching dealer by id",
        )
    };

    let dealer_id = match parse_dealer_id(&id) {
        DealerKey::Id(dealer_id) => dealer_id,
        // ids are 64-bit, so nothing can match
        DealerKey::OutOfRange => return Err(not_found()),
        DealerKey::NotANumber => {
            event!(Level::ERROR, segment = %id, "dealer id is not a number");
            return Err(fetch_failed());
        }
    };

    app.database()
        .get_dealership(dealer_id)
        .await
        .map_err(|err| {
            event!(Level::ERROR, err = err.to_string(), dealer_id);
            fetch_failed()
        })?
        .map(Json)
        .ok_or_else(not_found)
}

/// What the leading integer of a path segment turned out to be.
#[derive(Debug, PartialEq, Eq)]
enum DealerKey {
    Id(i64),
    /// A well-formed integer that does not fit in an `i64`
    OutOfRange,
    NotANumber,
}

/// Parse the leading integer of a path segment.
///
/// Leading whitespace and a sign are accepted. A `0x` or `0X` prefix switches
/// to hexadecimal. Parsing stops at the first character that is not a digit of
/// the radix, so `15abc` is 15 and `1.9` is 1.
fn parse_dealer_id(segment: &str) -> DealerKey {
    let trimmed = segment.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let (radix, digits) = match unsigned.get(..2) {
        Some("0x" | "0X") => (16, &unsigned[2..]),
        _ => (10, unsigned),
    };

    let end = digits
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(digits.len());
    if end == 0 {
        return DealerKey::NotANumber;
    }

    let magnitude = match i64::from_str_radix(&digits[..end], radix) {
        Ok(magnitude) => magnitude,
        Err(_) => return DealerKey::OutOfRange,
    };

    DealerKey::Id(if negative { -magnitude } else { magnitude })
}

#[cfg(test)]
mod tests {
    use super::{DealerKey, parse_dealer_id};
    use rstest::rstest;

    #[rstest]
    #[case("15", 15)]
    #[case("15abc", 15)]
    #[case("  7", 7)]
    #[case("-3", -3)]
    #[case("+12", 12)]
    #[case("007", 7)]
    #[case("1.9", 1)]
    #[case("0x10", 16)]
    #[case("0X1f", 31)]
    #[case("-0x10", -16)]
    #[case("0x1g", 1)]
    #[case("0b11", 0)]
    fn parses_leading_integer(#[case] segment: &str, #[case] expected: i64) {
        assert_eq!(parse_dealer_id(segment), DealerKey::Id(expected));
    }

    #[rstest]
    #[case("abc")]
    #[case("")]
    #[case("-")]
    #[case("0x")]
    #[case("0xg")]
    #[case(".5")]
    fn rejects_segments_without_digits(#[case] segment: &str) {
        assert_eq!(parse_dealer_id(segment), DealerKey::NotANumber);
    }

    #[rstest]
    #[case("99999999999999999999")]
    #[case("0x10000000000000000")]
    fn flags_ids_beyond_i64(#[case] segment: &str) {
        assert_eq!(parse_dealer_id(segment), DealerKey::OutOfRange);
    }
}
