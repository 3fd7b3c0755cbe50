//! REST API endpoints for reviews.
//!
//! Reviews can be listed, filtered by the dealership they refer to, and
//! created one at a time. The store assigns the id of a created review.

use crate::{
    ApiApplication,
    error::{ApiError, failure},
};
use aide::{
    OperationInput,
    axum::{
        ApiRouter,
        routing::{get, post},
    },
    generate::GenContext,
    openapi::Operation,
};
use axum::{
    Json,
    body::Bytes,
    extract::{FromRequest, Path, Request, State},
    http::StatusCode,
};
use catalog_core::{
    models::{Review, ReviewDraft},
    ports::{Application as _, ReviewRepository as _},
};
use tracing::{Level, event};

/// Path parameter for dealership-specific review queries.
#[derive(serde::Deserialize, schemars::JsonSchema)]
struct DealerId {
    /// The dealership id, matched against the textual form of each review's
    /// `dealership` field
    id: String,
}

/// Creates a router with review-related endpoints.
pub fn router<T: ApiApplication>() -> ApiRouter<T> {
    ApiRouter::new()
        .api_route_with("/fetchReviews", get(fetch_reviews::<T>), |route| {
            route.tag("reviews")
        })
        .api_route_with(
            "/fetchReviews/dealer/{id}",
            get(fetch_dealer_reviews::<T>),
            |route| route.tag("reviews"),
        )
        .api_route_with("/insert_review", post(insert_review::<T>), |route| {
            route.tag("reviews")
        })
}

/// Retrieve every review.
///
/// # Returns
///
/// - `200 OK`: All reviews, possibly none
/// - `500 Internal Server Error`: Database query failed
async fn fetch_reviews<T: ApiApplication>(
    State(app): State<T>,
) -> Result<Json<Vec<Review>>, ApiError> {
    app.database().list_reviews().await.map(Json).map_err(|err| {
        event!(Level::ERROR, err = err.to_string());
        failure(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Error fetching documents",
        )
    })
}

/// Retrieve the reviews of one dealership.
///
/// # Returns
///
/// - `200 OK`: The matching reviews, possibly none
/// - `500 Internal Server Error`: Database query failed
async fn fetch_dealer_reviews<T: ApiApplication>(
    State(app): State<T>,
    Path(DealerId { id }): Path<DealerId>,
) -> Result<Json<Vec<Review>>, ApiError> {
    app.database()
        .query_reviews_by_dealership(&id)
        .await
        .map(Json)
        .map_err(|err| {
            event!(Level::ERROR, err = err.to_string(), dealership = %id);
            failure(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error fetching documents",
            )
        })
}

/// Create a new review.
///
/// # Request Body
///
/// A JSON review without an id, sent with any content type. Any `id` in the
/// body is ignored; the review gets the next sequential id.
///
/// # Returns
///
/// - `200 OK`: The stored review, including its id
/// - `500 Internal Server Error`: Malformed body or database operation failed
async fn insert_review<T: ApiApplication>(
    State(app): State<T>,
    NewReview(draft): NewReview,
) -> Result<Json<Review>, ApiError> {
    app.database()
        .create_review(draft)
        .await
        .map(Json)
        .map_err(|err| {
            event!(Level::ERROR, err = err.to_string());
            failure(StatusCode::INTERNAL_SERVER_ERROR, INSERT_FAILED)
        })
}

const INSERT_FAILED: &str = "Error inserting review";

/// Extracts a review from the raw request body.
///
/// Unlike `Json`, this ignores the content type, and a body that does not
/// hold a valid review is reported like any other insertion failure.
struct NewReview(ReviewDraft);

impl<S: Send + Sync> FromRequest<S> for NewReview {
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state).await.map_err(|err| {
            event!(Level::ERROR, err = err.to_string());
            failure(StatusCode::INTERNAL_SERVER_ERROR, INSERT_FAILED)
        })?;

        serde_json::from_slice(&body).map(Self).map_err(|err| {
            event!(Level::ERROR, err = err.to_string());
            failure(StatusCode::INTERNAL_SERVER_ERROR, INSERT_FAILED)
        })
    }
}

impl OperationInput for NewReview {
    fn operation_input(ctx: &mut GenContext, operation: &mut Operation) {
        Json::<ReviewDraft>::operation_input(ctx, operation);
    }
}
