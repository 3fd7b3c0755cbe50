use crate::models::{Review, ReviewDraft};

/// Repository interface for the review collection.
///
/// Reviews are bulk-loaded during seeding and otherwise only ever created one
/// at a time through [`create_review`](ReviewRepository::create_review). They
/// are never updated.
pub trait ReviewRepository: super::Repository {
    /// Fetch every review, in insertion order.
    fn list_reviews(&self) -> impl Future<Output = Result<Vec<Review>, Self::Error>> + Send;

    /// Fetch the reviews whose `dealership` field, rendered as text, equals
    /// `dealership`.
    ///
    /// The argument is compared verbatim: `"15"` matches a review of
    /// dealership 15, while `"015"` or `" 15"` match nothing.
    fn query_reviews_by_dealership(
        &self,
        dealership: &str,
    ) -> impl Future<Output = Result<Vec<Review>, Self::Error>> + Send;

    /// Store a new review, assigning it the next sequential id.
    ///
    /// The id is one more than the largest id in the collection, or 1 if the
    /// collection is empty. Implementations must compute and claim the id
    /// atomically, so that concurrent calls never produce duplicate ids.
    ///
    /// # Returns
    ///
    /// The stored review, including its assigned id.
    fn create_review(
        &self,
        draft: ReviewDraft,
    ) -> impl Future<Output = Result<Review, Self::Error>> + Send;

    /// Insert reviews as-is, keeping their ids.
    ///
    /// # Returns
    ///
    /// The number of inserted documents.
    fn insert_reviews(
        &self,
        reviews: Vec<Review>,
    ) -> impl Future<Output = Result<usize, Self::Error>> + Send;

    /// Remove every review.
    ///
    /// # Returns
    ///
    /// The number of removed documents.
    fn delete_reviews(&self) -> impl Future<Output = Result<usize, Self::Error>> + Send;
}
