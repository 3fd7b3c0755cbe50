use crate::models::Dealership;

/// Repository interface for the dealership collection.
///
/// Dealerships are read-only outside of seeding.
pub trait DealershipRepository: super::Repository {
    /// Fetch every dealership, in insertion order.
    fn list_dealerships(
        &self,
    ) -> impl Future<Output = Result<Vec<Dealership>, Self::Error>> + Send;

    /// Fetch the dealerships whose `state` is exactly `state`.
    fn query_dealerships_by_state(
        &self,
        state: &str,
    ) -> impl Future<Output = Result<Vec<Dealership>, Self::Error>> + Send;

    /// Get the first dealership with the given id.
    ///
    /// # Returns
    ///
    /// Ok(None) if no dealership has this id.
    fn get_dealership(
        &self,
        dealership_id: i64,
    ) -> impl Future<Output = Result<Option<Dealership>, Self::Error>> + Send;

    /// Insert dealerships as-is.
    fn insert_dealerships(
        &self,
        dealerships: Vec<Dealership>,
    ) -> impl Future<Output = Result<usize, Self::Error>> + Send;

    /// Remove every dealership.
    fn delete_dealerships(&self) -> impl Future<Output = Result<usize, Self::Error>> + Send;
}
