mod dealership;
mod review;

pub use dealership::DealershipRepository;
pub use review::ReviewRepository;

/// Base trait for a document store.
///
/// Ports in this crate extend this trait, so an adapter declares its error
/// type once and every collection operation reports failures with it.
pub trait Repository: Sized {
    /// The error returned by every store operation
    type Error: std::error::Error + Send + Sync + 'static;
}

/// The application as seen by the HTTP layer.
///
/// Handlers never reach for a global store connection; they receive the
/// application as state and ask it for the repository. This keeps the store
/// handle explicit and lets tests substitute their own repository.
pub trait Application {
    /// The document store backing the catalog
    type Repository: Repository;

    /// Get the document store
    fn database(&self) -> &Self::Repository;
}
