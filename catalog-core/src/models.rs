mod dealership;
mod review;

pub use dealership::Dealership;
pub use review::{Review, ReviewDraft};
