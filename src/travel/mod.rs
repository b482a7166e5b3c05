//! Travel requests: public intake, admin review.

pub mod api;
pub mod store;

pub use api::TravelState;
pub use store::TravelRequestStore;
