//! Business logic layer.
//!
//! Services orchestrate operations by coordinating the injected stores and
//! applying the business rules; handlers stay thin.

pub mod businesses;
pub mod drop_list;
pub mod reviews;
pub mod seed;

pub use businesses::BusinessService;
pub use drop_list::DropListService;
pub use reviews::ReviewService;
pub use seed::{LicenceRecord, SeedReport, SeedService};
