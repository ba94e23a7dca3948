//! Data access layer.
//!
//! Services depend on the store traits in [`traits`], never on a pool or a
//! global client; the Postgres implementations here are injected at
//! startup, and tests substitute in-memory fakes behind the same traits.

pub mod businesses;
pub mod drop_list;
pub mod reviews;
pub mod traits;
pub mod users;

pub use businesses::PostgresBusinessStore;
pub use drop_list::PostgresDropListStore;
pub use reviews::PostgresReviewStore;
pub use traits::{BusinessStore, DropListStore, ReviewStore, UserStore};
pub use users::PostgresUserStore;
