//! Route definitions, one router per resource.

pub mod businesses;
pub mod droplist;
pub mod reviews;
pub mod users;
