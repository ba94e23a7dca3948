//! Domain model types.

pub mod business;
pub mod drop_list;
pub mod review;
pub mod user;

pub use business::{
    derive_status, display_name, headcount_range, AddressDto, Business, BusinessDto,
    BusinessStatus, GeoDto, HeadcountRange, NewBusiness,
};
pub use drop_list::{
    DropListItem, DropListItemChanges, DropMethod, DropState, NewDropListItem,
};
pub use review::{
    InterviewReview, NewReview, Review, ReviewAuthor, ReviewChanges, ReviewDto, ReviewKind,
    ReviewTag, WorkReview,
};
pub use user::User;
