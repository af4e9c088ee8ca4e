//! UI Components
//!
//! Leptos components for the activity board page.

pub mod activity_list;
pub mod filters;
pub mod loading;
pub mod signup_form;
pub mod status_banner;

pub use activity_list::ActivityList;
pub use filters::FilterBar;
pub use loading::CardSkeleton;
pub use signup_form::SignupForm;
pub use status_banner::StatusBanner;
