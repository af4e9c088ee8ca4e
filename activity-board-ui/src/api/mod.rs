//! Activities API
//!
//! Browser-side calls to the activities service.

mod client;

pub use client::{fetch_activities, signup, unregister};
