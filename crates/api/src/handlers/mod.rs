//! HTTP handler functions, grouped by resource.

pub mod booking;
pub mod material;
pub mod request;
