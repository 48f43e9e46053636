//! Data Transfer Objects for the formrelay HTTP surface.

pub mod json;
pub mod response;

pub use json::ApiJson;
pub use response::*;
