pub mod client;
pub mod error;

pub use client::{LogApiClient, LogQuery};
pub use error::{LogApiError, LogApiResult};
