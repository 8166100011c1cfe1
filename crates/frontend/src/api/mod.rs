//! Client for the activities API

pub mod activities;
pub mod error;
pub mod transport;

pub use activities::{ApiClient, ReportFile};
pub use error::ApiError;
pub use transport::{ApiRequest, GlooTransport, HttpTransport, Method, RawResponse};
