//! API request and response types

pub mod error;
pub mod hadith;
pub mod query;

pub use error::{ApiError, ApiErrorDetail, ApiErrorResponse, ApiErrorType};
pub use hadith::{DataResponse, LocaleParams};
pub use query::Query;
