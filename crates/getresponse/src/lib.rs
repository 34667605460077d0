pub mod api;
pub mod error;
pub mod types;

pub use api::{FieldSource, GetResponseApi, GETRESPONSE_API_BASE};
pub use error::{ApiError, ApiResult, FETCH_FAILED_MESSAGE, MISSING_API_KEY_MESSAGE};
pub use types::*;
