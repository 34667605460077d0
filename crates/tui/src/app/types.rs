use gr_fields_getresponse::{ApiResult, CustomField};

/// Completions of background tasks, drained on the UI thread.
#[derive(Debug)]
pub enum AppAsyncEvent {
    CustomFieldsLoaded {
        request_id: u64,
        /// Key the request was sent with; used to redact it from log lines.
        api_key: String,
        result: ApiResult<Vec<CustomField>>,
    },
}
