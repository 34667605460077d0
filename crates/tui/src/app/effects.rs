use super::*;

pub const API_KEY_ENV: &str = "GETRESPONSE_API_KEY";

impl App {
    /// Pre-fills the key from the environment. It is never written back.
    pub fn init(&mut self) {
        if let Ok(api_key) = std::env::var(API_KEY_ENV) {
            if !api_key.is_empty() {
                tracing::info!("API key pre-filled from {API_KEY_ENV}");
                self.set_credential(api_key);
            }
        }
    }

    /// Validates the key, clears the previous error and starts one fetch.
    ///
    /// Overlapping calls are not suppressed: every completion is applied in
    /// arrival order, so the last response to land wins.
    pub fn request_fields(&mut self) {
        let api_key = self.credential().to_string();
        if api_key.is_empty() {
            self.error_message = ApiError::MissingCredential.user_message().to_string();
            tracing::debug!("Fetch skipped: API key is empty");
            return;
        }

        self.clear_error();

        let request_id = self.next_request_id;
        self.next_request_id += 1;
        tracing::info!(request_id, "Fetching custom fields");

        let source = Arc::clone(&self.field_source);
        self.spawn_app_task(async move {
            let result = source.list_custom_fields(&api_key).await;
            AppAsyncEvent::CustomFieldsLoaded {
                request_id,
                api_key,
                result,
            }
        });
    }

    pub fn process_async_events(&mut self) {
        let mut async_events = Vec::new();
        if let Some(ref mut rx) = self.app_async_rx {
            while let Ok(event) = rx.try_recv() {
                async_events.push(event);
            }
        }

        for event in async_events {
            self.handle_async_event(event);
        }
    }

    pub fn handle_async_event(&mut self, event: AppAsyncEvent) {
        match event {
            AppAsyncEvent::CustomFieldsLoaded {
                request_id,
                api_key,
                result,
            } => match result {
                Ok(fields) => {
                    tracing::info!(request_id, count = fields.len(), "Custom fields loaded");
                    self.replace_fields(fields);
                    self.last_fetched_at = Some(Local::now());
                }
                Err(e) => {
                    tracing::debug!(request_id, "Custom field request failed");
                    self.report_error(&e, &api_key);
                }
            },
        }
    }

    fn replace_fields(&mut self, fields: Vec<CustomField>) {
        self.fields = fields;
        let selected = if self.fields.is_empty() { None } else { Some(0) };
        self.table_state.select(selected);
    }
}
