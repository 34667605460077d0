use super::*;

pub struct App {
    pub should_quit: bool,
    pub config: Config,
    pub input: InputState,
    pub fields: Vec<CustomField>,
    pub error_message: String,
    pub dark_mode: bool,
    pub layout: LayoutState,
    pub keybinds: Keybinds,
    pub show_help: bool,
    pub table_state: TableState,
    pub field_source: Arc<dyn FieldSource>,
    pub next_request_id: u64,
    pub last_fetched_at: Option<DateTime<Local>>,
    pub app_async_tx: Option<mpsc::UnboundedSender<AppAsyncEvent>>,
    pub app_async_rx: Option<mpsc::UnboundedReceiver<AppAsyncEvent>>,
}

impl Default for App {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl App {
    pub fn new(config: Config) -> Self {
        let api = config.api.build_api().unwrap_or_else(|e| {
            tracing::warn!("{e}; using {}", gr_fields_getresponse::GETRESPONSE_API_BASE);
            GetResponseApi::new()
        });
        Self::with_field_source(config, Arc::new(api))
    }

    pub fn with_field_source(config: Config, field_source: Arc<dyn FieldSource>) -> Self {
        let (app_async_tx, app_async_rx) = mpsc::unbounded_channel();
        let dark_mode = config.ui.dark_mode;

        Self {
            should_quit: false,
            config,
            input: InputState::new(),
            fields: Vec::new(),
            error_message: String::new(),
            dark_mode,
            layout: LayoutState::default(),
            keybinds: Keybinds,
            show_help: false,
            table_state: TableState::default(),
            field_source,
            next_request_id: 1,
            last_fetched_at: None,
            app_async_tx: Some(app_async_tx),
            app_async_rx: Some(app_async_rx),
        }
    }

    pub fn credential(&self) -> &str {
        &self.input.buffer
    }

    pub fn theme(&self) -> Theme {
        Theme::for_mode(self.dark_mode)
    }
}
