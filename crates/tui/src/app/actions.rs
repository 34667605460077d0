use super::*;

const PAGE_SIZE: usize = 10;

impl App {
    pub fn set_credential(&mut self, value: impl Into<String>) {
        self.input.set(value);
    }

    pub fn toggle_theme(&mut self) {
        self.dark_mode = !self.dark_mode;
        tracing::debug!(dark_mode = self.dark_mode, "Theme toggled");
    }

    pub(super) fn select_next_field(&mut self, step: usize) {
        if self.fields.is_empty() {
            return;
        }
        let last = self.fields.len() - 1;
        let next = match self.table_state.selected() {
            Some(i) => i.saturating_add(step).min(last),
            None => 0,
        };
        self.table_state.select(Some(next));
    }

    pub(super) fn select_previous_field(&mut self, step: usize) {
        if self.fields.is_empty() {
            return;
        }
        let previous = match self.table_state.selected() {
            Some(i) => i.saturating_sub(step),
            None => 0,
        };
        self.table_state.select(Some(previous));
    }

    pub(super) fn page_down(&mut self) {
        self.select_next_field(PAGE_SIZE);
    }

    pub(super) fn page_up(&mut self) {
        self.select_previous_field(PAGE_SIZE);
    }
}
