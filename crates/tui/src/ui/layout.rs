use ratatui::layout::{Constraint, Direction, Layout, Rect};

use super::panel::{Panel, PanelType};

const TOPBAR_HEIGHT: u16 = 1;
const INPUT_HEIGHT: u16 = 3;
const ERROR_HEIGHT: u16 = 1;
const STATUS_HEIGHT: u16 = 1;
const FETCH_BUTTON_WIDTH: u16 = 23;
const THEME_TOGGLE_WIDTH: u16 = 10;

#[derive(Default)]
pub struct LayoutState {
    cached_panels: Vec<Panel>,
}

impl LayoutState {
    /// The error row only takes space while there is a message to show.
    pub fn calculate_layout(&mut self, area: Rect, show_error: bool) -> &[Panel] {
        let main_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(TOPBAR_HEIGHT),
                Constraint::Length(INPUT_HEIGHT),
                Constraint::Length(if show_error { ERROR_HEIGHT } else { 0 }),
                Constraint::Min(1),
                Constraint::Length(STATUS_HEIGHT),
            ])
            .split(area);

        let topbar_layout = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(1), Constraint::Length(THEME_TOGGLE_WIDTH)])
            .split(main_layout[0]);

        let input_layout = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(10), Constraint::Length(FETCH_BUTTON_WIDTH)])
            .split(main_layout[1]);

        self.cached_panels = vec![
            Panel {
                panel_type: PanelType::Topbar,
                rect: topbar_layout[0],
            },
            Panel {
                panel_type: PanelType::ThemeToggle,
                rect: topbar_layout[1],
            },
            Panel {
                panel_type: PanelType::ApiKeyInput,
                rect: input_layout[0],
            },
            Panel {
                panel_type: PanelType::FetchButton,
                rect: input_layout[1],
            },
        ];

        if show_error {
            self.cached_panels.push(Panel {
                panel_type: PanelType::ErrorBar,
                rect: main_layout[2],
            });
        }

        self.cached_panels.push(Panel {
            panel_type: PanelType::Fields,
            rect: main_layout[3],
        });
        self.cached_panels.push(Panel {
            panel_type: PanelType::StatusBar,
            rect: main_layout[4],
        });

        &self.cached_panels
    }

    pub fn get_panels(&self) -> &[Panel] {
        &self.cached_panels
    }

    pub fn get_rect(&self, panel_type: PanelType) -> Option<Rect> {
        self.cached_panels
            .iter()
            .find(|p| p.panel_type == panel_type)
            .map(|p| p.rect)
    }

    pub fn panel_at(&self, x: u16, y: u16) -> Option<PanelType> {
        self.cached_panels
            .iter()
            .find(|p| p.contains(x, y))
            .map(|p| p.panel_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_row_only_exists_when_requested() {
        let mut layout = LayoutState::default();
        let area = Rect::new(0, 0, 80, 24);

        layout.calculate_layout(area, false);
        assert!(layout.get_rect(PanelType::ErrorBar).is_none());

        layout.calculate_layout(area, true);
        let error = layout.get_rect(PanelType::ErrorBar).expect("error bar");
        assert_eq!(error.height, ERROR_HEIGHT);
    }

    #[test]
    fn fetch_button_sits_right_of_input() {
        let mut layout = LayoutState::default();
        layout.calculate_layout(Rect::new(0, 0, 80, 24), false);

        let input = layout.get_rect(PanelType::ApiKeyInput).expect("input");
        let button = layout.get_rect(PanelType::FetchButton).expect("button");

        assert_eq!(input.y, button.y);
        assert_eq!(button.width, FETCH_BUTTON_WIDTH);
        assert_eq!(layout.panel_at(button.x + 1, button.y + 1), Some(PanelType::FetchButton));
        assert_eq!(layout.panel_at(79, 0), Some(PanelType::ThemeToggle));
    }

    #[test]
    fn fields_panel_takes_remaining_height() {
        let mut layout = LayoutState::default();
        layout.calculate_layout(Rect::new(0, 0, 80, 24), false);

        let fields = layout.get_rect(PanelType::Fields).expect("fields");
        assert_eq!(fields.height, 24 - TOPBAR_HEIGHT - INPUT_HEIGHT - STATUS_HEIGHT);
    }
}
