use super::*;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, Wrap};

const NO_FIELDS_MESSAGE: &str = "No custom fields found. Enter a valid API key to fetch data.";
const API_KEY_PLACEHOLDER: &str = "Enter your API key";
const COLUMN_SPACING: u16 = 1;

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let theme = self.theme();

        frame.render_widget(
            Block::default().style(Style::default().bg(theme.background).fg(theme.foreground)),
            area,
        );

        self.layout
            .calculate_layout(area, !self.error_message.is_empty());

        let panels = self.layout.get_panels().to_vec();

        for panel in panels {
            match panel.panel_type {
                PanelType::Topbar => self.render_topbar(frame, panel.rect, &theme),
                PanelType::ThemeToggle => self.render_theme_toggle(frame, panel.rect, &theme),
                PanelType::ApiKeyInput => self.render_api_key_input(frame, panel.rect, &theme),
                PanelType::FetchButton => self.render_fetch_button(frame, panel.rect, &theme),
                PanelType::ErrorBar => self.render_error(frame, panel.rect, &theme),
                PanelType::Fields => self.render_fields(frame, panel.rect, &theme),
                PanelType::StatusBar => self.render_status_bar(frame, panel.rect, &theme),
            }
        }

        if self.show_help {
            self.render_help(frame, area, &theme);
        }
    }

    fn render_topbar(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let title = Paragraph::new(Line::from(Span::styled(
            " GetResponse Custom Fields",
            Style::default().fg(theme.foreground).add_modifier(Modifier::BOLD),
        )));
        frame.render_widget(title, area);
    }

    fn render_theme_toggle(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let toggle = Paragraph::new(Theme::toggle_label(self.dark_mode))
            .style(Style::default().fg(theme.accent))
            .alignment(Alignment::Right);
        frame.render_widget(toggle, area);
    }

    fn render_api_key_input(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .title(" API key ");

        let content = if self.input.buffer.is_empty() {
            Line::from(Span::styled(
                API_KEY_PLACEHOLDER,
                Style::default().fg(theme.muted),
            ))
        } else {
            Line::from(self.displayed_credential())
        };

        let inner = block.inner(area);
        frame.render_widget(Paragraph::new(content).block(block), area);

        if !self.show_help && inner.width > 0 {
            let offset = (self.input.cursor() as u16).min(inner.width.saturating_sub(1));
            frame.set_cursor_position((inner.x + offset, inner.y));
        }
    }

    fn render_fetch_button(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let button = Paragraph::new("Fetch Custom Fields")
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .bg(theme.accent)
                    .fg(theme.on_accent)
                    .add_modifier(Modifier::BOLD),
            )
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(button, area);
    }

    fn render_error(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let error = Paragraph::new(format!(" {}", self.error_message))
            .style(Style::default().fg(theme.error))
            .wrap(Wrap { trim: false });
        frame.render_widget(error, area);
    }

    fn render_fields(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        if self.fields.is_empty() {
            let placeholder = Paragraph::new(format!("\n {}", NO_FIELDS_MESSAGE))
                .style(Style::default().fg(theme.muted))
                .wrap(Wrap { trim: false });
            frame.render_widget(placeholder, area);
            return;
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .title(format!(" Custom Fields ({}) ", self.fields.len()));
        let spacing = COLUMN_SPACING * (CUSTOM_FIELD_COLUMNS.len() as u16 - 1);
        let available = block.inner(area).width.saturating_sub(spacing);

        let cells: Vec<[&str; 5]> = self.fields.iter().map(CustomField::row_cells).collect();
        let widths = column_widths(&cells, available);

        let header = wrapped_row(&CUSTOM_FIELD_COLUMNS, &widths).style(
            Style::default()
                .bg(theme.header_bg)
                .add_modifier(Modifier::BOLD),
        );
        let rows = cells.iter().map(|row| wrapped_row(row, &widths));

        let table = Table::new(rows, widths.map(Constraint::Length))
            .header(header)
            .column_spacing(COLUMN_SPACING)
            .block(block)
            .row_highlight_style(Style::default().bg(theme.highlight_bg));

        frame.render_stateful_widget(table, area, &mut self.table_state);
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(1), Constraint::Length(28)])
            .split(area);

        frame.render_widget(
            Paragraph::new(self.keybinds.status_hint()).style(Style::default().fg(theme.muted)),
            chunks[0],
        );

        if let Some(at) = self.last_fetched_at {
            frame.render_widget(
                Paragraph::new(format!("Last fetch {} ", at.format("%H:%M:%S")))
                    .style(Style::default().fg(theme.muted))
                    .alignment(Alignment::Right),
                chunks[1],
            );
        }
    }

    fn render_help(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let help_text = self.keybinds.help_text();
        let popup_area = self.centered_rect(60, 70, area);

        frame.render_widget(Clear, popup_area);
        frame.render_widget(
            Paragraph::new(help_text)
                .style(Style::default().bg(theme.background).fg(theme.foreground))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(" Help - Press F1 to close "),
                ),
            popup_area,
        );
    }

    fn displayed_credential(&self) -> String {
        if self.config.ui.mask_api_key {
            "*".repeat(self.input.buffer.chars().count())
        } else {
            self.input.buffer.clone()
        }
    }

    fn centered_rect(&self, percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }
}

fn display_width(value: &str) -> u16 {
    u16::try_from(Span::raw(value).width()).unwrap_or(u16::MAX)
}

/// Column widths sized to the widest header or cell. When the natural widths
/// do not fit, narrow columns keep their width and the rest share what is left.
pub(super) fn column_widths(rows: &[[&str; 5]], available: u16) -> [u16; 5] {
    let mut natural = CUSTOM_FIELD_COLUMNS.map(display_width);
    for row in rows {
        for (width, value) in natural.iter_mut().zip(row) {
            *width = (*width).max(display_width(value));
        }
    }

    if natural.iter().map(|w| u32::from(*w)).sum::<u32>() <= u32::from(available) {
        return natural;
    }

    let mut order: Vec<usize> = (0..natural.len()).collect();
    order.sort_by_key(|&i| natural[i]);

    let mut widths = [0; 5];
    let mut remaining = available;
    for (done, &i) in order.iter().enumerate() {
        let share = remaining / (order.len() - done) as u16;
        widths[i] = natural[i].min(share).max(1);
        remaining = remaining.saturating_sub(widths[i]);
    }
    widths
}

/// Hard-wraps `value` into lines no wider than `width`. Every character is
/// kept, so joining the lines gives back the original value.
pub(super) fn wrap_cell(value: &str, width: u16) -> Vec<String> {
    let width = usize::from(width.max(1));
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_width = 0;
    let mut buf = [0u8; 4];

    for c in value.chars() {
        let char_width = Span::raw(&*c.encode_utf8(&mut buf)).width();
        if line_width + char_width > width && !line.is_empty() {
            lines.push(std::mem::take(&mut line));
            line_width = 0;
        }
        line.push(c);
        line_width += char_width;
    }

    if !line.is_empty() || lines.is_empty() {
        lines.push(line);
    }
    lines
}

fn wrapped_row<'a>(values: &[&str; 5], widths: &[u16; 5]) -> Row<'a> {
    let wrapped: Vec<Vec<String>> = values
        .iter()
        .zip(widths)
        .map(|(value, width)| wrap_cell(value, *width))
        .collect();
    let height = wrapped.iter().map(Vec::len).max().unwrap_or(1);

    Row::new(wrapped.into_iter().map(|lines| {
        Cell::from(Text::from(lines.into_iter().map(Line::from).collect::<Vec<_>>()))
    }))
    .height(u16::try_from(height).unwrap_or(u16::MAX))
}
