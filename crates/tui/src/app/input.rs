use super::*;

impl App {
    pub fn handle_event(&mut self, event: Event) -> Result<bool> {
        match event {
            Event::Key(key) => self.handle_key_event(key),
            Event::Mouse(mouse) => self.handle_mouse_event(mouse),
            Event::Paste(text) => {
                self.input.insert_str(&text);
                Ok(false)
            }
            _ => Ok(false),
        }
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<bool> {
        if key.kind != KeyEventKind::Press {
            return Ok(false);
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        if ctrl && key.code == KeyCode::Char('q') {
            return Ok(true);
        }

        if key.code == KeyCode::F(1) {
            self.show_help = !self.show_help;
            return Ok(false);
        }

        if self.show_help {
            if key.code == KeyCode::Esc {
                self.show_help = false;
            }
            return Ok(false);
        }

        if ctrl {
            match key.code {
                KeyCode::Char('t') => self.toggle_theme(),
                KeyCode::Char('u') => self.set_credential(String::new()),
                // ^H from terminals whose Backspace key sends 0x08
                KeyCode::Char('h') => self.input.handle_backspace(),
                _ => {}
            }
            return Ok(false);
        }

        match key.code {
            KeyCode::Esc => return Ok(true),
            KeyCode::Enter => self.request_fields(),
            KeyCode::Char(c) => self.input.handle_char(c),
            KeyCode::Backspace => self.input.handle_backspace(),
            KeyCode::Delete => self.input.handle_delete(),
            KeyCode::Left => self.input.move_left(),
            KeyCode::Right => self.input.move_right(),
            KeyCode::Home => self.input.move_home(),
            KeyCode::End => self.input.move_end(),
            KeyCode::Down => self.select_next_field(1),
            KeyCode::Up => self.select_previous_field(1),
            KeyCode::PageDown => self.page_down(),
            KeyCode::PageUp => self.page_up(),
            _ => {}
        }

        Ok(false)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<bool> {
        if self.show_help {
            return Ok(false);
        }

        let target = self.layout.panel_at(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => match target {
                Some(PanelType::FetchButton) => self.request_fields(),
                Some(PanelType::ThemeToggle) => self.toggle_theme(),
                _ => {}
            },
            MouseEventKind::ScrollDown if target == Some(PanelType::Fields) => {
                self.select_next_field(1)
            }
            MouseEventKind::ScrollUp if target == Some(PanelType::Fields) => {
                self.select_previous_field(1)
            }
            _ => {}
        }

        Ok(false)
    }
}
