pub struct Keybinds;

impl Default for Keybinds {
    fn default() -> Self {
        Self
    }
}

impl Keybinds {
    pub fn help_text(&self) -> String {
        r#"Keyboard Shortcuts:

API key:
  Type / paste  Edit the key
  ← / →         Move cursor
  Home / End    Jump to start / end
  Ctrl + U      Clear the key
  Enter         Fetch custom fields

Results:
  ↑ / ↓         Select previous / next field
  PgUp / PgDn   Move one page

General:
  F1            Toggle this help
  Ctrl + T      Toggle dark / light theme
  Esc / Ctrl + Q  Quit

Mouse:
  Click [Fetch Custom Fields] to fetch
  Click the theme icon to toggle theme
  Scroll        Move through results
"#
        .to_string()
    }

    pub fn status_hint(&self) -> &'static str {
        " Enter fetch · Ctrl+T theme · F1 help · Ctrl+Q quit "
    }
}
