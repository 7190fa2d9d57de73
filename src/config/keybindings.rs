//! Keybinding configuration for the TUI.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::Deserialize;

use crate::tui::event::Action;

/// Configuration for all keybindings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct KeybindingConfig {
    pub quit: Vec<String>,
    pub move_up: Vec<String>,
    pub move_down: Vec<String>,
    pub page_up: Vec<String>,
    pub page_down: Vec<String>,
    pub top: Vec<String>,
    pub bottom: Vec<String>,
    pub select: Vec<String>,
    pub back: Vec<String>,
    pub refresh: Vec<String>,
    pub filter_author: Vec<String>,
    pub help: Vec<String>,
}

impl Default for KeybindingConfig {
    fn default() -> Self {
        Self {
            quit: vec!["q".to_string(), "Ctrl+c".to_string()],
            move_up: vec!["k".to_string(), "Up".to_string()],
            move_down: vec!["j".to_string(), "Down".to_string()],
            page_up: vec!["PageUp".to_string(), "b".to_string()],
            page_down: vec!["PageDown".to_string(), "Space".to_string()],
            top: vec!["g".to_string(), "Home".to_string()],
            bottom: vec!["G".to_string(), "End".to_string()],
            select: vec!["Enter".to_string()],
            back: vec!["Esc".to_string(), "Backspace".to_string()],
            refresh: vec!["R".to_string()],
            filter_author: vec!["a".to_string()],
            help: vec!["?".to_string()],
        }
    }
}

impl KeybindingConfig {
    fn bindings(&self) -> [(&[String], Action); 12] {
        [
            (self.quit.as_slice(), Action::Quit),
            (self.move_up.as_slice(), Action::MoveUp),
            (self.move_down.as_slice(), Action::MoveDown),
            (self.page_up.as_slice(), Action::PageUp),
            (self.page_down.as_slice(), Action::PageDown),
            (self.top.as_slice(), Action::Top),
            (self.bottom.as_slice(), Action::Bottom),
            (self.select.as_slice(), Action::Select),
            (self.back.as_slice(), Action::Back),
            (self.refresh.as_slice(), Action::Refresh),
            (self.filter_author.as_slice(), Action::FilterAuthor),
            (self.help.as_slice(), Action::Help),
        ]
    }

    /// Get the action for a key event. First matching binding wins.
    pub fn get_action(&self, key: &KeyEvent) -> Action {
        self.bindings()
            .into_iter()
            .find(|(keys, _)| matches_key(key, keys))
            .map(|(_, action)| action)
            .unwrap_or(Action::None)
    }

    /// Display label of the first key bound to `action`, for footers and help.
    pub fn label(&self, action: Action) -> String {
        self.bindings()
            .into_iter()
            .find(|(_, a)| *a == action)
            .and_then(|(keys, _)| keys.first())
            .map(|k| k.to_lowercase())
            .unwrap_or_else(|| "-".to_string())
    }

    /// One-line key hints shown under every screen.
    pub fn footer_hints(&self) -> String {
        format!(
            "{}: quit  •  {}: open  •  {}: back  •  {}: author  •  {}: help",
            self.label(Action::Quit),
            self.label(Action::Select),
            self.label(Action::Back),
            self.label(Action::FilterAuthor),
            self.label(Action::Help),
        )
    }

    /// (keys, description) rows for the help screen.
    pub fn help_rows(&self) -> Vec<(String, &'static str)> {
        self.bindings()
            .into_iter()
            .map(|(keys, action)| (keys.join(", "), describe(action)))
            .collect()
    }
}

fn describe(action: Action) -> &'static str {
    match action {
        Action::Quit => "Quit",
        Action::MoveUp => "Previous article / scroll up",
        Action::MoveDown => "Next article / scroll down",
        Action::PageUp => "Page up",
        Action::PageDown => "Page down",
        Action::Top => "Jump to top",
        Action::Bottom => "Jump to bottom",
        Action::Select => "Open article / re-flow content",
        Action::Back => "Back to list",
        Action::Refresh => "Reload articles",
        Action::FilterAuthor => "Toggle filter by selected author",
        Action::Help => "Toggle this help",
        Action::ScrollUp | Action::ScrollDown | Action::None => "",
    }
}

fn matches_key(key: &KeyEvent, bindings: &[String]) -> bool {
    bindings.iter().any(|binding| {
        parse_key_string(binding)
            .map(|parsed| parsed.matches(key))
            .unwrap_or(false)
    })
}

/// A key plus the modifiers that must be held with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    /// Shift is ignored unless the binding asks for it, since terminals
    /// report `G` and `?` with or without it.
    pub fn matches(&self, key: &KeyEvent) -> bool {
        self.code == key.code
            && (self.modifiers == key.modifiers
                || self.modifiers == (key.modifiers - KeyModifiers::SHIFT))
    }
}

/// Parses strings such as `j`, `G`, `Enter`, `PageDown`, `F5` or `Ctrl+c`.
/// Modifier and key names are case-insensitive; single characters are not.
pub fn parse_key_string(s: &str) -> Result<KeyBinding, String> {
    let s = s.trim();
    let (prefix, key) = match s.rsplit_once('+') {
        // A lone "+" is the plus key.
        Some((prefix, key)) if !key.is_empty() => (Some(prefix), key),
        _ => (None, s),
    };

    let modifiers = prefix
        .into_iter()
        .flat_map(|p| p.split('+'))
        .try_fold(KeyModifiers::NONE, |acc, m| {
            parse_modifier(m).map(|flag| acc | flag)
        })?;

    Ok(KeyBinding {
        code: parse_key_code(key)?,
        modifiers,
    })
}

fn parse_modifier(s: &str) -> Result<KeyModifiers, String> {
    match s.to_lowercase().as_str() {
        "ctrl" | "control" => Ok(KeyModifiers::CONTROL),
        "shift" => Ok(KeyModifiers::SHIFT),
        "alt" => Ok(KeyModifiers::ALT),
        _ => Err(format!("Unknown modifier: {}", s)),
    }
}

fn parse_key_code(s: &str) -> Result<KeyCode, String> {
    let mut chars = s.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Ok(KeyCode::Char(c));
    }

    let lower = s.to_lowercase();
    if let Some(n) = lower.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
        if (1..=12).contains(&n) {
            return Ok(KeyCode::F(n));
        }
    }

    let code = match lower.as_str() {
        "enter" | "return" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "backspace" | "bs" => KeyCode::Backspace,
        "delete" | "del" => KeyCode::Delete,
        "tab" => KeyCode::Tab,
        "backtab" => KeyCode::BackTab,
        "space" => KeyCode::Char(' '),
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" | "pgup" => KeyCode::PageUp,
        "pagedown" | "pgdn" => KeyCode::PageDown,
        _ => return Err(format!("Unknown key: {}", s)),
    };
    Ok(code)
}
