use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};

use crate::config::{ColorConfig, KeybindingConfig};
use crate::text;
use crate::tui::event::{Action, Effect, Event};
use crate::tui::screen::Screen;

/// Key reference, reached from the article list.
pub struct HelpScreen {
    rows: Vec<(String, &'static str)>,
    close_hint: String,
    colors: ColorConfig,
}

impl HelpScreen {
    pub fn new(keybindings: &KeybindingConfig, colors: ColorConfig) -> Self {
        Self {
            rows: keybindings.help_rows(),
            close_hint: format!("{}: close help", keybindings.label(Action::Help)),
            colors,
        }
    }
}

impl Screen for HelpScreen {
    fn handle_event(&mut self, event: &Event) -> Effect {
        match event {
            Event::Action(Action::Quit) => Effect::Quit,
            _ => Effect::None,
        }
    }

    fn render(&self, width: u16) -> Text<'static> {
        let key_width = self
            .rows
            .iter()
            .map(|(keys, _)| text::display_width(keys))
            .max()
            .unwrap_or(0);
        let desc_width = (width as usize).saturating_sub(key_width + 4);

        let mut lines = vec![
            Line::from(Span::styled(
                " Keys ",
                Style::default()
                    .fg(self.colors.header_fg)
                    .bg(self.colors.header_bg)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        for (keys, description) in &self.rows {
            let pad = key_width - text::display_width(keys);
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {}{}", keys, " ".repeat(pad)),
                    Style::default().fg(self.colors.author),
                ),
                Span::raw(format!("  {}", text::truncate(description, desc_width))),
            ]));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!(" {}", self.close_hint),
            Style::default().fg(self.colors.footer),
        )));

        Text::from(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::screen::to_plain;

    #[test]
    fn test_lists_configured_keys() {
        let screen = HelpScreen::new(&KeybindingConfig::default(), ColorConfig::default());
        let plain = to_plain(&screen.render(80));

        assert!(plain.contains("q, Ctrl+c"));
        assert!(plain.contains("Toggle filter by selected author"));
        assert!(plain.ends_with(" ?: close help"));
    }

    #[test]
    fn test_descriptions_fit_narrow_terminals() {
        let screen = HelpScreen::new(&KeybindingConfig::default(), ColorConfig::default());
        for line in to_plain(&screen.render(30)).lines() {
            assert!(text::display_width(line) <= 30, "{:?}", line);
        }
    }

    #[test]
    fn test_only_quit_has_an_effect() {
        let mut screen = HelpScreen::new(&KeybindingConfig::default(), ColorConfig::default());
        assert_eq!(screen.handle_event(&Action::Quit.into()), Effect::Quit);
        assert_eq!(screen.handle_event(&Action::MoveDown.into()), Effect::None);
        assert_eq!(
            screen.handle_event(&Event::Resize {
                width: 10,
                height: 10
            }),
            Effect::None
        );
    }
}
