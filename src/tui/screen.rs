use ratatui::text::Text;

use crate::tui::event::{Effect, Event};

/// A named unit of UI owned by the [`Navigator`](crate::tui::navigator::Navigator).
///
/// Screens never see each other. Everything a screen knows arrives through
/// `handle_event` or was handed to it at construction.
pub trait Screen {
    /// Called once before the first event. Screens that load data do it here.
    fn init(&mut self) -> Effect {
        Effect::None
    }

    fn handle_event(&mut self, event: &Event) -> Effect;

    /// Renders the whole screen for a terminal `width` columns wide.
    fn render(&self, width: u16) -> Text<'static>;
}

/// Flattens styled text into plain lines joined by `\n`.
pub fn to_plain(text: &Text<'_>) -> String {
    text.lines
        .iter()
        .map(|line| {
            line.spans
                .iter()
                .map(|span| span.content.as_ref())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
