use crossterm::event::{self, Event as TermEvent, KeyEvent, KeyEventKind, MouseEventKind};
use std::time::Duration;

use crate::app::Result;

/// Raw input as read from the terminal.
pub enum AppEvent {
    Key(KeyEvent),
    Scroll(Action),
    Resize(u16, u16),
    Tick,
}

pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        Self { tick_rate }
    }

    pub fn next(&self) -> Result<AppEvent> {
        if event::poll(self.tick_rate)? {
            match event::read()? {
                // Windows reports releases too.
                TermEvent::Key(key) if key.kind != KeyEventKind::Release => {
                    return Ok(AppEvent::Key(key));
                }
                TermEvent::Mouse(mouse) => match mouse.kind {
                    MouseEventKind::ScrollUp => return Ok(AppEvent::Scroll(Action::ScrollUp)),
                    MouseEventKind::ScrollDown => {
                        return Ok(AppEvent::Scroll(Action::ScrollDown))
                    }
                    _ => {}
                },
                TermEvent::Resize(width, height) => return Ok(AppEvent::Resize(width, height)),
                _ => {}
            }
        }
        Ok(AppEvent::Tick)
    }
}

/// Logical input, independent of the key that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Quit,
    MoveUp,
    MoveDown,
    PageUp,
    PageDown,
    Top,
    Bottom,
    Select,
    Back,
    Refresh,
    FilterAuthor,
    Help,
    ScrollUp,
    ScrollDown,
    None,
}

/// Event routed through the navigator to the active screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Action(Action),
    Resize { width: u16, height: u16 },
}

impl Event {
    pub fn trigger(&self) -> Trigger {
        match self {
            Event::Action(action) => Trigger::Action(*action),
            Event::Resize { .. } => Trigger::Resize,
        }
    }
}

impl From<Action> for Event {
    fn from(action: Action) -> Self {
        Event::Action(action)
    }
}

/// Discriminant of an [`Event`], used as half of a transition key.
/// Resize payloads are dropped so every resize hits the same edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
    Action(Action),
    Resize,
}

impl From<Action> for Trigger {
    fn from(action: Action) -> Self {
        Trigger::Action(action)
    }
}

/// Side effect requested by a screen after handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Effect {
    #[default]
    None,
    Quit,
}

impl Effect {
    /// Combine effects from several screens; quitting wins.
    pub fn merge(self, other: Effect) -> Effect {
        if self == Effect::Quit || other == Effect::Quit {
            Effect::Quit
        } else {
            Effect::None
        }
    }
}
