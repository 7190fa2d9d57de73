//! Screen router.
//!
//! Holds the registered screens by name plus a transition table keyed by
//! `(active screen, trigger)`. A dispatched event first moves the active
//! screen along a matching edge, then is delivered to whichever screen is
//! active afterwards. Missing edges mean "stay put".

use std::collections::HashMap;

use ratatui::text::Text;

use crate::app::{CorpusError, Result};
use crate::tui::event::{Effect, Event, Trigger};
use crate::tui::screen::Screen;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct Edge {
    screen: String,
    trigger: Trigger,
}

pub struct Navigator {
    screens: Option<HashMap<String, Box<dyn Screen>>>,
    transitions: Option<HashMap<Edge, String>>,
    active: String,
}

impl Navigator {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            screens: Some(HashMap::new()),
            transitions: Some(HashMap::new()),
            active: initial.into(),
        }
    }

    /// A navigator whose tables have not been allocated. Every registration
    /// fails until [`allocate`](Self::allocate) is called.
    pub fn unallocated(initial: impl Into<String>) -> Self {
        Self {
            screens: None,
            transitions: None,
            active: initial.into(),
        }
    }

    pub fn allocate(&mut self) {
        self.screens.get_or_insert_with(HashMap::new);
        self.transitions.get_or_insert_with(HashMap::new);
    }

    /// Name of the screen events are currently routed to.
    pub fn active(&self) -> &str {
        &self.active
    }

    /// Adds or replaces `name`. The active screen is left alone.
    pub fn register_screen(&mut self, name: impl Into<String>, screen: Box<dyn Screen>) -> Result<()> {
        let screens = self
            .screens
            .as_mut()
            .ok_or(CorpusError::Configuration("screen table not allocated"))?;
        screens.insert(name.into(), screen);
        Ok(())
    }

    /// Adds the edge `from --trigger--> to`, replacing any edge with the same
    /// source and trigger.
    pub fn register_transition(
        &mut self,
        from: impl Into<String>,
        trigger: impl Into<Trigger>,
        to: impl Into<String>,
    ) -> Result<()> {
        let transitions = self
            .transitions
            .as_mut()
            .ok_or(CorpusError::Configuration("transition table not allocated"))?;
        transitions.insert(
            Edge {
                screen: from.into(),
                trigger: trigger.into(),
            },
            to.into(),
        );
        Ok(())
    }

    /// Runs `init` on every screen. Order is unspecified.
    pub fn initialize(&mut self) -> Result<Effect> {
        let screens = self
            .screens
            .as_mut()
            .ok_or(CorpusError::Configuration("screen table not allocated"))?;

        Ok(screens
            .values_mut()
            .fold(Effect::None, |effect, screen| effect.merge(screen.init())))
    }

    /// Follows the transition for `event` (if any), then hands the event to
    /// the now-active screen and returns its effect. A transition to an
    /// unregistered screen fails without moving.
    pub fn dispatch(&mut self, event: &Event) -> Result<Effect> {
        let transitions = self
            .transitions
            .as_ref()
            .ok_or(CorpusError::Configuration("transition table not allocated"))?;
        let screens = self
            .screens
            .as_mut()
            .ok_or(CorpusError::Configuration("screen table not allocated"))?;

        let edge = Edge {
            screen: self.active.clone(),
            trigger: event.trigger(),
        };
        let target = transitions.get(&edge).unwrap_or(&self.active);
        let screen = screens
            .get_mut(target)
            .ok_or_else(|| CorpusError::MissingScreen(target.clone()))?;

        if *target != self.active {
            tracing::debug!("Transition {} -> {} on {:?}", self.active, target, edge.trigger);
            self.active = target.clone();
        }
        Ok(screen.handle_event(event))
    }

    /// Delivers `event` to every screen, bypassing the transition table.
    /// Used for resizes so inactive screens keep their layout current.
    pub fn broadcast(&mut self, event: &Event) -> Result<Effect> {
        let screens = self
            .screens
            .as_mut()
            .ok_or(CorpusError::Configuration("screen table not allocated"))?;

        Ok(screens
            .values_mut()
            .fold(Effect::None, |effect, screen| {
                effect.merge(screen.handle_event(event))
            }))
    }

    pub fn render(&self, width: u16) -> Result<Text<'static>> {
        let screens = self
            .screens
            .as_ref()
            .ok_or(CorpusError::Configuration("screen table not allocated"))?;
        let screen = screens
            .get(&self.active)
            .ok_or_else(|| CorpusError::MissingScreen(self.active.clone()))?;
        Ok(screen.render(width))
    }

}
