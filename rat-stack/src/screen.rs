//! The `Screen` trait plus the event and action types screens exchange with
//! the navigation stack.

use crate::application::Context;
use crate::route::Params;

/// Event type for screen interactions.
#[derive(Debug, Clone)]
pub enum Event {
    Key(crossterm::event::KeyEvent),
    Mouse(crossterm::event::MouseEvent),
    Resize(u16, u16),
    FocusGained,
    FocusLost,
    Paste(String),
}

/// Navigation intent a screen can return after handling an event.
///
/// Actions are applied to the stack the screen lives on by the dispatch
/// layer; a screen never mutates history directly.
#[derive(Debug)]
pub enum Action {
    /// Return to the nearest existing history entry for this screen
    /// (merging params into it), or push a new entry if there is none.
    Navigate(String, Params),
    /// Append a new history entry unconditionally, duplicates included.
    Push(String, Params),
    /// Pop the current entry. Defined no-op at the root.
    Back,
    /// Discard every entry above the first one.
    PopToTop,
    Quit,
    Noop,
}

impl Action {
    /// `Navigate` without params.
    pub fn navigate(name: impl Into<String>) -> Self {
        Action::Navigate(name.into(), Params::new())
    }

    /// `Push` without params.
    pub fn push(name: impl Into<String>) -> Self {
        Action::Push(name.into(), Params::new())
    }
}

/// A registered, named UI unit.
///
/// The stack never inspects a screen beyond dispatching these calls. The
/// params handed to each call are exactly those of the screen's own route,
/// set by the most recent transition into it; sibling routes see nothing.
pub trait Screen: Send {
    /// Called each time this screen becomes the current route.
    fn on_enter(&mut self, params: &Params, cx: &mut Context) {
        let _ = (params, cx);
    }

    /// Called when this screen stops being the current route.
    fn on_exit(&mut self, cx: &mut Context) {
        let _ = cx;
    }

    /// Render into the area carried by `cx`.
    fn render(&mut self, frame: &mut ratatui::Frame, params: &Params, cx: &mut Context);

    /// Handle an event, returning an optional action.
    fn handle_event(&mut self, event: Event, params: &Params, cx: &mut Context) -> Option<Action> {
        let _ = (event, params, cx);
        None
    }
}
