//! Navigation history and the screen registry.
//!
//! `NavigationStack` owns an ordered, never-empty sequence of [`Route`]s;
//! the last entry is the route currently shown. The registered screen set is
//! fixed at construction and a transition to an unregistered name fails
//! without touching the history.

use snafu::{ensure, OptionExt};

use crate::application::Context;
use crate::error::{DuplicateScreenSnafu, EmptyRegistrySnafu, Result, UnknownScreenSnafu};
use crate::route::{Params, Route};
use crate::screen::{Action, Event, Screen};

/// Ordered set of registered screens, fixed for the lifetime of the stack.
/// The first registered screen becomes the initial route.
#[derive(Default)]
pub struct ScreenRegistry {
    screens: Vec<(String, Box<dyn Screen>)>,
}

impl std::fmt::Debug for ScreenRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScreenRegistry")
            .field("screens", &self.screens.iter().map(|(n, _)| n).collect::<Vec<_>>())
            .finish()
    }
}

impl ScreenRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a screen under `name`. Names must be unique.
    pub fn register(mut self, name: impl Into<String>, screen: impl Screen + 'static) -> Result<Self> {
        let name = name.into();
        ensure!(!self.contains(&name), DuplicateScreenSnafu { name });
        self.screens.push((name, Box::new(screen)));
        Ok(self)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.screens.iter().any(|(n, _)| n == name)
    }

    fn get_mut(&mut self, name: &str) -> Option<&mut Box<dyn Screen>> {
        self.screens
            .iter_mut()
            .find(|(n, _)| n == name)
            .map(|(_, screen)| screen)
    }

    fn first_name(&self) -> Option<&str> {
        self.screens.first().map(|(n, _)| n.as_str())
    }
}

/// Ordered history of visited routes, seeded with one initial route.
#[derive(Debug)]
pub struct NavigationStack {
    registry: ScreenRegistry,
    routes: Vec<Route>,
}

impl NavigationStack {
    /// Build a stack over `registry`, seeded with its first screen as the
    /// initial route (no params).
    pub fn new(registry: ScreenRegistry) -> Result<Self> {
        let initial = registry
            .first_name()
            .map(str::to_owned)
            .context(EmptyRegistrySnafu)?;
        Ok(Self {
            routes: vec![Route::new(initial, Params::new())],
            registry,
        })
    }

    /// The route currently shown: the last entry of the history.
    pub fn current(&self) -> &Route {
        self.routes.last().expect("navigation stack is never empty")
    }

    /// Read-only view of the full history, oldest first.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn depth(&self) -> usize {
        self.routes.len()
    }

    pub fn can_go_back(&self) -> bool {
        self.routes.len() > 1
    }

    /// Truncate back to the nearest existing entry for `name` (merging
    /// `params` into it, incoming keys override), or push a new entry if
    /// the screen is nowhere in the history.
    pub fn navigate(&mut self, name: &str, params: Params) -> Result<()> {
        ensure!(self.registry.contains(name), UnknownScreenSnafu { name });
        self.navigate_resolved(name, params);
        Ok(())
    }

    fn navigate_resolved(&mut self, name: &str, params: Params) {
        // Nearest match from the top; earlier same-named entries stay shadowed.
        if let Some(at) = self.routes.iter().rposition(|route| route.name() == name) {
            self.routes.truncate(at + 1);
            self.routes[at].merge_params(params);
            tracing::debug!(screen = name, depth = self.routes.len(), "navigate: resumed existing route");
        } else {
            self.routes.push(Route::new(name, params));
            tracing::debug!(screen = name, depth = self.routes.len(), "navigate: pushed new route");
        }
    }

    /// Append a new route unconditionally; duplicate names are permitted.
    pub fn push(&mut self, name: &str, params: Params) -> Result<()> {
        ensure!(self.registry.contains(name), UnknownScreenSnafu { name });
        self.push_resolved(name, params);
        Ok(())
    }

    fn push_resolved(&mut self, name: &str, params: Params) {
        self.routes.push(Route::new(name, params));
        tracing::debug!(screen = name, depth = self.routes.len(), "push");
    }

    /// Pop the current route. The root route cannot be popped; returns
    /// whether a route was removed.
    pub fn go_back(&mut self) -> bool {
        if self.routes.len() > 1 {
            self.routes.pop();
            tracing::debug!(depth = self.routes.len(), "go_back");
            true
        } else {
            false
        }
    }

    /// Discard every route above the first entry, leaving its params
    /// untouched. No-op when already at the root.
    pub fn pop_to_top(&mut self) {
        if self.routes.len() > 1 {
            self.routes.truncate(1);
            tracing::debug!("pop_to_top");
        }
    }

    /// Render the current screen, handing it its own route's params.
    pub fn render(&mut self, frame: &mut ratatui::Frame, cx: &mut Context) {
        let route = self.routes.last().expect("navigation stack is never empty");
        if let Some(screen) = self.registry.get_mut(route.name()) {
            screen.render(frame, route.params(), cx);
        }
    }

    /// Let the current screen handle `event`, then apply whatever action it
    /// returned. `Quit` is the only action that bubbles out to the caller.
    pub fn handle_event(&mut self, event: Event, cx: &mut Context) -> Option<Action> {
        let action = {
            let route = self.routes.last().expect("navigation stack is never empty");
            let screen = self.registry.get_mut(route.name())?;
            screen.handle_event(event, route.params(), cx)?
        };
        self.apply(action, cx)
    }

    fn apply(&mut self, action: Action, cx: &mut Context) -> Option<Action> {
        match action {
            Action::Navigate(name, params) => {
                if self.registry.contains(&name) {
                    self.exit_current(cx);
                    self.navigate_resolved(&name, params);
                    self.enter_current(cx);
                } else {
                    tracing::warn!(screen = %name, "navigate rejected: unknown screen");
                }
                None
            }
            Action::Push(name, params) => {
                if self.registry.contains(&name) {
                    self.exit_current(cx);
                    self.push_resolved(&name, params);
                    self.enter_current(cx);
                } else {
                    tracing::warn!(screen = %name, "push rejected: unknown screen");
                }
                None
            }
            Action::Back => {
                if self.can_go_back() {
                    self.exit_current(cx);
                    self.go_back();
                    self.enter_current(cx);
                }
                None
            }
            Action::PopToTop => {
                if self.can_go_back() {
                    self.exit_current(cx);
                    self.pop_to_top();
                    self.enter_current(cx);
                }
                None
            }
            Action::Quit => Some(Action::Quit),
            Action::Noop => None,
        }
    }

    pub(crate) fn enter_current(&mut self, cx: &mut Context) {
        let route = self.routes.last().expect("navigation stack is never empty");
        if let Some(screen) = self.registry.get_mut(route.name()) {
            screen.on_enter(route.params(), cx);
        }
    }

    pub(crate) fn exit_current(&mut self, cx: &mut Context) {
        let route = self.routes.last().expect("navigation stack is never empty");
        if let Some(screen) = self.registry.get_mut(route.name()) {
            screen.on_exit(cx);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::AppContext;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::layout::Rect;
    use serde_json::json;
    use std::sync::{Arc, Mutex};
    use tokio::sync::mpsc;

    struct Blank;

    impl Screen for Blank {
        fn render(&mut self, _frame: &mut ratatui::Frame, _params: &Params, _cx: &mut Context) {}
    }

    /// Screen that records its lifecycle calls and replies to any key with a
    /// preset action.
    struct Probe {
        tag: &'static str,
        log: Arc<Mutex<Vec<String>>>,
        reply: Option<Action>,
    }

    impl Screen for Probe {
        fn on_enter(&mut self, _params: &Params, _cx: &mut Context) {
            self.log.lock().unwrap().push(format!("enter {}", self.tag));
        }

        fn on_exit(&mut self, _cx: &mut Context) {
            self.log.lock().unwrap().push(format!("exit {}", self.tag));
        }

        fn render(&mut self, _frame: &mut ratatui::Frame, _params: &Params, _cx: &mut Context) {}

        fn handle_event(&mut self, _event: Event, _params: &Params, _cx: &mut Context) -> Option<Action> {
            self.reply.take()
        }
    }

    fn stack(names: &[&str]) -> NavigationStack {
        let mut registry = ScreenRegistry::new();
        for name in names {
            registry = registry.register(*name, Blank).unwrap();
        }
        NavigationStack::new(registry).unwrap()
    }

    fn params(value: serde_json::Value) -> Params {
        value.as_object().cloned().unwrap_or_default()
    }

    fn cx() -> Context {
        let (tx, _rx) = mpsc::unbounded_channel();
        Context::new(AppContext::new(tx), Rect::new(0, 0, 80, 24))
    }

    fn key(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
    }

    #[test]
    fn current_follows_every_push() {
        let mut stack = stack(&["home", "profile", "settings"]);
        stack.push("profile", params(json!({"id": 7}))).unwrap();
        assert_eq!(stack.current().name(), "profile");
        assert_eq!(stack.current().param("id"), Some(&json!(7)));

        stack.push("settings", Params::new()).unwrap();
        assert_eq!(stack.current().name(), "settings");
        assert_eq!(stack.depth(), 3);
    }

    #[test]
    fn duplicate_pushes_are_permitted() {
        let mut stack = stack(&["home", "profile"]);
        stack.push("home", Params::new()).unwrap();
        stack.push("home", Params::new()).unwrap();
        assert_eq!(stack.depth(), 3);
    }

    #[test]
    fn go_back_at_root_is_a_noop() {
        let mut stack = stack(&["home"]);
        let before = stack.routes().to_vec();
        assert!(!stack.go_back());
        assert_eq!(stack.routes(), before.as_slice());
        assert_eq!(stack.current().name(), "home");
    }

    #[test]
    fn push_then_go_back_restores_shape() {
        let mut stack = stack(&["home", "profile"]);
        stack.push("profile", params(json!({"id": 1}))).unwrap();
        let before = stack.routes().to_vec();

        stack.push("profile", params(json!({"id": 2}))).unwrap();
        assert!(stack.go_back());

        assert_eq!(stack.routes(), before.as_slice());
    }

    #[test]
    fn pop_to_top_keeps_the_first_route_intact() {
        let mut registry = ScreenRegistry::new();
        registry = registry.register("home", Blank).unwrap();
        registry = registry.register("profile", Blank).unwrap();
        let mut stack = NavigationStack::new(registry).unwrap();
        stack
            .navigate("home", params(json!({"seed": true})))
            .unwrap();
        stack.push("profile", Params::new()).unwrap();
        stack.push("profile", Params::new()).unwrap();

        stack.pop_to_top();

        assert_eq!(stack.depth(), 1);
        assert_eq!(stack.current().name(), "home");
        assert_eq!(stack.current().param("seed"), Some(&json!(true)));
    }

    #[test]
    fn pop_to_top_at_root_is_a_noop() {
        let mut stack = stack(&["home"]);
        stack.pop_to_top();
        assert_eq!(stack.depth(), 1);
    }

    #[test]
    fn navigate_truncates_and_merges_params() {
        let mut stack = stack(&["home", "profile", "settings"]);
        stack.navigate("home", params(json!({"a": 1, "b": 2}))).unwrap();
        stack.push("profile", Params::new()).unwrap();
        stack.push("settings", Params::new()).unwrap();

        stack.navigate("home", params(json!({"b": 3, "c": 4}))).unwrap();

        assert_eq!(stack.depth(), 1);
        assert_eq!(stack.current().name(), "home");
        assert_eq!(
            stack.current().params(),
            &params(json!({"a": 1, "b": 3, "c": 4}))
        );
    }

    #[test]
    fn navigate_to_unvisited_screen_pushes() {
        let mut stack = stack(&["home", "profile"]);
        stack.navigate("profile", params(json!({"id": 7}))).unwrap();
        assert_eq!(stack.depth(), 2);
        assert_eq!(stack.current().name(), "profile");
        assert_eq!(stack.current().param("id"), Some(&json!(7)));
    }

    #[test]
    fn navigate_prefers_nearest_duplicate_from_top() {
        let mut stack = stack(&["home", "profile"]);
        stack.push("profile", Params::new()).unwrap();
        stack.push("home", Params::new()).unwrap();
        stack.push("profile", Params::new()).unwrap();
        // History: home, profile, home, profile

        stack.navigate("home", Params::new()).unwrap();

        // Truncated to the second "home", not the root.
        assert_eq!(stack.depth(), 3);
        assert_eq!(
            stack
                .routes()
                .iter()
                .map(Route::name)
                .collect::<Vec<_>>(),
            vec!["home", "profile", "home"]
        );
    }

    #[test]
    fn unknown_screen_is_rejected_and_stack_unchanged() {
        let mut stack = stack(&["home"]);
        stack.push("home", params(json!({"k": 1}))).unwrap();
        let before = stack.routes().to_vec();

        let err = stack.push("missing", Params::new()).unwrap_err();
        assert!(matches!(err, crate::Error::UnknownScreen { .. }));
        assert_eq!(stack.routes(), before.as_slice());

        let err = stack.navigate("missing", params(json!({"k": 2}))).unwrap_err();
        assert!(matches!(err, crate::Error::UnknownScreen { .. }));
        assert_eq!(stack.routes(), before.as_slice());
    }

    #[test]
    fn browse_then_return_home_with_new_params() {
        let mut stack = stack(&["home", "profile", "settings"]);

        stack.push("profile", params(json!({"id": 7}))).unwrap();
        assert_eq!(
            stack.routes().iter().map(Route::name).collect::<Vec<_>>(),
            vec!["home", "profile"]
        );

        stack.push("settings", Params::new()).unwrap();
        assert_eq!(stack.depth(), 3);

        stack.navigate("home", params(json!({"post": "hi"}))).unwrap();
        assert_eq!(stack.depth(), 1);
        assert_eq!(stack.current().name(), "home");
        assert_eq!(stack.current().params(), &params(json!({"post": "hi"})));
    }

    #[test]
    fn empty_registry_is_rejected() {
        let err = NavigationStack::new(ScreenRegistry::new()).unwrap_err();
        assert!(matches!(err, crate::Error::EmptyRegistry));
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let registry = ScreenRegistry::new().register("home", Blank).unwrap();
        let err = registry.register("home", Blank).unwrap_err();
        assert!(matches!(err, crate::Error::DuplicateScreen { .. }));
    }

    #[test]
    fn dispatch_runs_exit_then_enter_around_transitions() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let registry = ScreenRegistry::new()
            .register(
                "home",
                Probe {
                    tag: "home",
                    log: Arc::clone(&log),
                    reply: Some(Action::push("detail")),
                },
            )
            .unwrap()
            .register(
                "detail",
                Probe {
                    tag: "detail",
                    log: Arc::clone(&log),
                    reply: Some(Action::Back),
                },
            )
            .unwrap();
        let mut stack = NavigationStack::new(registry).unwrap();
        let mut cx = cx();

        assert!(stack.handle_event(key('x'), &mut cx).is_none());
        assert_eq!(stack.current().name(), "detail");

        assert!(stack.handle_event(key('x'), &mut cx).is_none());
        assert_eq!(stack.current().name(), "home");

        assert_eq!(
            log.lock().unwrap().as_slice(),
            &[
                "exit home".to_string(),
                "enter detail".to_string(),
                "exit detail".to_string(),
                "enter home".to_string(),
            ]
        );
    }

    #[test]
    fn dispatch_rejects_unknown_target_without_lifecycle_calls() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let registry = ScreenRegistry::new()
            .register(
                "home",
                Probe {
                    tag: "home",
                    log: Arc::clone(&log),
                    reply: Some(Action::navigate("missing")),
                },
            )
            .unwrap();
        let mut stack = NavigationStack::new(registry).unwrap();
        let mut cx = cx();

        assert!(stack.handle_event(key('x'), &mut cx).is_none());
        assert_eq!(stack.depth(), 1);
        assert_eq!(stack.current().name(), "home");
        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn quit_bubbles_out_of_dispatch() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let registry = ScreenRegistry::new()
            .register(
                "home",
                Probe {
                    tag: "home",
                    log,
                    reply: Some(Action::Quit),
                },
            )
            .unwrap();
        let mut stack = NavigationStack::new(registry).unwrap();
        let mut cx = cx();

        let action = stack.handle_event(key('q'), &mut cx);
        assert!(matches!(action, Some(Action::Quit)));
    }
}
