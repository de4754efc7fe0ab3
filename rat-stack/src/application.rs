//! Terminal application driver.
//!
//! Owns the tokio event loop, the crossterm-managed terminal, and the
//! re-render channel; hands the navigation stack its render and event turns.
//! Navigation stays synchronous on this loop, so the route history needs no
//! locking; background work goes through [`AppContext::spawn`] and mutates
//! [`Entity`] state instead.

use crate::screen::{Action, Event};
use crate::stack::NavigationStack;
use crate::state::Entity;
use crate::task::TaskHandle;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event as CrosstermEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::io::{self, stdout};
use std::time::Duration;
use tokio::runtime::Runtime;
use tokio::sync::mpsc;

/// Application context providing access to global services.
#[derive(Clone)]
pub struct AppContext {
    /// Internal: channel to trigger a re-render.
    re_render_tx: mpsc::UnboundedSender<()>,
}

impl AppContext {
    pub(crate) fn new(re_render_tx: mpsc::UnboundedSender<()>) -> Self {
        Self { re_render_tx }
    }

    /// Create a new reactive state cell.
    pub fn new_entity<T>(&self, value: T) -> Entity<T>
    where
        T: Send + Sync + 'static,
    {
        Entity::new(value)
    }

    /// Spawn an async task on the runtime. The returned handle can be
    /// tracked so the task dies with the screen that spawned it.
    pub fn spawn<F, Fut>(&self, f: F) -> TaskHandle
    where
        F: FnOnce(AppContext) -> Fut + Send + 'static,
        Fut: std::future::Future<Output = ()> + Send + 'static,
    {
        let cx = self.clone();
        let join = tokio::spawn(async move {
            f(cx).await;
        });
        TaskHandle::new(join.abort_handle())
    }

    /// Trigger a re-render.
    pub fn refresh(&self) {
        let _ = self.re_render_tx.send(());
    }
}

/// Per-call context passed to screen methods.
pub struct Context {
    pub app: AppContext,
    pub area: Rect,
}

impl Context {
    pub fn new(app: AppContext, area: Rect) -> Self {
        Self { app, area }
    }

    /// Access the underlying AppContext.
    pub fn app(&self) -> &AppContext {
        &self.app
    }

    /// Re-render whenever `entity` changes. The forwarding task ends when
    /// the entity or the application goes away.
    pub fn subscribe<T>(&self, entity: &Entity<T>)
    where
        T: Send + Sync + 'static,
    {
        let mut rx = entity.subscribe();
        let tx = self.app.re_render_tx.clone();
        tokio::spawn(async move {
            while rx.changed().await.is_ok() {
                if tx.send(()).is_err() {
                    break;
                }
            }
        });
    }

    /// Explicitly trigger a re-render.
    pub fn notify(&self) {
        self.app.refresh();
    }
}

/// Main application handle.
pub struct Application;

impl Application {
    /// Create a new application instance.
    pub fn new() -> Self {
        Self
    }

    /// Run the application. `setup` builds the navigation stack and may use
    /// the context to create entities or spawn tasks for its screens.
    pub fn run<F>(self, setup: F) -> anyhow::Result<()>
    where
        F: FnOnce(&AppContext) -> anyhow::Result<NavigationStack>,
    {
        let rt = Runtime::new().map_err(|e| anyhow::anyhow!("Failed to start tokio: {}", e))?;

        let (re_render_tx, re_render_rx) = mpsc::unbounded_channel();
        let app_context = AppContext::new(re_render_tx);

        let _guard = rt.enter();
        let stack = setup(&app_context)?;
        drop(_guard);

        rt.block_on(async move { self.run_loop(app_context, stack, re_render_rx).await })
    }

    async fn run_loop(
        &self,
        app: AppContext,
        mut stack: NavigationStack,
        re_render_rx: mpsc::UnboundedReceiver<()>,
    ) -> anyhow::Result<()> {
        enable_raw_mode()?;
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Lifecycle: enter the initial route before the first frame.
        {
            let size = terminal.size()?;
            let area = Rect::new(0, 0, size.width, size.height);
            let mut cx = Context::new(app.clone(), area);
            stack.enter_current(&mut cx);
        }

        let result = self.event_loop(app, &mut terminal, &mut stack, re_render_rx).await;

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
        terminal.show_cursor()?;

        result
    }

    async fn event_loop(
        &self,
        app: AppContext,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        stack: &mut NavigationStack,
        mut re_render_rx: mpsc::UnboundedReceiver<()>,
    ) -> anyhow::Result<()> {
        // Initial render
        app.refresh();

        loop {
            tokio::select! {
                _ = re_render_rx.recv() => {
                    terminal.draw(|frame| {
                        let area = frame.area();
                        let mut cx = Context::new(app.clone(), area);
                        stack.render(frame, &mut cx);
                    })?;
                }
                event_ready = async { event::poll(Duration::from_millis(100)) } => {
                    if let Ok(true) = event_ready {
                        let crossterm_event = event::read()?;
                        let internal_event = match crossterm_event {
                            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Some(Event::Key(key)),
                            CrosstermEvent::Mouse(mouse) => Some(Event::Mouse(mouse)),
                            CrosstermEvent::Resize(w, h) => Some(Event::Resize(w, h)),
                            CrosstermEvent::FocusGained => Some(Event::FocusGained),
                            CrosstermEvent::FocusLost => Some(Event::FocusLost),
                            CrosstermEvent::Paste(s) => Some(Event::Paste(s)),
                            _ => None,
                        };

                        if let Some(event) = internal_event {
                            let size = terminal.size()?;
                            let area = Rect::new(0, 0, size.width, size.height);
                            let mut cx = Context::new(app.clone(), area);

                            let action = stack.handle_event(event, &mut cx);
                            app.refresh();

                            if let Some(Action::Quit) = action {
                                stack.exit_current(&mut cx);
                                return Ok(());
                            }
                        }
                    }
                }
            }
        }
    }
}

impl Default for Application {
    fn default() -> Self {
        Self::new()
    }
}
