//! Async data loading demo: a loading indicator while the catalog is
//! fetched, then either the movie list or the failure message. The loading
//! flag is cleared on both paths.

use crossterm::event::KeyCode;
use rat_stack::{Action, AppContext, Context, Entity, Event, Params, Screen, TaskTracker};
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Borders, List, ListItem, Paragraph};
use serde::Deserialize;
use std::time::Duration;

use super::{chrome_action, CHROME_HINTS};

// The classic movies.json payload. Transport is simulated; parsing and the
// success/failure handling are the point of the demo.
const MOVIES_JSON: &str = r#"{
  "title": "The Basics - Networking",
  "description": "Your app fetched this from a remote endpoint!",
  "movies": [
    { "id": "1", "title": "Star Wars", "releaseYear": "1977" },
    { "id": "2", "title": "Back to the Future", "releaseYear": "1985" },
    { "id": "3", "title": "The Matrix", "releaseYear": "1999" },
    { "id": "4", "title": "Inception", "releaseYear": "2010" },
    { "id": "5", "title": "Interstellar", "releaseYear": "2014" }
  ]
}"#;

#[derive(Debug, Clone, Deserialize)]
struct Catalog {
    movies: Vec<Movie>,
}

#[derive(Debug, Clone, Deserialize)]
struct Movie {
    title: String,
    #[serde(rename = "releaseYear")]
    release_year: String,
}

#[derive(Clone, Default)]
struct MovieState {
    loading: bool,
    movies: Vec<Movie>,
    error: Option<String>,
}

pub struct MovieBrowser {
    state: Entity<MovieState>,
    tasks: TaskTracker,
}

impl MovieBrowser {
    pub fn new(cx: &AppContext) -> Self {
        Self {
            state: cx.new_entity(MovieState::default()),
            tasks: TaskTracker::new(),
        }
    }

    fn start_fetch(&mut self, cx: &mut Context, fail: bool) {
        let state = self.state.clone();
        let _ = state.update(|s| {
            s.loading = true;
            s.error = None;
        });

        let handle = cx.app.spawn(move |app| async move {
            tokio::time::sleep(Duration::from_millis(800)).await;
            // A truncated payload stands in for a failed transfer.
            let payload = if fail { &MOVIES_JSON[..40] } else { MOVIES_JSON };
            let parsed: Result<Catalog, _> = serde_json::from_str(payload);

            let _ = state.update(|s| {
                match parsed {
                    Ok(catalog) => {
                        s.movies = catalog.movies;
                        s.error = None;
                    }
                    Err(err) => {
                        tracing::error!(%err, "movie catalog fetch failed");
                        s.movies.clear();
                        s.error = Some(err.to_string());
                    }
                }
                // Finally: the indicator goes away on both paths.
                s.loading = false;
            });
            app.refresh();
        });
        self.tasks.track(handle);
    }
}

impl Screen for MovieBrowser {
    fn on_enter(&mut self, _params: &Params, cx: &mut Context) {
        cx.subscribe(&self.state);
        let idle = self
            .state
            .read(|s| !s.loading && s.movies.is_empty() && s.error.is_none())
            .unwrap_or(false);
        if idle {
            self.start_fetch(cx, false);
        }
    }

    fn on_exit(&mut self, _cx: &mut Context) {
        self.tasks.abort_all();
        // An aborted fetch never reaches its finalizer.
        let _ = self.state.update(|s| s.loading = false);
    }

    fn render(&mut self, frame: &mut ratatui::Frame, _params: &Params, cx: &mut Context) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(cx.area);

        let state = self.state.read(|s| s.clone()).unwrap_or_default();
        let block = Block::default()
            .title(" Movie Browser ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded);

        if state.loading {
            let spinner = Paragraph::new("\n⣾ Loading movies…")
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Yellow))
                .block(block);
            frame.render_widget(spinner, chunks[0]);
        } else if let Some(error) = &state.error {
            let body = Paragraph::new(format!("\nFetch failed:\n{error}\n\n[ r: Retry ]"))
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Red))
                .block(block);
            frame.render_widget(body, chunks[0]);
        } else {
            let items: Vec<ListItem> = state
                .movies
                .iter()
                .map(|movie| ListItem::new(format!("  {}, {}", movie.title, movie.release_year)))
                .collect();
            let list = List::new(items).block(block);
            frame.render_widget(list, chunks[0]);
        }

        let footer = Paragraph::new(format!(" r Reload │ e Fail │{CHROME_HINTS}"))
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(footer, chunks[1]);
    }

    fn handle_event(&mut self, event: Event, _params: &Params, cx: &mut Context) -> Option<Action> {
        match event {
            Event::Key(key) => match key.code {
                KeyCode::Char('r') => {
                    self.start_fetch(cx, false);
                    None
                }
                KeyCode::Char('e') => {
                    self.start_fetch(cx, true);
                    None
                }
                code => chrome_action(code),
            },
            _ => None,
        }
    }
}
