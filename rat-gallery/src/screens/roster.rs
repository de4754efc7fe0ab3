use crossterm::event::KeyCode;
use rat_stack::{Action, Context, Event, Params, Screen};
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph};

use super::{chrome_action, CHROME_HINTS};

const NAMES: &[&str] = &[
    "Devin", "Dan", "Dominic", "Jackson", "James", "Joel", "John", "Jillian", "Jimmy", "Julie",
];

/// A flat scrolling list of names.
pub struct Roster {
    state: ListState,
}

impl Roster {
    pub fn new() -> Self {
        let mut state = ListState::default();
        state.select(Some(0));
        Self { state }
    }
}

impl Screen for Roster {
    fn render(&mut self, frame: &mut ratatui::Frame, _params: &Params, cx: &mut Context) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(cx.area);

        let items: Vec<ListItem> = NAMES.iter().map(|name| ListItem::new(format!("  {name}"))).collect();
        let list = List::new(items)
            .block(
                Block::default()
                    .title(" Name Roster ")
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded),
            )
            .highlight_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .highlight_symbol("▶ ");
        frame.render_stateful_widget(list, chunks[0], &mut self.state);

        let footer = Paragraph::new(CHROME_HINTS)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(footer, chunks[1]);
    }

    fn handle_event(&mut self, event: Event, _params: &Params, _cx: &mut Context) -> Option<Action> {
        match event {
            Event::Key(key) => match key.code {
                KeyCode::Up | KeyCode::Char('k') => {
                    let i = self.state.selected().unwrap_or(0);
                    self.state.select(Some(i.saturating_sub(1)));
                    None
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    let i = self.state.selected().unwrap_or(0);
                    self.state.select(Some((i + 1).min(NAMES.len() - 1)));
                    None
                }
                code => chrome_action(code),
            },
            _ => None,
        }
    }
}
