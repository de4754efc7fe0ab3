//! The cat cafe: a parent screen hands each cat card an immutable snapshot
//! at render time; the cards talk back only through key handling. Opening a
//! cat carries its identity to the detail screen as route params.

use crossterm::event::KeyCode;
use rat_stack::{Action, Context, Event, Params, Screen};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use serde_json::{json, Value};

use super::{chrome_action, CHROME_HINTS};

struct Cat {
    first_name: &'static str,
    last_name: &'static str,
    hungry: bool,
}

pub struct CatCafe {
    cats: Vec<Cat>,
    selected: usize,
}

impl CatCafe {
    pub fn new() -> Self {
        Self {
            cats: vec![
                Cat { first_name: "Big", last_name: "Worth", hungry: true },
                Cat { first_name: "Small", last_name: "Worth", hungry: true },
            ],
            selected: 0,
        }
    }

    fn render_card(&self, frame: &mut ratatui::Frame, area: Rect, index: usize) {
        let cat = &self.cats[index];
        let is_selected = index == self.selected;

        let lines = vec![
            Line::from(""),
            Line::styled(
                format!("Hello {} {}!", cat.first_name, cat.last_name),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Line::from(format!("Are you hungry: {}", if cat.hungry { "yes" } else { "no" })),
            Line::from(""),
            Line::styled(
                if cat.hungry { "[ Pour me some milk, please! ]" } else { "[ Thank you! ]" },
                Style::default().fg(if cat.hungry { Color::Yellow } else { Color::Green }),
            ),
        ];

        let card = Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .title(format!(" Cat {} ", index + 1))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(if is_selected { Color::Cyan } else { Color::DarkGray })),
        );
        frame.render_widget(card, area);
    }
}

impl Screen for CatCafe {
    fn render(&mut self, frame: &mut ratatui::Frame, _params: &Params, cx: &mut Context) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(cx.area);

        let cards = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[0]);

        self.render_card(frame, cards[0], 0);
        self.render_card(frame, cards[1], 1);

        let footer = Paragraph::new(format!(" ←/→ Select │ Space Feed │ Enter Open │{CHROME_HINTS}"))
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(footer, chunks[1]);
    }

    fn handle_event(&mut self, event: Event, _params: &Params, _cx: &mut Context) -> Option<Action> {
        match event {
            Event::Key(key) => match key.code {
                KeyCode::Left | KeyCode::Right => {
                    self.selected = 1 - self.selected;
                    None
                }
                KeyCode::Char(' ') => {
                    let cat = &mut self.cats[self.selected];
                    cat.hungry = !cat.hungry;
                    None
                }
                KeyCode::Enter => {
                    let cat = &self.cats[self.selected];
                    let params = Params::from_iter([
                        ("firstName".to_string(), json!(cat.first_name)),
                        ("lastName".to_string(), json!(cat.last_name)),
                        ("hungry".to_string(), json!(cat.hungry)),
                    ]);
                    Some(Action::Push("cat".to_string(), params))
                }
                code => chrome_action(code),
            },
            _ => None,
        }
    }
}

/// Detail view rendered entirely from its route params.
pub struct CatDetail;

impl Screen for CatDetail {
    fn render(&mut self, frame: &mut ratatui::Frame, params: &Params, cx: &mut Context) {
        let first = params.get("firstName").and_then(Value::as_str).unwrap_or("Mystery");
        let last = params.get("lastName").and_then(Value::as_str).unwrap_or("Cat");
        let hungry = params.get("hungry").and_then(Value::as_bool).unwrap_or(false);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(cx.area);

        let lines = vec![
            Line::from(""),
            Line::styled(
                format!("{first} {last}"),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Line::from(""),
            Line::from(format!(
                "Currently {}",
                if hungry { "waiting for milk" } else { "purring, well fed" }
            )),
        ];
        let body = Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .title(" Cat Detail ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
        frame.render_widget(body, chunks[0]);

        let footer = Paragraph::new(CHROME_HINTS)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(footer, chunks[1]);
    }

    fn handle_event(&mut self, event: Event, _params: &Params, _cx: &mut Context) -> Option<Action> {
        match event {
            Event::Key(key) => chrome_action(key.code),
            _ => None,
        }
    }
}
