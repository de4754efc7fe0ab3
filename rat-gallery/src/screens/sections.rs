use rat_stack::{Action, Context, Event, Params, Screen};
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, List, ListItem, Paragraph};

use super::{chrome_action, CHROME_HINTS};

const SECTIONS: &[(&str, &[&str])] = &[
    ("D", &["Devin", "Dan", "Dominic"]),
    ("J", &["Jackson", "James", "Jillian", "Jimmy", "Joel", "John", "Julie"]),
];

/// A grouped list with one header row per section.
pub struct Sections;

impl Screen for Sections {
    fn render(&mut self, frame: &mut ratatui::Frame, _params: &Params, cx: &mut Context) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(cx.area);

        let mut items: Vec<ListItem> = Vec::new();
        for (header, names) in SECTIONS {
            items.push(
                ListItem::new(format!(" {header} ")).style(
                    Style::default()
                        .bg(Color::DarkGray)
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            );
            for name in *names {
                items.push(ListItem::new(format!("   {name}")));
            }
        }

        let list = List::new(items).block(
            Block::default()
                .title(" Contacts ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
        frame.render_widget(list, chunks[0]);

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
