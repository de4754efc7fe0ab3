use crossterm::event::KeyCode;
use rat_stack::{Action, Context, Event, Params, Screen};
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use super::{chrome_action, CHROME_HINTS};

/// "You clicked N times". The count lives in the screen itself and no
/// other screen can see it.
#[derive(Default)]
pub struct CounterScreen {
    count: u32,
}

impl Screen for CounterScreen {
    fn render(&mut self, frame: &mut ratatui::Frame, _params: &Params, cx: &mut Context) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(cx.area);

        let lines = vec![
            Line::from(""),
            Line::styled(
                format!("You clicked {} times", self.count),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Line::from(""),
            Line::styled("[ Space: Click me! ]", Style::default().fg(Color::DarkGray)),
        ];
        let body = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .title(" Counter ")
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
            Event::Key(key) if key.code == KeyCode::Char(' ') => {
                self.count += 1;
                None
            }
            Event::Key(key) => chrome_action(key.code),
            _ => None,
        }
    }
}
