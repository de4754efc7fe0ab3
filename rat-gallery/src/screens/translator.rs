use crossterm::event::KeyCode;
use rat_stack::{Action, Context, Event, Params, Screen};
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Text input demo: every word you type comes out as "word".
///
/// This screen owns the keyboard, so the shared letter shortcuts do not
/// apply here; Esc backs out.
#[derive(Default)]
pub struct Translator {
    text: String,
}

impl Translator {
    fn translated(&self) -> String {
        self.text
            .split_whitespace()
            .map(|_| "word")
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Screen for Translator {
    fn render(&mut self, frame: &mut ratatui::Frame, _params: &Params, cx: &mut Context) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Input
                Constraint::Min(0),    // Output
                Constraint::Length(1), // Footer
            ])
            .split(cx.area);

        let input = Paragraph::new(format!("{}▏", self.text)).block(
            Block::default()
                .title(" Type here to translate! ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Cyan)),
        );
        frame.render_widget(input, chunks[0]);

        let output = Paragraph::new(self.translated()).block(
            Block::default()
                .title(" Translation ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
        frame.render_widget(output, chunks[1]);

        let footer = Paragraph::new(" Esc Back │ Backspace Delete ")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(footer, chunks[2]);
    }

    fn handle_event(&mut self, event: Event, _params: &Params, _cx: &mut Context) -> Option<Action> {
        match event {
            Event::Key(key) => match key.code {
                KeyCode::Char(c) => {
                    self.text.push(c);
                    None
                }
                KeyCode::Backspace => {
                    self.text.pop();
                    None
                }
                KeyCode::Esc => Some(Action::Back),
                _ => None,
            },
            Event::Paste(s) => {
                self.text.push_str(&s);
                None
            }
            _ => None,
        }
    }
}
