use crossterm::event::KeyCode;
use rat_stack::{Action, Context, Event, Params, Screen};
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, List, ListItem, Paragraph};

/// Entry point of the gallery: pick a demo, hit Enter.
pub struct Menu {
    selected: usize,
    options: Vec<(&'static str, &'static str, &'static str)>, // (label, description, route)
}

impl Menu {
    pub fn new() -> Self {
        Self {
            selected: 0,
            options: vec![
                ("Counter", "Press a button, count the clicks", "counter"),
                ("Cat Cafe", "Props, children & a hungry toggle", "cats"),
                ("Name Roster", "A flat scrolling list", "roster"),
                ("Contacts", "A sectioned list with headers", "sections"),
                ("Translator", "Text input, word by word", "translator"),
                ("Movie Browser", "Async loading with a spinner", "movies"),
                ("Exit", "Quit the gallery", "exit"),
            ],
        }
    }
}

impl Screen for Menu {
    fn render(&mut self, frame: &mut ratatui::Frame, _params: &Params, cx: &mut Context) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(0),    // Menu list
                Constraint::Length(3), // Footer
            ])
            .split(cx.area);

        let title = Paragraph::new("rat-gallery")
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::BOTTOM));
        frame.render_widget(title, chunks[0]);

        let items: Vec<ListItem> = self
            .options
            .iter()
            .enumerate()
            .map(|(i, (label, desc, _))| {
                let is_selected = i == self.selected;
                let prefix = if is_selected { "▶ " } else { "  " };
                let lines = vec![
                    Line::from(vec![
                        Span::styled(
                            prefix,
                            Style::default().fg(if is_selected { Color::Cyan } else { Color::DarkGray }),
                        ),
                        Span::styled(
                            *label,
                            Style::default()
                                .fg(if is_selected { Color::Cyan } else { Color::White })
                                .add_modifier(if is_selected { Modifier::BOLD } else { Modifier::empty() }),
                        ),
                    ]),
                    Line::from(vec![
                        Span::raw("    "),
                        Span::styled(*desc, Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC)),
                    ]),
                ];
                ListItem::new(lines)
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .title(" Select Demo ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
        frame.render_widget(list, chunks[1]);

        let footer = Paragraph::new(" ↑/↓ Navigate │ Enter Select │ q Quit ")
            .style(Style::default().bg(Color::Cyan).fg(Color::Black))
            .alignment(Alignment::Center);
        frame.render_widget(footer, chunks[2]);
    }

    fn handle_event(&mut self, event: Event, _params: &Params, _cx: &mut Context) -> Option<Action> {
        match event {
            Event::Key(key) => match key.code {
                KeyCode::Up | KeyCode::Char('k') => {
                    if self.selected > 0 {
                        self.selected -= 1;
                    } else {
                        self.selected = self.options.len() - 1;
                    }
                    None
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    if self.selected < self.options.len() - 1 {
                        self.selected += 1;
                    } else {
                        self.selected = 0;
                    }
                    None
                }
                KeyCode::Enter => {
                    let (_, _, route) = &self.options[self.selected];
                    if *route == "exit" {
                        Some(Action::Quit)
                    } else {
                        Some(Action::navigate(*route))
                    }
                }
                KeyCode::Char('q') => Some(Action::Quit),
                _ => None,
            },
            _ => None,
        }
    }
}
