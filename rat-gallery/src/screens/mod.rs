pub mod cats;
pub mod counter;
pub mod menu;
pub mod movies;
pub mod roster;
pub mod sections;
pub mod translator;

pub use cats::{CatCafe, CatDetail};
pub use counter::CounterScreen;
pub use menu::Menu;
pub use movies::MovieBrowser;
pub use roster::Roster;
pub use sections::Sections;
pub use translator::Translator;

use crossterm::event::KeyCode;
use rat_stack::Action;

/// Keys shared by every demo screen: Esc backs out, `m` returns to the menu
/// entry already in history, `h` pops to the root, `q` quits.
pub(crate) fn chrome_action(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Esc => Some(Action::Back),
        KeyCode::Char('m') => Some(Action::navigate("menu")),
        KeyCode::Char('h') => Some(Action::PopToTop),
        KeyCode::Char('q') => Some(Action::Quit),
        _ => None,
    }
}

/// Footer line rendered on the demo screens.
pub(crate) const CHROME_HINTS: &str = " Esc Back │ m Menu │ h Top │ q Quit ";
