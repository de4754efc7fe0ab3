//! Tutorial gallery: a stack-navigated tour of classic mobile-UI demo
//! screens, rendered in the terminal.

mod screens;

use anyhow::Context as _;
use rat_stack::{Application, NavigationStack, ScreenRegistry};
use tracing_subscriber::EnvFilter;

use crate::screens::{
    CatCafe, CatDetail, CounterScreen, Menu, MovieBrowser, Roster, Sections, Translator,
};

fn main() -> anyhow::Result<()> {
    init_logging()?;

    let app = Application::new();
    app.run(|cx| {
        // The first registered screen is the initial route.
        let registry = ScreenRegistry::new()
            .register("menu", Menu::new())?
            .register("counter", CounterScreen::default())?
            .register("cats", CatCafe::new())?
            .register("cat", CatDetail)?
            .register("roster", Roster::new())?
            .register("sections", Sections)?
            .register("translator", Translator::default())?
            .register("movies", MovieBrowser::new(cx))?;
        Ok(NavigationStack::new(registry)?)
    })
}

/// Logs go to a file; the terminal belongs to the UI.
fn init_logging() -> anyhow::Result<()> {
    let file = std::fs::File::create("rat-gallery.log").context("Failed to create log file")?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(file)
        .with_ansi(false)
        .init();
    Ok(())
}
