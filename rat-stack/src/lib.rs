pub mod application;
pub mod error;
pub mod route;
pub mod screen;
pub mod stack;
pub mod state;
pub mod task;

pub use error::{Error, Result};

// Re-export common types for convenience
pub use application::{AppContext, Application, Context};
pub use route::{Params, Route};
pub use screen::{Action, Event, Screen};
pub use stack::{NavigationStack, ScreenRegistry};
pub use state::Entity;
pub use task::{TaskHandle, TaskTracker};
