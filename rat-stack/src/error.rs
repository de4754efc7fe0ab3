use snafu::prelude::*;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("Unknown screen: {name:?} is not registered"))]
    UnknownScreen { name: String },

    #[snafu(display("Duplicate screen registration: {name:?}"))]
    DuplicateScreen { name: String },

    #[snafu(display("Screen registry is empty: at least one screen is required"))]
    EmptyRegistry,

    #[snafu(display("Failed to lock state: poisoned"))]
    LockPoisoned,
}

pub type Result<T> = std::result::Result<T, Error>;
