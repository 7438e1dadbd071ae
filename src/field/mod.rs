mod controller;
mod error;
mod listener;
mod mode;
mod strategy;

pub use controller::{FieldController, Interaction};
pub use error::InvalidPatternError;
pub use listener::EventListener;
pub use mode::{Mode, TapSource, TapTarget};
pub use strategy::{RegexStrategy, ValidationStrategy};
