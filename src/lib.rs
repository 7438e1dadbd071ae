#![deny(rust_2018_idioms)]

mod config;
mod field;

pub use config::{EndIcon, FieldConfig, InputKind};
pub use field::{
    EventListener, FieldController, Interaction, InvalidPatternError, Mode, RegexStrategy,
    TapSource, TapTarget, ValidationStrategy,
};

pub mod prelude {
    pub use super::{
        EndIcon, EventListener, FieldConfig, FieldController, InputKind, Interaction, Mode,
        RegexStrategy, TapSource, TapTarget, ValidationStrategy,
    };
}
