mod field_builder;
pub(crate) mod input;
pub(crate) mod keymap;
mod options;
mod popup;
mod runtime;
mod status;
mod terminal;

pub use field_builder::FieldBuilder;
pub(crate) use input::FocusTarget;
pub use options::UiOptions;
