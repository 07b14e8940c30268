mod components;
mod view;

pub use view::{HitMap, PopupRender, UiContext, draw};
