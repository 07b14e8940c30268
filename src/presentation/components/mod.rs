mod body;
mod footer;
mod header;
mod layout;
mod picker;
mod popup;

pub use body::render_body;
pub use footer::render_footer;
pub use header::render_header;
pub use picker::render_picker;
pub use popup::render_popup;
