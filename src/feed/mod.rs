//! Feed module
//!
//! Text rendering for the widget's three surfaces.

pub mod renderer;

pub use renderer::{relative_time, render_widget, render_widget_at};
