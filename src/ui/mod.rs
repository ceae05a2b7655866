pub mod backdrop;
pub mod ornament;
pub mod panel;
pub mod rings;
mod system;
pub mod widgets;

pub use system::ui_system;
