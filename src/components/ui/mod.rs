pub mod alert;
pub mod button;
pub mod dialog;

// Re-export component symbols so callers can `use crate::components::ui::Button` etc.
pub use alert::*;
pub use button::*;
pub use dialog::*;
