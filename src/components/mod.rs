pub mod hooks;
pub mod ui;

mod overlay;

pub(crate) use overlay::PageOverlay;
