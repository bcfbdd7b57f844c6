pub mod tab_button;

pub use tab_button::{TabButton, TabButtonAttrs, TabButtonState, ACTIVE_CLASS};
