pub mod hold_button;
pub mod session;
