// src/routes/mod.rs
pub mod console;
pub mod menu;
pub mod session;

pub use console::Console;
pub use menu::MenuChoice;
pub use session::{Session, SessionEnd};
