//! Console adapters
//!
//! Terminal implementations of the view ports plus the menu loop that drives them.

pub mod editor;
pub mod menu;
pub mod terminal;
pub mod views;

pub use menu::ConsoleApp;
pub use terminal::Console;
