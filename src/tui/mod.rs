//! Interactive launcher
//!
//! Asks for the ID once, then lets the user pick services from a list and
//! opens each one in the browser, like the button grid of a portal page.

pub mod launcher;
pub mod prompts;

pub use launcher::run_launcher;
