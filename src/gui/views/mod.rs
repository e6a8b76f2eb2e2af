//! View modules for the GUI.
//!
//! Each view renders on `&mut GuiApp` from the main update loop.

pub mod transactions;
