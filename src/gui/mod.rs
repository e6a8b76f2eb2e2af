//! GUI module for the Pixdash application.
//!
//! The interface is built with egui/eframe.
//!
//! ## Module Structure
//!
//! - `app` - Main GuiApp struct, update loop, and `launch`
//! - `fetch` - Background transactions fetch polled from the GUI thread
//! - `notifications` - Notification feed entries
//! - `theme` - Centralized theme and styling (AppTheme)
//! - `views` - View rendering (the transactions surface)
//! - `widgets` - Reusable widgets (QrViewer)

mod app;
pub mod fetch;
pub mod notifications;
pub mod theme;
pub mod views;
pub mod widgets;

pub use app::{launch, GuiApp};
pub use fetch::FetchJob;
pub use notifications::NotificationEntry;
pub use theme::{configure_style, AppTheme};
pub use widgets::QrViewer;
