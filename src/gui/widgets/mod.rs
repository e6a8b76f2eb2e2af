//! Reusable UI widgets.

pub mod qr_viewer;

pub use qr_viewer::QrViewer;
