//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die Laufzeit-Optionen und Konstanten, die zwischen `app` und
//! `render` geteilt werden.

pub mod options;

pub use options::{DrawingOptions, OverlapPolicy};
pub use options::{REPOSITION_DURATION, SMOOTHING_BLEND};
