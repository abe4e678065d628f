//! Stroke Align Library.
//! Freihand-Striche auf einer Zeichenebene erfassen und Objekte entlang
//! der daraus gebildeten Bézier-Kurve ausrichten.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, PointerPhase, RepositionScheduler,
    StrokeCapture,
};
pub use core::{Camera3D, SceneSurfaces, SurfaceHitTest, TaggedPlane, TargetBody, TargetObject};
pub use render::{LineRenderer, PolylineMesh};
pub use shared::{DrawingOptions, OverlapPolicy};
