//! Core-Domänentypen: Kamera, Oberflächen-Treffertest, Zielobjekte, Kurven-Geometrie.

pub mod camera;
pub mod curve;
pub mod surface;
pub mod target;

pub use camera::{Camera3D, Ray};
pub use curve::{de_casteljau, parameter_for_index, project_on_plane};
pub use surface::{SceneSurfaces, SurfaceHit, SurfaceHitTest, TaggedPlane, DRAW_PLANE_TAG};
pub use target::{TargetBody, TargetObject};
