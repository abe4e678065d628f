//! Stroke Align Demo.
//!
//! Spielt einen vorgegebenen Strich über eine Boden-Zeichenebene ab und
//! richtet eine Reihe von Objekten entlang der entstehenden Kurve aus.

use glam::{Vec2, Vec3};
use stroke_align::{
    AppController, AppIntent, AppState, Camera3D, DrawingOptions, PointerPhase, SceneSurfaces,
    TaggedPlane, TargetBody,
};

const VIEWPORT: Vec2 = Vec2::new(1280.0, 720.0);
const FRAME_DT: f32 = 1.0 / 60.0;
const MAX_FRAMES: usize = 600;
const POINTER_ID: u64 = 1;

fn main() -> anyhow::Result<()> {
    DemoRunner::run()
}

struct DemoRunner;

impl DemoRunner {
    fn run() -> anyhow::Result<()> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Stroke Align v{} startet...", env!("CARGO_PKG_VERSION"));

        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = DrawingOptions::config_path();
        let options = DrawingOptions::load_from_file(&config_path);

        let camera = Camera3D::looking_at(Vec3::new(0.0, 12.0, 0.0), Vec3::ZERO, Vec3::NEG_Z, VIEWPORT);
        let scene = SceneSurfaces::new().with_plane(TaggedPlane::ground(0.0, options.drawable_tag.clone()));

        let mut state = AppState::new(camera.clone(), options);
        for i in 0..5 {
            let x = i as f32 * 1.5 - 3.0;
            state.register_target(Box::new(TargetBody::new(Vec3::new(x, 0.5, -4.0))));
        }

        let mut controller = AppController::new();
        let stroke = Self::scripted_stroke(&camera)?;
        let last = stroke.len() - 1;
        for (i, screen_pos) in stroke.into_iter().enumerate() {
            let phase = match i {
                0 => PointerPhase::Began,
                i if i == last => PointerPhase::Ended,
                _ => PointerPhase::Moved,
            };
            controller.handle_intent(
                &mut state,
                &scene,
                AppIntent::Pointer {
                    pointer_id: POINTER_ID,
                    phase,
                    screen_pos,
                },
            );
        }
        log::info!(
            "Strich mit {} Punkten erfasst, {} Commands ausgeführt",
            state.capture.session().len(),
            state.command_log.len()
        );

        let mut frames = 0;
        while state.is_repositioning() && frames < MAX_FRAMES {
            controller.tick(&mut state, FRAME_DT);
            frames += 1;
        }
        log::info!("Ausrichtung nach {} Frames beendet", frames);

        for (i, target) in state.targets.iter().enumerate() {
            let p = target.position();
            log::info!("Objekt {}: ({:.3}, {:.3}, {:.3})", i, p.x, p.y, p.z);
        }
        Ok(())
    }

    /// Bogen über die Zeichenebene, in Bildschirm-Koordinaten.
    fn scripted_stroke(camera: &Camera3D) -> anyhow::Result<Vec<Vec2>> {
        const SAMPLES: usize = 24;
        (0..=SAMPLES)
            .map(|i| {
                let s = i as f32 / SAMPLES as f32;
                let world = Vec3::new(s * 8.0 - 4.0, 0.0, 1.0 + 2.0 * (s * std::f32::consts::PI).sin());
                camera
                    .world_to_screen(world)
                    .ok_or_else(|| anyhow::anyhow!("Strichpunkt {:?} liegt außerhalb der Kamera", world))
            })
            .collect()
    }
}
