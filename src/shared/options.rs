//! Zentrale Konfiguration für stroke-align.
//!
//! `DrawingOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::DRAW_PLANE_TAG;
use serde::{Deserialize, Serialize};

// ── Strich-Erfassung ───────────────────────────────────────────────

/// Blend-Faktor für die Mittelpunkt-Glättung der Live-Linie.
pub const SMOOTHING_BLEND: f32 = 0.5;

// ── Live-Linie ─────────────────────────────────────────────────────

/// Linienbreite in Welteinheiten.
pub const LINE_WIDTH_WORLD: f32 = 0.1;
/// Standard-Farbe der Live-Linie (RGBA: Weiß).
pub const LINE_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

// ── Ausrichtungs-Animation ─────────────────────────────────────────

/// Feste Dauer der Ausrichtungs-Animation (Zeiteinheiten).
pub const REPOSITION_DURATION: f32 = 1.0;
/// Maximale Anzahl wartender Striche bei `OverlapPolicy::Queue`.
pub const MAX_QUEUED_STROKES: usize = 4;

/// Verhalten wenn ein neuer Strich endet, während noch eine Animation läuft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlapPolicy {
    /// Neue Animation wartet, bis die laufende fertig ist
    #[default]
    Queue,
    /// Alle Animationen laufen parallel, die jüngste schreibt zuletzt
    LastWriterWins,
}

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Optionen.
/// Wird als `stroke_align.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawingOptions {
    // ── Zeichenebene ────────────────────────────────────────────
    /// Tag der Oberfläche, auf der gezeichnet werden darf
    pub drawable_tag: String,

    // ── Live-Linie ──────────────────────────────────────────────
    /// Linienbreite in Welteinheiten
    pub line_width_world: f32,
    /// Farbe der Live-Linie (RGBA)
    pub line_color: [f32; 4],

    // ── Animation ───────────────────────────────────────────────
    /// Umgang mit überlappenden Ausrichtungs-Animationen
    #[serde(default)]
    pub overlap_policy: OverlapPolicy,
    /// Maximale Warteschlangen-Länge bei `OverlapPolicy::Queue`
    #[serde(default = "default_max_queued_strokes")]
    pub max_queued_strokes: usize,
}

fn default_max_queued_strokes() -> usize {
    MAX_QUEUED_STROKES
}

impl Default for DrawingOptions {
    fn default() -> Self {
        Self {
            drawable_tag: DRAW_PLANE_TAG.to_string(),
            line_width_world: LINE_WIDTH_WORLD,
            line_color: LINE_COLOR,
            overlap_policy: OverlapPolicy::Queue,
            max_queued_strokes: MAX_QUEUED_STROKES,
        }
    }
}

impl DrawingOptions {
    /// Lädt Optionen aus einer TOML-Datei. Fehlt die Datei oder ist sie
    /// fehlerhaft, werden Standardwerte verwendet.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("stroke_align"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("stroke_align.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("stroke_align_{}_{}.toml", name, std::process::id()))
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = temp_path("roundtrip");
        let options = DrawingOptions {
            drawable_tag: "Whiteboard".to_string(),
            line_width_world: 0.25,
            overlap_policy: OverlapPolicy::LastWriterWins,
            ..DrawingOptions::default()
        };

        options.save_to_file(&path).expect("Speichern sollte klappen");
        let loaded = DrawingOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, options);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let path = temp_path("does_not_exist");
        let loaded = DrawingOptions::load_from_file(&path);
        assert_eq!(loaded, DrawingOptions::default());
    }

    #[test]
    fn test_broken_file_falls_back_to_defaults() {
        let path = temp_path("broken");
        std::fs::write(&path, "drawable_tag = [nicht gültig").expect("Schreiben");
        let loaded = DrawingOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, DrawingOptions::default());
    }

    #[test]
    fn test_missing_optional_fields_use_defaults() {
        let content = r#"
            drawable_tag = "DrawPlane"
            line_width_world = 0.1
            line_color = [1.0, 1.0, 1.0, 1.0]
        "#;
        let opts: DrawingOptions = toml::from_str(content).expect("TOML gültig");
        assert_eq!(opts.overlap_policy, OverlapPolicy::Queue);
        assert_eq!(opts.max_queued_strokes, MAX_QUEUED_STROKES);
    }

    #[test]
    fn test_overlap_policy_serializes_snake_case() {
        let opts = DrawingOptions {
            overlap_policy: OverlapPolicy::LastWriterWins,
            ..DrawingOptions::default()
        };
        let content = toml::to_string_pretty(&opts).expect("serialisierbar");
        assert!(content.contains("last_writer_wins"));
    }
}
