//! Verwaltung laufender und wartender Ausrichtungs-Animationen.

use super::task::{RepositionTask, TaskPhase};
use crate::core::TargetObject;
use crate::shared::OverlapPolicy;
use glam::Vec3;
use std::collections::VecDeque;

/// Ergebnis von `RepositionScheduler::submit`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Zu wenige Punkte oder keine Zielobjekte, nichts passiert
    Skipped,
    /// Animation läuft ab dem nächsten Tick
    Started,
    /// Wartet, bis die laufende Animation fertig ist
    Queued,
    /// Warteschlange deaktiviert (Länge 0), Strich verworfen
    Dropped,
}

/// Tick-getriebene Ausführung der Ausrichtungs-Animationen.
#[derive(Debug, Clone)]
pub struct RepositionScheduler {
    policy: OverlapPolicy,
    max_queued: usize,
    running: Vec<RepositionTask>,
    queued: VecDeque<Vec<Vec3>>,
}

impl RepositionScheduler {
    /// Erstellt einen leeren Scheduler.
    pub fn new(policy: OverlapPolicy, max_queued: usize) -> Self {
        Self {
            policy,
            max_queued,
            running: Vec::new(),
            queued: VecDeque::new(),
        }
    }

    /// Übergibt einen eingefrorenen Strich.
    pub fn submit(&mut self, points: Vec<Vec3>, targets: &[Box<dyn TargetObject>]) -> SubmitOutcome {
        if points.len() < 2 || targets.is_empty() {
            log::debug!(
                "Ausrichtung übersprungen: {} Punkte, {} Objekte",
                points.len(),
                targets.len()
            );
            return SubmitOutcome::Skipped;
        }

        if self.policy == OverlapPolicy::Queue && !self.running.is_empty() {
            if self.max_queued == 0 {
                log::warn!("Ausrichtung läuft noch, Strich verworfen (Warteschlange deaktiviert)");
                return SubmitOutcome::Dropped;
            }
            if self.queued.len() >= self.max_queued {
                self.queued.pop_front();
                log::warn!(
                    "Warteschlange voll ({}), ältester wartender Strich verworfen",
                    self.max_queued
                );
            }
            self.queued.push_back(points);
            log::debug!("Strich eingereiht ({} wartend)", self.queued.len());
            return SubmitOutcome::Queued;
        }

        self.start(points, targets)
    }

    /// Schreitet alle laufenden Animationen um `dt` fort.
    ///
    /// Animationen werden in Erstellungsreihenfolge ausgeführt; bei
    /// `LastWriterWins` gewinnt damit die jüngste pro Objekt.
    pub fn tick(&mut self, dt: f32, targets: &mut [Box<dyn TargetObject>]) {
        for task in &mut self.running {
            task.step(dt, targets);
        }
        self.running.retain(|task| task.phase() == TaskPhase::Running);

        if self.running.is_empty() {
            while let Some(points) = self.queued.pop_front() {
                if self.start(points, targets) == SubmitOutcome::Started {
                    break;
                }
            }
        }
    }

    fn start(&mut self, points: Vec<Vec3>, targets: &[Box<dyn TargetObject>]) -> SubmitOutcome {
        match RepositionTask::new(points, targets) {
            Some(task) => {
                log::info!(
                    "Ausrichtung gestartet: {} Objekte, {} Kurvenpunkte",
                    task.initial_positions().len(),
                    task.points().len()
                );
                self.running.push(task);
                SubmitOutcome::Started
            }
            None => SubmitOutcome::Skipped,
        }
    }

    /// Setzt die Überlappungs-Strategie und die Warteschlangen-Länge.
    ///
    /// Bereits wartende Striche bleiben eingereiht und laufen weiter
    /// nacheinander; Überzählige werden von vorne verworfen.
    pub fn configure(&mut self, policy: OverlapPolicy, max_queued: usize) {
        self.policy = policy;
        self.max_queued = max_queued;
        while self.queued.len() > max_queued {
            self.queued.pop_front();
        }
    }

    /// Aktive Strategie.
    pub fn policy(&self) -> OverlapPolicy {
        self.policy
    }

    /// Laufende Animationen.
    pub fn running(&self) -> &[RepositionTask] {
        &self.running
    }

    /// Anzahl wartender Striche.
    pub fn queued_count(&self) -> usize {
        self.queued.len()
    }

    /// Keine laufende oder wartende Animation?
    pub fn is_idle(&self) -> bool {
        self.running.is_empty() && self.queued.is_empty()
    }
}

impl Default for RepositionScheduler {
    fn default() -> Self {
        Self::new(OverlapPolicy::default(), crate::shared::options::MAX_QUEUED_STROKES)
    }
}
