//! Touch-Konfliktschutz: Mehrfinger-Gesten dürfen nicht als Strich enden.

use std::collections::HashSet;
use std::time::{Duration, Instant};

/// Reaktion auf eine Touch-Änderung.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchReaction {
    /// Nichts zu tun
    Ignore,
    /// Zweiter Finger bei angehängtem Werkzeug → abhängen + Warnung
    Suspend,
    /// Weiterer Finger während bereits abgehängt → Warnung neu starten
    RestartWarning,
    /// Höchstens ein Finger übrig und Werkzeug abgehängt → wieder anhängen
    Resume,
}

/// Verfolgt aktive Touch-Punkte und die Pinch-Warnung.
#[derive(Debug, Clone, Default)]
pub struct TouchGuard {
    active: HashSet<u64>,
    warning_until: Option<Instant>,
}

impl TouchGuard {
    pub fn new() -> Self {
        Self {
            active: HashSet::new(),
            warning_until: None,
        }
    }

    /// Anzahl gleichzeitig aufliegender Touch-Punkte.
    pub fn touch_count(&self) -> usize {
        self.active.len()
    }

    /// Registriert einen neuen Touch-Punkt.
    pub fn touch_started(&mut self, id: u64, tool_attached: bool, tool_suspended: bool) -> TouchReaction {
        self.active.insert(id);
        if self.active.len() < 2 {
            TouchReaction::Ignore
        } else if tool_attached {
            TouchReaction::Suspend
        } else if tool_suspended {
            TouchReaction::RestartWarning
        } else {
            TouchReaction::Ignore
        }
    }

    /// Entfernt einen Touch-Punkt (unbekannte IDs werden ignoriert).
    pub fn touch_ended(&mut self, id: u64, tool_suspended: bool) -> TouchReaction {
        self.active.remove(&id);
        if tool_suspended && self.active.len() <= 1 {
            TouchReaction::Resume
        } else {
            TouchReaction::Ignore
        }
    }

    /// Zeigt die Warnung (neu) an; die Anzeigedauer beginnt bei `now`.
    pub fn raise_warning(&mut self, now: Instant, duration: Duration) {
        self.warning_until = Some(now + duration);
    }

    pub fn is_warning_visible(&self) -> bool {
        self.warning_until.is_some()
    }

    /// Blendet die Warnung nach Ablauf aus. Gibt `true` zurück, wenn sie verschwand.
    pub fn expire_warning(&mut self, now: Instant) -> bool {
        match self.warning_until {
            Some(until) if now >= until => {
                self.warning_until = None;
                true
            }
            _ => false,
        }
    }

    pub fn dismiss_warning(&mut self) {
        self.warning_until = None;
    }
}
