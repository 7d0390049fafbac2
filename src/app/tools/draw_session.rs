//! Zustandsmaschine der Zeichen-Session.
//!
//! Genau eine Zeile kann für das Freihand-Werkzeug scharf geschaltet sein.
//! Übergänge erfolgen ausschließlich über die benannten Methoden; unzulässige
//! Übergänge liefern einen `SessionError`.

use crate::core::{geo, RowId};
use glam::DVec2;

/// Zeile, an die das Zeichenwerkzeug gebunden ist (Farbe/Name als Schnappschuss).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowBinding {
    pub row_id: RowId,
    pub color: String,
    pub name: String,
}

/// Gesammelte Punkte eines laufenden Strichs (Lon/Lat).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sketch {
    points: Vec<DVec2>,
}

impl Sketch {
    fn start(at: DVec2) -> Self {
        Self { points: vec![at] }
    }

    /// Hängt einen Punkt an; direkte Wiederholungen werden übersprungen.
    fn push(&mut self, point: DVec2) {
        if self.points.last() != Some(&point) {
            self.points.push(point);
        }
    }

    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Aktuelle geodätische Fläche des (implizit geschlossenen) Strichs.
    pub fn area_m2(&self) -> f64 {
        geo::geodesic_ring_area(&self.points)
    }

    fn into_ring(self) -> Vec<DVec2> {
        self.points
    }
}

/// Live-Messanzeige während eines Strichs.
#[derive(Debug, Clone, PartialEq)]
pub struct LiveMeasurement {
    /// Aktuelle Zeigerposition (Lon/Lat)
    pub anchor: DVec2,
    pub text: String,
}

/// Phase der Zeichen-Session.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DrawPhase {
    /// Keine Zeile scharf, kein Werkzeug angehängt
    #[default]
    Idle,
    /// Werkzeug angehängt, wartet auf Strich
    Armed { binding: RowBinding },
    /// Werkzeug wegen Mehrfinger-Geste abgehängt, Bindung bleibt erhalten
    Suspended { binding: RowBinding },
    /// Zeiger gedrückt, Geometrie wächst
    Stroking { binding: RowBinding, sketch: Sketch },
}

impl DrawPhase {
    /// Kurzname für Logs und Fehlermeldungen.
    pub fn name(&self) -> &'static str {
        match self {
            DrawPhase::Idle => "Idle",
            DrawPhase::Armed { .. } => "Armed",
            DrawPhase::Suspended { .. } => "Suspended",
            DrawPhase::Stroking { .. } => "Stroking",
        }
    }

    pub fn binding(&self) -> Option<&RowBinding> {
        match self {
            DrawPhase::Idle => None,
            DrawPhase::Armed { binding }
            | DrawPhase::Suspended { binding }
            | DrawPhase::Stroking { binding, .. } => Some(binding),
        }
    }
}

/// Unzulässiger Übergang der Zeichen-Session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("Übergang '{action}' ist in Phase {phase} nicht erlaubt")]
    IllegalTransition {
        action: &'static str,
        phase: &'static str,
    },
}

/// Ergebnis von `DrawSession::arm` bzw. `disarm`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detached {
    /// Vorher gebundene Zeile
    pub binding: RowBinding,
    /// Ob dabei ein laufender Strich verworfen wurde
    pub cancelled_stroke: bool,
}

/// Zeichen-Session mit expliziter Phase.
#[derive(Debug, Clone, Default)]
pub struct DrawSession {
    phase: DrawPhase,
    /// Zählt jedes neu angehängte Werkzeug (Arm und Resume)
    tool_generation: u64,
    measurement: Option<LiveMeasurement>,
}

impl DrawSession {
    pub fn new() -> Self {
        Self {
            phase: DrawPhase::Idle,
            tool_generation: 0,
            measurement: None,
        }
    }

    pub fn phase(&self) -> &DrawPhase {
        &self.phase
    }

    pub fn binding(&self) -> Option<&RowBinding> {
        self.phase.binding()
    }

    /// Scharf geschaltete Zeile (auch während Suspended/Stroking).
    pub fn armed_row(&self) -> Option<RowId> {
        self.binding().map(|b| b.row_id)
    }

    /// Ob das Freihand-Werkzeug aktuell an der Karte hängt.
    pub fn is_tool_attached(&self) -> bool {
        matches!(
            self.phase,
            DrawPhase::Armed { .. } | DrawPhase::Stroking { .. }
        )
    }

    pub fn is_stroking(&self) -> bool {
        matches!(self.phase, DrawPhase::Stroking { .. })
    }

    pub fn is_suspended(&self) -> bool {
        matches!(self.phase, DrawPhase::Suspended { .. })
    }

    pub fn tool_generation(&self) -> u64 {
        self.tool_generation
    }

    pub fn sketch(&self) -> Option<&Sketch> {
        match &self.phase {
            DrawPhase::Stroking { sketch, .. } => Some(sketch),
            _ => None,
        }
    }

    pub fn measurement(&self) -> Option<&LiveMeasurement> {
        self.measurement.as_ref()
    }

    pub fn set_measurement(&mut self, measurement: LiveMeasurement) {
        self.measurement = Some(measurement);
    }

    fn illegal(&self, action: &'static str) -> SessionError {
        SessionError::IllegalTransition {
            action,
            phase: self.phase.name(),
        }
    }

    /// Bindet ein frisches Werkzeug an `binding`.
    ///
    /// Ein laufender Strich wird verworfen. Während einer Mehrfinger-Geste
    /// bleibt das Werkzeug abgehängt und wird erst beim Loslassen angehängt.
    /// Gibt die vorher gebundene Zeile zurück.
    pub fn arm(&mut self, binding: RowBinding) -> Option<Detached> {
        let was_suspended = self.is_suspended();
        let previous = self.detach();
        self.phase = if was_suspended {
            DrawPhase::Suspended { binding }
        } else {
            self.tool_generation += 1;
            DrawPhase::Armed { binding }
        };
        previous
    }

    /// Hängt das Werkzeug ab und kehrt nach `Idle` zurück.
    pub fn disarm(&mut self) -> Option<Detached> {
        self.detach()
    }

    fn detach(&mut self) -> Option<Detached> {
        self.measurement = None;
        match std::mem::take(&mut self.phase) {
            DrawPhase::Idle => None,
            DrawPhase::Armed { binding } | DrawPhase::Suspended { binding } => Some(Detached {
                binding,
                cancelled_stroke: false,
            }),
            DrawPhase::Stroking { binding, .. } => Some(Detached {
                binding,
                cancelled_stroke: true,
            }),
        }
    }

    /// Zeiger gedrückt: `Armed` → `Stroking`.
    pub fn begin_stroke(&mut self, at: DVec2) -> Result<(), SessionError> {
        match std::mem::take(&mut self.phase) {
            DrawPhase::Armed { binding } => {
                self.phase = DrawPhase::Stroking {
                    binding,
                    sketch: Sketch::start(at),
                };
                Ok(())
            }
            other => {
                self.phase = other;
                Err(self.illegal("begin_stroke"))
            }
        }
    }

    /// Zeiger bewegt: Punkt an den laufenden Strich anhängen.
    pub fn extend_stroke(&mut self, at: DVec2) -> Result<&Sketch, SessionError> {
        match &mut self.phase {
            DrawPhase::Stroking { sketch, .. } => {
                sketch.push(at);
                Ok(sketch)
            }
            other => Err(SessionError::IllegalTransition {
                action: "extend_stroke",
                phase: other.name(),
            }),
        }
    }

    /// Zeiger losgelassen: `Stroking` → `Armed`, liefert Bindung und Ring.
    pub fn finish_stroke(&mut self) -> Result<(RowBinding, Vec<DVec2>), SessionError> {
        match std::mem::take(&mut self.phase) {
            DrawPhase::Stroking { binding, sketch } => {
                self.measurement = None;
                self.phase = DrawPhase::Armed {
                    binding: binding.clone(),
                };
                Ok((binding, sketch.into_ring()))
            }
            other => {
                self.phase = other;
                Err(self.illegal("finish_stroke"))
            }
        }
    }

    /// Verwirft einen laufenden Strich ohne Shape (`Stroking` → `Armed`).
    pub fn cancel_stroke(&mut self) -> bool {
        match std::mem::take(&mut self.phase) {
            DrawPhase::Stroking { binding, .. } => {
                self.measurement = None;
                self.phase = DrawPhase::Armed { binding };
                true
            }
            other => {
                self.phase = other;
                false
            }
        }
    }

    /// Hängt das Werkzeug wegen einer Mehrfinger-Geste ab.
    /// Ein laufender Strich wird verworfen, die Bindung bleibt.
    pub fn suspend(&mut self) -> Result<(), SessionError> {
        match std::mem::take(&mut self.phase) {
            DrawPhase::Armed { binding } | DrawPhase::Stroking { binding, .. } => {
                self.measurement = None;
                self.phase = DrawPhase::Suspended { binding };
                Ok(())
            }
            other => {
                self.phase = other;
                Err(self.illegal("suspend"))
            }
        }
    }

    /// Hängt ein gleichwertiges Werkzeug mit derselben Bindung wieder an.
    pub fn resume(&mut self) -> Result<(), SessionError> {
        match std::mem::take(&mut self.phase) {
            DrawPhase::Suspended { binding } => {
                self.tool_generation += 1;
                self.phase = DrawPhase::Armed { binding };
                Ok(())
            }
            other => {
                self.phase = other;
                Err(self.illegal("resume"))
            }
        }
    }
}
