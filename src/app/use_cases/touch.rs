//! Use-Cases des Touch-Konfliktschutzes.

use crate::app::tools::{SessionError, TouchReaction};
use crate::app::AppState;
use std::time::Instant;

/// Registriert einen Touch-Punkt; ab zwei Fingern wird das Werkzeug abgehängt.
pub fn register_touch(state: &mut AppState, id: u64) -> Result<(), SessionError> {
    let reaction = state.touch.touch_started(
        id,
        state.session.is_tool_attached(),
        state.session.is_suspended(),
    );

    match reaction {
        TouchReaction::Suspend => {
            state.session.suspend()?;
            raise_warning(state);
            log::info!(
                "Mehrfinger-Geste erkannt ({} Punkte), Zeichnen pausiert",
                state.touch.touch_count()
            );
        }
        TouchReaction::RestartWarning => raise_warning(state),
        TouchReaction::Ignore | TouchReaction::Resume => {}
    }
    Ok(())
}

/// Gibt einen Touch-Punkt frei; bei höchstens einem Finger wird das Werkzeug wieder angehängt.
pub fn release_touch(state: &mut AppState, id: u64) -> Result<(), SessionError> {
    if state.touch.touch_ended(id, state.session.is_suspended()) == TouchReaction::Resume {
        state.session.resume()?;
        log::info!("Mehrfinger-Geste beendet, Zeichnen fortgesetzt");
    }
    Ok(())
}

fn raise_warning(state: &mut AppState) {
    let duration = state.options.pinch_warning_duration();
    state.touch.raise_warning(Instant::now(), duration);
}

pub fn expire_warning(state: &mut AppState, now: Instant) {
    if state.touch.expire_warning(now) {
        log::debug!("Pinch-Warnung ausgeblendet");
    }
}

pub fn dismiss_warning(state: &mut AppState) {
    state.touch.dismiss_warning();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tools::RowBinding;
    use std::time::Duration;

    fn armed_state() -> AppState {
        let mut state = AppState::new();
        state.session.arm(RowBinding {
            row_id: 1,
            color: "#FF0000".into(),
            name: "Coral Reef".into(),
        });
        state
    }

    #[test]
    fn pinch_suspends_and_release_resumes() {
        let mut state = armed_state();
        let generation = state.session.tool_generation();

        register_touch(&mut state, 1).expect("Touch");
        assert!(state.session.is_tool_attached());

        register_touch(&mut state, 2).expect("Touch");
        assert!(state.session.is_suspended());
        assert!(state.touch.is_warning_visible());

        release_touch(&mut state, 2).expect("Touch");
        assert!(state.session.is_tool_attached());
        assert_eq!(state.armed_row_id(), Some(1));
        assert_eq!(state.session.tool_generation(), generation + 1);
    }

    #[test]
    fn pinch_without_tool_raises_no_warning() {
        let mut state = AppState::new();

        register_touch(&mut state, 1).expect("Touch");
        register_touch(&mut state, 2).expect("Touch");

        assert!(!state.touch.is_warning_visible());
    }

    #[test]
    fn warning_expires_after_duration() {
        let mut state = armed_state();
        register_touch(&mut state, 1).expect("Touch");
        register_touch(&mut state, 2).expect("Touch");

        expire_warning(&mut state, Instant::now());
        assert!(state.touch.is_warning_visible());

        let later =
            Instant::now() + state.options.pinch_warning_duration() + Duration::from_millis(10);
        expire_warning(&mut state, later);
        assert!(!state.touch.is_warning_visible());
    }
}
