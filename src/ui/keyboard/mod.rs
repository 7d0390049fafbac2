//! Keyboard-Shortcuts für die Karte.
//!
//! Verarbeitet globale Tasten und mappt sie auf `AppIntent`s.

use crate::app::AppIntent;

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
pub(super) fn collect_keyboard_intents(
    ui: &egui::Ui,
    popup_open: bool,
    drawing_armed: bool,
) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let key_escape_pressed = ui.input(|i| i.key_pressed(egui::Key::Escape));
    if key_escape_pressed {
        if popup_open {
            // Popup schließen verwirft den Entwurf
            events.push(AppIntent::PopupCloseRequested);
        } else if drawing_armed {
            events.push(AppIntent::DisarmRequested);
        }
    }

    // Texteingabe im Popup hat Vorrang vor Buchstaben-Shortcuts
    if ui.memory(|m| m.focused().is_some()) {
        return events;
    }

    let (key_plus, key_minus, key_zero, key_l) = ui.input(|i| {
        (
            i.key_pressed(egui::Key::Plus) || i.key_pressed(egui::Key::Equals),
            i.key_pressed(egui::Key::Minus),
            i.key_pressed(egui::Key::Num0),
            i.key_pressed(egui::Key::L),
        )
    });

    if key_plus {
        events.push(AppIntent::ZoomInRequested);
    }
    if key_minus {
        events.push(AppIntent::ZoomOutRequested);
    }
    if key_zero {
        events.push(AppIntent::ResetViewRequested);
    }
    if key_l {
        events.push(AppIntent::ShowLabelsToggled);
    }

    events
}
