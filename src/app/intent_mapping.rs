//! Mapping von UI-Intents auf mutierende App-Commands.

use super::tools::RowBinding;
use super::{AppCommand, AppIntent, AppState};
use crate::core::RowId;

/// Löst Farbe und Namen einer Zeile aus dem Katalog auf.
fn resolve_binding(state: &AppState, row_id: RowId) -> Option<RowBinding> {
    let row = state.catalog.get(row_id);
    if row.is_none() {
        log::warn!("Zeile {} nicht im Katalog, Arm ignoriert", row_id);
    }
    row.map(|row| RowBinding {
        row_id,
        color: row.color.clone(),
        name: row.name.clone(),
    })
}

fn arm_commands(state: &AppState, row_id: RowId) -> Vec<AppCommand> {
    resolve_binding(state, row_id)
        .map(|binding| vec![AppCommand::ArmRow { binding }])
        .unwrap_or_default()
}

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    let map = &state.view.map;

    match intent {
        AppIntent::ArmRowRequested { row_id } => arm_commands(state, row_id),
        AppIntent::ToggleDrawingRequested { row_id } => {
            if state.armed_row_id() == Some(row_id) {
                vec![AppCommand::DisarmRow]
            } else {
                arm_commands(state, row_id)
            }
        }
        AppIntent::DisarmRequested => vec![AppCommand::DisarmRow],
        AppIntent::VisibilityChanged { row_id, visible } => {
            vec![AppCommand::SetRowVisibility { row_id, visible }]
        }
        AppIntent::RowDeleted { row_id } => vec![AppCommand::CascadeRowDeletion { row_id }],

        AppIntent::PointerPressed { pos, kind } => {
            if state.session.is_tool_attached() {
                log::trace!("Strich-Start mit {:?}", kind);
                vec![AppCommand::BeginStroke {
                    lonlat: map.screen_to_lonlat(pos),
                }]
            } else {
                Vec::new()
            }
        }
        AppIntent::PointerMoved { pos } => {
            if state.session.is_stroking() {
                vec![AppCommand::ExtendStroke {
                    lonlat: map.screen_to_lonlat(pos),
                }]
            } else {
                Vec::new()
            }
        }
        AppIntent::PointerReleased { pos } => {
            if state.session.is_stroking() {
                vec![
                    AppCommand::ExtendStroke {
                        lonlat: map.screen_to_lonlat(pos),
                    },
                    AppCommand::FinishStroke,
                ]
            } else {
                Vec::new()
            }
        }
        AppIntent::MapDragged { delta } => {
            if state.session.is_tool_attached() {
                Vec::new()
            } else {
                vec![AppCommand::PanView { delta }]
            }
        }
        AppIntent::MapClicked { pos } => vec![AppCommand::SelectAt {
            lonlat: map.screen_to_lonlat(pos),
        }],
        AppIntent::TouchStarted { id } => vec![AppCommand::RegisterTouch { id }],
        AppIntent::TouchEnded { id } => vec![AppCommand::ReleaseTouch { id }],

        AppIntent::PopupDensityChanged { value } => vec![AppCommand::SetPopupDensity { value }],
        AppIntent::PopupDescriptionChanged { text } => {
            vec![AppCommand::SetPopupDescription { text }]
        }
        AppIntent::PopupSaveRequested => vec![AppCommand::SavePopup],
        AppIntent::PopupDeleteRequested => state
            .ui
            .popup
            .as_ref()
            .map(|popup| {
                vec![AppCommand::DeleteShape {
                    shape_id: popup.shape_id,
                }]
            })
            .unwrap_or_default(),
        AppIntent::PopupCloseRequested => vec![AppCommand::ClearSelection],

        AppIntent::DeleteShapeRequested { shape_id } => vec![AppCommand::DeleteShape { shape_id }],
        AppIntent::ClearRowRequested { row_id } => vec![AppCommand::ClearRow { row_id }],
        AppIntent::ClearAllRequested => vec![AppCommand::ClearAll],
        AppIntent::FinishSessionRequested => vec![AppCommand::FinishSession],
        AppIntent::JumpToShapeRequested { shape_id } => match state.store.get(shape_id) {
            Some(shape) => vec![
                AppCommand::SetRowVisibility {
                    row_id: shape.row_id(),
                    visible: true,
                },
                AppCommand::FitToShape { shape_id },
                AppCommand::SelectShape { shape_id },
            ],
            None => Vec::new(),
        },
        AppIntent::ShowLabelsToggled => vec![AppCommand::ToggleLabels],

        AppIntent::ZoomInRequested => vec![AppCommand::ZoomIn],
        AppIntent::ZoomOutRequested => vec![AppCommand::ZoomOut],
        AppIntent::ScrollZoom { delta, focus } => vec![AppCommand::ZoomTowards { delta, focus }],
        AppIntent::ResetViewRequested => vec![AppCommand::ResetView],
        AppIntent::FitWorldRequested => vec![AppCommand::FitWorld],
        AppIntent::ViewportResized { size } => {
            if map.viewport_size == size {
                Vec::new()
            } else {
                vec![AppCommand::SetViewportSize { size }]
            }
        }

        AppIntent::FrameTick { now } => {
            if state.touch.is_warning_visible() {
                vec![AppCommand::ExpirePinchWarning { now }]
            } else {
                Vec::new()
            }
        }
        AppIntent::PinchWarningDismissed => vec![AppCommand::DismissPinchWarning],
    }
}
