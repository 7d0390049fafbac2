use ecomap_annotator::{AppCommand, AppController, AppIntent, AppState, PointerKind};
use ecomap_annotator::{CatalogRow, DrawPhase, RowCatalog, RowCategory};
use glam::Vec2;

fn make_test_session() -> AppState {
    let mut state = AppState::new();
    state.catalog = RowCatalog::from_rows([
        CatalogRow {
            id: 1,
            name: "Coral Reef".into(),
            color: "#FF0000".into(),
            category: RowCategory::Feature,
        },
        CatalogRow {
            id: 2,
            name: "Seagrass".into(),
            color: "#00AA00".into(),
            category: RowCategory::Feature,
        },
        CatalogRow {
            id: 10,
            name: "Trawling".into(),
            color: "#D2691E".into(),
            category: RowCategory::Activity,
        },
    ]);
    state
}

fn send(controller: &mut AppController, state: &mut AppState, intent: AppIntent) {
    controller
        .handle_intent(state, intent)
        .expect("Intent sollte ohne Fehler durchlaufen");
}

/// Zeichnet ein Dreieck (100 px Basis) mit der linken unteren Ecke bei `origin`.
fn draw_triangle(controller: &mut AppController, state: &mut AppState, origin: Vec2) {
    send(
        controller,
        state,
        AppIntent::PointerPressed {
            pos: origin,
            kind: PointerKind::Mouse,
        },
    );
    send(
        controller,
        state,
        AppIntent::PointerMoved {
            pos: origin + Vec2::new(100.0, 0.0),
        },
    );
    send(
        controller,
        state,
        AppIntent::PointerReleased {
            pos: origin + Vec2::new(50.0, -80.0),
        },
    );
}

#[test]
fn test_arm_requested_logs_arm_command_with_catalog_binding() {
    let mut controller = AppController::new();
    let mut state = make_test_session();

    send(
        &mut controller,
        &mut state,
        AppIntent::ArmRowRequested { row_id: 1 },
    );

    assert_eq!(state.armed_row_id(), Some(1));
    assert!(state.visibility.is_visible(1));

    let last = state
        .command_log
        .entries()
        .last()
        .expect("Es sollte ein Command geloggt sein");

    match last {
        AppCommand::ArmRow { binding } => {
            assert_eq!(binding.row_id, 1);
            assert_eq!(binding.color, "#FF0000");
            assert_eq!(binding.name, "Coral Reef");
        }
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_arm_unknown_row_is_ignored_without_command() {
    let mut controller = AppController::new();
    let mut state = make_test_session();

    send(
        &mut controller,
        &mut state,
        AppIntent::ArmRowRequested { row_id: 99 },
    );

    assert!(state.command_log.is_empty());
    assert_eq!(state.armed_row_id(), None);
}

#[test]
fn test_triangle_on_armed_row_creates_selected_shape() {
    let mut controller = AppController::new();
    let mut state = make_test_session();

    send(
        &mut controller,
        &mut state,
        AppIntent::ArmRowRequested { row_id: 1 },
    );
    draw_triangle(&mut controller, &mut state, Vec2::new(350.0, 300.0));

    assert_eq!(state.store.len(), 1);
    let shape = &state.store.shapes()[0];
    assert_eq!(shape.row_id(), 1);
    assert_eq!(shape.drawing_number(), 1);
    assert_eq!(shape.color(), "#FF0000");
    assert_eq!(shape.name(), "Coral Reef");
    assert_eq!(shape.density(), 50);
    assert_eq!(shape.description(), "");
    assert!(
        shape.area_label().ends_with("m²"),
        "Flächen-Label sollte eine Einheit tragen: {}",
        shape.area_label()
    );
    assert!(state.store.is_rendered(shape.uid()));

    // Frisch gezeichnetes Shape ist selektiert und das Popup offen
    assert_eq!(state.selected_shape_id(), Some(shape.uid()));
    assert!(state.ui.popup.is_some());

    // Werkzeug bleibt für den nächsten Strich scharf
    assert!(matches!(state.session.phase(), DrawPhase::Armed { .. }));
    assert!(state.session.measurement().is_none());

    let last = state
        .command_log
        .entries()
        .last()
        .expect("Es sollte ein Command geloggt sein");
    assert!(matches!(last, AppCommand::FinishStroke));
}

#[test]
fn test_live_measurement_is_shown_while_stroking() {
    let mut controller = AppController::new();
    let mut state = make_test_session();

    send(
        &mut controller,
        &mut state,
        AppIntent::ArmRowRequested { row_id: 1 },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::PointerPressed {
            pos: Vec2::new(300.0, 300.0),
            kind: PointerKind::Pen,
        },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::PointerMoved {
            pos: Vec2::new(400.0, 300.0),
        },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::PointerMoved {
            pos: Vec2::new(350.0, 220.0),
        },
    );

    assert!(state.session.is_stroking());
    let measurement = state
        .session
        .measurement()
        .expect("Während des Strichs sollte eine Messung existieren");
    assert!(measurement.text.contains("m²"));

    let scene = controller.build_render_scene(&state);
    assert!(scene.sketch.is_some());
    assert!(scene.measurement.is_some());
}

#[test]
fn test_deleting_first_of_three_renumbers_remaining_shapes() {
    let mut controller = AppController::new();
    let mut state = make_test_session();

    send(
        &mut controller,
        &mut state,
        AppIntent::ArmRowRequested { row_id: 1 },
    );
    for offset in [0.0, 150.0, 300.0] {
        draw_triangle(
            &mut controller,
            &mut state,
            Vec2::new(100.0 + offset, 400.0),
        );
    }
    assert_eq!(state.shape_count(1), 3);

    let first = state.row_snapshot(1)[0].uid;
    send(
        &mut controller,
        &mut state,
        AppIntent::DeleteShapeRequested { shape_id: first },
    );

    let numbers: Vec<u32> = state
        .row_snapshot(1)
        .iter()
        .map(|summary| summary.drawing_number)
        .collect();
    assert_eq!(numbers, vec![1, 2]);
    assert!(state
        .take_notifications()
        .iter()
        .any(|message| message == "Drawing deleted"));
}

#[test]
fn test_arming_other_row_mid_stroke_discards_stroke() {
    let mut controller = AppController::new();
    let mut state = make_test_session();

    send(
        &mut controller,
        &mut state,
        AppIntent::ArmRowRequested { row_id: 1 },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::PointerPressed {
            pos: Vec2::new(300.0, 300.0),
            kind: PointerKind::Mouse,
        },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::PointerMoved {
            pos: Vec2::new(380.0, 310.0),
        },
    );

    send(
        &mut controller,
        &mut state,
        AppIntent::ArmRowRequested { row_id: 2 },
    );

    assert!(state.store.is_empty());
    assert_eq!(state.armed_row_id(), Some(2));
    assert!(!state.session.is_stroking());
    assert!(state.session.measurement().is_none());
    // Leere Vorgänger-Zeile wird ausgeblendet
    assert!(!state.visibility.is_visible(1));
    assert!(state.visibility.is_visible(2));
}

#[test]
fn test_disarm_mid_stroke_never_adds_shape() {
    let mut controller = AppController::new();
    let mut state = make_test_session();

    send(
        &mut controller,
        &mut state,
        AppIntent::ArmRowRequested { row_id: 1 },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::PointerPressed {
            pos: Vec2::new(300.0, 300.0),
            kind: PointerKind::Touch,
        },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::PointerMoved {
            pos: Vec2::new(360.0, 280.0),
        },
    );
    send(&mut controller, &mut state, AppIntent::DisarmRequested);

    // Loslassen nach dem Disarm darf kein Shape mehr erzeugen
    send(
        &mut controller,
        &mut state,
        AppIntent::PointerReleased {
            pos: Vec2::new(330.0, 220.0),
        },
    );

    assert!(state.store.is_empty());
    assert!(matches!(state.session.phase(), DrawPhase::Idle));
    assert!(!state.visibility.is_visible(1));
}

#[test]
fn test_toggle_drawing_on_armed_row_keeps_row_with_shapes_visible() {
    let mut controller = AppController::new();
    let mut state = make_test_session();

    send(
        &mut controller,
        &mut state,
        AppIntent::ToggleDrawingRequested { row_id: 1 },
    );
    draw_triangle(&mut controller, &mut state, Vec2::new(300.0, 300.0));
    send(
        &mut controller,
        &mut state,
        AppIntent::ToggleDrawingRequested { row_id: 1 },
    );

    assert_eq!(state.armed_row_id(), None);
    assert!(state.visibility.is_visible(1));
    assert_eq!(state.store.rendered_count(1), 1);

    let last = state
        .command_log
        .entries()
        .last()
        .expect("Es sollte ein Command geloggt sein");
    assert!(matches!(last, AppCommand::DisarmRow));
}

#[test]
fn test_drag_pans_only_without_attached_tool() {
    let mut controller = AppController::new();
    let mut state = make_test_session();
    let center_before = state.view.map.center;

    send(
        &mut controller,
        &mut state,
        AppIntent::MapDragged {
            delta: Vec2::new(40.0, 0.0),
        },
    );
    let center_after_pan = state.view.map.center;
    assert!(center_after_pan.x < center_before.x);

    send(
        &mut controller,
        &mut state,
        AppIntent::ArmRowRequested { row_id: 1 },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::MapDragged {
            delta: Vec2::new(40.0, 0.0),
        },
    );
    assert_eq!(state.view.map.center, center_after_pan);
}

#[test]
fn test_viewport_resize_is_logged_only_on_change() {
    let mut controller = AppController::new();
    let mut state = make_test_session();
    let size = Vec2::new(1280.0, 720.0);

    send(
        &mut controller,
        &mut state,
        AppIntent::ViewportResized { size },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::ViewportResized { size },
    );

    assert_eq!(state.view.map.viewport_size, size);
    assert_eq!(state.command_log.len(), 1);
}

#[test]
fn test_zoom_requests_respect_limits() {
    let mut controller = AppController::new();
    let mut state = make_test_session();

    for _ in 0..100 {
        send(&mut controller, &mut state, AppIntent::ZoomInRequested);
    }
    assert!(state.view.map.zoom <= state.options.zoom_max + 1e-9);

    send(&mut controller, &mut state, AppIntent::ResetViewRequested);
    assert!((state.view.map.zoom - state.options.initial_zoom).abs() < 1e-9);
}

#[test]
fn test_drawing_on_hidden_armed_row_shows_and_selects_new_shape() {
    let mut controller = AppController::new();
    let mut state = make_test_session();

    send(
        &mut controller,
        &mut state,
        AppIntent::ArmRowRequested { row_id: 1 },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::VisibilityChanged {
            row_id: 1,
            visible: false,
        },
    );
    assert_eq!(state.armed_row_id(), Some(1));

    draw_triangle(&mut controller, &mut state, Vec2::new(350.0, 300.0));

    assert_eq!(state.store.len(), 1);
    let uid = state.store.shapes()[0].uid();
    assert!(state.visibility.is_visible(1));
    assert!(state.store.is_rendered(uid));
    assert_eq!(state.store.rendered_count(1), 1);
    assert_eq!(state.selected_shape_id(), Some(uid));
    assert_eq!(state.ui.popup.as_ref().map(|popup| popup.shape_id), Some(uid));
    assert_eq!(controller.build_render_scene(&state).shapes.len(), 1);
}

#[test]
fn test_fit_world_requested_zooms_out_to_whole_world() {
    let mut controller = AppController::new();
    let mut state = make_test_session();
    send(
        &mut controller,
        &mut state,
        AppIntent::ViewportResized {
            size: Vec2::new(800.0, 600.0),
        },
    );

    send(&mut controller, &mut state, AppIntent::FitWorldRequested);

    assert!(state.view.map.center.x.abs() < 1e-9);
    assert!(state.view.map.center.y.abs() < 1e-6);
    assert!(state.view.map.zoom < state.options.initial_zoom);

    let last = state
        .command_log
        .entries()
        .last()
        .expect("Es sollte ein Command geloggt sein");
    assert!(matches!(last, AppCommand::FitWorld));
}
