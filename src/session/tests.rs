use super::*;
use crate::draw::{BLACK, BLUE, Point, RED, Rgb, WHITE};
use crate::input::{DisplayRect, InputEvent, InputState, MouseButton, Tool};
use std::time::Duration;

fn dummy_session(buffer: PixelBuffer, tool: Tool) -> (Session, CollectingSink) {
    let sink = CollectingSink::new();
    let input = InputState::with_defaults(tool, Duration::from_millis(300));
    let session = Session::with_buffer(buffer, input, Box::new(sink.clone()));
    (session, sink)
}

fn press(x: f64, y: f64, display: DisplayRect, at_ms: u64) -> InputEvent {
    InputEvent::Press {
        button: MouseButton::Left,
        client_x: x,
        client_y: y,
        display,
        timestamp: Duration::from_millis(at_ms),
    }
}

fn motion(x: f64, y: f64, display: DisplayRect) -> InputEvent {
    InputEvent::Motion {
        client_x: x,
        client_y: y,
        display,
    }
}

fn release(x: f64, y: f64, display: DisplayRect) -> InputEvent {
    InputEvent::Release {
        button: MouseButton::Left,
        client_x: x,
        client_y: y,
        display,
    }
}

struct FailingSink;

impl ResultSink for FailingSink {
    fn deliver(&mut self, _report: &ColorReport) -> Result<(), SinkError> {
        Err(SinkError::Io(std::io::Error::other("sink offline")))
    }
}

#[test]
fn rectangle_drag_reports_average() {
    let buffer = PixelBuffer::filled(4, 4, RED);
    let display = DisplayRect::identity(4, 4);
    let (mut session, sink) = dummy_session(buffer, Tool::Rectangle);

    assert!(session.handle_event(&press(0.0, 0.0, display, 0)).is_none());
    let report = session.handle_event(&release(2.0, 2.0, display)).cloned();

    let report = report.expect("rectangle should produce a report");
    assert_eq!(report.color, RED);
    assert_eq!(report.pixel_count, 4);
    assert_eq!(sink.len(), 1);
    assert_eq!(session.last_report(), Some(&report));
}

#[test]
fn scaled_display_maps_into_buffer_space() {
    // Left half black, right half white; shown at 2x
    let buffer = PixelBuffer::from_fn(4, 4, |x, _| if x < 2 { BLACK } else { WHITE });
    let display = DisplayRect::new(100.0, 50.0, 8.0, 8.0);
    let (mut session, sink) = dummy_session(buffer, Tool::Rectangle);

    // Client (104, 50) -> buffer (2, 0); client (108, 58) -> buffer (4, 4)
    session.handle_event(&press(104.0, 50.0, display, 0));
    session.handle_event(&release(108.0, 58.0, display));

    let reports = sink.reports();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].color, WHITE);
    assert_eq!(reports[0].pixel_count, 8);
}

#[test]
fn freehand_stroke_reports_enclosed_pixels() {
    let buffer = PixelBuffer::filled(10, 10, BLUE);
    let display = DisplayRect::identity(10, 10);
    let (mut session, sink) = dummy_session(buffer, Tool::Freehand);

    session.handle_event(&press(1.0, 1.0, display, 0));
    session.handle_event(&motion(8.0, 1.0, display));
    session.handle_event(&motion(8.0, 8.0, display));
    session.handle_event(&motion(1.0, 8.0, display));
    let report = session.handle_event(&release(1.0, 8.0, display)).cloned();

    assert_eq!(report.map(|r| r.color), Some(BLUE));
    assert_eq!(sink.len(), 1);
}

#[test]
fn degenerate_selection_keeps_previous_report() {
    let buffer = PixelBuffer::filled(6, 6, RED);
    let display = DisplayRect::identity(6, 6);
    let (mut session, sink) = dummy_session(buffer, Tool::Rectangle);

    session.handle_event(&press(0.0, 0.0, display, 0));
    session.handle_event(&release(3.0, 3.0, display));
    let first = session.last_report().cloned();
    assert!(first.is_some());

    // Zero-width rectangle
    session.handle_event(&press(4.0, 0.0, display, 10));
    assert!(session.handle_event(&release(4.5, 5.0, display)).is_none());

    // Two-point polygon submitted for completion
    session.handle_event(&InputEvent::SetTool(Tool::Polygon));
    session.handle_event(&press(0.0, 0.0, display, 1000));
    session.handle_event(&press(5.0, 5.0, display, 2000));
    assert!(session.handle_event(&press(5.0, 5.0, display, 2100)).is_none());

    assert_eq!(session.last_report().cloned(), first);
    assert_eq!(sink.len(), 1);
}

#[test]
fn selection_outside_buffer_is_a_no_op() {
    let buffer = PixelBuffer::filled(4, 4, RED);
    let display = DisplayRect::identity(4, 4);
    let (mut session, sink) = dummy_session(buffer, Tool::Circle);

    session.handle_event(&press(40.0, 40.0, display, 0));
    assert!(session.handle_event(&release(43.0, 40.0, display)).is_none());
    assert!(sink.is_empty());
}

#[test]
fn clear_discards_gesture_and_result() {
    let buffer = PixelBuffer::filled(4, 4, RED);
    let display = DisplayRect::identity(4, 4);
    let (mut session, _sink) = dummy_session(buffer, Tool::Rectangle);

    session.handle_event(&press(0.0, 0.0, display, 0));
    session.handle_event(&release(2.0, 2.0, display));
    assert!(session.last_report().is_some());

    session.handle_event(&press(0.0, 0.0, display, 10));
    session.handle_event(&InputEvent::Clear);
    assert!(session.last_report().is_none());
    assert!(session.input().is_idle());
    assert!(session.handle_event(&release(3.0, 3.0, display)).is_none());
}

#[test]
fn pointer_events_without_image_are_ignored() {
    let sink = CollectingSink::new();
    let mut session = Session::new(InputState::default(), Box::new(sink.clone()));
    let display = DisplayRect::identity(4, 4);

    session.handle_event(&InputEvent::SetTool(Tool::Rectangle));
    session.handle_event(&press(0.0, 0.0, display, 0));
    assert!(session.handle_event(&release(2.0, 2.0, display)).is_none());
    assert!(session.input().is_idle());
    assert_eq!(session.input().tool(), Tool::Rectangle);
    assert!(sink.is_empty());
}

#[test]
fn loading_new_buffer_resets_selection_state() {
    let (mut session, _sink) = dummy_session(PixelBuffer::filled(4, 4, RED), Tool::Polygon);
    let display = DisplayRect::identity(4, 4);
    session.handle_event(&press(0.0, 0.0, display, 0));
    session.analyze(&Region::rectangle(Point::new(0.0, 0.0), Point::new(1.0, 1.0)));

    session.load_buffer(PixelBuffer::filled(2, 2, BLUE));
    assert!(session.input().pending_points().is_empty());
    assert!(session.last_report().is_none());
    assert_eq!(session.input().tool(), Tool::Polygon);
    assert_eq!(session.buffer().map(|b| b.width()), Some(2));
}

#[test]
fn sink_failure_does_not_drop_result() {
    let input = InputState::with_defaults(Tool::Rectangle, Duration::from_millis(300));
    let mut session = Session::with_buffer(
        PixelBuffer::filled(3, 3, Rgb::new(10, 20, 30)),
        input,
        Box::new(FailingSink),
    );

    let region = Region::rectangle(Point::new(0.0, 0.0), Point::new(3.0, 3.0));
    let report = session.analyze(&region).cloned();
    assert_eq!(report.map(|r| r.hex), Some("#0a141e".to_string()));
    assert!(session.last_report().is_some());
}
