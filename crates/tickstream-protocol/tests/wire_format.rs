// Verify the wire format matches what chart clients expect.
// These tests ensure frame compatibility is never broken.

use chrono::{TimeZone, Utc};
use tickstream_protocol::frames::{InitialFrame, Tick};

#[test]
fn live_tick_wire_shape() {
    let tick = Tick::live(101.25);
    let json = serde_json::to_string(&tick).unwrap();

    assert!(json.contains(r#""isNew":true"#));
    assert!(json.contains(r#""price":101.25"#));
    assert!(json.contains(r#""time":"#));
    // live frames carry no envelope
    assert!(!json.contains(r#""type""#));
}

#[test]
fn backfill_tick_is_not_new() {
    let time = Utc.with_ymd_and_hms(2026, 8, 5, 12, 0, 0).unwrap();
    let tick = Tick::backfill(time, 98.5);
    let json = serde_json::to_string(&tick).unwrap();

    assert!(json.contains(r#""isNew":false"#));
    assert!(json.contains("2026-08-05T12:00:00"));
}

#[test]
fn initial_frame_envelope() {
    let time = Utc.with_ymd_and_hms(2026, 8, 5, 12, 0, 0).unwrap();
    let frame = InitialFrame::new(vec![Tick::backfill(time, 99.0)]);
    let json = serde_json::to_string(&frame).unwrap();

    assert!(json.contains(r#""type":"initial""#));
    assert!(json.contains(r#""data":["#));
    assert!(json.contains(r#""isNew":false"#));
}

#[test]
fn empty_backfill_still_carries_envelope() {
    let frame = InitialFrame::new(Vec::new());
    let json = serde_json::to_string(&frame).unwrap();

    assert!(json.contains(r#""type":"initial""#));
    assert!(json.contains(r#""data":[]"#));
}

#[test]
fn tick_time_is_rfc3339() {
    let tick = Tick::live(100.0);
    let json = serde_json::to_value(&tick).unwrap();
    let time = json["time"].as_str().expect("time must be a string");

    // Chart clients feed this straight into Date parsing.
    assert!(chrono::DateTime::parse_from_rfc3339(time).is_ok());
}

#[test]
fn live_tick_parses_from_client_perspective() {
    let json = r#"{"time":"2026-08-05T12:00:01.500Z","price":100.75,"isNew":true}"#;
    let tick: Tick = serde_json::from_str(json).unwrap();

    assert!(tick.is_new);
    assert_eq!(tick.price, 100.75);
    assert_eq!(tick.time.timestamp_millis() % 1000, 500);
}
