//! `tickstream-protocol` — wire frame types for the tick stream.
//!
//! Two frame shapes travel server → client, both as UTF-8 JSON text:
//!
//! | Frame   | Wire shape                                                   |
//! |---------|--------------------------------------------------------------|
//! | initial | `{"type":"initial","data":[{"time":…,"price":…,"isNew":false},…]}` |
//! | live    | `{"time":…,"price":…,"isNew":true}`                          |
//!
//! The initial frame is sent exactly once per connection, before any live
//! frame. Client → server frames carry no semantics and are ignored.

pub mod frames;

pub use frames::{InitialFrame, Tick};
