//! Small interactive console programs: a banking session loop, a snack
//! list builder, and number stats over a fixed count of entries.
//!
//! Each program is written against generic `BufRead`/`Write` handles so
//! the binary runs them over stdin/stdout and tests drive them with
//! in-memory buffers.

pub mod bank;
mod console;
pub mod numbers;
pub mod snacks;
