//! Core types for daynotes.
//!
//! - `day_id`: the `W-MM-DD-YYYY` day identifier codec
//! - `calendar`: the note store and its on-disk file
//! - `render`: week grid and notes display

pub mod calendar;
pub mod day_id;
pub mod daynotes;
pub mod daynotes_config;
pub mod error;
pub mod render;

pub use calendar::{Calendar, DayNotes, LoadSource};
pub use day_id::{DateFields, DatePolicy, DayId, decode, decode_with, encode, encode_fields};
pub use error::{DayNotesError, DayNotesResult};
