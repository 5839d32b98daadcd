//! Severity classification for environmental readings.
//!
//! Every scale is an ordered, data-driven table rather than a chain of
//! conditionals, so each can be audited and tested on its own. All
//! classifiers are total: missing, non-finite or unrecognised input maps to
//! a gray fallback descriptor instead of panicking.
//!
//! - `descriptor`: [`SeverityDescriptor`] plus the table types
//! - `scales`: fire risk, UV, drought (PDSI), seismic magnitude, water
//!   quality and temperature bands
//! - `display`: warning levels and the icon/format helpers used when
//!   rendering

pub mod descriptor;
pub mod display;
pub mod scales;

pub use descriptor::{Band, ColorToken, LabelTable, LevelTable, SeverityDescriptor, ThresholdTable};
