//! Final Fragment - a single-window GPUI app that keeps a narrative
//! fragment behind a click-through intro and crossfades it into view.
//!
//! The interesting pieces are `reveal` (the intro -> revealed machine) and
//! `session` (the one-window lifecycle); everything else is presentation
//! data and glue.

pub mod config;
pub mod error;
pub mod logging;
pub mod reveal;
pub mod session;
pub mod theme;
pub mod transitions;
pub mod window;
