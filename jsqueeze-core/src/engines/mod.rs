//! This module contains the `MinificationEngine` implementations.
//!
//! Each engine lives in its own file and is declared here with
//! `pub mod <engine_name>;`.

pub mod passthrough_engine;
pub mod transducer_engine;
