//! Cronista - explicit-instrumentation wall-clock profiler
//!
//! Callers mark the start and end of named code regions; the library records
//! wall-clock durations, reconstructs the call-nesting structure as a tree
//! and renders two reports: a frequency-combined view that merges repeated
//! sibling invocations, and a chronological view that preserves call order.

pub mod cli;
pub mod combine;
pub mod json_output;
pub mod recorder;
pub mod region;
pub mod report;
