//! Schedule analysis.
//!
//! A read-only pass over a planning grid that reports overlapping shifts,
//! weekly totals off their contract baseline and understaffed windows.
//!
//! # Modules
//!
//! - **`config`**: opening hours and minimum staff
//! - **`presence`**: per-day bucketed occupancy
//! - **`analyzer`**: the pass itself and its report

mod analyzer;
mod config;
mod presence;

pub use analyzer::{analyze, AnalysisReport, ScheduleAnalyzer};
pub use config::{AnalyzerConfig, OpeningHours};
pub use presence::PresenceHistogram;
