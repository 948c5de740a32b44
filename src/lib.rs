//! conversion-chart: conversion-rate comparison chart core.
//!
//! Turns per-day visit/conversion counters of experiment variations into
//! plotted series, tracks which variations are visible and how they are drawn,
//! and exports snapshots. Drawing itself happens behind the `Renderer` and
//! `SnapshotSurface` traits.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartSession, ChartSessionConfig};
pub use error::{ChartError, ChartResult};
