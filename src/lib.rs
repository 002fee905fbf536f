// THEORY:
// This file is the main entry point for the `descratch` library crate.
// It follows the standard Rust convention of using `lib.rs` to define the public
// API that will be exposed to external consumers (like the `descratch` binary).
//
// The primary goal is to export the `Repairer` and its associated data
// structures (`PixelGrid`, `RepairError`, etc.) as the clean, high-level
// interface for the entire repair engine. The low-level internal modules
// (`core_modules`) hold the color model, the grid accessor, and the
// ring-search machinery that the repair drivers are built from.

pub mod core_modules;
pub mod parallel_pipeline;
pub mod pipeline;
