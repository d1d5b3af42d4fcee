// src/core/mod.rs

// Root of the `core` module: the domain layer of the tutorial, with no
// dependency on the terminal. Everything here is synchronous and total.

/// Data structures used throughout the application: the `ScanMode`
/// enumeration and the `Session` value with its transition reducer.
pub mod models;

/// Static registry of per-mode display metadata (titles, descriptions,
/// feature lists, use cases).
pub mod knowledge_base;

/// Pure derivation of rendering parameters (map style, stat bars,
/// target overlay, log window) from the current mode.
pub mod presentation;
