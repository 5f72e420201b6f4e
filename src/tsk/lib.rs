//! # Tsk Architecture
//!
//! Tsk is a **UI-agnostic task-tracking library**. The CLI binary is one
//! client of it, not the application itself.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs, wired by main.rs)                      │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Report Layer (report.rs)                                   │
//! │  - Assembles counts, breakdowns, listings as plain data     │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (model.rs, manager.rs, query.rs)                      │
//! │  - Record shapes, the generic collection manager, and the   │
//! │    free filter/sort utilities                               │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `report.rs` inward, code takes regular Rust arguments, returns
//! regular Rust types, **never** writes to stdout/stderr, and **never**
//! calls `std::process::exit`. The same core could serve a TUI or a web
//! handler unchanged.
//!
//! ## The Record Shapes
//!
//! Three structurally independent shapes share the base attribute set:
//! plain [`model::Task`], [`model::PriorityTask`], and
//! [`model::RecurringTask`]. They are tied together by the
//! [`model::TaskRecord`] accessor trait rather than a hierarchy, which is
//! what lets [`manager::TaskManager`] and the [`query`] utilities stay
//! generic without runtime type inspection.
//!
//! ## Error Surface
//!
//! The manager and query layers are total: operations on absent ids are
//! silent no-ops, never errors. The only fallible edges are reading the
//! tasks document and the config file, and the CLI degrades both to
//! defaults rather than aborting.
//!
//! ## Module Overview
//!
//! - [`model`]: Record shapes and their enums
//! - [`manager`]: The generic collection manager and its specializations
//! - [`query`]: Free filter/sort utilities over record slices
//! - [`loader`]: The JSON tasks document
//! - [`report`]: Report assembly for the CLI walkthrough
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod config;
pub mod error;
pub mod loader;
pub mod manager;
pub mod model;
pub mod query;
pub mod report;
