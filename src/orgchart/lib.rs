//! # Orgchart Architecture
//!
//! Orgchart turns a flat employee list (id, name, manager id, title) into an
//! organization tree and renders it as an image, an ASCII tree, an org-size
//! report, or JSON.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs, main.rs)                               │
//! │  - Parses arguments, prints, writes the output file         │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade: load, build, scope, filter, render          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!              ┌───────────────┼────────────────┐
//!              ▼               ▼                ▼
//! ┌──────────────────┐ ┌───────────────┐ ┌──────────────────┐
//! │ source/          │ │ commands/     │ │ render/          │
//! │ CSV, spreadsheet │ │ pure tree     │ │ ascii, graph,    │
//! │ -> Vec<Employee> │ │ logic         │ │ orgsize, json    │
//! └──────────────────┘ └───────────────┘ └──────────────────┘
//! ```
//!
//! ## Pipeline
//!
//! rows → [`model::ReportsMap`] → [`model::OrgTree`] → optional subtree →
//! optional managers-only filter → [`render::Output`]. Every stage builds a new
//! value from the previous one; nothing is updated in place.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Reports-map building, extraction, lookup, filtering, org sizes
//! - [`source`]: Input file formats
//! - [`render`]: Output formats
//! - [`model`]: `Employee`, `ReportsMap`, `OrgNode`, `OrgTree`
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod render;
pub mod source;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
