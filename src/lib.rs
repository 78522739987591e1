//! modreport - Drupal module and Composer package report.
//!
//! modreport lists the extension modules installed in a Drupal project,
//! works out which Composer package each one came from, derives a caret
//! version constraint, and exports `composer.json`-ready require lines for
//! every package with at least one enabled module.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`composer`] - Composer package metadata (`installed.json`)
//! - [`config`] - Configuration loading and layering
//! - [`error`] - Error types and result aliases
//! - [`model`] - Modules, origins and report rows
//! - [`registry`] - Extension discovery on disk
//! - [`report`] - Package index, origin classification, constraints,
//!   report assembly and manifest export
//! - [`ui`] - Terminal output and tables
//!
//! # Example
//!
//! ```
//! use modreport::report::caret_constraint;
//!
//! assert_eq!(caret_constraint("3.6.2"), "^3.6");
//! assert_eq!(caret_constraint("dev-main"), "dev-main");
//! ```

pub mod cli;
pub mod composer;
pub mod config;
pub mod error;
pub mod model;
pub mod registry;
pub mod report;
pub mod ui;

pub use error::{ModReportError, Result};
