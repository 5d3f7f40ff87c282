//! Test harness for fracture network development.
//!
//! Provides programmatic tools for building fracture networks, running the
//! intersection engine, and verifying every result.
//!
//! # Key Components
//!
//! - [`NetworkBuilder`] — Fluent API for building and verifying networks
//! - [`oracle`] — Verification functions returning pass/fail verdicts
//! - [`report`] — Structured text network descriptions
//! - [`helpers`] — Error type, polygon builders, fixture data
//! - [`assertions`] — Assertion helpers with diagnostics

pub mod assertions;
pub mod helpers;
pub mod oracle;
pub mod report;
pub mod workflow;

pub use helpers::HarnessError;
pub use oracle::OracleVerdict;
pub use report::NetworkSummary;
pub use workflow::NetworkBuilder;
