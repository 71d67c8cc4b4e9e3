//! Scoring engine and report presenter for the e-commerce health service.
//!
//! The library owns the full request pipeline behind the HTTP surface:
//! KPI validation, the fixed six-rule rubric, tier/color presentation,
//! report document rendering, and the session-scoped contact directory
//! contracts. Infrastructure adapters (in-memory directory, payment stub,
//! server wiring) live in the `services/api` binary.

pub mod config;
pub mod error;
pub mod payments;
pub mod report;
pub mod router;
pub mod scoring;
pub mod service;
pub mod session;
pub mod telemetry;
