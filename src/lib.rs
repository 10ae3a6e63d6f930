//! Data-access layer for laboratory research records: researchers, experiments,
//! samples, equipment, methods, results, conditions and measurements, plus the
//! aggregations and read projections consumed by the desktop UI and the
//! Excel/PDF report generators.
//!
//! The `registry` module is the boundary the UI calls: it degrades every
//! failure to a logged `None`/`false` outcome. Everything underneath returns
//! `Result` and propagates database errors.

pub mod conditions;
pub mod config;
pub mod equipment;
pub mod experiments;
pub mod measurements;
pub mod methods;
pub mod registry;
pub mod researchers;
pub mod results;
pub mod samples;

#[cfg(test)]
pub mod test_helpers;
