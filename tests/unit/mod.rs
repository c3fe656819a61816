//! Integration test entry point, compiled as a single `tests` binary (see
//! this crate's `[[test]]` declaration in `Cargo.toml`).

mod properties;
mod seed_scenarios;
