// src/specs/mod.rs
//! # Remote data specs
//!
//! Each spec knows how one remote endpoint shapes its data and how to turn it into
//! our typed records. Parsing is pure so it can be tested offline against captured
//! response bodies; the fetch helpers are thin wrappers around `core::net`.
//!
//! ## What does **not** live here
//! - Win counting and annotation (`winrate`).
//! - Progress reporting and orchestration (`collect`).
//! - Export formatting (`csv`, `file`).
//!
//! ## Current specs
//! - `matches` – FRC Events API match results → `MatchRecord`s.
pub mod matches;
