// ABOUTME: Core types and constants for the EvolveYou personalization engine
// ABOUTME: Foundation crate with error handling, intake/plan/ledger models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EvolveYou

#![deny(unsafe_code)]

//! # `EvolveYou` Core
//!
//! Shared types for the workout and nutrition personalization engine. This
//! crate holds no algorithms; it defines the records that flow between the
//! pipeline stages so that every stage can be tested in isolation.
//!
//! ## Modules
//!
//! - **errors**: `EngineError` for the few hard failures of the pipeline
//! - **models**: intake profile, metabolic targets, workout, nutrition and ledger records
//! - **constants**: physiological constants and fixed defaults

/// Engine error types
pub mod errors;

/// Physiological constants and intake defaults
pub mod constants;

/// Domain models (profile, workout plan, nutrition plan, daily ledger)
pub mod models;
