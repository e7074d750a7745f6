//! Core domain models for customer shopping behavior.
//!
//! This module defines the fundamental data structures used throughout the
//! pipeline, representing individual retail transactions and the categorical
//! features derived from them.

pub mod domain;
