//! # hpage-core — Foundational Types for Home-Page Content
//!
//! This crate is the leaf of the hpage workspace. It defines the pieces
//! every other crate agrees on: how a failure is described, how a field
//! inside a content record is addressed, and how a content file is split
//! into its front-matter block and prose body.
//!
//! ## Key Design Principles
//!
//! 1. **Two error kinds, never mixed.** [`MalformedInputError`] means the
//!    block is not structured text of the expected shape; [`ValidationError`]
//!    means it parsed but breaks a content invariant. [`HpageError`] wraps
//!    both for whole-file pipelines.
//!
//! 2. **Field paths are values.** [`FieldPath`] renders as
//!    `hero.actions[1].link`, so error consumers never assemble paths from
//!    strings themselves.
//!
//! 3. **The prose body is opaque.** [`split_document`] hands back the body
//!    slice untouched; nothing in the workspace looks inside it.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `hpage-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod document;
pub mod error;
pub mod path;

pub use document::{split_document, Document, FENCE};
pub use error::{HpageError, Location, MalformedInputError, ValidationError};
pub use path::{FieldPath, Segment};
