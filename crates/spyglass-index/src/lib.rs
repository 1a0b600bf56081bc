// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Endpoint index and search filter for Spyglass.
//!
//! This crate provides:
//! - A minimal OpenAPI document model exposing the `paths` mapping in
//!   document order
//! - Flattening of a document into searchable [`OperationRecord`]s
//! - The pure substring filter driving the command palette

pub mod document;
pub mod filter;
pub mod flatten;
pub mod record;

pub use document::{Document, Info};
pub use filter::filter;
pub use flatten::flatten;
pub use record::OperationRecord;
