// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! OpenAPI document fetcher for Spyglass.
//!
//! Fetches every registered source's document concurrently and flattens the
//! successful ones into operation records. Per-source failures are logged
//! and excluded; the aggregate pass never fails as a whole.

pub mod client;
pub mod error;
pub mod fetch;

pub use client::{builder, new_client, new_client_with_timeout, user_agent};
pub use error::FetchError;
pub use fetch::{fetch_all, FetchReport, SourceReport};
