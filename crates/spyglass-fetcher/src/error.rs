// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Fetch error types.

/// A per-source document fetch failure.
///
/// These are terminal for the source within a fetch pass (no retries) but
/// never abort the aggregate pass: the source is logged and excluded from
/// the index.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
	/// Network-level failure
	#[error("request failed: {0}")]
	Transport(#[from] reqwest::Error),

	/// Non-2xx response
	#[error("unexpected status {0}")]
	Status(reqwest::StatusCode),

	/// Body was not an OpenAPI-shaped JSON document
	#[error("malformed document: {0}")]
	Decode(#[from] serde_json::Error),
}
