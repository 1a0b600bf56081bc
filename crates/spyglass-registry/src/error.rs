// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Registry error types.

use std::path::PathBuf;

/// Errors that can occur while loading the source registry.
///
/// These are fatal to startup: without a registry there is nothing to
/// fetch, index, or browse. Per-source document fetch failures are a
/// different, recoverable condition handled by the fetcher.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
	/// I/O error reading the registry file
	#[error("failed to read registry {path}: {source}")]
	Read {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	/// JSON parsing error
	#[error("failed to parse registry {path}: {source}")]
	Parse {
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},
}
