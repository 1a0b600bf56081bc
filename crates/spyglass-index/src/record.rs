// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

/// One searchable operation: a (method, path) pair declared by a source's
/// document, plus the human-readable summary and the owning source's name.
///
/// Records are created once per successfully-fetched document and are
/// immutable thereafter; the whole index is replaced atomically on refetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationRecord {
	/// URL template as declared in the document, e.g. `/users/{id}`.
	pub path: String,
	/// Uppercased HTTP verb.
	pub method: String,
	/// Empty string when the operation declares none.
	pub summary: String,
	/// Display name of the owning source.
	pub source_name: String,
}

impl OperationRecord {
	pub fn new(
		path: impl Into<String>,
		method: impl Into<String>,
		summary: impl Into<String>,
		source_name: impl Into<String>,
	) -> Self {
		Self {
			path: path.into(),
			method: method.into(),
			summary: summary.into(),
			source_name: source_name.into(),
		}
	}

	/// Case-insensitive substring match against path, summary, and source
	/// name. `needle` must already be lowercased.
	pub(crate) fn matches(&self, needle: &str) -> bool {
		self.path.to_lowercase().contains(needle)
			|| self.summary.to_lowercase().contains(needle)
			|| self.source_name.to_lowercase().contains(needle)
	}
}
