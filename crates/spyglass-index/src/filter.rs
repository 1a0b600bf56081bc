// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use crate::record::OperationRecord;

/// Case-insensitive substring filter over path, summary, and source name.
///
/// Pure function of its inputs: index order is preserved, the empty query
/// matches everything, and the result is recomputed in full on every call.
pub fn filter(index: &[OperationRecord], query: &str) -> Vec<OperationRecord> {
	if query.is_empty() {
		return index.to_vec();
	}
	let needle = query.to_lowercase();
	index.iter().filter(|r| r.matches(&needle)).cloned().collect()
}
