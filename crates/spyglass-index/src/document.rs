// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Minimal OpenAPI document model.
//!
//! Only the parts the index needs are modelled: the `info.title` label and
//! the `paths` mapping. `serde_json`'s `preserve_order` feature keeps the
//! mapping in document order, which makes repeated flattening of an
//! unchanged document yield an identical record sequence.

use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Info {
	#[serde(default)]
	pub title: Option<String>,
}

/// An OpenAPI-shaped document. Anything beyond `info` and `paths` is
/// ignored; documents missing either field still parse.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Document {
	#[serde(default)]
	pub info: Info,
	#[serde(default)]
	pub paths: Map<String, Value>,
}

impl Document {
	pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
		serde_json::from_slice(bytes)
	}

	pub fn title(&self) -> Option<&str> {
		self.info.title.as_deref()
	}
}
