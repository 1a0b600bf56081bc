// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! API source registry for Spyglass.
//!
//! The registry is the static list of independently-hosted APIs whose
//! OpenAPI documents get fetched and indexed. It is loaded once at startup
//! from a JSON resource; failure to load it is fatal and distinct from a
//! per-source document fetch failure.

pub mod error;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use error::RegistryError;

/// One independently-hosted API whose document is fetched and indexed.
///
/// Identity is the `url`; `name` is the display label used throughout the
/// UI and on indexed operation records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiSource {
	pub name: String,
	pub url: String,
	#[serde(default)]
	pub description: String,
}

impl ApiSource {
	pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			url: url.into(),
			description: String::new(),
		}
	}

	pub fn description(mut self, description: impl Into<String>) -> Self {
		self.description = description.into();
		self
	}
}

/// Ordered list of API sources. Order is significant: it defines the index
/// insertion order and the default active source at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
	sources: Vec<ApiSource>,
}

impl Registry {
	pub fn new(sources: Vec<ApiSource>) -> Self {
		Self { sources }
	}

	/// Load the registry from a JSON file containing an array of sources.
	pub fn from_path(path: impl AsRef<Path>) -> Result<Self, RegistryError> {
		let path = path.as_ref();
		let bytes = std::fs::read(path).map_err(|source| RegistryError::Read {
			path: path.to_path_buf(),
			source,
		})?;
		Self::from_slice(&bytes).map_err(|source| RegistryError::Parse {
			path: path.to_path_buf(),
			source,
		})
	}

	pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
		let sources: Vec<ApiSource> = serde_json::from_slice(bytes)?;
		Ok(Self { sources })
	}

	pub fn sources(&self) -> &[ApiSource] {
		&self.sources
	}

	/// Look up a source by display name. Returns the first match in
	/// registry order.
	pub fn find(&self, name: &str) -> Option<&ApiSource> {
		self.sources.iter().find(|s| s.name == name)
	}

	pub fn get(&self, index: usize) -> Option<&ApiSource> {
		self.sources.get(index)
	}

	pub fn first(&self) -> Option<&ApiSource> {
		self.sources.first()
	}

	pub fn len(&self) -> usize {
		self.sources.len()
	}

	pub fn is_empty(&self) -> bool {
		self.sources.is_empty()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, ApiSource> {
		self.sources.iter()
	}
}
