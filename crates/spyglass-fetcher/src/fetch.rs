// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use futures::future::join_all;
use reqwest::Client;
use tracing::{debug, warn};

use spyglass_index::{flatten, Document, OperationRecord};
use spyglass_registry::ApiSource;

use crate::error::FetchError;

/// Per-source outcome of a fetch pass.
#[derive(Debug, Clone)]
pub struct SourceReport {
	pub source_name: String,
	/// `info.title` from the fetched document, when present.
	pub title: Option<String>,
	pub ok: bool,
}

/// Aggregate outcome of a fetch pass. Contains records only from sources
/// that succeeded; a pass where every source failed is simply empty, not a
/// distinguished error state.
#[derive(Debug, Clone, Default)]
pub struct FetchReport {
	pub records: Vec<OperationRecord>,
	pub sources: Vec<SourceReport>,
}

impl FetchReport {
	pub fn succeeded(&self) -> usize {
		self.sources.iter().filter(|s| s.ok).count()
	}

	pub fn failed(&self) -> usize {
		self.sources.iter().filter(|s| !s.ok).count()
	}
}

/// Fetch every source's document concurrently and flatten the successful
/// ones, in registry order. Per-source failures are logged and excluded;
/// this never fails as a whole.
pub async fn fetch_all(client: &Client, sources: &[ApiSource]) -> FetchReport {
	let passes = sources.iter().map(|source| fetch_source(client, source));
	let results = join_all(passes).await;
	collect(sources, results)
}

async fn fetch_source(client: &Client, source: &ApiSource) -> Result<Document, FetchError> {
	debug!(source = %source.name, url = %source.url, "fetching OpenAPI document");
	let response = client.get(&source.url).send().await?;
	let status = response.status();
	if !status.is_success() {
		return Err(FetchError::Status(status));
	}
	let body = response.text().await?;
	let document = Document::from_slice(body.as_bytes())?;
	Ok(document)
}

fn collect(sources: &[ApiSource], results: Vec<Result<Document, FetchError>>) -> FetchReport {
	let mut report = FetchReport::default();
	for (source, result) in sources.iter().zip(results) {
		match result {
			Ok(document) => {
				report.records.extend(flatten(&source.name, &document));
				report.sources.push(SourceReport {
					source_name: source.name.clone(),
					title: document.title().map(str::to_string),
					ok: true,
				});
			}
			Err(err) => {
				warn!(source = %source.name, error = %err, "failed to fetch OpenAPI document");
				report.sources.push(SourceReport {
					source_name: source.name.clone(),
					title: None,
					ok: false,
				});
			}
		}
	}
	report
}

#[cfg(test)]
mod tests {
	use super::*;

	fn document(json: &str) -> Document {
		Document::from_slice(json.as_bytes()).unwrap()
	}

	#[test]
	fn collects_records_only_from_succeeding_sources() {
		let sources = vec![
			ApiSource::new("Broken", "https://broken.example/openapi.json"),
			ApiSource::new("Civitas", "https://api.civitas.example/openapi.json"),
		];
		let results = vec![
			Err(FetchError::Status(reqwest::StatusCode::BAD_GATEWAY)),
			Ok(document(
				r#"{"info": {"title": "Civitas API"},
					"paths": {"/users": {"get": {"summary": "List users"}}}}"#,
			)),
		];
		let report = collect(&sources, results);
		assert_eq!(report.records.len(), 1);
		assert_eq!(report.records[0].source_name, "Civitas");
		assert_eq!(report.succeeded(), 1);
		assert_eq!(report.failed(), 1);
		assert_eq!(report.sources[1].title.as_deref(), Some("Civitas API"));
	}

	#[test]
	fn all_sources_failing_yields_an_empty_report() {
		let sources = vec![ApiSource::new("A", "https://a.example/openapi.json")];
		let results = vec![Err(FetchError::Status(reqwest::StatusCode::NOT_FOUND))];
		let report = collect(&sources, results);
		assert!(report.records.is_empty());
		assert_eq!(report.failed(), 1);
	}

	#[test]
	fn records_follow_registry_order() {
		let sources = vec![
			ApiSource::new("Second", "https://b.example/openapi.json"),
			ApiSource::new("First", "https://a.example/openapi.json"),
		];
		let results = vec![
			Ok(document(r#"{"paths": {"/b": {"get": {}}}}"#)),
			Ok(document(r#"{"paths": {"/a": {"get": {}}}}"#)),
		];
		let report = collect(&sources, results);
		let names: Vec<&str> = report.records.iter().map(|r| r.source_name.as_str()).collect();
		assert_eq!(names, ["Second", "First"]);
	}

	#[test]
	fn fetch_all_with_no_sources_is_empty() {
		let report = tokio_test::block_on(fetch_all(&crate::client::new_client(), &[]));
		assert!(report.records.is_empty());
		assert!(report.sources.is_empty());
	}
}
