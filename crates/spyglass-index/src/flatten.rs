// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use serde_json::Value;

use crate::document::Document;
use crate::record::OperationRecord;

const HTTP_METHODS: [&str; 8] = [
	"get", "put", "post", "delete", "options", "head", "patch", "trace",
];

fn is_http_method(key: &str) -> bool {
	HTTP_METHODS.iter().any(|m| key.eq_ignore_ascii_case(m))
}

/// Flatten a document into one record per declared operation.
///
/// Traversal follows the document's own mapping order, so repeated
/// flattening of an unchanged document yields an identical sequence.
/// Non-method keys under a path item (`parameters`, `summary`, `$ref`, ...)
/// are skipped. Duplicate (path, method) pairs from malformed documents are
/// preserved as separate records.
pub fn flatten(source_name: &str, document: &Document) -> Vec<OperationRecord> {
	let mut records = Vec::new();
	for (path, item) in &document.paths {
		let Some(item) = item.as_object() else {
			continue;
		};
		for (method, operation) in item {
			if !is_http_method(method) {
				continue;
			}
			let summary = operation
				.get("summary")
				.and_then(Value::as_str)
				.unwrap_or_default();
			records.push(OperationRecord::new(
				path.clone(),
				method.to_uppercase(),
				summary,
				source_name,
			));
		}
	}
	records
}

#[cfg(test)]
mod tests {
	use super::*;

	fn parse(json: &str) -> Document {
		Document::from_slice(json.as_bytes()).unwrap()
	}

	#[test]
	fn emits_one_record_per_operation() {
		let doc = parse(
			r#"{"paths": {
				"/users": {
					"get": { "summary": "List users" },
					"post": { "summary": "Create user" }
				},
				"/users/{id}": {
					"delete": { "summary": "Remove user" }
				}
			}}"#,
		);
		let records = flatten("Civitas", &doc);
		assert_eq!(records.len(), 3);
		assert_eq!(records[0], OperationRecord::new("/users", "GET", "List users", "Civitas"));
		assert_eq!(records[1].method, "POST");
		assert_eq!(records[2].path, "/users/{id}");
		assert_eq!(records[2].method, "DELETE");
	}

	#[test]
	fn summary_defaults_to_empty() {
		let doc = parse(r#"{"paths": {"/ping": {"get": {}}}}"#);
		let records = flatten("X", &doc);
		assert_eq!(records[0].summary, "");
	}

	#[test]
	fn skips_non_method_path_item_keys() {
		let doc = parse(
			r#"{"paths": {"/users": {
				"parameters": [{"name": "page", "in": "query"}],
				"summary": "User collection",
				"get": { "summary": "List users" }
			}}}"#,
		);
		let records = flatten("X", &doc);
		assert_eq!(records.len(), 1);
		assert_eq!(records[0].method, "GET");
	}

	#[test]
	fn skips_non_object_path_items() {
		let doc = parse(r#"{"paths": {"/bad": "not an object", "/ok": {"get": {}}}}"#);
		let records = flatten("X", &doc);
		assert_eq!(records.len(), 1);
		assert_eq!(records[0].path, "/ok");
	}

	#[test]
	fn traversal_is_deterministic() {
		let json = r#"{"paths": {
			"/z": {"get": {}},
			"/a": {"put": {}, "get": {}},
			"/m": {"post": {}}
		}}"#;
		let first = flatten("X", &parse(json));
		let second = flatten("X", &parse(json));
		assert_eq!(first, second);
		let paths: Vec<&str> = first.iter().map(|r| r.path.as_str()).collect();
		assert_eq!(paths, ["/z", "/a", "/a", "/m"]);
	}

	#[test]
	fn empty_document_yields_no_records() {
		let doc = parse(r#"{}"#);
		assert!(flatten("X", &doc).is_empty());
	}
}
