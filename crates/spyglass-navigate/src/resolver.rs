// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::time::{Duration, Instant};

use tracing::warn;

use spyglass_index::OperationRecord;
use spyglass_registry::Registry;

use crate::surface::{DocSurface, Probe};

/// Delay between switching the surface to a document and probing it for the
/// target element, giving the renderer time to finish its own render pass.
pub const SETTLE_DELAY: Duration = Duration::from_millis(2000);

/// Resolved navigation target: `"<METHOD> <normalized-path>"` plus the
/// pieces the probe ladder is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationTarget {
	pub method: String,
	pub path: String,
}

impl OperationTarget {
	pub fn from_record(record: &OperationRecord) -> Self {
		Self {
			method: record.method.clone(),
			path: normalize_path(&record.path),
		}
	}

	pub fn key(&self) -> String {
		format!("{} {}", self.method, self.path)
	}

	fn last_segment(&self) -> &str {
		self.path
			.rsplit('/')
			.find(|segment| !segment.is_empty())
			.unwrap_or(&self.path)
	}

	/// Lookup strategies, most to least specific.
	pub fn probes(&self) -> Vec<Probe> {
		let segment = self.last_segment().to_string();
		vec![
			Probe::ExactPath(self.path.clone()),
			Probe::MethodAndLastSegment {
				method: self.method.clone(),
				segment: segment.clone(),
			},
			Probe::LastSegment(segment),
			Probe::Method(self.method.clone()),
		]
	}
}

/// Strip a single trailing slash. The root path is left alone so that the
/// full-path containment check stays meaningful.
fn normalize_path(path: &str) -> String {
	match path.strip_suffix('/') {
		Some(stripped) if !stripped.is_empty() => stripped.to_string(),
		_ => path.to_string(),
	}
}

/// A reveal scheduled for after the settling delay. Poll with
/// [`PendingReveal::is_due`] from the event loop; no thread blocks waiting.
#[derive(Debug, Clone)]
pub struct PendingReveal {
	pub target: OperationTarget,
	due_at: Instant,
}

impl PendingReveal {
	pub fn is_due(&self, now: Instant) -> bool {
		now >= self.due_at
	}
}

/// Navigation resolver. Owns the settling delay and the probe/accept logic;
/// everything it touches on the view goes through [`DocSurface`].
#[derive(Debug, Clone)]
pub struct Resolver {
	settle_delay: Duration,
}

impl Default for Resolver {
	fn default() -> Self {
		Self::new()
	}
}

impl Resolver {
	pub fn new() -> Self {
		Self {
			settle_delay: SETTLE_DELAY,
		}
	}

	pub fn with_settle_delay(settle_delay: Duration) -> Self {
		Self { settle_delay }
	}

	/// Switch the surface to the record's owning source and schedule the
	/// reveal. Returns `None` when the source name has no match in the
	/// registry; the navigation is abandoned and logged, non-fatal.
	pub fn navigate<S: DocSurface>(
		&self,
		registry: &Registry,
		surface: &mut S,
		record: &OperationRecord,
	) -> Option<PendingReveal> {
		let Some(source) = registry.find(&record.source_name) else {
			warn!(source = %record.source_name, "navigation abandoned: source not in registry");
			return None;
		};
		surface.select(&source.url);
		Some(PendingReveal {
			target: OperationTarget::from_record(record),
			due_at: Instant::now() + self.settle_delay,
		})
	}

	/// Probe the surface for the target and reveal the first acceptable
	/// candidate. A candidate is accepted only when its rendered text
	/// contains the full normalized path, so a shared trailing segment can
	/// never select the wrong operation. Returns whether an element was
	/// revealed; a miss is a logged warning and leaves the view unchanged.
	pub fn reveal<S: DocSurface>(&self, surface: &mut S, target: &OperationTarget) -> bool {
		for probe in target.probes() {
			for handle in surface.find(&probe) {
				if !surface.text_of(&handle).contains(&target.path) {
					continue;
				}
				surface.reveal(&handle);
				if surface.is_collapsed(&handle) {
					surface.expand(&handle);
				}
				return true;
			}
		}
		warn!(target = %target.key(), "no rendered element matched operation");
		false
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use spyglass_registry::ApiSource;

	#[derive(Debug, Clone)]
	struct Row {
		method: String,
		path: String,
		collapsed: bool,
	}

	/// In-memory surface: one row per operation of the selected document.
	#[derive(Debug, Default)]
	struct StubSurface {
		selected_url: Option<String>,
		rows: Vec<Row>,
		revealed: Vec<usize>,
		expanded: Vec<usize>,
	}

	impl StubSurface {
		fn with_rows(rows: &[(&str, &str)]) -> Self {
			Self {
				rows: rows
					.iter()
					.map(|(method, path)| Row {
						method: method.to_string(),
						path: path.to_string(),
						collapsed: true,
					})
					.collect(),
				..Self::default()
			}
		}
	}

	impl DocSurface for StubSurface {
		type Handle = usize;

		fn select(&mut self, document_url: &str) {
			self.selected_url = Some(document_url.to_string());
		}

		fn find(&self, probe: &Probe) -> Vec<usize> {
			self.rows
				.iter()
				.enumerate()
				.filter(|(_, row)| match probe {
					Probe::ExactPath(path) => &row.path == path,
					Probe::MethodAndLastSegment { method, segment } => {
						&row.method == method && row.path.ends_with(segment.as_str())
					}
					Probe::LastSegment(segment) => row.path.ends_with(segment.as_str()),
					Probe::Method(method) => &row.method == method,
				})
				.map(|(idx, _)| idx)
				.collect()
		}

		fn text_of(&self, handle: &usize) -> String {
			let row = &self.rows[*handle];
			format!("{} {}", row.method, row.path)
		}

		fn is_collapsed(&self, handle: &usize) -> bool {
			self.rows[*handle].collapsed
		}

		fn reveal(&mut self, handle: &usize) {
			self.revealed.push(*handle);
		}

		fn expand(&mut self, handle: &usize) {
			self.rows[*handle].collapsed = false;
			self.expanded.push(*handle);
		}
	}

	fn registry() -> Registry {
		Registry::new(vec![ApiSource::new(
			"Civitas",
			"https://api.civitas.example/openapi.json",
		)])
	}

	fn record(path: &str) -> OperationRecord {
		OperationRecord::new(path, "GET", "", "Civitas")
	}

	#[test]
	fn normalizes_a_single_trailing_slash() {
		assert_eq!(normalize_path("/users/"), "/users");
		assert_eq!(normalize_path("/users"), "/users");
		assert_eq!(normalize_path("/"), "/");
	}

	#[test]
	fn target_key_is_method_then_path() {
		let target = OperationTarget::from_record(&record("/users/{id}/"));
		assert_eq!(target.key(), "GET /users/{id}");
	}

	#[test]
	fn probes_go_from_most_to_least_specific() {
		let target = OperationTarget::from_record(&record("/users/{id}"));
		assert_eq!(
			target.probes(),
			vec![
				Probe::ExactPath("/users/{id}".into()),
				Probe::MethodAndLastSegment {
					method: "GET".into(),
					segment: "{id}".into(),
				},
				Probe::LastSegment("{id}".into()),
				Probe::Method("GET".into()),
			]
		);
	}

	#[test]
	fn navigate_selects_the_owning_source() {
		let resolver = Resolver::with_settle_delay(Duration::ZERO);
		let mut surface = StubSurface::default();
		let pending = resolver
			.navigate(&registry(), &mut surface, &record("/users"))
			.unwrap();
		assert_eq!(
			surface.selected_url.as_deref(),
			Some("https://api.civitas.example/openapi.json")
		);
		assert!(pending.is_due(Instant::now()));
	}

	#[test]
	fn unknown_source_is_abandoned_without_side_effects() {
		let resolver = Resolver::new();
		let mut surface = StubSurface::default();
		let stray = OperationRecord::new("/users", "GET", "", "Nowhere");
		assert!(resolver.navigate(&registry(), &mut surface, &stray).is_none());
		assert!(surface.selected_url.is_none());
	}

	#[test]
	fn pending_reveal_respects_the_settling_delay() {
		let resolver = Resolver::with_settle_delay(Duration::from_secs(60));
		let mut surface = StubSurface::default();
		let pending = resolver
			.navigate(&registry(), &mut surface, &record("/users"))
			.unwrap();
		assert!(!pending.is_due(Instant::now()));
	}

	#[test]
	fn reveals_and_expands_the_exact_match() {
		let resolver = Resolver::new();
		let mut surface = StubSurface::with_rows(&[("GET", "/users"), ("GET", "/users/{id}")]);
		let target = OperationTarget::from_record(&record("/users/{id}"));
		assert!(resolver.reveal(&mut surface, &target));
		assert_eq!(surface.revealed, vec![1]);
		assert_eq!(surface.expanded, vec![1]);
	}

	#[test]
	fn already_expanded_elements_are_not_expanded_again() {
		let resolver = Resolver::new();
		let mut surface = StubSurface::with_rows(&[("GET", "/users")]);
		surface.rows[0].collapsed = false;
		let target = OperationTarget::from_record(&record("/users"));
		assert!(resolver.reveal(&mut surface, &target));
		assert_eq!(surface.revealed, vec![0]);
		assert!(surface.expanded.is_empty());
	}

	#[test]
	fn shared_trailing_segment_cannot_select_the_wrong_operation() {
		// Only /orders/{id} is rendered; navigating to /users/{id} must
		// miss rather than land on the lookalike.
		let resolver = Resolver::new();
		let mut surface = StubSurface::with_rows(&[("GET", "/orders/{id}")]);
		let target = OperationTarget::from_record(&record("/users/{id}"));
		assert!(!resolver.reveal(&mut surface, &target));
		assert!(surface.revealed.is_empty());
	}

	#[test]
	fn falls_through_the_probe_ladder() {
		// No exact path attribute match (trailing slash difference in the
		// rendered row), but a later probe still finds a row whose text
		// contains the full path.
		let resolver = Resolver::new();
		let mut surface = StubSurface::with_rows(&[("GET", "/users/{id}/")]);
		let target = OperationTarget::from_record(&record("/users/{id}"));
		assert!(resolver.reveal(&mut surface, &target));
		assert_eq!(surface.revealed, vec![0]);
	}

	#[test]
	fn miss_leaves_the_view_unchanged() {
		let resolver = Resolver::new();
		let mut surface = StubSurface::with_rows(&[("POST", "/things")]);
		let target = OperationTarget::from_record(&record("/users"));
		assert!(!resolver.reveal(&mut surface, &target));
		assert!(surface.revealed.is_empty());
		assert!(surface.expanded.is_empty());
	}
}
