// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The documentation view: one pane rendering the operations of the active
//! source. This is the surface the navigation resolver probes; it
//! implements [`DocSurface`] so the resolver stays decoupled from how rows
//! are laid out here.

use std::collections::HashSet;

use ratatui::{
	layout::Rect,
	style::Modifier,
	text::{Line, Span},
	Frame,
};

use spyglass_index::OperationRecord;
use spyglass_navigate::{DocSurface, Probe};
use spyglass_tui_theme::Theme;

/// One fetched document as shown in the view.
#[derive(Debug, Clone)]
pub struct DocEntry {
	pub source_name: String,
	pub url: String,
	pub title: Option<String>,
	pub operations: Vec<OperationRecord>,
}

impl DocEntry {
	/// Label for the nav bar: document title when fetched, source name
	/// otherwise.
	pub fn label(&self) -> &str {
		self.title.as_deref().unwrap_or(&self.source_name)
	}
}

fn last_segment(path: &str) -> &str {
	path.rsplit('/').find(|s| !s.is_empty()).unwrap_or(path)
}

/// Scrollable operation list for the active document, with per-row
/// expand/collapse. Collapsed rows are one line; expanded rows add the
/// summary underneath.
#[derive(Debug, Default)]
pub struct Viewer {
	docs: Vec<DocEntry>,
	active: Option<usize>,
	cursor: usize,
	scroll_offset: usize,
	expanded: HashSet<usize>,
}

impl Viewer {
	pub fn new() -> Self {
		Self::default()
	}

	/// Replace the documents wholesale (index republication). The active
	/// document is retained by URL when still present, otherwise the first
	/// document becomes active.
	pub fn set_documents(&mut self, docs: Vec<DocEntry>) {
		let active_url = self
			.active
			.and_then(|idx| self.docs.get(idx))
			.map(|doc| doc.url.clone());
		self.docs = docs;
		self.active = active_url
			.and_then(|url| self.docs.iter().position(|d| d.url == url))
			.or(if self.docs.is_empty() { None } else { Some(0) });
		self.reset_view();
	}

	pub fn docs(&self) -> &[DocEntry] {
		&self.docs
	}

	pub fn active_index(&self) -> Option<usize> {
		self.active
	}

	pub fn active_doc(&self) -> Option<&DocEntry> {
		self.active.and_then(|idx| self.docs.get(idx))
	}

	pub fn select_index(&mut self, index: usize) {
		if index < self.docs.len() && self.active != Some(index) {
			self.active = Some(index);
			self.reset_view();
		}
	}

	pub fn select_next_doc(&mut self) {
		if self.docs.is_empty() {
			return;
		}
		let next = match self.active {
			Some(idx) => (idx + 1) % self.docs.len(),
			None => 0,
		};
		self.select_index(next);
	}

	pub fn select_prev_doc(&mut self) {
		if self.docs.is_empty() {
			return;
		}
		let prev = match self.active {
			Some(0) | None => self.docs.len() - 1,
			Some(idx) => idx - 1,
		};
		self.select_index(prev);
	}

	pub fn cursor(&self) -> usize {
		self.cursor
	}

	pub fn cursor_down(&mut self) {
		let total = self.active_doc().map(|d| d.operations.len()).unwrap_or(0);
		if total > 0 {
			self.cursor = (self.cursor + 1).min(total - 1);
		}
	}

	pub fn cursor_up(&mut self) {
		self.cursor = self.cursor.saturating_sub(1);
	}

	pub fn is_expanded(&self, index: usize) -> bool {
		self.expanded.contains(&index)
	}

	pub fn toggle_expanded(&mut self) {
		let index = self.cursor;
		if !self.expanded.remove(&index) {
			self.expanded.insert(index);
		}
	}

	fn reset_view(&mut self) {
		self.cursor = 0;
		self.scroll_offset = 0;
		self.expanded.clear();
	}

	/// Display lines for the active document: (operation index, summary?).
	fn display_lines(&self) -> Vec<(usize, bool)> {
		let Some(doc) = self.active_doc() else {
			return Vec::new();
		};
		let mut lines = Vec::new();
		for idx in 0..doc.operations.len() {
			lines.push((idx, false));
			if self.expanded.contains(&idx) {
				lines.push((idx, true));
			}
		}
		lines
	}

	pub fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
		if area.width == 0 || area.height == 0 {
			return;
		}
		let Some(doc) = self.active_doc() else {
			let line = Line::from(Span::styled("No API selected", theme.text.dim));
			frame.buffer_mut().set_line(area.x, area.y, &line, area.width);
			return;
		};
		if doc.operations.is_empty() {
			let line = Line::from(Span::styled("No operations in this document", theme.text.dim));
			frame.buffer_mut().set_line(area.x, area.y, &line, area.width);
			return;
		}

		let doc = doc.clone();
		let lines = self.display_lines();
		let height = area.height as usize;

		// Keep the cursor's row visible.
		let cursor_line = lines
			.iter()
			.position(|&(idx, summary)| idx == self.cursor && !summary)
			.unwrap_or(0);
		if cursor_line < self.scroll_offset {
			self.scroll_offset = cursor_line;
		} else if cursor_line >= self.scroll_offset + height {
			self.scroll_offset = cursor_line + 1 - height;
		}

		let buf = frame.buffer_mut();
		let mut y = area.y;
		for &(idx, summary) in lines.iter().skip(self.scroll_offset).take(height) {
			let record = &doc.operations[idx];
			let line = if summary {
				let text = if record.summary.is_empty() {
					"(no summary)"
				} else {
					&record.summary
				};
				Line::from(vec![
					Span::styled("      ", theme.text.dim),
					Span::styled(text.to_string(), theme.text.dim),
				])
			} else {
				let selected = idx == self.cursor;
				let base = if selected {
					theme.text.normal.add_modifier(Modifier::REVERSED)
				} else {
					theme.text.normal
				};
				let marker = if self.expanded.contains(&idx) { "▾ " } else { "▸ " };
				Line::from(vec![
					Span::styled(marker, base),
					Span::styled(
						format!("{:<7}", record.method),
						if selected { base } else { theme.method_style(&record.method) },
					),
					Span::styled(record.path.clone(), base),
				])
			};
			buf.set_line(area.x, y, &line, area.width);
			y += 1;
		}
	}
}

impl DocSurface for Viewer {
	type Handle = usize;

	fn select(&mut self, document_url: &str) {
		if let Some(idx) = self.docs.iter().position(|d| d.url == document_url) {
			self.active = Some(idx);
			self.reset_view();
		}
	}

	fn find(&self, probe: &Probe) -> Vec<usize> {
		let Some(doc) = self.active_doc() else {
			return Vec::new();
		};
		doc.operations
			.iter()
			.enumerate()
			.filter(|(_, op)| match probe {
				Probe::ExactPath(path) => &op.path == path,
				Probe::MethodAndLastSegment { method, segment } => {
					&op.method == method && last_segment(&op.path) == segment
				}
				Probe::LastSegment(segment) => last_segment(&op.path) == segment,
				Probe::Method(method) => &op.method == method,
			})
			.map(|(idx, _)| idx)
			.collect()
	}

	fn text_of(&self, handle: &usize) -> String {
		match self.active_doc().and_then(|d| d.operations.get(*handle)) {
			Some(op) => format!("{} {} {}", op.method, op.path, op.summary),
			None => String::new(),
		}
	}

	fn is_collapsed(&self, handle: &usize) -> bool {
		!self.expanded.contains(handle)
	}

	fn reveal(&mut self, handle: &usize) {
		self.cursor = *handle;
	}

	fn expand(&mut self, handle: &usize) {
		self.expanded.insert(*handle);
	}
}
