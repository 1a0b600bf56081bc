// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Modal endpoint search palette.
//!
//! The palette owns the transient selection cursor and the interpretation
//! of the four directional/commit keys against the current filtered
//! results. The query string itself lives in the embedded input state and
//! is owned by the caller's filtering logic: the palette reports query
//! edits but never filters.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
	buffer::Buffer,
	layout::Rect,
	style::{Modifier, Style},
	text::{Line, Span},
	widgets::{Block, Borders, StatefulWidget, Widget},
};
use unicode_width::UnicodeWidthStr;

use spyglass_index::OperationRecord;
use spyglass_tui_theme::Theme;
use spyglass_tui_widget_input_box::{InputBox, InputBoxState};

/// Rendered height of one result row: source line, method + path line,
/// summary line.
const ROW_HEIGHT: usize = 3;

/// What the caller should do with a key the palette handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteOutcome {
	/// Palette closed or key not relevant; propagate to other handlers.
	Ignored,
	/// Consumed with no caller-visible effect.
	Handled,
	/// The query text changed; re-filter and re-render.
	QueryChanged,
	/// Commit on the result at this index into the filtered results. The
	/// palette has already closed itself.
	Committed(usize),
	/// Cancelled without committing. The palette has already closed itself.
	Dismissed,
}

/// Palette state: open flag, selection cursor, query input, scroll window.
///
/// `cursor == None` means "no explicit selection": commit falls back to
/// the first result. The cursor resets to `None` whenever the palette is
/// (re)opened or the query changes; holding a stale index into a changed
/// result list is exactly the bug class this type exists to prevent.
#[derive(Debug, Default, Clone)]
pub struct PaletteState {
	open: bool,
	cursor: Option<usize>,
	input: InputBoxState,
	scroll_offset: usize,
}

impl PaletteState {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn is_open(&self) -> bool {
		self.open
	}

	/// Open the palette. The cursor resets; the query is retained (the
	/// caller owns it and decides when to clear).
	pub fn open(&mut self) {
		self.open = true;
		self.reset_cursor();
	}

	pub fn close(&mut self) {
		self.open = false;
	}

	pub fn query(&self) -> &str {
		self.input.content()
	}

	pub fn clear_query(&mut self) {
		self.input.clear();
		self.reset_cursor();
	}

	pub fn cursor(&self) -> Option<usize> {
		self.cursor
	}

	/// Equivalent of a pointer selection on a visible row.
	pub fn set_cursor(&mut self, index: usize) {
		self.cursor = Some(index);
	}

	/// Drop any explicit selection. Called internally when the query
	/// changes; callers must also invoke it whenever the result list is
	/// replaced out from under an open palette.
	pub fn reset_cursor(&mut self) {
		self.cursor = None;
		self.scroll_offset = 0;
	}

	fn select_next(&mut self, result_count: usize) {
		if result_count == 0 {
			return;
		}
		self.cursor = Some(match self.cursor {
			None => 0,
			Some(idx) => (idx + 1).min(result_count - 1),
		});
	}

	fn select_prev(&mut self) {
		self.cursor = match self.cursor {
			None | Some(0) => None,
			Some(idx) => Some(idx - 1),
		};
	}

	/// Resolve the committed index: the cursor if set, else the first
	/// result. `None` when there is nothing to commit on.
	pub fn commit(&mut self, result_count: usize) -> Option<usize> {
		if result_count == 0 {
			return None;
		}
		let index = self.cursor.unwrap_or(0).min(result_count - 1);
		self.close();
		Some(index)
	}

	/// Interpret one key press against the current filtered results.
	pub fn handle_key(&mut self, key: KeyEvent, result_count: usize) -> PaletteOutcome {
		if !self.open {
			return PaletteOutcome::Ignored;
		}
		if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
			return PaletteOutcome::Ignored;
		}
		match key.code {
			KeyCode::Esc => {
				self.close();
				PaletteOutcome::Dismissed
			}
			KeyCode::Down => {
				self.select_next(result_count);
				PaletteOutcome::Handled
			}
			KeyCode::Up => {
				self.select_prev();
				PaletteOutcome::Handled
			}
			KeyCode::Enter => match self.commit(result_count) {
				Some(index) => PaletteOutcome::Committed(index),
				None => PaletteOutcome::Handled,
			},
			KeyCode::Char(c) => {
				self.input.insert_char(c);
				self.reset_cursor();
				PaletteOutcome::QueryChanged
			}
			KeyCode::Backspace => {
				if self.input.content().is_empty() {
					PaletteOutcome::Handled
				} else {
					self.input.delete_char();
					self.reset_cursor();
					PaletteOutcome::QueryChanged
				}
			}
			KeyCode::Left => {
				self.input.move_cursor_left();
				PaletteOutcome::Handled
			}
			KeyCode::Right => {
				self.input.move_cursor_right();
				PaletteOutcome::Handled
			}
			KeyCode::Home => {
				self.input.move_cursor_start();
				PaletteOutcome::Handled
			}
			KeyCode::End => {
				self.input.move_cursor_end();
				PaletteOutcome::Handled
			}
			_ => PaletteOutcome::Ignored,
		}
	}
}

fn truncate_with_ellipsis(s: &str, max_width: usize) -> String {
	if UnicodeWidthStr::width(s) <= max_width {
		return s.to_string();
	}
	if max_width == 0 {
		return String::new();
	}
	if max_width == 1 {
		return "…".to_string();
	}

	let mut result = String::new();
	let mut current_width = 0;
	let target_width = max_width.saturating_sub(1);

	for c in s.chars() {
		let char_width = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
		if current_width + char_width > target_width {
			break;
		}
		result.push(c);
		current_width += char_width;
	}
	result.push('…');
	result
}

/// The palette overlay widget. The caller computes the overlay area and
/// renders this last so it floats above the documentation view.
pub struct Palette<'a> {
	results: &'a [OperationRecord],
	theme: &'a Theme,
}

impl<'a> Palette<'a> {
	pub fn new(results: &'a [OperationRecord], theme: &'a Theme) -> Self {
		Self { results, theme }
	}
}

impl StatefulWidget for Palette<'_> {
	type State = PaletteState;

	fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
		if !state.open || area.width < 4 || area.height < 4 {
			return;
		}

		ratatui::widgets::Clear.render(area, buf);

		let block = Block::default()
			.title("Search endpoints")
			.borders(Borders::ALL)
			.border_style(self.theme.borders.focused);
		let inner = block.inner(area);
		block.render(area, buf);
		if inner.width < 3 || inner.height == 0 {
			return;
		}

		let prompt = Span::styled("> ", self.theme.text.accent);
		buf.set_line(inner.x, inner.y, &Line::from(prompt), inner.width);
		let query_area = Rect {
			x: inner.x + 2,
			y: inner.y,
			width: inner.width.saturating_sub(2),
			height: 1,
		};
		InputBox::new()
			.placeholder("Search endpoints...")
			.style(self.theme.text.normal)
			.placeholder_style(self.theme.text.dim)
			.focused(true)
			.render(query_area, buf, &mut state.input);

		let list_area = Rect {
			x: inner.x,
			y: inner.y + 1,
			width: inner.width,
			height: inner.height.saturating_sub(1),
		};
		if list_area.height == 0 {
			return;
		}

		if self.results.is_empty() {
			let message = if state.input.content().is_empty() {
				"No operations indexed"
			} else {
				"No results"
			};
			let line = Line::from(Span::styled(message, self.theme.text.dim));
			buf.set_line(list_area.x, list_area.y, &line, list_area.width);
			return;
		}

		let visible_rows = (list_area.height as usize) / ROW_HEIGHT;
		if visible_rows == 0 {
			return;
		}

		// Keep the selected row inside the scroll window.
		if let Some(selected) = state.cursor {
			if selected >= state.scroll_offset + visible_rows {
				state.scroll_offset = selected + 1 - visible_rows;
			} else if selected < state.scroll_offset {
				state.scroll_offset = selected;
			}
		}

		let width = list_area.width as usize;
		let mut y = list_area.y;
		let max_y = list_area.y + list_area.height;

		for (idx, record) in self.results.iter().enumerate().skip(state.scroll_offset) {
			if y + 2 > max_y {
				break;
			}

			let is_selected = state.cursor == Some(idx);
			let base = if is_selected {
				self.theme.text.normal.add_modifier(Modifier::REVERSED)
			} else {
				self.theme.text.normal
			};

			let source = truncate_with_ellipsis(&record.source_name, width);
			let source_style = if is_selected {
				base.add_modifier(Modifier::BOLD)
			} else {
				self.theme.text.bold
			};
			buf.set_line(list_area.x, y, &Line::from(Span::styled(source, source_style)), list_area.width);
			y += 1;

			let method_style = if is_selected {
				base
			} else {
				self.theme.method_style(&record.method)
			};
			let path_width = width.saturating_sub(record.method.len() + 1);
			let path = truncate_with_ellipsis(&record.path, path_width);
			let operation_line = Line::from(vec![
				Span::styled(record.method.clone(), method_style),
				Span::styled(" ", base),
				Span::styled(path, base),
			]);
			buf.set_line(list_area.x, y, &operation_line, list_area.width);
			y += 1;

			if y >= max_y {
				break;
			}
			let summary_style = if is_selected {
				base
			} else {
				self.theme.text.dim
			};
			let summary = truncate_with_ellipsis(&record.summary, width.saturating_sub(2));
			let summary_line = Line::from(vec![
				Span::styled("  ", summary_style),
				Span::styled(summary, summary_style),
			]);
			buf.set_line(list_area.x, y, &summary_line, list_area.width);
			y += 1;
		}
	}
}
