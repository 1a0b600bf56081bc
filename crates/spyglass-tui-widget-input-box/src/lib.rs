// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use ratatui::{
	buffer::Buffer,
	layout::Rect,
	style::{Modifier, Style},
	text::{Line, Span},
	widgets::StatefulWidget,
};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Single-line text input state. The cursor is a grapheme index into the
/// content, in `[0, grapheme_count]`.
#[derive(Debug, Default, Clone)]
pub struct InputBoxState {
	content: String,
	cursor: usize,
}

impl InputBoxState {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn content(&self) -> &str {
		&self.content
	}

	pub fn cursor(&self) -> usize {
		self.cursor
	}

	pub fn clear(&mut self) {
		self.content.clear();
		self.cursor = 0;
	}

	pub fn set_content(&mut self, content: impl Into<String>) {
		self.content = content.into();
		self.cursor = self.grapheme_count();
	}

	pub fn insert_char(&mut self, c: char) {
		let offset = self.byte_offset(self.cursor);
		self.content.insert(offset, c);
		self.cursor += 1;
	}

	/// Remove the grapheme before the cursor (backspace).
	pub fn delete_char(&mut self) {
		if self.cursor == 0 {
			return;
		}
		let start = self.byte_offset(self.cursor - 1);
		let end = self.byte_offset(self.cursor);
		self.content.replace_range(start..end, "");
		self.cursor -= 1;
	}

	pub fn move_cursor_left(&mut self) {
		self.cursor = self.cursor.saturating_sub(1);
	}

	pub fn move_cursor_right(&mut self) {
		self.cursor = (self.cursor + 1).min(self.grapheme_count());
	}

	pub fn move_cursor_start(&mut self) {
		self.cursor = 0;
	}

	pub fn move_cursor_end(&mut self) {
		self.cursor = self.grapheme_count();
	}

	fn grapheme_count(&self) -> usize {
		self.content.graphemes(true).count()
	}

	fn byte_offset(&self, grapheme_index: usize) -> usize {
		self.content
			.grapheme_indices(true)
			.nth(grapheme_index)
			.map(|(offset, _)| offset)
			.unwrap_or(self.content.len())
	}
}

/// Single-line text input widget with placeholder and cursor rendering.
#[derive(Debug, Default, Clone)]
pub struct InputBox<'a> {
	placeholder: &'a str,
	style: Style,
	placeholder_style: Style,
	focused: bool,
}

impl<'a> InputBox<'a> {
	pub fn new() -> Self {
		Self {
			placeholder: "",
			style: Style::default(),
			placeholder_style: Style::default().add_modifier(Modifier::DIM),
			focused: false,
		}
	}

	pub fn placeholder(mut self, placeholder: &'a str) -> Self {
		self.placeholder = placeholder;
		self
	}

	pub fn style(mut self, style: Style) -> Self {
		self.style = style;
		self
	}

	pub fn placeholder_style(mut self, style: Style) -> Self {
		self.placeholder_style = style;
		self
	}

	pub fn focused(mut self, focused: bool) -> Self {
		self.focused = focused;
		self
	}
}

impl StatefulWidget for InputBox<'_> {
	type State = InputBoxState;

	fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
		if area.width == 0 || area.height == 0 {
			return;
		}

		if state.content.is_empty() && !self.placeholder.is_empty() {
			let line = Line::from(Span::styled(self.placeholder, self.placeholder_style));
			buf.set_line(area.x, area.y, &line, area.width);
			if self.focused {
				buf[(area.x, area.y)].set_style(self.style.add_modifier(Modifier::REVERSED));
			}
			return;
		}

		let graphemes: Vec<&str> = state.content.graphemes(true).collect();
		let width = area.width as usize;

		// Keep the cursor inside the visible window.
		let mut start = 0;
		loop {
			let visible_width: usize = graphemes[start..state.cursor.min(graphemes.len())]
				.iter()
				.map(|g| UnicodeWidthStr::width(*g))
				.sum();
			if visible_width < width || start >= graphemes.len() {
				break;
			}
			start += 1;
		}

		let mut spans = Vec::new();
		let mut used = 0usize;
		for (idx, grapheme) in graphemes.iter().enumerate().skip(start) {
			let grapheme_width = UnicodeWidthStr::width(*grapheme);
			if used + grapheme_width > width {
				break;
			}
			let style = if self.focused && idx == state.cursor {
				self.style.add_modifier(Modifier::REVERSED)
			} else {
				self.style
			};
			spans.push(Span::styled(*grapheme, style));
			used += grapheme_width;
		}

		// Cursor sits past the last grapheme.
		if self.focused && state.cursor >= graphemes.len() && used < width {
			spans.push(Span::styled(" ", self.style.add_modifier(Modifier::REVERSED)));
		}

		buf.set_line(area.x, area.y, &Line::from(spans), area.width);
	}
}
