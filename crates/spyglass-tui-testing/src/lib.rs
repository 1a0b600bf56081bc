// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use ratatui::{backend::TestBackend, layout::Rect, Frame, Terminal};

/// Renders widgets into an off-screen buffer for assertions.
pub struct TestHarness {
	terminal: Terminal<TestBackend>,
}

impl TestHarness {
	pub fn new(width: u16, height: u16) -> Self {
		let backend = TestBackend::new(width, height);
		let terminal = Terminal::new(backend).expect("failed to create terminal");
		Self { terminal }
	}

	pub fn render<F>(&mut self, render_fn: F) -> &TestBackend
	where
		F: FnOnce(&mut Frame, Rect),
	{
		self.terminal
			.draw(|frame| {
				let area = frame.area();
				render_fn(frame, area);
			})
			.expect("failed to draw");
		self.terminal.backend()
	}

	pub fn assert_snapshot<F>(&mut self, name: &str, render_fn: F)
	where
		F: FnOnce(&mut Frame, Rect),
	{
		let backend = self.render(render_fn);
		let output = buffer_to_string(backend);
		insta::assert_snapshot!(name, output);
	}

	pub fn buffer_lines(&self) -> Vec<String> {
		let buffer = self.terminal.backend().buffer();
		let area = buffer.area;
		let mut lines = Vec::new();

		for y in area.y..area.y + area.height {
			let mut line = String::new();
			for x in area.x..area.x + area.width {
				let cell = &buffer[(x, y)];
				line.push_str(cell.symbol());
			}
			lines.push(line);
		}

		lines
	}

	/// Position of the first occurrence of `needle` as (row, col).
	pub fn find_text(&self, needle: &str) -> Option<(usize, usize)> {
		let lines = self.buffer_lines();
		for (row, line) in lines.iter().enumerate() {
			if let Some(col) = line.find(needle) {
				return Some((row, col));
			}
		}
		None
	}
}

fn buffer_to_string(backend: &TestBackend) -> String {
	let buffer = backend.buffer();
	let area = buffer.area;
	let mut output = String::new();

	for y in area.y..area.y + area.height {
		for x in area.x..area.x + area.width {
			let cell = &buffer[(x, y)];
			output.push_str(cell.symbol());
		}
		if y < area.y + area.height - 1 {
			output.push('\n');
		}
	}

	output
}

#[cfg(test)]
mod tests {
	use super::*;
	use ratatui::widgets::{Block, Borders};

	#[test]
	fn test_harness_creation() {
		let harness = TestHarness::new(80, 24);
		assert_eq!(harness.terminal.backend().buffer().area.width, 80);
		assert_eq!(harness.terminal.backend().buffer().area.height, 24);
	}

	#[test]
	fn test_render() {
		let mut harness = TestHarness::new(20, 5);
		harness.render(|frame, area| {
			let block = Block::default().borders(Borders::ALL).title("Test");
			frame.render_widget(block, area);
		});
		let output = buffer_to_string(harness.terminal.backend());
		assert!(output.contains("Test"));
	}

	#[test]
	fn test_buffer_lines() {
		let mut harness = TestHarness::new(20, 5);
		harness.render(|frame, area| {
			let block = Block::default().borders(Borders::ALL).title("Hello");
			frame.render_widget(block, area);
		});
		let lines = harness.buffer_lines();
		assert_eq!(lines.len(), 5);
		assert!(lines[0].contains("Hello"));
	}

	#[test]
	fn test_find_text() {
		let mut harness = TestHarness::new(20, 5);
		harness.render(|frame, area| {
			let block = Block::default().borders(Borders::ALL).title("FindMe");
			frame.render_widget(block, area);
		});
		let pos = harness.find_text("FindMe");
		assert!(pos.is_some());
		let (row, _col) = pos.unwrap();
		assert_eq!(row, 0);
		assert!(harness.find_text("absent").is_none());
	}
}
