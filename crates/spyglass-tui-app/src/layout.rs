// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Header, content, status bar.
pub fn create_main_layout(_area: Rect) -> Layout {
	Layout::default()
		.direction(Direction::Vertical)
		.constraints([
			Constraint::Length(3),
			Constraint::Min(1),
			Constraint::Length(1),
		])
}

/// Centered overlay area for the search palette, biased toward the top
/// third of the screen.
pub fn palette_area(area: Rect) -> Rect {
	let width = area.width.saturating_sub(4).min(64).max(area.width.min(20));
	let height = area.height.saturating_sub(4).min(20).max(area.height.min(5));
	let x = area.x + (area.width.saturating_sub(width)) / 2;
	let y = area.y + (area.height.saturating_sub(height)) / 3;
	Rect::new(x, y, width, height)
}
