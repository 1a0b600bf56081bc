// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy)]
pub struct TextStyles {
	pub normal: Style,
	pub bold: Style,
	pub dim: Style,
	pub accent: Style,
	pub error: Style,
}

#[derive(Debug, Clone, Copy)]
pub struct BorderStyles {
	pub normal: Style,
	pub focused: Style,
}

#[derive(Debug, Clone, Copy)]
pub struct Theme {
	pub text: TextStyles,
	pub borders: BorderStyles,
}

impl Theme {
	pub fn dark() -> Self {
		Self {
			text: TextStyles {
				normal: Style::default().fg(Color::White),
				bold: Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
				dim: Style::default().fg(Color::DarkGray),
				accent: Style::default().fg(Color::Cyan),
				error: Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
			},
			borders: BorderStyles {
				normal: Style::default().fg(Color::DarkGray),
				focused: Style::default().fg(Color::Cyan),
			},
		}
	}

	/// Badge style for an HTTP method, mirroring the conventional
	/// documentation colors.
	pub fn method_style(&self, method: &str) -> Style {
		let color = match method.to_ascii_uppercase().as_str() {
			"GET" => Color::Blue,
			"POST" => Color::Green,
			"PUT" => Color::Yellow,
			"PATCH" => Color::Magenta,
			"DELETE" => Color::Red,
			_ => Color::Gray,
		};
		Style::default().fg(color).add_modifier(Modifier::BOLD)
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::dark()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn method_styles_distinguish_verbs() {
		let theme = Theme::dark();
		assert_ne!(theme.method_style("GET"), theme.method_style("DELETE"));
		assert_eq!(theme.method_style("get"), theme.method_style("GET"));
	}
}
