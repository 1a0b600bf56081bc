// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
	layout::Rect,
	text::{Line, Span},
	widgets::{Block, Borders, Paragraph},
	Frame,
};
use tokio::sync::mpsc;
use tracing::info;

use spyglass_fetcher::{fetch_all, FetchReport, SourceReport};
use spyglass_index::{filter, OperationRecord};
use spyglass_navigate::{PendingReveal, Resolver};
use spyglass_registry::{Registry, RegistryError};
use spyglass_tui_theme::Theme;
use spyglass_tui_widget_palette::{Palette, PaletteOutcome, PaletteState};

use crate::layout::{create_main_layout, palette_area};
use crate::viewer::{DocEntry, Viewer};

pub struct App {
	theme: Theme,
	registry: Option<Registry>,
	load_error: Option<String>,
	/// The published index. Replaced atomically when a fetch pass lands;
	/// never observed partially populated.
	index: Vec<OperationRecord>,
	/// Current filtered results, recomputed on every query change.
	results: Vec<OperationRecord>,
	palette: PaletteState,
	viewer: Viewer,
	resolver: Resolver,
	pending_reveal: Option<PendingReveal>,
	fetch_rx: Option<mpsc::Receiver<FetchReport>>,
	fetching: bool,
	source_reports: Vec<SourceReport>,
	client: reqwest::Client,
	should_quit: bool,
}

impl App {
	pub fn new(registry: Result<Registry, RegistryError>) -> Self {
		let (registry, load_error) = match registry {
			Ok(registry) => (Some(registry), None),
			Err(err) => (None, Some(err.to_string())),
		};
		Self {
			theme: Theme::dark(),
			registry,
			load_error,
			index: Vec::new(),
			results: Vec::new(),
			palette: PaletteState::new(),
			viewer: Viewer::new(),
			resolver: Resolver::new(),
			pending_reveal: None,
			fetch_rx: None,
			fetching: false,
			source_reports: Vec::new(),
			client: spyglass_fetcher::new_client(),
			should_quit: false,
		}
	}

	/// Kick off one concurrent fetch pass over all registered sources.
	/// The result lands in `tick` through the channel; a pass already in
	/// flight is left alone.
	pub fn start_fetch(&mut self) {
		let Some(registry) = &self.registry else {
			return;
		};
		if self.fetching {
			return;
		}
		let sources = registry.sources().to_vec();
		let client = self.client.clone();
		let (tx, rx) = mpsc::channel(1);
		self.fetch_rx = Some(rx);
		self.fetching = true;
		tokio::spawn(async move {
			let report = fetch_all(&client, &sources).await;
			let _ = tx.send(report).await;
		});
	}

	pub fn handle_key_event(&mut self, key: KeyEvent) {
		if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
			self.should_quit = true;
			return;
		}

		if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('k') {
			self.open_palette();
			return;
		}

		if self.palette.is_open() {
			match self.palette.handle_key(key, self.results.len()) {
				PaletteOutcome::QueryChanged => {
					self.results = filter(&self.index, self.palette.query());
				}
				PaletteOutcome::Committed(index) => {
					if let Some(record) = self.results.get(index).cloned() {
						self.navigate(&record);
					}
				}
				PaletteOutcome::Handled | PaletteOutcome::Dismissed | PaletteOutcome::Ignored => {}
			}
			return;
		}

		match key.code {
			KeyCode::Char('q') => {
				self.should_quit = true;
			}
			KeyCode::Char('r') => {
				self.start_fetch();
			}
			KeyCode::Char('/') => {
				self.open_palette();
			}
			KeyCode::Tab | KeyCode::Right => {
				self.viewer.select_next_doc();
			}
			KeyCode::BackTab | KeyCode::Left => {
				self.viewer.select_prev_doc();
			}
			KeyCode::Down => {
				self.viewer.cursor_down();
			}
			KeyCode::Up => {
				self.viewer.cursor_up();
			}
			KeyCode::Enter => {
				self.viewer.toggle_expanded();
			}
			_ => {}
		}
	}

	fn open_palette(&mut self) {
		self.palette.open();
		self.results = filter(&self.index, self.palette.query());
	}

	fn navigate(&mut self, record: &OperationRecord) {
		let Some(registry) = &self.registry else {
			return;
		};
		self.pending_reveal = self.resolver.navigate(registry, &mut self.viewer, record);
	}

	pub fn tick(&mut self) {
		if let Some(rx) = &mut self.fetch_rx {
			match rx.try_recv() {
				Ok(report) => {
					self.fetch_rx = None;
					self.publish(report);
				}
				Err(mpsc::error::TryRecvError::Empty) => {}
				Err(mpsc::error::TryRecvError::Disconnected) => {
					self.fetch_rx = None;
					self.fetching = false;
				}
			}
		}

		let due = self
			.pending_reveal
			.as_ref()
			.is_some_and(|pending| pending.is_due(Instant::now()));
		if due {
			if let Some(pending) = self.pending_reveal.take() {
				self.resolver.reveal(&mut self.viewer, &pending.target);
			}
		}
	}

	/// Atomically replace the index and everything derived from it.
	fn publish(&mut self, report: FetchReport) {
		info!(
			operations = report.records.len(),
			succeeded = report.succeeded(),
			failed = report.failed(),
			"publishing endpoint index"
		);
		self.fetching = false;
		self.index = report.records;
		self.source_reports = report.sources;
		self.results = filter(&self.index, self.palette.query());
		// The result list just changed identity; a selection made against
		// the old list must not carry over to rows it never pointed at.
		self.palette.reset_cursor();

		let Some(registry) = &self.registry else {
			return;
		};
		let docs = registry
			.iter()
			.map(|source| DocEntry {
				source_name: source.name.clone(),
				url: source.url.clone(),
				title: self
					.source_reports
					.iter()
					.find(|r| r.source_name == source.name)
					.and_then(|r| r.title.clone()),
				operations: self
					.index
					.iter()
					.filter(|r| r.source_name == source.name)
					.cloned()
					.collect(),
			})
			.collect();
		self.viewer.set_documents(docs);
	}

	pub fn should_quit(&self) -> bool {
		self.should_quit
	}

	pub fn render(&mut self, frame: &mut Frame) {
		let areas = create_main_layout(frame.area()).split(frame.area());
		let header_area = areas[0];
		let content_area = areas[1];
		let status_area = areas[2];

		self.render_header(frame, header_area);

		if let Some(error) = &self.load_error {
			let message = Paragraph::new(vec![
				Line::from(Span::styled("Failed to load the API registry", self.theme.text.error)),
				Line::from(Span::styled(error.clone(), self.theme.text.normal)),
			])
			.block(Block::default().borders(Borders::ALL).border_style(self.theme.borders.normal));
			frame.render_widget(message, content_area);
		} else {
			self.viewer.render(frame, content_area, &self.theme);
		}

		self.render_status_bar(frame, status_area);

		if self.palette.is_open() {
			let overlay = palette_area(frame.area());
			frame.render_stateful_widget(
				Palette::new(&self.results, &self.theme),
				overlay,
				&mut self.palette,
			);
		}
	}

	fn render_header(&self, frame: &mut Frame, area: Rect) {
		let mut spans = vec![
			Span::styled("Spyglass", self.theme.text.bold),
			Span::styled("  ", self.theme.text.normal),
		];
		for (idx, doc) in self.viewer.docs().iter().enumerate() {
			let style = if self.viewer.active_index() == Some(idx) {
				self.theme.text.accent
			} else {
				self.theme.text.dim
			};
			spans.push(Span::styled(format!(" {} ", doc.label()), style));
		}
		let block = Block::default()
			.borders(Borders::BOTTOM)
			.border_style(self.theme.borders.normal);
		let inner = block.inner(area);
		frame.render_widget(block, area);
		frame.render_widget(Paragraph::new(Line::from(spans)), inner);
	}

	fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
		let status = if self.fetching {
			"Fetching API documents...".to_string()
		} else if self.load_error.is_some() {
			"Registry unavailable".to_string()
		} else {
			let failed = self.source_reports.iter().filter(|r| !r.ok).count();
			let mut status = format!(
				"{} APIs · {} operations",
				self.source_reports.len() - failed,
				self.index.len()
			);
			if failed > 0 {
				status.push_str(&format!(" · {failed} unreachable"));
			}
			status
		};
		let line = Line::from(vec![
			Span::styled(status, self.theme.text.dim),
			Span::styled("  Ctrl+K Search · Tab Next API · Enter Expand · r Refetch · q Quit", self.theme.text.dim),
		]);
		frame.render_widget(Paragraph::new(line), area);
	}
}
