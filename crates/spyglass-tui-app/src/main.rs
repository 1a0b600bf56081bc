// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

mod app;
mod layout;
mod viewer;

use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing_subscriber::EnvFilter;

use spyglass_registry::Registry;

use app::App;

const TICK_RATE: Duration = Duration::from_millis(100);

/// Terminal browser for multiple OpenAPI-documented APIs.
#[derive(Debug, Parser)]
#[command(name = "spyglass", version)]
struct Cli {
	/// Path to the API registry (a JSON array of {name, url, description}).
	#[arg(long, env = "SPYGLASS_REGISTRY", default_value = "apis.json")]
	registry: PathBuf,

	/// Where to write logs. Stdout belongs to the TUI.
	#[arg(long, env = "SPYGLASS_LOG", default_value = "spyglass.log")]
	log_file: PathBuf,
}

fn init_tracing(path: &PathBuf) -> Result<()> {
	let file = File::create(path).with_context(|| format!("failed to open log file {}", path.display()))?;
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::from_default_env())
		.with_writer(Mutex::new(file))
		.with_ansi(false)
		.init();
	Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
	let cli = Cli::parse();
	init_tracing(&cli.log_file)?;

	// A missing or malformed registry is a persistent error screen, not a
	// crash: the app still runs so the failure is visible.
	let registry = Registry::from_path(&cli.registry);
	let mut app = App::new(registry);
	app.start_fetch();

	run(app)
}

fn run(mut app: App) -> Result<()> {
	enable_raw_mode()?;
	io::stdout().execute(EnterAlternateScreen)?;

	let backend = CrosstermBackend::new(io::stdout());
	let mut terminal = Terminal::new(backend)?;

	let result = (|| -> Result<()> {
		loop {
			terminal.draw(|frame| app.render(frame))?;

			if event::poll(TICK_RATE)? {
				if let Event::Key(key) = event::read()? {
					if key.kind == KeyEventKind::Press {
						app.handle_key_event(key);
					}
				}
			}

			app.tick();

			if app.should_quit() {
				break;
			}
		}
		Ok(())
	})();

	disable_raw_mode()?;
	io::stdout().execute(LeaveAlternateScreen)?;
	result
}
