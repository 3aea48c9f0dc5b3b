//! Terminal 2048 runner (default binary).
//!
//! Without a subcommand this starts the interactive game. It uses crossterm
//! for input and the framebuffer renderer from `tui_2048::term`.
//! `tui-2048 script --moves ...` plays headless and prints JSON.

use std::io;

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tui_2048::cli::{parse_moves, Cli, Command};
use tui_2048::core::Session;
use tui_2048::input::{handle_key_event, should_quit};
use tui_2048::script::run_script;
use tui_2048::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_2048::types::GameConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.config()?;

    match &cli.command {
        Some(Command::Script { moves, final_only }) => {
            init_tracing("warn");
            let sides = parse_moves(moves)?;
            let mut session = Session::new(&config, cli.seed)?;
            let mut out = io::stdout().lock();
            run_script(&mut session, &sides, *final_only, &mut out)?;
            Ok(())
        }
        None => {
            // The terminal belongs to the renderer; log only when asked to.
            init_tracing("off");
            play(&config, cli.seed)
        }
    }
}

fn init_tracing(default_filter: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn play(config: &GameConfig, seed: u32) -> Result<()> {
    let mut session = Session::new(config, seed)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session);

    // Always try to restore terminal state.
    let _ = term.exit();

    let snap = session.snapshot();
    tracing::info!(score = snap.score, best = snap.max_score, "quit");
    result
}

fn run(term: &mut TerminalRenderer, session: &mut Session) -> Result<()> {
    session.start();

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut dirty = true;

    loop {
        if dirty {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            let snap = session.snapshot();
            view.render_into(&snap, Viewport::new(w, h), &mut fb);
            term.draw(&fb)?;
            dirty = false;
        }

        // Nothing animates, so block until the next event.
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    dirty = session.apply_action(action);
                }
            }
            Event::Resize(_, _) => {
                term.invalidate();
                dirty = true;
            }
            _ => {}
        }
    }
}
