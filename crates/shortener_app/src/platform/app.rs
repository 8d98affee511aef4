use std::io::{self, BufRead, Write};
use std::path::Path;
use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use anyhow::Context;
use log::LevelFilter;
use shortener_core::{update, AppState, Msg};
use shortener_gateway::ReqwestGateway;
use shortener_logging::{shortener_info, shortener_warn};

use super::clipboard::SystemClipboard;
use super::config::{ClientConfig, API_BASE_ENV, CONFIG_FILENAME, LOG_FILENAME};
use super::effects::{EffectRunner, MsgSink};
use super::ui;
use super::ui::commands::{Action, CommandError};

enum AppEvent {
    Msg(Msg),
    Line(String),
    InputClosed,
}

struct ChannelSink {
    tx: Mutex<mpsc::Sender<AppEvent>>,
}

impl MsgSink for ChannelSink {
    fn send(&self, msg: Msg) {
        if let Ok(tx) = self.tx.lock() {
            let _ = tx.send(AppEvent::Msg(msg));
        }
    }
}

pub fn run_app() -> anyhow::Result<()> {
    let config = ClientConfig::load(Path::new(CONFIG_FILENAME))?
        .with_api_base_override(std::env::var(API_BASE_ENV).ok());
    shortener_logging::initialize(
        config.log_destination,
        LevelFilter::Info,
        Path::new(LOG_FILENAME),
    );
    shortener_info!("Starting against {}", config.api_base);

    let gateway = ReqwestGateway::new(config.gateway_settings())
        .with_context(|| format!("cannot use api base {}", config.api_base))?;

    let (event_tx, event_rx) = mpsc::channel::<AppEvent>();
    let sink = Arc::new(ChannelSink {
        tx: Mutex::new(event_tx.clone()),
    });
    let runner = EffectRunner::new(Arc::new(gateway), Box::new(SystemClipboard::new()), sink)
        .context("failed to start effect runtime")?;

    spawn_input_reader(event_tx);

    let mut view = View::new(runner, io::stdout());
    view.dispatch(Msg::Activated);

    while let Ok(event) = event_rx.recv() {
        match event {
            AppEvent::Msg(msg) => view.dispatch(msg),
            AppEvent::Line(line) => {
                if !view.handle_line(&line) {
                    break;
                }
            }
            AppEvent::InputClosed => break,
        }
    }

    view.tear_down();
    shortener_info!("Shut down");
    Ok(())
}

/// Stdin is read on its own thread so gateway outcomes keep arriving while
/// the user types.
fn spawn_input_reader(tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(line) => {
                    if tx.send(AppEvent::Line(line)).is_err() {
                        return;
                    }
                }
                Err(err) => {
                    shortener_warn!("Reading stdin failed: {}", err);
                    break;
                }
            }
        }
        let _ = tx.send(AppEvent::InputClosed);
    });
}

/// Owns the state for the lifetime of one mounted view.
struct View<W: Write> {
    state: AppState,
    runner: EffectRunner,
    out: W,
}

impl<W: Write> View<W> {
    fn new(runner: EffectRunner, out: W) -> Self {
        Self {
            state: AppState::new(),
            runner,
            out,
        }
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let was_dirty = state.consume_dirty();
        self.state = state;
        self.runner.enqueue(effects);
        if was_dirty {
            self.render();
        }
    }

    /// Returns false when the user asked to quit.
    fn handle_line(&mut self, line: &str) -> bool {
        match ui::commands::interpret(line, &self.state.view()) {
            Ok(Action::Dispatch(msgs)) => {
                for msg in msgs {
                    self.dispatch(msg);
                }
            }
            Ok(Action::Show) => self.render(),
            Ok(Action::Help) => self.print(ui::constants::HELP),
            Ok(Action::Quit) => return false,
            Err(err) => self.report(&err),
        }
        true
    }

    fn render(&mut self) {
        let text = ui::render::render(&self.state.view()).join("\n");
        self.print(&text);
    }

    fn report(&mut self, err: &CommandError) {
        self.print(&format!("! {err}"));
    }

    fn print(&mut self, text: &str) {
        if writeln!(self.out, "\n{text}").and_then(|_| self.out.flush()).is_err() {
            shortener_warn!("Writing to terminal failed");
        }
    }

    fn tear_down(mut self) {
        self.dispatch(Msg::TornDown);
        self.runner.shutdown();
    }
}
