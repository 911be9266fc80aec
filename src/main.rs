use std::io;
use std::sync::mpsc::{self, Receiver};
use std::time::{Duration, Instant};

use crossterm::event;
use decision_coin::app::{Controller, EventResult};
use decision_coin::kernel::services::adapters::{load_settings, AppMessage, AsyncRuntime};
use decision_coin::kernel::services::ports::Settings;
use decision_coin::kernel::{AppState, Store};
use decision_coin::tui::terminal_guard::{ExitSignal, TerminalMode, TerminalSession};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

mod logging;

type Tui = Terminal<CrosstermBackend<io::Stdout>>;

const SIGNAL_GRACE: Duration = Duration::from_secs(2);

fn main() -> io::Result<()> {
    let logging = logging::init();

    let settings = load_settings().unwrap_or_else(|err| {
        tracing::warn!(error = %err, "settings unavailable, using defaults");
        Settings::default()
    });
    let state = AppState::new(&settings);
    let tick_interval = state.tick_interval;

    let (tx, rx) = mpsc::channel::<AppMessage>();
    let runtime = AsyncRuntime::new(tx)?;
    let mut controller = Controller::new(
        Store::new(state),
        Box::new(runtime.timer_scheduler()),
    );

    let session = TerminalSession::enter(TerminalMode::default())?;
    session.install_panic_hook();
    let (signal_tx, signal_rx) = mpsc::channel::<ExitSignal>();
    #[cfg(unix)]
    let _signal_thread = decision_coin::tui::terminal_guard::install_exit_signals(
        session.restorer(),
        signal_tx,
        SIGNAL_GRACE,
    )?;
    #[cfg(not(unix))]
    drop(signal_tx);

    let mut terminal: Tui = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    terminal.clear()?;

    let outcome = run(&mut terminal, &mut controller, &rx, &signal_rx, tick_interval);

    controller.abandon_timers();
    let restored = session.restorer().restore();
    drop(session);

    match outcome {
        Ok(Some(signal)) => {
            tracing::info!(?signal, "exiting on signal");
            drop(logging);
            std::process::exit(signal.exit_code());
        }
        Ok(None) => {
            tracing::info!("exiting");
            restored
        }
        Err(err) => {
            tracing::error!(error = %err, "main loop failed");
            if let Some(dir) = logging.as_ref().map(|guard| guard.log_dir()) {
                eprintln!("decision-coin: {err} (logs in {})", dir.display());
            }
            Err(err)
        }
    }
}

/// Returns the signal that stopped the loop, or `None` when the user quit.
fn run(
    terminal: &mut Tui,
    controller: &mut Controller,
    rx: &Receiver<AppMessage>,
    signal_rx: &Receiver<ExitSignal>,
    tick_interval: Duration,
) -> io::Result<Option<ExitSignal>> {
    let mut dirty = true;
    let mut last_tick = Instant::now();

    loop {
        if let Ok(signal) = signal_rx.try_recv() {
            return Ok(Some(signal));
        }

        dirty |= controller.drain_messages(rx);

        if dirty {
            terminal.draw(|frame| {
                let area = frame.area();
                controller.render(frame, area);
            })?;
            dirty = false;
        }

        let timeout = tick_interval.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match controller.handle_input(&event::read()?) {
                EventResult::Quit => return Ok(None),
                EventResult::Consumed => dirty = true,
                EventResult::Ignored => {}
            }
        }

        if last_tick.elapsed() >= tick_interval {
            dirty |= controller.tick();
            last_tick = Instant::now();
        }
    }
}
