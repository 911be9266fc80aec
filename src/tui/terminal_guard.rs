use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Terminal features the session turns on while the UI runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalMode {
    pub mouse_capture: bool,
    /// Pasted questions arrive as one `Event::Paste` instead of a key storm.
    pub bracketed_paste: bool,
}

impl Default for TerminalMode {
    fn default() -> Self {
        Self {
            mouse_capture: true,
            bracketed_paste: true,
        }
    }
}

pub trait TerminalOps: Send + Sync + 'static {
    fn enter(&self) -> io::Result<()>;
    fn leave(&self) -> io::Result<()>;
}

#[derive(Debug, Default)]
pub struct CrosstermTerminal {
    mode: TerminalMode,
}

impl CrosstermTerminal {
    pub fn new(mode: TerminalMode) -> Self {
        Self { mode }
    }
}

impl TerminalOps for CrosstermTerminal {
    fn enter(&self) -> io::Result<()> {
        use crossterm::event::{EnableBracketedPaste, EnableMouseCapture};
        use crossterm::execute;
        use crossterm::terminal::{enable_raw_mode, EnterAlternateScreen};

        enable_raw_mode()?;
        let mut out = io::stdout();
        execute!(out, EnterAlternateScreen)?;
        if self.mode.mouse_capture {
            execute!(out, EnableMouseCapture)?;
        }
        if self.mode.bracketed_paste {
            execute!(out, EnableBracketedPaste)?;
        }
        Ok(())
    }

    fn leave(&self) -> io::Result<()> {
        use crossterm::cursor::Show;
        use crossterm::event::{DisableBracketedPaste, DisableMouseCapture};
        use crossterm::execute;
        use crossterm::terminal::{disable_raw_mode, LeaveAlternateScreen};

        let mut out = io::stdout();
        let mut steps = vec![disable_raw_mode()];
        if self.mode.bracketed_paste {
            steps.push(execute!(out, DisableBracketedPaste));
        }
        if self.mode.mouse_capture {
            steps.push(execute!(out, DisableMouseCapture));
        }
        steps.push(execute!(out, LeaveAlternateScreen, Show));

        // Every step runs; the first failure is reported.
        steps.into_iter().collect()
    }
}

struct RestoreState {
    done: AtomicBool,
    ops: Arc<dyn TerminalOps>,
}

/// Shared handle that puts the terminal back exactly once.
///
/// Clones go to the panic hook and the signal thread; whichever of them,
/// the session drop, or the normal exit path runs first does the work.
#[derive(Clone)]
pub struct TerminalRestorer {
    state: Arc<RestoreState>,
}

impl TerminalRestorer {
    pub fn restore(&self) -> io::Result<()> {
        if self.state.done.swap(true, Ordering::SeqCst) {
            return Ok(());
        }
        self.state.ops.leave()
    }

    pub fn is_restored(&self) -> bool {
        self.state.done.load(Ordering::SeqCst)
    }
}

/// The terminal in UI mode for as long as this value lives.
pub struct TerminalSession {
    restorer: TerminalRestorer,
}

impl TerminalSession {
    pub fn enter(mode: TerminalMode) -> io::Result<Self> {
        Self::enter_with(Arc::new(CrosstermTerminal::new(mode)))
    }

    pub fn enter_with(ops: Arc<dyn TerminalOps>) -> io::Result<Self> {
        ops.enter()?;
        Ok(Self {
            restorer: TerminalRestorer {
                state: Arc::new(RestoreState {
                    done: AtomicBool::new(false),
                    ops,
                }),
            },
        })
    }

    pub fn restorer(&self) -> TerminalRestorer {
        self.restorer.clone()
    }

    /// Leaves UI mode before the previously installed hook prints the panic.
    pub fn install_panic_hook(&self) {
        let restorer = self.restorer();
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = restorer.restore();
            previous(info);
        }));
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.restorer.restore();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitSignal {
    Interrupt,
    Terminate,
}

impl ExitSignal {
    #[cfg(unix)]
    pub fn from_raw(signal: i32) -> Option<Self> {
        use signal_hook::consts::signal::{SIGINT, SIGTERM};

        match signal {
            SIGINT => Some(ExitSignal::Interrupt),
            SIGTERM => Some(ExitSignal::Terminate),
            _ => None,
        }
    }

    /// Shell convention: 128 plus the signal number.
    pub fn exit_code(self) -> i32 {
        match self {
            ExitSignal::Interrupt => 130,
            ExitSignal::Terminate => 143,
        }
    }
}

/// Forwards SIGINT/SIGTERM to the main loop. A loop that has not exited
/// within `grace` is cut short: the terminal is restored and the process exits.
#[cfg(unix)]
pub fn install_exit_signals(
    restorer: TerminalRestorer,
    tx: std::sync::mpsc::Sender<ExitSignal>,
    grace: std::time::Duration,
) -> io::Result<std::thread::JoinHandle<()>> {
    use signal_hook::consts::signal::{SIGINT, SIGTERM};
    use signal_hook::iterator::Signals;

    let mut signals = Signals::new([SIGINT, SIGTERM])?;
    std::thread::Builder::new()
        .name("decision-coin-signals".to_string())
        .spawn(move || {
            if let Some(signal) = signals.forever().find_map(ExitSignal::from_raw) {
                tracing::info!(?signal, "exit signal received");
                let _ = tx.send(signal);

                std::thread::sleep(grace);
                tracing::warn!(?signal, "main loop did not exit in time");
                let _ = restorer.restore();
                std::process::exit(signal.exit_code());
            }
        })
}

#[cfg(test)]
#[path = "../../tests/unit/tui/terminal_guard.rs"]
mod tests;
