use super::*;
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct RecordingOps {
    calls: Mutex<Vec<&'static str>>,
}

impl RecordingOps {
    fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }
}

impl TerminalOps for RecordingOps {
    fn enter(&self) -> io::Result<()> {
        self.calls.lock().unwrap().push("enter");
        Ok(())
    }

    fn leave(&self) -> io::Result<()> {
        self.calls.lock().unwrap().push("leave");
        Ok(())
    }
}

#[test]
fn session_leaves_on_drop() {
    let ops = Arc::new(RecordingOps::default());
    {
        let _session = TerminalSession::enter_with(ops.clone()).unwrap();
        assert_eq!(ops.calls(), ["enter"]);
    }
    assert_eq!(ops.calls(), ["enter", "leave"]);
}

#[test]
fn restorer_runs_once_across_clones() {
    let ops = Arc::new(RecordingOps::default());
    let session = TerminalSession::enter_with(ops.clone()).unwrap();
    let first = session.restorer();
    let second = session.restorer();
    assert!(!first.is_restored());

    first.restore().unwrap();
    assert!(second.is_restored());
    second.restore().unwrap();
    drop(session);

    assert_eq!(ops.calls(), ["enter", "leave"]);
}

#[test]
fn failed_enter_never_leaves() {
    struct BrokenTty;

    impl TerminalOps for BrokenTty {
        fn enter(&self) -> io::Result<()> {
            Err(io::Error::other("not a tty"))
        }

        fn leave(&self) -> io::Result<()> {
            panic!("leave without enter");
        }
    }

    assert!(TerminalSession::enter_with(Arc::new(BrokenTty)).is_err());
}

#[test]
fn default_mode_enables_mouse_and_paste() {
    let mode = TerminalMode::default();
    assert!(mode.mouse_capture);
    assert!(mode.bracketed_paste);
}

#[test]
fn exit_codes_follow_shell_convention() {
    assert_eq!(ExitSignal::Interrupt.exit_code(), 130);
    assert_eq!(ExitSignal::Terminate.exit_code(), 143);
}

#[cfg(unix)]
#[test]
fn raw_signals_map_to_exit_signals() {
    use signal_hook::consts::signal::{SIGHUP, SIGINT, SIGTERM};

    assert_eq!(ExitSignal::from_raw(SIGINT), Some(ExitSignal::Interrupt));
    assert_eq!(ExitSignal::from_raw(SIGTERM), Some(ExitSignal::Terminate));
    assert_eq!(ExitSignal::from_raw(SIGHUP), None);
}
