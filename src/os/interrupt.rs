//! Keeps Ctrl-C from ending the shell while a foreground job runs.

use nix::sys::signal::{SaFlags, SigAction, SigHandler, SigSet, Signal, sigaction};

extern "C" fn on_interrupt(_: nix::libc::c_int) {}

/// Catch `SIGINT` with a handler that does nothing.
///
/// A caught signal is reset to its default action on `exec`, so children
/// still die on Ctrl-C. `SIG_IGN` would be inherited and is not used. The
/// line editor installs its own handling while it reads input.
pub fn guard_shell() -> nix::Result<()> {
    let action = SigAction::new(
        SigHandler::Handler(on_interrupt),
        SaFlags::SA_RESTART,
        SigSet::empty(),
    );
    // SAFETY: the handler touches no state and is async-signal-safe.
    unsafe { sigaction(Signal::SIGINT, &action) }.map(|_| ())
}
