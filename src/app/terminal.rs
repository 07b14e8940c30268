//! Screen ownership for the editor: raw mode, the alternate screen and the
//! optional input reporting, all undone on drop or panic.

use std::{
    io::{self, Stdout, Write},
    ops::{Deref, DerefMut},
    sync::{
        Once,
        atomic::{AtomicBool, Ordering},
    },
};

use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture},
    execute, queue,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{debug, warn};

use super::options::UiOptions;

type Backend = CrosstermBackend<Stdout>;

/// Event reporting switched on while the editor owns the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ScreenModes {
    /// Clicks, chip removal and drag reordering in the picker.
    pub mouse: bool,
    /// Focus loss closes the picker like a click elsewhere.
    pub focus: bool,
}

impl ScreenModes {
    pub fn for_options(options: &UiOptions) -> Self {
        Self {
            mouse: options.mouse,
            focus: true,
        }
    }
}

// The panic hook has no access to the screen, so the enabled modes live here.
static MOUSE_CAPTURED: AtomicBool = AtomicBool::new(false);
static FOCUS_REPORTED: AtomicBool = AtomicBool::new(false);
static RESTORE_ON_PANIC: Once = Once::new();

pub(crate) struct EditorScreen {
    terminal: Terminal<Backend>,
}

impl EditorScreen {
    pub fn enter(modes: ScreenModes) -> Result<Self> {
        enable_raw_mode().context("failed to enable raw mode")?;
        let terminal = take_over(modes).inspect_err(|_| hand_back())?;
        RESTORE_ON_PANIC.call_once(|| {
            let previous = std::panic::take_hook();
            std::panic::set_hook(Box::new(move |info| {
                hand_back();
                previous(info);
            }));
        });
        debug!(?modes, "editor owns the terminal");
        Ok(Self { terminal })
    }
}

impl Drop for EditorScreen {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        hand_back();
    }
}

impl Deref for EditorScreen {
    type Target = Terminal<Backend>;

    fn deref(&self) -> &Self::Target {
        &self.terminal
    }
}

impl DerefMut for EditorScreen {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.terminal
    }
}

fn take_over(modes: ScreenModes) -> Result<Terminal<Backend>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
    if modes.mouse {
        execute!(stdout, EnableMouseCapture).context("failed to enable mouse capture")?;
        MOUSE_CAPTURED.store(true, Ordering::SeqCst);
    }
    if modes.focus {
        match execute!(stdout, EnableFocusChange) {
            Ok(()) => FOCUS_REPORTED.store(true, Ordering::SeqCst),
            Err(err) => warn!(error = %err, "focus reporting unavailable"),
        }
    }
    Terminal::new(CrosstermBackend::new(stdout)).context("failed to initialize terminal")
}

/// Undoes whatever `take_over` managed to switch on. Safe to call twice.
fn hand_back() {
    let mut stdout = io::stdout();
    if MOUSE_CAPTURED.swap(false, Ordering::SeqCst) {
        let _ = queue!(stdout, DisableMouseCapture);
    }
    if FOCUS_REPORTED.swap(false, Ordering::SeqCst) {
        let _ = queue!(stdout, DisableFocusChange);
    }
    let _ = queue!(stdout, LeaveAlternateScreen, Show);
    let _ = stdout.flush();
    let _ = disable_raw_mode();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mouse_capture_follows_options() {
        let modes = ScreenModes::for_options(&UiOptions::default());
        assert!(modes.mouse);
        assert!(modes.focus);

        let modes = ScreenModes::for_options(&UiOptions::default().with_mouse(false));
        assert!(!modes.mouse);
        assert!(modes.focus);
    }
}
