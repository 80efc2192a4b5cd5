//! ked - terminal-control core for a full-screen editor
//!
//! Puts the terminal into raw mode, renders a full-screen frame, and
//! moves a clamped cursor with the arrow and page keys (plus `h/j/k/l`
//! with `--vim`). Ctrl-Q quits.

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::ensure;
use clap::Parser;

use ked::editor::{self, InputMode};
use ked::version;

#[derive(Parser)]
#[command(
    name = "ked",
    version = version::version_string(),
    about = "Terminal-control core for a full-screen editor"
)]
struct Cli {
    /// Additionally map h/j/k/l to left/down/up/right
    #[arg(long)]
    vim: bool,
}

fn main() -> ExitCode {
    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("ked: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn try_main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Raw mode and the cursor-report probe only make sense on a real
    // terminal; bail out before touching any terminal state
    ensure!(
        atty::is(atty::Stream::Stdin) && atty::is(atty::Stream::Stdout),
        "standard input and output must be a terminal"
    );

    let mode = if cli.vim {
        InputMode::Vim
    } else {
        InputMode::Default
    };

    editor::run(mode).map_err(|err| {
        // The session guard has already restored the terminal; leave the
        // screen clean before the diagnostic lands on stderr
        reset_screen();
        err
    })?;
    Ok(())
}

/// Best-effort full clear and cursor home on the fatal-error path. The
/// control channel is already known broken, so failures are ignored.
fn reset_screen() {
    let mut out = io::stdout();
    let _ = editor::clear_screen(&mut out);
    let _ = out.flush();
}
