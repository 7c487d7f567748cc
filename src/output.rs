//! User-facing notices.
//!
//! Prompts and action lines are written by the engine through its
//! [`Console`](crate::prompt::Console); this module covers the one-off
//! notices from the binary (errors, the quit notice, the dry-run banner).
//! Prefixes are colored only when stdout is a TTY.

use owo_colors::OwoColorize;

fn is_tty() -> bool {
    atty::is(atty::Stream::Stdout)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tone {
    Info,
    Warn,
    Error,
    Success,
}

impl Tone {
    fn label(self) -> &'static str {
        match self {
            Tone::Info => "info:",
            Tone::Warn => "warn:",
            Tone::Error => "error:",
            Tone::Success => "ok:",
        }
    }

    fn painted(self) -> String {
        let label = self.label();
        match self {
            Tone::Info => label.cyan().bold().to_string(),
            Tone::Warn => label.yellow().bold().to_string(),
            Tone::Error => label.red().bold().to_string(),
            Tone::Success => label.green().bold().to_string(),
        }
    }
}

fn render(tone: Tone, msg: &str, color: bool) -> String {
    if color {
        format!("{} {}", tone.painted(), msg)
    } else {
        format!("{} {}", tone.label(), msg)
    }
}

pub fn print_info(msg: &str) {
    println!("{}", render(Tone::Info, msg, is_tty()));
}

pub fn print_warn(msg: &str) {
    eprintln!("{}", render(Tone::Warn, msg, is_tty()));
}

pub fn print_error(msg: &str) {
    eprintln!("{}", render(Tone::Error, msg, is_tty()));
}

pub fn print_success(msg: &str) {
    println!("{}", render(Tone::Success, msg, is_tty()));
}
