//! Terminal collaborator and the interactive prompt.
//!
//! [`Console`] pairs a line reader with a writer so the engine can be driven
//! from real stdio or from in-memory buffers in tests. [`Console::ask`]
//! renders a numbered menu plus a `q` option and keeps asking until it gets
//! a valid number or a quit. End of input counts as a quit.

use std::io::{self, BufRead, Write};
use tracing::{debug, trace};

/// Answer from [`Console::ask`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// The option string the user picked.
    Choice(String),
    /// `q`/`Q`, or the input stream ended.
    Quit,
}

impl Response {
    /// True if the user picked exactly `option`.
    pub fn is(&self, option: &str) -> bool {
        matches!(self, Response::Choice(c) if c == option)
    }
}

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    /// Console over the process's stdin/stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write `line` followed by a newline.
    pub fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{line}")?;
        self.output.flush()
    }

    /// Read one line without its line terminator. `None` at end of input.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        let trimmed = buf.trim_end_matches(['\n', '\r']).len();
        buf.truncate(trimmed);
        Ok(Some(buf))
    }

    /// Ask `question` with a 1-based menu built from `options`.
    pub fn ask(&mut self, question: &str, options: &[&str]) -> io::Result<Response> {
        let menu = render_menu(options);
        loop {
            write!(self.output, "--> {question}: [{menu}]: ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                debug!(question, "end of input at prompt; treating as quit");
                // finish the dangling prompt line
                writeln!(self.output)?;
                return Ok(Response::Quit);
            };

            match parse_answer(&line, options.len()) {
                Some(Answer::Quit) => return Ok(Response::Quit),
                Some(Answer::Index(i)) => return Ok(Response::Choice(options[i].to_string())),
                None => trace!(input = %line, "invalid prompt response; asking again"),
            }
        }
    }

    /// Borrow the writer (tests inspect captured output through this).
    pub fn output(&self) -> &W {
        &self.output
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Answer {
    Quit,
    /// 0-based index into the options.
    Index(usize),
}

fn render_menu(options: &[&str]) -> String {
    let mut parts: Vec<String> = options
        .iter()
        .enumerate()
        .map(|(i, opt)| format!("{}: {}", i + 1, opt))
        .collect();
    parts.push("q: Quit".to_string());
    parts.join(", ")
}

fn parse_answer(line: &str, option_count: usize) -> Option<Answer> {
    let s = line.trim();
    if s == "q" || s == "Q" {
        return Some(Answer::Quit);
    }
    match s.parse::<usize>() {
        Ok(n) if (1..=option_count).contains(&n) => Some(Answer::Index(n - 1)),
        _ => None,
    }
}
