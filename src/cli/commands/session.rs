//! Interactive course selection
//!
//! Reads commands line by line, toggles courses in a [`Selection`] and
//! prints the recalculated fees after every change. The selection lives only
//! as long as the session.

use course_fees::core::fees::{calculate, FeeBreakdown};
use course_fees::core::models::{Catalog, Selection};
use course_fees::core::quote::Quote;
use course_fees::core::report::{ReportContext, ReportGenerator, TextReporter};
use course_fees::{debug, error};
use std::io::{self, BufRead, Write};

const HELP: &str = "\
Commands:
  toggle <id>   select or deselect a course (alias: t)
  list          show the catalog with current selections
  show          show the current fees
  clear         deselect everything
  done          print the fee summary and finish
  quit          leave without a summary
  help          show this help";

/// Session outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A summary was printed
    Completed,
    /// The user quit or input ended first
    Abandoned,
}

/// Display settings for a session
pub struct SessionView<'a> {
    /// Currency symbol for amounts
    pub currency_symbol: &'a str,
    /// Organization name for the final summary
    pub organization: &'a str,
}

/// Run the session on stdin/stdout
pub fn run(view: &SessionView) {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    if let Err(e) = run_with(&mut stdin.lock(), &mut stdout, Catalog::standard(), view) {
        error!("session I/O failed: {e}");
        eprintln!("✗ Session ended: {e}");
        std::process::exit(1);
    }
}

/// Run a session over any reader and writer
///
/// # Errors
/// Returns an error if reading input or writing output fails.
pub fn run_with<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    catalog: &Catalog,
    view: &SessionView,
) -> io::Result<Outcome> {
    let mut selection = Selection::new();
    writeln!(out, "{HELP}")?;

    let mut line = String::new();
    loop {
        write!(out, "> ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(Outcome::Abandoned);
        }

        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            continue;
        };
        let arg = words.next();
        debug!("session command: {command} {arg:?}");

        match (command, arg) {
            ("toggle" | "t", Some(id)) => {
                let Some(course) = catalog.get(id) else {
                    writeln!(out, "✗ Unknown course: '{id}'")?;
                    continue;
                };
                if selection.toggle(id) {
                    writeln!(out, "✓ Selected {}", course.title)?;
                } else {
                    writeln!(out, "✓ Removed {}", course.title)?;
                }
                write_fees(out, &calculate(&selection, catalog), selection.len(), view)?;
            }
            ("toggle" | "t", None) => writeln!(out, "✗ Usage: toggle <id>")?,
            ("list", _) => {
                for course in catalog.courses() {
                    let mark = if selection.contains(&course.id) { "x" } else { " " };
                    writeln!(out, "[{mark}] {:<20} {}", course.id, course.title)?;
                }
            }
            ("show", _) => {
                write_fees(out, &calculate(&selection, catalog), selection.len(), view)?;
            }
            ("clear", _) => {
                selection.clear();
                writeln!(out, "✓ Selection cleared")?;
            }
            ("done", _) => match Quote::prepare(&selection, catalog) {
                Ok(quote) => {
                    let ctx = ReportContext::new(&quote, view.currency_symbol, view.organization);
                    let text = TextReporter::new()
                        .render(&ctx)
                        .map_err(|e| io::Error::other(e.to_string()))?;
                    write!(out, "{text}")?;
                    return Ok(Outcome::Completed);
                }
                Err(e) => writeln!(out, "ℹ {e}")?,
            },
            ("quit" | "exit", _) => return Ok(Outcome::Abandoned),
            ("help", _) => writeln!(out, "{HELP}")?,
            (other, _) => writeln!(out, "✗ Unknown command: '{other}' (try 'help')")?,
        }
    }
}

fn write_fees<W: Write>(
    out: &mut W,
    fees: &FeeBreakdown,
    count: usize,
    view: &SessionView,
) -> io::Result<()> {
    let parts: Vec<String> = fees
        .summary_lines(view.currency_symbol)
        .into_iter()
        .map(|(label, value)| format!("{label}: {value}"))
        .collect();
    writeln!(out, "  {count} selected | {}", parts.join(" | "))
}
