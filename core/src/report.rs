//! Rendering of sweep results.
//!
//! The line formats are part of the tool's output contract:
//!
//! ```text
//! Starting ping scan from 10.0.0.0 to 10.0.0.3...
//! [UP]   10.0.0.1 - 0.045 ms
//! [UP]   10.0.0.2 - reply received
//! [DOWN] 10.0.0.3 - unreachable
//! [DOWN] 10.0.0.4 - timeout
//! [ERROR] 10.0.0.5 - permission denied
//! ```

use std::io::{self, Write};

use colored::*;

use crate::probe::ProbeResult;

/// Receives the outcome of a sweep as it happens.
pub trait SweepReporter {
    /// Called once, before the first probe, with the ascending endpoints.
    fn begin(&mut self, start: &str, end: &str) -> io::Result<()>;

    /// Called once per address, in ascending address order.
    fn record(&mut self, address: &str, result: &ProbeResult) -> io::Result<()>;
}

/// Collects the `(address, result)` sequence instead of printing it.
impl SweepReporter for Vec<(String, ProbeResult)> {
    fn begin(&mut self, _start: &str, _end: &str) -> io::Result<()> {
        Ok(())
    }

    fn record(&mut self, address: &str, result: &ProbeResult) -> io::Result<()> {
        self.push((address.to_string(), result.clone()));
        Ok(())
    }
}

pub fn header_line(start: &str, end: &str) -> String {
    format!("Starting ping scan from {start} to {end}...")
}

pub fn result_line(address: &str, result: &ProbeResult) -> String {
    let (tag, detail) = parts(result);
    format!("{tag} {address} - {detail}")
}

fn colored_result_line(address: &str, result: &ProbeResult) -> String {
    let (tag, detail) = parts(result);
    // Padding stays outside the colored span so the columns line up.
    let (label, pad) = tag.split_at(tag.trim_end().len());
    let label: ColoredString = match result {
        ProbeResult::Up { .. } => label.green().bold(),
        ProbeResult::Down(_) => label.red(),
        ProbeResult::Error(_) => label.yellow().bold(),
    };
    format!("{label}{pad} {address} - {detail}")
}

fn parts(result: &ProbeResult) -> (&'static str, String) {
    match result {
        ProbeResult::Up { latency: Some(latency) } => ("[UP]  ", format!("{latency} ms")),
        ProbeResult::Up { latency: None } => ("[UP]  ", "reply received".to_string()),
        ProbeResult::Down(reason) => ("[DOWN]", reason.to_string()),
        ProbeResult::Error(message) => ("[ERROR]", message.clone()),
    }
}

/// Writes one line per event to `out`, flushing after each so results show
/// up while the sweep is still running.
pub struct LineReporter<W: Write> {
    out: W,
    colored: bool,
}

impl<W: Write> LineReporter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            colored: false,
        }
    }

    pub fn colored(mut self, colored: bool) -> Self {
        self.colored = colored;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.out, "{line}")?;
        self.out.flush()
    }
}

impl<W: Write> SweepReporter for LineReporter<W> {
    fn begin(&mut self, start: &str, end: &str) -> io::Result<()> {
        self.write_line(&header_line(start, end))
    }

    fn record(&mut self, address: &str, result: &ProbeResult) -> io::Result<()> {
        let line = if self.colored {
            colored_result_line(address, result)
        } else {
            result_line(address, result)
        };
        self.write_line(&line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::{DownReason, Latency};
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_every_line_form() {
        let up = ProbeResult::Up { latency: Latency::parse("0.5") };
        let up_no_rtt = ProbeResult::Up { latency: None };
        let unreachable = ProbeResult::Down(DownReason::Unreachable);
        let timeout = ProbeResult::Down(DownReason::Timeout);
        let error = ProbeResult::Error("permission denied".into());

        assert_eq!(result_line("10.0.0.1", &up), "[UP]   10.0.0.1 - 0.5 ms");
        assert_eq!(result_line("10.0.0.2", &up_no_rtt), "[UP]   10.0.0.2 - reply received");
        assert_eq!(result_line("10.0.0.3", &unreachable), "[DOWN] 10.0.0.3 - unreachable");
        assert_eq!(result_line("10.0.0.4", &timeout), "[DOWN] 10.0.0.4 - timeout");
        assert_eq!(result_line("10.0.0.5", &error), "[ERROR] 10.0.0.5 - permission denied");
    }

    #[test]
    fn line_reporter_writes_header_then_results() {
        let mut reporter = LineReporter::new(Vec::new());
        reporter.begin("10.0.0.0", "10.0.0.1").unwrap();
        reporter
            .record("10.0.0.0", &ProbeResult::Down(DownReason::Timeout))
            .unwrap();

        let text = String::from_utf8(reporter.into_inner()).unwrap();
        assert_eq!(
            text,
            "Starting ping scan from 10.0.0.0 to 10.0.0.1...\n[DOWN] 10.0.0.0 - timeout\n"
        );
    }

    #[test]
    fn colored_line_keeps_text() {
        colored::control::set_override(true);
        let line = colored_result_line("10.0.0.1", &ProbeResult::Up { latency: None });
        colored::control::unset_override();

        assert!(line.contains("[UP]"));
        assert!(line.ends_with("   10.0.0.1 - reply received"));
        assert!(line.contains('\u{1b}'));
    }
}
