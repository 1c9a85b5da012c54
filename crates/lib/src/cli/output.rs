use core::fmt;
use std::io::{self, Write};

use serde::Serialize;

use crate::cli::Report;

/// Where a solution writes its answer, its benchmark report and any
/// messages.
pub(crate) struct Output<W> {
    out: W,
    kind: OutputKind,
}

pub(crate) enum OutputKind {
    /// One JSON object per line, tagged by `type`.
    Json,
    Normal,
}

/// A single line of JSON output.
#[derive(Serialize)]
#[serde(tag = "type", content = "data", rename_all = "kebab-case")]
enum Line<'a> {
    Message { kind: Level, output: String },
    Answer(String),
    Report(&'a Report),
}

#[derive(Clone, Copy, Serialize)]
#[serde(rename_all = "kebab-case")]
enum Level {
    Info,
    Error,
}

impl<W> Output<W>
where
    W: Write,
{
    pub(crate) fn new(out: W, kind: OutputKind) -> Self {
        Self { out, kind }
    }

    pub(crate) fn info(&mut self, m: impl fmt::Display) -> io::Result<()> {
        self.message(Level::Info, m)
    }

    pub(crate) fn error(&mut self, m: impl fmt::Display) -> io::Result<()> {
        self.message(Level::Error, m)
    }

    /// Write the answer produced by a solution using its `Debug` form.
    pub(crate) fn answer(&mut self, answer: impl fmt::Debug) -> io::Result<()> {
        let answer = format!("{answer:?}");

        match self.kind {
            OutputKind::Json => self.json(&Line::Answer(answer)),
            OutputKind::Normal => writeln!(self.out, "answer: {answer}"),
        }
    }

    pub(crate) fn report(&mut self, report: &Report) -> io::Result<()> {
        match self.kind {
            OutputKind::Json => self.json(&Line::Report(report)),
            OutputKind::Normal => writeln!(self.out, "{report}"),
        }
    }

    fn message(&mut self, kind: Level, m: impl fmt::Display) -> io::Result<()> {
        match self.kind {
            OutputKind::Json => self.json(&Line::Message {
                kind,
                output: m.to_string(),
            }),
            OutputKind::Normal => {
                let level = match kind {
                    Level::Info => "info",
                    Level::Error => "error",
                };

                writeln!(self.out, "{level}: {m}")
            }
        }
    }

    fn json(&mut self, line: &Line<'_>) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, line)?;
        writeln!(self.out)
    }
}
