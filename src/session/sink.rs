use super::report::ColorReport;
use crate::config::OutputFormat;
use serde::Serialize;
use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;
use thiserror::Error;

/// Errors a result sink may report. The session logs them and moves on.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("failed to write result: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode result: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("invalid unmixer URL '{base}': {source}")]
    InvalidUrl {
        base: String,
        #[source]
        source: url::ParseError,
    },
}

/// Receives every completed color report.
///
/// Rendering, clipboard access, and external links all live behind this
/// trait. Delivery is fire-and-forget: failures are not retried.
pub trait ResultSink {
    fn deliver(&mut self, report: &ColorReport) -> Result<(), SinkError>;
}

/// Keeps every delivered report in memory. Clones share the same storage.
#[derive(Debug, Clone, Default)]
pub struct CollectingSink {
    reports: Rc<RefCell<Vec<ColorReport>>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reports(&self) -> Vec<ColorReport> {
        self.reports.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.reports.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.borrow().is_empty()
    }
}

impl ResultSink for CollectingSink {
    fn deliver(&mut self, report: &ColorReport) -> Result<(), SinkError> {
        self.reports.borrow_mut().push(report.clone());
        Ok(())
    }
}

/// Logs each report at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl ResultSink for LogSink {
    fn deliver(&mut self, report: &ColorReport) -> Result<(), SinkError> {
        log::info!(
            "Average color {} / {} / {} over {} pixel(s)",
            report.hex,
            report.rgb_css(),
            report.hsl_css(),
            report.pixel_count
        );
        Ok(())
    }
}

/// Writes reports to any `Write` target as text blocks or JSON lines.
pub struct WriterSink<W: Write> {
    writer: W,
    format: OutputFormat,
    unmixer_base: Option<String>,
    written: usize,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    report: &'a ColorReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    unmixer_url: Option<String>,
}

impl<W: Write> WriterSink<W> {
    /// # Arguments
    /// * `writer` - Output target (stdout for the CLI)
    /// * `format` - Text blocks or one JSON object per line
    /// * `unmixer_base` - When set, each report also carries an unmixer link
    pub fn new(writer: W, format: OutputFormat, unmixer_base: Option<String>) -> Self {
        Self {
            writer,
            format,
            unmixer_base,
            written: 0,
        }
    }

    /// Number of reports written so far.
    pub fn written(&self) -> usize {
        self.written
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn unmixer_url(&self, report: &ColorReport) -> Result<Option<String>, SinkError> {
        self.unmixer_base
            .as_deref()
            .map(|base| {
                report
                    .unmixer_url(base)
                    .map(String::from)
                    .map_err(|source| SinkError::InvalidUrl {
                        base: base.to_string(),
                        source,
                    })
            })
            .transpose()
    }
}

impl<W: Write> ResultSink for WriterSink<W> {
    fn deliver(&mut self, report: &ColorReport) -> Result<(), SinkError> {
        let unmixer_url = self.unmixer_url(report)?;

        match self.format {
            OutputFormat::Text => {
                if self.written > 0 {
                    writeln!(self.writer)?;
                }
                writeln!(self.writer, "hex     {}", report.hex)?;
                writeln!(self.writer, "rgb     {}", report.rgb_css())?;
                writeln!(self.writer, "hsl     {}", report.hsl_css())?;
                writeln!(self.writer, "pixels  {}", report.pixel_count)?;
                if let Some(url) = &unmixer_url {
                    writeln!(self.writer, "unmixer {url}")?;
                }
            }
            OutputFormat::Json => {
                let line = serde_json::to_string(&JsonReport {
                    report,
                    unmixer_url,
                })?;
                writeln!(self.writer, "{line}")?;
            }
        }

        self.writer.flush()?;
        self.written += 1;
        Ok(())
    }
}
