//! Per-image analysis session.
//!
//! Ties the pieces together: pointer events are mapped into buffer space,
//! fed to the selection state machine, and every completed region is sampled,
//! averaged, and handed to a [`ResultSink`]. Degenerate selections end the
//! pipeline quietly and leave the last delivered report in place.

mod report;
mod sink;

pub use report::{ColorReport, DEFAULT_UNMIXER_URL};
pub use sink::{CollectingSink, LogSink, ResultSink, SinkError, WriterSink};

use crate::draw::Region;
use crate::input::{InputEvent, InputState, map_to_buffer};
use crate::sample::{self, PixelBuffer};
use log::{debug, info, warn};

/// Image session: current pixel buffer, gesture state, and last result.
pub struct Session {
    buffer: Option<PixelBuffer>,
    input: InputState,
    last_report: Option<ColorReport>,
    sink: Box<dyn ResultSink>,
}

impl Session {
    /// Creates a session with no image loaded yet.
    pub fn new(input: InputState, sink: Box<dyn ResultSink>) -> Self {
        Self {
            buffer: None,
            input,
            last_report: None,
            sink,
        }
    }

    /// Creates a session for an already decoded image.
    pub fn with_buffer(buffer: PixelBuffer, input: InputState, sink: Box<dyn ResultSink>) -> Self {
        let mut session = Self::new(input, sink);
        session.load_buffer(buffer);
        session
    }

    /// Replaces the pixel buffer (new image, or a refit at a new size).
    ///
    /// Coordinates gathered against the previous buffer are meaningless for
    /// the new one, so the gesture in progress and the last report are
    /// dropped. The active tool is kept.
    pub fn load_buffer(&mut self, buffer: PixelBuffer) {
        info!("Loaded {}x{} pixel buffer", buffer.width(), buffer.height());
        self.buffer = Some(buffer);
        self.input.clear();
        self.last_report = None;
    }

    pub fn buffer(&self) -> Option<&PixelBuffer> {
        self.buffer.as_ref()
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    /// Most recently delivered report, if any.
    pub fn last_report(&self) -> Option<&ColorReport> {
        self.last_report.as_ref()
    }

    /// Processes one presentation-layer event.
    ///
    /// Returns the new report when this event completed a selection that
    /// covered at least one pixel, `None` otherwise.
    pub fn handle_event(&mut self, event: &InputEvent) -> Option<&ColorReport> {
        let region = match event {
            InputEvent::SetTool(tool) => {
                self.input.set_tool(*tool);
                None
            }
            InputEvent::Clear => {
                self.input.clear();
                self.last_report = None;
                None
            }
            InputEvent::Press {
                button,
                client_x,
                client_y,
                display,
                timestamp,
            } => {
                let (width, height) = self.buffer_size()?;
                let point = map_to_buffer(*client_x, *client_y, display, width, height);
                self.input.on_pointer_press(*button, point, *timestamp)
            }
            InputEvent::Motion {
                client_x,
                client_y,
                display,
            } => {
                let (width, height) = self.buffer_size()?;
                let point = map_to_buffer(*client_x, *client_y, display, width, height);
                self.input.on_pointer_motion(point);
                None
            }
            InputEvent::Release {
                button,
                client_x,
                client_y,
                display,
            } => {
                let (width, height) = self.buffer_size()?;
                let point = map_to_buffer(*client_x, *client_y, display, width, height);
                self.input.on_pointer_release(*button, point)
            }
        };

        let region = region?;
        self.analyze(&region)
    }

    /// Samples `region`, averages it, and delivers the result.
    ///
    /// Returns `None` (and keeps the previous report) when no image is
    /// loaded or the region covers no pixels.
    pub fn analyze(&mut self, region: &Region) -> Option<&ColorReport> {
        let Some(buffer) = self.buffer.as_ref() else {
            debug!("No image loaded; ignoring {} selection", region.kind());
            return None;
        };

        let pixels = sample::sample(region, buffer);
        let Some(report) = ColorReport::from_pixels(&pixels) else {
            debug!("{} selection covered no pixels", region.kind());
            return None;
        };

        debug!(
            "{} selection: {} pixel(s), average {}",
            region.kind(),
            report.pixel_count,
            report.hex
        );

        if let Err(err) = self.sink.deliver(&report) {
            warn!("Result sink failed: {err}");
        }

        self.last_report = Some(report);
        self.last_report.as_ref()
    }

    fn buffer_size(&self) -> Option<(u32, u32)> {
        match &self.buffer {
            Some(buffer) => Some((buffer.width(), buffer.height())),
            None => {
                debug!("No image loaded; ignoring pointer event");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests;
