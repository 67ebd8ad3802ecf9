//! crates/lvlog/src/tracing_bridge.rs
//! Bridge between the tracing crate and a [`Logger`].
//!
//! [`LvlogLayer`] is a tracing-subscriber layer that renders each event in the
//! logger's line format. The event's level picks the severity, its `message`
//! field becomes the text, and its source location replaces the call site.
//!
//! # Usage
//!
//! ```rust,ignore
//! lvlog::install(lvlog::Logger::stdout()).ok();
//! lvlog::init_tracing()?;
//!
//! tracing::info!(peers = 3, "connected");
//! ```

use std::fmt::{self, Write as _};

use tracing::field::{Field, Visit};
use tracing::subscriber::{Interest, SetGlobalDefaultError};
use tracing::{Event, Level, Metadata, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;

use crate::format::CallSite;
use crate::logger::Logger;
use crate::severity::Severity;

impl From<Level> for Severity {
    fn from(level: Level) -> Self {
        match level {
            Level::ERROR => Self::Error,
            Level::WARN => Self::Warning,
            Level::INFO => Self::Info,
            Level::DEBUG => Self::Debug,
            Level::TRACE => Self::Trace,
        }
    }
}

/// A tracing layer that writes events through a [`Logger`].
#[derive(Clone, Copy, Debug)]
pub struct LvlogLayer {
    logger: &'static Logger,
}

impl LvlogLayer {
    /// Creates a layer forwarding to `logger`.
    #[must_use]
    pub const fn new(logger: &'static Logger) -> Self {
        Self { logger }
    }
}

impl<S> Layer<S> for LvlogLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    // The threshold can change at any time, so callsites are never cached.
    fn register_callsite(&self, _metadata: &'static Metadata<'static>) -> Interest {
        Interest::sometimes()
    }

    fn enabled(&self, metadata: &Metadata<'_>, _ctx: Context<'_, S>) -> bool {
        !metadata.is_event() || self.logger.enabled(Severity::from(*metadata.level()))
    }

    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let severity = Severity::from(*metadata.level());
        if !self.logger.enabled(severity) {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        let site = CallSite::new(
            metadata.file().unwrap_or_else(|| metadata.target()),
            metadata.line().unwrap_or(0),
        );
        let _ = self.logger.log(severity, site, &visitor);
    }
}

/// Collects the `message` field followed by any other fields as `name=value`.
#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: String,
}

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{value:?}");
        } else {
            let _ = write!(self.fields, " {}={value:?}", field.name());
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            let _ = write!(self.fields, " {}={value}", field.name());
        }
    }
}

impl fmt::Display for MessageVisitor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)?;
        f.write_str(&self.fields)
    }
}

/// Installs a global tracing subscriber that writes through the process-wide
/// logger.
///
/// Only the tracing dispatcher is set; the `log` facade is left for
/// [`init_standard_logger`](crate::init_standard_logger). Fails when another
/// global subscriber is already installed.
pub fn init_tracing() -> Result<(), SetGlobalDefaultError> {
    use tracing_subscriber::layer::SubscriberExt;

    let layer = LvlogLayer::new(crate::global::logger());
    tracing::subscriber::set_global_default(tracing_subscriber::registry().with(layer))
}
