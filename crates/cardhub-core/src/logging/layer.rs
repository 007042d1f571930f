//! Subscriber setup: env filter, console output, and a layer that copies
//! every event into the session file.

use std::fmt;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer};

use super::entry::{LogRecord, Severity};
use super::writer::SessionLog;
use crate::error::{HubError, HubResult};

/// Directives used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "cardhub=info,cardhub_core=info,cardhub_ui=info";

/// Writes each event to a [`SessionLog`].
pub struct SessionLayer {
    log: SessionLog,
}

impl SessionLayer {
    pub fn open(logs_dir: &Path, window: &str) -> HubResult<Self> {
        Ok(Self {
            log: SessionLog::open(logs_dir, window)?,
        })
    }

    pub fn path(&self) -> &Path {
        self.log.path()
    }
}

impl<S> Layer<S> for SessionLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, ctx: Context<'_, S>) {
        let meta = event.metadata();
        let mut fields = EventFields::default();
        event.record(&mut fields);

        let scope = ctx
            .event_scope(event)
            .map(|scope| scope.from_root().map(|span| span.name().to_owned()).collect())
            .unwrap_or_default();

        let mut record = LogRecord::now(
            Severity::from(meta.level()),
            self.log.window(),
            meta.target(),
            fields.message,
        )
        .within(scope);
        record.data = fields.data;

        if let Err(e) = self.log.append(&record) {
            eprintln!("cardhub: failed to write session log: {e}");
        }
    }
}

/// Splits an event into its `message` and the remaining structured data.
#[derive(Default)]
struct EventFields {
    message: String,
    data: Map<String, Value>,
}

impl EventFields {
    fn put(&mut self, field: &Field, value: Value) {
        match (field.name(), value) {
            ("message", Value::String(text)) => self.message = text,
            (name, value) => {
                self.data.insert(name.to_owned(), value);
            }
        }
    }
}

impl Visit for EventFields {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.put(field, Value::String(format!("{value:?}")));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.put(field, Value::from(value));
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.put(field, Value::from(value));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.put(field, Value::from(value));
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        self.put(field, Value::from(value));
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.put(field, Value::from(value));
    }
}

/// Installs the global subscriber.
///
/// ```ignore
/// let file = LogSetup::new("main").to_dir("./logs").install()?;
/// ```
pub struct LogSetup {
    window: String,
    logs_dir: Option<PathBuf>,
    console: bool,
    directives: String,
}

impl LogSetup {
    pub fn new(window: impl Into<String>) -> Self {
        Self {
            window: window.into(),
            logs_dir: None,
            console: true,
            directives: DEFAULT_FILTER.to_string(),
        }
    }

    /// Also write the session file under `dir`.
    pub fn to_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.logs_dir = Some(dir.into());
        self
    }

    /// Skip console output.
    pub fn quiet(mut self) -> Self {
        self.console = false;
        self
    }

    /// Replace the fallback directives.
    pub fn directives(mut self, directives: impl Into<String>) -> Self {
        self.directives = directives.into();
        self
    }

    /// The session layer alone, for composing a custom subscriber.
    pub fn session_layer(&self) -> HubResult<Option<SessionLayer>> {
        match &self.logs_dir {
            Some(dir) => SessionLayer::open(dir, &self.window).map(Some),
            None => Ok(None),
        }
    }

    /// Install globally. Returns the session file path when one was opened.
    pub fn install(self) -> HubResult<Option<PathBuf>> {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&self.directives));
        let session = self.session_layer()?;
        let path = session.as_ref().map(|layer| layer.path().to_path_buf());
        let console = self
            .console
            .then(|| tracing_subscriber::fmt::layer().with_target(true));

        tracing_subscriber::registry()
            .with(filter)
            .with(console)
            .with(session)
            .try_init()
            .map_err(|e| HubError::LoggingInit(e.to_string()))?;
        Ok(path)
    }
}
