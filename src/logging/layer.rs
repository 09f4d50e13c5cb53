//! tracing integration
//!
//! [`StoreLayer`] records host `tracing` events into a [`LogStore`], and
//! [`init_tracing`] installs it next to a stderr formatter.

use std::fmt::{self, Write as _};
use std::sync::Arc;

use anyhow::Result;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

use super::entry::CallSite;
use super::level::LogLevel;
use super::sink::is_internal_target;
use super::store::{LogOptions, LogStore};

/// Layer that appends every tracing event to a store
///
/// Events emitted from inside the crate (sink output and the store's own
/// diagnostics) are skipped, so only callers grow the store. Tracing levels
/// map to non-fatal store levels only.
pub struct StoreLayer {
    store: Arc<LogStore>,
}

impl StoreLayer {
    pub fn new(store: Arc<LogStore>) -> Self {
        Self { store }
    }
}

/// Collects the `message` field and any other fields as `key=value`
#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
    fields: Vec<String>,
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_string());
        } else {
            self.fields.push(format!("{}={}", field.name(), value));
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{:?}", value));
        } else {
            let mut rendered = String::new();
            let _ = write!(rendered, "{}={:?}", field.name(), value);
            self.fields.push(rendered);
        }
    }
}

impl MessageVisitor {
    fn into_parts(self) -> Vec<String> {
        self.message.into_iter().chain(self.fields).collect()
    }
}

impl<S: Subscriber> Layer<S> for StoreLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if is_internal_target(metadata.target()) {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        let call_site = CallSite::new(
            metadata.file().unwrap_or("<unknown>"),
            metadata.line().unwrap_or(0),
            metadata.module_path().unwrap_or_else(|| metadata.target()),
        );

        self.store.log(
            visitor.into_parts(),
            LogOptions::level(LogLevel::from(*metadata.level())),
            call_site,
        );
    }
}

/// Install the global subscriber: env filter, stderr output and the store layer
///
/// `RUST_LOG` takes precedence over `default_filter`.
pub fn init_tracing(store: Arc<LogStore>, default_filter: &str) -> Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(StoreLayer::new(store))
        .try_init()?;

    Ok(())
}
