use chrono::{SecondsFormat, Utc};
use domains::{DateProvider, IdGenerator};
use uuid::Uuid;

/// Reads the wall clock in UTC.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemDateProvider;

impl DateProvider for SystemDateProvider {
    fn utc_now_string(&self) -> String {
        Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

/// Random v4 UUIDs in their 32-char hex form.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().simple().to_string()
    }
}

/// `{prefix}-{generated}`, e.g. `thread-3f2a...`.
pub(crate) fn prefixed_id(prefix: &str, ids: &dyn IdGenerator) -> String {
    format!("{prefix}-{}", ids.generate())
}
