//! Best-effort decision telemetry.
//!
//! Every decision can be appended to a sink as one self-contained JSON line.
//! The sink must never slow down or fail the decision path: `append` is
//! infallible at the signature level and write errors are logged and
//! dropped.

use std::fs::{create_dir_all, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::Mutex;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use stackfish_engine::state::{Action, Street};
use tracing::warn;

/// One decision, with the numbers that drove it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionRecord {
    /// Hand identifier when the caller supplied one
    #[serde(default)]
    pub hand_id: Option<String>,
    pub seat: usize,
    pub street: Street,
    pub action: Action,
    #[serde(default)]
    pub raise_to: Option<u32>,
    pub equity: f64,
    pub pot_odds: f64,
    pub spr: f64,
    pub persona: String,
    /// Label of the policy rule that fired
    pub rule: String,
    pub rationale: String,
    /// Timestamp (RFC3339), injected at write time when missing
    #[serde(default)]
    pub ts: Option<String>,
}

/// Telemetry sink. Append must not block the decision path and must not fail.
pub trait DecisionSink: Send + Sync {
    fn append(&self, record: &DecisionRecord);
}

/// Sink that drops everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DecisionSink for NullSink {
    fn append(&self, _record: &DecisionRecord) {}
}

/// Append-only JSONL sink: one record per line, flushed per append.
///
/// The mutex serializes concurrent appends to one file; nothing is ever read
/// back or rewritten.
#[derive(Debug)]
pub struct JsonlSink {
    writer: Mutex<BufWriter<File>>,
}

impl JsonlSink {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            writer: Mutex::new(BufWriter::new(f)),
        })
    }
}

impl DecisionSink for JsonlSink {
    fn append(&self, record: &DecisionRecord) {
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = match serde_json::to_string(&rec) {
            Ok(line) => line,
            Err(e) => {
                warn!(error = %e, "decision record failed to serialize, dropped");
                return;
            }
        };
        let Ok(mut w) = self.writer.lock() else {
            warn!("decision log writer poisoned, record dropped");
            return;
        };
        if let Err(e) = w
            .write_all(line.as_bytes())
            .and_then(|_| w.write_all(b"\n"))
            .and_then(|_| w.flush())
        {
            warn!(error = %e, "decision log append failed, record dropped");
        }
    }
}
