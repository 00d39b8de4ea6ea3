//! Session-scoped API backing the GUI commands
//!
//! Each window owns a session: a working base plus the history of what
//! it evaluated. Sessions live in a global registry keyed by UUID and
//! are serialized through one mutex; the engine itself is pure.

use anyhow::Result;
use lazy_static::lazy_static;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Instant;
use uuid::Uuid;

use radix::arith::ArithOp;
use radix::config::AppConfig;
use radix::history::{History, HistoryEntry};
use radix::{arithmetic, convert_base, detect_base, validate};

lazy_static! {
    pub(crate) static ref SESSION_REG: Mutex<HashMap<Uuid, Session>> = Mutex::new(HashMap::new());
}

pub struct Session {
    base: u32,
    history: History,
    line_number: usize,
}

impl Session {
    fn new(config: &AppConfig) -> Self {
        Self {
            base: config.default_base,
            history: History::new(config.history_size),
            line_number: 1,
        }
    }

    fn record(&mut self, input: String, outcome: &Result<String, radix::Error>) {
        let (output, success) = match outcome {
            Ok(value) => (value.clone(), true),
            Err(error) => (error.to_string(), false),
        };
        self.history
            .record(HistoryEntry::new(self.line_number, input, output, success));
        self.line_number += 1;
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionInfo {
    pub session_id: Uuid,
    pub base: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvalResult {
    pub output: String,
    pub duration_ms: u128,
}

/// Open a new session with the configured default base
pub fn new_session() -> SessionInfo {
    let config = AppConfig::load_or_create_default().unwrap_or_default();
    let session = Session::new(&config);
    let info = SessionInfo { session_id: Uuid::new_v4(), base: session.base };
    SESSION_REG.lock().insert(info.session_id, session);
    info
}

/// Drop a session; returns whether it existed
pub fn close_session(session_id: Uuid) -> bool {
    SESSION_REG.lock().remove(&session_id).is_some()
}

/// Set the working base of a session
pub fn set_base(session_id: Uuid, base: u32) -> Result<u32> {
    radix::alphabet::check_base(base)?;
    let mut map = SESSION_REG.lock();
    if let Some(session) = map.get_mut(&session_id) {
        session.base = base;
        Ok(base)
    } else {
        anyhow::bail!("Unknown session")
    }
}

/// Convert a number between explicit bases, recording into the session
pub fn convert(session_id: Uuid, number: String, from: u32, to: u32) -> Result<EvalResult> {
    let mut map = SESSION_REG.lock();
    if let Some(session) = map.get_mut(&session_id) {
        let started = Instant::now();
        let outcome = convert_base(&number, from, to);
        session.record(format!("{} (b{} -> b{})", number, from, to), &outcome);
        let output = outcome?;
        Ok(EvalResult { output, duration_ms: started.elapsed().as_millis() })
    } else {
        anyhow::bail!("Unknown session")
    }
}

/// Evaluate arithmetic in the session's working base
pub fn evaluate(session_id: Uuid, operand_a: String, op: String, operand_b: String) -> Result<EvalResult> {
    let mut map = SESSION_REG.lock();
    if let Some(session) = map.get_mut(&session_id) {
        let started = Instant::now();
        let outcome = op
            .parse::<ArithOp>()
            .and_then(|op| arithmetic(op, &operand_a, &operand_b, session.base));
        session.record(format!("{} {} {}", operand_a, op, operand_b), &outcome);
        let output = outcome?;
        Ok(EvalResult { output, duration_ms: started.elapsed().as_millis() })
    } else {
        anyhow::bail!("Unknown session")
    }
}

/// Prefix-based base detection; stateless, no session needed
pub fn detect(number: String) -> u32 {
    detect_base(&number)
}

/// Validate a number against a base; stateless
pub fn check(number: String, base: u32) -> Result<bool> {
    match validate(&number, base) {
        Ok(()) => Ok(true),
        Err(radix::Error::InvalidBase { base }) => {
            anyhow::bail!("invalid base {}", base)
        }
        Err(_) => Ok(false),
    }
}

/// History entries of a session, oldest first
pub fn get_history(session_id: Uuid) -> Result<Vec<HistoryEntry>> {
    let map = SESSION_REG.lock();
    if let Some(session) = map.get(&session_id) {
        Ok(session.history.entries().cloned().collect())
    } else {
        anyhow::bail!("Unknown session")
    }
}

/// Export a session's history; the format follows the file extension
pub fn export_history(session_id: Uuid, path: String) -> Result<String> {
    let map = SESSION_REG.lock();
    if let Some(session) = map.get(&session_id) {
        let format = session.history.export_to_file(&path)?;
        Ok(format!("{:?}", format))
    } else {
        anyhow::bail!("Unknown session")
    }
}
