//! Tauri command wrappers over the session API
//!
//! Errors cross the webview boundary as strings; everything else is
//! plain serde data. The frontend widget tree lives outside this crate.

use crate::api;
use radix::history::HistoryEntry;
use uuid::Uuid;

#[cfg_attr(feature = "tauri_cmd", tauri::command)]
pub fn cmd_new_session() -> Result<api::SessionInfo, String> {
    Ok(api::new_session())
}

#[cfg_attr(feature = "tauri_cmd", tauri::command)]
pub fn cmd_close_session(session_id: String) -> Result<bool, String> {
    let sid = Uuid::try_parse(&session_id).map_err(|e| e.to_string())?;
    Ok(api::close_session(sid))
}

#[cfg_attr(feature = "tauri_cmd", tauri::command)]
pub fn cmd_set_base(session_id: String, base: u32) -> Result<u32, String> {
    let sid = Uuid::try_parse(&session_id).map_err(|e| e.to_string())?;
    api::set_base(sid, base).map_err(|e| e.to_string())
}

#[cfg_attr(feature = "tauri_cmd", tauri::command)]
pub fn cmd_convert(
    session_id: String,
    number: String,
    from: u32,
    to: u32,
) -> Result<api::EvalResult, String> {
    let sid = Uuid::try_parse(&session_id).map_err(|e| e.to_string())?;
    api::convert(sid, number, from, to).map_err(|e| e.to_string())
}

#[cfg_attr(feature = "tauri_cmd", tauri::command)]
pub fn cmd_evaluate(
    session_id: String,
    operand_a: String,
    op: String,
    operand_b: String,
) -> Result<api::EvalResult, String> {
    let sid = Uuid::try_parse(&session_id).map_err(|e| e.to_string())?;
    api::evaluate(sid, operand_a, op, operand_b).map_err(|e| e.to_string())
}

#[cfg_attr(feature = "tauri_cmd", tauri::command)]
pub fn cmd_detect(number: String) -> Result<u32, String> {
    Ok(api::detect(number))
}

#[cfg_attr(feature = "tauri_cmd", tauri::command)]
pub fn cmd_validate(number: String, base: u32) -> Result<bool, String> {
    api::check(number, base).map_err(|e| e.to_string())
}

#[cfg_attr(feature = "tauri_cmd", tauri::command)]
pub fn cmd_get_history(session_id: String) -> Result<Vec<HistoryEntry>, String> {
    let sid = Uuid::try_parse(&session_id).map_err(|e| e.to_string())?;
    api::get_history(sid).map_err(|e| e.to_string())
}

#[cfg_attr(feature = "tauri_cmd", tauri::command)]
pub fn cmd_export_history(session_id: String, path: String) -> Result<String, String> {
    let sid = Uuid::try_parse(&session_id).map_err(|e| e.to_string())?;
    api::export_history(sid, path).map_err(|e| e.to_string())
}
