//! Desktop GUI glue for the radix engine
//!
//! A session registry plus `tauri` command wrappers; the conversion
//! logic itself lives in the `radix` crate. Build with the `tauri_cmd`
//! feature to register the commands with a tauri application.

pub mod api;
pub mod tauri_cmd;
