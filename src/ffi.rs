//! C-compatible interface over JSON.
//!
//! # Memory Management
//!
//! - The input is a null-terminated UTF-8 JSON [`PlanDocument`].
//! - Returned strings are allocated by Rust and must be released with
//!   [`itinerary_free_string`].
//!
//! # Response
//!
//! `{"ok": <PlanReport>}` on success, `{"error": "<message>"}` otherwise.

use std::ffi::{CStr, CString};
use std::ptr;

use libc::c_char;
use serde::Serialize;

use crate::io::{run, PlanDocument, PlanReport};

#[derive(Serialize)]
#[serde(rename_all = "snake_case")]
enum Response {
    Ok(PlanReport),
    Error(String),
}

fn respond(input: &str) -> Response {
    let document: PlanDocument = match serde_json::from_str(input) {
        Ok(doc) => doc,
        Err(e) => return Response::Error(format!("invalid plan document: {e}")),
    };
    match run(document) {
        Ok(report) => Response::Ok(report),
        Err(e) => Response::Error(e.to_string()),
    }
}

fn into_c_string(response: &Response) -> *mut c_char {
    let json = serde_json::to_string(response)
        .unwrap_or_else(|e| format!(r#"{{"error":"serialization failed: {e}"}}"#));
    match CString::new(json) {
        Ok(s) => s.into_raw(),
        Err(_) => ptr::null_mut(),
    }
}

/// Plans a trip described by a JSON document.
///
/// Returns null if `document` is null. Otherwise returns a JSON string that
/// the caller must free with [`itinerary_free_string`].
///
/// # Safety
///
/// `document` must be null or point to a valid null-terminated string.
#[no_mangle]
pub unsafe extern "C" fn itinerary_plan_json(document: *const c_char) -> *mut c_char {
    if document.is_null() {
        return ptr::null_mut();
    }
    let response = match unsafe { CStr::from_ptr(document) }.to_str() {
        Ok(input) => respond(input),
        Err(_) => Response::Error("plan document is not valid UTF-8".into()),
    };
    into_c_string(&response)
}

/// Releases a string returned by this library.
///
/// # Safety
///
/// `s` must be null or a pointer previously returned by
/// [`itinerary_plan_json`] that has not been freed yet.
#[no_mangle]
pub unsafe extern "C" fn itinerary_free_string(s: *mut c_char) {
    if !s.is_null() {
        drop(unsafe { CString::from_raw(s) });
    }
}
