// C entry points for rendering layers outside Rust. Only the engine's
// estimate/score surface is exposed; the engine lives for the whole process.
use crate::ReadabilityEngine;
use std::ffi::{c_char, CStr, CString};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::path::Path;
use std::ptr;
use std::sync::OnceLock;

static ENGINE: OnceLock<ReadabilityEngine> = OnceLock::new();

fn engine() -> &'static ReadabilityEngine {
    ENGINE.get_or_init(ReadabilityEngine::new)
}

/// Borrowed view of a C string; null or invalid UTF-8 reads as "".
unsafe fn str_arg<'a>(raw: *const c_char) -> &'a str {
    if raw.is_null() {
        return "";
    }
    CStr::from_ptr(raw).to_str().unwrap_or("")
}

/// Loads the dictionary at `dictionary_path` into the process-wide engine.
/// Returns false if an engine already exists or the dictionary is unusable;
/// the engine then runs heuristic-only.
#[no_mangle]
pub extern "C" fn readability_engine_init(dictionary_path: *const c_char) -> bool {
    let path = unsafe { str_arg(dictionary_path) };
    let result = catch_unwind(|| {
        if ENGINE.get().is_some() {
            return false;
        }
        match ReadabilityEngine::from_file(Path::new(path)) {
            Ok(loaded) => ENGINE.set(loaded).is_ok(),
            Err(e) => {
                tracing::error!(error = %e, "readability engine falling back to heuristic-only");
                false
            }
        }
    });
    result.unwrap_or_else(|_| {
        tracing::error!("panic during readability engine initialization");
        false
    })
}

/// Scores `text` and returns the result as a JSON document. Free it with
/// [`readability_free_string`]. Returns null only if scoring panicked.
#[no_mangle]
pub extern "C" fn readability_score_json(text: *const c_char) -> *mut c_char {
    let text = unsafe { str_arg(text) };
    let result = catch_unwind(AssertUnwindSafe(|| {
        let result = engine().score(text);
        serde_json::to_string(&result).unwrap_or_else(|_| "{}".to_string())
    }));
    match result {
        Ok(json) => CString::new(json).map_or(ptr::null_mut(), CString::into_raw),
        Err(_) => {
            tracing::error!("panic in readability_score_json");
            ptr::null_mut()
        }
    }
}

#[no_mangle]
pub extern "C" fn readability_estimate_syllables(word: *const c_char, bypass_dictionary: bool) -> u32 {
    let word = unsafe { str_arg(word) };
    catch_unwind(AssertUnwindSafe(|| engine().estimate(word, bypass_dictionary)))
        .map(|count| u32::try_from(count).unwrap_or(u32::MAX))
        .unwrap_or(0)
}

#[no_mangle]
pub extern "C" fn readability_free_string(s: *mut c_char) {
    if !s.is_null() {
        unsafe {
            drop(CString::from_raw(s));
        }
    }
}
