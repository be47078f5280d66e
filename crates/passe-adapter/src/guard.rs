//! Fault containment around primitive calls.

use std::any::Any;
use std::collections::TryReserveError;
use std::panic::{self, AssertUnwindSafe};

/// Run a primitive call, turning a panic into an error message.
pub(crate) fn contain<T>(f: impl FnOnce() -> T) -> Result<T, String> {
    panic::catch_unwind(AssertUnwindSafe(f)).map_err(panic_message)
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        format!("primitive panicked: {s}")
    } else if let Some(s) = payload.downcast_ref::<String>() {
        format!("primitive panicked: {s}")
    } else {
        "primitive panicked".to_string()
    }
}

/// Allocate `count` zeroed elements, reporting allocation failure instead of
/// aborting.
pub(crate) fn try_alloc<T: Clone + Default>(count: usize) -> Result<Vec<T>, TryReserveError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(count)?;
    buf.resize(count, T::default());
    Ok(buf)
}

/// Check that `count` elements could be allocated right now.
pub(crate) fn probe_alloc<T>(count: usize) -> Result<(), TryReserveError> {
    let mut buf: Vec<T> = Vec::new();
    buf.try_reserve_exact(count)
}
