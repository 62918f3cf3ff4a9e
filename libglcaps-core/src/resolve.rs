//! Symbol resolution against the current native context.
//!
//! This module contains the only place where a looked-up address is turned
//! into a typed function pointer.

use std::ffi::CStr;
use std::mem;
use std::os::raw::{c_char, c_void};

/// Address lookup primitive of the native context.
///
/// The context has to be current on the calling thread for the duration
/// of every lookup.
///
/// `clear_error` is a no-op by default, and closures get only that default.
/// Loaders on platforms where failed lookups set an error (WGL's
/// `GetLastError`, for one) have to implement it themselves, or the stale
/// error outlives the load.
pub trait ProcLoader {
    /// Returns the address of `name`, or null if the context doesn't export it.
    fn get_proc_address(&mut self, name: &CStr) -> *const c_void;

    /// Resets platform error state left behind by failed lookups.
    fn clear_error(&mut self) {}
}

impl<F> ProcLoader for F
where
    F: FnMut(&CStr) -> *const c_void,
{
    fn get_proc_address(&mut self, name: &CStr) -> *const c_void {
        self(name)
    }
}

pub type PFN_getProcAddress = unsafe extern "system" fn(name: *const c_char) -> *const c_void;
pub type PFN_clearError = Option<unsafe extern "system" fn()>;

/// Loader backed by C callbacks, as handed over through the C ABI.
pub struct ExternLoader {
    get_proc_address: PFN_getProcAddress,
    clear_error: PFN_clearError,
}

impl ExternLoader {
    pub fn new(get_proc_address: PFN_getProcAddress, clear_error: PFN_clearError) -> Self {
        ExternLoader {
            get_proc_address,
            clear_error,
        }
    }
}

impl ProcLoader for ExternLoader {
    fn get_proc_address(&mut self, name: &CStr) -> *const c_void {
        unsafe { (self.get_proc_address)(name.as_ptr()) }
    }

    fn clear_error(&mut self) {
        if let Some(clear) = self.clear_error {
            unsafe { clear() }
        }
    }
}

/// WGL reports some failures with small integers or -1 instead of null.
fn is_valid_address(ptr: *const c_void) -> bool {
    match ptr as isize {
        0 | 1 | 2 | 3 | -1 => false,
        _ => true,
    }
}

/// Looks up `name` and binds it to the function pointer type `F`.
///
/// Returns `None` when the context doesn't export the symbol.
///
/// # Safety
///
/// `F` must be an `extern "system"` function pointer whose signature matches
/// the native entry point. Nothing verifies this.
pub unsafe fn get_address<F: Copy>(loader: &mut dyn ProcLoader, name: &CStr) -> Option<F> {
    debug_assert_eq!(mem::size_of::<F>(), mem::size_of::<*const c_void>());
    let ptr = loader.get_proc_address(name);
    if is_valid_address(ptr) {
        Some(mem::transmute_copy::<*const c_void, F>(&ptr))
    } else {
        None
    }
}

/// Converts a nul-terminated symbol literal into a `CStr`.
pub(crate) fn symbol(bytes: &'static [u8]) -> &'static CStr {
    debug_assert_eq!(bytes.last(), Some(&0));
    // generated from `concat!(name, "\0")`, no interior nul
    unsafe { CStr::from_bytes_with_nul_unchecked(bytes) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ptr;

    type PFN_test = unsafe extern "system" fn(u32) -> u32;

    extern "system" fn double(value: u32) -> u32 {
        value * 2
    }

    #[test]
    fn null_is_absent() {
        let mut loader = |_: &CStr| ptr::null::<c_void>();
        let f = unsafe { get_address::<PFN_test>(&mut loader, symbol(b"glMissing\0")) };
        assert!(f.is_none());
    }

    #[test]
    fn wgl_sentinels_are_absent() {
        for &sentinel in &[1isize, 2, 3, -1] {
            let mut loader = move |_: &CStr| sentinel as *const c_void;
            let f = unsafe { get_address::<PFN_test>(&mut loader, symbol(b"glSentinel\0")) };
            assert!(f.is_none(), "sentinel {}", sentinel);
        }
    }

    #[test]
    fn binds_address() {
        let mut seen = Vec::new();
        let mut loader = |name: &CStr| {
            seen.push(name.to_str().unwrap().to_string());
            double as PFN_test as *const c_void
        };
        let f = unsafe { get_address::<PFN_test>(&mut loader, symbol(b"glDouble\0")) }.unwrap();
        assert_eq!(unsafe { f(21) }, 42);
        assert_eq!(seen, vec!["glDouble".to_string()]);
    }
}
