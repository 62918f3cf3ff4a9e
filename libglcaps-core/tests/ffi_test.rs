//! Round trips through the C entry points.

mod common;

use glcaps_core::ffi::*;
use glcaps_core::*;

use std::cell::Cell;
use std::ffi::CStr;
use std::os::raw::{c_char, c_int, c_void};
use std::ptr;

thread_local! {
    static CLEARED: Cell<usize> = Cell::new(0);
}

/// Exports everything but the 4.6 entry points.
unsafe extern "system" fn get_proc_address(name: *const c_char) -> *const c_void {
    let name = CStr::from_ptr(name).to_str().unwrap();
    match Version::introducing(name) {
        Some(Version::V4_6) | None => ptr::null(),
        Some(_) => common::stub(name, PointerWidth::host()),
    }
}

unsafe extern "system" fn clear_error() {
    CLEARED.with(|cleared| cleared.set(cleared.get() + 1));
}

unsafe fn create() -> GlcapsTable {
    let mut table = Handle::null();
    let result = capsCreateTable(Some(get_proc_address), Some(clear_error), &mut table);
    assert_eq!(result, GL_NO_ERROR);
    assert!(!table.is_null());
    table
}

#[test]
fn create_query_destroy() {
    common::init_logger();
    unsafe {
        let table = create();
        assert_eq!(CLEARED.with(|cleared| cleared.get()), 1);

        assert_eq!(capsIsVersionSupported(table, 4, 5), GL_TRUE);
        assert_eq!(capsIsVersionSupported(table, 4, 6), GL_FALSE);
        assert_eq!(capsIsVersionSupported(table, 4, 7), GL_FALSE);
        assert_eq!(capsIsVersionSupported(table, -1, 0), GL_FALSE);

        let (mut major, mut minor): (c_int, c_int) = (0, 0);
        assert_eq!(capsGetMaxVersion(table, &mut major, &mut minor), GL_TRUE);
        assert_eq!((major, minor), (4, 5));

        let name = b"glClear\0";
        assert!(!capsGetProcAddress(table, name.as_ptr() as *const c_char).is_null());
        let name = b"glSpecializeShader\0";
        assert!(capsGetProcAddress(table, name.as_ptr() as *const c_char).is_null());
        assert!(capsGetProcAddress(table, ptr::null()).is_null());

        assert_eq!(capsReloadTable(table, Some(get_proc_address), None), GL_NO_ERROR);
        assert_eq!(capsIsVersionSupported(table, 4, 5), GL_TRUE);
        assert_eq!(CLEARED.with(|cleared| cleared.get()), 1);

        capsDestroyTable(table);
    }
}

#[test]
fn buffer_calls_report_gl_errors() {
    unsafe {
        let table = create();
        common::take_calls();

        assert_eq!(capsBufferData(table, 0x8892, 64, ptr::null(), 0x88E4), GL_NO_ERROR);
        assert_eq!(capsBufferSubData(table, 0x8892, 0, 64, ptr::null()), GL_NO_ERROR);
        assert_eq!(capsBufferData(table, 0x8892, -1 << 40, ptr::null(), 0x88E4), {
            match PointerWidth::host() {
                PointerWidth::Narrow => GL_INVALID_VALUE,
                PointerWidth::Wide => GL_NO_ERROR,
            }
        });

        let mut mapping = ptr::null_mut();
        assert_eq!(capsMapBufferRange(table, 0x8892, 0, 64, 0x0001, &mut mapping), GL_NO_ERROR);
        assert_eq!(mapping as usize, common::MAPPING);
        assert_eq!(
            capsMapBufferRange(table, 0x8892, 0, 64, 0x0001, ptr::null_mut()),
            GL_INVALID_VALUE
        );

        capsDestroyTable(table);
    }
}

#[test]
fn null_arguments() {
    unsafe {
        let mut table = Handle::null();
        assert_eq!(capsCreateTable(None, None, &mut table), GL_INVALID_VALUE);
        assert!(table.is_null());
        assert_eq!(
            capsCreateTable(Some(get_proc_address), None, ptr::null_mut()),
            GL_INVALID_VALUE
        );

        let null = GlcapsTable::null();
        assert_eq!(capsIsVersionSupported(null, 1, 0), GL_FALSE);
        let mut major = 9;
        assert_eq!(capsGetMaxVersion(null, &mut major, ptr::null_mut()), GL_FALSE);
        assert_eq!(major, 0);
        assert_eq!(capsReloadTable(null, Some(get_proc_address), None), GL_INVALID_VALUE);
        assert_eq!(capsBufferData(null, 0x8892, 64, ptr::null(), 0x88E4), GL_INVALID_OPERATION);
        capsDestroyTable(null);
    }
}

#[test]
fn missing_entry_point_is_invalid_operation() {
    unsafe extern "system" fn no_buffers(name: *const c_char) -> *const c_void {
        let name = CStr::from_ptr(name).to_str().unwrap();
        if name == "glBufferData" {
            ptr::null()
        } else {
            common::stub(name, PointerWidth::host())
        }
    }

    unsafe {
        let mut table = Handle::null();
        assert_eq!(capsCreateTable(Some(no_buffers), None, &mut table), GL_NO_ERROR);
        assert_eq!(capsBufferData(table, 0x8892, 64, ptr::null(), 0x88E4), GL_INVALID_OPERATION);
        assert_eq!(capsIsVersionSupported(table, 1, 4), GL_TRUE);
        assert_eq!(capsIsVersionSupported(table, 1, 5), GL_FALSE);
        capsDestroyTable(table);
    }
}
