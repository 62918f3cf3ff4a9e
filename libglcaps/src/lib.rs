#![allow(non_snake_case)]

use glcaps_core::ffi::*;
use glcaps_core::{GLbitfield, GLboolean, GLenum, GLint64, PFN_clearError, PFN_getProcAddress};
use glcaps_core::{GL_INVALID_OPERATION, GL_INVALID_VALUE, GL_NO_ERROR};

use std::os::raw::{c_char, c_int, c_uint, c_void};

/// Version of the `glcaps*` C interface implemented by this library.
const INTERFACE_VERSION: c_uint = 1;

/// Agrees on the C interface version with the caller.
///
/// `pSupportedVersion` holds the highest version the caller understands and
/// receives the version both sides will use.
#[no_mangle]
pub unsafe extern "C" fn glcapsNegotiateInterfaceVersion(pSupportedVersion: *mut c_uint) -> GLenum {
    let supported_version = match pSupportedVersion.as_mut() {
        Some(version) => version,
        None => return GL_INVALID_VALUE,
    };
    if *supported_version == 0 {
        return GL_INVALID_OPERATION;
    }
    if *supported_version > INTERFACE_VERSION {
        *supported_version = INTERFACE_VERSION;
    }

    GL_NO_ERROR
}

// These are only shims, reexporting the caps functions with a glcaps prefix.
// IMPORTANT: These should only forward parameters to the caps implementation,
//            don't include any further logic.

#[no_mangle]
pub unsafe extern "C" fn glcapsCreateTable(
    getProcAddress: Option<PFN_getProcAddress>,
    clearError: PFN_clearError,
    pTable: *mut GlcapsTable,
) -> GLenum {
    capsCreateTable(getProcAddress, clearError, pTable)
}

#[no_mangle]
pub unsafe extern "C" fn glcapsDestroyTable(table: GlcapsTable) {
    capsDestroyTable(table)
}

#[no_mangle]
pub unsafe extern "C" fn glcapsReloadTable(
    table: GlcapsTable,
    getProcAddress: Option<PFN_getProcAddress>,
    clearError: PFN_clearError,
) -> GLenum {
    capsReloadTable(table, getProcAddress, clearError)
}

#[no_mangle]
pub unsafe extern "C" fn glcapsIsVersionSupported(
    table: GlcapsTable,
    major: c_int,
    minor: c_int,
) -> GLboolean {
    capsIsVersionSupported(table, major, minor)
}

#[no_mangle]
pub unsafe extern "C" fn glcapsGetMaxVersion(
    table: GlcapsTable,
    pMajor: *mut c_int,
    pMinor: *mut c_int,
) -> GLboolean {
    capsGetMaxVersion(table, pMajor, pMinor)
}

#[no_mangle]
pub unsafe extern "C" fn glcapsGetProcAddress(
    table: GlcapsTable,
    pName: *const c_char,
) -> *const c_void {
    capsGetProcAddress(table, pName)
}

#[no_mangle]
pub unsafe extern "C" fn glcapsBufferData(
    table: GlcapsTable,
    target: GLenum,
    size: GLint64,
    data: *const c_void,
    usage: GLenum,
) -> GLenum {
    capsBufferData(table, target, size, data, usage)
}

#[no_mangle]
pub unsafe extern "C" fn glcapsBufferSubData(
    table: GlcapsTable,
    target: GLenum,
    offset: GLint64,
    size: GLint64,
    data: *const c_void,
) -> GLenum {
    capsBufferSubData(table, target, offset, size, data)
}

#[no_mangle]
pub unsafe extern "C" fn glcapsMapBufferRange(
    table: GlcapsTable,
    target: GLenum,
    offset: GLint64,
    length: GLint64,
    access: GLbitfield,
    ppData: *mut *mut c_void,
) -> GLenum {
    capsMapBufferRange(table, target, offset, length, access, ppData)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negotiation_clamps_to_interface_version() {
        let mut version = 5;
        assert_eq!(unsafe { glcapsNegotiateInterfaceVersion(&mut version) }, GL_NO_ERROR);
        assert_eq!(version, INTERFACE_VERSION);

        let mut version = 0;
        assert_eq!(
            unsafe { glcapsNegotiateInterfaceVersion(&mut version) },
            GL_INVALID_OPERATION
        );
        assert_eq!(
            unsafe { glcapsNegotiateInterfaceVersion(std::ptr::null_mut()) },
            GL_INVALID_VALUE
        );
    }
}
