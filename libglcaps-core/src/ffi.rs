//! C ABI implementation. The exported `glcaps*` symbols of the `glcaps`
//! crate forward to these functions.

use std::ffi::CStr;
use std::os::raw::{c_char, c_int, c_void};
use std::ptr;

use crate::caps::Capabilities;
use crate::conv::gl_from_bool;
use crate::error::Error;
use crate::handle::Handle;
use crate::resolve::{ExternLoader, PFN_clearError, PFN_getProcAddress};
use crate::version::Version;
use crate::*;

pub type GlcapsTable = Handle<Capabilities>;

fn report(function: &str, err: Error) -> GLenum {
    error!("{}: {}", function, err);
    err.code()
}

/// Loads a new capability table for the host pointer width.
///
/// The native context has to be current on the calling thread.
#[inline]
pub unsafe extern "C" fn capsCreateTable(
    getProcAddress: Option<PFN_getProcAddress>,
    clearError: PFN_clearError,
    pTable: *mut GlcapsTable,
) -> GLenum {
    #[cfg(feature = "env_logger")]
    {
        let _ = env_logger::try_init();
    }

    if pTable.is_null() {
        return GL_INVALID_VALUE;
    }
    let get_proc_address = match getProcAddress {
        Some(function) => function,
        None => {
            *pTable = Handle::null();
            return GL_INVALID_VALUE;
        }
    };

    let mut loader = ExternLoader::new(get_proc_address, clearError);
    *pTable = Handle::new(Capabilities::load(&mut loader));
    GL_NO_ERROR
}

#[inline]
pub unsafe extern "C" fn capsDestroyTable(table: GlcapsTable) {
    if !table.is_null() {
        let _ = table.unwrap();
    }
}

/// Re-resolves every entry point of `table`, e.g. after the context changed.
#[inline]
pub unsafe extern "C" fn capsReloadTable(
    mut table: GlcapsTable,
    getProcAddress: Option<PFN_getProcAddress>,
    clearError: PFN_clearError,
) -> GLenum {
    match (table.as_mut(), getProcAddress) {
        (Some(caps), Some(get_proc_address)) => {
            let mut loader = ExternLoader::new(get_proc_address, clearError);
            caps.reload(&mut loader);
            GL_NO_ERROR
        }
        _ => GL_INVALID_VALUE,
    }
}

#[inline]
pub unsafe extern "C" fn capsIsVersionSupported(
    table: GlcapsTable,
    major: c_int,
    minor: c_int,
) -> GLboolean {
    let version = if major < 0 || minor < 0 {
        None
    } else {
        Version::from_parts(major as u32, minor as u32)
    };
    match (table.as_ref(), version) {
        (Some(caps), Some(version)) => gl_from_bool(caps.supports(version)),
        _ => GL_FALSE,
    }
}

/// Writes the highest fully supported version. Returns `GL_FALSE` and writes
/// `0.0` when not even 1.0 is available.
#[inline]
pub unsafe extern "C" fn capsGetMaxVersion(
    table: GlcapsTable,
    pMajor: *mut c_int,
    pMinor: *mut c_int,
) -> GLboolean {
    let version = table.as_ref().and_then(|caps| caps.max_version());
    let (major, minor) = match version {
        Some(version) => (version.major() as c_int, version.minor() as c_int),
        None => (0, 0),
    };
    if let Some(out) = pMajor.as_mut() {
        *out = major;
    }
    if let Some(out) = pMinor.as_mut() {
        *out = minor;
    }
    gl_from_bool(version.is_some())
}

/// Cached address of a core entry point, null if it's unknown or unresolved.
#[inline]
pub unsafe extern "C" fn capsGetProcAddress(
    table: GlcapsTable,
    pName: *const c_char,
) -> *const c_void {
    if pName.is_null() {
        return ptr::null();
    }
    match table.as_ref() {
        Some(caps) => match CStr::from_ptr(pName).to_str() {
            Ok(name) => caps.proc_address(name),
            Err(_) => ptr::null(),
        },
        None => ptr::null(),
    }
}

#[inline]
pub unsafe extern "C" fn capsBufferData(
    table: GlcapsTable,
    target: GLenum,
    size: GLint64,
    data: *const c_void,
    usage: GLenum,
) -> GLenum {
    let caps = match table.as_ref() {
        Some(caps) => caps,
        None => return GL_INVALID_OPERATION,
    };
    match caps.buffer_data(target, size, data, usage) {
        Ok(()) => GL_NO_ERROR,
        Err(err) => report("capsBufferData", err),
    }
}

#[inline]
pub unsafe extern "C" fn capsBufferSubData(
    table: GlcapsTable,
    target: GLenum,
    offset: GLint64,
    size: GLint64,
    data: *const c_void,
) -> GLenum {
    let caps = match table.as_ref() {
        Some(caps) => caps,
        None => return GL_INVALID_OPERATION,
    };
    match caps.buffer_sub_data(target, offset, size, data) {
        Ok(()) => GL_NO_ERROR,
        Err(err) => report("capsBufferSubData", err),
    }
}

/// Maps a buffer range, writing the mapping (or null) to `ppData`.
#[inline]
pub unsafe extern "C" fn capsMapBufferRange(
    table: GlcapsTable,
    target: GLenum,
    offset: GLint64,
    length: GLint64,
    access: GLbitfield,
    ppData: *mut *mut c_void,
) -> GLenum {
    if ppData.is_null() {
        return GL_INVALID_VALUE;
    }
    *ppData = ptr::null_mut();
    let caps = match table.as_ref() {
        Some(caps) => caps,
        None => return GL_INVALID_OPERATION,
    };
    match caps.map_buffer_range(target, offset, length, access) {
        Ok(mapping) => {
            *ppData = mapping;
            GL_NO_ERROR
        }
        Err(err) => report("capsMapBufferRange", err),
    }
}
