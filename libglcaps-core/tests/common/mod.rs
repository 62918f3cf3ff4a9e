//! A fake native context for driving table loads without a GPU.
//!
//! Lookups are recorded, exported names are served stub functions, and the
//! stubs of the width-dependent entry points record their arguments in a
//! thread-local call log.

#![allow(dead_code)]

use glcaps_core::*;

use std::cell::RefCell;
use std::collections::HashSet;
use std::ffi::CStr;
use std::os::raw::c_void;
use std::ptr;
use std::slice;

pub const MAPPING: usize = 0x1000;
pub const GENERATED_NAME: GLuint = 7;
pub const GL_DEPTH_TEST: GLenum = 0x0B71;

#[derive(Clone, Debug, PartialEq)]
pub struct Call {
    pub name: &'static str,
    pub width: PointerWidth,
    pub args: Vec<i64>,
}

thread_local! {
    static CALLS: RefCell<Vec<Call>> = RefCell::new(Vec::new());
}

fn record(name: &'static str, width: PointerWidth, args: Vec<i64>) {
    CALLS.with(|calls| calls.borrow_mut().push(Call { name, width, args }));
}

/// Drains the native calls made on this thread so far.
pub fn take_calls() -> Vec<Call> {
    CALLS.with(|calls| calls.borrow_mut().drain(..).collect())
}

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

unsafe extern "system" fn noop() {}

unsafe extern "system" fn buffer_data_narrow(_: GLenum, size: i32, _: *const c_void, _: GLenum) {
    record("glBufferData", PointerWidth::Narrow, vec![size as i64]);
}

unsafe extern "system" fn buffer_data_wide(_: GLenum, size: i64, _: *const c_void, _: GLenum) {
    record("glBufferData", PointerWidth::Wide, vec![size]);
}

unsafe extern "system" fn buffer_sub_data_narrow(_: GLenum, offset: i32, size: i32, _: *const c_void) {
    record("glBufferSubData", PointerWidth::Narrow, vec![offset as i64, size as i64]);
}

unsafe extern "system" fn buffer_sub_data_wide(_: GLenum, offset: i64, size: i64, _: *const c_void) {
    record("glBufferSubData", PointerWidth::Wide, vec![offset, size]);
}

unsafe extern "system" fn map_buffer_range_narrow(
    _: GLenum,
    offset: i32,
    length: i32,
    _: GLbitfield,
) -> *mut c_void {
    record("glMapBufferRange", PointerWidth::Narrow, vec![offset as i64, length as i64]);
    MAPPING as *mut c_void
}

unsafe extern "system" fn map_buffer_range_wide(
    _: GLenum,
    offset: i64,
    length: i64,
    _: GLbitfield,
) -> *mut c_void {
    record("glMapBufferRange", PointerWidth::Wide, vec![offset, length]);
    MAPPING as *mut c_void
}

unsafe extern "system" fn bind_buffers_range_narrow(
    _: GLenum,
    _: GLuint,
    count: GLsizei,
    _: *const GLuint,
    offsets: *const i32,
    sizes: *const i32,
) {
    let count = count as usize;
    let mut args: Vec<i64> = slice::from_raw_parts(offsets, count).iter().map(|&v| v as i64).collect();
    args.extend(slice::from_raw_parts(sizes, count).iter().map(|&v| v as i64));
    record("glBindBuffersRange", PointerWidth::Narrow, args);
}

unsafe extern "system" fn bind_buffers_range_wide(
    _: GLenum,
    _: GLuint,
    count: GLsizei,
    _: *const GLuint,
    offsets: *const i64,
    sizes: *const i64,
) {
    let count = count as usize;
    let mut args = slice::from_raw_parts(offsets, count).to_vec();
    args.extend_from_slice(slice::from_raw_parts(sizes, count));
    record("glBindBuffersRange", PointerWidth::Wide, args);
}

unsafe extern "system" fn gen_names(n: GLsizei, names: *mut GLuint) {
    for name in slice::from_raw_parts_mut(names, n as usize) {
        *name = GENERATED_NAME;
    }
}

unsafe extern "system" fn is_enabled(cap: GLenum) -> GLboolean {
    gl_from_bool(cap == GL_DEPTH_TEST)
}

/// Address of the stub standing in for `name` on a driver built for `width`.
pub fn stub(name: &str, width: PointerWidth) -> *const c_void {
    use glcaps_core::PointerWidth::*;
    match (name, width) {
        ("glBufferData", Narrow) => buffer_data_narrow as PFNGLBUFFERDATAPROC<i32> as *const c_void,
        ("glBufferData", Wide) => buffer_data_wide as PFNGLBUFFERDATAPROC<i64> as *const c_void,
        ("glBufferSubData", Narrow) => {
            buffer_sub_data_narrow as PFNGLBUFFERSUBDATAPROC<i32> as *const c_void
        }
        ("glBufferSubData", Wide) => buffer_sub_data_wide as PFNGLBUFFERSUBDATAPROC<i64> as *const c_void,
        ("glMapBufferRange", Narrow) => {
            map_buffer_range_narrow as PFNGLMAPBUFFERRANGEPROC<i32> as *const c_void
        }
        ("glMapBufferRange", Wide) => {
            map_buffer_range_wide as PFNGLMAPBUFFERRANGEPROC<i64> as *const c_void
        }
        ("glBindBuffersRange", Narrow) => {
            bind_buffers_range_narrow as PFNGLBINDBUFFERSRANGEPROC<i32> as *const c_void
        }
        ("glBindBuffersRange", Wide) => {
            bind_buffers_range_wide as PFNGLBINDBUFFERSRANGEPROC<i64> as *const c_void
        }
        ("glGenBuffers", _) | ("glGenTextures", _) | ("glGenVertexArrays", _) => {
            gen_names as unsafe extern "system" fn(GLsizei, *mut GLuint) as *const c_void
        }
        ("glIsEnabled", _) => {
            (is_enabled as unsafe extern "system" fn(GLenum) -> GLboolean) as *const c_void
        }
        _ => noop as unsafe extern "system" fn() as *const c_void,
    }
}

/// Native context exporting every core entry point up to a version, minus
/// an explicit list of missing names.
pub struct FakeContext {
    width: PointerWidth,
    max_version: Option<Version>,
    missing: HashSet<&'static str>,
    pub lookups: Vec<String>,
    pub clear_calls: usize,
}

impl FakeContext {
    pub fn new(width: PointerWidth) -> Self {
        FakeContext {
            width,
            max_version: None,
            missing: HashSet::new(),
            lookups: Vec::new(),
            clear_calls: 0,
        }
    }

    pub fn host() -> Self {
        FakeContext::new(PointerWidth::host())
    }

    /// Only exports entry points introduced up to `version`.
    pub fn up_to(mut self, version: Version) -> Self {
        self.max_version = Some(version);
        self
    }

    pub fn without(mut self, names: &[&'static str]) -> Self {
        self.missing.extend(names.iter().cloned());
        self
    }

    pub fn exports(&self, name: &str) -> bool {
        if self.missing.contains(name) {
            return false;
        }
        match (self.max_version, Version::introducing(name)) {
            (_, None) => false,
            (None, Some(_)) => true,
            (Some(max), Some(version)) => version <= max,
        }
    }
}

impl ProcLoader for FakeContext {
    fn get_proc_address(&mut self, name: &CStr) -> *const c_void {
        let name = name.to_str().unwrap();
        self.lookups.push(name.to_string());
        if self.exports(name) {
            stub(name, self.width)
        } else {
            ptr::null()
        }
    }

    fn clear_error(&mut self) {
        self.clear_calls += 1;
    }
}
