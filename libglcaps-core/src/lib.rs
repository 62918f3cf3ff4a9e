#![allow(non_snake_case)]
#![allow(non_camel_case_types)]
#![allow(non_upper_case_globals)]

extern crate copyless;
#[cfg(feature = "env_logger")]
extern crate env_logger;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;

mod caps;
mod conv;
mod error;
mod handle;
mod impls;
mod resolve;
mod slot;
mod tiers;
mod version;

pub mod ffi;

use std::os::raw::{c_char, c_void};

pub use crate::caps::{Capabilities, LoadConfig};
pub use crate::conv::{bool_from_gl, gl_from_bool, narrow, narrow_all};
pub use crate::error::{Error, Result};
pub use crate::handle::Handle;
pub use crate::resolve::{get_address, ExternLoader, PFN_clearError, PFN_getProcAddress, ProcLoader};
pub use crate::slot::{PointerWidth, Slot, Variant, WidthSlot};
pub use crate::tiers::*;
pub use crate::version::{ParseVersionError, Version};

// GL scalar types, as in `glcorearb.h`
pub type GLenum = u32;
pub type GLboolean = u8;
pub type GLbitfield = u32;
pub type GLbyte = i8;
pub type GLshort = i16;
pub type GLint = i32;
pub type GLsizei = i32;
pub type GLubyte = u8;
pub type GLushort = u16;
pub type GLuint = u32;
pub type GLfloat = f32;
pub type GLdouble = f64;
pub type GLchar = c_char;
pub type GLint64 = i64;
pub type GLuint64 = u64;
pub type GLhalf = u16;
pub type GLintptr = isize;
pub type GLsizeiptr = isize;

#[repr(C)]
pub struct __GLsync {
    _private: [u8; 0],
}
pub type GLsync = *const __GLsync;

pub type GLDEBUGPROC = Option<
    extern "system" fn(
        source: GLenum,
        type_: GLenum,
        id: GLuint,
        severity: GLenum,
        length: GLsizei,
        message: *const GLchar,
        userParam: *mut c_void,
    ),
>;

pub const GL_NO_ERROR: GLenum = 0;
pub const GL_INVALID_VALUE: GLenum = 0x0501;
pub const GL_INVALID_OPERATION: GLenum = 0x0502;

pub const GL_FALSE: GLboolean = 0;
pub const GL_TRUE: GLboolean = 1;
