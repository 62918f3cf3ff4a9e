//! Entry points introduced by each OpenGL version, core profile only.
//!
//! Every tier is a table of function slots. Entries whose native signature
//! carries a `GLintptr`/`GLsizeiptr` argument are declared once, generic over
//! the offset type, and stored as a `WidthSlot`.

use super::*;
use crate::resolve::ProcLoader;
use crate::slot::{PointerWidth, Slot, WidthSlot};
use crate::version::Version;

use std::os::raw::c_void;

/// One version tier of the function table.
pub trait Tier {
    fn version(&self) -> Version;

    /// Resolves every slot of this tier. Returns `true` iff all of them,
    /// including the host-width form of every width-dependent entry, resolved.
    fn load(&mut self, loader: &mut dyn ProcLoader, width: PointerWidth) -> bool;

    /// Empties every slot.
    fn reset(&mut self);

    /// Names of unresolved entry points.
    fn missing(&self) -> Vec<&'static str>;

    /// Cached address of `name`, if this tier declares it.
    fn address_of(&self, name: &str) -> Option<*const c_void>;
}

macro_rules! gl_tier {
    (
        $(#[$attr:meta])*
        pub struct $tier:ident: $version:ident {
            $( $field:ident => $sym:literal: fn($($arg:ident: $ty:ty),*) $(-> $ret:ty)?; )*
        }
        width {
            $( $wfield:ident => $wsym:literal as $pfn:ident:
                fn<$ptr:ident>($($warg:ident: $wty:ty),*) $(-> $wret:ty)?; )*
        }
    ) => {
        $(
            pub type $pfn<$ptr> = unsafe extern "system" fn($($warg: $wty),*) $(-> $wret)?;
        )*

        $(#[$attr])*
        pub struct $tier {
            $( pub $field: Slot<unsafe extern "system" fn($($arg: $ty),*) $(-> $ret)?>, )*
            $( pub $wfield: WidthSlot<$pfn<i32>, $pfn<i64>>, )*
        }

        impl $tier {
            pub const SYMBOLS: &'static [&'static str] = &[$($sym,)* $($wsym,)*];
        }

        impl Default for $tier {
            fn default() -> Self {
                $tier {
                    $( $field: Slot::new(concat!($sym, "\0")), )*
                    $( $wfield: WidthSlot::new(concat!($wsym, "\0")), )*
                }
            }
        }

        impl Tier for $tier {
            fn version(&self) -> Version {
                Version::$version
            }

            #[allow(unused_mut, unused_variables)]
            fn load(&mut self, loader: &mut dyn ProcLoader, width: PointerWidth) -> bool {
                profiling::scope!(stringify!($tier));
                $( self.$field.resolve(loader); )*
                let mut width_resolved = true;
                $(
                    self.$wfield.resolve(loader, width);
                    width_resolved &= self.$wfield.is_set();
                )*
                true $( && self.$field.is_set() )* && width_resolved
            }

            fn reset(&mut self) {
                $( self.$field.reset(); )*
                $( self.$wfield.reset(); )*
            }

            fn missing(&self) -> Vec<&'static str> {
                let mut missing = Vec::new();
                $(
                    if !self.$field.is_set() {
                        missing.push($sym);
                    }
                )*
                $(
                    if !self.$wfield.is_set() {
                        missing.push($wsym);
                    }
                )*
                missing
            }

            fn address_of(&self, name: &str) -> Option<*const c_void> {
                match name {
                    $( $sym => Some(self.$field.address()), )*
                    $( $wsym => Some(self.$wfield.address()), )*
                    _ => None,
                }
            }
        }
    };
}

gl_tier! {
    /// OpenGL 1.0
    pub struct Gl10: V1_0 {
        cull_face => "glCullFace": fn(mode: GLenum);
        front_face => "glFrontFace": fn(mode: GLenum);
        hint => "glHint": fn(target: GLenum, mode: GLenum);
        line_width => "glLineWidth": fn(width: GLfloat);
        point_size => "glPointSize": fn(size: GLfloat);
        polygon_mode => "glPolygonMode": fn(face: GLenum, mode: GLenum);
        scissor => "glScissor": fn(x: GLint, y: GLint, width: GLsizei, height: GLsizei);
        tex_parameterf => "glTexParameterf": fn(target: GLenum, pname: GLenum, param: GLfloat);
        tex_parameterfv => "glTexParameterfv": fn(target: GLenum, pname: GLenum, params: *const GLfloat);
        tex_parameteri => "glTexParameteri": fn(target: GLenum, pname: GLenum, param: GLint);
        tex_parameteriv => "glTexParameteriv": fn(target: GLenum, pname: GLenum, params: *const GLint);
        tex_image_1d => "glTexImage1D": fn(target: GLenum, level: GLint, internalformat: GLint, width: GLsizei, border: GLint, format: GLenum, type_: GLenum, pixels: *const c_void);
        tex_image_2d => "glTexImage2D": fn(target: GLenum, level: GLint, internalformat: GLint, width: GLsizei, height: GLsizei, border: GLint, format: GLenum, type_: GLenum, pixels: *const c_void);
        draw_buffer => "glDrawBuffer": fn(buf: GLenum);
        clear => "glClear": fn(mask: GLbitfield);
        clear_color => "glClearColor": fn(red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat);
        clear_stencil => "glClearStencil": fn(s: GLint);
        clear_depth => "glClearDepth": fn(depth: GLdouble);
        stencil_mask => "glStencilMask": fn(mask: GLuint);
        color_mask => "glColorMask": fn(red: GLboolean, green: GLboolean, blue: GLboolean, alpha: GLboolean);
        depth_mask => "glDepthMask": fn(flag: GLboolean);
        disable => "glDisable": fn(cap: GLenum);
        enable => "glEnable": fn(cap: GLenum);
        finish => "glFinish": fn();
        flush => "glFlush": fn();
        blend_func => "glBlendFunc": fn(sfactor: GLenum, dfactor: GLenum);
        logic_op => "glLogicOp": fn(opcode: GLenum);
        stencil_func => "glStencilFunc": fn(func: GLenum, ref_: GLint, mask: GLuint);
        stencil_op => "glStencilOp": fn(fail: GLenum, zfail: GLenum, zpass: GLenum);
        depth_func => "glDepthFunc": fn(func: GLenum);
        pixel_storef => "glPixelStoref": fn(pname: GLenum, param: GLfloat);
        pixel_storei => "glPixelStorei": fn(pname: GLenum, param: GLint);
        read_buffer => "glReadBuffer": fn(src: GLenum);
        read_pixels => "glReadPixels": fn(x: GLint, y: GLint, width: GLsizei, height: GLsizei, format: GLenum, type_: GLenum, pixels: *mut c_void);
        get_booleanv => "glGetBooleanv": fn(pname: GLenum, data: *mut GLboolean);
        get_doublev => "glGetDoublev": fn(pname: GLenum, data: *mut GLdouble);
        get_error => "glGetError": fn() -> GLenum;
        get_floatv => "glGetFloatv": fn(pname: GLenum, data: *mut GLfloat);
        get_integerv => "glGetIntegerv": fn(pname: GLenum, data: *mut GLint);
        get_string => "glGetString": fn(name: GLenum) -> *const GLubyte;
        get_tex_image => "glGetTexImage": fn(target: GLenum, level: GLint, format: GLenum, type_: GLenum, pixels: *mut c_void);
        get_tex_parameterfv => "glGetTexParameterfv": fn(target: GLenum, pname: GLenum, params: *mut GLfloat);
        get_tex_parameteriv => "glGetTexParameteriv": fn(target: GLenum, pname: GLenum, params: *mut GLint);
        get_tex_level_parameterfv => "glGetTexLevelParameterfv": fn(target: GLenum, level: GLint, pname: GLenum, params: *mut GLfloat);
        get_tex_level_parameteriv => "glGetTexLevelParameteriv": fn(target: GLenum, level: GLint, pname: GLenum, params: *mut GLint);
        is_enabled => "glIsEnabled": fn(cap: GLenum) -> GLboolean;
        depth_range => "glDepthRange": fn(n: GLdouble, f: GLdouble);
        viewport => "glViewport": fn(x: GLint, y: GLint, width: GLsizei, height: GLsizei);
    }
    width {}
}

gl_tier! {
    /// OpenGL 1.1
    pub struct Gl11: V1_1 {
        draw_arrays => "glDrawArrays": fn(mode: GLenum, first: GLint, count: GLsizei);
        draw_elements => "glDrawElements": fn(mode: GLenum, count: GLsizei, type_: GLenum, indices: *const c_void);
        get_pointerv => "glGetPointerv": fn(pname: GLenum, params: *mut *mut c_void);
        polygon_offset => "glPolygonOffset": fn(factor: GLfloat, units: GLfloat);
        copy_tex_image_1d => "glCopyTexImage1D": fn(target: GLenum, level: GLint, internalformat: GLenum, x: GLint, y: GLint, width: GLsizei, border: GLint);
        copy_tex_image_2d => "glCopyTexImage2D": fn(target: GLenum, level: GLint, internalformat: GLenum, x: GLint, y: GLint, width: GLsizei, height: GLsizei, border: GLint);
        copy_tex_sub_image_1d => "glCopyTexSubImage1D": fn(target: GLenum, level: GLint, xoffset: GLint, x: GLint, y: GLint, width: GLsizei);
        copy_tex_sub_image_2d => "glCopyTexSubImage2D": fn(target: GLenum, level: GLint, xoffset: GLint, yoffset: GLint, x: GLint, y: GLint, width: GLsizei, height: GLsizei);
        tex_sub_image_1d => "glTexSubImage1D": fn(target: GLenum, level: GLint, xoffset: GLint, width: GLsizei, format: GLenum, type_: GLenum, pixels: *const c_void);
        tex_sub_image_2d => "glTexSubImage2D": fn(target: GLenum, level: GLint, xoffset: GLint, yoffset: GLint, width: GLsizei, height: GLsizei, format: GLenum, type_: GLenum, pixels: *const c_void);
        bind_texture => "glBindTexture": fn(target: GLenum, texture: GLuint);
        delete_textures => "glDeleteTextures": fn(n: GLsizei, textures: *const GLuint);
        gen_textures => "glGenTextures": fn(n: GLsizei, textures: *mut GLuint);
        is_texture => "glIsTexture": fn(texture: GLuint) -> GLboolean;
    }
    width {}
}

gl_tier! {
    /// OpenGL 1.2
    pub struct Gl12: V1_2 {
        draw_range_elements => "glDrawRangeElements": fn(mode: GLenum, start: GLuint, end: GLuint, count: GLsizei, type_: GLenum, indices: *const c_void);
        tex_image_3d => "glTexImage3D": fn(target: GLenum, level: GLint, internalformat: GLint, width: GLsizei, height: GLsizei, depth: GLsizei, border: GLint, format: GLenum, type_: GLenum, pixels: *const c_void);
        tex_sub_image_3d => "glTexSubImage3D": fn(target: GLenum, level: GLint, xoffset: GLint, yoffset: GLint, zoffset: GLint, width: GLsizei, height: GLsizei, depth: GLsizei, format: GLenum, type_: GLenum, pixels: *const c_void);
        copy_tex_sub_image_3d => "glCopyTexSubImage3D": fn(target: GLenum, level: GLint, xoffset: GLint, yoffset: GLint, zoffset: GLint, x: GLint, y: GLint, width: GLsizei, height: GLsizei);
    }
    width {}
}

gl_tier! {
    /// OpenGL 1.3
    pub struct Gl13: V1_3 {
        active_texture => "glActiveTexture": fn(texture: GLenum);
        sample_coverage => "glSampleCoverage": fn(value: GLfloat, invert: GLboolean);
        compressed_tex_image_3d => "glCompressedTexImage3D": fn(target: GLenum, level: GLint, internalformat: GLenum, width: GLsizei, height: GLsizei, depth: GLsizei, border: GLint, image_size: GLsizei, data: *const c_void);
        compressed_tex_image_2d => "glCompressedTexImage2D": fn(target: GLenum, level: GLint, internalformat: GLenum, width: GLsizei, height: GLsizei, border: GLint, image_size: GLsizei, data: *const c_void);
        compressed_tex_image_1d => "glCompressedTexImage1D": fn(target: GLenum, level: GLint, internalformat: GLenum, width: GLsizei, border: GLint, image_size: GLsizei, data: *const c_void);
        compressed_tex_sub_image_3d => "glCompressedTexSubImage3D": fn(target: GLenum, level: GLint, xoffset: GLint, yoffset: GLint, zoffset: GLint, width: GLsizei, height: GLsizei, depth: GLsizei, format: GLenum, image_size: GLsizei, data: *const c_void);
        compressed_tex_sub_image_2d => "glCompressedTexSubImage2D": fn(target: GLenum, level: GLint, xoffset: GLint, yoffset: GLint, width: GLsizei, height: GLsizei, format: GLenum, image_size: GLsizei, data: *const c_void);
        compressed_tex_sub_image_1d => "glCompressedTexSubImage1D": fn(target: GLenum, level: GLint, xoffset: GLint, width: GLsizei, format: GLenum, image_size: GLsizei, data: *const c_void);
        get_compressed_tex_image => "glGetCompressedTexImage": fn(target: GLenum, level: GLint, img: *mut c_void);
    }
    width {}
}

gl_tier! {
    /// OpenGL 1.4
    pub struct Gl14: V1_4 {
        blend_func_separate => "glBlendFuncSeparate": fn(sfactor_rgb: GLenum, dfactor_rgb: GLenum, sfactor_alpha: GLenum, dfactor_alpha: GLenum);
        multi_draw_arrays => "glMultiDrawArrays": fn(mode: GLenum, first: *const GLint, count: *const GLsizei, drawcount: GLsizei);
        multi_draw_elements => "glMultiDrawElements": fn(mode: GLenum, count: *const GLsizei, type_: GLenum, indices: *const *const c_void, drawcount: GLsizei);
        point_parameterf => "glPointParameterf": fn(pname: GLenum, param: GLfloat);
        point_parameterfv => "glPointParameterfv": fn(pname: GLenum, params: *const GLfloat);
        point_parameteri => "glPointParameteri": fn(pname: GLenum, param: GLint);
        point_parameteriv => "glPointParameteriv": fn(pname: GLenum, params: *const GLint);
        blend_color => "glBlendColor": fn(red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat);
        blend_equation => "glBlendEquation": fn(mode: GLenum);
    }
    width {}
}

gl_tier! {
    /// OpenGL 1.5
    pub struct Gl15: V1_5 {
        gen_queries => "glGenQueries": fn(n: GLsizei, ids: *mut GLuint);
        delete_queries => "glDeleteQueries": fn(n: GLsizei, ids: *const GLuint);
        is_query => "glIsQuery": fn(id: GLuint) -> GLboolean;
        begin_query => "glBeginQuery": fn(target: GLenum, id: GLuint);
        end_query => "glEndQuery": fn(target: GLenum);
        get_queryiv => "glGetQueryiv": fn(target: GLenum, pname: GLenum, params: *mut GLint);
        get_query_objectiv => "glGetQueryObjectiv": fn(id: GLuint, pname: GLenum, params: *mut GLint);
        get_query_objectuiv => "glGetQueryObjectuiv": fn(id: GLuint, pname: GLenum, params: *mut GLuint);
        bind_buffer => "glBindBuffer": fn(target: GLenum, buffer: GLuint);
        delete_buffers => "glDeleteBuffers": fn(n: GLsizei, buffers: *const GLuint);
        gen_buffers => "glGenBuffers": fn(n: GLsizei, buffers: *mut GLuint);
        is_buffer => "glIsBuffer": fn(buffer: GLuint) -> GLboolean;
        map_buffer => "glMapBuffer": fn(target: GLenum, access: GLenum) -> *mut c_void;
        unmap_buffer => "glUnmapBuffer": fn(target: GLenum) -> GLboolean;
        get_buffer_parameteriv => "glGetBufferParameteriv": fn(target: GLenum, pname: GLenum, params: *mut GLint);
        get_buffer_pointerv => "glGetBufferPointerv": fn(target: GLenum, pname: GLenum, params: *mut *mut c_void);
    }
    width {
        buffer_data => "glBufferData" as PFNGLBUFFERDATAPROC:
            fn<P>(target: GLenum, size: P, data: *const c_void, usage: GLenum);
        buffer_sub_data => "glBufferSubData" as PFNGLBUFFERSUBDATAPROC:
            fn<P>(target: GLenum, offset: P, size: P, data: *const c_void);
        get_buffer_sub_data => "glGetBufferSubData" as PFNGLGETBUFFERSUBDATAPROC:
            fn<P>(target: GLenum, offset: P, size: P, data: *mut c_void);
    }
}

gl_tier! {
    /// OpenGL 2.0
    pub struct Gl20: V2_0 {
        blend_equation_separate => "glBlendEquationSeparate": fn(mode_rgb: GLenum, mode_alpha: GLenum);
        draw_buffers => "glDrawBuffers": fn(n: GLsizei, bufs: *const GLenum);
        stencil_op_separate => "glStencilOpSeparate": fn(face: GLenum, sfail: GLenum, dpfail: GLenum, dppass: GLenum);
        stencil_func_separate => "glStencilFuncSeparate": fn(face: GLenum, func: GLenum, ref_: GLint, mask: GLuint);
        stencil_mask_separate => "glStencilMaskSeparate": fn(face: GLenum, mask: GLuint);
        attach_shader => "glAttachShader": fn(program: GLuint, shader: GLuint);
        bind_attrib_location => "glBindAttribLocation": fn(program: GLuint, index: GLuint, name: *const GLchar);
        compile_shader => "glCompileShader": fn(shader: GLuint);
        create_program => "glCreateProgram": fn() -> GLuint;
        create_shader => "glCreateShader": fn(type_: GLenum) -> GLuint;
        delete_program => "glDeleteProgram": fn(program: GLuint);
        delete_shader => "glDeleteShader": fn(shader: GLuint);
        detach_shader => "glDetachShader": fn(program: GLuint, shader: GLuint);
        disable_vertex_attrib_array => "glDisableVertexAttribArray": fn(index: GLuint);
        enable_vertex_attrib_array => "glEnableVertexAttribArray": fn(index: GLuint);
        get_active_attrib => "glGetActiveAttrib": fn(program: GLuint, index: GLuint, buf_size: GLsizei, length: *mut GLsizei, size: *mut GLint, type_: *mut GLenum, name: *mut GLchar);
        get_active_uniform => "glGetActiveUniform": fn(program: GLuint, index: GLuint, buf_size: GLsizei, length: *mut GLsizei, size: *mut GLint, type_: *mut GLenum, name: *mut GLchar);
        get_attached_shaders => "glGetAttachedShaders": fn(program: GLuint, max_count: GLsizei, count: *mut GLsizei, shaders: *mut GLuint);
        get_attrib_location => "glGetAttribLocation": fn(program: GLuint, name: *const GLchar) -> GLint;
        get_programiv => "glGetProgramiv": fn(program: GLuint, pname: GLenum, params: *mut GLint);
        get_program_info_log => "glGetProgramInfoLog": fn(program: GLuint, buf_size: GLsizei, length: *mut GLsizei, info_log: *mut GLchar);
        get_shaderiv => "glGetShaderiv": fn(shader: GLuint, pname: GLenum, params: *mut GLint);
        get_shader_info_log => "glGetShaderInfoLog": fn(shader: GLuint, buf_size: GLsizei, length: *mut GLsizei, info_log: *mut GLchar);
        get_shader_source => "glGetShaderSource": fn(shader: GLuint, buf_size: GLsizei, length: *mut GLsizei, source: *mut GLchar);
        get_uniform_location => "glGetUniformLocation": fn(program: GLuint, name: *const GLchar) -> GLint;
        get_uniformfv => "glGetUniformfv": fn(program: GLuint, location: GLint, params: *mut GLfloat);
        get_uniformiv => "glGetUniformiv": fn(program: GLuint, location: GLint, params: *mut GLint);
        get_vertex_attribdv => "glGetVertexAttribdv": fn(index: GLuint, pname: GLenum, params: *mut GLdouble);
        get_vertex_attribfv => "glGetVertexAttribfv": fn(index: GLuint, pname: GLenum, params: *mut GLfloat);
        get_vertex_attribiv => "glGetVertexAttribiv": fn(index: GLuint, pname: GLenum, params: *mut GLint);
        get_vertex_attrib_pointerv => "glGetVertexAttribPointerv": fn(index: GLuint, pname: GLenum, pointer: *mut *mut c_void);
        is_program => "glIsProgram": fn(program: GLuint) -> GLboolean;
        is_shader => "glIsShader": fn(shader: GLuint) -> GLboolean;
        link_program => "glLinkProgram": fn(program: GLuint);
        shader_source => "glShaderSource": fn(shader: GLuint, count: GLsizei, string: *const *const GLchar, length: *const GLint);
        use_program => "glUseProgram": fn(program: GLuint);
        uniform_1f => "glUniform1f": fn(location: GLint, v0: GLfloat);
        uniform_2f => "glUniform2f": fn(location: GLint, v0: GLfloat, v1: GLfloat);
        uniform_3f => "glUniform3f": fn(location: GLint, v0: GLfloat, v1: GLfloat, v2: GLfloat);
        uniform_4f => "glUniform4f": fn(location: GLint, v0: GLfloat, v1: GLfloat, v2: GLfloat, v3: GLfloat);
        uniform_1i => "glUniform1i": fn(location: GLint, v0: GLint);
        uniform_2i => "glUniform2i": fn(location: GLint, v0: GLint, v1: GLint);
        uniform_3i => "glUniform3i": fn(location: GLint, v0: GLint, v1: GLint, v2: GLint);
        uniform_4i => "glUniform4i": fn(location: GLint, v0: GLint, v1: GLint, v2: GLint, v3: GLint);
        uniform_1fv => "glUniform1fv": fn(location: GLint, count: GLsizei, value: *const GLfloat);
        uniform_2fv => "glUniform2fv": fn(location: GLint, count: GLsizei, value: *const GLfloat);
        uniform_3fv => "glUniform3fv": fn(location: GLint, count: GLsizei, value: *const GLfloat);
        uniform_4fv => "glUniform4fv": fn(location: GLint, count: GLsizei, value: *const GLfloat);
        uniform_1iv => "glUniform1iv": fn(location: GLint, count: GLsizei, value: *const GLint);
        uniform_2iv => "glUniform2iv": fn(location: GLint, count: GLsizei, value: *const GLint);
        uniform_3iv => "glUniform3iv": fn(location: GLint, count: GLsizei, value: *const GLint);
        uniform_4iv => "glUniform4iv": fn(location: GLint, count: GLsizei, value: *const GLint);
        uniform_matrix_2fv => "glUniformMatrix2fv": fn(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat);
        uniform_matrix_3fv => "glUniformMatrix3fv": fn(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat);
        uniform_matrix_4fv => "glUniformMatrix4fv": fn(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat);
        validate_program => "glValidateProgram": fn(program: GLuint);
        vertex_attrib_1d => "glVertexAttrib1d": fn(index: GLuint, x: GLdouble);
        vertex_attrib_1dv => "glVertexAttrib1dv": fn(index: GLuint, v: *const GLdouble);
        vertex_attrib_1f => "glVertexAttrib1f": fn(index: GLuint, x: GLfloat);
        vertex_attrib_1fv => "glVertexAttrib1fv": fn(index: GLuint, v: *const GLfloat);
        vertex_attrib_1s => "glVertexAttrib1s": fn(index: GLuint, x: GLshort);
        vertex_attrib_1sv => "glVertexAttrib1sv": fn(index: GLuint, v: *const GLshort);
        vertex_attrib_2d => "glVertexAttrib2d": fn(index: GLuint, x: GLdouble, y: GLdouble);
        vertex_attrib_2dv => "glVertexAttrib2dv": fn(index: GLuint, v: *const GLdouble);
        vertex_attrib_2f => "glVertexAttrib2f": fn(index: GLuint, x: GLfloat, y: GLfloat);
        vertex_attrib_2fv => "glVertexAttrib2fv": fn(index: GLuint, v: *const GLfloat);
        vertex_attrib_2s => "glVertexAttrib2s": fn(index: GLuint, x: GLshort, y: GLshort);
        vertex_attrib_2sv => "glVertexAttrib2sv": fn(index: GLuint, v: *const GLshort);
        vertex_attrib_3d => "glVertexAttrib3d": fn(index: GLuint, x: GLdouble, y: GLdouble, z: GLdouble);
        vertex_attrib_3dv => "glVertexAttrib3dv": fn(index: GLuint, v: *const GLdouble);
        vertex_attrib_3f => "glVertexAttrib3f": fn(index: GLuint, x: GLfloat, y: GLfloat, z: GLfloat);
        vertex_attrib_3fv => "glVertexAttrib3fv": fn(index: GLuint, v: *const GLfloat);
        vertex_attrib_3s => "glVertexAttrib3s": fn(index: GLuint, x: GLshort, y: GLshort, z: GLshort);
        vertex_attrib_3sv => "glVertexAttrib3sv": fn(index: GLuint, v: *const GLshort);
        vertex_attrib_4nbv => "glVertexAttrib4Nbv": fn(index: GLuint, v: *const GLbyte);
        vertex_attrib_4niv => "glVertexAttrib4Niv": fn(index: GLuint, v: *const GLint);
        vertex_attrib_4nsv => "glVertexAttrib4Nsv": fn(index: GLuint, v: *const GLshort);
        vertex_attrib_4nub => "glVertexAttrib4Nub": fn(index: GLuint, x: GLubyte, y: GLubyte, z: GLubyte, w: GLubyte);
        vertex_attrib_4nubv => "glVertexAttrib4Nubv": fn(index: GLuint, v: *const GLubyte);
        vertex_attrib_4nuiv => "glVertexAttrib4Nuiv": fn(index: GLuint, v: *const GLuint);
        vertex_attrib_4nusv => "glVertexAttrib4Nusv": fn(index: GLuint, v: *const GLushort);
        vertex_attrib_4bv => "glVertexAttrib4bv": fn(index: GLuint, v: *const GLbyte);
        vertex_attrib_4d => "glVertexAttrib4d": fn(index: GLuint, x: GLdouble, y: GLdouble, z: GLdouble, w: GLdouble);
        vertex_attrib_4dv => "glVertexAttrib4dv": fn(index: GLuint, v: *const GLdouble);
        vertex_attrib_4f => "glVertexAttrib4f": fn(index: GLuint, x: GLfloat, y: GLfloat, z: GLfloat, w: GLfloat);
        vertex_attrib_4fv => "glVertexAttrib4fv": fn(index: GLuint, v: *const GLfloat);
        vertex_attrib_4iv => "glVertexAttrib4iv": fn(index: GLuint, v: *const GLint);
        vertex_attrib_4s => "glVertexAttrib4s": fn(index: GLuint, x: GLshort, y: GLshort, z: GLshort, w: GLshort);
        vertex_attrib_4sv => "glVertexAttrib4sv": fn(index: GLuint, v: *const GLshort);
        vertex_attrib_4ubv => "glVertexAttrib4ubv": fn(index: GLuint, v: *const GLubyte);
        vertex_attrib_4uiv => "glVertexAttrib4uiv": fn(index: GLuint, v: *const GLuint);
        vertex_attrib_4usv => "glVertexAttrib4usv": fn(index: GLuint, v: *const GLushort);
        vertex_attrib_pointer => "glVertexAttribPointer": fn(index: GLuint, size: GLint, type_: GLenum, normalized: GLboolean, stride: GLsizei, pointer: *const c_void);
    }
    width {}
}

gl_tier! {
    /// OpenGL 2.1
    pub struct Gl21: V2_1 {
        uniform_matrix_2x3fv => "glUniformMatrix2x3fv": fn(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat);
        uniform_matrix_3x2fv => "glUniformMatrix3x2fv": fn(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat);
        uniform_matrix_2x4fv => "glUniformMatrix2x4fv": fn(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat);
        uniform_matrix_4x2fv => "glUniformMatrix4x2fv": fn(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat);
        uniform_matrix_3x4fv => "glUniformMatrix3x4fv": fn(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat);
        uniform_matrix_4x3fv => "glUniformMatrix4x3fv": fn(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat);
    }
    width {}
}

gl_tier! {
    /// OpenGL 3.0
    pub struct Gl30: V3_0 {
        color_maski => "glColorMaski": fn(index: GLuint, r: GLboolean, g: GLboolean, b: GLboolean, a: GLboolean);
        get_booleani_v => "glGetBooleani_v": fn(target: GLenum, index: GLuint, data: *mut GLboolean);
        get_integeri_v => "glGetIntegeri_v": fn(target: GLenum, index: GLuint, data: *mut GLint);
        enablei => "glEnablei": fn(target: GLenum, index: GLuint);
        disablei => "glDisablei": fn(target: GLenum, index: GLuint);
        is_enabledi => "glIsEnabledi": fn(target: GLenum, index: GLuint) -> GLboolean;
        begin_transform_feedback => "glBeginTransformFeedback": fn(primitive_mode: GLenum);
        end_transform_feedback => "glEndTransformFeedback": fn();
        bind_buffer_base => "glBindBufferBase": fn(target: GLenum, index: GLuint, buffer: GLuint);
        transform_feedback_varyings => "glTransformFeedbackVaryings": fn(program: GLuint, count: GLsizei, varyings: *const *const GLchar, buffer_mode: GLenum);
        get_transform_feedback_varying => "glGetTransformFeedbackVarying": fn(program: GLuint, index: GLuint, buf_size: GLsizei, length: *mut GLsizei, size: *mut GLsizei, type_: *mut GLenum, name: *mut GLchar);
        clamp_color => "glClampColor": fn(target: GLenum, clamp: GLenum);
        begin_conditional_render => "glBeginConditionalRender": fn(id: GLuint, mode: GLenum);
        end_conditional_render => "glEndConditionalRender": fn();
        vertex_attrib_i_pointer => "glVertexAttribIPointer": fn(index: GLuint, size: GLint, type_: GLenum, stride: GLsizei, pointer: *const c_void);
        get_vertex_attrib_iiv => "glGetVertexAttribIiv": fn(index: GLuint, pname: GLenum, params: *mut GLint);
        get_vertex_attrib_iuiv => "glGetVertexAttribIuiv": fn(index: GLuint, pname: GLenum, params: *mut GLuint);
        vertex_attrib_i1i => "glVertexAttribI1i": fn(index: GLuint, x: GLint);
        vertex_attrib_i2i => "glVertexAttribI2i": fn(index: GLuint, x: GLint, y: GLint);
        vertex_attrib_i3i => "glVertexAttribI3i": fn(index: GLuint, x: GLint, y: GLint, z: GLint);
        vertex_attrib_i4i => "glVertexAttribI4i": fn(index: GLuint, x: GLint, y: GLint, z: GLint, w: GLint);
        vertex_attrib_i1ui => "glVertexAttribI1ui": fn(index: GLuint, x: GLuint);
        vertex_attrib_i2ui => "glVertexAttribI2ui": fn(index: GLuint, x: GLuint, y: GLuint);
        vertex_attrib_i3ui => "glVertexAttribI3ui": fn(index: GLuint, x: GLuint, y: GLuint, z: GLuint);
        vertex_attrib_i4ui => "glVertexAttribI4ui": fn(index: GLuint, x: GLuint, y: GLuint, z: GLuint, w: GLuint);
        vertex_attrib_i1iv => "glVertexAttribI1iv": fn(index: GLuint, v: *const GLint);
        vertex_attrib_i2iv => "glVertexAttribI2iv": fn(index: GLuint, v: *const GLint);
        vertex_attrib_i3iv => "glVertexAttribI3iv": fn(index: GLuint, v: *const GLint);
        vertex_attrib_i4iv => "glVertexAttribI4iv": fn(index: GLuint, v: *const GLint);
        vertex_attrib_i1uiv => "glVertexAttribI1uiv": fn(index: GLuint, v: *const GLuint);
        vertex_attrib_i2uiv => "glVertexAttribI2uiv": fn(index: GLuint, v: *const GLuint);
        vertex_attrib_i3uiv => "glVertexAttribI3uiv": fn(index: GLuint, v: *const GLuint);
        vertex_attrib_i4uiv => "glVertexAttribI4uiv": fn(index: GLuint, v: *const GLuint);
        vertex_attrib_i4bv => "glVertexAttribI4bv": fn(index: GLuint, v: *const GLbyte);
        vertex_attrib_i4sv => "glVertexAttribI4sv": fn(index: GLuint, v: *const GLshort);
        vertex_attrib_i4ubv => "glVertexAttribI4ubv": fn(index: GLuint, v: *const GLubyte);
        vertex_attrib_i4usv => "glVertexAttribI4usv": fn(index: GLuint, v: *const GLushort);
        get_uniformuiv => "glGetUniformuiv": fn(program: GLuint, location: GLint, params: *mut GLuint);
        bind_frag_data_location => "glBindFragDataLocation": fn(program: GLuint, color: GLuint, name: *const GLchar);
        get_frag_data_location => "glGetFragDataLocation": fn(program: GLuint, name: *const GLchar) -> GLint;
        uniform_1ui => "glUniform1ui": fn(location: GLint, v0: GLuint);
        uniform_2ui => "glUniform2ui": fn(location: GLint, v0: GLuint, v1: GLuint);
        uniform_3ui => "glUniform3ui": fn(location: GLint, v0: GLuint, v1: GLuint, v2: GLuint);
        uniform_4ui => "glUniform4ui": fn(location: GLint, v0: GLuint, v1: GLuint, v2: GLuint, v3: GLuint);
        uniform_1uiv => "glUniform1uiv": fn(location: GLint, count: GLsizei, value: *const GLuint);
        uniform_2uiv => "glUniform2uiv": fn(location: GLint, count: GLsizei, value: *const GLuint);
        uniform_3uiv => "glUniform3uiv": fn(location: GLint, count: GLsizei, value: *const GLuint);
        uniform_4uiv => "glUniform4uiv": fn(location: GLint, count: GLsizei, value: *const GLuint);
        tex_parameter_iiv => "glTexParameterIiv": fn(target: GLenum, pname: GLenum, params: *const GLint);
        tex_parameter_iuiv => "glTexParameterIuiv": fn(target: GLenum, pname: GLenum, params: *const GLuint);
        get_tex_parameter_iiv => "glGetTexParameterIiv": fn(target: GLenum, pname: GLenum, params: *mut GLint);
        get_tex_parameter_iuiv => "glGetTexParameterIuiv": fn(target: GLenum, pname: GLenum, params: *mut GLuint);
        clear_bufferiv => "glClearBufferiv": fn(buffer: GLenum, drawbuffer: GLint, value: *const GLint);
        clear_bufferuiv => "glClearBufferuiv": fn(buffer: GLenum, drawbuffer: GLint, value: *const GLuint);
        clear_bufferfv => "glClearBufferfv": fn(buffer: GLenum, drawbuffer: GLint, value: *const GLfloat);
        clear_bufferfi => "glClearBufferfi": fn(buffer: GLenum, drawbuffer: GLint, depth: GLfloat, stencil: GLint);
        get_stringi => "glGetStringi": fn(name: GLenum, index: GLuint) -> *const GLubyte;
        is_renderbuffer => "glIsRenderbuffer": fn(renderbuffer: GLuint) -> GLboolean;
        bind_renderbuffer => "glBindRenderbuffer": fn(target: GLenum, renderbuffer: GLuint);
        delete_renderbuffers => "glDeleteRenderbuffers": fn(n: GLsizei, renderbuffers: *const GLuint);
        gen_renderbuffers => "glGenRenderbuffers": fn(n: GLsizei, renderbuffers: *mut GLuint);
        renderbuffer_storage => "glRenderbufferStorage": fn(target: GLenum, internalformat: GLenum, width: GLsizei, height: GLsizei);
        get_renderbuffer_parameteriv => "glGetRenderbufferParameteriv": fn(target: GLenum, pname: GLenum, params: *mut GLint);
        is_framebuffer => "glIsFramebuffer": fn(framebuffer: GLuint) -> GLboolean;
        bind_framebuffer => "glBindFramebuffer": fn(target: GLenum, framebuffer: GLuint);
        delete_framebuffers => "glDeleteFramebuffers": fn(n: GLsizei, framebuffers: *const GLuint);
        gen_framebuffers => "glGenFramebuffers": fn(n: GLsizei, framebuffers: *mut GLuint);
        check_framebuffer_status => "glCheckFramebufferStatus": fn(target: GLenum) -> GLenum;
        framebuffer_texture_1d => "glFramebufferTexture1D": fn(target: GLenum, attachment: GLenum, textarget: GLenum, texture: GLuint, level: GLint);
        framebuffer_texture_2d => "glFramebufferTexture2D": fn(target: GLenum, attachment: GLenum, textarget: GLenum, texture: GLuint, level: GLint);
        framebuffer_texture_3d => "glFramebufferTexture3D": fn(target: GLenum, attachment: GLenum, textarget: GLenum, texture: GLuint, level: GLint, zoffset: GLint);
        framebuffer_renderbuffer => "glFramebufferRenderbuffer": fn(target: GLenum, attachment: GLenum, renderbuffertarget: GLenum, renderbuffer: GLuint);
        get_framebuffer_attachment_parameteriv => "glGetFramebufferAttachmentParameteriv": fn(target: GLenum, attachment: GLenum, pname: GLenum, params: *mut GLint);
        generate_mipmap => "glGenerateMipmap": fn(target: GLenum);
        blit_framebuffer => "glBlitFramebuffer": fn(src_x0: GLint, src_y0: GLint, src_x1: GLint, src_y1: GLint, dst_x0: GLint, dst_y0: GLint, dst_x1: GLint, dst_y1: GLint, mask: GLbitfield, filter: GLenum);
        renderbuffer_storage_multisample => "glRenderbufferStorageMultisample": fn(target: GLenum, samples: GLsizei, internalformat: GLenum, width: GLsizei, height: GLsizei);
        framebuffer_texture_layer => "glFramebufferTextureLayer": fn(target: GLenum, attachment: GLenum, texture: GLuint, level: GLint, layer: GLint);
        bind_vertex_array => "glBindVertexArray": fn(array: GLuint);
        delete_vertex_arrays => "glDeleteVertexArrays": fn(n: GLsizei, arrays: *const GLuint);
        gen_vertex_arrays => "glGenVertexArrays": fn(n: GLsizei, arrays: *mut GLuint);
        is_vertex_array => "glIsVertexArray": fn(array: GLuint) -> GLboolean;
    }
    width {
        bind_buffer_range => "glBindBufferRange" as PFNGLBINDBUFFERRANGEPROC:
            fn<P>(target: GLenum, index: GLuint, buffer: GLuint, offset: P, size: P);
        map_buffer_range => "glMapBufferRange" as PFNGLMAPBUFFERRANGEPROC:
            fn<P>(target: GLenum, offset: P, length: P, access: GLbitfield) -> *mut c_void;
        flush_mapped_buffer_range => "glFlushMappedBufferRange" as PFNGLFLUSHMAPPEDBUFFERRANGEPROC:
            fn<P>(target: GLenum, offset: P, length: P);
    }
}

gl_tier! {
    /// OpenGL 3.1
    pub struct Gl31: V3_1 {
        draw_arrays_instanced => "glDrawArraysInstanced": fn(mode: GLenum, first: GLint, count: GLsizei, instancecount: GLsizei);
        draw_elements_instanced => "glDrawElementsInstanced": fn(mode: GLenum, count: GLsizei, type_: GLenum, indices: *const c_void, instancecount: GLsizei);
        tex_buffer => "glTexBuffer": fn(target: GLenum, internalformat: GLenum, buffer: GLuint);
        primitive_restart_index => "glPrimitiveRestartIndex": fn(index: GLuint);
        get_uniform_indices => "glGetUniformIndices": fn(program: GLuint, uniform_count: GLsizei, uniform_names: *const *const GLchar, uniform_indices: *mut GLuint);
        get_active_uniformsiv => "glGetActiveUniformsiv": fn(program: GLuint, uniform_count: GLsizei, uniform_indices: *const GLuint, pname: GLenum, params: *mut GLint);
        get_active_uniform_name => "glGetActiveUniformName": fn(program: GLuint, uniform_index: GLuint, buf_size: GLsizei, length: *mut GLsizei, uniform_name: *mut GLchar);
        get_uniform_block_index => "glGetUniformBlockIndex": fn(program: GLuint, uniform_block_name: *const GLchar) -> GLuint;
        get_active_uniform_blockiv => "glGetActiveUniformBlockiv": fn(program: GLuint, uniform_block_index: GLuint, pname: GLenum, params: *mut GLint);
        get_active_uniform_block_name => "glGetActiveUniformBlockName": fn(program: GLuint, uniform_block_index: GLuint, buf_size: GLsizei, length: *mut GLsizei, uniform_block_name: *mut GLchar);
        uniform_block_binding => "glUniformBlockBinding": fn(program: GLuint, uniform_block_index: GLuint, uniform_block_binding: GLuint);
    }
    width {
        copy_buffer_sub_data => "glCopyBufferSubData" as PFNGLCOPYBUFFERSUBDATAPROC:
            fn<P>(read_target: GLenum, write_target: GLenum, read_offset: P, write_offset: P, size: P);
    }
}

gl_tier! {
    /// OpenGL 3.2
    pub struct Gl32: V3_2 {
        draw_elements_base_vertex => "glDrawElementsBaseVertex": fn(mode: GLenum, count: GLsizei, type_: GLenum, indices: *const c_void, basevertex: GLint);
        draw_range_elements_base_vertex => "glDrawRangeElementsBaseVertex": fn(mode: GLenum, start: GLuint, end: GLuint, count: GLsizei, type_: GLenum, indices: *const c_void, basevertex: GLint);
        draw_elements_instanced_base_vertex => "glDrawElementsInstancedBaseVertex": fn(mode: GLenum, count: GLsizei, type_: GLenum, indices: *const c_void, instancecount: GLsizei, basevertex: GLint);
        multi_draw_elements_base_vertex => "glMultiDrawElementsBaseVertex": fn(mode: GLenum, count: *const GLsizei, type_: GLenum, indices: *const *const c_void, drawcount: GLsizei, basevertex: *const GLint);
        provoking_vertex => "glProvokingVertex": fn(mode: GLenum);
        fence_sync => "glFenceSync": fn(condition: GLenum, flags: GLbitfield) -> GLsync;
        is_sync => "glIsSync": fn(sync: GLsync) -> GLboolean;
        delete_sync => "glDeleteSync": fn(sync: GLsync);
        client_wait_sync => "glClientWaitSync": fn(sync: GLsync, flags: GLbitfield, timeout: GLuint64) -> GLenum;
        wait_sync => "glWaitSync": fn(sync: GLsync, flags: GLbitfield, timeout: GLuint64);
        get_integer64v => "glGetInteger64v": fn(pname: GLenum, data: *mut GLint64);
        get_synciv => "glGetSynciv": fn(sync: GLsync, pname: GLenum, count: GLsizei, length: *mut GLsizei, values: *mut GLint);
        get_integer64i_v => "glGetInteger64i_v": fn(target: GLenum, index: GLuint, data: *mut GLint64);
        get_buffer_parameteri64v => "glGetBufferParameteri64v": fn(target: GLenum, pname: GLenum, params: *mut GLint64);
        framebuffer_texture => "glFramebufferTexture": fn(target: GLenum, attachment: GLenum, texture: GLuint, level: GLint);
        tex_image_2d_multisample => "glTexImage2DMultisample": fn(target: GLenum, samples: GLsizei, internalformat: GLenum, width: GLsizei, height: GLsizei, fixedsamplelocations: GLboolean);
        tex_image_3d_multisample => "glTexImage3DMultisample": fn(target: GLenum, samples: GLsizei, internalformat: GLenum, width: GLsizei, height: GLsizei, depth: GLsizei, fixedsamplelocations: GLboolean);
        get_multisamplefv => "glGetMultisamplefv": fn(pname: GLenum, index: GLuint, val: *mut GLfloat);
        sample_maski => "glSampleMaski": fn(mask_number: GLuint, mask: GLbitfield);
    }
    width {}
}

gl_tier! {
    /// OpenGL 3.3
    pub struct Gl33: V3_3 {
        bind_frag_data_location_indexed => "glBindFragDataLocationIndexed": fn(program: GLuint, color_number: GLuint, index: GLuint, name: *const GLchar);
        get_frag_data_index => "glGetFragDataIndex": fn(program: GLuint, name: *const GLchar) -> GLint;
        gen_samplers => "glGenSamplers": fn(count: GLsizei, samplers: *mut GLuint);
        delete_samplers => "glDeleteSamplers": fn(count: GLsizei, samplers: *const GLuint);
        is_sampler => "glIsSampler": fn(sampler: GLuint) -> GLboolean;
        bind_sampler => "glBindSampler": fn(unit: GLuint, sampler: GLuint);
        sampler_parameteri => "glSamplerParameteri": fn(sampler: GLuint, pname: GLenum, param: GLint);
        sampler_parameteriv => "glSamplerParameteriv": fn(sampler: GLuint, pname: GLenum, param: *const GLint);
        sampler_parameterf => "glSamplerParameterf": fn(sampler: GLuint, pname: GLenum, param: GLfloat);
        sampler_parameterfv => "glSamplerParameterfv": fn(sampler: GLuint, pname: GLenum, param: *const GLfloat);
        sampler_parameter_iiv => "glSamplerParameterIiv": fn(sampler: GLuint, pname: GLenum, param: *const GLint);
        sampler_parameter_iuiv => "glSamplerParameterIuiv": fn(sampler: GLuint, pname: GLenum, param: *const GLuint);
        get_sampler_parameteriv => "glGetSamplerParameteriv": fn(sampler: GLuint, pname: GLenum, params: *mut GLint);
        get_sampler_parameter_iiv => "glGetSamplerParameterIiv": fn(sampler: GLuint, pname: GLenum, params: *mut GLint);
        get_sampler_parameterfv => "glGetSamplerParameterfv": fn(sampler: GLuint, pname: GLenum, params: *mut GLfloat);
        get_sampler_parameter_iuiv => "glGetSamplerParameterIuiv": fn(sampler: GLuint, pname: GLenum, params: *mut GLuint);
        query_counter => "glQueryCounter": fn(id: GLuint, target: GLenum);
        get_query_objecti64v => "glGetQueryObjecti64v": fn(id: GLuint, pname: GLenum, params: *mut GLint64);
        get_query_objectui64v => "glGetQueryObjectui64v": fn(id: GLuint, pname: GLenum, params: *mut GLuint64);
        vertex_attrib_divisor => "glVertexAttribDivisor": fn(index: GLuint, divisor: GLuint);
        vertex_attrib_p1ui => "glVertexAttribP1ui": fn(index: GLuint, type_: GLenum, normalized: GLboolean, value: GLuint);
        vertex_attrib_p1uiv => "glVertexAttribP1uiv": fn(index: GLuint, type_: GLenum, normalized: GLboolean, value: *const GLuint);
        vertex_attrib_p2ui => "glVertexAttribP2ui": fn(index: GLuint, type_: GLenum, normalized: GLboolean, value: GLuint);
        vertex_attrib_p2uiv => "glVertexAttribP2uiv": fn(index: GLuint, type_: GLenum, normalized: GLboolean, value: *const GLuint);
        vertex_attrib_p3ui => "glVertexAttribP3ui": fn(index: GLuint, type_: GLenum, normalized: GLboolean, value: GLuint);
        vertex_attrib_p3uiv => "glVertexAttribP3uiv": fn(index: GLuint, type_: GLenum, normalized: GLboolean, value: *const GLuint);
        vertex_attrib_p4ui => "glVertexAttribP4ui": fn(index: GLuint, type_: GLenum, normalized: GLboolean, value: GLuint);
        vertex_attrib_p4uiv => "glVertexAttribP4uiv": fn(index: GLuint, type_: GLenum, normalized: GLboolean, value: *const GLuint);
    }
    width {}
}

gl_tier! {
    /// OpenGL 4.0
    pub struct Gl40: V4_0 {
        min_sample_shading => "glMinSampleShading": fn(value: GLfloat);
        blend_equationi => "glBlendEquationi": fn(buf: GLuint, mode: GLenum);
        blend_equation_separatei => "glBlendEquationSeparatei": fn(buf: GLuint, mode_rgb: GLenum, mode_alpha: GLenum);
        blend_funci => "glBlendFunci": fn(buf: GLuint, src: GLenum, dst: GLenum);
        blend_func_separatei => "glBlendFuncSeparatei": fn(buf: GLuint, src_rgb: GLenum, dst_rgb: GLenum, src_alpha: GLenum, dst_alpha: GLenum);
        draw_arrays_indirect => "glDrawArraysIndirect": fn(mode: GLenum, indirect: *const c_void);
        draw_elements_indirect => "glDrawElementsIndirect": fn(mode: GLenum, type_: GLenum, indirect: *const c_void);
        uniform_1d => "glUniform1d": fn(location: GLint, x: GLdouble);
        uniform_2d => "glUniform2d": fn(location: GLint, x: GLdouble, y: GLdouble);
        uniform_3d => "glUniform3d": fn(location: GLint, x: GLdouble, y: GLdouble, z: GLdouble);
        uniform_4d => "glUniform4d": fn(location: GLint, x: GLdouble, y: GLdouble, z: GLdouble, w: GLdouble);
        uniform_1dv => "glUniform1dv": fn(location: GLint, count: GLsizei, value: *const GLdouble);
        uniform_2dv => "glUniform2dv": fn(location: GLint, count: GLsizei, value: *const GLdouble);
        uniform_3dv => "glUniform3dv": fn(location: GLint, count: GLsizei, value: *const GLdouble);
        uniform_4dv => "glUniform4dv": fn(location: GLint, count: GLsizei, value: *const GLdouble);
        uniform_matrix_2dv => "glUniformMatrix2dv": fn(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLdouble);
        uniform_matrix_3dv => "glUniformMatrix3dv": fn(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLdouble);
        uniform_matrix_4dv => "glUniformMatrix4dv": fn(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLdouble);
        uniform_matrix_2x3dv => "glUniformMatrix2x3dv": fn(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLdouble);
        uniform_matrix_2x4dv => "glUniformMatrix2x4dv": fn(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLdouble);
        uniform_matrix_3x2dv => "glUniformMatrix3x2dv": fn(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLdouble);
        uniform_matrix_3x4dv => "glUniformMatrix3x4dv": fn(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLdouble);
        uniform_matrix_4x2dv => "glUniformMatrix4x2dv": fn(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLdouble);
        uniform_matrix_4x3dv => "glUniformMatrix4x3dv": fn(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLdouble);
        get_uniformdv => "glGetUniformdv": fn(program: GLuint, location: GLint, params: *mut GLdouble);
        get_subroutine_uniform_location => "glGetSubroutineUniformLocation": fn(program: GLuint, shadertype: GLenum, name: *const GLchar) -> GLint;
        get_subroutine_index => "glGetSubroutineIndex": fn(program: GLuint, shadertype: GLenum, name: *const GLchar) -> GLuint;
        get_active_subroutine_uniformiv => "glGetActiveSubroutineUniformiv": fn(program: GLuint, shadertype: GLenum, index: GLuint, pname: GLenum, values: *mut GLint);
        get_active_subroutine_uniform_name => "glGetActiveSubroutineUniformName": fn(program: GLuint, shadertype: GLenum, index: GLuint, buf_size: GLsizei, length: *mut GLsizei, name: *mut GLchar);
        get_active_subroutine_name => "glGetActiveSubroutineName": fn(program: GLuint, shadertype: GLenum, index: GLuint, buf_size: GLsizei, length: *mut GLsizei, name: *mut GLchar);
        uniform_subroutinesuiv => "glUniformSubroutinesuiv": fn(shadertype: GLenum, count: GLsizei, indices: *const GLuint);
        get_uniform_subroutineuiv => "glGetUniformSubroutineuiv": fn(shadertype: GLenum, location: GLint, params: *mut GLuint);
        get_program_stageiv => "glGetProgramStageiv": fn(program: GLuint, shadertype: GLenum, pname: GLenum, values: *mut GLint);
        patch_parameteri => "glPatchParameteri": fn(pname: GLenum, value: GLint);
        patch_parameterfv => "glPatchParameterfv": fn(pname: GLenum, values: *const GLfloat);
        bind_transform_feedback => "glBindTransformFeedback": fn(target: GLenum, id: GLuint);
        delete_transform_feedbacks => "glDeleteTransformFeedbacks": fn(n: GLsizei, ids: *const GLuint);
        gen_transform_feedbacks => "glGenTransformFeedbacks": fn(n: GLsizei, ids: *mut GLuint);
        is_transform_feedback => "glIsTransformFeedback": fn(id: GLuint) -> GLboolean;
        pause_transform_feedback => "glPauseTransformFeedback": fn();
        resume_transform_feedback => "glResumeTransformFeedback": fn();
        draw_transform_feedback => "glDrawTransformFeedback": fn(mode: GLenum, id: GLuint);
        draw_transform_feedback_stream => "glDrawTransformFeedbackStream": fn(mode: GLenum, id: GLuint, stream: GLuint);
        begin_query_indexed => "glBeginQueryIndexed": fn(target: GLenum, index: GLuint, id: GLuint);
        end_query_indexed => "glEndQueryIndexed": fn(target: GLenum, index: GLuint);
        get_query_indexediv => "glGetQueryIndexediv": fn(target: GLenum, index: GLuint, pname: GLenum, params: *mut GLint);
    }
    width {}
}

gl_tier! {
    /// OpenGL 4.1
    pub struct Gl41: V4_1 {
        release_shader_compiler => "glReleaseShaderCompiler": fn();
        shader_binary => "glShaderBinary": fn(count: GLsizei, shaders: *const GLuint, binary_format: GLenum, binary: *const c_void, length: GLsizei);
        get_shader_precision_format => "glGetShaderPrecisionFormat": fn(shadertype: GLenum, precisiontype: GLenum, range: *mut GLint, precision: *mut GLint);
        depth_rangef => "glDepthRangef": fn(n: GLfloat, f: GLfloat);
        clear_depthf => "glClearDepthf": fn(d: GLfloat);
        get_program_binary => "glGetProgramBinary": fn(program: GLuint, buf_size: GLsizei, length: *mut GLsizei, binary_format: *mut GLenum, binary: *mut c_void);
        program_binary => "glProgramBinary": fn(program: GLuint, binary_format: GLenum, binary: *const c_void, length: GLsizei);
        program_parameteri => "glProgramParameteri": fn(program: GLuint, pname: GLenum, value: GLint);
        use_program_stages => "glUseProgramStages": fn(pipeline: GLuint, stages: GLbitfield, program: GLuint);
        active_shader_program => "glActiveShaderProgram": fn(pipeline: GLuint, program: GLuint);
        create_shader_programv => "glCreateShaderProgramv": fn(type_: GLenum, count: GLsizei, strings: *const *const GLchar) -> GLuint;
        bind_program_pipeline => "glBindProgramPipeline": fn(pipeline: GLuint);
        delete_program_pipelines => "glDeleteProgramPipelines": fn(n: GLsizei, pipelines: *const GLuint);
        gen_program_pipelines => "glGenProgramPipelines": fn(n: GLsizei, pipelines: *mut GLuint);
        is_program_pipeline => "glIsProgramPipeline": fn(pipeline: GLuint) -> GLboolean;
        get_program_pipelineiv => "glGetProgramPipelineiv": fn(pipeline: GLuint, pname: GLenum, params: *mut GLint);
        program_uniform_1i => "glProgramUniform1i": fn(program: GLuint, location: GLint, v0: GLint);
        program_uniform_1iv => "glProgramUniform1iv": fn(program: GLuint, location: GLint, count: GLsizei, value: *const GLint);
        program_uniform_1f => "glProgramUniform1f": fn(program: GLuint, location: GLint, v0: GLfloat);
        program_uniform_1fv => "glProgramUniform1fv": fn(program: GLuint, location: GLint, count: GLsizei, value: *const GLfloat);
        program_uniform_1d => "glProgramUniform1d": fn(program: GLuint, location: GLint, v0: GLdouble);
        program_uniform_1dv => "glProgramUniform1dv": fn(program: GLuint, location: GLint, count: GLsizei, value: *const GLdouble);
        program_uniform_1ui => "glProgramUniform1ui": fn(program: GLuint, location: GLint, v0: GLuint);
        program_uniform_1uiv => "glProgramUniform1uiv": fn(program: GLuint, location: GLint, count: GLsizei, value: *const GLuint);
        program_uniform_2i => "glProgramUniform2i": fn(program: GLuint, location: GLint, v0: GLint, v1: GLint);
        program_uniform_2iv => "glProgramUniform2iv": fn(program: GLuint, location: GLint, count: GLsizei, value: *const GLint);
        program_uniform_2f => "glProgramUniform2f": fn(program: GLuint, location: GLint, v0: GLfloat, v1: GLfloat);
        program_uniform_2fv => "glProgramUniform2fv": fn(program: GLuint, location: GLint, count: GLsizei, value: *const GLfloat);
        program_uniform_2d => "glProgramUniform2d": fn(program: GLuint, location: GLint, v0: GLdouble, v1: GLdouble);
        program_uniform_2dv => "glProgramUniform2dv": fn(program: GLuint, location: GLint, count: GLsizei, value: *const GLdouble);
        program_uniform_2ui => "glProgramUniform2ui": fn(program: GLuint, location: GLint, v0: GLuint, v1: GLuint);
        program_uniform_2uiv => "glProgramUniform2uiv": fn(program: GLuint, location: GLint, count: GLsizei, value: *const GLuint);
        program_uniform_3i => "glProgramUniform3i": fn(program: GLuint, location: GLint, v0: GLint, v1: GLint, v2: GLint);
        program_uniform_3iv => "glProgramUniform3iv": fn(program: GLuint, location: GLint, count: GLsizei, value: *const GLint);
        program_uniform_3f => "glProgramUniform3f": fn(program: GLuint, location: GLint, v0: GLfloat, v1: GLfloat, v2: GLfloat);
        program_uniform_3fv => "glProgramUniform3fv": fn(program: GLuint, location: GLint, count: GLsizei, value: *const GLfloat);
        program_uniform_3d => "glProgramUniform3d": fn(program: GLuint, location: GLint, v0: GLdouble, v1: GLdouble, v2: GLdouble);
        program_uniform_3dv => "glProgramUniform3dv": fn(program: GLuint, location: GLint, count: GLsizei, value: *const GLdouble);
        program_uniform_3ui => "glProgramUniform3ui": fn(program: GLuint, location: GLint, v0: GLuint, v1: GLuint, v2: GLuint);
        program_uniform_3uiv => "glProgramUniform3uiv": fn(program: GLuint, location: GLint, count: GLsizei, value: *const GLuint);
        program_uniform_4i => "glProgramUniform4i": fn(program: GLuint, location: GLint, v0: GLint, v1: GLint, v2: GLint, v3: GLint);
        program_uniform_4iv => "glProgramUniform4iv": fn(program: GLuint, location: GLint, count: GLsizei, value: *const GLint);
        program_uniform_4f => "glProgramUniform4f": fn(program: GLuint, location: GLint, v0: GLfloat, v1: GLfloat, v2: GLfloat, v3: GLfloat);
        program_uniform_4fv => "glProgramUniform4fv": fn(program: GLuint, location: GLint, count: GLsizei, value: *const GLfloat);
        program_uniform_4d => "glProgramUniform4d": fn(program: GLuint, location: GLint, v0: GLdouble, v1: GLdouble, v2: GLdouble, v3: GLdouble);
        program_uniform_4dv => "glProgramUniform4dv": fn(program: GLuint, location: GLint, count: GLsizei, value: *const GLdouble);
        program_uniform_4ui => "glProgramUniform4ui": fn(program: GLuint, location: GLint, v0: GLuint, v1: GLuint, v2: GLuint, v3: GLuint);
        program_uniform_4uiv => "glProgramUniform4uiv": fn(program: GLuint, location: GLint, count: GLsizei, value: *const GLuint);
        program_uniform_matrix_2fv => "glProgramUniformMatrix2fv": fn(program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat);
        program_uniform_matrix_3fv => "glProgramUniformMatrix3fv": fn(program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat);
        program_uniform_matrix_4fv => "glProgramUniformMatrix4fv": fn(program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat);
        program_uniform_matrix_2dv => "glProgramUniformMatrix2dv": fn(program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLdouble);
        program_uniform_matrix_3dv => "glProgramUniformMatrix3dv": fn(program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLdouble);
        program_uniform_matrix_4dv => "glProgramUniformMatrix4dv": fn(program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLdouble);
        program_uniform_matrix_2x3fv => "glProgramUniformMatrix2x3fv": fn(program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat);
        program_uniform_matrix_3x2fv => "glProgramUniformMatrix3x2fv": fn(program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat);
        program_uniform_matrix_2x4fv => "glProgramUniformMatrix2x4fv": fn(program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat);
        program_uniform_matrix_4x2fv => "glProgramUniformMatrix4x2fv": fn(program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat);
        program_uniform_matrix_3x4fv => "glProgramUniformMatrix3x4fv": fn(program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat);
        program_uniform_matrix_4x3fv => "glProgramUniformMatrix4x3fv": fn(program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat);
        program_uniform_matrix_2x3dv => "glProgramUniformMatrix2x3dv": fn(program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLdouble);
        program_uniform_matrix_3x2dv => "glProgramUniformMatrix3x2dv": fn(program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLdouble);
        program_uniform_matrix_2x4dv => "glProgramUniformMatrix2x4dv": fn(program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLdouble);
        program_uniform_matrix_4x2dv => "glProgramUniformMatrix4x2dv": fn(program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLdouble);
        program_uniform_matrix_3x4dv => "glProgramUniformMatrix3x4dv": fn(program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLdouble);
        program_uniform_matrix_4x3dv => "glProgramUniformMatrix4x3dv": fn(program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLdouble);
        validate_program_pipeline => "glValidateProgramPipeline": fn(pipeline: GLuint);
        get_program_pipeline_info_log => "glGetProgramPipelineInfoLog": fn(pipeline: GLuint, buf_size: GLsizei, length: *mut GLsizei, info_log: *mut GLchar);
        vertex_attrib_l1d => "glVertexAttribL1d": fn(index: GLuint, x: GLdouble);
        vertex_attrib_l2d => "glVertexAttribL2d": fn(index: GLuint, x: GLdouble, y: GLdouble);
        vertex_attrib_l3d => "glVertexAttribL3d": fn(index: GLuint, x: GLdouble, y: GLdouble, z: GLdouble);
        vertex_attrib_l4d => "glVertexAttribL4d": fn(index: GLuint, x: GLdouble, y: GLdouble, z: GLdouble, w: GLdouble);
        vertex_attrib_l1dv => "glVertexAttribL1dv": fn(index: GLuint, v: *const GLdouble);
        vertex_attrib_l2dv => "glVertexAttribL2dv": fn(index: GLuint, v: *const GLdouble);
        vertex_attrib_l3dv => "glVertexAttribL3dv": fn(index: GLuint, v: *const GLdouble);
        vertex_attrib_l4dv => "glVertexAttribL4dv": fn(index: GLuint, v: *const GLdouble);
        vertex_attrib_l_pointer => "glVertexAttribLPointer": fn(index: GLuint, size: GLint, type_: GLenum, stride: GLsizei, pointer: *const c_void);
        get_vertex_attrib_ldv => "glGetVertexAttribLdv": fn(index: GLuint, pname: GLenum, params: *mut GLdouble);
        viewport_arrayv => "glViewportArrayv": fn(first: GLuint, count: GLsizei, v: *const GLfloat);
        viewport_indexedf => "glViewportIndexedf": fn(index: GLuint, x: GLfloat, y: GLfloat, w: GLfloat, h: GLfloat);
        viewport_indexedfv => "glViewportIndexedfv": fn(index: GLuint, v: *const GLfloat);
        scissor_arrayv => "glScissorArrayv": fn(first: GLuint, count: GLsizei, v: *const GLint);
        scissor_indexed => "glScissorIndexed": fn(index: GLuint, left: GLint, bottom: GLint, width: GLsizei, height: GLsizei);
        scissor_indexedv => "glScissorIndexedv": fn(index: GLuint, v: *const GLint);
        depth_range_arrayv => "glDepthRangeArrayv": fn(first: GLuint, count: GLsizei, v: *const GLdouble);
        depth_range_indexed => "glDepthRangeIndexed": fn(index: GLuint, n: GLdouble, f: GLdouble);
        get_floati_v => "glGetFloati_v": fn(target: GLenum, index: GLuint, data: *mut GLfloat);
        get_doublei_v => "glGetDoublei_v": fn(target: GLenum, index: GLuint, data: *mut GLdouble);
    }
    width {}
}

gl_tier! {
    /// OpenGL 4.2
    pub struct Gl42: V4_2 {
        draw_arrays_instanced_base_instance => "glDrawArraysInstancedBaseInstance": fn(mode: GLenum, first: GLint, count: GLsizei, instancecount: GLsizei, baseinstance: GLuint);
        draw_elements_instanced_base_instance => "glDrawElementsInstancedBaseInstance": fn(mode: GLenum, count: GLsizei, type_: GLenum, indices: *const c_void, instancecount: GLsizei, baseinstance: GLuint);
        draw_elements_instanced_base_vertex_base_instance => "glDrawElementsInstancedBaseVertexBaseInstance": fn(mode: GLenum, count: GLsizei, type_: GLenum, indices: *const c_void, instancecount: GLsizei, basevertex: GLint, baseinstance: GLuint);
        get_internalformativ => "glGetInternalformativ": fn(target: GLenum, internalformat: GLenum, pname: GLenum, count: GLsizei, params: *mut GLint);
        get_active_atomic_counter_bufferiv => "glGetActiveAtomicCounterBufferiv": fn(program: GLuint, buffer_index: GLuint, pname: GLenum, params: *mut GLint);
        bind_image_texture => "glBindImageTexture": fn(unit: GLuint, texture: GLuint, level: GLint, layered: GLboolean, layer: GLint, access: GLenum, format: GLenum);
        memory_barrier => "glMemoryBarrier": fn(barriers: GLbitfield);
        tex_storage_1d => "glTexStorage1D": fn(target: GLenum, levels: GLsizei, internalformat: GLenum, width: GLsizei);
        tex_storage_2d => "glTexStorage2D": fn(target: GLenum, levels: GLsizei, internalformat: GLenum, width: GLsizei, height: GLsizei);
        tex_storage_3d => "glTexStorage3D": fn(target: GLenum, levels: GLsizei, internalformat: GLenum, width: GLsizei, height: GLsizei, depth: GLsizei);
        draw_transform_feedback_instanced => "glDrawTransformFeedbackInstanced": fn(mode: GLenum, id: GLuint, instancecount: GLsizei);
        draw_transform_feedback_stream_instanced => "glDrawTransformFeedbackStreamInstanced": fn(mode: GLenum, id: GLuint, stream: GLuint, instancecount: GLsizei);
    }
    width {}
}

gl_tier! {
    /// OpenGL 4.3
    pub struct Gl43: V4_3 {
        clear_buffer_data => "glClearBufferData": fn(target: GLenum, internalformat: GLenum, format: GLenum, type_: GLenum, data: *const c_void);
        dispatch_compute => "glDispatchCompute": fn(num_groups_x: GLuint, num_groups_y: GLuint, num_groups_z: GLuint);
        copy_image_sub_data => "glCopyImageSubData": fn(src_name: GLuint, src_target: GLenum, src_level: GLint, src_x: GLint, src_y: GLint, src_z: GLint, dst_name: GLuint, dst_target: GLenum, dst_level: GLint, dst_x: GLint, dst_y: GLint, dst_z: GLint, src_width: GLsizei, src_height: GLsizei, src_depth: GLsizei);
        framebuffer_parameteri => "glFramebufferParameteri": fn(target: GLenum, pname: GLenum, param: GLint);
        get_framebuffer_parameteriv => "glGetFramebufferParameteriv": fn(target: GLenum, pname: GLenum, params: *mut GLint);
        get_internalformati64v => "glGetInternalformati64v": fn(target: GLenum, internalformat: GLenum, pname: GLenum, count: GLsizei, params: *mut GLint64);
        invalidate_tex_sub_image => "glInvalidateTexSubImage": fn(texture: GLuint, level: GLint, xoffset: GLint, yoffset: GLint, zoffset: GLint, width: GLsizei, height: GLsizei, depth: GLsizei);
        invalidate_tex_image => "glInvalidateTexImage": fn(texture: GLuint, level: GLint);
        invalidate_buffer_data => "glInvalidateBufferData": fn(buffer: GLuint);
        invalidate_framebuffer => "glInvalidateFramebuffer": fn(target: GLenum, num_attachments: GLsizei, attachments: *const GLenum);
        invalidate_sub_framebuffer => "glInvalidateSubFramebuffer": fn(target: GLenum, num_attachments: GLsizei, attachments: *const GLenum, x: GLint, y: GLint, width: GLsizei, height: GLsizei);
        multi_draw_arrays_indirect => "glMultiDrawArraysIndirect": fn(mode: GLenum, indirect: *const c_void, drawcount: GLsizei, stride: GLsizei);
        multi_draw_elements_indirect => "glMultiDrawElementsIndirect": fn(mode: GLenum, type_: GLenum, indirect: *const c_void, drawcount: GLsizei, stride: GLsizei);
        get_program_interfaceiv => "glGetProgramInterfaceiv": fn(program: GLuint, program_interface: GLenum, pname: GLenum, params: *mut GLint);
        get_program_resource_index => "glGetProgramResourceIndex": fn(program: GLuint, program_interface: GLenum, name: *const GLchar) -> GLuint;
        get_program_resource_name => "glGetProgramResourceName": fn(program: GLuint, program_interface: GLenum, index: GLuint, buf_size: GLsizei, length: *mut GLsizei, name: *mut GLchar);
        get_program_resourceiv => "glGetProgramResourceiv": fn(program: GLuint, program_interface: GLenum, index: GLuint, prop_count: GLsizei, props: *const GLenum, count: GLsizei, length: *mut GLsizei, params: *mut GLint);
        get_program_resource_location => "glGetProgramResourceLocation": fn(program: GLuint, program_interface: GLenum, name: *const GLchar) -> GLint;
        get_program_resource_location_index => "glGetProgramResourceLocationIndex": fn(program: GLuint, program_interface: GLenum, name: *const GLchar) -> GLint;
        shader_storage_block_binding => "glShaderStorageBlockBinding": fn(program: GLuint, storage_block_index: GLuint, storage_block_binding: GLuint);
        tex_storage_2d_multisample => "glTexStorage2DMultisample": fn(target: GLenum, samples: GLsizei, internalformat: GLenum, width: GLsizei, height: GLsizei, fixedsamplelocations: GLboolean);
        tex_storage_3d_multisample => "glTexStorage3DMultisample": fn(target: GLenum, samples: GLsizei, internalformat: GLenum, width: GLsizei, height: GLsizei, depth: GLsizei, fixedsamplelocations: GLboolean);
        texture_view => "glTextureView": fn(texture: GLuint, target: GLenum, origtexture: GLuint, internalformat: GLenum, minlevel: GLuint, numlevels: GLuint, minlayer: GLuint, numlayers: GLuint);
        vertex_attrib_format => "glVertexAttribFormat": fn(attribindex: GLuint, size: GLint, type_: GLenum, normalized: GLboolean, relativeoffset: GLuint);
        vertex_attrib_i_format => "glVertexAttribIFormat": fn(attribindex: GLuint, size: GLint, type_: GLenum, relativeoffset: GLuint);
        vertex_attrib_l_format => "glVertexAttribLFormat": fn(attribindex: GLuint, size: GLint, type_: GLenum, relativeoffset: GLuint);
        vertex_attrib_binding => "glVertexAttribBinding": fn(attribindex: GLuint, bindingindex: GLuint);
        vertex_binding_divisor => "glVertexBindingDivisor": fn(bindingindex: GLuint, divisor: GLuint);
        debug_message_control => "glDebugMessageControl": fn(source: GLenum, type_: GLenum, severity: GLenum, count: GLsizei, ids: *const GLuint, enabled: GLboolean);
        debug_message_insert => "glDebugMessageInsert": fn(source: GLenum, type_: GLenum, id: GLuint, severity: GLenum, length: GLsizei, buf: *const GLchar);
        debug_message_callback => "glDebugMessageCallback": fn(callback: GLDEBUGPROC, user_param: *const c_void);
        get_debug_message_log => "glGetDebugMessageLog": fn(count: GLuint, buf_size: GLsizei, sources: *mut GLenum, types: *mut GLenum, ids: *mut GLuint, severities: *mut GLenum, lengths: *mut GLsizei, message_log: *mut GLchar) -> GLuint;
        push_debug_group => "glPushDebugGroup": fn(source: GLenum, id: GLuint, length: GLsizei, message: *const GLchar);
        pop_debug_group => "glPopDebugGroup": fn();
        object_label => "glObjectLabel": fn(identifier: GLenum, name: GLuint, length: GLsizei, label: *const GLchar);
        get_object_label => "glGetObjectLabel": fn(identifier: GLenum, name: GLuint, buf_size: GLsizei, length: *mut GLsizei, label: *mut GLchar);
        object_ptr_label => "glObjectPtrLabel": fn(ptr: *const c_void, length: GLsizei, label: *const GLchar);
        get_object_ptr_label => "glGetObjectPtrLabel": fn(ptr: *const c_void, buf_size: GLsizei, length: *mut GLsizei, label: *mut GLchar);
    }
    width {
        clear_buffer_sub_data => "glClearBufferSubData" as PFNGLCLEARBUFFERSUBDATAPROC:
            fn<P>(target: GLenum, internalformat: GLenum, offset: P, size: P, format: GLenum, type_: GLenum, data: *const c_void);
        dispatch_compute_indirect => "glDispatchComputeIndirect" as PFNGLDISPATCHCOMPUTEINDIRECTPROC:
            fn<P>(indirect: P);
        invalidate_buffer_sub_data => "glInvalidateBufferSubData" as PFNGLINVALIDATEBUFFERSUBDATAPROC:
            fn<P>(buffer: GLuint, offset: P, length: P);
        tex_buffer_range => "glTexBufferRange" as PFNGLTEXBUFFERRANGEPROC:
            fn<P>(target: GLenum, internalformat: GLenum, buffer: GLuint, offset: P, size: P);
        bind_vertex_buffer => "glBindVertexBuffer" as PFNGLBINDVERTEXBUFFERPROC:
            fn<P>(bindingindex: GLuint, buffer: GLuint, offset: P, stride: GLsizei);
    }
}

gl_tier! {
    /// OpenGL 4.4
    pub struct Gl44: V4_4 {
        clear_tex_image => "glClearTexImage": fn(texture: GLuint, level: GLint, format: GLenum, type_: GLenum, data: *const c_void);
        clear_tex_sub_image => "glClearTexSubImage": fn(texture: GLuint, level: GLint, xoffset: GLint, yoffset: GLint, zoffset: GLint, width: GLsizei, height: GLsizei, depth: GLsizei, format: GLenum, type_: GLenum, data: *const c_void);
        bind_buffers_base => "glBindBuffersBase": fn(target: GLenum, first: GLuint, count: GLsizei, buffers: *const GLuint);
        bind_textures => "glBindTextures": fn(first: GLuint, count: GLsizei, textures: *const GLuint);
        bind_samplers => "glBindSamplers": fn(first: GLuint, count: GLsizei, samplers: *const GLuint);
        bind_image_textures => "glBindImageTextures": fn(first: GLuint, count: GLsizei, textures: *const GLuint);
    }
    width {
        buffer_storage => "glBufferStorage" as PFNGLBUFFERSTORAGEPROC:
            fn<P>(target: GLenum, size: P, data: *const c_void, flags: GLbitfield);
        bind_buffers_range => "glBindBuffersRange" as PFNGLBINDBUFFERSRANGEPROC:
            fn<P>(target: GLenum, first: GLuint, count: GLsizei, buffers: *const GLuint, offsets: *const P, sizes: *const P);
        bind_vertex_buffers => "glBindVertexBuffers" as PFNGLBINDVERTEXBUFFERSPROC:
            fn<P>(first: GLuint, count: GLsizei, buffers: *const GLuint, offsets: *const P, strides: *const GLsizei);
    }
}

gl_tier! {
    /// OpenGL 4.5
    pub struct Gl45: V4_5 {
        clip_control => "glClipControl": fn(origin: GLenum, depth: GLenum);
        create_transform_feedbacks => "glCreateTransformFeedbacks": fn(n: GLsizei, ids: *mut GLuint);
        transform_feedback_buffer_base => "glTransformFeedbackBufferBase": fn(xfb: GLuint, index: GLuint, buffer: GLuint);
        get_transform_feedbackiv => "glGetTransformFeedbackiv": fn(xfb: GLuint, pname: GLenum, param: *mut GLint);
        get_transform_feedbacki_v => "glGetTransformFeedbacki_v": fn(xfb: GLuint, pname: GLenum, index: GLuint, param: *mut GLint);
        get_transform_feedbacki64_v => "glGetTransformFeedbacki64_v": fn(xfb: GLuint, pname: GLenum, index: GLuint, param: *mut GLint64);
        create_buffers => "glCreateBuffers": fn(n: GLsizei, buffers: *mut GLuint);
        clear_named_buffer_data => "glClearNamedBufferData": fn(buffer: GLuint, internalformat: GLenum, format: GLenum, type_: GLenum, data: *const c_void);
        map_named_buffer => "glMapNamedBuffer": fn(buffer: GLuint, access: GLenum) -> *mut c_void;
        unmap_named_buffer => "glUnmapNamedBuffer": fn(buffer: GLuint) -> GLboolean;
        get_named_buffer_parameteriv => "glGetNamedBufferParameteriv": fn(buffer: GLuint, pname: GLenum, params: *mut GLint);
        get_named_buffer_parameteri64v => "glGetNamedBufferParameteri64v": fn(buffer: GLuint, pname: GLenum, params: *mut GLint64);
        get_named_buffer_pointerv => "glGetNamedBufferPointerv": fn(buffer: GLuint, pname: GLenum, params: *mut *mut c_void);
        create_framebuffers => "glCreateFramebuffers": fn(n: GLsizei, framebuffers: *mut GLuint);
        named_framebuffer_renderbuffer => "glNamedFramebufferRenderbuffer": fn(framebuffer: GLuint, attachment: GLenum, renderbuffertarget: GLenum, renderbuffer: GLuint);
        named_framebuffer_parameteri => "glNamedFramebufferParameteri": fn(framebuffer: GLuint, pname: GLenum, param: GLint);
        named_framebuffer_texture => "glNamedFramebufferTexture": fn(framebuffer: GLuint, attachment: GLenum, texture: GLuint, level: GLint);
        named_framebuffer_texture_layer => "glNamedFramebufferTextureLayer": fn(framebuffer: GLuint, attachment: GLenum, texture: GLuint, level: GLint, layer: GLint);
        named_framebuffer_draw_buffer => "glNamedFramebufferDrawBuffer": fn(framebuffer: GLuint, buf: GLenum);
        named_framebuffer_draw_buffers => "glNamedFramebufferDrawBuffers": fn(framebuffer: GLuint, n: GLsizei, bufs: *const GLenum);
        named_framebuffer_read_buffer => "glNamedFramebufferReadBuffer": fn(framebuffer: GLuint, src: GLenum);
        invalidate_named_framebuffer_data => "glInvalidateNamedFramebufferData": fn(framebuffer: GLuint, num_attachments: GLsizei, attachments: *const GLenum);
        invalidate_named_framebuffer_sub_data => "glInvalidateNamedFramebufferSubData": fn(framebuffer: GLuint, num_attachments: GLsizei, attachments: *const GLenum, x: GLint, y: GLint, width: GLsizei, height: GLsizei);
        clear_named_framebufferiv => "glClearNamedFramebufferiv": fn(framebuffer: GLuint, buffer: GLenum, drawbuffer: GLint, value: *const GLint);
        clear_named_framebufferuiv => "glClearNamedFramebufferuiv": fn(framebuffer: GLuint, buffer: GLenum, drawbuffer: GLint, value: *const GLuint);
        clear_named_framebufferfv => "glClearNamedFramebufferfv": fn(framebuffer: GLuint, buffer: GLenum, drawbuffer: GLint, value: *const GLfloat);
        clear_named_framebufferfi => "glClearNamedFramebufferfi": fn(framebuffer: GLuint, buffer: GLenum, drawbuffer: GLint, depth: GLfloat, stencil: GLint);
        blit_named_framebuffer => "glBlitNamedFramebuffer": fn(read_framebuffer: GLuint, draw_framebuffer: GLuint, src_x0: GLint, src_y0: GLint, src_x1: GLint, src_y1: GLint, dst_x0: GLint, dst_y0: GLint, dst_x1: GLint, dst_y1: GLint, mask: GLbitfield, filter: GLenum);
        check_named_framebuffer_status => "glCheckNamedFramebufferStatus": fn(framebuffer: GLuint, target: GLenum) -> GLenum;
        get_named_framebuffer_parameteriv => "glGetNamedFramebufferParameteriv": fn(framebuffer: GLuint, pname: GLenum, param: *mut GLint);
        get_named_framebuffer_attachment_parameteriv => "glGetNamedFramebufferAttachmentParameteriv": fn(framebuffer: GLuint, attachment: GLenum, pname: GLenum, params: *mut GLint);
        create_renderbuffers => "glCreateRenderbuffers": fn(n: GLsizei, renderbuffers: *mut GLuint);
        named_renderbuffer_storage => "glNamedRenderbufferStorage": fn(renderbuffer: GLuint, internalformat: GLenum, width: GLsizei, height: GLsizei);
        named_renderbuffer_storage_multisample => "glNamedRenderbufferStorageMultisample": fn(renderbuffer: GLuint, samples: GLsizei, internalformat: GLenum, width: GLsizei, height: GLsizei);
        get_named_renderbuffer_parameteriv => "glGetNamedRenderbufferParameteriv": fn(renderbuffer: GLuint, pname: GLenum, params: *mut GLint);
        create_textures => "glCreateTextures": fn(target: GLenum, n: GLsizei, textures: *mut GLuint);
        texture_buffer => "glTextureBuffer": fn(texture: GLuint, internalformat: GLenum, buffer: GLuint);
        texture_storage_1d => "glTextureStorage1D": fn(texture: GLuint, levels: GLsizei, internalformat: GLenum, width: GLsizei);
        texture_storage_2d => "glTextureStorage2D": fn(texture: GLuint, levels: GLsizei, internalformat: GLenum, width: GLsizei, height: GLsizei);
        texture_storage_3d => "glTextureStorage3D": fn(texture: GLuint, levels: GLsizei, internalformat: GLenum, width: GLsizei, height: GLsizei, depth: GLsizei);
        texture_storage_2d_multisample => "glTextureStorage2DMultisample": fn(texture: GLuint, samples: GLsizei, internalformat: GLenum, width: GLsizei, height: GLsizei, fixedsamplelocations: GLboolean);
        texture_storage_3d_multisample => "glTextureStorage3DMultisample": fn(texture: GLuint, samples: GLsizei, internalformat: GLenum, width: GLsizei, height: GLsizei, depth: GLsizei, fixedsamplelocations: GLboolean);
        texture_sub_image_1d => "glTextureSubImage1D": fn(texture: GLuint, level: GLint, xoffset: GLint, width: GLsizei, format: GLenum, type_: GLenum, pixels: *const c_void);
        texture_sub_image_2d => "glTextureSubImage2D": fn(texture: GLuint, level: GLint, xoffset: GLint, yoffset: GLint, width: GLsizei, height: GLsizei, format: GLenum, type_: GLenum, pixels: *const c_void);
        texture_sub_image_3d => "glTextureSubImage3D": fn(texture: GLuint, level: GLint, xoffset: GLint, yoffset: GLint, zoffset: GLint, width: GLsizei, height: GLsizei, depth: GLsizei, format: GLenum, type_: GLenum, pixels: *const c_void);
        compressed_texture_sub_image_1d => "glCompressedTextureSubImage1D": fn(texture: GLuint, level: GLint, xoffset: GLint, width: GLsizei, format: GLenum, image_size: GLsizei, data: *const c_void);
        compressed_texture_sub_image_2d => "glCompressedTextureSubImage2D": fn(texture: GLuint, level: GLint, xoffset: GLint, yoffset: GLint, width: GLsizei, height: GLsizei, format: GLenum, image_size: GLsizei, data: *const c_void);
        compressed_texture_sub_image_3d => "glCompressedTextureSubImage3D": fn(texture: GLuint, level: GLint, xoffset: GLint, yoffset: GLint, zoffset: GLint, width: GLsizei, height: GLsizei, depth: GLsizei, format: GLenum, image_size: GLsizei, data: *const c_void);
        copy_texture_sub_image_1d => "glCopyTextureSubImage1D": fn(texture: GLuint, level: GLint, xoffset: GLint, x: GLint, y: GLint, width: GLsizei);
        copy_texture_sub_image_2d => "glCopyTextureSubImage2D": fn(texture: GLuint, level: GLint, xoffset: GLint, yoffset: GLint, x: GLint, y: GLint, width: GLsizei, height: GLsizei);
        copy_texture_sub_image_3d => "glCopyTextureSubImage3D": fn(texture: GLuint, level: GLint, xoffset: GLint, yoffset: GLint, zoffset: GLint, x: GLint, y: GLint, width: GLsizei, height: GLsizei);
        texture_parameterf => "glTextureParameterf": fn(texture: GLuint, pname: GLenum, param: GLfloat);
        texture_parameterfv => "glTextureParameterfv": fn(texture: GLuint, pname: GLenum, param: *const GLfloat);
        texture_parameteri => "glTextureParameteri": fn(texture: GLuint, pname: GLenum, param: GLint);
        texture_parameter_iiv => "glTextureParameterIiv": fn(texture: GLuint, pname: GLenum, params: *const GLint);
        texture_parameter_iuiv => "glTextureParameterIuiv": fn(texture: GLuint, pname: GLenum, params: *const GLuint);
        texture_parameteriv => "glTextureParameteriv": fn(texture: GLuint, pname: GLenum, param: *const GLint);
        generate_texture_mipmap => "glGenerateTextureMipmap": fn(texture: GLuint);
        bind_texture_unit => "glBindTextureUnit": fn(unit: GLuint, texture: GLuint);
        get_texture_image => "glGetTextureImage": fn(texture: GLuint, level: GLint, format: GLenum, type_: GLenum, buf_size: GLsizei, pixels: *mut c_void);
        get_compressed_texture_image => "glGetCompressedTextureImage": fn(texture: GLuint, level: GLint, buf_size: GLsizei, pixels: *mut c_void);
        get_texture_level_parameterfv => "glGetTextureLevelParameterfv": fn(texture: GLuint, level: GLint, pname: GLenum, params: *mut GLfloat);
        get_texture_level_parameteriv => "glGetTextureLevelParameteriv": fn(texture: GLuint, level: GLint, pname: GLenum, params: *mut GLint);
        get_texture_parameterfv => "glGetTextureParameterfv": fn(texture: GLuint, pname: GLenum, params: *mut GLfloat);
        get_texture_parameter_iiv => "glGetTextureParameterIiv": fn(texture: GLuint, pname: GLenum, params: *mut GLint);
        get_texture_parameter_iuiv => "glGetTextureParameterIuiv": fn(texture: GLuint, pname: GLenum, params: *mut GLuint);
        get_texture_parameteriv => "glGetTextureParameteriv": fn(texture: GLuint, pname: GLenum, params: *mut GLint);
        create_vertex_arrays => "glCreateVertexArrays": fn(n: GLsizei, arrays: *mut GLuint);
        disable_vertex_array_attrib => "glDisableVertexArrayAttrib": fn(vaobj: GLuint, index: GLuint);
        enable_vertex_array_attrib => "glEnableVertexArrayAttrib": fn(vaobj: GLuint, index: GLuint);
        vertex_array_element_buffer => "glVertexArrayElementBuffer": fn(vaobj: GLuint, buffer: GLuint);
        vertex_array_attrib_binding => "glVertexArrayAttribBinding": fn(vaobj: GLuint, attribindex: GLuint, bindingindex: GLuint);
        vertex_array_attrib_format => "glVertexArrayAttribFormat": fn(vaobj: GLuint, attribindex: GLuint, size: GLint, type_: GLenum, normalized: GLboolean, relativeoffset: GLuint);
        vertex_array_attrib_i_format => "glVertexArrayAttribIFormat": fn(vaobj: GLuint, attribindex: GLuint, size: GLint, type_: GLenum, relativeoffset: GLuint);
        vertex_array_attrib_l_format => "glVertexArrayAttribLFormat": fn(vaobj: GLuint, attribindex: GLuint, size: GLint, type_: GLenum, relativeoffset: GLuint);
        vertex_array_binding_divisor => "glVertexArrayBindingDivisor": fn(vaobj: GLuint, bindingindex: GLuint, divisor: GLuint);
        get_vertex_arrayiv => "glGetVertexArrayiv": fn(vaobj: GLuint, pname: GLenum, param: *mut GLint);
        get_vertex_array_indexediv => "glGetVertexArrayIndexediv": fn(vaobj: GLuint, index: GLuint, pname: GLenum, param: *mut GLint);
        get_vertex_array_indexed64iv => "glGetVertexArrayIndexed64iv": fn(vaobj: GLuint, index: GLuint, pname: GLenum, param: *mut GLint64);
        create_samplers => "glCreateSamplers": fn(n: GLsizei, samplers: *mut GLuint);
        create_program_pipelines => "glCreateProgramPipelines": fn(n: GLsizei, pipelines: *mut GLuint);
        create_queries => "glCreateQueries": fn(target: GLenum, n: GLsizei, ids: *mut GLuint);
        memory_barrier_by_region => "glMemoryBarrierByRegion": fn(barriers: GLbitfield);
        get_texture_sub_image => "glGetTextureSubImage": fn(texture: GLuint, level: GLint, xoffset: GLint, yoffset: GLint, zoffset: GLint, width: GLsizei, height: GLsizei, depth: GLsizei, format: GLenum, type_: GLenum, buf_size: GLsizei, pixels: *mut c_void);
        get_compressed_texture_sub_image => "glGetCompressedTextureSubImage": fn(texture: GLuint, level: GLint, xoffset: GLint, yoffset: GLint, zoffset: GLint, width: GLsizei, height: GLsizei, depth: GLsizei, buf_size: GLsizei, pixels: *mut c_void);
        get_graphics_reset_status => "glGetGraphicsResetStatus": fn() -> GLenum;
        getn_compressed_tex_image => "glGetnCompressedTexImage": fn(target: GLenum, lod: GLint, buf_size: GLsizei, pixels: *mut c_void);
        getn_tex_image => "glGetnTexImage": fn(target: GLenum, level: GLint, format: GLenum, type_: GLenum, buf_size: GLsizei, pixels: *mut c_void);
        getn_uniformdv => "glGetnUniformdv": fn(program: GLuint, location: GLint, buf_size: GLsizei, params: *mut GLdouble);
        getn_uniformfv => "glGetnUniformfv": fn(program: GLuint, location: GLint, buf_size: GLsizei, params: *mut GLfloat);
        getn_uniformiv => "glGetnUniformiv": fn(program: GLuint, location: GLint, buf_size: GLsizei, params: *mut GLint);
        getn_uniformuiv => "glGetnUniformuiv": fn(program: GLuint, location: GLint, buf_size: GLsizei, params: *mut GLuint);
        readn_pixels => "glReadnPixels": fn(x: GLint, y: GLint, width: GLsizei, height: GLsizei, format: GLenum, type_: GLenum, buf_size: GLsizei, data: *mut c_void);
        texture_barrier => "glTextureBarrier": fn();
    }
    width {
        transform_feedback_buffer_range => "glTransformFeedbackBufferRange" as PFNGLTRANSFORMFEEDBACKBUFFERRANGEPROC:
            fn<P>(xfb: GLuint, index: GLuint, buffer: GLuint, offset: P, size: P);
        named_buffer_storage => "glNamedBufferStorage" as PFNGLNAMEDBUFFERSTORAGEPROC:
            fn<P>(buffer: GLuint, size: P, data: *const c_void, flags: GLbitfield);
        named_buffer_data => "glNamedBufferData" as PFNGLNAMEDBUFFERDATAPROC:
            fn<P>(buffer: GLuint, size: P, data: *const c_void, usage: GLenum);
        named_buffer_sub_data => "glNamedBufferSubData" as PFNGLNAMEDBUFFERSUBDATAPROC:
            fn<P>(buffer: GLuint, offset: P, size: P, data: *const c_void);
        copy_named_buffer_sub_data => "glCopyNamedBufferSubData" as PFNGLCOPYNAMEDBUFFERSUBDATAPROC:
            fn<P>(read_buffer: GLuint, write_buffer: GLuint, read_offset: P, write_offset: P, size: P);
        clear_named_buffer_sub_data => "glClearNamedBufferSubData" as PFNGLCLEARNAMEDBUFFERSUBDATAPROC:
            fn<P>(buffer: GLuint, internalformat: GLenum, offset: P, size: P, format: GLenum, type_: GLenum, data: *const c_void);
        map_named_buffer_range => "glMapNamedBufferRange" as PFNGLMAPNAMEDBUFFERRANGEPROC:
            fn<P>(buffer: GLuint, offset: P, length: P, access: GLbitfield) -> *mut c_void;
        flush_mapped_named_buffer_range => "glFlushMappedNamedBufferRange" as PFNGLFLUSHMAPPEDNAMEDBUFFERRANGEPROC:
            fn<P>(buffer: GLuint, offset: P, length: P);
        get_named_buffer_sub_data => "glGetNamedBufferSubData" as PFNGLGETNAMEDBUFFERSUBDATAPROC:
            fn<P>(buffer: GLuint, offset: P, size: P, data: *mut c_void);
        texture_buffer_range => "glTextureBufferRange" as PFNGLTEXTUREBUFFERRANGEPROC:
            fn<P>(texture: GLuint, internalformat: GLenum, buffer: GLuint, offset: P, size: P);
        vertex_array_vertex_buffer => "glVertexArrayVertexBuffer" as PFNGLVERTEXARRAYVERTEXBUFFERPROC:
            fn<P>(vaobj: GLuint, bindingindex: GLuint, buffer: GLuint, offset: P, stride: GLsizei);
        vertex_array_vertex_buffers => "glVertexArrayVertexBuffers" as PFNGLVERTEXARRAYVERTEXBUFFERSPROC:
            fn<P>(vaobj: GLuint, first: GLuint, count: GLsizei, buffers: *const GLuint, offsets: *const P, strides: *const GLsizei);
        get_query_buffer_objecti64v => "glGetQueryBufferObjecti64v" as PFNGLGETQUERYBUFFEROBJECTI64VPROC:
            fn<P>(id: GLuint, buffer: GLuint, pname: GLenum, offset: P);
        get_query_buffer_objectiv => "glGetQueryBufferObjectiv" as PFNGLGETQUERYBUFFEROBJECTIVPROC:
            fn<P>(id: GLuint, buffer: GLuint, pname: GLenum, offset: P);
        get_query_buffer_objectui64v => "glGetQueryBufferObjectui64v" as PFNGLGETQUERYBUFFEROBJECTUI64VPROC:
            fn<P>(id: GLuint, buffer: GLuint, pname: GLenum, offset: P);
        get_query_buffer_objectuiv => "glGetQueryBufferObjectuiv" as PFNGLGETQUERYBUFFEROBJECTUIVPROC:
            fn<P>(id: GLuint, buffer: GLuint, pname: GLenum, offset: P);
    }
}

gl_tier! {
    /// OpenGL 4.6
    pub struct Gl46: V4_6 {
        specialize_shader => "glSpecializeShader": fn(shader: GLuint, entry_point: *const GLchar, num_specialization_constants: GLuint, constant_index: *const GLuint, constant_value: *const GLuint);
        polygon_offset_clamp => "glPolygonOffsetClamp": fn(factor: GLfloat, units: GLfloat, clamp: GLfloat);
    }
    width {
        multi_draw_arrays_indirect_count => "glMultiDrawArraysIndirectCount" as PFNGLMULTIDRAWARRAYSINDIRECTCOUNTPROC:
            fn<P>(mode: GLenum, indirect: *const c_void, drawcount: P, maxdrawcount: GLsizei, stride: GLsizei);
        multi_draw_elements_indirect_count => "glMultiDrawElementsIndirectCount" as PFNGLMULTIDRAWELEMENTSINDIRECTCOUNTPROC:
            fn<P>(mode: GLenum, type_: GLenum, indirect: *const c_void, drawcount: P, maxdrawcount: GLsizei, stride: GLsizei);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CStr;
    use std::ptr;

    extern "system" fn stub() {}

    #[test]
    fn tier_loads_when_complete() {
        let mut tier = Gl12::default();
        let mut loader = |_: &CStr| stub as extern "system" fn() as *const c_void;
        assert!(tier.load(&mut loader, PointerWidth::host()));
        assert!(tier.missing().is_empty());
        assert_eq!(tier.version(), Version::V1_2);
    }

    #[test]
    fn width_entries_gate_the_tier() {
        let mut tier = Gl15::default();
        let mut loader = |name: &CStr| {
            if name.to_bytes() == b"glBufferSubData" {
                ptr::null()
            } else {
                stub as extern "system" fn() as *const c_void
            }
        };
        assert!(!tier.load(&mut loader, PointerWidth::Wide));
        assert_eq!(tier.missing(), vec!["glBufferSubData"]);
        assert!(tier.address_of("glBufferSubData").unwrap().is_null());
        assert!(!tier.address_of("glBufferData").unwrap().is_null());
        assert_eq!(tier.address_of("glDrawArrays"), None);

        tier.reset();
        assert_eq!(tier.missing().len(), Gl15::SYMBOLS.len());
    }
}
