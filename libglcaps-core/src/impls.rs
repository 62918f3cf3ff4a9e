//! Wrappers over the pointer-width-dependent entry points.
//!
//! Every wrapper takes 64-bit offsets and sizes. On tables loaded for 32-bit
//! offsets each of them is range-checked before the native call; nothing is
//! called when a value does not fit.

use std::os::raw::c_void;

use crate::caps::Capabilities;
use crate::conv::{self, bool_from_gl, narrow, narrow_all};
use crate::error::Result;
use crate::slot::Variant;
use crate::*;

fn count(len: usize) -> Result<GLsizei> {
    narrow("count", len as i64)
}

impl Capabilities {
    // 1.5

    pub unsafe fn buffer_data(
        &self,
        target: GLenum,
        size: i64,
        data: *const c_void,
        usage: GLenum,
    ) -> Result<()> {
        match self.gl15.buffer_data.variant()? {
            Variant::Narrow(f) => f(target, narrow("size", size)?, data, usage),
            Variant::Wide(f) => f(target, size, data, usage),
        }
        Ok(())
    }

    pub unsafe fn buffer_sub_data(
        &self,
        target: GLenum,
        offset: i64,
        size: i64,
        data: *const c_void,
    ) -> Result<()> {
        match self.gl15.buffer_sub_data.variant()? {
            Variant::Narrow(f) => f(
                target,
                narrow("offset", offset)?,
                narrow("size", size)?,
                data,
            ),
            Variant::Wide(f) => f(target, offset, size, data),
        }
        Ok(())
    }

    pub unsafe fn get_buffer_sub_data(
        &self,
        target: GLenum,
        offset: i64,
        size: i64,
        data: *mut c_void,
    ) -> Result<()> {
        match self.gl15.get_buffer_sub_data.variant()? {
            Variant::Narrow(f) => f(
                target,
                narrow("offset", offset)?,
                narrow("size", size)?,
                data,
            ),
            Variant::Wide(f) => f(target, offset, size, data),
        }
        Ok(())
    }

    // 3.0

    pub unsafe fn bind_buffer_range(
        &self,
        target: GLenum,
        index: GLuint,
        buffer: GLuint,
        offset: i64,
        size: i64,
    ) -> Result<()> {
        match self.gl30.bind_buffer_range.variant()? {
            Variant::Narrow(f) => f(
                target,
                index,
                buffer,
                narrow("offset", offset)?,
                narrow("size", size)?,
            ),
            Variant::Wide(f) => f(target, index, buffer, offset, size),
        }
        Ok(())
    }

    pub unsafe fn map_buffer_range(
        &self,
        target: GLenum,
        offset: i64,
        length: i64,
        access: GLbitfield,
    ) -> Result<*mut c_void> {
        Ok(match self.gl30.map_buffer_range.variant()? {
            Variant::Narrow(f) => f(
                target,
                narrow("offset", offset)?,
                narrow("length", length)?,
                access,
            ),
            Variant::Wide(f) => f(target, offset, length, access),
        })
    }

    pub unsafe fn flush_mapped_buffer_range(
        &self,
        target: GLenum,
        offset: i64,
        length: i64,
    ) -> Result<()> {
        match self.gl30.flush_mapped_buffer_range.variant()? {
            Variant::Narrow(f) => f(target, narrow("offset", offset)?, narrow("length", length)?),
            Variant::Wide(f) => f(target, offset, length),
        }
        Ok(())
    }

    // 3.1

    pub unsafe fn copy_buffer_sub_data(
        &self,
        read_target: GLenum,
        write_target: GLenum,
        read_offset: i64,
        write_offset: i64,
        size: i64,
    ) -> Result<()> {
        match self.gl31.copy_buffer_sub_data.variant()? {
            Variant::Narrow(f) => f(
                read_target,
                write_target,
                narrow("readOffset", read_offset)?,
                narrow("writeOffset", write_offset)?,
                narrow("size", size)?,
            ),
            Variant::Wide(f) => f(read_target, write_target, read_offset, write_offset, size),
        }
        Ok(())
    }

    // 4.3

    pub unsafe fn clear_buffer_sub_data(
        &self,
        target: GLenum,
        internalformat: GLenum,
        offset: i64,
        size: i64,
        format: GLenum,
        type_: GLenum,
        data: *const c_void,
    ) -> Result<()> {
        match self.gl43.clear_buffer_sub_data.variant()? {
            Variant::Narrow(f) => f(
                target,
                internalformat,
                narrow("offset", offset)?,
                narrow("size", size)?,
                format,
                type_,
                data,
            ),
            Variant::Wide(f) => f(target, internalformat, offset, size, format, type_, data),
        }
        Ok(())
    }

    pub unsafe fn dispatch_compute_indirect(&self, indirect: i64) -> Result<()> {
        match self.gl43.dispatch_compute_indirect.variant()? {
            Variant::Narrow(f) => f(narrow("indirect", indirect)?),
            Variant::Wide(f) => f(indirect),
        }
        Ok(())
    }

    pub unsafe fn invalidate_buffer_sub_data(
        &self,
        buffer: GLuint,
        offset: i64,
        length: i64,
    ) -> Result<()> {
        match self.gl43.invalidate_buffer_sub_data.variant()? {
            Variant::Narrow(f) => f(buffer, narrow("offset", offset)?, narrow("length", length)?),
            Variant::Wide(f) => f(buffer, offset, length),
        }
        Ok(())
    }

    pub unsafe fn tex_buffer_range(
        &self,
        target: GLenum,
        internalformat: GLenum,
        buffer: GLuint,
        offset: i64,
        size: i64,
    ) -> Result<()> {
        match self.gl43.tex_buffer_range.variant()? {
            Variant::Narrow(f) => f(
                target,
                internalformat,
                buffer,
                narrow("offset", offset)?,
                narrow("size", size)?,
            ),
            Variant::Wide(f) => f(target, internalformat, buffer, offset, size),
        }
        Ok(())
    }

    pub unsafe fn bind_vertex_buffer(
        &self,
        bindingindex: GLuint,
        buffer: GLuint,
        offset: i64,
        stride: GLsizei,
    ) -> Result<()> {
        match self.gl43.bind_vertex_buffer.variant()? {
            Variant::Narrow(f) => f(bindingindex, buffer, narrow("offset", offset)?, stride),
            Variant::Wide(f) => f(bindingindex, buffer, offset, stride),
        }
        Ok(())
    }

    // 4.4

    pub unsafe fn buffer_storage(
        &self,
        target: GLenum,
        size: i64,
        data: *const c_void,
        flags: GLbitfield,
    ) -> Result<()> {
        match self.gl44.buffer_storage.variant()? {
            Variant::Narrow(f) => f(target, narrow("size", size)?, data, flags),
            Variant::Wide(f) => f(target, size, data, flags),
        }
        Ok(())
    }

    /// Binds `buffers[i]` at `offsets[i]..offsets[i] + sizes[i]` to the
    /// binding points starting at `first`.
    pub unsafe fn bind_buffers_range(
        &self,
        target: GLenum,
        first: GLuint,
        buffers: &[GLuint],
        offsets: &[i64],
        sizes: &[i64],
    ) -> Result<()> {
        conv::check_len(buffers.len(), offsets.len())?;
        conv::check_len(buffers.len(), sizes.len())?;
        let count = count(buffers.len())?;
        match self.gl44.bind_buffers_range.variant()? {
            Variant::Narrow(f) => {
                let offsets = narrow_all("offsets", offsets)?;
                let sizes = narrow_all("sizes", sizes)?;
                f(target, first, count, buffers.as_ptr(), offsets.as_ptr(), sizes.as_ptr())
            }
            Variant::Wide(f) => f(
                target,
                first,
                count,
                buffers.as_ptr(),
                offsets.as_ptr(),
                sizes.as_ptr(),
            ),
        }
        Ok(())
    }

    pub unsafe fn bind_vertex_buffers(
        &self,
        first: GLuint,
        buffers: &[GLuint],
        offsets: &[i64],
        strides: &[GLsizei],
    ) -> Result<()> {
        conv::check_len(buffers.len(), offsets.len())?;
        conv::check_len(buffers.len(), strides.len())?;
        let count = count(buffers.len())?;
        match self.gl44.bind_vertex_buffers.variant()? {
            Variant::Narrow(f) => {
                let offsets = narrow_all("offsets", offsets)?;
                f(first, count, buffers.as_ptr(), offsets.as_ptr(), strides.as_ptr())
            }
            Variant::Wide(f) => f(first, count, buffers.as_ptr(), offsets.as_ptr(), strides.as_ptr()),
        }
        Ok(())
    }

    // 4.5

    pub unsafe fn transform_feedback_buffer_range(
        &self,
        xfb: GLuint,
        index: GLuint,
        buffer: GLuint,
        offset: i64,
        size: i64,
    ) -> Result<()> {
        match self.gl45.transform_feedback_buffer_range.variant()? {
            Variant::Narrow(f) => f(
                xfb,
                index,
                buffer,
                narrow("offset", offset)?,
                narrow("size", size)?,
            ),
            Variant::Wide(f) => f(xfb, index, buffer, offset, size),
        }
        Ok(())
    }

    pub unsafe fn named_buffer_storage(
        &self,
        buffer: GLuint,
        size: i64,
        data: *const c_void,
        flags: GLbitfield,
    ) -> Result<()> {
        match self.gl45.named_buffer_storage.variant()? {
            Variant::Narrow(f) => f(buffer, narrow("size", size)?, data, flags),
            Variant::Wide(f) => f(buffer, size, data, flags),
        }
        Ok(())
    }

    pub unsafe fn named_buffer_data(
        &self,
        buffer: GLuint,
        size: i64,
        data: *const c_void,
        usage: GLenum,
    ) -> Result<()> {
        match self.gl45.named_buffer_data.variant()? {
            Variant::Narrow(f) => f(buffer, narrow("size", size)?, data, usage),
            Variant::Wide(f) => f(buffer, size, data, usage),
        }
        Ok(())
    }

    pub unsafe fn named_buffer_sub_data(
        &self,
        buffer: GLuint,
        offset: i64,
        size: i64,
        data: *const c_void,
    ) -> Result<()> {
        match self.gl45.named_buffer_sub_data.variant()? {
            Variant::Narrow(f) => f(
                buffer,
                narrow("offset", offset)?,
                narrow("size", size)?,
                data,
            ),
            Variant::Wide(f) => f(buffer, offset, size, data),
        }
        Ok(())
    }

    pub unsafe fn copy_named_buffer_sub_data(
        &self,
        read_buffer: GLuint,
        write_buffer: GLuint,
        read_offset: i64,
        write_offset: i64,
        size: i64,
    ) -> Result<()> {
        match self.gl45.copy_named_buffer_sub_data.variant()? {
            Variant::Narrow(f) => f(
                read_buffer,
                write_buffer,
                narrow("readOffset", read_offset)?,
                narrow("writeOffset", write_offset)?,
                narrow("size", size)?,
            ),
            Variant::Wide(f) => f(read_buffer, write_buffer, read_offset, write_offset, size),
        }
        Ok(())
    }

    pub unsafe fn clear_named_buffer_sub_data(
        &self,
        buffer: GLuint,
        internalformat: GLenum,
        offset: i64,
        size: i64,
        format: GLenum,
        type_: GLenum,
        data: *const c_void,
    ) -> Result<()> {
        match self.gl45.clear_named_buffer_sub_data.variant()? {
            Variant::Narrow(f) => f(
                buffer,
                internalformat,
                narrow("offset", offset)?,
                narrow("size", size)?,
                format,
                type_,
                data,
            ),
            Variant::Wide(f) => f(buffer, internalformat, offset, size, format, type_, data),
        }
        Ok(())
    }

    pub unsafe fn map_named_buffer_range(
        &self,
        buffer: GLuint,
        offset: i64,
        length: i64,
        access: GLbitfield,
    ) -> Result<*mut c_void> {
        Ok(match self.gl45.map_named_buffer_range.variant()? {
            Variant::Narrow(f) => f(
                buffer,
                narrow("offset", offset)?,
                narrow("length", length)?,
                access,
            ),
            Variant::Wide(f) => f(buffer, offset, length, access),
        })
    }

    pub unsafe fn flush_mapped_named_buffer_range(
        &self,
        buffer: GLuint,
        offset: i64,
        length: i64,
    ) -> Result<()> {
        match self.gl45.flush_mapped_named_buffer_range.variant()? {
            Variant::Narrow(f) => f(buffer, narrow("offset", offset)?, narrow("length", length)?),
            Variant::Wide(f) => f(buffer, offset, length),
        }
        Ok(())
    }

    pub unsafe fn get_named_buffer_sub_data(
        &self,
        buffer: GLuint,
        offset: i64,
        size: i64,
        data: *mut c_void,
    ) -> Result<()> {
        match self.gl45.get_named_buffer_sub_data.variant()? {
            Variant::Narrow(f) => f(
                buffer,
                narrow("offset", offset)?,
                narrow("size", size)?,
                data,
            ),
            Variant::Wide(f) => f(buffer, offset, size, data),
        }
        Ok(())
    }

    pub unsafe fn texture_buffer_range(
        &self,
        texture: GLuint,
        internalformat: GLenum,
        buffer: GLuint,
        offset: i64,
        size: i64,
    ) -> Result<()> {
        match self.gl45.texture_buffer_range.variant()? {
            Variant::Narrow(f) => f(
                texture,
                internalformat,
                buffer,
                narrow("offset", offset)?,
                narrow("size", size)?,
            ),
            Variant::Wide(f) => f(texture, internalformat, buffer, offset, size),
        }
        Ok(())
    }

    pub unsafe fn vertex_array_vertex_buffer(
        &self,
        vaobj: GLuint,
        bindingindex: GLuint,
        buffer: GLuint,
        offset: i64,
        stride: GLsizei,
    ) -> Result<()> {
        match self.gl45.vertex_array_vertex_buffer.variant()? {
            Variant::Narrow(f) => f(vaobj, bindingindex, buffer, narrow("offset", offset)?, stride),
            Variant::Wide(f) => f(vaobj, bindingindex, buffer, offset, stride),
        }
        Ok(())
    }

    pub unsafe fn vertex_array_vertex_buffers(
        &self,
        vaobj: GLuint,
        first: GLuint,
        buffers: &[GLuint],
        offsets: &[i64],
        strides: &[GLsizei],
    ) -> Result<()> {
        conv::check_len(buffers.len(), offsets.len())?;
        conv::check_len(buffers.len(), strides.len())?;
        let count = count(buffers.len())?;
        match self.gl45.vertex_array_vertex_buffers.variant()? {
            Variant::Narrow(f) => {
                let offsets = narrow_all("offsets", offsets)?;
                f(vaobj, first, count, buffers.as_ptr(), offsets.as_ptr(), strides.as_ptr())
            }
            Variant::Wide(f) => f(
                vaobj,
                first,
                count,
                buffers.as_ptr(),
                offsets.as_ptr(),
                strides.as_ptr(),
            ),
        }
        Ok(())
    }

    pub unsafe fn get_query_buffer_objecti64v(
        &self,
        id: GLuint,
        buffer: GLuint,
        pname: GLenum,
        offset: i64,
    ) -> Result<()> {
        match self.gl45.get_query_buffer_objecti64v.variant()? {
            Variant::Narrow(f) => f(id, buffer, pname, narrow("offset", offset)?),
            Variant::Wide(f) => f(id, buffer, pname, offset),
        }
        Ok(())
    }

    pub unsafe fn get_query_buffer_objectiv(
        &self,
        id: GLuint,
        buffer: GLuint,
        pname: GLenum,
        offset: i64,
    ) -> Result<()> {
        match self.gl45.get_query_buffer_objectiv.variant()? {
            Variant::Narrow(f) => f(id, buffer, pname, narrow("offset", offset)?),
            Variant::Wide(f) => f(id, buffer, pname, offset),
        }
        Ok(())
    }

    pub unsafe fn get_query_buffer_objectui64v(
        &self,
        id: GLuint,
        buffer: GLuint,
        pname: GLenum,
        offset: i64,
    ) -> Result<()> {
        match self.gl45.get_query_buffer_objectui64v.variant()? {
            Variant::Narrow(f) => f(id, buffer, pname, narrow("offset", offset)?),
            Variant::Wide(f) => f(id, buffer, pname, offset),
        }
        Ok(())
    }

    pub unsafe fn get_query_buffer_objectuiv(
        &self,
        id: GLuint,
        buffer: GLuint,
        pname: GLenum,
        offset: i64,
    ) -> Result<()> {
        match self.gl45.get_query_buffer_objectuiv.variant()? {
            Variant::Narrow(f) => f(id, buffer, pname, narrow("offset", offset)?),
            Variant::Wide(f) => f(id, buffer, pname, offset),
        }
        Ok(())
    }

    // 4.6

    pub unsafe fn multi_draw_arrays_indirect_count(
        &self,
        mode: GLenum,
        indirect: *const c_void,
        drawcount: i64,
        maxdrawcount: GLsizei,
        stride: GLsizei,
    ) -> Result<()> {
        match self.gl46.multi_draw_arrays_indirect_count.variant()? {
            Variant::Narrow(f) => f(
                mode,
                indirect,
                narrow("drawcount", drawcount)?,
                maxdrawcount,
                stride,
            ),
            Variant::Wide(f) => f(mode, indirect, drawcount, maxdrawcount, stride),
        }
        Ok(())
    }

    pub unsafe fn multi_draw_elements_indirect_count(
        &self,
        mode: GLenum,
        type_: GLenum,
        indirect: *const c_void,
        drawcount: i64,
        maxdrawcount: GLsizei,
        stride: GLsizei,
    ) -> Result<()> {
        match self.gl46.multi_draw_elements_indirect_count.variant()? {
            Variant::Narrow(f) => f(
                mode,
                type_,
                indirect,
                narrow("drawcount", drawcount)?,
                maxdrawcount,
                stride,
            ),
            Variant::Wide(f) => f(mode, type_, indirect, drawcount, maxdrawcount, stride),
        }
        Ok(())
    }

    // single object helpers

    pub unsafe fn gen_buffer(&self) -> Result<GLuint> {
        let generate = self.gl15.gen_buffers.get()?;
        let mut name = 0;
        generate(1, &mut name);
        Ok(name)
    }

    pub unsafe fn delete_buffer(&self, buffer: GLuint) -> Result<()> {
        let delete = self.gl15.delete_buffers.get()?;
        delete(1, &buffer);
        Ok(())
    }

    pub unsafe fn gen_texture(&self) -> Result<GLuint> {
        let generate = self.gl11.gen_textures.get()?;
        let mut name = 0;
        generate(1, &mut name);
        Ok(name)
    }

    pub unsafe fn delete_texture(&self, texture: GLuint) -> Result<()> {
        let delete = self.gl11.delete_textures.get()?;
        delete(1, &texture);
        Ok(())
    }

    pub unsafe fn gen_vertex_array(&self) -> Result<GLuint> {
        let generate = self.gl30.gen_vertex_arrays.get()?;
        let mut name = 0;
        generate(1, &mut name);
        Ok(name)
    }

    pub unsafe fn delete_vertex_array(&self, array: GLuint) -> Result<()> {
        let delete = self.gl30.delete_vertex_arrays.get()?;
        delete(1, &array);
        Ok(())
    }

    pub unsafe fn gen_framebuffer(&self) -> Result<GLuint> {
        let generate = self.gl30.gen_framebuffers.get()?;
        let mut name = 0;
        generate(1, &mut name);
        Ok(name)
    }

    pub unsafe fn delete_framebuffer(&self, framebuffer: GLuint) -> Result<()> {
        let delete = self.gl30.delete_framebuffers.get()?;
        delete(1, &framebuffer);
        Ok(())
    }

    pub unsafe fn gen_renderbuffer(&self) -> Result<GLuint> {
        let generate = self.gl30.gen_renderbuffers.get()?;
        let mut name = 0;
        generate(1, &mut name);
        Ok(name)
    }

    pub unsafe fn delete_renderbuffer(&self, renderbuffer: GLuint) -> Result<()> {
        let delete = self.gl30.delete_renderbuffers.get()?;
        delete(1, &renderbuffer);
        Ok(())
    }

    pub unsafe fn gen_query(&self) -> Result<GLuint> {
        let generate = self.gl15.gen_queries.get()?;
        let mut name = 0;
        generate(1, &mut name);
        Ok(name)
    }

    pub unsafe fn delete_query(&self, id: GLuint) -> Result<()> {
        let delete = self.gl15.delete_queries.get()?;
        delete(1, &id);
        Ok(())
    }

    pub unsafe fn gen_sampler(&self) -> Result<GLuint> {
        let generate = self.gl33.gen_samplers.get()?;
        let mut name = 0;
        generate(1, &mut name);
        Ok(name)
    }

    pub unsafe fn delete_sampler(&self, sampler: GLuint) -> Result<()> {
        let delete = self.gl33.delete_samplers.get()?;
        delete(1, &sampler);
        Ok(())
    }

    pub unsafe fn is_enabled(&self, cap: GLenum) -> Result<bool> {
        let is_enabled = self.gl10.is_enabled.get()?;
        Ok(bool_from_gl(is_enabled(cap)))
    }

    pub unsafe fn is_buffer(&self, buffer: GLuint) -> Result<bool> {
        let is_buffer = self.gl15.is_buffer.get()?;
        Ok(bool_from_gl(is_buffer(buffer)))
    }

    pub unsafe fn is_texture(&self, texture: GLuint) -> Result<bool> {
        let is_texture = self.gl11.is_texture.get()?;
        Ok(bool_from_gl(is_texture(texture)))
    }
}
