//! Integration tests for the width-adapting wrappers.

mod common;

use common::{take_calls, Call, FakeContext};
use glcaps_core::*;

use std::ptr;

const GL_ARRAY_BUFFER: GLenum = 0x8892;
const GL_UNIFORM_BUFFER: GLenum = 0x8A11;
const GL_STATIC_DRAW: GLenum = 0x88E4;
const GL_MAP_READ_BIT: GLbitfield = 0x0001;

fn load(width: PointerWidth) -> Capabilities {
    common::init_logger();
    let config = unsafe { LoadConfig::default().width(width) };
    Capabilities::load_with(&mut FakeContext::new(width), &config)
}

#[test]
fn narrow_rejects_out_of_range_size() {
    let caps = load(PointerWidth::Narrow);
    take_calls();

    let too_big = i32::MAX as i64 + 1;
    let result = unsafe { caps.buffer_data(GL_ARRAY_BUFFER, too_big, ptr::null(), GL_STATIC_DRAW) };
    assert_eq!(
        result,
        Err(Error::InvalidValue {
            name: "size",
            value: too_big,
        })
    );
    assert_eq!(result.unwrap_err().code(), GL_INVALID_VALUE);
    assert!(take_calls().is_empty());
}

#[test]
fn narrow_rejects_before_any_argument_reaches_the_driver() {
    let caps = load(PointerWidth::Narrow);
    take_calls();

    let result = unsafe { caps.buffer_sub_data(GL_ARRAY_BUFFER, 0, -(1 << 40), ptr::null()) };
    assert!(matches!(result, Err(Error::InvalidValue { name: "size", .. })));

    let result = unsafe { caps.map_buffer_range(GL_ARRAY_BUFFER, 1 << 31, 16, GL_MAP_READ_BIT) };
    assert!(matches!(result, Err(Error::InvalidValue { name: "offset", .. })));

    assert!(take_calls().is_empty());
}

#[test]
fn narrow_forwards_values_in_range() {
    let caps = load(PointerWidth::Narrow);
    take_calls();

    unsafe {
        caps.buffer_data(GL_ARRAY_BUFFER, 256, ptr::null(), GL_STATIC_DRAW).unwrap();
        caps.buffer_sub_data(GL_ARRAY_BUFFER, i32::MAX as i64 - 4, 4, ptr::null()).unwrap();
    }
    assert_eq!(
        take_calls(),
        vec![
            Call {
                name: "glBufferData",
                width: PointerWidth::Narrow,
                args: vec![256],
            },
            Call {
                name: "glBufferSubData",
                width: PointerWidth::Narrow,
                args: vec![i32::MAX as i64 - 4, 4],
            },
        ]
    );
}

#[test]
fn wide_passes_large_values_through() {
    let caps = load(PointerWidth::Wide);
    take_calls();

    let size = 6 << 30;
    let mapping = unsafe {
        caps.buffer_data(GL_ARRAY_BUFFER, size, ptr::null(), GL_STATIC_DRAW).unwrap();
        caps.map_buffer_range(GL_ARRAY_BUFFER, size - 8, 8, GL_MAP_READ_BIT).unwrap()
    };
    assert_eq!(mapping as usize, common::MAPPING);

    let calls = take_calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].args, vec![size]);
    assert_eq!(calls[1].args, vec![size - 8, 8]);
    assert!(calls.iter().all(|call| call.width == PointerWidth::Wide));
}

#[test]
fn array_variants_check_lengths() {
    let caps = load(PointerWidth::Wide);
    take_calls();

    let result = unsafe {
        caps.bind_buffers_range(GL_UNIFORM_BUFFER, 0, &[1, 2], &[0, 256], &[64])
    };
    assert_eq!(
        result,
        Err(Error::LengthMismatch {
            expected: 2,
            found: 1,
        })
    );
    assert!(take_calls().is_empty());

    unsafe {
        caps.bind_buffers_range(GL_UNIFORM_BUFFER, 0, &[1, 2], &[0, 256], &[64, 128])
            .unwrap();
    }
    assert_eq!(take_calls()[0].args, vec![0, 256, 64, 128]);
}

#[test]
fn array_variants_check_every_element_when_narrow() {
    let caps = load(PointerWidth::Narrow);
    take_calls();

    let result = unsafe {
        caps.bind_buffers_range(GL_UNIFORM_BUFFER, 0, &[1, 2], &[0, 1 << 32], &[64, 64])
    };
    assert_eq!(
        result,
        Err(Error::InvalidValue {
            name: "offsets",
            value: 1 << 32,
        })
    );
    assert!(take_calls().is_empty());

    unsafe {
        caps.bind_buffers_range(GL_UNIFORM_BUFFER, 4, &[1], &[512], &[64])
            .unwrap();
    }
    assert_eq!(
        take_calls(),
        vec![Call {
            name: "glBindBuffersRange",
            width: PointerWidth::Narrow,
            args: vec![512, 64],
        }]
    );
}

#[test]
fn missing_entry_point_is_unavailable() {
    let config = unsafe { LoadConfig::default().width(PointerWidth::Narrow) };
    let mut context = FakeContext::new(PointerWidth::Narrow).without(&["glBufferData", "glGenBuffers"]);
    let caps = Capabilities::load_with(&mut context, &config);
    take_calls();

    let result = unsafe { caps.buffer_data(GL_ARRAY_BUFFER, 16, ptr::null(), GL_STATIC_DRAW) };
    assert_eq!(result, Err(Error::Unavailable("glBufferData")));
    assert_eq!(result.unwrap_err().code(), GL_INVALID_OPERATION);
    assert_eq!(unsafe { caps.gen_buffer() }, Err(Error::Unavailable("glGenBuffers")));

    // unrelated wrappers still work
    assert!(unsafe { caps.buffer_sub_data(GL_ARRAY_BUFFER, 0, 16, ptr::null()) }.is_ok());
}

#[test]
fn unloaded_table_is_unavailable() {
    let caps = Capabilities::default();
    let result = unsafe { caps.map_buffer_range(GL_ARRAY_BUFFER, 0, 16, GL_MAP_READ_BIT) };
    assert_eq!(result, Err(Error::Unavailable("glMapBufferRange")));
    assert_eq!(unsafe { caps.is_enabled(common::GL_DEPTH_TEST) }, Err(Error::Unavailable("glIsEnabled")));
}

#[test]
fn single_object_helpers() {
    let caps = load(PointerWidth::host());

    unsafe {
        assert_eq!(caps.gen_buffer(), Ok(common::GENERATED_NAME));
        assert_eq!(caps.gen_texture(), Ok(common::GENERATED_NAME));
        assert_eq!(caps.gen_vertex_array(), Ok(common::GENERATED_NAME));
        assert_eq!(caps.delete_buffer(common::GENERATED_NAME), Ok(()));
        assert_eq!(caps.is_enabled(common::GL_DEPTH_TEST), Ok(true));
        assert_eq!(caps.is_enabled(0), Ok(false));
    }
}

#[test]
fn default_load_binds_host_width() {
    common::init_logger();
    let caps = Capabilities::load(&mut FakeContext::host());
    assert_eq!(caps.config().pointer_width(), PointerWidth::host());
    take_calls();

    unsafe {
        caps.buffer_data(GL_ARRAY_BUFFER, -1, ptr::null(), GL_STATIC_DRAW).unwrap();
    }
    assert_eq!(
        take_calls(),
        vec![Call {
            name: "glBufferData",
            width: PointerWidth::host(),
            args: vec![-1],
        }]
    );
}
