//! Integration tests for loading a capability table against a fake context.

mod common;

use common::FakeContext;
use glcaps_core::*;

#[test]
fn full_context_supports_every_version() {
    common::init_logger();
    let mut context = FakeContext::host();
    let caps = Capabilities::load(&mut context);

    assert_eq!(caps.max_version(), Some(Version::V4_6));
    for &version in Version::ALL.iter() {
        assert!(caps.supports(version), "{} should be supported", version);
        assert!(caps.missing(version).is_empty());
    }
}

#[test]
fn flags_are_monotonic() {
    common::init_logger();
    // a hole in 3.1 must hide every later tier, even though they resolve fully
    let mut context = FakeContext::host().without(&["glPrimitiveRestartIndex"]);
    let caps = Capabilities::load(&mut context);

    for pair in Version::ALL.windows(2) {
        if caps.supports(pair[1]) {
            assert!(caps.supports(pair[0]), "{} without {}", pair[1], pair[0]);
        }
    }
    assert_eq!(caps.max_version(), Some(Version::V3_0));
    assert!(!caps.supports(Version::V4_6));
    assert_eq!(caps.missing(Version::V4_6), vec!["glPrimitiveRestartIndex"]);

    // later tiers were still resolved
    assert!(caps.gl46.specialize_shader.is_set());
}

#[test]
fn supported_tiers_have_every_slot() {
    let mut context = FakeContext::host().without(&["glGetBufferSubData"]);
    let caps = Capabilities::load(&mut context);

    for &version in Version::ALL.iter().filter(|v| caps.supports(**v)) {
        for &name in version.symbols() {
            assert!(!caps.proc_address(name).is_null(), "{} is null", name);
        }
    }
    assert_eq!(caps.max_version(), Some(Version::V1_4));
}

#[test]
fn prefix_of_versions() {
    for &version in Version::ALL.iter() {
        let mut context = FakeContext::host().up_to(version);
        let caps = Capabilities::load(&mut context);

        assert_eq!(caps.max_version(), Some(version));
        if let Some(next) = Version::ALL.get(version.index() + 1) {
            assert!(!caps.supports(*next));
            assert_eq!(caps.missing(*next).len(), next.symbols().len());
        }
    }
}

#[test]
fn null_address_stays_null() {
    let mut context = FakeContext::host().without(&["glDrawArrays", "glMapBufferRange"]);
    let caps = Capabilities::load(&mut context);

    assert!(!caps.gl11.draw_arrays.is_set());
    assert!(caps.gl11.draw_arrays.func().is_none());
    assert_eq!(
        caps.gl11.draw_arrays.get().err(),
        Some(Error::Unavailable("glDrawArrays"))
    );
    assert!(caps.proc_address("glDrawArrays").is_null());
    assert!(!caps.gl30.map_buffer_range.is_set());
    assert!(caps.gl30.map_buffer_range.narrow().address().is_null());
    assert!(caps.gl30.map_buffer_range.wide().address().is_null());
    assert_eq!(caps.max_version(), Some(Version::V1_0));
}

#[test]
fn narrow_width_binds_only_narrow_variants() {
    let config = unsafe { LoadConfig::default().width(PointerWidth::Narrow) };
    let mut context = FakeContext::new(PointerWidth::Narrow);
    let caps = Capabilities::load_with(&mut context, &config);

    assert_eq!(caps.pointer_width(), PointerWidth::Narrow);
    assert!(caps.gl15.buffer_data.narrow().is_set());
    assert!(!caps.gl15.buffer_data.wide().is_set());
    assert!(caps.gl45.named_buffer_storage.narrow().is_set());
    assert!(!caps.gl45.named_buffer_storage.wide().is_set());
    assert!(matches!(caps.gl30.map_buffer_range.variant(), Ok(Variant::Narrow(_))));
}

#[test]
fn wide_width_binds_only_wide_variants() {
    let config = unsafe { LoadConfig::default().width(PointerWidth::Wide) };
    let mut context = FakeContext::new(PointerWidth::Wide);
    let caps = Capabilities::load_with(&mut context, &config);

    assert_eq!(caps.pointer_width(), PointerWidth::Wide);
    assert!(caps.gl15.buffer_data.wide().is_set());
    assert!(!caps.gl15.buffer_data.narrow().is_set());
    assert!(caps.gl46.multi_draw_arrays_indirect_count.wide().is_set());
    assert!(!caps.gl46.multi_draw_arrays_indirect_count.narrow().is_set());
    assert!(matches!(caps.gl30.map_buffer_range.variant(), Ok(Variant::Wide(_))));
}

#[test]
fn reload_is_idempotent() {
    let mut context = FakeContext::host().up_to(Version::V3_3).without(&["glTexBuffer"]);
    let mut caps = Capabilities::load(&mut context);

    let flags: Vec<bool> = Version::ALL.iter().map(|v| caps.supports(*v)).collect();
    let addresses: Vec<_> = Version::ALL
        .iter()
        .flat_map(|v| v.symbols())
        .map(|name| caps.proc_address(name))
        .collect();
    let lookups = context.lookups.len();

    caps.reload(&mut context);

    let flags_again: Vec<bool> = Version::ALL.iter().map(|v| caps.supports(*v)).collect();
    let addresses_again: Vec<_> = Version::ALL
        .iter()
        .flat_map(|v| v.symbols())
        .map(|name| caps.proc_address(name))
        .collect();
    assert_eq!(flags, flags_again);
    assert_eq!(addresses, addresses_again);
    assert_eq!(context.lookups.len(), 2 * lookups);
}

#[test]
fn every_symbol_is_looked_up_once_per_load() {
    let mut context = FakeContext::host().up_to(Version::V1_1);
    let _caps = Capabilities::load(&mut context);

    let total: usize = Version::ALL.iter().map(|v| v.symbols().len()).sum();
    assert_eq!(context.lookups.len(), total);
    assert_eq!(context.lookups[0], "glCullFace");
}

#[test]
fn clears_error_once() {
    let mut context = FakeContext::host().up_to(Version::V2_1);
    let mut caps = Capabilities::load(&mut context);
    assert_eq!(context.clear_calls, 1);

    caps.reload(&mut context);
    assert_eq!(context.clear_calls, 2);
}

#[test]
fn capped_load_skips_higher_tiers() {
    let config = LoadConfig::default().max_version(Version::V3_2);
    let mut context = FakeContext::host();
    let caps = Capabilities::load_with(&mut context, &config);

    assert_eq!(caps.max_version(), Some(Version::V3_2));
    assert!(!caps.supports(Version::V3_3));
    assert!(caps.proc_address("glGenSamplers").is_null());
    assert!(context.lookups.iter().all(|name| name != "glGenSamplers"));
    assert_eq!(context.clear_calls, 1);
}

#[test]
fn proc_address_by_name() {
    let mut context = FakeContext::host();
    let caps = Capabilities::load(&mut context);

    assert_eq!(
        caps.proc_address("glBufferData"),
        common::stub("glBufferData", PointerWidth::host())
    );
    assert!(caps.proc_address("glBegin").is_null());
    assert!(caps.proc_address("").is_null());
}
