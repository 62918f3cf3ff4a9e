//! The capability table: every tier of function slots plus the version flags
//! derived from them.

use std::os::raw::c_void;
use std::ptr;

use crate::resolve::ProcLoader;
use crate::slot::PointerWidth;
use crate::tiers::*;
use crate::version::Version;

/// Options of a table load.
///
/// Width-dependent entry points are bound for the host pointer width unless
/// overridden with the unsafe [`LoadConfig::width`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadConfig {
    width: PointerWidth,
    /// Highest tier to resolve. Tiers above it are left empty and unsupported.
    pub max_version: Option<Version>,
}

impl LoadConfig {
    /// Binds the width-dependent entry points with `width` offsets instead of
    /// the host's.
    ///
    /// # Safety
    ///
    /// Only for loaders whose entry points take offsets of `width`. Every
    /// wrapper called on a table loaded against a native context of another
    /// width passes corrupted offsets and sizes.
    pub unsafe fn width(mut self, width: PointerWidth) -> Self {
        self.width = width;
        self
    }

    pub fn max_version(mut self, version: Version) -> Self {
        self.max_version = Some(version);
        self
    }

    /// Offset width the entry points are bound with.
    pub fn pointer_width(&self) -> PointerWidth {
        self.width
    }
}

/// Resolved entry points of a native context, grouped by the version that
/// introduced them.
///
/// Version flags are monotonic: a tier is supported only if every tier below
/// it is supported too, regardless of what resolved in the tier itself.
#[derive(Default)]
pub struct Capabilities {
    pub gl10: Gl10,
    pub gl11: Gl11,
    pub gl12: Gl12,
    pub gl13: Gl13,
    pub gl14: Gl14,
    pub gl15: Gl15,
    pub gl20: Gl20,
    pub gl21: Gl21,
    pub gl30: Gl30,
    pub gl31: Gl31,
    pub gl32: Gl32,
    pub gl33: Gl33,
    pub gl40: Gl40,
    pub gl41: Gl41,
    pub gl42: Gl42,
    pub gl43: Gl43,
    pub gl44: Gl44,
    pub gl45: Gl45,
    pub gl46: Gl46,
    config: LoadConfig,
    supported: [bool; Version::COUNT],
}

impl Capabilities {
    /// Loads every tier for the host pointer width.
    ///
    /// The native context has to be current on the calling thread.
    pub fn load(loader: &mut dyn ProcLoader) -> Self {
        Self::load_with(loader, &LoadConfig::default())
    }

    pub fn load_with(loader: &mut dyn ProcLoader, config: &LoadConfig) -> Self {
        let mut caps = Capabilities::default();
        caps.load_tiers(loader, config);
        caps
    }

    /// Re-resolves every tier against `loader`, keeping the width and cap the
    /// table was loaded with.
    pub fn reload(&mut self, loader: &mut dyn ProcLoader) {
        let config = self.config;
        self.load_tiers(loader, &config);
    }

    fn load_tiers(&mut self, loader: &mut dyn ProcLoader, config: &LoadConfig) {
        profiling::scope!("Capabilities::load");
        self.config = *config;

        let width = config.width;
        let max_version = config.max_version;
        let mut flags = [false; Version::COUNT];
        let mut previous = true;
        for tier in self.tiers_mut().iter_mut() {
            let version = tier.version();
            let complete = match max_version {
                Some(max) if version > max => {
                    tier.reset();
                    false
                }
                _ => tier.load(loader, width),
            };
            previous = previous && complete;
            flags[version.index()] = previous;
            if complete {
                info!("OpenGL {} entry points resolved", version);
            } else {
                info!(
                    "OpenGL {} incomplete, {} entry points missing",
                    version,
                    tier.missing().len()
                );
            }
        }
        self.supported = flags;

        // failed lookups can leave a stale platform error behind
        loader.clear_error();

        match self.max_version() {
            Some(version) => info!("OpenGL {} supported ({:?} offsets)", version, width),
            None => warn!("No OpenGL version is fully supported by the current context"),
        }
    }

    fn tiers_mut(&mut self) -> [&mut dyn Tier; Version::COUNT] {
        [
            &mut self.gl10,
            &mut self.gl11,
            &mut self.gl12,
            &mut self.gl13,
            &mut self.gl14,
            &mut self.gl15,
            &mut self.gl20,
            &mut self.gl21,
            &mut self.gl30,
            &mut self.gl31,
            &mut self.gl32,
            &mut self.gl33,
            &mut self.gl40,
            &mut self.gl41,
            &mut self.gl42,
            &mut self.gl43,
            &mut self.gl44,
            &mut self.gl45,
            &mut self.gl46,
        ]
    }

    fn tier(&self, version: Version) -> &dyn Tier {
        use crate::version::Version::*;
        match version {
            V1_0 => &self.gl10,
            V1_1 => &self.gl11,
            V1_2 => &self.gl12,
            V1_3 => &self.gl13,
            V1_4 => &self.gl14,
            V1_5 => &self.gl15,
            V2_0 => &self.gl20,
            V2_1 => &self.gl21,
            V3_0 => &self.gl30,
            V3_1 => &self.gl31,
            V3_2 => &self.gl32,
            V3_3 => &self.gl33,
            V4_0 => &self.gl40,
            V4_1 => &self.gl41,
            V4_2 => &self.gl42,
            V4_3 => &self.gl43,
            V4_4 => &self.gl44,
            V4_5 => &self.gl45,
            V4_6 => &self.gl46,
        }
    }

    /// Whether `version` and every version below it is fully available.
    pub fn supports(&self, version: Version) -> bool {
        self.supported[version.index()]
    }

    /// Highest fully supported version.
    pub fn max_version(&self) -> Option<Version> {
        Version::ALL
            .iter()
            .rev()
            .find(|v| self.supports(**v))
            .cloned()
    }

    /// Unresolved entry points of `version` and every version below it.
    pub fn missing(&self, version: Version) -> Vec<&'static str> {
        Version::ALL
            .iter()
            .take_while(|v| **v <= version)
            .flat_map(|v| self.tier(*v).missing())
            .collect()
    }

    /// Cached address of the entry point `name`, null if it's unknown or unresolved.
    pub fn proc_address(&self, name: &str) -> *const c_void {
        Version::introducing(name)
            .and_then(|version| self.tier(version).address_of(name))
            .unwrap_or(ptr::null())
    }

    pub fn pointer_width(&self) -> PointerWidth {
        self.config.width
    }

    pub fn config(&self) -> &LoadConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CStr;

    extern "system" fn stub() {}

    fn everything(_: &CStr) -> *const c_void {
        stub as extern "system" fn() as *const c_void
    }

    #[test]
    fn default_width_is_host() {
        assert_eq!(LoadConfig::default().pointer_width(), PointerWidth::host());
        let capped = LoadConfig::default().max_version(Version::V2_1);
        assert_eq!(capped.pointer_width(), PointerWidth::host());
    }

    #[test]
    fn width_override() {
        let other = match PointerWidth::host() {
            PointerWidth::Narrow => PointerWidth::Wide,
            PointerWidth::Wide => PointerWidth::Narrow,
        };
        let config = unsafe { LoadConfig::default().width(other) };
        assert_eq!(config.pointer_width(), other);

        let mut caps = Capabilities::load_with(&mut everything, &config);
        assert_eq!(caps.pointer_width(), other);
        caps.reload(&mut everything);
        assert_eq!(caps.pointer_width(), other);
        assert!(match other {
            PointerWidth::Narrow => caps.gl15.buffer_data.narrow().is_set(),
            PointerWidth::Wide => caps.gl15.buffer_data.wide().is_set(),
        });
    }

    #[test]
    fn default_table_is_empty() {
        let caps = Capabilities::default();
        assert_eq!(caps.max_version(), None);
        assert!(!caps.supports(Version::V1_0));
        assert!(caps.proc_address("glClear").is_null());
        assert_eq!(caps.missing(Version::V1_0).len(), Gl10::SYMBOLS.len());
    }

    #[test]
    fn full_context() {
        let caps = Capabilities::load(&mut everything);
        assert_eq!(caps.max_version(), Some(Version::V4_6));
        assert!(Version::ALL.iter().all(|v| caps.supports(*v)));
        assert!(caps.missing(Version::V4_6).is_empty());
        assert!(!caps.proc_address("glSpecializeShader").is_null());
        assert!(caps.proc_address("glBegin").is_null());
        assert_eq!(caps.pointer_width(), PointerWidth::host());
    }

    #[test]
    fn capped_reload_keeps_cap() {
        let config = LoadConfig::default().max_version(Version::V3_3);
        let mut caps = Capabilities::load_with(&mut everything, &config);
        assert_eq!(caps.max_version(), Some(Version::V3_3));
        assert!(caps.proc_address("glDispatchCompute").is_null());

        caps.reload(&mut everything);
        assert_eq!(caps.max_version(), Some(Version::V3_3));
    }
}
