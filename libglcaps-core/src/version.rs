use fxhash::FxHashMap;
use thiserror::Error;

use std::fmt;
use std::str::FromStr;

use crate::tiers::*;

/// OpenGL version tiers, in ascending order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Version {
    V1_0,
    V1_1,
    V1_2,
    V1_3,
    V1_4,
    V1_5,
    V2_0,
    V2_1,
    V3_0,
    V3_1,
    V3_2,
    V3_3,
    V4_0,
    V4_1,
    V4_2,
    V4_3,
    V4_4,
    V4_5,
    V4_6,
}

impl Version {
    pub const COUNT: usize = 19;

    pub const ALL: [Version; Version::COUNT] = [
        Version::V1_0,
        Version::V1_1,
        Version::V1_2,
        Version::V1_3,
        Version::V1_4,
        Version::V1_5,
        Version::V2_0,
        Version::V2_1,
        Version::V3_0,
        Version::V3_1,
        Version::V3_2,
        Version::V3_3,
        Version::V4_0,
        Version::V4_1,
        Version::V4_2,
        Version::V4_3,
        Version::V4_4,
        Version::V4_5,
        Version::V4_6,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn major(self) -> u32 {
        self.parts().0
    }

    pub fn minor(self) -> u32 {
        self.parts().1
    }

    fn parts(self) -> (u32, u32) {
        use self::Version::*;
        match self {
            V1_0 => (1, 0),
            V1_1 => (1, 1),
            V1_2 => (1, 2),
            V1_3 => (1, 3),
            V1_4 => (1, 4),
            V1_5 => (1, 5),
            V2_0 => (2, 0),
            V2_1 => (2, 1),
            V3_0 => (3, 0),
            V3_1 => (3, 1),
            V3_2 => (3, 2),
            V3_3 => (3, 3),
            V4_0 => (4, 0),
            V4_1 => (4, 1),
            V4_2 => (4, 2),
            V4_3 => (4, 3),
            V4_4 => (4, 4),
            V4_5 => (4, 5),
            V4_6 => (4, 6),
        }
    }

    pub fn from_parts(major: u32, minor: u32) -> Option<Version> {
        Version::ALL
            .iter()
            .cloned()
            .find(|v| v.parts() == (major, minor))
    }

    /// The tier this one builds on, `None` for 1.0.
    pub fn previous(self) -> Option<Version> {
        match self.index() {
            0 => None,
            i => Some(Version::ALL[i - 1]),
        }
    }

    /// Entry points introduced by this tier.
    pub fn symbols(self) -> &'static [&'static str] {
        use self::Version::*;
        match self {
            V1_0 => Gl10::SYMBOLS,
            V1_1 => Gl11::SYMBOLS,
            V1_2 => Gl12::SYMBOLS,
            V1_3 => Gl13::SYMBOLS,
            V1_4 => Gl14::SYMBOLS,
            V1_5 => Gl15::SYMBOLS,
            V2_0 => Gl20::SYMBOLS,
            V2_1 => Gl21::SYMBOLS,
            V3_0 => Gl30::SYMBOLS,
            V3_1 => Gl31::SYMBOLS,
            V3_2 => Gl32::SYMBOLS,
            V3_3 => Gl33::SYMBOLS,
            V4_0 => Gl40::SYMBOLS,
            V4_1 => Gl41::SYMBOLS,
            V4_2 => Gl42::SYMBOLS,
            V4_3 => Gl43::SYMBOLS,
            V4_4 => Gl44::SYMBOLS,
            V4_5 => Gl45::SYMBOLS,
            V4_6 => Gl46::SYMBOLS,
        }
    }

    /// The tier that introduced the entry point `name`.
    pub fn introducing(name: &str) -> Option<Version> {
        SYMBOL_TIERS.get(name).cloned()
    }
}

lazy_static! {
    static ref SYMBOL_TIERS: FxHashMap<&'static str, Version> = {
        let mut map = FxHashMap::default();
        for &version in Version::ALL.iter() {
            for &name in version.symbols() {
                map.insert(name, version);
            }
        }
        map
    };
}

impl fmt::Display for Version {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "{}.{}", self.major(), self.minor())
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown OpenGL version `{0}`")]
pub struct ParseVersionError(String);

impl FromStr for Version {
    type Err = ParseVersionError;

    /// Accepts `major.minor` with an optional release number, e.g. `4.6.0`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseVersionError(s.to_string());
        let mut parts = s.trim().split('.');
        let major = parts.next().and_then(|p| p.parse().ok()).ok_or_else(err)?;
        let minor = parts.next().and_then(|p| p.parse().ok()).ok_or_else(err)?;
        match parts.next() {
            Some(release) if release.parse::<u32>().is_err() => return Err(err()),
            _ => {}
        }
        if parts.next().is_some() {
            return Err(err());
        }
        Version::from_parts(major, minor).ok_or_else(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordered_and_indexed() {
        for (i, pair) in Version::ALL.windows(2).enumerate() {
            assert!(pair[0] < pair[1]);
            assert_eq!(pair[0].index(), i);
            assert_eq!(pair[1].previous(), Some(pair[0]));
        }
        assert_eq!(Version::V1_0.previous(), None);
    }

    #[test]
    fn parse() {
        assert_eq!("4.6".parse::<Version>(), Ok(Version::V4_6));
        assert_eq!("3.3.0".parse::<Version>(), Ok(Version::V3_3));
        assert_eq!(" 2.1 ".parse::<Version>(), Ok(Version::V2_1));
        assert!("4.7".parse::<Version>().is_err());
        assert!("4".parse::<Version>().is_err());
        assert!("4.6.x".parse::<Version>().is_err());
        assert_eq!(
            "9.9".parse::<Version>().unwrap_err().to_string(),
            "unknown OpenGL version `9.9`"
        );
        assert_eq!(Version::V4_5.to_string(), "4.5");
    }

    #[test]
    fn introducing_tier() {
        assert_eq!(Version::introducing("glBufferData"), Some(Version::V1_5));
        assert_eq!(Version::introducing("glMapBufferRange"), Some(Version::V3_0));
        assert_eq!(Version::introducing("glSpecializeShader"), Some(Version::V4_6));
        assert_eq!(Version::introducing("glClear"), Some(Version::V1_0));
        assert_eq!(Version::introducing("glBegin"), None);
    }

    #[test]
    fn symbols_are_unique() {
        let total: usize = Version::ALL.iter().map(|v| v.symbols().len()).sum();
        assert_eq!(SYMBOL_TIERS.len(), total);
    }
}
