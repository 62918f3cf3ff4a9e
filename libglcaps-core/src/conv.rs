use std::convert::TryFrom;

use crate::error::{Error, Result};
use crate::{GLboolean, GL_FALSE, GL_TRUE};

/// Converts a 64-bit offset or size into the 32-bit form taken by the narrow
/// entry point variants.
pub fn narrow(name: &'static str, value: i64) -> Result<i32> {
    i32::try_from(value).map_err(|_| Error::InvalidValue { name, value })
}

/// Narrows every element of an offset or size array.
pub fn narrow_all(name: &'static str, values: &[i64]) -> Result<Vec<i32>> {
    values.iter().map(|&value| narrow(name, value)).collect()
}

pub fn bool_from_gl(value: GLboolean) -> bool {
    value != GL_FALSE
}

pub fn gl_from_bool(value: bool) -> GLboolean {
    if value {
        GL_TRUE
    } else {
        GL_FALSE
    }
}

/// Checks that a parallel argument array matches the leading one.
pub(crate) fn check_len(expected: usize, found: usize) -> Result<()> {
    if expected == found {
        Ok(())
    } else {
        Err(Error::LengthMismatch { expected, found })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_bounds() {
        assert_eq!(narrow("size", 0), Ok(0));
        assert_eq!(narrow("size", i32::MAX as i64), Ok(i32::MAX));
        assert_eq!(narrow("offset", i32::MIN as i64), Ok(i32::MIN));
        assert_eq!(
            narrow("size", i32::MAX as i64 + 1),
            Err(Error::InvalidValue {
                name: "size",
                value: i32::MAX as i64 + 1,
            })
        );
        assert!(narrow("offset", i32::MIN as i64 - 1).is_err());
    }

    #[test]
    fn narrow_all_stops_at_first_bad_value() {
        assert_eq!(narrow_all("offsets", &[0, 16, 32]), Ok(vec![0, 16, 32]));
        assert_eq!(
            narrow_all("offsets", &[0, 1 << 33, -(1 << 40)]),
            Err(Error::InvalidValue {
                name: "offsets",
                value: 1 << 33,
            })
        );
        assert_eq!(narrow_all("offsets", &[]), Ok(Vec::new()));
    }

    #[test]
    fn booleans() {
        assert!(!bool_from_gl(GL_FALSE));
        assert!(bool_from_gl(GL_TRUE));
        // drivers may return any non-zero value
        assert!(bool_from_gl(0xFF));
        assert_eq!(gl_from_bool(true), GL_TRUE);
        assert_eq!(gl_from_bool(false), GL_FALSE);
    }

    #[test]
    fn lengths() {
        assert_eq!(check_len(3, 3), Ok(()));
        assert_eq!(
            check_len(3, 2),
            Err(Error::LengthMismatch {
                expected: 3,
                found: 2,
            })
        );
    }
}
