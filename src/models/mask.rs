//! Subnet mask generation from a prefix length.

use super::Address;
use crate::error::{Result, SubnetError};

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Smallest prefix length a mask can be built from.
pub const MIN_LENGTH: u8 = 1;

/// Convert a prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use ipv4_subnet_calc::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32> {
    if !(MIN_LENGTH..=MAX_LENGTH).contains(&len) {
        Err(SubnetError::InvalidPrefix {
            value: u32::from(len),
            min: MIN_LENGTH,
            max: MAX_LENGTH,
        })
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Builds subnet masks: a run of `n` one bits followed by `32 - n` zeros.
pub struct SubnetMask;

impl SubnetMask {
    /// Mask [`Address`] for a prefix length in 1-32.
    ///
    /// # Examples
    /// ```
    /// use ipv4_subnet_calc::models::SubnetMask;
    /// let mask = SubnetMask::from_prefix_len(20).unwrap();
    /// assert_eq!(mask.to_string(), "255.255.240.0");
    /// ```
    pub fn from_prefix_len(len: u8) -> Result<Address> {
        get_cidr_mask(len).map(Address::from)
    }

    /// Number of leading one bits of `mask`.
    ///
    /// The mask is not checked to be canonical, bits after the first zero
    /// are ignored.
    pub fn prefix_len(mask: &Address) -> u8 {
        mask.value().leading_ones() as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_cidr_mask() {
        assert_eq!(get_cidr_mask(1).unwrap(), 0x80000000);
        assert_eq!(get_cidr_mask(8).unwrap(), 0xFF000000);
        assert_eq!(get_cidr_mask(16).unwrap(), 0xFFFF0000);
        assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
        assert_eq!(get_cidr_mask(32).unwrap(), 0xFFFFFFFF);
        assert!(get_cidr_mask(0).is_err());
        assert!(get_cidr_mask(33).is_err());
    }

    #[test]
    fn test_from_prefix_len() {
        assert_eq!(
            SubnetMask::from_prefix_len(8).unwrap(),
            Address::new(255, 0, 0, 0)
        );
        assert_eq!(
            SubnetMask::from_prefix_len(30).unwrap(),
            Address::new(255, 255, 255, 252)
        );
        assert_eq!(
            SubnetMask::from_prefix_len(32).unwrap(),
            Address::BROADCAST
        );
        assert_eq!(
            SubnetMask::from_prefix_len(33).unwrap_err(),
            SubnetError::InvalidPrefix {
                value: 33,
                min: 1,
                max: 32
            }
        );
    }

    #[test]
    fn test_leading_ones_for_every_prefix() {
        for n in 1..=32u8 {
            let bits = SubnetMask::from_prefix_len(n).unwrap().binary();
            let ones = "1".repeat(n as usize);
            let zeros = "0".repeat(32 - n as usize);
            assert_eq!(bits, format!("{ones}{zeros}"), "prefix /{n}");
            assert_eq!(
                SubnetMask::prefix_len(&SubnetMask::from_prefix_len(n).unwrap()),
                n
            );
        }
    }

    #[test]
    fn test_double_not_is_identity() {
        let mask = SubnetMask::from_prefix_len(24).unwrap();
        assert_eq!(mask.bitwise_not().bitwise_not(), mask);
    }
}
