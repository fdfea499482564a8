//! Legacy classful addressing (Class A to E).
//!
//! Classification looks at the 4 leftmost bits of octet 0:
//!
//! | class | bits   | octet 0  | default mask    |
//! |-------|--------|----------|-----------------|
//! | A     | `0xxx` | 0-127    | `255.0.0.0`     |
//! | B     | `10xx` | 128-191  | `255.255.0.0`   |
//! | C     | `110x` | 192-223  | `255.255.255.0` |
//! | D     | `1110` | 224-239  | `255.0.0.0`     |
//! | E     | `1111` | 240-255  | `255.0.0.0`     |
//!
//! Octet 0 equal to 0 is `Any`.

use super::named_range::NamedRange;
use super::{Address, RangeRegistry};
use crate::error::Result;
use lazy_static::lazy_static;
use serde::Serialize;
use std::fmt;

/// Network class of an address.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NetClassType {
    #[serde(rename = "Class Any")]
    Any,
    #[serde(rename = "Class A")]
    A,
    #[serde(rename = "Class B")]
    B,
    #[serde(rename = "Class C")]
    C,
    #[serde(rename = "Class D")]
    D,
    #[serde(rename = "Class E")]
    E,
}

/// Class per value of `octet0 >> 4`.
const CLASS_BY_LEADING_BITS: [NetClassType; 16] = [
    NetClassType::A,
    NetClassType::A,
    NetClassType::A,
    NetClassType::A,
    NetClassType::A,
    NetClassType::A,
    NetClassType::A,
    NetClassType::A,
    NetClassType::B,
    NetClassType::B,
    NetClassType::B,
    NetClassType::B,
    NetClassType::C,
    NetClassType::C,
    NetClassType::D,
    NetClassType::E,
];

impl NetClassType {
    /// Every class, `Any` first.
    pub const ALL: [NetClassType; 6] = [
        NetClassType::Any,
        NetClassType::A,
        NetClassType::B,
        NetClassType::C,
        NetClassType::D,
        NetClassType::E,
    ];

    /// Class of `addr`, see the module table.
    pub fn classify(addr: &Address) -> NetClassType {
        let octet0 = addr.octets()[0];
        if octet0 == 0 {
            return NetClassType::Any;
        }
        CLASS_BY_LEADING_BITS[usize::from(octet0 >> 4)]
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for NetClassType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NetClassType::Any => "Class Any",
            NetClassType::A => "Class A",
            NetClassType::B => "Class B",
            NetClassType::C => "Class C",
            NetClassType::D => "Class D",
            NetClassType::E => "Class E",
        };
        f.write_str(name)
    }
}

/// Fixed description of one network class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkClass {
    class_type: NetClassType,
    start_cidr: u8,
    default_cidr: u8,
    default_mask: Address,
    ranges: RangeRegistry,
}

lazy_static! {
    static ref DEFAULT_NETWORK_CLASSES: Vec<NetworkClass> = NetClassType::ALL
        .iter()
        .map(|t| NetworkClass::build(*t).expect("Invalid network class literal?"))
        .collect();
}

/// Literal values a [`NetworkClass`] is built from.
struct ClassLiteral {
    start_cidr: u8,
    default_cidr: u8,
    mask: &'static str,
    public: &'static str,
    sub_ranges: &'static [(&'static str, &'static str)],
}

fn class_literal(class_type: NetClassType) -> ClassLiteral {
    match class_type {
        NetClassType::Any => ClassLiteral {
            start_cidr: 1,
            default_cidr: 1,
            mask: "255.255.255.255",
            public: "0.0.0.0 - 255.255.255.255",
            sub_ranges: &[],
        },
        NetClassType::A => ClassLiteral {
            start_cidr: 8,
            default_cidr: 8,
            mask: "255.0.0.0",
            public: "1.0.0.0 - 126.255.255.255",
            sub_ranges: &[
                ("private", "10.0.0.0 - 10.255.255.255"),
                ("special", "127.0.0.0 - 127.255.255.255"),
            ],
        },
        NetClassType::B => ClassLiteral {
            start_cidr: 16,
            default_cidr: 16,
            mask: "255.255.0.0",
            public: "128.0.0.0 - 191.255.255.255",
            sub_ranges: &[("private", "172.16.0.0 - 172.31.255.255")],
        },
        NetClassType::C => ClassLiteral {
            start_cidr: 16,
            default_cidr: 24,
            mask: "255.255.255.0",
            public: "192.0.0.0 - 223.255.255.255",
            sub_ranges: &[("private", "192.168.0.0 - 192.168.255.255")],
        },
        NetClassType::D => ClassLiteral {
            start_cidr: 8,
            default_cidr: 8,
            mask: "255.0.0.0",
            public: "224.0.0.0 - 239.255.255.255",
            sub_ranges: &[],
        },
        NetClassType::E => ClassLiteral {
            start_cidr: 8,
            default_cidr: 8,
            mask: "255.0.0.0",
            public: "240.0.0.0 - 255.255.255.255",
            sub_ranges: &[],
        },
    }
}

impl NetworkClass {
    fn build(class_type: NetClassType) -> Result<NetworkClass> {
        let literal = class_literal(class_type);
        let mut ranges = RangeRegistry::new(literal.public)?;
        for (name, range) in literal.sub_ranges {
            ranges.add(&NamedRange::parse(name, range)?);
        }
        Ok(NetworkClass {
            class_type,
            start_cidr: literal.start_cidr,
            default_cidr: literal.default_cidr,
            default_mask: literal.mask.parse()?,
            ranges,
        })
    }

    /// Shared, read-only record for a class.
    ///
    /// # Examples
    /// ```
    /// use ipv4_subnet_calc::models::{NetClassType, NetworkClass};
    /// let class_c = NetworkClass::default_class(NetClassType::C);
    /// assert_eq!(class_c.default_cidr(), 24);
    /// assert_eq!(class_c.default_mask().to_string(), "255.255.255.0");
    /// ```
    pub fn default_class(class_type: NetClassType) -> &'static NetworkClass {
        &DEFAULT_NETWORK_CLASSES[class_type.index()]
    }

    /// Record of the class `addr` belongs to.
    pub fn of(addr: &Address) -> &'static NetworkClass {
        NetworkClass::default_class(NetClassType::classify(addr))
    }

    pub fn class_type(&self) -> NetClassType {
        self.class_type
    }

    /// Smallest prefix length used in this class.
    pub fn start_cidr(&self) -> u8 {
        self.start_cidr
    }

    /// Prefix length of the classful default mask.
    pub fn default_cidr(&self) -> u8 {
        self.default_cidr
    }

    pub fn default_mask(&self) -> Address {
        self.default_mask
    }

    /// Public range and named sub-ranges of the class.
    pub fn ranges(&self) -> &RangeRegistry {
        &self.ranges
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class_of(text: &str) -> NetClassType {
        NetClassType::classify(&text.parse().unwrap())
    }

    #[test]
    fn test_classify() {
        assert_eq!(class_of("192.168.1.1"), NetClassType::C);
        assert_eq!(class_of("10.0.0.1"), NetClassType::A);
        assert_eq!(class_of("0.0.0.0"), NetClassType::Any);
        assert_eq!(class_of("0.255.1.1"), NetClassType::Any);
        assert_eq!(class_of("240.0.0.1"), NetClassType::E);
        assert_eq!(class_of("127.0.0.1"), NetClassType::A);
        assert_eq!(class_of("128.0.0.1"), NetClassType::B);
        assert_eq!(class_of("191.255.0.1"), NetClassType::B);
        assert_eq!(class_of("223.1.1.1"), NetClassType::C);
        assert_eq!(class_of("224.0.0.1"), NetClassType::D);
        assert_eq!(class_of("239.255.255.255"), NetClassType::D);
        assert_eq!(class_of("255.255.255.255"), NetClassType::E);
    }

    #[test]
    fn test_classify_boundaries() {
        for octet0 in 1..=255u8 {
            let expected = match octet0 {
                1..=127 => NetClassType::A,
                128..=191 => NetClassType::B,
                192..=223 => NetClassType::C,
                224..=239 => NetClassType::D,
                _ => NetClassType::E,
            };
            assert_eq!(
                NetClassType::classify(&Address::new(octet0, 0, 0, 0)),
                expected,
                "octet0 = {octet0}"
            );
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(NetClassType::Any.to_string(), "Class Any");
        assert_eq!(NetClassType::C.to_string(), "Class C");
        assert_eq!(
            serde_json::to_string(&NetClassType::B).unwrap(),
            r#""Class B""#
        );
    }

    #[test]
    fn test_default_classes() {
        let expected = [
            (NetClassType::Any, 1, 1, "255.255.255.255"),
            (NetClassType::A, 8, 8, "255.0.0.0"),
            (NetClassType::B, 16, 16, "255.255.0.0"),
            (NetClassType::C, 16, 24, "255.255.255.0"),
            (NetClassType::D, 8, 8, "255.0.0.0"),
            (NetClassType::E, 8, 8, "255.0.0.0"),
        ];
        for (t, start, default, mask) in expected {
            let class = NetworkClass::default_class(t);
            assert_eq!(class.class_type(), t);
            assert_eq!(class.start_cidr(), start, "{t}");
            assert_eq!(class.default_cidr(), default, "{t}");
            assert_eq!(class.default_mask().to_string(), mask, "{t}");
            assert!(class.ranges().default_range().is_public());
        }
    }

    #[test]
    fn test_class_ranges() {
        let a = NetworkClass::default_class(NetClassType::A);
        assert_eq!(
            a.ranges().default_range().range().to_string(),
            "1.0.0.0 - 126.255.255.255"
        );
        assert_eq!(
            a.ranges().find("private").unwrap().range().to_string(),
            "10.0.0.0 - 10.255.255.255"
        );
        assert_eq!(
            a.ranges().find("special").unwrap().range().to_string(),
            "127.0.0.0 - 127.255.255.255"
        );

        let b = NetworkClass::default_class(NetClassType::B);
        assert_eq!(
            b.ranges().find("private").unwrap().range().to_string(),
            "172.16.0.0 - 172.31.255.255"
        );

        let c = NetworkClass::default_class(NetClassType::C);
        assert_eq!(
            c.ranges().find("private").unwrap().range().to_string(),
            "192.168.0.0 - 192.168.255.255"
        );

        for t in [NetClassType::Any, NetClassType::D, NetClassType::E] {
            let class = NetworkClass::default_class(t);
            assert_eq!(class.ranges().all().len(), 1, "{t}");
            assert!(!class.ranges().has("private"));
        }
    }

    #[test]
    fn test_singleton() {
        let first = NetworkClass::default_class(NetClassType::D);
        let second = NetworkClass::default_class(NetClassType::D);
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_of() {
        let class = NetworkClass::of(&Address::new(172, 16, 0, 1));
        assert_eq!(class.class_type(), NetClassType::B);
        assert_eq!(class.ranges().name_of(&Address::new(172, 16, 0, 1)), Some("private"));
    }
}
