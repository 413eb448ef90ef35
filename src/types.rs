//! Core MXF value types.

use crate::ul::UniversalLabel;
use std::fmt;

/// Opaque identity used for instance UIDs, package UMIDs, and strong
/// references.
///
/// Stores either 16 bytes (a UL/AUID or instance UID) or 32 bytes (a SMPTE
/// UMID). Equality and hashing cover the full stored length; a 32-byte UMID
/// is never silently truncated to 16.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct MxfUid {
    len: u8,
    bytes: [u8; 32],
}

impl MxfUid {
    /// Create from a 16-byte identifier.
    pub fn from_ul(ul: [u8; 16]) -> Self {
        let mut bytes = [0u8; 32];
        bytes[..16].copy_from_slice(&ul);
        MxfUid { len: 16, bytes }
    }

    /// Create from a 32-byte UMID.
    pub fn from_umid(umid: [u8; 32]) -> Self {
        MxfUid {
            len: 32,
            bytes: umid,
        }
    }

    /// Create from a slice of 16 or 32 bytes.
    pub fn from_bytes(data: &[u8]) -> Option<Self> {
        match data.len() {
            16 | 32 => {
                let mut bytes = [0u8; 32];
                bytes[..data.len()].copy_from_slice(data);
                Some(MxfUid {
                    len: data.len() as u8,
                    bytes,
                })
            }
            _ => None,
        }
    }

    /// Raw bytes of the identifier.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }

    /// Stored length in bytes (16 or 32).
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Never empty; present for clippy symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// True when this is a 32-byte UMID.
    pub fn is_umid(&self) -> bool {
        self.len == 32
    }

    /// The material-number portion (last 16 bytes) of a 32-byte UMID.
    pub fn material_number(&self) -> Option<MxfUid> {
        if self.len != 32 {
            return None;
        }
        let mut ul = [0u8; 16];
        ul.copy_from_slice(&self.bytes[16..32]);
        Some(MxfUid::from_ul(ul))
    }
}

impl fmt::Debug for MxfUid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MXFUid(")?;
        for byte in self.as_bytes() {
            write!(f, "{:02x}", byte)?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for MxfUid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x")?;
        for byte in self.as_bytes() {
            write!(f, "{:02X}", byte)?;
        }
        Ok(())
    }
}

impl From<[u8; 16]> for MxfUid {
    fn from(bytes: [u8; 16]) -> Self {
        MxfUid::from_ul(bytes)
    }
}

impl From<[u8; 32]> for MxfUid {
    fn from(bytes: [u8; 32]) -> Self {
        MxfUid::from_umid(bytes)
    }
}

/// Rational number used for edit rates and sample rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rational {
    pub numerator: i32,
    pub denominator: i32,
}

impl Rational {
    /// Create a new rational.
    pub fn new(numerator: i32, denominator: i32) -> Self {
        Rational {
            numerator,
            denominator,
        }
    }

    /// Convert to f64.
    pub fn to_f64(&self) -> f64 {
        if self.denominator == 0 {
            0.0
        } else {
            self.numerator as f64 / self.denominator as f64
        }
    }
}

impl Default for Rational {
    fn default() -> Self {
        Rational::new(1, 1)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// SMPTE timestamp, stored as 8 bytes on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MxfTimestamp {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    /// Fraction of a second in 1/250 units.
    pub fraction: u8,
}

impl MxfTimestamp {
    /// Parse from the 8-byte wire format.
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < 8 {
            return None;
        }
        Some(MxfTimestamp {
            year: u16::from_be_bytes([bytes[0], bytes[1]]),
            month: bytes[2],
            day: bytes[3],
            hour: bytes[4],
            minute: bytes[5],
            second: bytes[6],
            fraction: bytes[7],
        })
    }

    /// Convert to the 8-byte wire format.
    pub fn to_bytes(&self) -> [u8; 8] {
        let year = self.year.to_be_bytes();
        [
            year[0],
            year[1],
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
            self.fraction,
        ]
    }
}

impl fmt::Display for MxfTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

/// Decoded batch of strong references (instance UIDs).
#[derive(Debug, Clone, Default)]
pub struct RefBatch {
    pub items: Vec<MxfUid>,
}

impl RefBatch {
    /// Number of references.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the batch holds no references.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Decoded batch of Universal Labels.
#[derive(Debug, Clone, Default)]
pub struct UlBatch {
    pub items: Vec<UniversalLabel>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uid_lengths() {
        let short = MxfUid::from_ul([1u8; 16]);
        assert_eq!(short.len(), 16);
        assert!(!short.is_umid());
        assert!(short.material_number().is_none());

        let long = MxfUid::from_umid([2u8; 32]);
        assert_eq!(long.len(), 32);
        assert!(long.is_umid());
    }

    #[test]
    fn test_uid_no_truncated_equality() {
        let mut umid = [0u8; 32];
        umid[..16].copy_from_slice(&[3u8; 16]);
        let long = MxfUid::from_umid(umid);
        let short = MxfUid::from_ul([3u8; 16]);
        assert_ne!(long, short);
    }

    #[test]
    fn test_uid_material_number() {
        let mut umid = [0u8; 32];
        umid[16..].copy_from_slice(&[9u8; 16]);
        let uid = MxfUid::from_umid(umid);
        assert_eq!(uid.material_number().unwrap(), MxfUid::from_ul([9u8; 16]));
    }

    #[test]
    fn test_uid_from_bytes() {
        assert!(MxfUid::from_bytes(&[0u8; 16]).is_some());
        assert!(MxfUid::from_bytes(&[0u8; 32]).is_some());
        assert!(MxfUid::from_bytes(&[0u8; 20]).is_none());
    }

    #[test]
    fn test_rational() {
        let r = Rational::new(30000, 1001);
        assert!((r.to_f64() - 29.97).abs() < 0.01);

        let zero_denom = Rational::new(1, 0);
        assert_eq!(zero_denom.to_f64(), 0.0);
    }

    #[test]
    fn test_timestamp_roundtrip() {
        let ts = MxfTimestamp {
            year: 2015,
            month: 6,
            day: 15,
            hour: 14,
            minute: 30,
            second: 45,
            fraction: 50,
        };
        let parsed = MxfTimestamp::from_bytes(&ts.to_bytes()).unwrap();
        assert_eq!(ts, parsed);
    }

    #[test]
    fn test_timestamp_short_input() {
        assert!(MxfTimestamp::from_bytes(&[0u8; 7]).is_none());
    }
}
