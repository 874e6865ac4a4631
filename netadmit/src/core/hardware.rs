//! Textual hardware address grammars: MAC (IEEE 802 / EUI-64 / IPoIB) and
//! PCI (`domain:bus:slot.function`).

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

/// Byte lengths accepted by the MAC grammar: MAC-48, EUI-64, IPoIB.
const MAC_LENGTHS: [usize; 3] = [6, 8, 20];

/// Shortest textual MAC form (`xxxx.xxxx.xxxx`).
const MAC_MIN_TEXT_LEN: usize = 14;

static PCI_ADDRESS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9a-fA-F]{4}):([0-9a-fA-F]{2}):([0-9a-fA-F]{2})\.([0-7])$")
        .expect("PCI address pattern compiles")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HardwareAddrError {
    Mac(String),
    Pci(String),
}

impl fmt::Display for HardwareAddrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HardwareAddrError::Mac(raw) => write!(f, "invalid MAC address {}", raw),
            HardwareAddrError::Pci(raw) => write!(f, "failed to parse pci address {}", raw),
        }
    }
}

impl std::error::Error for HardwareAddrError {}

/// Parsed link-layer address. Not limited to 6 bytes; callers check length.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MacAddress(Vec<u8>);

impl MacAddress {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromStr for MacAddress {
    type Err = HardwareAddrError;

    /// Accepts `xx:xx:..`, `xx-xx-..` and `xxxx.xxxx.xxxx..` forms of 6, 8
    /// or 20 bytes.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || HardwareAddrError::Mac(s.to_string());
        let raw = s.as_bytes();
        if raw.len() < MAC_MIN_TEXT_LEN {
            return Err(malformed());
        }

        let mut bytes = Vec::new();
        if raw[2] == b':' || raw[2] == b'-' {
            if (raw.len() + 1) % 3 != 0 {
                return Err(malformed());
            }
            let count = (raw.len() + 1) / 3;
            if !MAC_LENGTHS.contains(&count) {
                return Err(malformed());
            }
            let sep = raw[2];
            for i in 0..count {
                let at = i * 3;
                bytes.push(hex_octet(&raw[at..at + 2]).ok_or_else(malformed)?);
                if i + 1 < count && raw[at + 2] != sep {
                    return Err(malformed());
                }
            }
        } else if raw[4] == b'.' {
            if (raw.len() + 1) % 5 != 0 {
                return Err(malformed());
            }
            let count = 2 * (raw.len() + 1) / 5;
            if !MAC_LENGTHS.contains(&count) {
                return Err(malformed());
            }
            let groups = count / 2;
            for g in 0..groups {
                let at = g * 5;
                bytes.push(hex_octet(&raw[at..at + 2]).ok_or_else(malformed)?);
                bytes.push(hex_octet(&raw[at + 2..at + 4]).ok_or_else(malformed)?);
                if g + 1 < groups && raw[at + 4] != b'.' {
                    return Err(malformed());
                }
            }
        } else {
            return Err(malformed());
        }

        Ok(Self(bytes))
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, byte) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(":")?;
            }
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

/// Two ASCII hex digits to a byte.
fn hex_octet(pair: &[u8]) -> Option<u8> {
    let hi = (pair[0] as char).to_digit(16)?;
    let lo = (pair[1] as char).to_digit(16)?;
    u8::try_from(hi * 16 + lo).ok()
}

/// PCI function address on a host bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PciAddress {
    pub domain: u16,
    pub bus: u8,
    pub slot: u8,
    pub function: u8,
}

impl FromStr for PciAddress {
    type Err = HardwareAddrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || HardwareAddrError::Pci(s.to_string());
        let caps = PCI_ADDRESS_RE.captures(s).ok_or_else(malformed)?;
        let field = |idx: usize| caps.get(idx).map(|m| m.as_str()).ok_or_else(malformed);

        Ok(Self {
            domain: u16::from_str_radix(field(1)?, 16).map_err(|_| malformed())?,
            bus: u8::from_str_radix(field(2)?, 16).map_err(|_| malformed())?,
            slot: u8::from_str_radix(field(3)?, 16).map_err(|_| malformed())?,
            function: u8::from_str_radix(field(4)?, 16).map_err(|_| malformed())?,
        })
    }
}

impl fmt::Display for PciAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04x}:{:02x}:{:02x}.{:x}",
            self.domain, self.bus, self.slot, self.function
        )
    }
}
