use crc::{Crc, CRC_24_LTE_A};

/// CRC-24Q. Same parameters as the LTE-A catalogue entry: poly 0x864CFB, zero init, no
/// reflection, no output xor.
const CRC24Q: Crc<u32> = Crc::<u32>::new(&CRC_24_LTE_A);

/// Result of checking a message's broadcast check value.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Integrity {
    /// Recomputed value matches the broadcast value.
    Ok,
    /// Recomputed value does not match; the message should be dropped.
    Mismatch { computed: u32, broadcast: u32 },
}

impl Integrity {
    #[must_use]
    pub fn is_ok(&self) -> bool {
        matches!(self, Integrity::Ok)
    }
}

/// Checksum algorithm used to verify a message's check value.
pub trait Checksum: Send + Sync {
    /// Compute the check value over `data`. Only the low 24 bits are compared.
    fn checksum(&self, data: &[u8]) -> u32;
}

/// The CRC-24Q check used by SBAS, QZSS and RTCM3 framing.
#[derive(Debug, Default, Clone, Copy)]
pub struct Crc24q;

impl Checksum for Crc24q {
    fn checksum(&self, data: &[u8]) -> u32 {
        CRC24Q.checksum(data)
    }
}
