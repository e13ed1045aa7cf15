//! SBAS message frame decoding.
//!
//! A frame is delivered as 10 words. Words 0 through 6 carry 32 payload bits each,
//! most significant byte first. Word 7 carries the final 2 payload bits in bits
//! 25..24 and the 24-bit CRC-24Q check value in bits 23..0. The 226 payload bits
//! are the 8-bit preamble, the 6-bit message type and 212 data bits.
//!
//! References:
//! * RTCA DO-229, Minimum Operational Performance Standards for GPS/WAAS Airborne Equipment
//! * IS-QZSS, Quasi-Zenith Satellite System Interface Specification
mod integrity;

pub use integrity::*;

use std::fmt;

use hifitime::{Duration, Epoch, Unit};
use tracing::{debug, trace};

use crate::prelude::*;
use crate::timecode::{GpsClock, GpsTime, Gpst};

/// SBAS satellite PRN number.
pub type Prn = u8;

/// Raw frame words as delivered by a receiver.
pub type Words = [u32; 10];

/// Number of payload bytes, the last of which only uses its top 2 bits.
pub const PAYLOAD_LEN: usize = 29;
/// Number of significant payload bits, excluding the check value.
pub const PAYLOAD_BITS: usize = 226;
/// Preamble values; consecutive messages rotate through these.
pub const PREAMBLES: [u8; 3] = [0x53, 0x9A, 0xC6];

const CHECK_MASK: u32 = 0x00FF_FFFF;

/// A decoded, time-stamped SBAS message.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedMessage {
    pub prn: Prn,
    /// GPS week of reception.
    pub week: u32,
    /// GPS time of week of reception, in whole seconds.
    pub tow: u32,
    pub payload: [u8; PAYLOAD_LEN],
}

impl DecodedMessage {
    #[must_use]
    pub fn preamble(&self) -> u8 {
        self.payload[0]
    }

    #[must_use]
    pub fn has_valid_preamble(&self) -> bool {
        PREAMBLES.contains(&self.preamble())
    }

    /// The 6-bit message type following the preamble.
    #[must_use]
    pub fn message_type(&self) -> u8 {
        self.bits(8, 6) as u8
    }

    /// Read `len` bits, MSB first, starting at bit `pos` of the payload.
    ///
    /// At most 32 bits are read. Bits beyond the 226 payload bits read as zero.
    #[must_use]
    pub fn bits(&self, pos: usize, len: usize) -> u32 {
        let end = pos.saturating_add(len.min(32));
        let mut val = 0u32;
        for i in pos..end {
            let bit = if i < PAYLOAD_BITS {
                (self.payload[i / 8] >> (7 - i % 8)) & 1
            } else {
                0
            };
            val = (val << 1) | u32::from(bit);
        }
        val
    }

    #[must_use]
    pub fn gps_time(&self) -> GpsTime {
        GpsTime {
            week: self.week,
            tow: self.tow,
        }
    }
}

impl fmt::Display for DecodedMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "prn={} week={} tow={} type={} payload=",
            self.prn,
            self.week,
            self.tow,
            self.message_type()
        )?;
        for b in &self.payload {
            write!(f, "{b:02x}")?;
        }
        Ok(())
    }
}

/// Extract the payload bytes from frame `words`.
///
/// The low 6 bits of the last byte are always zero.
#[must_use]
pub fn payload(words: &Words) -> [u8; PAYLOAD_LEN] {
    let mut msg = [0u8; PAYLOAD_LEN];
    for (i, word) in words[..7].iter().enumerate() {
        msg[i * 4..i * 4 + 4].copy_from_slice(&word.to_be_bytes());
    }
    msg[28] = ((words[7] >> 18) as u8) & 0xC0;
    msg
}

/// Shift the 226 payload bits right by 6 so they end on a byte boundary, which is the
/// layout the check value is computed over.
#[must_use]
pub fn realign(payload: &[u8; PAYLOAD_LEN]) -> [u8; PAYLOAD_LEN] {
    let mut buf = [0u8; PAYLOAD_LEN];
    for i in (1..PAYLOAD_LEN).rev() {
        buf[i] = (payload[i] >> 6) | (payload[i - 1] << 2);
    }
    buf[0] = payload[0] >> 6;
    buf
}

/// Decodes SBAS frame words into [DecodedMessage]s.
///
/// # Examples
/// ```
/// use hifitime::{Epoch, TimeScale};
/// use sbas::message::{Crc24q, Decoder};
/// use sbas::timecode::Gpst;
///
/// let decoder = Decoder::default()
///     .with_checksum(Box::new(Crc24q))
///     .with_clock(Box::new(Gpst));
/// let reception = Epoch::from_time_of_week(2200, 0, TimeScale::GPST);
/// let (msg, integrity) = decoder.decode(Some(reception), 129, &[0u32; 10]).unwrap();
///
/// assert_eq!(msg.week, 2200);
/// // an all-zero frame has an all-zero check value
/// assert!(integrity.is_ok());
/// ```
pub struct Decoder {
    checksum: Box<dyn Checksum>,
    clock: Box<dyn GpsClock>,
    tow_tolerance: Duration,
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder {
    /// Default time-of-week rounding tolerance, in milliseconds.
    pub const DEFAULT_TOW_TOLERANCE_MS: i64 = 25;

    #[must_use]
    pub fn new() -> Self {
        Decoder {
            checksum: Box::new(Crc24q),
            clock: Box::new(Gpst),
            tow_tolerance: Unit::Millisecond * Self::DEFAULT_TOW_TOLERANCE_MS,
        }
    }

    #[must_use]
    pub fn with_checksum(mut self, checksum: Box<dyn Checksum>) -> Self {
        self.checksum = checksum;
        self
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Box<dyn GpsClock>) -> Self {
        self.clock = clock;
        self
    }

    /// Set the tolerance added to the time of week before truncating to whole seconds.
    #[must_use]
    pub fn with_tow_tolerance(mut self, tolerance: Duration) -> Self {
        self.tow_tolerance = tolerance;
        self
    }

    /// Decode frame `words` received from `prn` at `reception`.
    ///
    /// A check value mismatch is not an error here; it is reported as the returned
    /// [Integrity] and the payload is still provided.
    ///
    /// # Errors
    /// [Error::UnsetTime] if `reception` is `None` or cannot be converted to GPS time.
    pub fn decode(
        &self,
        reception: Option<Epoch>,
        prn: Prn,
        words: &Words,
    ) -> Result<(DecodedMessage, Integrity)> {
        trace!(prn, "decoding sbas message");
        let Some(reception) = reception else {
            return Err(Error::UnsetTime);
        };
        let (week, nanos) = self.clock.week_and_nanos(reception)?;
        let time = GpsTime::from_week_nanos(week, nanos, self.tow_tolerance);

        let payload = payload(words);
        let computed = self.checksum.checksum(&realign(&payload)) & CHECK_MASK;
        let broadcast = words[7] & CHECK_MASK;

        let integrity = if computed == broadcast {
            Integrity::Ok
        } else {
            debug!(prn, computed, broadcast, "check value mismatch");
            Integrity::Mismatch {
                computed,
                broadcast,
            }
        };

        Ok((
            DecodedMessage {
                prn,
                week: time.week,
                tow: time.tow,
                payload,
            },
            integrity,
        ))
    }

    /// Like [Decoder::decode] but only produces messages that pass the integrity check.
    ///
    /// # Errors
    /// [Error::UnsetTime] as for [Decoder::decode], or [Error::IntegrityMismatch] if
    /// the check value does not match.
    pub fn decode_valid(
        &self,
        reception: Option<Epoch>,
        prn: Prn,
        words: &Words,
    ) -> Result<DecodedMessage> {
        match self.decode(reception, prn, words)? {
            (msg, Integrity::Ok) => Ok(msg),
            (_, Integrity::Mismatch { computed, broadcast }) => {
                Err(Error::IntegrityMismatch { computed, broadcast })
            }
        }
    }
}

/// Decode frame `words` using a default [Decoder].
///
/// # Errors
/// See [Decoder::decode].
pub fn decode(
    reception: Option<Epoch>,
    prn: Prn,
    words: &Words,
) -> Result<(DecodedMessage, Integrity)> {
    Decoder::default().decode(reception, prn, words)
}
