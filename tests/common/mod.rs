#![allow(dead_code)]
use hifitime::{Epoch, TimeScale};
use sbas::message::Words;

/// Message type 18 (IGP mask) frame from PRN 129 with a correct CRC-24Q.
pub const MT18_WORDS: Words = [
    0x5348_c966,
    0xd64d_ccba,
    0xce59_ee76,
    0x80dc_d6ae,
    0xbdbe_de0e,
    0x2429_cdea,
    0x0d49_62c6,
    0x030f_06a4,
    0,
    0,
];

/// Payload bytes of [MT18_WORDS].
pub const MT18_PAYLOAD_HEX: &str = "5348c966d64dccbace59ee7680dcd6aebdbede0e2429cdea0d4962c6c0";

/// Realigned payload of [MT18_WORDS], the input to the check value.
pub const MT18_REALIGNED_HEX: &str =
    "014d23259b593732eb3967b9da03735abaf6fb783890a737a835258b1b";

pub const MT18_CRC: u32 = 0x000f_06a4;

pub const PRN: u8 = 129;

/// GPS week 2200, 345600.2 seconds of week.
pub fn reception_time() -> Epoch {
    Epoch::from_time_of_week(2200, 345_600_200_000_000, TimeScale::GPST)
}

/// Flip payload bit `bit` (0 to 225) within frame `words`.
pub fn flip_payload_bit(words: &mut Words, bit: usize) {
    assert!(bit < 226, "payload bit {bit} out of range");
    if bit < 224 {
        words[bit / 32] ^= 1 << (31 - bit % 32);
    } else {
        words[7] ^= 1 << (25 - (bit - 224));
    }
}
