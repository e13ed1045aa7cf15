mod common;

use common::*;
use rand::Rng;
use sbas::message::{payload, realign, Decoder, Integrity, PAYLOAD_BITS};
use sbas::{decode, Error};

#[test]
fn decode_known_good_frame() {
    let (msg, integrity) = decode(Some(reception_time()), PRN, &MT18_WORDS).unwrap();

    assert_eq!(integrity, Integrity::Ok);
    assert_eq!(msg.prn, PRN);
    assert_eq!(msg.week, 2200);
    assert_eq!(msg.tow, 345_600);
    assert_eq!(msg.preamble(), 0x53);
    assert_eq!(msg.message_type(), 18);
    assert_eq!(hex::encode(msg.payload), MT18_PAYLOAD_HEX);
}

#[test]
fn realigned_payload_matches_fixture() {
    let buf = realign(&payload(&MT18_WORDS));

    assert_eq!(hex::encode(buf), MT18_REALIGNED_HEX);
}

#[test]
fn decode_is_deterministic() {
    let first = decode(Some(reception_time()), PRN, &MT18_WORDS).unwrap();
    let second = decode(Some(reception_time()), PRN, &MT18_WORDS).unwrap();

    assert_eq!(first, second);
}

#[test]
fn decode_without_reception_time() {
    assert_eq!(decode(None, PRN, &MT18_WORDS), Err(Error::UnsetTime));
    assert_eq!(
        Decoder::default().decode_valid(None, PRN, &MT18_WORDS),
        Err(Error::UnsetTime)
    );
}

#[test]
fn corrupted_check_value_keeps_payload() {
    let (good, _) = decode(Some(reception_time()), PRN, &MT18_WORDS).unwrap();

    let mut words = MT18_WORDS;
    words[7] ^= 0x0000_0001;
    let (msg, integrity) = decode(Some(reception_time()), PRN, &words).unwrap();

    assert_eq!(
        integrity,
        Integrity::Mismatch {
            computed: MT18_CRC,
            broadcast: MT18_CRC ^ 1
        }
    );
    assert_eq!(msg.payload, good.payload);
}

#[test]
fn random_check_value_corruption_detected() {
    let mut rng = rand::thread_rng();
    for _ in 0..256 {
        let mask: u32 = rng.gen_range(1..=0x00ff_ffff);
        let mut words = MT18_WORDS;
        words[7] ^= mask;

        let (_, integrity) = decode(Some(reception_time()), PRN, &words).unwrap();

        assert!(!integrity.is_ok(), "corruption {mask:#08x} not detected");
    }
}

#[test]
fn every_single_payload_bit_flip_detected() {
    for bit in 0..PAYLOAD_BITS {
        let mut words = MT18_WORDS;
        flip_payload_bit(&mut words, bit);

        let zult = Decoder::default().decode_valid(Some(reception_time()), PRN, &words);

        match zult {
            Err(Error::IntegrityMismatch { broadcast, .. }) => assert_eq!(broadcast, MT18_CRC),
            other => panic!("flip of payload bit {bit} not detected: {other:?}"),
        }
    }
}

#[test]
fn unused_words_are_ignored() {
    let mut words = MT18_WORDS;
    words[8] = 0xdead_beef;
    words[9] = 0x00c0_ffee;

    let msg = Decoder::default()
        .decode_valid(Some(reception_time()), PRN, &words)
        .unwrap();

    assert_eq!(hex::encode(msg.payload), MT18_PAYLOAD_HEX);
}
