use symfeat::{all_zeros, twos_complement, xor_bytes, FeatureError, MIN_STACKSTRING_LEN};

#[test]
fn xor_round_trip_for_every_key() {
    let data: Vec<u8> = (0..=255u8).collect();
    for key in 0..=255u8 {
        assert_eq!(xor_bytes(&xor_bytes(&data, key), key), data);
    }
}

#[test]
fn xor_decodes_obfuscated_stackstring() {
    let plain = b"VirtualAlloc";
    let encoded = xor_bytes(plain, 0x5a);
    assert_ne!(encoded, plain.to_vec());
    let decoded = xor_bytes(&encoded, 0x5a);
    assert_eq!(decoded, plain.to_vec());
    assert!(decoded.len() >= MIN_STACKSTRING_LEN);
}

#[test]
fn zero_checks() {
    assert!(all_zeros(&[]));
    assert!(all_zeros(&[0, 0]));
    assert!(!all_zeros(&[0, 1]));
    assert!(all_zeros(&xor_bytes(&[0x33; 16], 0x33)));
}

#[test]
fn twos_complement_examples() {
    assert_eq!(twos_complement(0xFF, 8).unwrap(), -1);
    assert_eq!(twos_complement(0x7F, 8).unwrap(), 127);
    assert_eq!(twos_complement(0x80, 8).unwrap(), -128);
    assert_eq!(twos_complement(0xFFF0, 16).unwrap(), -16);
}

#[test]
fn twos_complement_precondition_errors() {
    assert!(matches!(
        twos_complement(0, 0),
        Err(FeatureError::InvalidBitWidth { bits: 0 })
    ));
    assert!(matches!(
        twos_complement(0x1_0000, 16),
        Err(FeatureError::ValueOutOfRange { .. })
    ));
}
