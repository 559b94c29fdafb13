#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some((&key, rest)) = data.split_first() else { return };
    assert_eq!(symfeat::xor_bytes(&symfeat::xor_bytes(rest, key), key), rest);

    let mut word = [0u8; 8];
    let n = rest.len().min(8);
    word[..n].copy_from_slice(&rest[..n]);
    let value = u64::from_le_bytes(word);
    let bits = (key % 65) as u32;
    let _ = symfeat::twos_complement(value, bits);
});
