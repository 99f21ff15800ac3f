use miku_bigmath::bignum::BigUnsigned;
use miku_bigmath::telemetry::{self, EncryptionKey, Lcg, Params};
use miku_bigmath::BigError;

fn dec(s: &str) -> BigUnsigned {
    s.parse().unwrap()
}

#[test]
fn hex_text_in_and_out() {
    let v = BigUnsigned::parse_radix("FF", 16).unwrap();
    assert_eq!(v, 255);
    assert_eq!(v.to_string_radix(16).unwrap(), "FF");
}

#[test]
fn product_of_two_primes() {
    let p = dec("1000000007") * dec("1000000009");
    assert_eq!(p.to_string(), "1000000016000000063");
}

#[test]
fn long_division_by_a_word() {
    let (q, r) = dec("100000000000000000000").div_rem(&BigUnsigned::new(7)).unwrap();
    assert_eq!(q.to_string(), "14285714285714285714");
    assert_eq!(r, 2);
}

#[test]
fn colon_hex_round_trip() {
    let v = BigUnsigned::parse_hex_byte_string("DE:AD:BE:EF").unwrap();
    assert_eq!(v, 0xDEAD_BEEF);
    assert_eq!(v.to_hex_byte_string(), "DE:AD:BE:EF");
}

#[test]
fn shift_out_and_back() {
    let v = BigUnsigned::one() << 130;
    assert_eq!(v.bit_length(), 131);
    assert_eq!(v >> 130, 1);
}

#[test]
fn underflow_is_an_error() {
    assert_eq!(BigUnsigned::new(3) - BigUnsigned::new(5), Err(BigError::ArithmeticUnderflow));
}

#[test]
fn mersenne_521() {
    let m = (BigUnsigned::one() << 521) - 1;
    let m = m.unwrap();
    assert_eq!(
        m.to_string(),
        "6864797660130609714981900799081393217269435300143305409394463459185543183397656052\
         122559640661454554977296311391480858037121987999716643812574028291115057151"
    );
    assert_eq!(m.to_base64().len(), 87);
    assert!(m.to_base64()[1..].bytes().all(|c| c == b'/'));
}

#[test]
fn cached_small_values_stay_put() {
    let mut v = BigUnsigned::new(5);
    v += 1000;
    v <<= 40;
    assert_eq!(BigUnsigned::new(5), 5);
    assert_eq!(BigUnsigned::zero().as_words(), &[0]);
}

#[test]
fn telemetry_round_trip() {
    let key = EncryptionKey::from_hex_modulus(
        "8A:DA:1D:51:85:D6:38:71:39:72:A5:A4:1C:2A:89:5A:E1:55:E6:58:F8:1E:9F:CA:99:51:A7:2E:BC:05:AF:32:\
         28:BA:20:8C:0E:D6:94:3A:BD:97:22:60:3F:BA:F4:81:EF:3B:C6:67:F9:EA:9B:B4:1A:13:9D:40:3F:7E:8B:A3",
    )
    .unwrap();
    let d = BigUnsigned::parse(
        "0x4AF4F24CD7164D03FA82449F3241584302502FF8A98146BBC546CA1CB58DD004\
         547E2AE6A056B4AE47BA3DB7AA71DBDCD6B5B8168FAD8582F8AA939919BDB859",
        false,
    )
    .unwrap();

    let message = "garage\ntemperature 21.5C\nhumidity 40%";
    let mut rng = Lcg::new(2024);
    let sealed = telemetry::seal(Some(&key), message, &Params::DEVICE, &mut rng).unwrap();
    assert_eq!(sealed.lines().count(), 2);
    assert!(!sealed.contains(message));
    assert_eq!(telemetry::open(key.modulus(), &d, &sealed, &Params::DEVICE).unwrap(), message);
}
