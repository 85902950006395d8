use feistel_cipher::crypto::bit_sequence::BitSequence;
use feistel_cipher::crypto::cipher_traits::CipherAlgorithm;
use feistel_cipher::crypto::cipher_types::{CipherConfiguration, CipherDirection, CipherInput, Key};
use feistel_cipher::crypto::error::CipherError;
use feistel_cipher::crypto::feistel_cipher::FeistelCipher;
use feistel_cipher::crypto::triple_cipher::TripleFeistelCipher;
use quickcheck::quickcheck;

const TRIPLE_KEY: &str = "stiansandvestiansandv";

const LONG_STRING: &str = "Lorem ipsum dolor sit amet, consectetur adipisicing elit, \
    sed do eiusmod tempor incididunt ut labore et dolore magna \
    aliqua. Ut enim ad minim veniam, quis nostrud exercitation \
    ullamco laboris nisi ut aliquip ex ea commodo consequat. \
    Duis aute irure dolor in reprehenderit in voluptate velit \
    esse cillum dolore eu fugiat nulla pariatur. Excepteur sint \
    occaecat cupidatat non proident, sunt in culpa qui officia \
    deserunt mollit anim id est laborum.";

fn triple() -> TripleFeistelCipher {
    TripleFeistelCipher::new(CipherConfiguration::triple()).unwrap()
}

fn roundtrip<C: CipherAlgorithm>(cipher: &C, key: &Key, text: &str) -> Vec<u8> {
    let encrypted = cipher.encrypt(CipherInput::from(text), key).unwrap();
    assert_eq!(encrypted.len() % cipher.block_size(), 0);
    let decrypted = cipher.decrypt(CipherInput::Bits(encrypted), key).unwrap();
    cipher.strip_padding(&decrypted, text.len() * 8).unwrap().to_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triple_ascii_encryption() {
        let triple = triple();
        let key = Key::parse(TRIPLE_KEY);

        let cipher = triple.triple_encrypt(LONG_STRING, &key).unwrap();
        let decrypted = triple.triple_decrypt(cipher.to_bit_string(), &key).unwrap();
        let stripped = triple.strip_padding(&decrypted, LONG_STRING.len() * 8).unwrap();

        assert_eq!(String::from_utf8(stripped.to_bytes()).unwrap(), LONG_STRING);
    }

    #[test]
    fn test_triple_is_three_single_passes() {
        let triple = triple();
        let single = FeistelCipher::new(CipherConfiguration::triple()).unwrap();
        let key = Key::parse(TRIPLE_KEY);
        let [k1, k2, k3] = triple.split_key(&key).unwrap();
        let input = BitSequence::from_bytes(b"stian sandve");

        let mut expected = input.clone();
        for stage_key in [&k1, &k2, &k3] {
            expected = single.process(&expected, stage_key, CipherDirection::Encrypt).unwrap();
        }
        let encrypted = triple.triple_process(&input, &key, CipherDirection::Encrypt).unwrap();
        assert_eq!(encrypted, expected);

        let mut expected = encrypted.clone();
        for stage_key in [&k3, &k2, &k1] {
            expected = single.process(&expected, stage_key, CipherDirection::Decrypt).unwrap();
        }
        assert_eq!(
            triple.triple_process(&encrypted, &key, CipherDirection::Decrypt).unwrap(),
            expected
        );
    }

    #[test]
    fn test_split_key_segments() {
        let triple = triple();
        let key = Key::parse(TRIPLE_KEY);
        let [k1, k2, k3] = triple.split_key(&key).unwrap();

        assert_eq!(triple.wide_key_size(), 168);
        for segment in [&k1, &k2, &k3] {
            assert_eq!(segment.len(), 56);
        }
        assert_eq!(k1.bits().concat(k2.bits()).concat(k3.bits()), *key.bits());
    }

    #[test]
    fn test_triple_rejects_bad_key() {
        let triple = triple();
        assert_eq!(
            triple.triple_encrypt("text", &Key::parse("sandvest")).map(|_| ()),
            Err(CipherError::InvalidKey { expected: 168, actual: 64 })
        );
        // 170 bits cannot be cut into three equal parts
        let uneven = Key::from_bits(BitSequence::zeros(170));
        assert!(matches!(
            triple.triple_encrypt("text", &uneven),
            Err(CipherError::InvalidKey { .. })
        ));
    }

    #[test]
    fn test_triple_differs_from_single_stage() {
        let triple = triple();
        let key = Key::parse(TRIPLE_KEY);
        let [k1, _, _] = triple.split_key(&key).unwrap();

        let cascade = triple.triple_encrypt("ssssssss", &key).unwrap();
        let first_stage = triple.stage_cipher().encrypt("ssssssss", &k1).unwrap();
        assert_ne!(cascade, first_stage);
    }

    #[test]
    fn test_avalanche() {
        // one flipped plaintext bit changes 25 to 40 of the 64 ciphertext bits
        // for this input
        let triple = triple();
        let key = Key::parse(TRIPLE_KEY);
        let text_to_encrypt = "10101101001011110100101111010010";
        let cipher1 = triple.triple_encrypt(text_to_encrypt, &key).unwrap();

        let mut min = usize::MAX;
        let mut max = 0;
        for idx in 0..text_to_encrypt.len() {
            let flipped: String = text_to_encrypt
                .chars()
                .enumerate()
                .map(|(i, c)| match (i == idx, c) {
                    (true, '0') => '1',
                    (true, _) => '0',
                    (false, c) => c,
                })
                .collect();

            let cipher2 = triple.triple_encrypt(flipped, &key).unwrap();
            let number_of_bit_flips = cipher1.count_differences(&cipher2);
            min = min.min(number_of_bit_flips);
            max = max.max(number_of_bit_flips);
        }

        assert!(min >= 20, "lowest number of bit flips: {min}");
        assert!(max <= 44, "highest number of bit flips: {max}");
    }

    #[test]
    fn test_generic_over_cipher_algorithm() {
        let single = FeistelCipher::new(CipherConfiguration::default()).unwrap();
        let triple = triple();

        assert_eq!(roundtrip(&single, &Key::parse("sandvest"), "stian sandve"), b"stian sandve");
        assert_eq!(roundtrip(&triple, &Key::parse(TRIPLE_KEY), "stian sandve"), b"stian sandve");
    }

    quickcheck! {
        fn prop_triple_roundtrip(data: Vec<u8>, k1: u64, k2: u64, k3: u64) -> bool {
            let triple = triple();
            let mut key_bytes = Vec::with_capacity(24);
            for k in [k1, k2, k3] {
                key_bytes.extend_from_slice(&k.to_be_bytes()[..7]);
            }
            let key = Key::from_bytes(&key_bytes);

            let cipher = triple.triple_encrypt(data.clone(), &key).unwrap();
            let decrypted = triple.triple_decrypt(cipher, &key).unwrap();
            triple.strip_padding(&decrypted, data.len() * 8).unwrap().to_bytes() == data
        }
    }
}
