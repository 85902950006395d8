use feistel_cipher::crypto::bit_sequence::BitSequence;
use feistel_cipher::crypto::cipher_types::SubKeyList;
use feistel_cipher::crypto::encryption_transformation::EncryptionTransformation;
use feistel_cipher::crypto::error::CipherError;
use feistel_cipher::crypto::feistel_network::FeistelNetwork;
use std::sync::Arc;

#[cfg(test)]
mod tests {
    use super::*;

    struct MockTransformation;
    impl EncryptionTransformation for MockTransformation {
        fn transform(&self, block: &BitSequence, round_key: &BitSequence) -> BitSequence {
            let key: Vec<bool> = round_key.iter().collect();
            block.iter()
                .zip(key.iter().cycle())
                .map(|(b, &k)| b ^ k)
                .collect()
        }
    }

    // Returns one bit too many, so the halves cannot be XORed.
    struct WideTransformation;
    impl EncryptionTransformation for WideTransformation {
        fn transform(&self, block: &BitSequence, _round_key: &BitSequence) -> BitSequence {
            block.concat(&BitSequence::zeros(1))
        }
    }

    // Round keys that differ per round, so key order matters.
    fn mock_round_keys() -> SubKeyList {
        SubKeyList::new(vec![
            BitSequence::from_bytes(&[0x0F; 4]),
            BitSequence::from_bytes(&[0x35; 4]),
            BitSequence::from_bytes(&[0xA1; 4]),
        ])
    }

    fn network() -> FeistelNetwork {
        FeistelNetwork::new(
            3,
            Arc::new(MockTransformation) as Arc<dyn EncryptionTransformation + Send + Sync>,
        )
    }

    #[test]
    fn test_feistel_encrypt_decrypt_roundtrip() {
        let network = network();
        let block = BitSequence::from_bytes(b"\x12\x34\x56\x78\x9A\xBC\xDE\xF0");
        let round_keys = mock_round_keys();

        let encrypted = network.encrypt_with_round_keys(&block, &round_keys).unwrap();
        assert_ne!(encrypted, block);

        let decrypted = network.decrypt_with_round_keys(&encrypted, &round_keys).unwrap();
        assert_eq!(decrypted, block);
    }

    #[test]
    fn test_decrypt_is_encrypt_with_reversed_keys() {
        let network = network();
        let block = BitSequence::from_bytes(b"\x00\x11\x22\x33\x44\x55\x66\x77");
        let round_keys = mock_round_keys();

        assert_eq!(
            network.decrypt_with_round_keys(&block, &round_keys).unwrap(),
            network.encrypt_with_round_keys(&block, &round_keys.reversed()).unwrap()
        );
    }

    #[test]
    fn test_feistel_block_size_preserved() {
        let network = network();
        let block = BitSequence::from_bytes(b"\x00\x11\x22\x33\x44\x55\x66\x77");
        let round_keys = mock_round_keys();

        let encrypted = network.encrypt_with_round_keys(&block, &round_keys).unwrap();
        assert_eq!(encrypted.len(), block.len());
    }

    #[test]
    fn test_single_round_moves_right_half_left() {
        let network = network();
        let block = BitSequence::from_bytes(b"\xAA\xAA\xAA\xAA\x0F\x0F\x0F\x0F");
        let key = BitSequence::from_bytes(&[0xFF; 4]);

        let out = network.round(&block, &key).unwrap();
        let (left, right) = out.split_in_half();
        assert_eq!(left, BitSequence::from_bytes(&[0x0F; 4]));
        // 0xAA ^ (0x0F ^ 0xFF)
        assert_eq!(right, BitSequence::from_bytes(&[0x5A; 4]));
    }

    #[test]
    fn test_round_is_not_an_involution() {
        let network = network();
        let block = BitSequence::from_bytes(b"\x12\x34\x56\x78\x9A\xBC\xDE\xF0");
        let key = BitSequence::from_bytes(&[0x0F; 4]);

        let twice = network.round(&network.round(&block, &key).unwrap(), &key).unwrap();
        assert_ne!(twice, block);
    }

    #[test]
    fn test_round_key_count_must_match_rounds() {
        let network = network();
        let block = BitSequence::from_bytes(b"feistel!");
        let too_few = SubKeyList::new(vec![BitSequence::from_bytes(&[0x0F; 4])]);

        assert!(matches!(
            network.encrypt_with_round_keys(&block, &too_few),
            Err(CipherError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            network.decrypt_with_round_keys(&block, &too_few),
            Err(CipherError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_round_rejects_mismatched_transformation_width() {
        let network = FeistelNetwork::new(
            3,
            Arc::new(WideTransformation) as Arc<dyn EncryptionTransformation + Send + Sync>,
        );
        let block = BitSequence::from_bytes(b"feistel!");

        assert!(matches!(
            network.round(&block, &BitSequence::zeros(32)),
            Err(CipherError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            network.encrypt_with_round_keys(&block, &mock_round_keys()),
            Err(CipherError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_round_rejects_odd_block() {
        let network = network();
        let block = BitSequence::from_bit_str("10110").unwrap();
        assert!(network.round(&block, &BitSequence::zeros(2)).is_err());
    }
}
