use crate::crypto::cipher_types::{Key, SubKeyList};
use crate::crypto::error::CipherError;

pub trait KeyExpansion {
    fn generate_round_keys(&self, key: &Key) -> Result<SubKeyList, CipherError>;
}
