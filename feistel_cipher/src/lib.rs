pub mod crypto;
pub use crypto::bit_sequence::BitSequence;
pub use crypto::cipher_traits::*;
pub use crypto::cipher_types::*;
pub use crypto::error::CipherError;
pub use crypto::feistel_cipher::FeistelCipher;
pub use crypto::tables::CipherTables;
pub use crypto::triple_cipher::TripleFeistelCipher;
