pub mod bit_sequence;
pub mod cipher_traits;
pub mod cipher_types;
pub mod des_key_expansion;
pub mod des_tables;
pub mod des_transformation;
pub mod encryption_transformation;
pub mod error;
pub mod feistel_cipher;
pub mod feistel_network;
pub mod key_expansion;
pub mod tables;
pub mod triple_cipher;

