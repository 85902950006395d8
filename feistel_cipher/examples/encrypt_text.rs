use feistel_cipher::crypto::cipher_types::{CipherConfiguration, CipherInput, Key};
use feistel_cipher::crypto::error::CipherError;
use feistel_cipher::crypto::feistel_cipher::FeistelCipher;
use feistel_cipher::crypto::triple_cipher::TripleFeistelCipher;
use std::env;

// cargo run --example encrypt_text -- "some text" stiansandvestiansandv
fn main() -> Result<(), CipherError> {
    env_logger::init();

    let mut args = env::args().skip(1);
    let text = args.next().unwrap_or_else(|| "stian sandve".to_string());
    let triple_key = args.next().unwrap_or_else(|| "stiansandvestiansandv".to_string());

    // === single key ===
    let des = FeistelCipher::new(CipherConfiguration::default())?;
    let key = Key::parse("sandvest");

    let encrypted = des.encrypt(text.as_str(), &key)?;
    println!("Binary: {}", encrypted);

    let decrypted = des.decrypt(encrypted, &key)?;
    let original_bits = CipherInput::from(text.as_str()).encode().len();
    let stripped = des.strip_padding(&decrypted, original_bits)?;
    println!("UTF-8: {}", String::from_utf8_lossy(&stripped.to_bytes()));

    // === triple ===
    let triple = TripleFeistelCipher::new(CipherConfiguration::triple())?;
    let key = Key::parse(&triple_key);

    let encrypted = triple.triple_encrypt(text.as_str(), &key)?;
    println!("Binary: {}", encrypted);

    let decrypted = triple.triple_decrypt(encrypted, &key)?;
    let stripped = triple.strip_padding(&decrypted, original_bits)?;
    println!("UTF-8: {}", String::from_utf8_lossy(&stripped.to_bytes()));

    Ok(())
}
