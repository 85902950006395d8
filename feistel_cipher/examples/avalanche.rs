use feistel_cipher::crypto::bit_sequence::BitSequence;
use feistel_cipher::crypto::cipher_types::{CipherConfiguration, CipherDirection, Key};
use feistel_cipher::crypto::error::CipherError;
use feistel_cipher::crypto::triple_cipher::TripleFeistelCipher;

fn main() -> Result<(), CipherError> {
    env_logger::init();

    let triple = TripleFeistelCipher::new(CipherConfiguration::triple())?;
    let key = Key::parse("stiansandvestiansandv");
    let plaintext = BitSequence::from_bytes(b"avalanch");
    let reference = triple.triple_process(&plaintext, &key, CipherDirection::Encrypt)?;

    let mut flips = Vec::with_capacity(plaintext.len());
    for idx in 0..plaintext.len() {
        let flipped: BitSequence = plaintext
            .iter()
            .enumerate()
            .map(|(i, bit)| bit ^ (i == idx))
            .collect();
        let cipher = triple.triple_process(&flipped, &key, CipherDirection::Encrypt)?;
        flips.push(reference.count_differences(&cipher));
    }

    let min = flips.iter().copied().min().unwrap_or(0);
    let max = flips.iter().copied().max().unwrap_or(0);
    let mean = flips.iter().sum::<usize>() as f64 / flips.len() as f64;
    println!("Lowest number of bit flips: {min}");
    println!("Highest number of bit flips: {max}");
    println!("Mean: {mean:.2} of {}", reference.len());

    Ok(())
}
