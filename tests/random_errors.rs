use bch_decoder::bch::BchCode;
use bch_decoder::config::CodePreset;
use bch_decoder::GaloisField;
use bitvec::prelude::*;
use rand::seq::index::sample;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn random_message(rng: &mut ChaCha8Rng, k: usize) -> BitVec<u8, Msb0> {
    (0..k).map(|_| rng.gen::<bool>()).collect()
}

fn random_positions(rng: &mut ChaCha8Rng, n: usize, count: usize) -> Vec<usize> {
    let mut positions = sample(rng, n, count).into_vec();
    positions.sort_unstable();
    positions
}

fn flip(word: &BitSlice<u8, Msb0>, degrees: &[usize]) -> BitVec<u8, Msb0> {
    let n = word.len();
    let mut flipped = word.to_bitvec();
    for &d in degrees {
        let bit = flipped[n - 1 - d];
        flipped.set(n - 1 - d, !bit);
    }
    flipped
}

fn check_random_patterns(code: &BchCode, seed: u64, trials: usize) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let n = code.code_length();
    let t = code.error_correction_capability();
    let decoder = code.decoder();

    for _ in 0..trials {
        let message = random_message(&mut rng, code.data_length());
        let codeword = code.encode(&message).unwrap();
        let count = rng.gen_range(0..=t);
        let errors = random_positions(&mut rng, n, count);

        let decoded = decoder.decode(&flip(&codeword, &errors)).unwrap();
        assert_eq!(decoded.positions, errors, "{}", code);
        assert_eq!(decoded.corrected, codeword);
        assert_eq!(decoded.message, message);
    }
}

#[test]
fn test_reference_presets() {
    for (seed, preset) in CodePreset::ALL.into_iter().enumerate() {
        let code = preset.build().unwrap();
        check_random_patterns(&code, seed as u64, 40);
    }
}

#[test]
fn test_small_codes() {
    for (m, t) in [(3, 1), (4, 1), (4, 2), (4, 3), (5, 3), (7, 5)] {
        let code = BchCode::new(m, t, None).unwrap();
        check_random_patterns(&code, (m * 100 + t) as u64, 60);
    }
}

#[test]
fn test_non_narrow_sense_codes() {
    for (b, t) in [(0, 3), (3, 2), (5, 2)] {
        let field = GaloisField::new(6, 0x43).unwrap();
        let code = BchCode::with_first_exponent(field, t, b).unwrap();
        assert_eq!(code.first_exponent(), b);
        check_random_patterns(&code, b as u64, 60);
    }
}

#[test]
fn test_alternate_primitive_polynomial() {
    // x^6 + x^5 + 1 also generates GF(64)
    let code = BchCode::new(6, 2, Some(0x61)).unwrap();
    assert_eq!(code.data_length(), 51);
    check_random_patterns(&code, 61, 60);
}

#[test]
fn test_extreme_positions_every_preset() {
    for preset in CodePreset::ALL {
        let code = preset.build().unwrap();
        let n = code.code_length();
        let zero = bitvec![u8, Msb0; 0; n];
        let received = flip(&zero, &[0, n - 1]);

        let decoded = code.decoder().decode(&received).unwrap();
        assert_eq!(decoded.positions, vec![0, n - 1]);
        assert!(decoded.corrected.not_any());
    }
}

#[test]
fn test_batch_matches_sequential() {
    let code = CodePreset::P200.build().unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(200);
    let n = code.code_length();

    let words: Vec<BitVec<u8, Msb0>> = (0..32)
        .map(|_| {
            let codeword = code.encode(&random_message(&mut rng, code.data_length())).unwrap();
            let count = rng.gen_range(0..=4);
            flip(&codeword, &random_positions(&mut rng, n, count))
        })
        .collect();

    let decoder = code.decoder();
    let batch = decoder.decode_all(&words);
    for (word, result) in words.iter().zip(batch) {
        match (decoder.decode(word), result) {
            (Ok(a), Ok(b)) => assert_eq!(a, b),
            (Err(a), Err(b)) => assert_eq!(a.to_string(), b.to_string()),
            (a, b) => panic!("sequential {:?} but batch {:?}", a, b),
        }
    }
}
