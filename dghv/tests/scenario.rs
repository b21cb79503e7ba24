use dghv::{Ciphertext, Expander, Parameters, decrypt, encrypt, generate_keys, params::presets};

#[test]
fn toy_scale_end_to_end() {
    let params: Parameters = Parameters::new(200_000, 27, 3, 3, 20, 32, 5).unwrap();
    assert_eq!(params, presets::toy());

    let (pk, sk) = generate_keys(&params).unwrap();

    let one: Ciphertext = encrypt(1, &pk, &params).unwrap();
    assert_eq!(decrypt(&one, &sk, &params).unwrap(), 1);

    let zero: Ciphertext = encrypt(0, &pk, &params).unwrap();
    assert_eq!(decrypt(&zero, &sk, &params).unwrap(), 0);

    let sum: Ciphertext = pk.add(&zero, &one);
    assert_eq!(decrypt(&sum, &sk, &params).unwrap(), 1);

    let other_one: Ciphertext = encrypt(1, &pk, &params).unwrap();
    let prod: Ciphertext = pk.mul(&one, &other_one);
    assert_eq!(decrypt(&prod, &sk, &params).unwrap(), 1);
}

#[test]
fn toy_scale_expansion_is_reproducible() {
    let params: Parameters = presets::toy();
    let (pk, _) = generate_keys(&params).unwrap();

    let first: Vec<_> = Expander::new(pk.seed(), params.gamma()).take(params.tau()).collect();
    let second: Vec<_> = Expander::new(pk.seed(), params.gamma()).take(params.tau()).collect();
    assert_eq!(first, second);
    first
        .iter()
        .for_each(|chi| assert!(chi.significant_bits() as usize <= params.gamma()));
}
