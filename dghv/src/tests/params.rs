use rug::Integer;

use crate::{
    error::Error,
    params::{MAX_TAU, Parameters, presets},
};

#[test]
fn presets_are_valid() {
    presets::toy().validate().unwrap();
    presets::tiny().validate().unwrap();
    let toy: Parameters = presets::toy();
    assert_eq!(
        Parameters::new(200_000, 27, 3, 3, 20, 32, 5).unwrap(),
        toy
    );
}

#[test]
fn rejects_broken_relations() {
    let invalid: [(usize, usize, usize, usize, usize, usize, usize); 7] = [
        (28, 27, 3, 3, 20, 32, 5),   // gamma < eta + 2
        (2048, 3, 3, 3, 20, 32, 5),  // eta <= rho
        (2048, 27, 3, 4, 20, 32, 5), // rho < rho_prime
        (2048, 27, 3, 3, 0, 32, 5),  // tau = 0
        (2048, 27, 3, 3, 20, 0, 5),  // sec = 0
        (2048, 27, 3, 3, 20, 32, 24), // alpha + rho >= eta
        (2048, 27, 3, 3, 1 << 20, 32, 5), // fresh noise too large
    ];
    invalid.iter().for_each(|&(gamma, eta, rho, rho_prime, tau, sec, alpha)| {
        match Parameters::new(gamma, eta, rho, rho_prime, tau, sec, alpha) {
            Err(Error::InvalidParameters(_)) => {}
            other => panic!(
                "expected InvalidParameters for ({}, {}, {}, {}, {}, {}, {}), got {:?}",
                gamma, eta, rho, rho_prime, tau, sec, alpha, other
            ),
        }
    });
}

#[test]
fn noise_bound_below_threshold() {
    let params: Parameters = presets::toy();
    // 2 * (20 * 2^8 + 2^3) + 1
    assert_eq!(params.fresh_noise_bound(), 10257);
    assert_eq!(params.noise_threshold(), Integer::from(1) << 25u32);
}

#[test]
fn id_depends_on_every_field() {
    let base: Parameters = presets::tiny();
    let variants: [Parameters; 7] = [
        Parameters { gamma: 4096, ..base },
        Parameters { eta: 28, ..base },
        Parameters { rho: 4, ..base },
        Parameters { rho_prime: 2, ..base },
        Parameters { tau: 21, ..base },
        Parameters { sec: 33, ..base },
        Parameters { alpha: 6, ..base },
    ];
    variants.iter().for_each(|v| assert_ne!(v.id(), base.id(), "{}", v));
    assert_eq!(base.id(), presets::tiny().id());
}

#[test]
fn xi_bound() {
    let params: Parameters = presets::tiny();
    let p: Integer = Integer::from(134217757u32);
    let bound: Integer = params.xi_bound(&p);
    assert_eq!(bound, (Integer::from(1) << 59u32) / &p);
    assert!(bound > (Integer::from(1) << 31u32));
}

#[test]
fn rejects_oversized_fields() {
    let base: Parameters = presets::tiny();
    let oversized: [Parameters; 5] = [
        Parameters { eta: usize::MAX - 1, sec: 2, ..base },
        Parameters { gamma: usize::MAX, ..base },
        Parameters { alpha: usize::MAX - 2, ..base },
        Parameters { rho: usize::MAX, rho_prime: 1, ..base },
        Parameters { tau: MAX_TAU as usize + 1, ..base },
    ];
    oversized.iter().for_each(|params| match params.validate() {
        Err(Error::InvalidParameters(msg)) => assert!(msg.contains("exceeds"), "{}", msg),
        other => panic!("expected InvalidParameters for {}, got {:?}", params, other),
    });
}

#[test]
fn reports_the_oversized_sum() {
    let params: Parameters = Parameters {
        gamma: u32::MAX as usize,
        eta: u32::MAX as usize - 3,
        rho: 3,
        rho_prime: 3,
        tau: 20,
        sec: 32,
        alpha: 5,
    };
    match params.validate() {
        Err(Error::InvalidParameters(msg)) => assert!(msg.starts_with("sec+eta="), "{}", msg),
        other => panic!("expected InvalidParameters, got {:?}", other),
    }
}
