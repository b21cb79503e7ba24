use rug::Integer;

/// Returns the symmetric residue of `z` modulo `m`, i.e. the unique `r`
/// with -m/2 < r <= m/2 and r = z mod m.
///
/// # Panics
///
/// Panics if `m` is not positive.
pub fn reduce_symmetric(z: &Integer, m: &Integer) -> Integer {
    let mut r: Integer = z.clone();
    reduce_symmetric_assign(&mut r, m);
    r
}

/// Assigns the symmetric residue of `z` modulo `m` to `z`.
///
/// # Panics
///
/// Panics if `m` is not positive.
pub fn reduce_symmetric_assign(z: &mut Integer, m: &Integer) {
    assert!(*m > 0, "invalid modulus: m <= 0");

    // Truncated remainder, carries the sign of z.
    *z %= m;
    if *z < 0 {
        *z += m;
    }

    if Integer::from(&*z << 1u32) > *m {
        *z -= m;
    }
}
