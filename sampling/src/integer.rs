use rand_core::RngCore;
use rug::{integer::Order, Integer};

use crate::source::Source;

impl Source {
    /// Returns a uniform integer in \[0, 2^{bits}).
    ///
    /// Consumes exactly `bits.div_ceil(64)` words of 64 bits from the stream,
    /// least significant word first, and masks the last one to the remaining bits.
    pub fn next_integer_bits(&mut self, bits: usize) -> Integer {
        let words: Vec<u64> = (0..bits.div_ceil(64)).map(|_| self.next_u64()).collect();
        let mut x: Integer = Integer::from_digits(&words, Order::Lsf);
        x.keep_bits_mut(bits as u32);
        x
    }

    /// Returns a uniform integer of exactly `bits` bits, i.e. in \[2^{bits-1}, 2^{bits}).
    pub fn next_integer_exact_bits(&mut self, bits: usize) -> Integer {
        assert!(bits > 0, "invalid argument bits: bits=0");
        let mut x: Integer = self.next_integer_bits(bits);
        x.set_bit((bits - 1) as u32, true);
        x
    }

    /// Returns a uniform integer in \[0, max).
    pub fn next_integer_n(&mut self, max: &Integer) -> Integer {
        assert!(*max > 0, "invalid argument max: max={} <= 0", max);
        let bits: usize = max.significant_bits() as usize;
        let mut x: Integer = self.next_integer_bits(bits);
        while x >= *max {
            x = self.next_integer_bits(bits);
        }
        x
    }

    /// Returns a uniform integer in the open interval (-2^{bits}, 2^{bits}).
    pub fn next_integer_symmetric(&mut self, bits: usize) -> Integer {
        let bound: Integer = Integer::from(1) << bits as u32;
        let width: Integer = Integer::from(&bound << 1u32) - 1u32;
        self.next_integer_n(&width) - (bound - 1u32)
    }

    /// Returns a uniform odd integer in the closed interval \[lo, hi\].
    pub fn next_odd_integer_range(&mut self, lo: &Integer, hi: &Integer) -> Integer {
        let mut first: Integer = lo.clone();
        if first.is_even() {
            first += 1u32;
        }
        assert!(
            first <= *hi,
            "invalid range: no odd integer in [{}, {}]",
            lo,
            hi
        );
        let count: Integer = (Integer::from(hi - &first) >> 1u32) + 1u32;
        let k: Integer = self.next_integer_n(&count);
        first + (k << 1u32)
    }
}
