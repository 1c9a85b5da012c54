//! Integer helpers.

use num::Integer;

/// Greatest common divisor.
///
/// ```
/// assert_eq!(lib::math::gcd(48, 18), 6);
/// assert_eq!(lib::math::gcd(7, 0), 7);
/// ```
#[inline]
pub fn gcd(a: u64, b: u64) -> u64 {
    a.gcd(&b)
}

/// Least common multiple.
///
/// ```
/// assert_eq!(lib::math::lcm(4, 6), 12);
/// ```
#[inline]
pub fn lcm(a: u64, b: u64) -> u64 {
    a.lcm(&b)
}

/// Least common multiple of every value, or `1` if there are none.
///
/// ```
/// let cycles = [17141, 16579, 18827, 12083, 13207, 22199];
/// assert_eq!(lib::math::lcm_all(cycles), 10818234074807);
/// ```
pub fn lcm_all<I>(values: I) -> u64
where
    I: IntoIterator<Item = u64>,
{
    values.into_iter().fold(1, lcm)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lcm_of_large_cycles() {
        assert_eq!(
            lcm_all([17141, 16579, 18827, 12083, 13207, 22199]),
            10818234074807
        );
        assert_eq!(
            lcm_all([13207, 22199, 14893, 16579, 20513, 12083]),
            10241191004509
        );
    }

    #[test]
    fn lcm_of_nothing() {
        assert_eq!(lcm_all([]), 1);
        assert_eq!(lcm_all([5]), 5);
    }
}
