//! Integer arithmetic helpers.
//!
//! Small companions to the string subsystems: greatest common divisor, least
//! common multiple, primality testing, and modular exponentiation. All
//! functions are total over `u64`.

/// Greatest common divisor of two integers.
///
/// Subtraction-based Euclidean algorithm, with the zero cases handled up
/// front (the loop only terminates for positive operands). `gcd(0, 0)` is 0.
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    if a == 0 {
        return b;
    }
    if b == 0 {
        return a;
    }

    while a != b {
        if a > b {
            a -= b;
        } else {
            b -= a;
        }
    }

    a
}

/// Least common multiple of two integers.
///
/// `lcm(0, _)` and `lcm(_, 0)` are 0. Divides before multiplying to keep the
/// intermediate within range whenever the result itself fits in `u64`.
pub fn lcm(a: u64, b: u64) -> u64 {
    if a == 0 || b == 0 {
        return 0;
    }

    a / gcd(a, b) * b
}

/// Test whether `n` is prime by trial division up to the square root.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n < 4 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }

    let mut divisor = 3;
    while divisor * divisor <= n {
        if n % divisor == 0 {
            return false;
        }
        divisor += 2;
    }

    true
}

/// Modular exponentiation: `base^exp mod modulus`, by square-and-multiply.
///
/// `modulus` of 0 or 1 yields 0. Intermediate products are widened to `u128`
/// so they cannot overflow for any `u64` modulus.
pub fn mod_pow(base: u64, mut exp: u64, modulus: u64) -> u64 {
    if modulus <= 1 {
        return 0;
    }

    let modulus = u128::from(modulus);
    let mut base = u128::from(base) % modulus;
    let mut result: u128 = 1;

    while exp > 0 {
        if exp & 1 == 1 {
            result = result * base % modulus;
        }
        base = base * base % modulus;
        exp >>= 1;
    }

    result as u64
}
