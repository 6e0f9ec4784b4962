//! Prime-counting workloads.
//!
//! Both variants use trial division up to `sqrt(n)` and stop at the first
//! factor. They differ in how the remainder is computed and how the
//! inner loop is left; the counts they produce are identical.

/// Trial-division primality. 0 and 1 are not prime.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    let mut i = 2u64;
    while i * i <= n {
        if n % i == 0 {
            return false;
        }
        i += 1;
    }
    true
}

/// Count primes in `2..limit`, computing remainders by `n - (n / i) * i`.
///
/// On the first factor the divisor is pushed past the bound to end the
/// inner loop.
pub fn count_primes(limit: u64) -> u64 {
    let mut count = 0u64;
    let mut num = 2u64;
    while num < limit {
        let mut prime = true;
        let mut i = 2u64;
        while i * i < num + 1 {
            let remainder = num - (num / i) * i;
            if remainder == 0 {
                prime = false;
                i = num;
            }
            i += 1;
        }
        if prime {
            count += 1;
        }
        num += 1;
    }
    count
}

/// Count primes in `2..limit` through [`is_prime`].
pub fn count_primes_is_prime(limit: u64) -> u64 {
    (2..limit).filter(|&n| is_prime(n)).count() as u64
}
