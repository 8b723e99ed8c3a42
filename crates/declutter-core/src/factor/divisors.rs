/// Trial-division divisor enumeration.
use crate::workers::current_worker_name;
use tracing::info;

/// All positive divisors of `n`, ascending. `0` yields an empty list.
///
/// Walks candidates up to `sqrt(n)`; each hit `i` also yields its pair
/// `n / i`, which is collected separately and appended in reverse.
pub fn divisors(n: u64) -> Vec<u64> {
    let mut low = Vec::new();
    let mut high = Vec::new();
    let mut i: u64 = 1;
    while i.checked_mul(i).is_some_and(|sq| sq <= n) {
        if n % i == 0 {
            low.push(i);
            let pair = n / i;
            if pair != i {
                high.push(pair);
            }
        }
        i += 1;
    }
    low.extend(high.into_iter().rev());
    low
}

/// One unit of work: log which worker took `n`, then compute its divisors.
pub(crate) fn factor_task(n: u64) -> Vec<u64> {
    info!("Number {n} on worker {}", current_worker_name());
    divisors(n)
}
