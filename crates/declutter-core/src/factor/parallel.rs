/// Worker-pool factorization.
///
/// One pool task per input number. Tasks report `(position, divisors)` over a
/// crossbeam channel as they finish, in whatever order that happens, and the
/// collector puts each result back in its input slot.
use super::divisors::factor_task;
use crossbeam_channel::Receiver;
use rayon::ThreadPool;

/// Factorize `numbers` on `pool`, returning results in input order.
pub fn factorize_parallel(numbers: &[u64], pool: &ThreadPool) -> Vec<Vec<u64>> {
    let (tx, rx) = crossbeam_channel::unbounded::<(usize, Vec<u64>)>();
    for (idx, &n) in numbers.iter().enumerate() {
        let tx = tx.clone();
        pool.spawn(move || {
            let _ = tx.send((idx, factor_task(n)));
        });
    }
    // The receiver drains once every task has dropped its sender.
    drop(tx);
    collect_in_order(numbers.len(), &rx)
}

/// Reassemble `(position, result)` pairs arriving in any order.
///
/// A slot that never receives a result stays empty, which the self-check
/// then reports as a mismatch.
fn collect_in_order(len: usize, rx: &Receiver<(usize, Vec<u64>)>) -> Vec<Vec<u64>> {
    let mut slots: Vec<Option<Vec<u64>>> = vec![None; len];
    for (idx, result) in rx.iter() {
        if let Some(slot) = slots.get_mut(idx) {
            *slot = Some(result);
        }
    }
    slots.into_iter().map(Option::unwrap_or_default).collect()
}
