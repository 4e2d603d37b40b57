use std::ops::Range;

use anyhow::ensure;
use rand::Rng;
use rand::seq::index;

/// Keys are drawn from this range
pub const KEY_RANGE: Range<u32> = 1..1_000_000;

/// Samples `n` distinct keys uniformly from [`KEY_RANGE`], in random order
///
/// Fails if the range doesn't hold `n` distinct keys.
pub fn random_keys<R: Rng + ?Sized>(n: usize, rng: &mut R) -> anyhow::Result<Vec<u32>> {
    let available = (KEY_RANGE.end - KEY_RANGE.start) as usize;
    ensure!(n <= available,
        "cannot sample {} distinct keys from a range of only {} keys", n, available);

    let keys = index::sample(rng, available, n)
        .into_iter()
        .map(|offset| KEY_RANGE.start + offset as u32)
        .collect();

    Ok(keys)
}
