// crates/ltable-core/src/signal/timing.rs

use rand::Rng;

use crate::error::{LtError, Result};

/// Draw `count` distinct tick timestamps uniformly from `[0, time_range)`.
///
/// Collisions are redrawn against a used-marker table of `time_range` slots.
/// Returned ascending.
pub fn draw_unique_times<R: Rng + ?Sized>(rng: &mut R, count: usize, time_range: u32) -> Result<Vec<u32>> {
    if time_range == 0 {
        return Err(LtError::InvalidInput("time_range must be > 0".into()));
    }
    if count > time_range as usize {
        return Err(LtError::InvalidInput(format!(
            "cannot draw {count} distinct times from a range of {time_range}"
        )));
    }

    let mut used = vec![false; time_range as usize];
    let mut times = Vec::with_capacity(count);
    let mut redraws: u64 = 0;

    for _ in 0..count {
        let mut t = rng.gen_range(0..time_range);
        while used[t as usize] {
            redraws += 1;
            t = rng.gen_range(0..time_range);
        }
        used[t as usize] = true;
        times.push(t);
    }

    times.sort_unstable();
    tracing::trace!(count, time_range, redraws, "drew unique times");
    Ok(times)
}

/// `count` evenly spaced times: `0, step, 2*step, ...`.
pub fn stride_times(count: usize, step: u32) -> Result<Vec<u32>> {
    if step == 0 {
        return Err(LtError::InvalidInput("step_ticks must be > 0".into()));
    }
    let mut times = Vec::with_capacity(count);
    let mut cur: u32 = 0;
    for i in 0..count {
        if i > 0 {
            cur = cur
                .checked_add(step)
                .ok_or_else(|| LtError::InvalidInput("timestamp overflows u32".into()))?;
        }
        times.push(cur);
    }
    Ok(times)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn full_range_draw_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        let t = draw_unique_times(&mut rng, 16, 16).unwrap();
        assert_eq!(t, (0..16).collect::<Vec<u32>>());
    }

    #[test]
    fn rejects_impossible_draws() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(draw_unique_times(&mut rng, 3, 2).is_err());
        assert!(draw_unique_times(&mut rng, 0, 0).is_err());
    }

    #[test]
    fn stride_is_even_and_checked() {
        assert_eq!(stride_times(4, 10).unwrap(), vec![0, 10, 20, 30]);
        assert!(stride_times(2, 0).is_err());
        assert!(stride_times(3, u32::MAX).is_err());
        assert_eq!(stride_times(1, u32::MAX).unwrap(), vec![0]);
    }
}
