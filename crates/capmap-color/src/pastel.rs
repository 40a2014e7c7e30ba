//! Unique random pastel assignment
//!
//! Samples colors from a pastel region of HLS space and redraws on
//! collision. The redraw loop is capped; running out of attempts is a
//! [`ColorError::Exhausted`], never an endless loop.

use crate::assign::{ColorAssigner, PracticeColors};
use crate::color::{channel_to_byte, hls_to_rgb, Color};
use crate::error::ColorError;
use capmap_model::PracticeId;
use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

/// Default redraw budget per practice
pub const DEFAULT_MAX_ATTEMPTS: usize = 10_000;

/// Source of candidate colors
pub trait ColorSampler: std::fmt::Debug {
    /// Draw one candidate
    fn sample(&mut self) -> Color;
}

/// Pastel sampler
///
/// Hue in `[0, 1)`, saturation in `[0.5, 1)`, lightness in `[0.6, 1)`,
/// rendered as `rgb(r,g,b)`.
#[derive(Debug, Clone)]
pub struct PastelSampler<R> {
    rng: R,
}

impl<R: Rng> PastelSampler<R> {
    /// Sampler over a caller-supplied RNG
    #[inline]
    #[must_use]
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl PastelSampler<StdRng> {
    /// Reproducible sampler
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl PastelSampler<ThreadRng> {
    /// Sampler over the thread-local RNG
    #[must_use]
    pub fn thread_local() -> Self {
        Self::new(rand::rng())
    }
}

impl<R: Rng + std::fmt::Debug> ColorSampler for PastelSampler<R> {
    fn sample(&mut self) -> Color {
        let h: f64 = self.rng.random();
        let s = 0.5 + self.rng.random::<f64>() * 0.5;
        let l = 0.6 + self.rng.random::<f64>() * 0.4;
        let (r, g, b) = hls_to_rgb(h, l, s);
        Color::rgb(channel_to_byte(r), channel_to_byte(g), channel_to_byte(b))
    }
}

/// No-repeat random assignment
///
/// The used-color set lives only for the duration of one
/// [`assign`](ColorAssigner::assign) call.
#[derive(Debug, Clone)]
pub struct UniquePastelAssigner<S> {
    sampler: S,
    max_attempts: usize,
}

impl<S: ColorSampler> UniquePastelAssigner<S> {
    /// Assigner with the default attempt budget
    #[inline]
    #[must_use]
    pub fn new(sampler: S) -> Self {
        Self {
            sampler,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Override the per-practice attempt budget (at least one attempt)
    #[inline]
    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Per-practice attempt budget
    #[inline]
    #[must_use]
    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }
}

impl<S: ColorSampler> ColorAssigner for UniquePastelAssigner<S> {
    fn assign<'a, I>(&mut self, practices: I) -> Result<PracticeColors, ColorError>
    where
        I: IntoIterator<Item = &'a PracticeId>,
    {
        let mut used = HashSet::new();
        let mut colors = PracticeColors::new();

        for practice_id in practices {
            let color = (0..self.max_attempts)
                .map(|_| self.sampler.sample())
                .find(|candidate| !used.contains(candidate))
                .ok_or_else(|| ColorError::Exhausted {
                    practice_id: practice_id.to_string(),
                    attempts: self.max_attempts,
                })?;
            used.insert(color.clone());
            colors.insert(practice_id.clone(), color);
        }

        tracing::debug!("Assigned {} unique pastel colors", colors.len());
        Ok(colors)
    }

    fn name(&self) -> &'static str {
        "unique_pastel"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn ids(n: usize) -> Vec<PracticeId> {
        (0..n).map(|i| PracticeId::new(format!("P{i}"))).collect()
    }

    /// Always returns the same color
    #[derive(Debug)]
    struct StuckSampler {
        calls: usize,
    }

    impl ColorSampler for StuckSampler {
        fn sample(&mut self) -> Color {
            self.calls += 1;
            Color::rgb(200, 200, 200)
        }
    }

    #[test]
    fn samples_stay_in_pastel_range() {
        let mut sampler = PastelSampler::seeded(7);
        for _ in 0..1_000 {
            let color = sampler.sample();
            let inner = color.as_str().trim_start_matches("rgb(").trim_end_matches(')');
            let channels: Vec<u8> = inner.split(',').map(|c| c.parse().unwrap()).collect();
            assert_eq!(channels.len(), 3);
            // lightness >= 0.6 keeps the brightest channel well above mid-grey
            assert!(channels.iter().copied().max().unwrap() >= 153);
        }
    }

    #[test]
    fn unique_within_pass() {
        let practices = ids(50);
        let mut assigner = UniquePastelAssigner::new(PastelSampler::seeded(1));
        let colors = assigner.assign(&practices).unwrap();
        assert_eq!(colors.len(), 50);
        let distinct: HashSet<_> = colors.iter().map(|(_, c)| c.clone()).collect();
        assert_eq!(distinct.len(), 50);
    }

    #[test]
    fn ten_thousand_passes_never_repeat() {
        let practices = ids(50);
        let mut assigner = UniquePastelAssigner::new(PastelSampler::seeded(2024));
        for _ in 0..10_000 {
            let colors = assigner.assign(&practices).unwrap();
            let distinct: HashSet<_> = colors.iter().map(|(_, c)| c).collect();
            assert_eq!(distinct.len(), 50);
        }
    }

    #[test]
    fn used_set_is_per_pass() {
        // One distinct color is enough for one practice per pass, every pass.
        let mut assigner = UniquePastelAssigner::new(StuckSampler { calls: 0 }).with_max_attempts(3);
        assert!(assigner.assign(&ids(1)).is_ok());
        assert!(assigner.assign(&ids(1)).is_ok());
    }

    #[test]
    fn exhaustion_is_reported() {
        let mut assigner = UniquePastelAssigner::new(StuckSampler { calls: 0 }).with_max_attempts(5);
        let result = assigner.assign(&ids(2));

        assert!(matches!(
            result,
            Err(ColorError::Exhausted { ref practice_id, attempts: 5 }) if practice_id == "P1"
        ));
        // one draw for P0, then the full budget for P1
        assert_eq!(assigner.sampler.calls, 6);
    }

    #[test]
    fn zero_budget_is_clamped() {
        let assigner = UniquePastelAssigner::new(PastelSampler::seeded(0)).with_max_attempts(0);
        assert_eq!(assigner.max_attempts(), 1);
    }

    #[test]
    fn same_seed_same_colors() {
        let practices = ids(10);
        let a = UniquePastelAssigner::new(PastelSampler::seeded(9)).assign(&practices).unwrap();
        let b = UniquePastelAssigner::new(PastelSampler::seeded(9)).assign(&practices).unwrap();
        assert_eq!(a, b);
    }
}
