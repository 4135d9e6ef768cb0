//! Randomized channel-shift glitch

use rand::Rng;

/// Probability per pixel at intensity 1.0.
const BASE_PROBABILITY: f64 = 0.05;
/// Pixel shift per unit of intensity.
const SHIFT_PER_INTENSITY: f64 = 10.0;

/// Shift distance in pixels for a given intensity.
#[inline]
pub fn glitch_shift(intensity: f64) -> usize {
    (intensity * SHIFT_PER_INTENSITY).floor().max(0.0) as usize
}

/// Swap red and blue channels with distant pixels at random.
///
/// `shift = floor(intensity * 10)`. Each pixel, with probability
/// `0.05 * intensity`, swaps its R byte with the R byte `shift` pixels
/// ahead and its B byte with the B byte `shift` pixels behind. Partners are
/// clamped to the first/last pixel. G and A are never touched, and since
/// bytes are only swapped the multiset of R values (and of B values) is
/// preserved.
pub fn glitch<R: Rng + ?Sized>(data: &mut [u8], intensity: f64, rng: &mut R) {
    let probability = (BASE_PROBABILITY * intensity).min(1.0);
    let shift = glitch_shift(intensity);
    let pixels = data.len() / 4;

    if probability.is_nan() || probability <= 0.0 || shift == 0 || pixels == 0 {
        return;
    }

    let last = pixels - 1;
    for i in 0..pixels {
        if !rng.gen_bool(probability) {
            continue;
        }
        let ahead = i.saturating_add(shift).min(last);
        let behind = i.saturating_sub(shift);
        data.swap(i * 4, ahead * 4);
        data.swap(i * 4 + 2, behind * 4 + 2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn gradient(pixels: usize) -> Vec<u8> {
        (0..pixels)
            .flat_map(|i| [(i % 256) as u8, 7, (255 - i % 256) as u8, 200])
            .collect()
    }

    fn channel(data: &[u8], offset: usize) -> Vec<u8> {
        data.chunks_exact(4).map(|px| px[offset]).collect()
    }

    fn sorted(mut values: Vec<u8>) -> Vec<u8> {
        values.sort_unstable();
        values
    }

    #[test]
    fn test_shift() {
        assert_eq!(glitch_shift(0.0), 0);
        assert_eq!(glitch_shift(0.25), 2);
        assert_eq!(glitch_shift(1.0), 10);
        assert_eq!(glitch_shift(2.5), 25);
    }

    #[test]
    fn test_zero_intensity_is_noop() {
        let original = gradient(1000);
        let mut data = original.clone();
        glitch(&mut data, 0.0, &mut StdRng::seed_from_u64(1));
        assert_eq!(data, original);
    }

    #[test]
    fn test_only_swaps_red_and_blue() {
        let original = gradient(5000);
        let mut data = original.clone();
        glitch(&mut data, 1.0, &mut StdRng::seed_from_u64(42));

        assert_eq!(channel(&data, 1), channel(&original, 1));
        assert_eq!(channel(&data, 3), channel(&original, 3));
        assert_eq!(sorted(channel(&data, 0)), sorted(channel(&original, 0)));
        assert_eq!(sorted(channel(&data, 2)), sorted(channel(&original, 2)));
    }

    #[test]
    fn test_change_rate_tracks_probability() {
        let pixels = 10_000;
        let original = gradient(pixels);
        let mut data = original.clone();
        glitch(&mut data, 1.0, &mut StdRng::seed_from_u64(7));

        let changed = channel(&data, 0)
            .iter()
            .zip(channel(&original, 0))
            .filter(|(a, b)| **a != *b)
            .count();
        let ratio = changed as f64 / pixels as f64;
        // ~5% of pixels swap, each swap moves two red bytes
        assert!(
            ratio > 0.02 && ratio < 0.2,
            "changed ratio {ratio:.3} outside expected band"
        );
    }

    #[test]
    fn test_partners_clamped_to_bounds() {
        // Probability 1 at intensity 20: every pixel swaps, shift far beyond the buffer
        let original = gradient(3);
        let mut data = original.clone();
        glitch(&mut data, 20.0, &mut StdRng::seed_from_u64(3));

        assert_eq!(data.len(), original.len());
        assert_eq!(sorted(channel(&data, 0)), sorted(channel(&original, 0)));
        assert_eq!(sorted(channel(&data, 2)), sorted(channel(&original, 2)));
    }

    #[test]
    fn test_huge_intensity_saturates_shift() {
        assert_eq!(glitch_shift(1e19), usize::MAX);

        let original = gradient(4);
        let mut data = original.clone();
        glitch(&mut data, 1e19, &mut StdRng::seed_from_u64(5));

        assert_eq!(channel(&data, 1), channel(&original, 1));
        assert_eq!(channel(&data, 3), channel(&original, 3));
        assert_eq!(sorted(channel(&data, 0)), sorted(channel(&original, 0)));
        assert_eq!(sorted(channel(&data, 2)), sorted(channel(&original, 2)));
    }

    #[test]
    fn test_nan_intensity_is_noop() {
        let original = gradient(10);
        let mut data = original.clone();
        glitch(&mut data, f64::NAN, &mut StdRng::seed_from_u64(3));
        assert_eq!(data, original);
    }
}
