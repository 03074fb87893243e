//! Random color generation.
//!
//! The generator is always supplied by the caller or taken from the
//! thread-local source, so no generator state is shared between threads.

use rand::Rng;

use crate::color::Rgba;

/// A fully opaque color with each channel drawn uniformly from 16-bit range.
pub fn random_with<R: Rng>(rng: &mut R) -> Rgba {
    let mut channel = || f64::from(rng.random::<u16>()) / f64::from(u16::MAX);
    let r = channel();
    let g = channel();
    let b = channel();
    Rgba::opaque(r, g, b)
}

/// [`random_with`] using the thread-local generator.
pub fn random() -> Rgba {
    random_with(&mut rand::rng())
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn test_random_is_opaque_and_in_range() {
        for _ in 0..64 {
            let color = random();
            assert_eq!(color.a, 1.0);
            for c in [color.r, color.g, color.b] {
                assert!((0.0..=1.0).contains(&c), "channel {c} out of range");
            }
        }
    }

    #[test]
    fn test_seeded_generator_is_reproducible() {
        let a = random_with(&mut StdRng::seed_from_u64(7));
        let b = random_with(&mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_channels_are_16_bit_quantized() {
        let mut rng = StdRng::seed_from_u64(42);
        let color = random_with(&mut rng);
        for c in [color.r, color.g, color.b] {
            let scaled = c * f64::from(u16::MAX);
            assert!((scaled - scaled.round()).abs() < 1e-6, "{c} is not a 16-bit step");
        }
    }
}
