//! Representative color sets and L1 nearest-color lookup.

use rand::Rng;

/// Sum of absolute per-channel differences.
#[inline]
pub fn l1_distance(a: [u8; 3], b: [u8; 3]) -> u32 {
    a.iter()
        .zip(b.iter())
        .map(|(&x, &y)| (x as i32 - y as i32).unsigned_abs())
        .sum()
}

/// Draw a color with every channel uniform in `0..=255`.
#[inline]
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> [u8; 3] {
    [rng.gen(), rng.gen(), rng.gen()]
}

/// An ordered list of representative colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<[u8; 3]>,
}

impl Palette {
    pub fn new(colors: Vec<[u8; 3]>) -> Self {
        Self { colors }
    }

    /// A palette of `len` colors drawn from `rng`.
    pub fn random<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Self {
        Self {
            colors: (0..len).map(|_| random_color(rng)).collect(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    #[inline]
    pub fn colors(&self) -> &[[u8; 3]] {
        &self.colors
    }

    #[inline]
    pub fn get(&self, index: usize) -> [u8; 3] {
        self.colors[index]
    }

    #[inline]
    pub fn set(&mut self, index: usize, color: [u8; 3]) {
        self.colors[index] = color;
    }

    pub fn contains(&self, color: [u8; 3]) -> bool {
        self.colors.contains(&color)
    }

    /// Index of the color with the smallest L1 distance to `color`.
    ///
    /// Equal distances resolve to the lowest index. Returns `None` only for
    /// an empty palette.
    pub fn nearest(&self, color: [u8; 3]) -> Option<usize> {
        let mut best: Option<(usize, u32)> = None;
        for (i, &candidate) in self.colors.iter().enumerate() {
            let d = l1_distance(color, candidate);
            match best {
                Some((_, best_d)) if d >= best_d => {}
                _ => best = Some((i, d)),
            }
        }
        best.map(|(i, _)| i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_l1_distance() {
        assert_eq!(l1_distance([0, 0, 0], [0, 0, 0]), 0);
        assert_eq!(l1_distance([10, 20, 30], [40, 50, 60]), 90);
        assert_eq!(l1_distance([255, 0, 0], [0, 255, 0]), 510);
    }

    #[test]
    fn test_nearest_picks_minimum() {
        let palette = Palette::new(vec![[0, 0, 0], [128, 128, 128], [255, 255, 255]]);
        assert_eq!(palette.nearest([10, 10, 10]), Some(0));
        assert_eq!(palette.nearest([120, 140, 130]), Some(1));
        assert_eq!(palette.nearest([250, 255, 240]), Some(2));
    }

    #[test]
    fn test_nearest_tie_lowest_index() {
        let palette = Palette::new(vec![[0, 0, 0], [20, 0, 0], [0, 0, 0]]);
        assert_eq!(palette.nearest([10, 0, 0]), Some(0));
        assert_eq!(palette.nearest([0, 0, 0]), Some(0));
    }

    #[test]
    fn test_nearest_empty() {
        assert_eq!(Palette::new(Vec::new()).nearest([1, 2, 3]), None);
    }

    #[test]
    fn test_random_palette_reproducible() {
        let a = Palette::random(4, &mut StdRng::seed_from_u64(7));
        let b = Palette::random(4, &mut StdRng::seed_from_u64(7));
        assert_eq!(a.len(), 4);
        assert_eq!(a, b);
    }
}
