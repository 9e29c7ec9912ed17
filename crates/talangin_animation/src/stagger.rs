//! Staggered start delays for groups of elements

/// Spacing between the start times of a group's tweens
///
/// The first element starts first; each later one waits `each_ms` more.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stagger {
    /// Delay added per step (ms)
    pub each_ms: u32,
}

impl Stagger {
    pub fn new(each_ms: u32) -> Self {
        Self { each_ms }
    }

    /// Extra delay for the element at `index`
    pub fn delay_for_index(&self, index: usize) -> u32 {
        let step = u32::try_from(index).unwrap_or(u32::MAX);
        self.each_ms.saturating_mul(step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward() {
        let stagger = Stagger::new(150);
        assert_eq!(stagger.delay_for_index(0), 0);
        assert_eq!(stagger.delay_for_index(2), 300);
    }

    #[test]
    fn test_saturates() {
        assert_eq!(Stagger::new(u32::MAX).delay_for_index(3), u32::MAX);
    }
}
