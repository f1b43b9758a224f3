//! Per-severity enable bits

use super::severity::Severity;
use std::fmt;

const ALL_BITS: u8 = (1 << Severity::ALL.len()) - 1;

/// Fixed-size bit vector indexed by [`Severity`].
///
/// Unlike a threshold, every severity is switched independently. `Off` has no
/// bit: it is never enabled and enabling or disabling it does nothing.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct LevelSet {
    bits: u8,
}

impl LevelSet {
    /// A set with every severity enabled.
    pub const fn all() -> Self {
        Self { bits: ALL_BITS }
    }

    /// A set with every severity disabled.
    pub const fn none() -> Self {
        Self { bits: 0 }
    }

    /// A set enabling `threshold` and everything above it.
    pub fn at_least(threshold: Severity) -> Self {
        let mut set = Self::none();
        for severity in Severity::ALL.iter().filter(|s| **s >= threshold) {
            set.enable(*severity);
        }
        set
    }

    #[inline]
    fn mask(severity: Severity) -> u8 {
        match severity {
            Severity::Off => 0,
            s => 1 << s.index(),
        }
    }

    pub fn enable(&mut self, severity: Severity) {
        self.bits |= Self::mask(severity);
    }

    pub fn disable(&mut self, severity: Severity) {
        self.bits &= !Self::mask(severity);
    }

    pub fn enable_all(&mut self) {
        self.bits = ALL_BITS;
    }

    pub fn disable_all(&mut self) {
        self.bits = 0;
    }

    #[inline]
    pub fn is_enabled(&self, severity: Severity) -> bool {
        let mask = Self::mask(severity);
        mask != 0 && self.bits & mask == mask
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn is_full(&self) -> bool {
        self.bits == ALL_BITS
    }

    /// Enabled severities in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = Severity> + '_ {
        Severity::ALL.into_iter().filter(move |s| self.is_enabled(*s))
    }
}

impl Default for LevelSet {
    fn default() -> Self {
        Self::all()
    }
}

impl fmt::Debug for LevelSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_all_enabled() {
        let set = LevelSet::default();
        for severity in Severity::ALL {
            assert!(set.is_enabled(severity));
        }
        assert!(set.is_full());
        assert!(!set.is_enabled(Severity::Off));
    }

    #[test]
    fn test_independent_bits() {
        let mut set = LevelSet::all();
        set.disable(Severity::Info);
        assert!(!set.is_enabled(Severity::Info));
        assert!(set.is_enabled(Severity::Debug));
        assert!(set.is_enabled(Severity::Warn));

        set.disable_all();
        assert!(set.is_empty());
        set.enable(Severity::Critical);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![Severity::Critical]);
    }

    #[test]
    fn test_off_has_no_bit() {
        let mut set = LevelSet::none();
        set.enable(Severity::Off);
        assert!(set.is_empty());
        assert!(!set.is_enabled(Severity::Off));
    }

    #[test]
    fn test_at_least() {
        let set = LevelSet::at_least(Severity::Warn);
        assert_eq!(
            set.iter().collect::<Vec<_>>(),
            vec![Severity::Warn, Severity::Error, Severity::Critical]
        );
        assert!(LevelSet::at_least(Severity::Off).is_empty());
    }
}
