//! Constant-value cache of a deployed token.

use alloy_primitives::U256;

/// One memoized value.
///
/// `Unset` and `Cached` are distinct states, so a cached `0` or empty string
/// is never mistaken for a missing value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot<T> {
    Unset,
    Cached(T),
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self::Unset
    }
}

impl<T: Clone> Slot<T> {
    pub fn get(&self) -> Option<T> {
        match self {
            Self::Cached(value) => Some(value.clone()),
            Self::Unset => None,
        }
    }

    /// Store `value` unless the slot was filled in the meantime; returns the
    /// value the slot holds afterwards.
    pub fn fill(&mut self, value: T) -> T {
        match self {
            Self::Cached(existing) => existing.clone(),
            Self::Unset => {
                *self = Self::Cached(value.clone());
                value
            }
        }
    }
}

impl<T> Slot<T> {
    pub const fn is_cached(&self) -> bool {
        matches!(self, Self::Cached(_))
    }

    pub fn clear(&mut self) {
        *self = Self::Unset;
    }
}

/// Memoized ERC-20 constants.
///
/// `generation` advances on every [`clear`](Self::clear), so a fetch started
/// before a flush can tell that its result is stale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstantCache {
    pub name: Slot<String>,
    pub symbol: Slot<String>,
    pub decimals: Slot<u8>,
    pub total_supply: Slot<U256>,
    generation: u64,
}

impl ConstantCache {
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.symbol.clear();
        self.decimals.clear();
        self.total_supply.clear();
        self.generation = self.generation.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_a_cached_value() {
        let mut slot = Slot::default();
        assert_eq!(slot.get(), None);

        assert_eq!(slot.fill(0u8), 0);
        assert!(slot.is_cached());
        assert_eq!(slot.get(), Some(0));
    }

    #[test]
    fn test_first_fill_wins() {
        let mut slot = Slot::default();
        slot.fill("USDC".to_string());
        assert_eq!(slot.fill("USDT".to_string()), "USDC");
    }

    #[test]
    fn test_clear_all() {
        let mut cache = ConstantCache::default();
        cache.name.fill(String::new());
        cache.decimals.fill(18);
        cache.total_supply.fill(U256::from(1));

        cache.clear();
        assert!(!cache.name.is_cached());
        assert!(!cache.decimals.is_cached());
        assert!(!cache.total_supply.is_cached());
        assert_eq!(cache.generation(), 1);

        cache.clear();
        assert_eq!(cache.generation(), 2);
    }
}
