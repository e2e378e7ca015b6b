use evaluation::TaperedScore;

pub const DEFAULT_CACHE_SIZE: usize = 65_536;

#[derive(Debug, Clone, Copy, Default)]
struct Slot<T> {
    key: u64,
    value: T,
}

/// Direct-mapped table indexed by `key % size`. A probe hits only when the stored key
/// matches; a store always overwrites the slot.
///
/// Positions and pawn structures repeat constantly within a search, so reusing their
/// scores skips most of the evaluation work.
pub struct Cache<T> {
    slots: Vec<Option<Slot<T>>>,
}

impl<T: Copy> Cache<T> {
    pub fn new(size: usize) -> Self {
        Self {
            slots: vec![None; size.max(1)],
        }
    }

    #[inline(always)]
    fn index(&self, key: u64) -> usize {
        (key % self.slots.len() as u64) as usize
    }

    #[inline(always)]
    pub fn probe(&self, key: u64) -> Option<T> {
        match self.slots[self.index(key)] {
            Some(slot) if slot.key == key => Some(slot.value),
            _ => None,
        }
    }

    #[inline(always)]
    pub fn store(&mut self, key: u64, value: T) {
        let index = self.index(key);
        self.slots[index] = Some(Slot { key, value });
    }

    pub fn clear(&mut self) {
        self.slots.fill(None);
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }
}

/// Whole-position scores from White's point of view, keyed by the board hash.
pub type EvalCache = Cache<i32>;

/// Pawn-structure totals per side, keyed by the structural pawn key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PawnEntry {
    pub white: TaperedScore,
    pub black: TaperedScore,
}

pub type PawnCache = Cache<PawnEntry>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_requires_exact_key() {
        let mut cache: Cache<i32> = Cache::new(16);
        assert_eq!(cache.probe(3), None);
        cache.store(3, 42);
        assert_eq!(cache.probe(3), Some(42));
        // same slot, different key
        assert_eq!(cache.probe(19), None);
    }

    #[test]
    fn test_store_overwrites() {
        let mut cache: Cache<i32> = Cache::new(16);
        cache.store(3, 42);
        cache.store(19, 7);
        assert_eq!(cache.probe(3), None);
        assert_eq!(cache.probe(19), Some(7));
    }

    #[test]
    fn test_clear() {
        let mut cache: PawnCache = Cache::new(DEFAULT_CACHE_SIZE);
        let entry = PawnEntry {
            white: TaperedScore::new(5, -3),
            black: TaperedScore::new(-1, 2),
        };
        cache.store(0, entry);
        assert_eq!(cache.probe(0), Some(entry));
        cache.clear();
        assert_eq!(cache.probe(0), None);
        assert_eq!(cache.capacity(), DEFAULT_CACHE_SIZE);
    }
}
