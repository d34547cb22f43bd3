use std::sync::{PoisonError, RwLock};

/// Single-slot cell holding the most recent value of one sensor channel.
///
/// Writers overwrite, readers copy. The whole value is swapped under the lock,
/// so a reader never observes half of a multi-axis reading. The version counts
/// writes and lets callers tell whether the channel has ever reported.
#[derive(Debug, Default)]
pub struct LatestValue<T> {
    slot: RwLock<(u64, T)>,
}

impl<T: Copy> LatestValue<T> {
    pub fn new(initial: T) -> Self {
        Self {
            slot: RwLock::new((0, initial)),
        }
    }

    pub fn store(&self, value: T) {
        let mut slot = self.slot.write().unwrap_or_else(PoisonError::into_inner);
        slot.0 = slot.0.wrapping_add(1);
        slot.1 = value;
    }

    pub fn load(&self) -> T {
        self.slot.read().unwrap_or_else(PoisonError::into_inner).1
    }

    /// Returns `(version, value)` read in one step.
    pub fn load_versioned(&self) -> (u64, T) {
        *self.slot.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn version(&self) -> u64 {
        self.load_versioned().0
    }
}
