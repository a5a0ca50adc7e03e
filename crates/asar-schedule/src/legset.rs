//! `LegSet` — the unassigned legs of a state, as a bitset over `LegId`.

use asar_core::LegId;
use smallvec::{SmallVec, smallvec};

const WORD_BITS: usize = u64::BITS as usize;

/// A set of legs.  Up to 128 legs fit inline without a heap allocation.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct LegSet {
    words: SmallVec<[u64; 2]>,
    len:   usize,
}

impl LegSet {
    /// Every leg of a domain with `leg_count` legs.
    pub fn full(leg_count: usize) -> Self {
        let mut words: SmallVec<[u64; 2]> = smallvec![u64::MAX; leg_count.div_ceil(WORD_BITS)];
        let tail = leg_count % WORD_BITS;
        if tail != 0 {
            if let Some(last) = words.last_mut() {
                *last = (1u64 << tail) - 1;
            }
        }
        Self { words, len: leg_count }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn contains(&self, leg: LegId) -> bool {
        let (word, bit) = locate(leg);
        self.words.get(word).is_some_and(|w| w & bit != 0)
    }

    /// Remove `leg`.  Returns `false` if it was not present.
    pub fn remove(&mut self, leg: LegId) -> bool {
        let (word, bit) = locate(leg);
        match self.words.get_mut(word) {
            Some(w) if *w & bit != 0 => {
                *w &= !bit;
                self.len -= 1;
                true
            }
            _ => false,
        }
    }

    /// A copy of `self` without `leg`.
    pub fn without(&self, leg: LegId) -> Self {
        let mut next = self.clone();
        next.remove(leg);
        next
    }

    /// Members in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = LegId> + '_ {
        self.words.iter().enumerate().flat_map(|(w, &word)| {
            let mut bits = word;
            std::iter::from_fn(move || {
                if bits == 0 {
                    return None;
                }
                let b = bits.trailing_zeros() as usize;
                bits &= bits - 1;
                LegId::try_from(w * WORD_BITS + b).ok()
            })
        })
    }
}

#[inline]
fn locate(leg: LegId) -> (usize, u64) {
    let i = leg.index();
    (i / WORD_BITS, 1u64 << (i % WORD_BITS))
}
