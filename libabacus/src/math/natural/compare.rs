use crate::math::Natural;
use std::cmp::Ordering;

impl Ord for Natural {
    /// Compares by number of digits first, then digit by digit from the most significant.
    fn cmp(&self, other: &Natural) -> Ordering {
        self.digits.len().cmp(&other.digits.len()).then_with(|| {
            for (a, b) in self.digits.iter().rev().zip(other.digits.iter().rev()) {
                match a.cmp(b) {
                    Ordering::Equal => continue,
                    ord => return ord,
                }
            }
            Ordering::Equal
        })
    }
}

impl PartialOrd for Natural {
    fn partial_cmp(&self, other: &Natural) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
