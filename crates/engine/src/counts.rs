// crates/engine/src/counts.rs
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

use crate::classify::LineKind;

/// Aggregate line counts for a classification run.
///
/// Every recorded line increments `total` and exactly one of the three
/// category counters, so `total == blank + comment + code` always holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counters {
    pub total: usize,
    pub blank: usize,
    pub comment: usize,
    pub code: usize,
}

impl Counters {
    #[inline]
    pub const fn zero() -> Self {
        Self {
            total: 0,
            blank: 0,
            comment: 0,
            code: 0,
        }
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.total == 0
    }

    /// Count one classified line.
    pub fn record(&mut self, kind: LineKind) {
        self.total += 1;
        match kind {
            LineKind::Comment => self.comment += 1,
            LineKind::Blank => self.blank += 1,
            LineKind::Code => self.code += 1,
        }
    }
}

impl Add for Counters {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            total: self.total + rhs.total,
            blank: self.blank + rhs.blank,
            comment: self.comment + rhs.comment,
            code: self.code + rhs.code,
        }
    }
}

impl AddAssign for Counters {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl std::iter::Sum for Counters {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}
