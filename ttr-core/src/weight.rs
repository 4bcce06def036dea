//! Edge weights for minimum-cost search.
//!
//! A label only has to be [`Weighted`] to be searchable: it projects itself to
//! a [`Cost`], and costs are summed along a path. Plain numbers are their own
//! weight; [`Route`](crate::route::Route) projects to its length.

use std::fmt::Debug;
use std::ops::Add;

/// A summable, orderable scalar with a zero element.
pub trait Cost: Copy + PartialOrd + Add<Output = Self> + Debug {
    /// Neutral element for addition.
    const ZERO: Self;

    /// Whether this cost is below zero. Search refuses such weights.
    fn is_negative(&self) -> bool {
        *self < Self::ZERO
    }

    /// `self + rhs`, or `None` if the sum does not fit in `Self`.
    fn checked_add(self, rhs: Self) -> Option<Self>;
}

macro_rules! impl_int_cost {
    ($($t:ty),*) => {
        $(
            impl Cost for $t {
                const ZERO: Self = 0;

                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_add(self, rhs)
                }
            }
        )*
    };
}

// Float sums saturate to infinity, which still orders above every finite cost.
macro_rules! impl_float_cost {
    ($($t:ty),*) => {
        $(
            impl Cost for $t {
                const ZERO: Self = 0.0;

                fn checked_add(self, rhs: Self) -> Option<Self> {
                    Some(self + rhs)
                }
            }
        )*
    };
}

impl_int_cost!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
impl_float_cost!(f32, f64);

/// An edge label that can be projected to a cost.
pub trait Weighted {
    type Cost: Cost;

    fn weight(&self) -> Self::Cost;
}

impl<C: Cost> Weighted for C {
    type Cost = C;

    fn weight(&self) -> C {
        *self
    }
}
