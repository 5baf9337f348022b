//! Capabilities the generated transforms are conditioned on.

use std::mem;

/// Produces an independent copy of `self`.
///
/// Every `VariantN` implements this when all of its payload types do.
pub trait Duplicable<T> {
    fn duplicate(&self) -> T;
}

/// Moves the contents out of `self`, leaving it in an emptied state.
///
/// Every `VariantN` implements this when all of its payload types do; the
/// populated alternative stays populated, with an emptied payload.
pub trait Relinquishable<T> {
    fn relinquish(&mut self) -> T;
}

macro_rules! duplicable_by_copy {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Duplicable<$ty> for $ty {
                fn duplicate(&self) -> $ty {
                    *self
                }
            }
        )*
    };
}

duplicable_by_copy!(
    (), bool, char, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64,
);

impl Duplicable<String> for String {
    fn duplicate(&self) -> String {
        self.clone()
    }
}

impl<T: Duplicable<T>> Duplicable<Vec<T>> for Vec<T> {
    fn duplicate(&self) -> Vec<T> {
        self.iter().map(|item| item.duplicate()).collect()
    }
}

impl<T: Duplicable<T>> Duplicable<Option<T>> for Option<T> {
    fn duplicate(&self) -> Option<T> {
        self.as_ref().map(|item| item.duplicate())
    }
}

impl<T: Duplicable<T>> Duplicable<Box<T>> for Box<T> {
    fn duplicate(&self) -> Box<T> {
        Box::new((**self).duplicate())
    }
}

impl Relinquishable<String> for String {
    fn relinquish(&mut self) -> String {
        mem::take(self)
    }
}

impl<T> Relinquishable<Vec<T>> for Vec<T> {
    fn relinquish(&mut self) -> Vec<T> {
        mem::take(self)
    }
}

impl<T> Relinquishable<Option<T>> for Option<T> {
    fn relinquish(&mut self) -> Option<T> {
        self.take()
    }
}
