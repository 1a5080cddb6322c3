//! Ordering relations used to shape a heap.
//!
//! A predicate answers "should `a` be considered ordered before `b`". The heap keeps the item
//! that nothing precedes at its root, so whichever relation is injected decides which end of the
//! stream gets retained: a less-than relation keeps the lowest scores, greater-than the highest.
use std::marker::PhantomData;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub trait Precedes<T: ?Sized> {
    /// Strict relation, must be false when `a` and `b` are equivalent
    fn precedes(&self, a: &T, b: &T) -> bool;
}

impl<T: ?Sized, F> Precedes<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn precedes(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// Compares the score component of `(label, score)` pairs with `<`
#[inline]
pub fn cmp_lt<L, K: PartialOrd>(a: &(L, K), b: &(L, K)) -> bool {
    a.1 < b.1
}

/// Compares the score component of `(label, score)` pairs with `>`
#[inline]
pub fn cmp_gt<L, K: PartialOrd>(a: &(L, K), b: &(L, K)) -> bool {
    a.1 > b.1
}

/// Selects one of the two canonical score relations at runtime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Order {
    /// Retain the lowest scores
    #[default]
    Lt,
    /// Retain the highest scores
    Gt,
}

impl<L, K: PartialOrd> Precedes<(L, K)> for Order {
    #[inline]
    fn precedes(&self, a: &(L, K), b: &(L, K)) -> bool {
        match self {
            Order::Lt => cmp_lt(a, b),
            Order::Gt => cmp_gt(a, b),
        }
    }
}

impl std::fmt::Display for Order {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Order::Lt => write!(f, "lt"),
            Order::Gt => write!(f, "gt"),
        }
    }
}

/// Orders items by a key extracted from them, smallest key first.
pub struct KeyLessThan<F, K> {
    key: F,
    _key: PhantomData<fn() -> K>,
}

/// Orders items by a key extracted from them, largest key first.
pub struct KeyGreaterThan<F, K> {
    key: F,
    _key: PhantomData<fn() -> K>,
}

pub fn by_key_lt<T, K, F>(key: F) -> KeyLessThan<F, K>
where
    F: Fn(&T) -> K,
    K: PartialOrd,
{
    KeyLessThan {
        key,
        _key: PhantomData,
    }
}

pub fn by_key_gt<T, K, F>(key: F) -> KeyGreaterThan<F, K>
where
    F: Fn(&T) -> K,
    K: PartialOrd,
{
    KeyGreaterThan {
        key,
        _key: PhantomData,
    }
}

impl<T, K, F> Precedes<T> for KeyLessThan<F, K>
where
    F: Fn(&T) -> K,
    K: PartialOrd,
{
    #[inline]
    fn precedes(&self, a: &T, b: &T) -> bool {
        (self.key)(a) < (self.key)(b)
    }
}

impl<T, K, F> Precedes<T> for KeyGreaterThan<F, K>
where
    F: Fn(&T) -> K,
    K: PartialOrd,
{
    #[inline]
    fn precedes(&self, a: &T, b: &T) -> bool {
        (self.key)(a) > (self.key)(b)
    }
}
