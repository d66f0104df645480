//! Value option
//!
//! An optional value stored inline next to an explicit presence flag. The
//! absent state still carries `T::default()`, so an `Opt<T>` is exactly as
//! large as `T` plus a flag and never touches the heap.
//!
//! The JSON form is transparent: a present value is encoded as `T` itself, an
//! absent one as `null`. If `T` is itself nullable (`Option<U>`, `Ptr<U>`, ...)
//! a present-but-null payload and an absent option both become `null` and both
//! decode as absent. That loss is accepted; don't model a domain that way.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::iter::FusedIterator;

/// Optional value with an explicit presence flag.
///
/// The default value is absent and safe to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Opt<T> {
    value: T,
    present: bool,
}

impl<T> Opt<T> {
    /// Create a present option holding `value`
    pub fn some(value: T) -> Self {
        Self {
            value,
            present: true,
        }
    }

    pub fn is_some(&self) -> bool {
        self.present
    }

    pub fn is_none(&self) -> bool {
        !self.present
    }

    /// Alias for [`Opt::is_none`], handy as `skip_serializing_if = "Opt::is_zero"`
    pub fn is_zero(&self) -> bool {
        self.is_none()
    }

    /// Return the contained value.
    ///
    /// # Panics
    ///
    /// Panics if the option is absent. That is always a caller bug; use
    /// [`Opt::unwrap_or`] or [`Opt::unwrap_or_else`] when absence is expected.
    #[track_caller]
    pub fn unwrap(self) -> T {
        if !self.present {
            panic!("called `Opt::unwrap()` on an absent option");
        }

        self.value
    }

    /// Return the contained value or the eagerly evaluated `default`.
    /// See also [`Opt::unwrap_or_else`].
    pub fn unwrap_or(self, default: T) -> T {
        if self.present { self.value } else { default }
    }

    /// Return the contained value or compute one with `f`, which only runs
    /// when the option is absent.
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        if self.present { self.value } else { f() }
    }

    /// Iterate over the possibly contained value.
    ///
    /// Yields at most one item and can be called again for a fresh pass.
    pub fn all(&self) -> Iter<'_, T> {
        Iter {
            inner: self.as_option(),
        }
    }

    pub fn as_option(&self) -> Option<&T> {
        self.present.then_some(&self.value)
    }

    pub fn into_option(self) -> Option<T> {
        self.present.then_some(self.value)
    }
}

impl<T: Default> Opt<T> {
    /// Create an absent option. Same as `Opt::default()`.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn map<U, F>(self, f: F) -> Opt<U>
    where
        U: Default,
        F: FnOnce(T) -> U,
    {
        if self.present {
            Opt::some(f(self.value))
        } else {
            Opt::none()
        }
    }
}

impl<T: Default> From<Option<T>> for Opt<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Opt::some(v),
            None => Opt::none(),
        }
    }
}

impl<T> From<Opt<T>> for Option<T> {
    fn from(value: Opt<T>) -> Self {
        value.into_option()
    }
}

/// Borrowing iterator returned by [`Opt::all`]
#[derive(Debug)]
pub struct Iter<'a, T> {
    inner: Option<&'a T>,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self { inner: self.inner }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::from(self.inner.is_some());
        (n, Some(n))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator over the possibly contained value
#[derive(Debug, Clone)]
pub struct IntoIter<T> {
    inner: Option<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::from(self.inner.is_some());
        (n, Some(n))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for Opt<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.into_option(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Opt<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.all()
    }
}

impl<T: Serialize> Serialize for Opt<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if self.present {
            serializer.serialize_some(&self.value)
        } else {
            serializer.serialize_none()
        }
    }
}

impl<'de, T> Deserialize<'de> for Opt<T>
where
    T: Deserialize<'de> + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // `null` leaves the default in place, anything else decodes a fresh T
        Ok(Option::<T>::deserialize(deserializer)?.into())
    }
}
