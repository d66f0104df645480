//! Reference option
//!
//! [`Ptr`] keeps a single handle to a heap allocation instead of an inline
//! value and flag. It costs one word no matter how large `T` is, which pays off
//! when many optional fields sit in one struct, at the price of a clone on
//! every read.
//!
//! The pointee is never handed out. Every accessor returns a copy, so two
//! callers reading the same `Ptr` can't observe each other's edits to what
//! they got back.
//!
//! Construction does not copy. [`Ptr::wrap`] takes the caller's handle as is,
//! and a caller that kept its own clone of that `Arc` can still write through
//! it; the next read of the `Ptr` sees the change. Decoding always allocates,
//! so options decoded from the same payload never share storage.

use crate::opt::Opt;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::FusedIterator;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard};

/// Heap handle held by a [`Ptr`]
pub type Shared<T> = Arc<RwLock<T>>;

/// Optional handle to a heap-allocated `T` with copy-on-read access.
pub struct Ptr<T> {
    inner: Option<Shared<T>>,
}

// The option only ever reads, so a writer that panicked elsewhere doesn't
// make the value unreadable here.
fn read<T>(shared: &Shared<T>) -> RwLockReadGuard<'_, T> {
    shared.read().unwrap_or_else(PoisonError::into_inner)
}

impl<T> Ptr<T> {
    /// Allocate a new handle for `value`
    pub fn new(value: T) -> Self {
        Self {
            inner: Some(Arc::new(RwLock::new(value))),
        }
    }

    pub fn none() -> Self {
        Self { inner: None }
    }

    /// Take ownership of the given handle without copying the pointee.
    ///
    /// Passing `None` yields an absent pointer.
    pub fn wrap(handle: Option<Shared<T>>) -> Self {
        Self { inner: handle }
    }

    pub fn is_some(&self) -> bool {
        self.inner.is_some()
    }

    pub fn is_none(&self) -> bool {
        self.inner.is_none()
    }

    pub fn is_zero(&self) -> bool {
        self.is_none()
    }

    /// Whether both pointers hold the same allocation
    pub fn shares_storage(&self, other: &Ptr<T>) -> bool {
        match (&self.inner, &other.inner) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl<T: Clone> Ptr<T> {
    /// Return a copy of the pointee.
    ///
    /// # Panics
    ///
    /// Panics if the pointer is absent.
    #[track_caller]
    pub fn unwrap(&self) -> T {
        match &self.inner {
            Some(shared) => read(shared).clone(),
            None => panic!("called `Ptr::unwrap()` on an absent pointer"),
        }
    }

    /// Return a copy of the pointee or the eagerly evaluated `default`.
    pub fn unwrap_or(&self, default: T) -> T {
        match &self.inner {
            Some(shared) => read(shared).clone(),
            None => default,
        }
    }

    /// Return a copy of the pointee or compute one with `f`, which only runs
    /// when the pointer is absent.
    pub fn unwrap_or_else<F>(&self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        match &self.inner {
            Some(shared) => read(shared).clone(),
            None => f(),
        }
    }

    /// Iterate over a copy of the possibly contained value.
    ///
    /// The copy is taken when the iterator is advanced, not when it's created.
    pub fn all(&self) -> Copies<'_, T> {
        Copies {
            inner: self.inner.as_ref(),
        }
    }

    pub fn to_opt(&self) -> Opt<T>
    where
        T: Default,
    {
        match &self.inner {
            Some(shared) => Opt::some(read(shared).clone()),
            None => Opt::none(),
        }
    }
}

impl<T> Clone for Ptr<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T> Default for Ptr<T> {
    fn default() -> Self {
        Self::none()
    }
}

impl<T> From<T> for Ptr<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: fmt::Debug> fmt::Debug for Ptr<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            Some(shared) => f.debug_tuple("Ptr").field(&*read(shared)).finish(),
            None => f.write_str("Ptr(None)"),
        }
    }
}

impl<T: PartialEq> PartialEq for Ptr<T> {
    fn eq(&self, other: &Self) -> bool {
        match (&self.inner, &other.inner) {
            (None, None) => true,
            (Some(a), Some(b)) => Arc::ptr_eq(a, b) || *read(a) == *read(b),
            _ => false,
        }
    }
}

/// Iterator returned by [`Ptr::all`]
pub struct Copies<'a, T> {
    inner: Option<&'a Shared<T>>,
}

impl<T> Clone for Copies<'_, T> {
    fn clone(&self) -> Self {
        Self { inner: self.inner }
    }
}

impl<T: Clone> Iterator for Copies<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take().map(|shared| read(shared).clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::from(self.inner.is_some());
        (n, Some(n))
    }
}

impl<T: Clone> ExactSizeIterator for Copies<'_, T> {}
impl<T: Clone> FusedIterator for Copies<'_, T> {}

impl<T: Serialize> Serialize for Ptr<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match &self.inner {
            Some(shared) => serializer.serialize_some(&*read(shared)),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de, T> Deserialize<'de> for Ptr<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // always a fresh allocation, never one shared with another copy
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(value) => Ptr::new(value),
            None => Ptr::none(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
    struct Car {
        serial: String,
    }

    fn car(serial: &str) -> Car {
        Car {
            serial: serial.to_string(),
        }
    }

    #[test]
    fn test_wrap_none_is_absent() {
        let ptr: Ptr<Car> = Ptr::wrap(None);

        assert!(ptr.is_none());
        assert!(ptr.is_zero());
        assert!(!ptr.is_some());
    }

    #[test]
    fn test_new_is_present() {
        let ptr = Ptr::new(car("1234"));

        assert!(ptr.is_some());
        assert_eq!(ptr.unwrap(), car("1234"));
    }

    #[test]
    #[should_panic(expected = "called `Ptr::unwrap()` on an absent pointer")]
    fn test_unwrap_none_panics() {
        let ptr: Ptr<Car> = Ptr::none();
        ptr.unwrap();
    }

    #[test]
    fn test_unwrap_returns_copies() {
        let ptr = Ptr::new(car("1234"));

        let mut first = ptr.unwrap();
        first.serial = "2345".to_string();

        assert_eq!(ptr.unwrap().serial, "1234");
    }

    #[test]
    fn test_wrap_sees_writes_through_retained_handle() {
        let handle = Arc::new(RwLock::new(car("1234")));
        let ptr = Ptr::wrap(Some(Arc::clone(&handle)));

        handle.write().unwrap().serial = "9999".to_string();

        assert_eq!(ptr.unwrap().serial, "9999");
    }

    #[test]
    fn test_clone_shares_storage() {
        let ptr = Ptr::new(car("1234"));
        let copy = ptr.clone();

        assert!(ptr.shares_storage(&copy));
        assert!(!ptr.shares_storage(&Ptr::new(car("1234"))));
        assert!(!Ptr::<Car>::none().shares_storage(&Ptr::none()));
    }

    #[test]
    fn test_unwrap_or_else_is_lazy() {
        let calls = Cell::new(0);
        let supplier = || {
            calls.set(calls.get() + 1);
            car("fallback")
        };

        assert_eq!(Ptr::new(car("1")).unwrap_or_else(supplier), car("1"));
        assert_eq!(calls.get(), 0);

        assert_eq!(Ptr::none().unwrap_or_else(supplier), car("fallback"));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_unwrap_or() {
        assert_eq!(Ptr::new(1).unwrap_or(2), 1);
        assert_eq!(Ptr::none().unwrap_or(2), 2);
    }

    #[test]
    fn test_all_is_restartable() {
        let ptr = Ptr::new(car("1234"));
        for _ in 0..2 {
            let items: Vec<Car> = ptr.all().collect();
            assert_eq!(items, vec![car("1234")]);
        }

        let absent: Ptr<Car> = Ptr::none();
        for _ in 0..2 {
            assert_eq!(absent.all().count(), 0);
        }
    }

    #[test]
    fn test_all_copies_lazily() {
        let handle = Arc::new(RwLock::new(1));
        let ptr = Ptr::wrap(Some(Arc::clone(&handle)));

        let mut iter = ptr.all();
        *handle.write().unwrap() = 2;

        assert_eq!(iter.next(), Some(2));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_to_opt() {
        assert_eq!(Ptr::new(5).to_opt(), Opt::some(5));
        assert_eq!(Ptr::<i32>::none().to_opt(), Opt::none());
    }

    #[test]
    fn test_equality_compares_pointees() {
        assert_eq!(Ptr::new(car("a")), Ptr::new(car("a")));
        assert_ne!(Ptr::new(car("a")), Ptr::new(car("b")));
        assert_ne!(Ptr::new(car("a")), Ptr::none());
        assert_eq!(Ptr::<Car>::none(), Ptr::none());
    }

    #[test]
    fn test_json_roundtrip() {
        assert_eq!(serde_json::to_string(&Ptr::new(3)).unwrap(), "3");
        assert_eq!(serde_json::to_string(&Ptr::<i32>::none()).unwrap(), "null");

        let absent: Ptr<i32> = serde_json::from_str("null").unwrap();
        assert!(absent.is_none());

        let present: Ptr<i32> = serde_json::from_str("7").unwrap();
        assert_eq!(present.unwrap(), 7);
    }

    #[test]
    fn test_decode_allocates_fresh_storage() {
        let payload = r#"{"serial":"1234"}"#;
        let a: Ptr<Car> = serde_json::from_str(payload).unwrap();
        let b: Ptr<Car> = serde_json::from_str(payload).unwrap();

        assert!(!a.shares_storage(&b));

        let mut copy = a.unwrap();
        copy.serial = "changed".to_string();
        assert_eq!(b.unwrap().serial, "1234");
        assert_eq!(a.unwrap().serial, "1234");
    }

    #[test]
    fn test_poisoned_lock_is_still_readable() {
        let handle = Arc::new(RwLock::new(1));
        let ptr = Ptr::wrap(Some(Arc::clone(&handle)));

        let writer = Arc::clone(&handle);
        let _ = std::thread::spawn(move || {
            let _guard = writer.write().unwrap();
            panic!("writer failed");
        })
        .join();

        assert!(handle.is_poisoned());
        assert_eq!(ptr.unwrap(), 1);
    }
}
