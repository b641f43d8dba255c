//! # Synchronized Factories
//!
//! A bare [`ConcreteFactory`](crate::ConcreteFactory) follows the borrow checker: any number
//! of threads may create through `&factory`, and `set_prototype` needs `&mut factory`. That is
//! enough whenever prototypes are registered during setup.
//!
//! When prototypes must be replaced while other threads keep creating, wrap the factory in
//! [`Synchronized`]. Creation takes the read lock and prototype registration the write lock,
//! so a clone never observes a half-replaced prototype. The wrapper implements every
//! `Creator<P>` of the factory it wraps and therefore coerces to the same abstract factory.

use crate::framework::concrete::PrototypeSlot;
use crate::framework::creator::Creator;
use crate::framework::product::Product;
use std::fmt;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// A factory behind a read/write lock.
pub struct Synchronized<T> {
    inner: RwLock<T>,
}

impl<T> Synchronized<T> {
    pub fn new(inner: T) -> Self {
        Self {
            inner: RwLock::new(inner),
        }
    }

    pub fn into_inner(self) -> T {
        self.inner
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Shared access to the wrapped factory.
    ///
    /// A panic while the lock was held does not leave a factory half-updated (slot
    /// replacement is a single move), so a poisoned lock is entered anyway.
    pub fn read(&self) -> RwLockReadGuard<'_, T> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, T> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Registers the prototype of `P` under the write lock, returning the previous one.
    pub fn set_prototype<P: Product>(&self, prototype: Box<P::Abstract>) -> Option<Box<P::Abstract>>
    where
        T: PrototypeSlot<P>,
    {
        let mut guard = self.write();
        <T as PrototypeSlot<P>>::prototype_slot_mut(&mut guard).replace(prototype)
    }

    pub fn has_prototype<P: Product>(&self) -> bool
    where
        T: PrototypeSlot<P>,
    {
        <T as PrototypeSlot<P>>::prototype_slot(&self.read()).is_set()
    }
}

impl<T: Default> Default for Synchronized<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Synchronized<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Synchronized").field(&*self.read()).finish()
    }
}

impl<P, T> Creator<P> for Synchronized<T>
where
    P: Product,
    T: Creator<P>,
{
    fn create_product(&self, args: P::Args) -> P::Output {
        let guard = self.read();
        <T as Creator<P>>::create_product(&guard, args)
    }
}
