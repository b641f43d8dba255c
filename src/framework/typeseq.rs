//! # Type Sequences
//!
//! Ordered, fixed-length sequences of types, used in two places:
//!
//! - **Constructor arguments** are plain tuples: `()`, `(bool,)`, `(bool, i32)`.
//! - **Product and concrete lists** are type-level cons lists built with [`tlist!`](crate::tlist):
//!   `tlist![A, B, C]` is `Cons<A, Cons<B, Cons<C, Nil>>>`.
//!
//! Both implement [`TypeSeq`], which exposes the length and the identity of every element.
//! [`SeqKey`] is the runtime form of a sequence and can be used as a map key: two sequences
//! built from the same types in the same order produce the same key.

use std::any::{type_name, TypeId};
use std::marker::PhantomData;

/// A compile-time sequence of `'static` types.
pub trait TypeSeq: 'static {
    /// Number of elements in the sequence.
    const LEN: usize;

    /// `TypeId` of each element, in order.
    fn type_ids() -> Vec<TypeId>;

    /// Human-readable name of each element, in order.
    fn type_names() -> Vec<&'static str>;

    /// The hashable runtime key of this sequence.
    fn key() -> SeqKey {
        SeqKey(Self::type_ids())
    }
}

/// Runtime identity of a [`TypeSeq`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SeqKey(Vec<TypeId>);

impl SeqKey {
    /// Key of the sequence `S`.
    pub fn of<S: TypeSeq>() -> Self {
        S::key()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn type_ids(&self) -> &[TypeId] {
        &self.0
    }
}

// =============================================================================
// TUPLES
// =============================================================================

macro_rules! impl_tuple_seq {
    (@one $t:ident) => {
        1
    };
    ($($t:ident),*) => {
        impl<$($t: 'static),*> TypeSeq for ($($t,)*) {
            const LEN: usize = 0 $(+ impl_tuple_seq!(@one $t))*;

            fn type_ids() -> Vec<TypeId> {
                vec![$(TypeId::of::<$t>()),*]
            }

            fn type_names() -> Vec<&'static str> {
                vec![$(type_name::<$t>()),*]
            }
        }
    };
}

impl_tuple_seq!();
impl_tuple_seq!(A);
impl_tuple_seq!(A, B);
impl_tuple_seq!(A, B, C);
impl_tuple_seq!(A, B, C, D);
impl_tuple_seq!(A, B, C, D, E);
impl_tuple_seq!(A, B, C, D, E, F);
impl_tuple_seq!(A, B, C, D, E, F, G);
impl_tuple_seq!(A, B, C, D, E, F, G, H);
impl_tuple_seq!(A, B, C, D, E, F, G, H, I);
impl_tuple_seq!(A, B, C, D, E, F, G, H, I, J);
impl_tuple_seq!(A, B, C, D, E, F, G, H, I, J, K);
impl_tuple_seq!(A, B, C, D, E, F, G, H, I, J, K, L);

// =============================================================================
// CONS LISTS
// =============================================================================

/// The empty type-level list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Nil;

/// A type-level list with head `H` and tail `T`.
///
/// Never instantiated; it only carries types.
pub struct Cons<H, T>(PhantomData<fn() -> (H, T)>);

impl TypeSeq for Nil {
    const LEN: usize = 0;

    fn type_ids() -> Vec<TypeId> {
        Vec::new()
    }

    fn type_names() -> Vec<&'static str> {
        Vec::new()
    }
}

impl<H: 'static, T: TypeSeq> TypeSeq for Cons<H, T> {
    const LEN: usize = 1 + T::LEN;

    fn type_ids() -> Vec<TypeId> {
        let mut ids = vec![TypeId::of::<H>()];
        ids.extend(T::type_ids());
        ids
    }

    fn type_names() -> Vec<&'static str> {
        let mut names = vec![type_name::<H>()];
        names.extend(T::type_names());
        names
    }
}

/// Builds a type-level list: `tlist![A, B]` is `Cons<A, Cons<B, Nil>>`.
#[macro_export]
macro_rules! tlist {
    () => { $crate::Nil };
    ($head:ty $(, $tail:ty)* $(,)?) => {
        $crate::Cons<$head, $crate::tlist![$($tail),*]>
    };
}
