//! # Product Descriptors
//!
//! An *abstract product* is a kind of object a factory can produce. It is described by a
//! zero-sized marker type implementing [`Product`]:
//!
//! - `Abstract` - what the caller sees (usually `dyn SomeTrait`, or a plain value type).
//! - `Output` - the ownership-wrapped handle `create` returns (`Box`, `Arc`, `NonNull`, a value…).
//! - `Args` - the constructor argument tuple.
//! - `Kind` - the ownership kind marker from [`kind`], which also drives strategy selection.
//!
//! ## Declaring Products
//!
//! Use [`abstract_product!`](crate::abstract_product). Anything left unspecified is resolved to
//! the defaults: exclusively-owned (`Box`) and no constructor arguments.
//!
//! ```rust
//! use factory_recipe::{abstract_product, Product, OwnershipKind, kind::Ownership};
//!
//! pub trait Engine {}
//! pub trait Sensor {}
//!
//! abstract_product! {
//!     /// Defaults: `Box<dyn Engine>`, no arguments.
//!     pub struct EngineKind: dyn Engine;
//!     /// Reference counted, built from a `(bool, i32)`.
//!     pub struct SensorKind: dyn Sensor => shared, (bool, i32);
//!     /// A plain value handed back as-is.
//!     pub struct Gain: value f32;
//! }
//!
//! assert_eq!(<EngineKind as Product>::NAME, "EngineKind");
//! assert_eq!(<<SensorKind as Product>::Kind as Ownership>::KIND, OwnershipKind::Shared);
//! ```
//!
//! Supported ownership keywords after `=>`: `unique` (default), `shared`, `raw`, `adapted`
//! and `prototype(clone_method)`.

use crate::framework::typeseq::{SeqKey, TypeSeq};
use serde::{Deserialize, Serialize};
use std::any::{type_name, TypeId};
use std::ptr::NonNull;

/// A declared abstract product.
///
/// Implemented by the marker types that [`abstract_product!`](crate::abstract_product) generates.
/// Descriptors are never instantiated by the framework; they only carry types.
pub trait Product: 'static {
    /// The type the caller programs against.
    type Abstract: ?Sized + 'static;

    /// The ownership-wrapped value returned by `create`.
    type Output: 'static;

    /// Constructor argument sequence.
    type Args: TypeSeq;

    /// Ownership kind marker (see [`kind`]).
    type Kind: kind::Ownership;

    /// The descriptor's name, used in diagnostics and manifests.
    const NAME: &'static str;
}

/// Runtime tag for the ownership discipline of a product's handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OwnershipKind {
    /// `Box<A>`: exclusively owned.
    Unique,
    /// `Arc<A>`: shared by reference count.
    Shared,
    /// `NonNull<A>`: caller-owned raw handle.
    Raw,
    /// `T`: a plain value.
    Value,
    /// `Result<Box<A>, FactoryError>`: cloned from a registered prototype.
    Prototype,
    /// `Arc<A>`: an existing type adapted into shared ownership.
    Adapted,
}

impl OwnershipKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OwnershipKind::Unique => "unique",
            OwnershipKind::Shared => "shared",
            OwnershipKind::Raw => "raw",
            OwnershipKind::Value => "value",
            OwnershipKind::Prototype => "prototype",
            OwnershipKind::Adapted => "adapted",
        }
    }
}

impl std::fmt::Display for OwnershipKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ownership kind markers.
///
/// Each marker maps to an [`OwnershipKind`] and names the creation strategy that the
/// [`ByShape`](crate::ByShape) policy picks for products of that kind.
pub mod kind {
    use super::{OwnershipKind, Product};
    use crate::framework::strategy::{Adapt, Allocate, Cloning, Passthrough};

    /// Implemented by every ownership kind marker.
    pub trait Ownership: 'static {
        const KIND: OwnershipKind;

        /// Strategy used for a product `P` of this kind with concrete type `C`.
        type Strategy<P: Product, C>;
    }

    pub struct Unique;
    pub struct Shared;
    pub struct Raw;
    pub struct Value;
    pub struct Cloned;
    pub struct Adapted;

    impl Ownership for Unique {
        const KIND: OwnershipKind = OwnershipKind::Unique;
        type Strategy<P: Product, C> = Allocate<C>;
    }

    impl Ownership for Shared {
        const KIND: OwnershipKind = OwnershipKind::Shared;
        type Strategy<P: Product, C> = Allocate<C>;
    }

    impl Ownership for Raw {
        const KIND: OwnershipKind = OwnershipKind::Raw;
        type Strategy<P: Product, C> = Allocate<C>;
    }

    impl Ownership for Value {
        const KIND: OwnershipKind = OwnershipKind::Value;
        type Strategy<P: Product, C> = Passthrough;
    }

    impl Ownership for Cloned {
        const KIND: OwnershipKind = OwnershipKind::Prototype;
        type Strategy<P: Product, C> = Cloning<P>;
    }

    impl Ownership for Adapted {
        const KIND: OwnershipKind = OwnershipKind::Adapted;
        type Strategy<P: Product, C> = Adapt<C>;
    }
}

// =============================================================================
// CONSTRUCTION CAPABILITIES
// =============================================================================

/// A concrete type that can be built from the constructor arguments `Args`.
///
/// Every `Default` type is buildable from `()`. Implement this for concrete products that
/// take arguments.
///
/// ```rust
/// use factory_recipe::{abstract_factory, abstract_product, tlist, Build, Factory};
///
/// pub trait Gauge {
///     fn reading(&self) -> i32;
/// }
///
/// pub struct Needle(i32);
///
/// impl Gauge for Needle {
///     fn reading(&self) -> i32 {
///         self.0
///     }
/// }
///
/// abstract_product! {
///     pub struct Dial: dyn Gauge => shared, (i32,);
/// }
///
/// abstract_factory! {
///     pub trait Panel { Dial }
/// }
///
/// impl Build<(i32,)> for Needle {
///     fn build((value,): (i32,)) -> Self {
///         Needle(value)
///     }
/// }
///
/// let panel = PanelConcrete::<tlist![Needle]>::new();
/// assert_eq!(panel.create::<Dial>((3,)).reading(), 3);
/// ```
///
/// Without the impl, the concrete factory cannot serve `Dial`:
///
/// ```compile_fail
/// use factory_recipe::{abstract_factory, abstract_product, tlist, Build, Factory};
///
/// pub trait Gauge {
///     fn reading(&self) -> i32;
/// }
///
/// pub struct Needle(i32);
///
/// impl Gauge for Needle {
///     fn reading(&self) -> i32 {
///         self.0
///     }
/// }
///
/// abstract_product! {
///     pub struct Dial: dyn Gauge => shared, (i32,);
/// }
///
/// abstract_factory! {
///     pub trait Panel { Dial }
/// }
///
/// let panel = PanelConcrete::<tlist![Needle]>::new();
/// let _ = panel.create::<Dial>((3,));
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not constructible from the constructor arguments `{Args}`",
    label = "concrete product cannot be built from these arguments",
    note = "implement `Build<{Args}>` for `{Self}`"
)]
pub trait Build<Args>: Sized {
    fn build(args: Args) -> Self;
}

impl<T: Default> Build<()> for T {
    fn build(_args: ()) -> Self {
        T::default()
    }
}

/// The ownership handle of `Self` can be constructed from the concrete type `C`.
///
/// Generated by [`abstract_product!`](crate::abstract_product) for every non-value product,
/// for all `C` implementing the abstract trait.
///
/// ```rust
/// use factory_recipe::{abstract_factory, abstract_product, tlist, Factory};
///
/// pub trait Gauge {
///     fn reading(&self) -> i32;
/// }
///
/// #[derive(Default)]
/// pub struct Pointer;
///
/// impl Gauge for Pointer {
///     fn reading(&self) -> i32 {
///         7
///     }
/// }
///
/// #[derive(Default)]
/// pub struct Stone;
///
/// abstract_product! {
///     pub struct Dial: dyn Gauge;
/// }
///
/// abstract_factory! {
///     pub trait Panel { Dial }
/// }
///
/// let panel = PanelConcrete::<tlist![Pointer]>::new();
/// assert_eq!(panel.create::<Dial>(()).reading(), 7);
/// ```
///
/// A concrete type that does not implement the abstract trait cannot be wrapped:
///
/// ```compile_fail
/// use factory_recipe::{abstract_factory, abstract_product, tlist, Factory};
///
/// pub trait Gauge {
///     fn reading(&self) -> i32;
/// }
///
/// #[derive(Default)]
/// pub struct Pointer;
///
/// impl Gauge for Pointer {
///     fn reading(&self) -> i32 {
///         7
///     }
/// }
///
/// #[derive(Default)]
/// pub struct Stone;
///
/// abstract_product! {
///     pub struct Dial: dyn Gauge;
/// }
///
/// abstract_factory! {
///     pub trait Panel { Dial }
/// }
///
/// let panel = PanelConcrete::<tlist![Stone]>::new();
/// let _ = panel.create::<Dial>(());
/// ```
#[diagnostic::on_unimplemented(
    message = "the declared ownership of `{Self}` cannot be constructed from `{C}`",
    label = "concrete type does not implement the abstract product"
)]
pub trait Wrap<C>: Product {
    fn wrap(concrete: C) -> Self::Output;
}

/// A product whose abstract type exposes a clone operation returning an exclusively owned copy.
pub trait Prototype: Product {
    fn clone_prototype(prototype: &Self::Abstract) -> Box<Self::Abstract>;
}

/// Frees a handle returned by a `raw` product.
///
/// # Safety
/// `handle` must have been returned by `create` on a `raw` product, and must not be used or
/// released again afterwards.
pub unsafe fn release_raw<T: ?Sized>(handle: NonNull<T>) {
    // SAFETY: raw handles are leaked boxes, see the `raw` arm of `abstract_product!`.
    unsafe { drop(Box::from_raw(handle.as_ptr())) }
}

// =============================================================================
// CREATION CONTEXT
// =============================================================================

/// The resolved (product, return type, argument sequence) triple of a descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CreationContext {
    pub product: &'static str,
    pub ownership: OwnershipKind,
    pub output: &'static str,
    pub args: Vec<&'static str>,
    #[serde(skip)]
    pub product_id: TypeId,
    #[serde(skip)]
    pub output_id: TypeId,
    #[serde(skip)]
    pub args_key: SeqKey,
}

impl CreationContext {
    /// Resolves the context of `P`.
    pub fn of<P: Product>() -> Self {
        Self {
            product: P::NAME,
            ownership: <P::Kind as kind::Ownership>::KIND,
            output: type_name::<P::Output>(),
            args: <P::Args as TypeSeq>::type_names(),
            product_id: TypeId::of::<P>(),
            output_id: TypeId::of::<P::Output>(),
            args_key: <P::Args as TypeSeq>::key(),
        }
    }

    /// Whether this context was resolved from `P`.
    pub fn is<P: Product>(&self) -> bool {
        self.product_id == TypeId::of::<P>()
    }
}

// =============================================================================
// DECLARATION MACRO
// =============================================================================

/// Declares one or more abstract product descriptors.
///
/// ```text
/// abstract_product! {
///     pub struct Name: dyn Trait;                              // Box<dyn Trait>, ()
///     pub struct Name: dyn Trait => shared;                    // Arc<dyn Trait>
///     pub struct Name: dyn Trait => raw, (bool, i32);          // NonNull<dyn Trait>, (bool, i32)
///     pub struct Name: dyn Trait => adapted;                   // Arc<dyn Trait>, existing type
///     pub struct Name: dyn Trait => prototype(clone_box);      // Result<Box<dyn Trait>, FactoryError>
///     pub struct Name: value i32;                              // i32, (i32,)
/// }
/// ```
#[macro_export]
macro_rules! abstract_product {
    (@descriptor [$($attr:tt)*] $vis:vis $name:ident, $abs:ty, $out:ty, $kind:ty, [$($arg:ty),*]) => {
        $($attr)*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        $vis struct $name;

        impl $crate::Product for $name {
            type Abstract = $abs;
            type Output = $out;
            type Args = ($($arg,)*);
            type Kind = $kind;
            const NAME: &'static str = ::core::stringify!($name);
        }
    };

    (@shape $attrs:tt $vis:vis $name:ident, [$tr:path], [], $args:tt) => {
        $crate::abstract_product!(@shape $attrs $vis $name, [$tr], [unique], $args);
    };

    (@shape $attrs:tt $vis:vis $name:ident, [$tr:path], [unique], [$($arg:ty),*]) => {
        $crate::abstract_product!(@descriptor $attrs $vis $name,
            dyn $tr, ::std::boxed::Box<dyn $tr>, $crate::kind::Unique, [$($arg),*]);

        impl<C: $tr + 'static> $crate::Wrap<C> for $name {
            fn wrap(concrete: C) -> ::std::boxed::Box<dyn $tr> {
                ::std::boxed::Box::new(concrete)
            }
        }
    };

    (@shape $attrs:tt $vis:vis $name:ident, [$tr:path], [shared], [$($arg:ty),*]) => {
        $crate::abstract_product!(@descriptor $attrs $vis $name,
            dyn $tr, ::std::sync::Arc<dyn $tr>, $crate::kind::Shared, [$($arg),*]);

        impl<C: $tr + 'static> $crate::Wrap<C> for $name {
            fn wrap(concrete: C) -> ::std::sync::Arc<dyn $tr> {
                ::std::sync::Arc::new(concrete)
            }
        }
    };

    (@shape $attrs:tt $vis:vis $name:ident, [$tr:path], [adapted], [$($arg:ty),*]) => {
        $crate::abstract_product!(@descriptor $attrs $vis $name,
            dyn $tr, ::std::sync::Arc<dyn $tr>, $crate::kind::Adapted, [$($arg),*]);

        impl<C: $tr + 'static> $crate::Wrap<C> for $name {
            fn wrap(concrete: C) -> ::std::sync::Arc<dyn $tr> {
                ::std::sync::Arc::new(concrete)
            }
        }
    };

    (@shape $attrs:tt $vis:vis $name:ident, [$tr:path], [raw], [$($arg:ty),*]) => {
        $crate::abstract_product!(@descriptor $attrs $vis $name,
            dyn $tr, ::core::ptr::NonNull<dyn $tr>, $crate::kind::Raw, [$($arg),*]);

        impl<C: $tr + 'static> $crate::Wrap<C> for $name {
            fn wrap(concrete: C) -> ::core::ptr::NonNull<dyn $tr> {
                let boxed: ::std::boxed::Box<dyn $tr> = ::std::boxed::Box::new(concrete);
                ::core::ptr::NonNull::from(::std::boxed::Box::leak(boxed))
            }
        }
    };

    (@shape $attrs:tt $vis:vis $name:ident, [$tr:path], [prototype ($clone:ident)], [$($arg:ty),*]) => {
        $crate::abstract_product!(@descriptor $attrs $vis $name,
            dyn $tr,
            ::core::result::Result<::std::boxed::Box<dyn $tr>, $crate::FactoryError>,
            $crate::kind::Cloned,
            [$($arg),*]);

        impl<C: $tr + 'static> $crate::Wrap<C> for $name {
            fn wrap(
                concrete: C,
            ) -> ::core::result::Result<::std::boxed::Box<dyn $tr>, $crate::FactoryError> {
                let boxed: ::std::boxed::Box<dyn $tr> = ::std::boxed::Box::new(concrete);
                ::core::result::Result::Ok(boxed)
            }
        }

        impl $crate::Prototype for $name {
            fn clone_prototype(
                prototype: &<Self as $crate::Product>::Abstract,
            ) -> ::std::boxed::Box<<Self as $crate::Product>::Abstract> {
                prototype.$clone()
            }
        }
    };

    () => {};

    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident : value $value:ty ;
        $($rest:tt)*
    ) => {
        $crate::abstract_product!(@descriptor [$(#[$meta])*] $vis $name,
            $value, $value, $crate::kind::Value, [$value]);
        $crate::abstract_product!($($rest)*);
    };

    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident : dyn $tr:path
            $(=> $kind:ident $(($clone:ident))?)?
            $(, ($($arg:ty),* $(,)?))? ;
        $($rest:tt)*
    ) => {
        $crate::abstract_product!(@shape [$(#[$meta])*] $vis $name, [$tr],
            [$($kind $(($clone))?)?], [$($($arg),*)?]);
        $crate::abstract_product!($($rest)*);
    };
}

#[cfg(test)]
mod tests {
    use super::kind::Ownership;
    use super::*;
    use std::sync::Arc;

    trait Lamp {
        fn lumens(&self) -> u32;
    }

    #[derive(Default)]
    struct Bulb;

    impl Lamp for Bulb {
        fn lumens(&self) -> u32 {
            800
        }
    }

    crate::abstract_product! {
        struct PlainLamp: dyn Lamp;
        struct SharedLamp: dyn Lamp => shared, (u32,);
        struct Brightness: value u32;
    }

    #[test]
    fn test_defaults_resolve_to_unique_without_args() {
        let ctx = CreationContext::of::<PlainLamp>();
        assert_eq!(ctx.product, "PlainLamp");
        assert_eq!(ctx.ownership, OwnershipKind::Unique);
        assert!(ctx.args.is_empty());
        assert!(ctx.is::<PlainLamp>());
        assert!(!ctx.is::<SharedLamp>());
    }

    #[test]
    fn test_explicit_ownership_and_args() {
        let ctx = CreationContext::of::<SharedLamp>();
        assert_eq!(ctx.ownership, OwnershipKind::Shared);
        assert_eq!(ctx.args, vec!["u32"]);
        assert_eq!(<<SharedLamp as Product>::Kind as Ownership>::KIND.as_str(), "shared");
    }

    #[test]
    fn test_value_product_takes_its_own_type() {
        let ctx = CreationContext::of::<Brightness>();
        assert_eq!(ctx.ownership, OwnershipKind::Value);
        assert_eq!(ctx.args_key, SeqKey::of::<(u32,)>());
        assert_eq!(ctx.output_id, TypeId::of::<u32>());
    }

    #[test]
    fn test_wrap_produces_declared_handles() {
        let unique: Box<dyn Lamp> = <PlainLamp as Wrap<Bulb>>::wrap(Bulb);
        assert_eq!(unique.lumens(), 800);

        let shared: Arc<dyn Lamp> = <SharedLamp as Wrap<Bulb>>::wrap(Bulb);
        let other = Arc::clone(&shared);
        assert_eq!(Arc::strong_count(&shared), 2);
        assert_eq!(other.lumens(), 800);
    }

    #[test]
    fn test_raw_handle_round_trip() {
        crate::abstract_product! {
            struct RawLamp: dyn Lamp => raw;
        }

        let handle = <RawLamp as Wrap<Bulb>>::wrap(Bulb);
        // SAFETY: the handle is live until released below.
        assert_eq!(unsafe { handle.as_ref() }.lumens(), 800);
        // SAFETY: released exactly once.
        unsafe { release_raw(handle) };
    }

    #[test]
    fn test_default_types_build_from_unit() {
        let count: u32 = Build::build(());
        assert_eq!(count, 0);
    }
}
