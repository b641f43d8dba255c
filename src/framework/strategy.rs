//! # Creation Strategies
//!
//! A strategy is the algorithm that fulfils a creation request for one product slot of a
//! concrete factory.
//!
//! | Strategy | Applies to | Behavior |
//! |----------|------------|----------|
//! | [`Allocate<C>`] | unique / shared / raw products | build `C` from the arguments, wrap it in the declared ownership |
//! | [`Passthrough`] | value products | identity over the single argument, no allocation |
//! | [`Cloning<P>`] | prototype products | clone the registered prototype, ignore the arguments |
//! | [`Adapt<C>`] | adapted products | same as `Allocate`, but only for shared (`Arc`) ownership of an existing type |
//!
//! ## Selection
//!
//! Which strategy a slot uses is decided by a [`Policy`] at the type level:
//!
//! - [`DefaultCreation`] uses `Allocate` for every slot.
//! - [`ByShape`] reads the descriptor's ownership kind marker, so value products get
//!   `Passthrough`, prototypes get `Cloning`, adapted products get `Adapt`.
//!
//! A slot whose strategy cannot serve its product (for instance `Allocate` over a concrete
//! type that cannot be built from the declared arguments) is rejected when the concrete
//! factory is coerced to its abstract factory, not at run time.

use crate::framework::error::FactoryError;
use crate::framework::product::{kind, Build, Product, Prototype, Wrap};
use std::marker::PhantomData;
use tracing::{debug, warn};

/// Creation algorithm for product `P`.
pub trait CreationStrategy<P: Product> {
    fn produce(&self, args: P::Args) -> P::Output;
}

// =============================================================================
// DEFAULT: ALLOCATE AND WRAP
// =============================================================================

/// Build a `C` from the constructor arguments and wrap it in the product's ownership.
pub struct Allocate<C>(PhantomData<fn() -> C>);

impl<C> Default for Allocate<C> {
    fn default() -> Self {
        Self(PhantomData)
    }
}

impl<P, C> CreationStrategy<P> for Allocate<C>
where
    P: Wrap<C>,
    C: Build<P::Args>,
{
    fn produce(&self, args: P::Args) -> P::Output {
        P::wrap(C::build(args))
    }
}

// =============================================================================
// VALUE PASSTHROUGH
// =============================================================================

/// Hand the single argument back unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct Passthrough;

impl<P, T> CreationStrategy<P> for Passthrough
where
    T: 'static,
    P: Product<Args = (T,), Output = T>,
{
    fn produce(&self, (value,): (T,)) -> T {
        value
    }
}

// =============================================================================
// PROTOTYPE CLONING
// =============================================================================

/// A prototype slot: holds the template instance that `create` clones.
///
/// # Concurrency
/// Replacing the prototype needs `&mut self`, cloning only `&self`. Inside a bare
/// [`ConcreteFactory`](crate::ConcreteFactory) the borrow checker therefore enforces the
/// single-writer / many-readers discipline; wrap the factory in
/// [`Synchronized`](crate::Synchronized) to replace prototypes while other threads create.
pub struct Cloning<P: Product> {
    prototype: Option<Box<P::Abstract>>,
}

impl<P: Product> Default for Cloning<P> {
    fn default() -> Self {
        Self { prototype: None }
    }
}

impl<P: Product> Cloning<P> {
    /// Installs `prototype`, returning the one it replaces.
    pub fn replace(&mut self, prototype: Box<P::Abstract>) -> Option<Box<P::Abstract>> {
        let previous = self.prototype.replace(prototype);
        debug!(product = P::NAME, replaced = previous.is_some(), "Prototype registered");
        previous
    }

    /// Empties the slot.
    pub fn take(&mut self) -> Option<Box<P::Abstract>> {
        self.prototype.take()
    }

    pub fn is_set(&self) -> bool {
        self.prototype.is_some()
    }

    pub fn get(&self) -> Option<&P::Abstract> {
        self.prototype.as_deref()
    }
}

impl<P, A> CreationStrategy<P> for Cloning<P>
where
    A: ?Sized + 'static,
    P: Prototype<Abstract = A, Output = Result<Box<A>, FactoryError>>,
{
    fn produce(&self, _args: P::Args) -> P::Output {
        match self.prototype.as_deref() {
            Some(prototype) => Ok(P::clone_prototype(prototype)),
            None => {
                warn!(product = P::NAME, "Create called before a prototype was set");
                Err(FactoryError::PrototypeUnset { product: P::NAME })
            }
        }
    }
}

// =============================================================================
// EXISTING-TYPE ADAPTATION
// =============================================================================

/// Build an existing type `C` and hand it out in shared ownership.
///
/// Only applies to products declared `=> adapted`, whose handle is always an `Arc`
/// regardless of how `C` itself is normally owned.
pub struct Adapt<C>(PhantomData<fn() -> C>);

impl<C> Default for Adapt<C> {
    fn default() -> Self {
        Self(PhantomData)
    }
}

impl<P, C> CreationStrategy<P> for Adapt<C>
where
    P: Wrap<C> + Product<Kind = kind::Adapted>,
    C: Build<P::Args>,
{
    fn produce(&self, args: P::Args) -> P::Output {
        P::wrap(C::build(args))
    }
}

// =============================================================================
// POLICIES
// =============================================================================

/// Maps a (product, concrete) pair to the strategy type of its slot.
pub trait Policy: 'static {
    type Strategy<P: Product, C>;
}

/// Every slot allocates its concrete type.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultCreation;

impl Policy for DefaultCreation {
    type Strategy<P: Product, C> = Allocate<C>;
}

/// Each slot's strategy follows the product's ownership kind.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByShape;

impl Policy for ByShape {
    type Strategy<P: Product, C> = <P::Kind as kind::Ownership>::Strategy<P, C>;
}
