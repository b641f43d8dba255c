//! # Creator Capabilities
//!
//! [`Creator<P>`] is the abstract creator interface of one product: "can create `P` from
//! `P::Args`, returning `P::Output`". It has no state and a single object-safe method, so an
//! abstract factory is nothing more than a trait whose supertraits are one `Creator<P>` per
//! declared product.
//!
//! Slots are keyed by the descriptor *type*, not by its signature: two products with the same
//! arguments and the same handle type still get two distinct `Creator` supertraits.
//!
//! ## The Entry Point
//!
//! [`Factory::create`] is the one uniform creation call. It is available on every type and
//! resolves statically to the matching `Creator<P>`:
//!
//! ```rust,ignore
//! let unique = factory.create::<Unique>(());
//! let raw = factory.create::<Raw>((true, 1));
//! let twelve = factory.create::<IntValue>((12,));
//! ```
//!
//! Naming an undeclared product, or passing arguments that do not match the product's
//! constructor sequence, does not compile.
//!
//! `create` exists on every type, so method lookup stops at the first receiver. Through an
//! `Arc` or a lock guard, dereference first: `(*shared).create::<P>(..)`.

use crate::framework::product::Product;
use crate::framework::typeseq::TypeSeq;

/// Abstract creator interface for product `P`.
#[diagnostic::on_unimplemented(
    message = "unknown product `{P}`: `{Self}` declares no creator for it",
    label = "`{P}` is not in this factory's product list",
    note = "add `{P}` to the `abstract_factory!` declaration"
)]
pub trait Creator<P: Product> {
    fn create_product(&self, args: P::Args) -> P::Output;
}

/// Arguments accepted for the constructor sequence `Args`.
///
/// Only the exact sequence converts; anything else is an argument-mismatch error.
#[diagnostic::on_unimplemented(
    message = "argument mismatch: `{Self}` does not match the constructor arguments `{Args}`",
    label = "expected arguments `{Args}`"
)]
pub trait IntoArgs<Args> {
    fn into_args(self) -> Args;
}

impl<T: TypeSeq> IntoArgs<T> for T {
    fn into_args(self) -> T {
        self
    }
}

/// The uniform creation entry point, implemented for every type.
///
/// Declared products with matching arguments compile:
///
/// ```rust
/// use factory_recipe::{abstract_factory, abstract_product, Factory};
///
/// pub trait Widget {}
///
/// abstract_product! {
///     pub struct Button: dyn Widget;
///     pub struct Slider: dyn Widget;
///     pub struct Label: dyn Widget, (String,);
/// }
///
/// abstract_factory! {
///     pub trait Toolkit { Button, Label }
/// }
///
/// fn build(toolkit: &dyn Toolkit) {
///     let _ = toolkit.create::<Button>(());
///     let _ = toolkit.create::<Label>((String::new(),));
/// }
/// # fn main() {}
/// ```
///
/// An undeclared product does not:
///
/// ```compile_fail
/// use factory_recipe::{abstract_factory, abstract_product, Factory};
///
/// pub trait Widget {}
///
/// abstract_product! {
///     pub struct Button: dyn Widget;
///     pub struct Slider: dyn Widget;
///     pub struct Label: dyn Widget, (String,);
/// }
///
/// abstract_factory! {
///     pub trait Toolkit { Button, Label }
/// }
///
/// fn build(toolkit: &dyn Toolkit) {
///     let _ = toolkit.create::<Slider>(());
/// }
/// # fn main() {}
/// ```
///
/// Nor do arguments that differ from the declared sequence:
///
/// ```compile_fail
/// use factory_recipe::{abstract_factory, abstract_product, Factory};
///
/// pub trait Widget {}
///
/// abstract_product! {
///     pub struct Button: dyn Widget;
///     pub struct Slider: dyn Widget;
///     pub struct Label: dyn Widget, (String,);
/// }
///
/// abstract_factory! {
///     pub trait Toolkit { Button, Label }
/// }
///
/// fn build(toolkit: &dyn Toolkit) {
///     let _ = toolkit.create::<Label>((42,));
/// }
/// # fn main() {}
/// ```
pub trait Factory {
    /// Creates product `P` from `args`.
    fn create<P: Product>(&self, args: impl IntoArgs<P::Args>) -> P::Output
    where
        Self: Creator<P>,
    {
        Creator::<P>::create_product(self, args.into_args())
    }
}

impl<F: ?Sized> Factory for F {}
