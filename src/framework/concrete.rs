//! # Concrete Factories
//!
//! A concrete factory pairs an abstract factory's product list with a list of concrete types,
//! one per product, in the same order:
//!
//! ```text
//! products:  tlist![Unique,     Shared,     IntValue]
//! concretes: tlist![UniqueImpl, SharedImpl, i32     ]
//! ```
//!
//! [`Generate`] walks both lists in lockstep and produces a chain of [`Layer`]s, one per
//! product, terminated by [`Root`]. Each layer holds the strategy the [`Policy`] selects for
//! its (product, concrete) pair:
//!
//! ```text
//! Layer<Unique, Allocate<UniqueImpl>,
//!     Layer<Shared, Allocate<SharedImpl>,
//!         Layer<IntValue, Passthrough, Root>>>
//! ```
//!
//! [`ConcreteFactory`] owns that chain. The per-product `Creator` impls that
//! [`abstract_factory!`](crate::abstract_factory) generates reach their layer through
//! [`Select`] with a positional index (`Here`, `There<Here>`, …), so creation is a static call
//! with no lookup.
//!
//! ## Architecture Note
//! Layer storage is by value. Stateless strategies are zero-sized, so a factory without
//! prototype products is itself zero-sized. A prototype layer stores its `Cloning` slot.
//!
//! One concrete per product, in order, forms a chain:
//!
//! ```rust
//! use factory_recipe::{abstract_factory, abstract_product, tlist, Factory};
//!
//! pub trait Part {}
//! #[derive(Default)]
//! pub struct Bolt;
//! impl Part for Bolt {}
//!
//! abstract_product! {
//!     pub struct Fastener: dyn Part;
//!     pub struct Anchor: dyn Part;
//! }
//!
//! abstract_factory! {
//!     pub trait Hardware { Fastener, Anchor }
//! }
//!
//! let hardware = HardwareConcrete::<tlist![Bolt, Bolt]>::new();
//! let _ = hardware.create::<Anchor>(());
//! ```
//!
//! Lists of different lengths do not:
//!
//! ```compile_fail
//! use factory_recipe::{abstract_factory, abstract_product, tlist, Factory};
//!
//! pub trait Part {}
//! #[derive(Default)]
//! pub struct Bolt;
//! impl Part for Bolt {}
//!
//! abstract_product! {
//!     pub struct Fastener: dyn Part;
//!     pub struct Anchor: dyn Part;
//! }
//!
//! abstract_factory! {
//!     pub trait Hardware { Fastener, Anchor }
//! }
//!
//! // Two products, one concrete.
//! let hardware = HardwareConcrete::<tlist![Bolt]>::new();
//! let _ = hardware.create::<Anchor>(());
//! ```

use crate::framework::abstract_factory::AbstractFactory;
use crate::framework::manifest::FactoryManifest;
use crate::framework::product::Product;
use crate::framework::strategy::{Cloning, Policy};
use crate::framework::typeseq::{Cons, Nil, TypeSeq};
use std::any::type_name;
use std::fmt;
use std::marker::PhantomData;
use tracing::debug;

// =============================================================================
// CHAIN
// =============================================================================

/// End of a generated chain.
#[derive(Debug, Clone, Copy, Default)]
pub struct Root;

/// One product slot: the strategy for `P`, followed by the rest of the chain.
pub struct Layer<P, S, R> {
    strategy: S,
    rest: R,
    _product: PhantomData<fn() -> P>,
}

impl<P, S: Default, R: Default> Default for Layer<P, S, R> {
    fn default() -> Self {
        Self {
            strategy: S::default(),
            rest: R::default(),
            _product: PhantomData,
        }
    }
}

/// Index of the first layer.
pub struct Here;

/// Index of the layer after `I`.
pub struct There<I>(PhantomData<I>);

/// Access to the layer of product `P` at position `I`.
pub trait Select<P, I> {
    type Slot;

    fn slot(&self) -> &Self::Slot;
    fn slot_mut(&mut self) -> &mut Self::Slot;
}

impl<P, S, R> Select<P, Here> for Layer<P, S, R> {
    type Slot = S;

    fn slot(&self) -> &S {
        &self.strategy
    }

    fn slot_mut(&mut self) -> &mut S {
        &mut self.strategy
    }
}

impl<P, Q, S, R, I> Select<P, There<I>> for Layer<Q, S, R>
where
    R: Select<P, I>,
{
    type Slot = R::Slot;

    fn slot(&self) -> &Self::Slot {
        <R as Select<P, I>>::slot(&self.rest)
    }

    fn slot_mut(&mut self) -> &mut Self::Slot {
        <R as Select<P, I>>::slot_mut(&mut self.rest)
    }
}

// =============================================================================
// GENERATOR
// =============================================================================

/// Pairs a product list with a concrete list `Cs` and yields the layer chain.
#[diagnostic::on_unimplemented(
    message = "the concrete list `{Cs}` does not line up with the product list `{Self}`",
    label = "product and concrete lists have different lengths",
    note = "a concrete factory needs exactly one concrete type per declared product, in declaration order"
)]
pub trait Generate<Cs, Pol: Policy> {
    type Chain;
}

impl<Pol: Policy> Generate<Nil, Pol> for Nil {
    type Chain = Root;
}

impl<P, Ps, C, Cs, Pol> Generate<Cons<C, Cs>, Pol> for Cons<P, Ps>
where
    P: Product,
    Ps: Generate<Cs, Pol>,
    Pol: Policy,
{
    type Chain = Layer<P, Pol::Strategy<P, C>, Ps::Chain>;
}

/// The layer chain of abstract factory `F` over concrete list `Cs` under policy `Pol`.
pub type ChainOf<F, Cs, Pol> = <<F as AbstractFactory>::Products as Generate<Cs, Pol>>::Chain;

// =============================================================================
// CONCRETE FACTORY
// =============================================================================

/// The generated concrete factory of abstract factory `F` (a `dyn Trait`) over the layer
/// chain `Chain`.
///
/// Usually named through the alias the declaration macro emits, which runs [`Generate`] on a
/// concrete list, e.g. `ProductFactoryConcrete<tlist![..], ByShape>`.
pub struct ConcreteFactory<F: ?Sized, Chain> {
    chain: Chain,
    _factory: PhantomData<fn() -> *const F>,
}

impl<F, Chain> ConcreteFactory<F, Chain>
where
    F: ?Sized + AbstractFactory,
{
    /// Assembles the factory with every strategy in its initial state.
    pub fn new() -> Self
    where
        Chain: Default,
    {
        debug!(
            factory = F::NAME,
            products = <F::Products as TypeSeq>::LEN,
            chain = type_name::<Chain>(),
            "Concrete factory assembled"
        );
        Self {
            chain: Chain::default(),
            _factory: PhantomData,
        }
    }

    #[doc(hidden)]
    pub fn chain(&self) -> &Chain {
        &self.chain
    }

    #[doc(hidden)]
    pub fn chain_mut(&mut self) -> &mut Chain {
        &mut self.chain
    }

    pub fn manifest(&self) -> FactoryManifest {
        F::manifest()
    }

    /// Registers the prototype of `P`, returning the previous one.
    pub fn set_prototype<P: Product>(
        &mut self,
        prototype: Box<P::Abstract>,
    ) -> Option<Box<P::Abstract>>
    where
        Self: PrototypeSlot<P>,
    {
        <Self as PrototypeSlot<P>>::prototype_slot_mut(self).replace(prototype)
    }

    /// Empties the prototype slot of `P`.
    pub fn clear_prototype<P: Product>(&mut self) -> Option<Box<P::Abstract>>
    where
        Self: PrototypeSlot<P>,
    {
        <Self as PrototypeSlot<P>>::prototype_slot_mut(self).take()
    }

    pub fn has_prototype<P: Product>(&self) -> bool
    where
        Self: PrototypeSlot<P>,
    {
        <Self as PrototypeSlot<P>>::prototype_slot(self).is_set()
    }
}

impl<F, Chain> Default for ConcreteFactory<F, Chain>
where
    F: ?Sized + AbstractFactory,
    Chain: Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<F, Chain> fmt::Debug for ConcreteFactory<F, Chain>
where
    F: ?Sized + AbstractFactory,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConcreteFactory")
            .field("factory", &F::NAME)
            .field("products", &<F::Products as TypeSeq>::type_names())
            .finish()
    }
}

/// The prototype slot of product `P` inside a concrete factory.
///
/// Generated for every product position; only holds for positions whose strategy is
/// [`Cloning`].
pub trait PrototypeSlot<P: Product> {
    fn prototype_slot(&self) -> &Cloning<P>;
    fn prototype_slot_mut(&mut self) -> &mut Cloning<P>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::creator::Factory;
    use crate::framework::product::Build;
    use crate::framework::strategy::ByShape;
    use std::sync::Arc;

    trait Note: Send + Sync {
        fn pitch(&self) -> u32;
        fn clone_box(&self) -> Box<dyn Note>;
    }

    #[derive(Clone, Default)]
    struct Middle;

    impl Note for Middle {
        fn pitch(&self) -> u32 {
            440
        }

        fn clone_box(&self) -> Box<dyn Note> {
            Box::new(self.clone())
        }
    }

    #[derive(Clone)]
    struct Tuned(u32);

    impl Note for Tuned {
        fn pitch(&self) -> u32 {
            self.0
        }

        fn clone_box(&self) -> Box<dyn Note> {
            Box::new(self.clone())
        }
    }

    impl Build<(u32,)> for Tuned {
        fn build((pitch,): (u32,)) -> Self {
            Tuned(pitch)
        }
    }

    crate::abstract_product! {
        struct Plain: dyn Note;
        struct Tunable: dyn Note => shared, (u32,);
        struct Sample: dyn Note => prototype(clone_box);
        struct Volume: value u8;
    }

    crate::abstract_factory! {
        trait Instrument { Plain, Tunable, Sample, Volume }
    }

    type Piano = InstrumentConcrete<crate::tlist![Middle, Tuned, Middle, u8], ByShape>;

    #[test]
    fn test_layers_follow_declaration_order() {
        let piano = Piano::new();
        assert_eq!(piano.create::<Plain>(()).pitch(), 440);
        assert_eq!(piano.create::<Tunable>((220,)).pitch(), 220);
        assert_eq!(piano.create::<Volume>((7,)), 7);
    }

    #[test]
    fn test_coerces_to_abstract_factory() {
        let piano = Piano::default();
        let instrument: &dyn Instrument = &piano;
        let shared: Arc<dyn Note> = instrument.create::<Tunable>((330,));
        assert_eq!(shared.pitch(), 330);
    }

    #[test]
    fn test_prototype_slot_lifecycle() {
        let mut piano = Piano::new();
        assert!(!piano.has_prototype::<Sample>());
        assert!(piano.create::<Sample>(()).is_err());

        assert!(piano.set_prototype::<Sample>(Box::new(Tuned(880))).is_none());
        assert!(piano.has_prototype::<Sample>());
        assert_eq!(piano.create::<Sample>(()).unwrap().pitch(), 880);

        let previous = piano.set_prototype::<Sample>(Box::new(Middle)).unwrap();
        assert_eq!(previous.pitch(), 880);
        assert_eq!(piano.create::<Sample>(()).unwrap().pitch(), 440);

        assert!(piano.clear_prototype::<Sample>().is_some());
        assert!(!piano.has_prototype::<Sample>());
    }

    #[test]
    fn test_select_by_position() {
        let mut piano = Piano::new();
        type Chain = ChainOf<dyn Instrument, crate::tlist![Middle, Tuned, Middle, u8], ByShape>;

        let slot: &mut Cloning<Sample> =
            <Chain as Select<Sample, There<There<Here>>>>::slot_mut(piano.chain_mut());
        slot.replace(Box::new(Tuned(110)));
        assert_eq!(piano.create::<Sample>(()).unwrap().pitch(), 110);
    }

    #[test]
    fn test_hand_built_chain_serves_every_product() {
        use crate::framework::strategy::{Allocate, Passthrough};

        type Chain = Layer<
            Plain,
            Allocate<Middle>,
            Layer<Tunable, Allocate<Tuned>, Layer<Sample, Cloning<Sample>, Layer<Volume, Passthrough, Root>>>,
        >;

        let mut organ = ConcreteFactory::<dyn Instrument, Chain>::new();
        organ.set_prototype::<Sample>(Box::new(Tuned(55)));

        let instrument: &dyn Instrument = &organ;
        assert_eq!(instrument.create::<Plain>(()).pitch(), 440);
        assert_eq!(instrument.create::<Tunable>((660,)).pitch(), 660);
        assert_eq!(instrument.create::<Sample>(()).unwrap().pitch(), 55);
        assert_eq!(instrument.create::<Volume>((3,)), 3);
    }

    #[test]
    fn test_manifest_and_debug() {
        let piano = Piano::new();
        let manifest = piano.manifest();
        assert_eq!(manifest.factory, "Instrument");
        assert_eq!(manifest.products(), vec!["Plain", "Tunable", "Sample", "Volume"]);

        let rendered = format!("{:?}", piano);
        assert!(rendered.contains("Instrument"));
    }
}
