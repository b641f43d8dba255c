//! # Abstract Factories
//!
//! An abstract factory composes one [`Creator<P>`](crate::Creator) per declared product into a
//! single trait. It is declared with [`abstract_factory!`](crate::abstract_factory):
//!
//! ```rust
//! use factory_recipe::{abstract_factory, abstract_product, AbstractFactory};
//!
//! pub trait Door {}
//! pub trait Window {}
//!
//! abstract_product! {
//!     pub struct DoorKind: dyn Door;
//!     pub struct WindowKind: dyn Window => shared, (u32, u32);
//! }
//!
//! abstract_factory! {
//!     /// Everything a house builder can produce.
//!     pub trait HouseFactory { DoorKind, WindowKind }
//! }
//!
//! let manifest = <dyn HouseFactory as AbstractFactory>::manifest();
//! assert_eq!(manifest.products(), vec!["DoorKind", "WindowKind"]);
//! ```
//!
//! ## What Gets Generated
//!
//! - `trait HouseFactory: Creator<DoorKind> + Creator<WindowKind>`, object safe, plus a blanket
//!   impl so that anything implementing every creator *is* a `HouseFactory`.
//! - `impl AbstractFactory for dyn HouseFactory`, recording the ordered product list.
//! - `HouseFactoryProducts` (the product list) and `HouseFactoryConcrete<Cs, Pol>` (the concrete
//!   factory type for a concrete list `Cs`) aliases.
//! - For every product, a `Creator` impl and a `PrototypeSlot` impl on
//!   `ConcreteFactory<dyn HouseFactory, Chain>` for any chain whose layer at that product's
//!   position serves the product. Only the alias runs [`Generate`](crate::Generate); the
//!   impls are bounded on the chain alone.
//!
//! The abstract factory itself holds no state. Callers hold a `&dyn HouseFactory` (or any
//! `impl HouseFactory`) and create through [`Factory::create`](crate::Factory::create).
//!
//! ## Declaration Rules
//!
//! Product descriptors must be defined in the crate that declares the factory, and each product
//! may appear once. A repeated product is rejected as conflicting implementations.

use crate::framework::manifest::FactoryManifest;
use crate::framework::product::{CreationContext, Product};
use crate::framework::typeseq::{Cons, Nil, TypeSeq};

/// Implemented for `dyn Trait` of every trait declared with
/// [`abstract_factory!`](crate::abstract_factory).
pub trait AbstractFactory {
    /// Declared products, in declaration order.
    type Products: ProductList;

    const NAME: &'static str;

    /// Resolved creation contexts of every declared product.
    fn manifest() -> FactoryManifest {
        FactoryManifest::new(Self::NAME, <Self::Products as ProductList>::contexts())
    }
}

/// A type-level list whose every element is a [`Product`].
pub trait ProductList: TypeSeq {
    fn contexts() -> Vec<CreationContext>;
}

impl ProductList for Nil {
    fn contexts() -> Vec<CreationContext> {
        Vec::new()
    }
}

impl<P: Product, Ps: ProductList> ProductList for Cons<P, Ps> {
    fn contexts() -> Vec<CreationContext> {
        let mut contexts = vec![CreationContext::of::<P>()];
        contexts.extend(Ps::contexts());
        contexts
    }
}

/// Declares an abstract factory over a list of product descriptors.
///
/// See the [module documentation](crate::framework::abstract_factory) for what is generated.
#[macro_export]
macro_rules! abstract_factory {
    (@creators $name:ident [$($idx:tt)*]) => {};

    (@creators $name:ident [$($idx:tt)*] $product:ty $(, $rest:ty)*) => {
        impl<Chain> $crate::Creator<$product> for $crate::ConcreteFactory<dyn $name, Chain>
        where
            Chain: $crate::Select<$product, $($idx)*>,
            <Chain as $crate::Select<$product, $($idx)*>>::Slot: $crate::CreationStrategy<$product>,
        {
            fn create_product(
                &self,
                args: <$product as $crate::Product>::Args,
            ) -> <$product as $crate::Product>::Output {
                let slot = <Chain as $crate::Select<$product, $($idx)*>>::slot(self.chain());
                $crate::CreationStrategy::<$product>::produce(slot, args)
            }
        }

        impl<Chain> $crate::PrototypeSlot<$product> for $crate::ConcreteFactory<dyn $name, Chain>
        where
            Chain: $crate::Select<$product, $($idx)*, Slot = $crate::Cloning<$product>>,
        {
            fn prototype_slot(&self) -> &$crate::Cloning<$product> {
                <Chain as $crate::Select<$product, $($idx)*>>::slot(self.chain())
            }

            fn prototype_slot_mut(&mut self) -> &mut $crate::Cloning<$product> {
                <Chain as $crate::Select<$product, $($idx)*>>::slot_mut(self.chain_mut())
            }
        }

        $crate::abstract_factory!(@creators $name [$crate::There<$($idx)*>] $($rest),*);
    };

    (
        $(#[$meta:meta])*
        $vis:vis trait $name:ident { $first:ty $(, $rest:ty)* $(,)? }
    ) => {
        $(#[$meta])*
        $vis trait $name: $crate::Creator<$first> $(+ $crate::Creator<$rest>)* {}

        impl<T> $name for T
        where
            T: ?Sized + $crate::Creator<$first> $(+ $crate::Creator<$rest>)*,
        {
        }

        impl $crate::AbstractFactory for dyn $name {
            type Products = $crate::tlist![$first $(, $rest)*];
            const NAME: &'static str = ::core::stringify!($name);
        }

        $crate::paste::paste! {
            #[doc = "Products declared by [`" $name "`], in declaration order."]
            #[allow(dead_code)]
            $vis type [<$name Products>] = <dyn $name as $crate::AbstractFactory>::Products;

            #[doc = "Concrete factory for [`" $name "`] over the concrete list `Cs`."]
            #[allow(dead_code)]
            $vis type [<$name Concrete>]<Cs, Pol = $crate::DefaultCreation> =
                $crate::ConcreteFactory<dyn $name, $crate::ChainOf<dyn $name, Cs, Pol>>;
        }

        $crate::abstract_factory!(@creators $name [$crate::Here] $first $(, $rest)*);
    };
}
