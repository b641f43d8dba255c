//! # Factory Recipe Demo
//!
//! Wires the demo [`ProductFactory`](factory_recipe::domain::ProductFactory) and creates every
//! product once through the abstract factory:
//!
//! 1.  Boxed, shared and raw products from their constructor arguments.
//! 2.  Plain values handed straight back.
//! 3.  Two prototype families, cloned after their prototypes are registered.
//! 4.  An existing type adapted into shared ownership.

use factory_recipe::domain::{
    DemoFactory, ExistingShared, FloatValue, IntValue, PrototypeA, PrototypeB, PrototypeImpl,
    ProductFactory, Raw, Shared, Unique,
};
use factory_recipe::runtime::setup_tracing;
use factory_recipe::{release_raw, Factory, FactoryError};
use std::sync::Arc;
use tracing::info;

fn main() -> Result<(), FactoryError> {
    setup_tracing();

    let mut concrete = DemoFactory::new();
    info!(products = ?concrete.manifest().products(), "Starting factory demo");

    concrete.set_prototype::<PrototypeA>(Box::new(PrototypeImpl::<0>::new("alpha")));
    concrete.set_prototype::<PrototypeB>(Box::new(PrototypeImpl::<1>::new("beta")));

    let factory: &dyn ProductFactory = &concrete;

    let unique = factory.create::<Unique>(());
    info!(kind = unique.describe(), "Unique product created");

    let shared = factory.create::<Shared>(());
    info!(kind = shared.describe(), refs = Arc::strong_count(&shared), "Shared product created");

    let raw = factory.create::<Raw>((true, 1));
    // SAFETY: `raw` was just created and is released exactly once below.
    let (flag, value) = unsafe { (raw.as_ref().flag(), raw.as_ref().value()) };
    info!(flag, value, "Raw product created");
    // SAFETY: not used after this point.
    unsafe { release_raw(raw) };

    let int_value = factory.create::<IntValue>((12,));
    let float_value = factory.create::<FloatValue>((0.5,));
    info!(int_value, float_value, "Values passed through");

    let first = factory.create::<PrototypeA>(())?;
    let second = factory.create::<PrototypeA>(())?;
    info!(
        first = first.label(),
        second = second.label(),
        variant = first.variant(),
        "Prototype A cloned twice"
    );

    let other = factory.create::<PrototypeB>(())?;
    info!(label = other.label(), variant = other.variant(), "Prototype B cloned");

    let existing = factory.create::<ExistingShared>(());
    info!(kind = existing.describe(), revision = existing.revision(), "Existing type adapted");

    info!("Factory demo complete");
    Ok(())
}
