use factory_recipe::domain::{
    DemoFactory, ExistingShared, FloatValue, IntValue, LegacyShared, PrototypeA, PrototypeB,
    PrototypeImpl, PrototypeProduct, ProductFactory, Raw, Shared, Unique, UniqueProduct,
};
use factory_recipe::{release_raw, Factory, FactoryError};
use std::sync::Arc;

fn ready_factory() -> DemoFactory {
    let mut factory = DemoFactory::new();
    factory.set_prototype::<PrototypeA>(Box::new(PrototypeImpl::<0>::new("alpha")));
    factory.set_prototype::<PrototypeB>(Box::new(PrototypeImpl::<1>::new("beta")));
    factory
}

/// Every product of the demo family through one `&dyn ProductFactory`.
#[test]
fn test_full_product_family() {
    let concrete = ready_factory();
    let factory: &dyn ProductFactory = &concrete;

    let unique: Box<dyn UniqueProduct> = factory.create::<Unique>(());
    assert_eq!(unique.describe(), "unique");

    let shared = factory.create::<Shared>(());
    assert_eq!(shared.describe(), "shared");
    assert_eq!(Arc::strong_count(&shared), 1);

    let raw = factory.create::<Raw>((true, 1));
    // SAFETY: `raw` is live until released below.
    let product = unsafe { raw.as_ref() };
    assert!(product.flag());
    assert_eq!(product.value(), 1);
    // SAFETY: released exactly once, not used afterwards.
    unsafe { release_raw(raw) };

    assert_eq!(factory.create::<IntValue>((12,)), 12);
    assert_eq!(factory.create::<FloatValue>((0.5,)), 0.5);

    let a = factory.create::<PrototypeA>(()).unwrap();
    let b = factory.create::<PrototypeB>(()).unwrap();
    assert_eq!((a.label(), a.variant()), ("alpha", 0));
    assert_eq!((b.label(), b.variant()), ("beta", 1));

    let existing = factory.create::<ExistingShared>(());
    assert_eq!(existing.describe(), "existing");
}

#[test]
fn test_raw_handles_are_independent() {
    let factory = DemoFactory::new();
    let first = factory.create::<Raw>((false, -3));
    let second = factory.create::<Raw>((true, 7));
    assert_ne!(first.as_ptr() as *const u8, second.as_ptr() as *const u8);

    // SAFETY: both handles are live and released exactly once.
    unsafe {
        assert_eq!((first.as_ref().flag(), first.as_ref().value()), (false, -3));
        assert_eq!((second.as_ref().flag(), second.as_ref().value()), (true, 7));
        release_raw(first);
        release_raw(second);
    }
}

#[test]
fn test_prototype_clones_are_distinct_and_independent() {
    let factory = ready_factory();

    let mut first = factory.create::<PrototypeA>(()).unwrap();
    let second = factory.create::<PrototypeA>(()).unwrap();

    let first_addr = &*first as *const dyn PrototypeProduct<0> as *const u8;
    let second_addr = &*second as *const dyn PrototypeProduct<0> as *const u8;
    assert_ne!(first_addr, second_addr);

    first.relabel("changed");
    assert_eq!(first.label(), "changed");
    assert_eq!(second.label(), "alpha");

    let third = factory.create::<PrototypeA>(()).unwrap();
    assert_eq!(third.label(), "alpha");
}

#[test]
fn test_prototype_before_registration_fails() {
    let mut factory = DemoFactory::new();

    let result = factory.create::<PrototypeB>(());
    let err = result.err().unwrap();
    assert_eq!(err, FactoryError::PrototypeUnset { product: "PrototypeB" });
    assert_eq!(err.to_string(), "Prototype not set for product PrototypeB");

    // Registering one family leaves the other empty.
    factory.set_prototype::<PrototypeA>(Box::new(PrototypeImpl::<0>::default()));
    assert!(factory.create::<PrototypeA>(()).is_ok());
    assert!(factory.create::<PrototypeB>(()).is_err());
    assert!(!factory.has_prototype::<PrototypeB>());
}

#[test]
fn test_set_prototype_replaces_previous() {
    let mut factory = ready_factory();

    let previous = factory
        .set_prototype::<PrototypeA>(Box::new(PrototypeImpl::<0>::new("gamma")))
        .unwrap();
    assert_eq!(previous.label(), "alpha");
    assert_eq!(factory.create::<PrototypeA>(()).unwrap().label(), "gamma");
    assert_eq!(factory.create::<PrototypeB>(()).unwrap().label(), "beta");
}

#[test]
fn test_existing_type_is_shared() {
    let factory = DemoFactory::new();

    let existing = factory.create::<ExistingShared>(());
    assert_eq!(existing.revision(), LegacyShared::CURRENT_REVISION);
    let alias = Arc::clone(&existing);
    assert_eq!(Arc::strong_count(&existing), 2);
    assert!(Arc::ptr_eq(&existing, &alias));

    let fresh = factory.create::<ExistingShared>(());
    assert!(!Arc::ptr_eq(&existing, &fresh));
}

#[test]
fn test_concrete_and_abstract_calls_agree() {
    let concrete = DemoFactory::new();
    let factory: &dyn ProductFactory = &concrete;

    assert_eq!(concrete.create::<IntValue>((-4,)), factory.create::<IntValue>((-4,)));
    assert_eq!(
        concrete.create::<Unique>(()).describe(),
        factory.create::<Unique>(()).describe()
    );
}
