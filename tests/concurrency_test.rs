use factory_recipe::domain::{
    DemoFactory, FloatValue, IntValue, PrototypeA, PrototypeImpl, ProductFactory, Shared,
};
use factory_recipe::{Factory, Synchronized};
use std::sync::Arc;

/// Prototypes registered up front, then many concurrent readers without any lock.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_creation_after_setup() {
    let mut concrete = DemoFactory::new();
    concrete.set_prototype::<PrototypeA>(Box::new(PrototypeImpl::<0>::new("alpha")));
    let shared = Arc::new(concrete);

    let mut handles = Vec::new();
    for i in 0..16 {
        let shared = Arc::clone(&shared);
        handles.push(tokio::spawn(async move {
            let factory: &dyn ProductFactory = &*shared;
            let value = factory.create::<IntValue>((i,));
            let scaled = factory.create::<FloatValue>((i as f32 * 0.5,));
            let label = factory.create::<PrototypeA>(()).unwrap().label().to_string();
            (value, scaled, label)
        }));
    }

    for (i, handle) in handles.into_iter().enumerate() {
        let (value, scaled, label) = handle.await.unwrap();
        assert_eq!(value, i as i32);
        assert_eq!(scaled, i as f32 * 0.5);
        assert_eq!(label, "alpha");
    }
}

/// Prototype replacement while other tasks keep creating.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_synchronized_replacement_during_creation() {
    let factory = Arc::new(Synchronized::new(DemoFactory::new()));
    factory.set_prototype::<PrototypeA>(Box::new(PrototypeImpl::<0>::new("v0")));

    let mut readers = Vec::new();
    for _ in 0..8 {
        let factory = Arc::clone(&factory);
        readers.push(tokio::spawn(async move {
            let mut seen = Vec::new();
            for _ in 0..50 {
                let product = (*factory).create::<PrototypeA>(()).unwrap();
                seen.push(product.label().to_string());
                tokio::task::yield_now().await;
            }
            seen
        }));
    }

    let writer = {
        let factory = Arc::clone(&factory);
        tokio::spawn(async move {
            for version in 1..=5 {
                factory.set_prototype::<PrototypeA>(Box::new(PrototypeImpl::<0>::new(format!(
                    "v{}",
                    version
                ))));
                tokio::task::yield_now().await;
            }
        })
    };

    writer.await.unwrap();
    for reader in readers {
        let seen = reader.await.unwrap();
        assert_eq!(seen.len(), 50);
        assert!(seen.iter().all(|label| label.starts_with('v')));
    }
    assert_eq!((*factory).create::<PrototypeA>(()).unwrap().label(), "v5");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_synchronized_factory_as_trait_object() {
    let factory: Arc<Synchronized<DemoFactory>> = Arc::default();
    let shared = {
        let factory = Arc::clone(&factory);
        tokio::spawn(async move {
            let abstract_factory: &dyn ProductFactory = &*factory;
            abstract_factory.create::<Shared>(()).describe()
        })
        .await
        .unwrap()
    };
    assert_eq!(shared, "shared");
    assert!(!factory.has_prototype::<PrototypeA>());
}
