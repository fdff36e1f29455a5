//! # Example: bean_lifecycle
//!
//! Four components, each declaring a different mix of lifecycle hooks, plus one
//! post-processing observer. Every callback prints a line, so the output shows the
//! exact order in which the registry drives them.
//!
//! Shows how to:
//! - Declare hooks of every [`HookKind`] with [`ManagedObject::builder`].
//! - Attach an [`Observer`] that brackets each initialization.
//! - Attach the built-in [`LogWriter`] to see the event stream.
//!
//! ## Flow
//! ```text
//! register(with-init-method, implements-interfaces, with-post-construct, with-many-hooks)
//! start()
//!   └─► per object: before_init ─► after-properties-set ─► init-method ─► post-construct ─► after_init
//! shutdown()
//!   └─► reverse order: destroy-method ─► disposable ─► pre-destroy
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example bean_lifecycle --features logging
//! ```

use std::sync::Arc;

use lifevisor::{
    BoxError, LogWriter, ManagedObject, Observer, Registry, RegistryConfig, Subscribe,
};

/// Returns a hook that prints `name: what`.
fn say(name: &'static str, what: &'static str) -> impl FnMut() -> Result<(), BoxError> + Send {
    move || {
        println!("{name}: {what}");
        Ok(())
    }
}

/// Prints before and after every initialization.
struct PrintingPostProcessor;

impl Observer for PrintingPostProcessor {
    fn before_init(&self, object: &ManagedObject) {
        println!("PrintingPostProcessor: before init of {}", object.name());
    }

    fn after_init(&self, object: &ManagedObject) {
        println!("PrintingPostProcessor: after init of {}", object.name());
    }

    fn name(&self) -> &'static str {
        "PrintingPostProcessor"
    }
}

/// "Constructs" a component: prints the constructor line and opens its builder.
fn construct(name: &'static str) -> lifevisor::ManagedObjectBuilder {
    println!("{name}: constructor");
    ManagedObject::builder(name)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let with_events = std::env::args().any(|a| a == "--events");
    let subs: Vec<Arc<dyn Subscribe>> = if with_events {
        vec![Arc::new(LogWriter::new())]
    } else {
        Vec::new()
    };

    let mut registry = Registry::builder(RegistryConfig::default())
        .with_observers(vec![Arc::new(PrintingPostProcessor)])
        .with_subscribers(subs)
        .build();

    let name = "WithInitAndDestroyMethod";
    registry.register(
        construct(name)
            .init_method(say(name, "init-method"))
            .destroy_method(say(name, "destroy-method"))
            .build(),
    )?;

    let name = "ImplementsInitializingAndDisposable";
    registry.register(
        construct(name)
            .after_properties_set(say(name, "after-properties-set"))
            .disposable(say(name, "disposable"))
            .build(),
    )?;

    let name = "WithPostConstructAndPreDestroy";
    registry.register(
        construct(name)
            .post_construct(say(name, "post-construct"))
            .pre_destroy(say(name, "pre-destroy"))
            .build(),
    )?;

    let name = "WithManyHooks";
    registry.register(
        construct(name)
            .post_construct(say(name, "post-construct"))
            .init_method(say(name, "init-method"))
            .after_properties_set(say(name, "after-properties-set"))
            .pre_destroy(say(name, "pre-destroy"))
            .disposable(say(name, "disposable"))
            .destroy_method(say(name, "destroy-method"))
            .build(),
    )?;

    registry.start()?;
    println!("registry started: {:?}", registry.startup_order());

    registry.shutdown()?;
    println!("registry shut down: {:?}", registry.teardown_order());
    Ok(())
}
