//! # Example: error_policies
//!
//! Runs the same three objects twice, once per [`HookErrorPolicy`], where the
//! middle object has a failing init hook.
//!
//! - `Continue`: every hook runs, `start()` reports the failure afterwards.
//! - `Abort`: `start()` stops at the failure; the object ends up `Failed`.
//!
//! ## Run
//! ```bash
//! RUST_LOG=lifevisor=debug cargo run --example error_policies
//! ```

use lifevisor::{
    HookErrorPolicy, LifecycleError, ManagedObject, Registry, RegistryConfig,
};
use tracing_subscriber::EnvFilter;

fn objects() -> Vec<ManagedObject> {
    vec![
        ManagedObject::builder("config")
            .after_properties_set(|| Ok(()))
            .build(),
        ManagedObject::builder("database")
            .init_method(|| Err("connection refused".into()))
            .post_construct(|| {
                println!("database: post-construct");
                Ok(())
            })
            .disposable(|| {
                println!("database: disposable");
                Ok(())
            })
            .build(),
        ManagedObject::builder("http")
            .post_construct(|| {
                println!("http: post-construct");
                Ok(())
            })
            .pre_destroy(|| {
                println!("http: pre-destroy");
                Ok(())
            })
            .build(),
    ]
}

fn run(policy: HookErrorPolicy) -> Result<(), Box<dyn std::error::Error>> {
    println!("=== {policy:?} ===");
    let mut registry = Registry::new(RegistryConfig::with_policy(policy));
    for obj in objects() {
        registry.register(obj)?;
    }

    match registry.start() {
        Ok(()) => println!("started"),
        Err(err @ LifecycleError::HooksFailed { .. }) => {
            println!("started with errors: {}", err.as_message());
        }
        Err(err) => println!("start aborted: {err}"),
    }
    for name in registry.names() {
        println!("  {name}: {}", registry.state(name));
    }

    registry.shutdown()?;
    println!("teardown order: {:?}", registry.teardown_order());
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    run(HookErrorPolicy::Continue)?;
    run(HookErrorPolicy::Abort)?;
    Ok(())
}
