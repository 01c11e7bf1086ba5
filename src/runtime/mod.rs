//! The runtime layer: the owned configuration context, its listener registry,
//! and the compute-once view cache.

mod listeners;
mod merger;
mod resolver;
mod store;

pub use listeners::Subscription;
pub use store::StyleRuntime;
