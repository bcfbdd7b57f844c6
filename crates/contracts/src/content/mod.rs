//! Course content shown by the frontend: core concept cards and the
//! per-topic examples behind the tab menu.

pub mod catalog;
pub mod topic;

pub use catalog::{catalog, Catalog, CoreConcept, ExampleTopic};
pub use topic::TopicKey;
