//! Content sections of the page body.

pub mod core_concepts;
pub mod examples;

pub use core_concepts::CoreConcepts;
pub use examples::Examples;
