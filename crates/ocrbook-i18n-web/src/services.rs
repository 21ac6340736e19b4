//! Browser capabilities behind the core loader traits.

mod fetch;
mod registry;
mod script;

pub use fetch::GlooFetcher;
pub use registry::WindowRegistry;
pub use script::DomScriptInjector;
