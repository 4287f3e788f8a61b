//! PostgreSQL dialect for dialectkit.
//!
//! Maps the generic schema model onto PostgreSQL types and DDL, and reflects
//! the `public` schema's catalog back into that model.

pub mod dialect;
pub mod mapper;
pub mod queries;
pub mod reserved;
pub mod typemap;

use dialectkit_core::DialectRegistry;

pub use dialect::PostgresDialect;

/// Driver names served by this crate.
pub const DRIVER_NAMES: &[&str] = &["postgres", "postgresql"];

/// Register the PostgreSQL dialect under each of [`DRIVER_NAMES`].
pub fn register(registry: &mut DialectRegistry) {
    for name in DRIVER_NAMES {
        registry.register(*name, dialect::open);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registers_both_driver_names() {
        let mut registry = DialectRegistry::new();
        register(&mut registry);
        assert_eq!(registry.drivers(), vec!["postgres", "postgresql"]);
    }
}
