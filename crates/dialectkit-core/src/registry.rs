use std::collections::HashMap;
use std::sync::Arc;

use crate::dialect::{DataSource, Dialect};
use crate::error::{Error, Result};

/// Constructor registered for a driver name.
pub type DialectFactory = fn(&DataSource) -> Result<Arc<dyn Dialect>>;

/// Registry of dialect constructors keyed by driver name.
///
/// Built explicitly at startup by each engine crate's `register` function;
/// there is no global instance.
#[derive(Default)]
pub struct DialectRegistry {
    factories: HashMap<String, DialectFactory>,
}

impl DialectRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the factory for `driver`.
    pub fn register(&mut self, driver: impl Into<String>, factory: DialectFactory) {
        self.factories.insert(driver.into(), factory);
    }

    pub fn contains(&self, driver: &str) -> bool {
        self.factories.contains_key(driver)
    }

    /// Registered driver names, sorted.
    pub fn drivers(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Construct the dialect registered for `source.driver_name`.
    pub fn open(&self, source: &DataSource) -> Result<Arc<dyn Dialect>> {
        let factory = self
            .factories
            .get(&source.driver_name)
            .ok_or_else(|| Error::UnsupportedDriver(source.driver_name.clone()))?;
        factory(source)
    }
}
