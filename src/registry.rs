use std::collections::HashMap;

/// Name-to-handler mapping. Registering an existing name replaces its handler.
#[derive(Debug)]
pub struct Registry<H> {
    entries: HashMap<String, H>,
}

impl<H> Registry<H> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn register(&mut self, name: impl Into<String>, handler: H) {
        self.entries.insert(name.into(), handler);
    }

    /// Returns the handler registered under `name`, if any.
    pub fn lookup(&self, name: &str) -> Option<&H> {
        self.entries.get(name)
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub(crate) fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }
}

impl<H> Default for Registry<H> {
    fn default() -> Self {
        Self::new()
    }
}
