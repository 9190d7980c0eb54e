//! Named-module registry with lifecycle hooks.
//!
//! Components are wired with their collaborators at construction time; the
//! registry only carries the registration semantics the page relies on:
//! unique names, `initialize` at registration, `ready` once the composition
//! root declares the page ready. A module registered after that point gets
//! its `ready` hook immediately.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("cannot register \"{0}\": the name is already taken")]
    Duplicate(String),
}

/// Lifecycle hooks for a registered page module. Both default to no-ops.
pub trait Module {
    /// Runs once, immediately at registration.
    fn initialize(&mut self) {}

    /// Runs once, when the page is ready.
    fn ready(&mut self) {}
}

#[derive(Default)]
pub struct Registry {
    modules: Vec<(String, Box<dyn Module>)>,
    ready_run: bool,
}

impl Registry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a module under a unique name and runs its `initialize`
    /// hook.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Duplicate`] naming the conflicting key when
    /// the name is already registered.
    pub fn register(&mut self, name: &str, mut module: Box<dyn Module>) -> Result<(), RegistryError> {
        if self.modules.iter().any(|(existing, _)| existing == name) {
            return Err(RegistryError::Duplicate(name.to_owned()));
        }
        module.initialize();
        if self.ready_run {
            module.ready();
        }
        self.modules.push((name.to_owned(), module));
        Ok(())
    }

    /// Runs every registered module's `ready` hook. Subsequent calls are
    /// no-ops; modules registered later get `ready` at registration.
    pub fn run_ready(&mut self) {
        if self.ready_run {
            return;
        }
        self.ready_run = true;
        for (_, module) in &mut self.modules {
            module.ready();
        }
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.modules.iter().any(|(existing, _)| existing == name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[derive(Default)]
    struct Counters {
        initialized: u32,
        readied: u32,
    }

    struct CountingModule {
        counters: Rc<RefCell<Counters>>,
    }

    impl Module for CountingModule {
        fn initialize(&mut self) {
            self.counters.borrow_mut().initialized += 1;
        }

        fn ready(&mut self) {
            self.counters.borrow_mut().readied += 1;
        }
    }

    fn counting_module() -> (Rc<RefCell<Counters>>, Box<dyn Module>) {
        let counters = Rc::new(RefCell::new(Counters::default()));
        let module = CountingModule {
            counters: Rc::clone(&counters),
        };
        (counters, Box::new(module))
    }

    #[test]
    fn register_runs_initialize_immediately() {
        let mut registry = Registry::new();
        let (counters, module) = counting_module();
        registry.register("hamburgerMenu", module).unwrap();
        assert_eq!(counters.borrow().initialized, 1);
        assert_eq!(counters.borrow().readied, 0);
    }

    #[test]
    fn duplicate_name_is_rejected_and_named() {
        let mut registry = Registry::new();
        let (_, first) = counting_module();
        let (counters, second) = counting_module();
        registry.register("equalizeHeights", first).unwrap();

        let err = registry.register("equalizeHeights", second).unwrap_err();
        assert_eq!(err, RegistryError::Duplicate("equalizeHeights".to_owned()));
        assert_eq!(err.to_string(), "cannot register \"equalizeHeights\": the name is already taken");
        // The rejected module never ran its hooks.
        assert_eq!(counters.borrow().initialized, 0);
    }

    #[test]
    fn run_ready_fires_each_module_once() {
        let mut registry = Registry::new();
        let (counters, module) = counting_module();
        registry.register("postalCodeManager", module).unwrap();

        registry.run_ready();
        registry.run_ready();

        assert_eq!(counters.borrow().readied, 1);
    }

    #[test]
    fn late_registration_gets_ready_immediately() {
        let mut registry = Registry::new();
        registry.run_ready();

        let (counters, module) = counting_module();
        registry.register("accessibility", module).unwrap();

        assert_eq!(counters.borrow().initialized, 1);
        assert_eq!(counters.borrow().readied, 1);
    }
}
