//! Placeholder registry
//!
//! The Registry maps placeholder names to shared container handles and
//! builds new containers on demand with a swappable container class.
//! One registry belongs to one rendering pass; handles are `Rc`-based so
//! the registry cannot leave the thread that owns it.

use std::collections::HashMap;

use serde_json::Value;

use super::class::{ContainerClass, ContainerClasses};
use super::container::{Container, SharedContainer};
use crate::error::{Result, TesseraError};

/// Keyed store of placeholder containers
#[derive(Debug, Default)]
pub struct Registry {
    /// Class used for containers created from now on
    container_class: ContainerClass,
    /// Classes `set_container_class` may select by name
    classes: ContainerClasses,
    /// All containers, keyed by placeholder name
    containers: HashMap<String, SharedContainer>,
}

impl Registry {
    /// Create an empty registry using the default container class
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the container class by its fully-qualified name
    ///
    /// The name must belong to a registered container type; otherwise the
    /// current class is kept and an invalid-argument error is returned.
    pub fn set_container_class(&mut self, name: &str) -> Result<&mut Self> {
        let class = self.classes.resolve(name).ok_or_else(|| {
            TesseraError::InvalidArgument(format!(
                "Invalid Container class specified: '{}' is not a registered container",
                name
            ))
        })?;

        tracing::debug!(class = class.name(), "switching placeholder container class");
        self.container_class = class;
        Ok(self)
    }

    /// Register `C` and select it as the container class
    pub fn use_container_class<C: Container>(&mut self) -> &mut Self {
        let class = self.classes.register::<C>();
        tracing::debug!(class = class.name(), "switching placeholder container class");
        self.container_class = class;
        self
    }

    /// Make `C` selectable by name without selecting it
    pub fn register_container_class<C: Container>(&mut self) -> &mut Self {
        self.classes.register::<C>();
        self
    }

    /// Name of the class used for new containers
    pub fn container_class(&self) -> &'static str {
        self.container_class.name()
    }

    /// Check if a container exists
    pub fn container_exists(&self, key: &str) -> bool {
        self.containers.contains_key(key)
    }

    /// Create a container, replacing any container already stored at `key`
    pub fn create_container(&mut self, key: &str, data: Vec<Value>) -> SharedContainer {
        let container = self.container_class.instantiate(data);
        let replaced = self
            .containers
            .insert(key.to_string(), container.clone())
            .is_some();

        tracing::trace!(key, replaced, class = self.container_class.name(), "created container");
        container
    }

    /// Get the container at `key`, creating it when absent
    ///
    /// `data` only seeds a newly created container; it is ignored when the
    /// container already exists.
    pub fn get_container(&mut self, key: &str, data: Vec<Value>) -> SharedContainer {
        match self.containers.get(key) {
            Some(container) => container.clone(),
            None => self.create_container(key, data),
        }
    }

    /// Store a caller-provided container, replacing any existing one
    pub fn set_container(&mut self, key: &str, container: SharedContainer) -> &mut Self {
        self.containers.insert(key.to_string(), container);
        self
    }

    /// Remove a container; returns false when `key` was not present
    pub fn delete_container(&mut self, key: &str) -> bool {
        let removed = self.containers.remove(key).is_some();
        if removed {
            tracing::trace!(key, "deleted container");
        }
        removed
    }

    /// List all placeholder names
    pub fn keys(&self) -> Vec<&str> {
        self.containers.keys().map(|s| s.as_str()).collect()
    }

    /// Get the number of containers
    pub fn len(&self) -> usize {
        self.containers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.containers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placeholder::container::PlaceholderContainer;
    use serde_json::json;
    use std::any::{type_name, Any};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug)]
    struct MockContainer {
        data: Vec<Value>,
    }

    impl Container for MockContainer {
        fn from_data(data: Vec<Value>) -> Self {
            Self { data }
        }

        fn data(&self) -> &[Value] {
            &self.data
        }

        fn data_mut(&mut self) -> &mut Vec<Value> {
            &mut self.data
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    struct BogusContainer;

    fn is<C: Container>(container: &SharedContainer) -> bool {
        container.borrow().as_any().downcast_ref::<C>().is_some()
    }

    #[test]
    fn test_create_container() {
        let mut registry = Registry::new();
        assert!(!registry.container_exists("foo"));
        registry.create_container("foo", Vec::new());
        assert!(registry.container_exists("foo"));
    }

    #[test]
    fn test_create_container_uses_default_class() {
        let mut registry = Registry::new();
        let container = registry.create_container("foo", Vec::new());
        assert!(is::<PlaceholderContainer>(&container));
    }

    #[test]
    fn test_create_container_twice_replaces() {
        let mut registry = Registry::new();
        let first = registry.create_container("foo", Vec::new());
        let second = registry.create_container("foo", Vec::new());

        assert!(!Rc::ptr_eq(&first, &second));
        assert!(Rc::ptr_eq(&second, &registry.get_container("foo", Vec::new())));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_get_container_creates_if_missing() {
        let mut registry = Registry::new();
        let container = registry.get_container("foo", Vec::new());
        assert!(is::<PlaceholderContainer>(&container));
        assert!(registry.container_exists("foo"));
    }

    #[test]
    fn test_get_container_preserves_identity() {
        let mut registry = Registry::new();
        let first = registry.get_container("foo", Vec::new());
        first.borrow_mut().data_mut().push(json!("title"));

        let second = registry.get_container("foo", vec![json!("ignored")]);
        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(second.borrow().data(), &[json!("title")]);
    }

    #[test]
    fn test_set_container_creates_entry() {
        let mut registry = Registry::new();
        let foo: SharedContainer = Rc::new(RefCell::new(PlaceholderContainer::from_data(vec![
            json!("foo"),
            json!("bar"),
        ])));

        assert!(!registry.container_exists("foo"));
        registry.set_container("foo", foo.clone());
        assert!(registry.container_exists("foo"));
        assert!(Rc::ptr_eq(&foo, &registry.get_container("foo", Vec::new())));
    }

    #[test]
    fn test_container_class_accessors() {
        let mut registry = Registry::new();
        assert_eq!(registry.container_class(), type_name::<PlaceholderContainer>());

        registry.register_container_class::<MockContainer>();
        registry
            .set_container_class(type_name::<MockContainer>())
            .unwrap();
        assert_eq!(registry.container_class(), type_name::<MockContainer>());
    }

    #[test]
    fn test_invalid_container_class_keeps_current() {
        let mut registry = Registry::new();
        let result = registry.set_container_class(type_name::<BogusContainer>());

        assert!(matches!(result, Err(TesseraError::InvalidArgument(_))));
        assert_eq!(registry.container_class(), type_name::<PlaceholderContainer>());
    }

    #[test]
    fn test_invalid_class_after_custom_keeps_custom() {
        let mut registry = Registry::new();
        registry.use_container_class::<MockContainer>();
        assert!(registry.set_container_class("NotAContainer").is_err());
        assert_eq!(registry.container_class(), type_name::<MockContainer>());
    }

    #[test]
    fn test_delete_container() {
        let mut registry = Registry::new();
        registry.create_container("foo", Vec::new());
        assert!(registry.delete_container("foo"));
        assert!(!registry.container_exists("foo"));
        assert!(!registry.delete_container("foo"));
    }

    #[test]
    fn test_delete_missing_container() {
        let mut registry = Registry::new();
        assert!(!registry.delete_container("foo"));
    }

    #[test]
    fn test_custom_class_creates_custom_containers() {
        let mut registry = Registry::new();
        registry.use_container_class::<MockContainer>();
        let container = registry.create_container("foo", Vec::new());
        assert!(is::<MockContainer>(&container));
        assert!(!is::<PlaceholderContainer>(&container));
    }

    #[test]
    fn test_custom_class_receives_initial_data() {
        let mut registry = Registry::new();
        registry.use_container_class::<MockContainer>();
        let container = registry.create_container("foo", vec![json!("ZF-10793")]);
        assert_eq!(container.borrow().data(), &[json!("ZF-10793")]);
    }

    #[test]
    fn test_custom_class_default_render() {
        let mut registry = Registry::new();
        registry.use_container_class::<MockContainer>();
        let container = registry.get_container("scripts", vec![json!("a.js"), json!(2)]);
        assert_eq!(container.borrow().render(), "a.js2");
    }

    #[test]
    fn test_key_lifecycle_cycles() {
        let mut registry = Registry::new();
        for _ in 0..3 {
            registry.get_container("title", Vec::new());
            assert!(registry.container_exists("title"));
            assert!(registry.delete_container("title"));
            assert!(!registry.container_exists("title"));
        }
        assert!(registry.is_empty());
    }

    #[test]
    fn test_keys() {
        let mut registry = Registry::new();
        registry.create_container("title", Vec::new());
        registry.create_container("scripts", Vec::new());
        let keys = registry.keys();
        assert_eq!(keys.len(), 2);
        assert!(keys.contains(&"title"));
        assert!(keys.contains(&"scripts"));
    }
}
