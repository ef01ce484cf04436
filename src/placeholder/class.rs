//! Container classes
//!
//! A class pairs a container type's fully-qualified name with a constructor,
//! so the registry can switch the type it builds at runtime.

use std::any::type_name;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde_json::Value;

use super::container::{Container, PlaceholderContainer, SharedContainer};

/// Constructor reference for one container type
#[derive(Debug, Clone, Copy)]
pub struct ContainerClass {
    name: &'static str,
    construct: fn(Vec<Value>) -> SharedContainer,
}

impl ContainerClass {
    pub fn of<C: Container>() -> Self {
        Self {
            name: type_name::<C>(),
            construct: construct::<C>,
        }
    }

    /// Fully-qualified type name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Build a new shared instance seeded with `data`
    pub fn instantiate(&self, data: Vec<Value>) -> SharedContainer {
        (self.construct)(data)
    }
}

impl Default for ContainerClass {
    fn default() -> Self {
        Self::of::<PlaceholderContainer>()
    }
}

fn construct<C: Container>(data: Vec<Value>) -> SharedContainer {
    Rc::new(RefCell::new(C::from_data(data)))
}

/// Catalog of container classes selectable by name
#[derive(Debug, Clone)]
pub struct ContainerClasses {
    classes: HashMap<&'static str, ContainerClass>,
}

impl ContainerClasses {
    /// A catalog holding only the default class
    pub fn new() -> Self {
        let mut classes = HashMap::new();
        let default = ContainerClass::default();
        classes.insert(default.name(), default);
        Self { classes }
    }

    pub fn register<C: Container>(&mut self) -> ContainerClass {
        let class = ContainerClass::of::<C>();
        self.classes.insert(class.name(), class);
        class
    }

    pub fn resolve(&self, name: &str) -> Option<ContainerClass> {
        self.classes.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }

    /// Registered class names
    pub fn names(&self) -> Vec<&'static str> {
        self.classes.keys().copied().collect()
    }
}

impl Default for ContainerClasses {
    fn default() -> Self {
        Self::new()
    }
}
