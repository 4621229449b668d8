//! Registry of named sensor containers.
//!
//! A container plays the part of a module: a dotted name (e.g. `apd.sensors`)
//! holding named members. Only members registered through
//! [`Container::sensor`] can be instantiated, and that method only accepts
//! types implementing [`Sensor`], so contract conformance is checked when the
//! container is built rather than when a path is resolved.

use crate::sensor::{DynSensor, Sensor};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Builds a default-initialized sensor.
pub type SensorFactory = fn() -> Box<dyn DynSensor>;

fn build<S: Sensor + Default + 'static>() -> Box<dyn DynSensor> {
    Box::new(S::default())
}

/// Kind of a non-sensor member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    /// A type that does not implement the sensor contract.
    Type,
    /// A free function.
    Function,
    /// A constant value.
    Constant,
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemKind::Type => write!(f, "type"),
            ItemKind::Function => write!(f, "function"),
            ItemKind::Constant => write!(f, "constant"),
        }
    }
}

/// A named entry in a container.
#[derive(Clone, Copy)]
pub enum Member {
    /// A concrete sensor type.
    Sensor(SensorFactory),
    /// The abstract sensor contract itself.
    Contract,
    /// Anything else exported by the container.
    Item(ItemKind),
}

impl fmt::Debug for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Member::Sensor(_) => write!(f, "Sensor(..)"),
            Member::Contract => write!(f, "Contract"),
            Member::Item(kind) => write!(f, "Item({:?})", kind),
        }
    }
}

/// A named group of members.
#[derive(Debug, Clone)]
pub struct Container {
    name: String,
    members: BTreeMap<String, Member>,
}

impl Container {
    /// Creates an empty container.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: BTreeMap::new(),
        }
    }

    /// Registers a concrete sensor type under `name`.
    pub fn sensor<S: Sensor + Default + 'static>(mut self, name: &str) -> Self {
        self.members
            .insert(name.to_string(), Member::Sensor(build::<S>));
        self
    }

    /// Registers the abstract sensor contract under `name`.
    pub fn contract(mut self, name: &str) -> Self {
        self.members.insert(name.to_string(), Member::Contract);
        self
    }

    /// Registers a non-sensor member under `name`.
    pub fn item(mut self, name: &str, kind: ItemKind) -> Self {
        self.members.insert(name.to_string(), Member::Item(kind));
        self
    }

    /// Returns the container name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Looks up a member by name.
    pub fn get(&self, name: &str) -> Option<&Member> {
        self.members.get(name)
    }

    /// Names of members that can be instantiated as sensors, sorted.
    pub fn sensor_names(&self) -> impl Iterator<Item = &str> {
        self.members
            .iter()
            .filter(|(_, member)| matches!(member, Member::Sensor(_)))
            .map(|(name, _)| name.as_str())
    }
}

/// Set of containers that sensor paths resolve against.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    containers: HashMap<String, Container>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a container, replacing any container with the same name.
    pub fn register(&mut self, container: Container) {
        self.containers.insert(container.name.clone(), container);
    }

    /// Builder-style [`Registry::register`].
    pub fn with(mut self, container: Container) -> Self {
        self.register(container);
        self
    }

    /// Looks up a container by name.
    pub fn container(&self, name: &str) -> Option<&Container> {
        self.containers.get(name)
    }

    /// All resolvable sensor paths, sorted.
    pub fn sensor_paths(&self) -> Vec<String> {
        let mut paths: Vec<String> = self
            .containers
            .values()
            .flat_map(|c| c.sensor_names().map(move |m| format!("{}:{}", c.name, m)))
            .collect();
        paths.sort();
        paths
    }
}
