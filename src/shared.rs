// 🧱 Shared-State Containers - Type-level attributes
//
// Each entity type owns two kinds of state:
// - Instance attributes: fixed at construction, unique per instance
// - Shared attributes: one value per TYPE, visible to every instance
//
// Two flavors of shared attribute appear across the catalog:
// - SharedValue<T>: a scalar (default unit, default country, a constant)
// - Registry<T>: an append-only ordered collection of every instance
//   ever constructed
//
// Every container guards its contents with a single RwLock so that a
// mutation is immediately visible to all existing and future instances.

use std::sync::RwLock;

// ============================================================================
// SHARED SCALAR
// ============================================================================

/// A scalar attribute shared by every instance of an entity type.
///
/// Readers get a clone of the current value; `set` overwrites it for
/// everyone, including instances constructed before the call. There is
/// no per-instance shadow copy.
pub struct SharedValue<T> {
    value: RwLock<T>,
}

impl<T: Clone> SharedValue<T> {
    /// Create a shared scalar with its type-level default
    pub fn new(initial: T) -> Self {
        SharedValue {
            value: RwLock::new(initial),
        }
    }

    /// Read the current value
    pub fn get(&self) -> T {
        self.value.read().unwrap().clone()
    }

    /// Overwrite the value for all instances of the type
    pub fn set(&self, new_value: T) {
        *self.value.write().unwrap() = new_value;
    }
}

// ============================================================================
// SHARED REGISTRY
// ============================================================================

/// An ordered collection of every instance of an entity type ever
/// constructed (append-only, never delete).
///
/// Construction of a registry-backed entity appends the new instance
/// exactly once, so `count()` always equals the number of successful
/// constructions and `all()` preserves construction order.
pub struct Registry<T: Clone> {
    instances: RwLock<Vec<T>>,
}

impl<T: Clone> Registry<T> {
    /// Create a new empty registry
    pub fn new() -> Self {
        Registry {
            instances: RwLock::new(Vec::new()),
        }
    }

    /// Append a new instance (append-only, never overwrites)
    pub fn register(&self, instance: T) {
        let mut instances = self.instances.write().unwrap();
        instances.push(instance);
    }

    /// Count instances constructed so far
    pub fn count(&self) -> usize {
        self.instances.read().unwrap().len()
    }

    /// Check whether anything has been registered yet
    pub fn is_empty(&self) -> bool {
        self.instances.read().unwrap().is_empty()
    }

    /// Snapshot of all instances in construction order
    pub fn all(&self) -> Vec<T> {
        self.instances.read().unwrap().clone()
    }

    /// Get the instance at a construction-order index
    pub fn get(&self, index: usize) -> Option<T> {
        self.instances.read().unwrap().get(index).cloned()
    }

    /// Find the first instance matching a predicate (construction order)
    pub fn find<P>(&self, predicate: P) -> Option<T>
    where
        P: Fn(&T) -> bool,
    {
        let instances = self.instances.read().unwrap();
        instances.iter().find(|item| predicate(item)).cloned()
    }

    /// Construction-order index of the first instance matching a predicate
    pub fn position<P>(&self, predicate: P) -> Option<usize>
    where
        P: Fn(&T) -> bool,
    {
        let instances = self.instances.read().unwrap();
        instances.iter().position(|item| predicate(item))
    }
}

impl<T: Clone> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
