//! Attribute persistence boundary
//!
//! The hosting editor owns persistence. The controller only sees a store it
//! can read the current record from and hand a full replacement record to.

use pricegrid_model::AttributeState;

/// Get/set access to the persisted attribute record
pub trait AttributeStore {
    /// Current record
    fn attributes(&self) -> &AttributeState;

    /// Replace the whole record
    fn set_attributes(&mut self, attributes: AttributeState);
}

impl<S: AttributeStore + ?Sized> AttributeStore for &mut S {
    fn attributes(&self) -> &AttributeState {
        (**self).attributes()
    }

    fn set_attributes(&mut self, attributes: AttributeState) {
        (**self).set_attributes(attributes);
    }
}

/// In-process store holding the record by value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    attributes: AttributeState,
    writes: usize,
}

impl MemoryStore {
    /// Store seeded with a record
    #[inline]
    #[must_use]
    pub fn new(attributes: AttributeState) -> Self {
        Self {
            attributes,
            writes: 0,
        }
    }

    /// Number of records written so far
    #[inline]
    #[must_use]
    pub fn writes(&self) -> usize {
        self.writes
    }

    /// Take the record out
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> AttributeState {
        self.attributes
    }
}

impl AttributeStore for MemoryStore {
    fn attributes(&self) -> &AttributeState {
        &self.attributes
    }

    fn set_attributes(&mut self, attributes: AttributeState) {
        self.attributes = attributes;
        self.writes += 1;
    }
}

/// Store that forwards every write to a host callback
///
/// Mirrors an editor surface that receives the record plus a write-back
/// function accepting a full replacement record.
pub struct WriteBackStore<F> {
    attributes: AttributeState,
    write_back: F,
}

impl<F: FnMut(&AttributeState)> WriteBackStore<F> {
    /// Store seeded with a record and a write-back callback
    #[inline]
    pub fn new(attributes: AttributeState, write_back: F) -> Self {
        Self {
            attributes,
            write_back,
        }
    }
}

impl<F> std::fmt::Debug for WriteBackStore<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WriteBackStore")
            .field("attributes", &self.attributes)
            .finish_non_exhaustive()
    }
}

impl<F: FnMut(&AttributeState)> AttributeStore for WriteBackStore<F> {
    fn attributes(&self) -> &AttributeState {
        &self.attributes
    }

    fn set_attributes(&mut self, attributes: AttributeState) {
        (self.write_back)(&attributes);
        self.attributes = attributes;
    }
}
