//! Fixed-capacity entity pools
//!
//! A pool is a vector of slots allocated once; entities are switched on and
//! off through their active flag instead of being pushed or removed. Scans
//! always run in slot order, which keeps "first free" and "first hit" choices
//! deterministic.

use std::ops::{Index, IndexMut};

/// An entity that can live in a [`Pool`]
pub trait Slot {
    fn is_active(&self) -> bool;
    fn set_active(&mut self, active: bool);
}

/// Fixed set of slots, switched on and off in place
#[derive(Debug, Clone)]
pub struct Pool<T> {
    slots: Vec<T>,
}

impl<T: Slot> Pool<T> {
    /// Allocate `capacity` slots, each built by `init` and then switched off
    pub fn new(capacity: usize, mut init: impl FnMut(usize) -> T) -> Self {
        let slots = (0..capacity)
            .map(|i| {
                let mut slot = init(i);
                slot.set_active(false);
                slot
            })
            .collect();
        Self { slots }
    }

    /// Wrap already-built slots (active flags are kept as given)
    pub fn from_slots(slots: Vec<T>) -> Self {
        Self { slots }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_active()).count()
    }

    pub fn any_active(&self) -> bool {
        self.slots.iter().any(T::is_active)
    }

    /// Lowest-index inactive slot
    pub fn first_free(&self) -> Option<usize> {
        self.slots.iter().position(|s| !s.is_active())
    }

    pub fn deactivate_all(&mut self) {
        for slot in &mut self.slots {
            slot.set_active(false);
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.slots.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.slots.iter_mut()
    }

    pub fn iter_active(&self) -> impl Iterator<Item = &T> {
        self.slots.iter().filter(|s| s.is_active())
    }

    pub fn iter_active_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.slots.iter_mut().filter(|s| s.is_active())
    }

    pub fn as_slice(&self) -> &[T] {
        &self.slots
    }
}

impl<T> Index<usize> for Pool<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.slots[index]
    }
}

impl<T> IndexMut<usize> for Pool<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.slots[index]
    }
}
