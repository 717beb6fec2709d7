//! Scoped bump allocation with a fixed budget.
//!
//! The decoded entry sequence and every cooked token value live in one
//! [`Arena`]. Allocations are never freed individually; dropping (or
//! [resetting](Arena::reset)) the arena releases all of them at once, which
//! the borrow checker ties to the lifetime of every tokenizer and value
//! borrowed from it.

use std::cell::Cell;
use std::mem;

use bumpalo::Bump;

/// A bump allocator that refuses allocations beyond `capacity` bytes.
///
/// Not `Sync`: one tokenizer session owns it at a time.
#[derive(Debug)]
pub struct Arena {
    bump: Bump,
    capacity: usize,
    /// Bytes handed out, alignment padding included.
    used: Cell<usize>,
}

impl Arena {
    /// Budget used by [`Arena::default`].
    pub const DEFAULT_CAPACITY: usize = 16 << 20;

    /// Create an arena that will hand out at most `capacity` bytes.
    ///
    /// Memory is reserved lazily; an unused arena costs nothing.
    pub fn new(capacity: usize) -> Self {
        Arena {
            bump: Bump::new(),
            capacity,
            used: Cell::new(0),
        }
    }

    /// Create an arena sized for tokenizing `input_len` bytes.
    ///
    /// Leaves room for one decoded entry per byte plus cooked values of
    /// about the same total size.
    pub fn for_input(input_len: usize) -> Self {
        let entry = mem::size_of::<comot_css_core::DecodedEntry>();
        let capacity = input_len
            .saturating_mul(entry + 4)
            .saturating_add(64 << 10);
        Arena::new(capacity)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn used(&self) -> usize {
        self.used.get()
    }

    /// Bytes still available.
    pub fn remaining(&self) -> usize {
        self.capacity - self.used.get()
    }

    /// Copy `src` into the arena. `None` if the budget would be exceeded.
    pub fn alloc_slice_copy<T: Copy>(&self, src: &[T]) -> Option<&[T]> {
        self.reserve(mem::size_of_val(src), mem::align_of::<T>())?;
        Some(self.bump.alloc_slice_copy(src))
    }

    /// Copy `s` into the arena. `None` if the budget would be exceeded.
    pub fn alloc_str(&self, s: &str) -> Option<&str> {
        self.reserve(s.len(), 1)?;
        Some(self.bump.alloc_str(s))
    }

    /// Release every allocation and restore the full budget.
    pub fn reset(&mut self) {
        self.bump.reset();
        self.used.set(0);
    }

    /// Charge `size` bytes at `align` against the budget.
    ///
    /// Padding is charged as the worst case, so the budget is an upper bound
    /// on what the bump allocator actually hands out.
    fn reserve(&self, size: usize, align: usize) -> Option<()> {
        let charged = size.checked_add(align - 1)?;
        if charged > self.remaining() {
            return None;
        }
        self.used.set(self.used.get() + charged);
        Some(())
    }
}

impl Default for Arena {
    fn default() -> Self {
        Arena::new(Arena::DEFAULT_CAPACITY)
    }
}
