//! Display list and redo buffer backing undo/redo.

use super::shape::Displayable;
use crate::config::ClearPolicy;
use log::{debug, warn};

/// Committed drawing history plus the items undone from it.
///
/// Both sequences are strict LIFO stacks. `display_list` is kept in creation
/// order (first = bottom layer) and is never reordered.
#[derive(Debug, Clone)]
pub struct History {
    display_list: Vec<Displayable>,
    redo_stack: Vec<Displayable>,
    /// Maximum number of committed items (0 = unlimited)
    pub max_items: usize,
    /// Whether a new commit discards everything that could be redone
    pub invalidate_redo_on_commit: bool,
    /// What `clear` does with the redo stack
    pub clear_policy: ClearPolicy,
}

impl Default for History {
    fn default() -> Self {
        Self::new(true, ClearPolicy::KeepRedo)
    }
}

impl History {
    /// Creates an empty history with no item limit.
    pub fn new(invalidate_redo_on_commit: bool, clear_policy: ClearPolicy) -> Self {
        Self {
            display_list: Vec::new(),
            redo_stack: Vec::new(),
            max_items: 0,
            invalidate_redo_on_commit,
            clear_policy,
        }
    }

    /// Committed items in draw order.
    pub fn display_list(&self) -> &[Displayable] {
        &self.display_list
    }

    /// Undone items; the last element is the next one `redo` restores.
    pub fn redo_stack(&self) -> &[Displayable] {
        &self.redo_stack
    }

    /// Appends an item to the display list.
    ///
    /// Returns `false` (and leaves both stacks untouched) when the item limit
    /// would be exceeded.
    pub fn commit(&mut self, item: impl Into<Displayable>) -> bool {
        if self.max_items > 0 && self.display_list.len() >= self.max_items {
            warn!(
                "History limit ({}) reached; discarding new item",
                self.max_items
            );
            return false;
        }

        if self.invalidate_redo_on_commit && !self.redo_stack.is_empty() {
            debug!("Commit drops {} redoable item(s)", self.redo_stack.len());
            self.redo_stack.clear();
        }
        self.display_list.push(item.into());
        true
    }

    /// Moves the most recent item onto the redo stack. No-op when empty.
    pub fn undo(&mut self) -> bool {
        match self.display_list.pop() {
            Some(item) => {
                self.redo_stack.push(item);
                true
            }
            None => false,
        }
    }

    /// Restores the most recently undone item. No-op when nothing was undone.
    pub fn redo(&mut self) -> bool {
        match self.redo_stack.pop() {
            Some(item) => {
                self.display_list.push(item);
                true
            }
            None => false,
        }
    }

    /// Empties the display list, handling the redo stack per `clear_policy`.
    pub fn clear(&mut self) {
        self.display_list.clear();
        if self.clear_policy == ClearPolicy::DiscardRedo {
            self.redo_stack.clear();
        }
    }

    /// Most recently committed item, used to drag a sticker being placed.
    pub fn last_mut(&mut self) -> Option<&mut Displayable> {
        self.display_list.last_mut()
    }

    pub fn is_empty(&self) -> bool {
        self.display_list.is_empty()
    }

    pub fn len(&self) -> usize {
        self.display_list.len()
    }
}
