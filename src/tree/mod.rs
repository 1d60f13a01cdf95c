//! Object store and tree management.
//!
//! Nodes live in a slot arena addressed by generational [`ObjectId`] handles.
//! Parent/child/sibling relationships are kept inside the arena as plain
//! handles (an intrusive doubly-linked sibling list with a cached tail for
//! O(1) append), so node data itself stays freely mutable through
//! [`GuiTree::object_mut`] without exposing the links to corruption.

mod node;

pub use node::{GuiObject, Label};

use thiserror::Error;

use crate::font::FontService;

/// Contract violations on tree mutation.
///
/// These are programming errors in the call sequence, reported loudly
/// instead of silently corrupting sibling links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("object id is stale or already deleted")]
    DeadNode,
    #[error("object is still attached to a parent; detach it first")]
    StillAttached,
    #[error("object still has children; delete the subtree instead")]
    HasChildren,
    #[error("object has no parent")]
    Detached,
    #[error("object is already attached to a parent")]
    AlreadyAttached,
    #[error("attaching here would create a cycle")]
    WouldCycle,
}

/// Generational handle of a tree node.
///
/// Handles stay stable across unrelated mutations; deleting a node bumps
/// its slot's generation, so stale handles are detected rather than
/// resolving to a recycled node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectId {
    index: u32,
    generation: u32,
}

impl ObjectId {
    const fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct Links {
    parent: Option<ObjectId>,
    next: Option<ObjectId>,
    prev: Option<ObjectId>,
    first_child: Option<ObjectId>,
    last_child: Option<ObjectId>,
}

#[derive(Debug)]
struct Node<T> {
    generation: u32,
    links: Links,
    object: GuiObject<T>,
}

/// The object tree: a slot arena plus the linked structure over it.
#[derive(Debug)]
pub struct GuiTree<T = ()> {
    nodes: Vec<Option<Node<T>>>,
    /// Last generation per slot; persists across frees.
    generations: Vec<u32>,
    free_list: Vec<usize>,
    len: usize,
}

impl<T> Default for GuiTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> GuiTree<T> {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
            len: 0,
        }
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn contains(&self, id: ObjectId) -> bool {
        self.node(id).is_some()
    }

    fn node(&self, id: ObjectId) -> Option<&Node<T>> {
        match self.nodes.get(id.index as usize) {
            Some(Some(node)) if node.generation == id.generation => Some(node),
            _ => None,
        }
    }

    fn node_mut(&mut self, id: ObjectId) -> Option<&mut Node<T>> {
        match self.nodes.get_mut(id.index as usize) {
            Some(Some(node)) if node.generation == id.generation => Some(node),
            _ => None,
        }
    }

    fn links(&self, id: ObjectId) -> Option<Links> {
        self.node(id).map(|node| node.links)
    }

    /// Node data, if the handle is still live.
    pub fn object(&self, id: ObjectId) -> Option<&GuiObject<T>> {
        self.node(id).map(|node| &node.object)
    }

    pub fn object_mut(&mut self, id: ObjectId) -> Option<&mut GuiObject<T>> {
        self.node_mut(id).map(|node| &mut node.object)
    }

    pub fn parent(&self, id: ObjectId) -> Option<ObjectId> {
        self.links(id).and_then(|links| links.parent)
    }

    pub fn first_child(&self, id: ObjectId) -> Option<ObjectId> {
        self.links(id).and_then(|links| links.first_child)
    }

    pub fn last_child(&self, id: ObjectId) -> Option<ObjectId> {
        self.links(id).and_then(|links| links.last_child)
    }

    pub fn next_sibling(&self, id: ObjectId) -> Option<ObjectId> {
        self.links(id).and_then(|links| links.next)
    }

    pub fn prev_sibling(&self, id: ObjectId) -> Option<ObjectId> {
        self.links(id).and_then(|links| links.prev)
    }

    /// Children of `id`, head to tail.
    pub fn children(&self, id: ObjectId) -> Children<'_, T> {
        Children {
            tree: self,
            cursor: self.first_child(id),
        }
    }

    /// Allocate a detached, zeroed node.
    pub fn create_object(&mut self) -> ObjectId {
        let node = Node {
            generation: 0, // patched below
            links: Links::default(),
            object: GuiObject::default(),
        };
        let (index, generation) = if let Some(index) = self.free_list.pop() {
            let generation = self.generations[index].wrapping_add(1).max(1);
            self.generations[index] = generation;
            self.nodes[index] = Some(Node { generation, ..node });
            (index as u32, generation)
        } else {
            let generation = 1_u32;
            self.nodes.push(Some(Node { generation, ..node }));
            self.generations.push(generation);
            ((self.nodes.len() - 1) as u32, generation)
        };
        self.len += 1;
        ObjectId::new(index, generation)
    }

    /// Allocate a new node and append it as `parent`'s last child.
    pub fn create_child_object(&mut self, parent: ObjectId) -> Result<ObjectId, TreeError> {
        if !self.contains(parent) {
            return Err(TreeError::DeadNode);
        }
        let child = self.create_object();
        self.push_child(parent, child);
        Ok(child)
    }

    /// Append a detached subtree as `parent`'s last child.
    pub fn attach(&mut self, parent: ObjectId, child: ObjectId) -> Result<(), TreeError> {
        if !self.contains(parent) || !self.contains(child) {
            return Err(TreeError::DeadNode);
        }
        if self.parent(child).is_some() {
            return Err(TreeError::AlreadyAttached);
        }
        // Reject attaching a node under itself or its own descendants
        let mut cursor = Some(parent);
        while let Some(id) = cursor {
            if id == child {
                return Err(TreeError::WouldCycle);
            }
            cursor = self.parent(id);
        }
        self.push_child(parent, child);
        Ok(())
    }

    /// Unlink `id` from its parent, keeping its subtree intact.
    pub fn detach(&mut self, id: ObjectId) -> Result<(), TreeError> {
        let links = self.links(id).ok_or(TreeError::DeadNode)?;
        let parent = links.parent.ok_or(TreeError::Detached)?;

        match links.prev {
            Some(prev) => {
                if let Some(node) = self.node_mut(prev) {
                    node.links.next = links.next;
                }
            }
            None => {
                if let Some(node) = self.node_mut(parent) {
                    node.links.first_child = links.next;
                }
            }
        }
        match links.next {
            Some(next) => {
                if let Some(node) = self.node_mut(next) {
                    node.links.prev = links.prev;
                }
            }
            None => {
                if let Some(node) = self.node_mut(parent) {
                    node.links.last_child = links.prev;
                }
            }
        }
        if let Some(node) = self.node_mut(id) {
            node.links.parent = None;
            node.links.next = None;
            node.links.prev = None;
        }
        Ok(())
    }

    /// Release a single detached leaf node.
    ///
    /// Deleting an attached node or a node with children is a call-sequence
    /// error; use [`GuiTree::delete_child_object`] or
    /// [`GuiTree::delete_objects`] for those.
    pub fn delete_object(&mut self, id: ObjectId) -> Result<(), TreeError> {
        let links = self.links(id).ok_or(TreeError::DeadNode)?;
        if links.parent.is_some() {
            return Err(TreeError::StillAttached);
        }
        if links.first_child.is_some() {
            return Err(TreeError::HasChildren);
        }
        self.free(id);
        Ok(())
    }

    /// Destroy `root` and its entire subtree, children before the node
    /// itself, siblings left to right. No-op on a dead handle.
    pub fn delete_objects(&mut self, root: ObjectId) {
        if !self.contains(root) {
            return;
        }
        if self.parent(root).is_some() {
            // Detach cannot fail here: the node is live and attached.
            let _ = self.detach(root);
        }
        self.destroy_subtree(root);
    }

    /// Unlink `id` from its parent's sibling list, then destroy its subtree.
    pub fn delete_child_object(&mut self, id: ObjectId) -> Result<(), TreeError> {
        if !self.contains(id) {
            return Err(TreeError::DeadNode);
        }
        self.detach(id)?;
        self.destroy_subtree(id);
        Ok(())
    }

    /// Replace the node's label text wholesale, recomputing the cached
    /// line height and unwrapped line count.
    pub fn set_label(
        &mut self,
        id: ObjectId,
        text: impl Into<String>,
        font_id: u16,
        style_id: u16,
        fonts: &dyn FontService,
    ) -> Result<(), TreeError> {
        let object = self.object_mut(id).ok_or(TreeError::DeadNode)?;
        let text = text.into();
        let line_height = fonts.line_height(font_id, style_id, object.text_size);
        let line_count = text.lines().count().max(1) as u16;
        object.label = Some(Label {
            text,
            font_id,
            style_id,
            line_height,
            line_count,
            wrap_width: 0,
        });
        Ok(())
    }

    pub fn clear_label(&mut self, id: ObjectId) -> Result<(), TreeError> {
        let object = self.object_mut(id).ok_or(TreeError::DeadNode)?;
        object.label = None;
        Ok(())
    }

    fn push_child(&mut self, parent: ObjectId, child: ObjectId) {
        let tail = self.last_child(parent);
        if let Some(node) = self.node_mut(child) {
            node.links.parent = Some(parent);
            node.links.prev = tail;
            node.links.next = None;
        }
        match tail {
            Some(tail) => {
                if let Some(node) = self.node_mut(tail) {
                    node.links.next = Some(child);
                }
            }
            None => {
                if let Some(node) = self.node_mut(parent) {
                    node.links.first_child = Some(child);
                }
            }
        }
        if let Some(node) = self.node_mut(parent) {
            node.links.last_child = Some(child);
        }
    }

    fn destroy_subtree(&mut self, id: ObjectId) {
        let children: Vec<ObjectId> = self.children(id).collect();
        for child in children {
            self.destroy_subtree(child);
        }
        self.free(id);
    }

    fn free(&mut self, id: ObjectId) {
        let index = id.index as usize;
        if let Some(slot) = self.nodes.get_mut(index) {
            if slot
                .as_ref()
                .is_some_and(|node| node.generation == id.generation)
            {
                *slot = None;
                self.free_list.push(index);
                self.len -= 1;
            }
        }
    }
}

/// Iterator over a node's children, head to tail.
#[derive(Debug)]
pub struct Children<'a, T> {
    tree: &'a GuiTree<T>,
    cursor: Option<ObjectId>,
}

impl<T> Iterator for Children<'_, T> {
    type Item = ObjectId;

    fn next(&mut self) -> Option<ObjectId> {
        let current = self.cursor?;
        self.cursor = self.tree.next_sibling(current);
        Some(current)
    }
}
