use guidom::{GuiTree, MonospaceFont, ObjectId, TreeError};

fn forward_walk(tree: &GuiTree, parent: ObjectId) -> Vec<ObjectId> {
    tree.children(parent).collect()
}

fn backward_walk(tree: &GuiTree, parent: ObjectId) -> Vec<ObjectId> {
    let mut out = Vec::new();
    let mut cursor = tree.last_child(parent);
    while let Some(id) = cursor {
        out.push(id);
        cursor = tree.prev_sibling(id);
    }
    out
}

#[test]
fn test_create_object_is_detached_and_zeroed() {
    let mut tree: GuiTree = GuiTree::new();
    let id = tree.create_object();

    assert!(tree.contains(id));
    assert_eq!(tree.parent(id), None);
    assert_eq!(tree.first_child(id), None);

    let object = tree.object(id).unwrap();
    assert_eq!((object.x, object.y, object.w, object.h), (0, 0, 0, 0));
    assert!(object.label.is_none());
}

#[test]
fn test_sibling_list_invariants() {
    let mut tree: GuiTree = GuiTree::new();
    let root = tree.create_object();
    let a = tree.create_child_object(root).unwrap();
    let b = tree.create_child_object(root).unwrap();
    let c = tree.create_child_object(root).unwrap();

    assert_eq!(tree.prev_sibling(a), None, "head.prev must be null");
    assert_eq!(tree.next_sibling(c), None, "tail.next must be null");
    assert_eq!(tree.first_child(root), Some(a));
    assert_eq!(tree.last_child(root), Some(c));

    let forward = forward_walk(&tree, root);
    let mut backward = backward_walk(&tree, root);
    backward.reverse();
    assert_eq!(forward, vec![a, b, c]);
    assert_eq!(forward, backward, "forward and reversed backward walks must agree");
}

#[test]
fn test_delete_object_contract() {
    let mut tree: GuiTree = GuiTree::new();
    let root = tree.create_object();
    let child = tree.create_child_object(root).unwrap();

    assert_eq!(tree.delete_object(child), Err(TreeError::StillAttached));
    assert_eq!(tree.delete_object(root), Err(TreeError::HasChildren));

    tree.detach(child).unwrap();
    assert_eq!(tree.delete_object(child), Ok(()));
    assert_eq!(tree.delete_object(root), Ok(()));
    assert!(tree.is_empty());
}

#[test]
fn test_delete_child_object_resplices_middle_head_tail() {
    let mut tree: GuiTree = GuiTree::new();
    let root = tree.create_object();
    let a = tree.create_child_object(root).unwrap();
    let b = tree.create_child_object(root).unwrap();
    let c = tree.create_child_object(root).unwrap();

    tree.delete_child_object(b).unwrap();
    assert_eq!(forward_walk(&tree, root), vec![a, c]);
    assert_eq!(tree.next_sibling(a), Some(c));
    assert_eq!(tree.prev_sibling(c), Some(a));

    tree.delete_child_object(a).unwrap();
    assert_eq!(tree.first_child(root), Some(c));
    assert_eq!(tree.prev_sibling(c), None);

    tree.delete_child_object(c).unwrap();
    assert_eq!(tree.first_child(root), None);
    assert_eq!(tree.last_child(root), None);

    assert_eq!(tree.delete_child_object(root), Err(TreeError::Detached));
}

#[test]
fn test_delete_objects_destroys_exactly_the_subtree() {
    let mut tree: GuiTree = GuiTree::new();
    let root = tree.create_object();
    let keep = tree.create_child_object(root).unwrap();
    let doomed = tree.create_child_object(root).unwrap();
    let doomed_child = tree.create_child_object(doomed).unwrap();
    let doomed_grandchild = tree.create_child_object(doomed_child).unwrap();

    tree.delete_objects(doomed);

    assert!(!tree.contains(doomed));
    assert!(!tree.contains(doomed_child));
    assert!(!tree.contains(doomed_grandchild));
    assert!(tree.contains(keep), "sibling must survive");
    assert_eq!(forward_walk(&tree, root), vec![keep]);
    assert_eq!(tree.last_child(root), Some(keep));
    assert_eq!(tree.len(), 2);

    // No-op on an already-dead handle
    tree.delete_objects(doomed);
    assert_eq!(tree.len(), 2);
}

#[test]
fn test_stale_handles_after_slot_reuse() {
    let mut tree: GuiTree = GuiTree::new();
    let old = tree.create_object();
    tree.delete_objects(old);

    let new = tree.create_object();
    assert!(tree.contains(new));
    assert!(!tree.contains(old), "recycled slot must not resurrect the old id");
    assert_eq!(tree.object(old).map(|_| ()), None);
    assert_eq!(tree.delete_object(old), Err(TreeError::DeadNode));
    assert_eq!(tree.len(), 1);
}

#[test]
fn test_attach_detach_roundtrip_preserves_subtree() {
    let mut tree: GuiTree = GuiTree::new();
    let root = tree.create_object();
    let other = tree.create_object();
    let branch = tree.create_child_object(root).unwrap();
    let leaf_a = tree.create_child_object(branch).unwrap();
    let leaf_b = tree.create_child_object(branch).unwrap();

    tree.detach(branch).unwrap();
    assert_eq!(tree.parent(branch), None);
    assert_eq!(forward_walk(&tree, branch), vec![leaf_a, leaf_b]);

    tree.attach(other, branch).unwrap();
    assert_eq!(tree.parent(branch), Some(other));
    assert_eq!(forward_walk(&tree, other), vec![branch]);
    assert_eq!(forward_walk(&tree, branch), vec![leaf_a, leaf_b]);
}

#[test]
fn test_attach_rejects_cycles_and_double_attach() {
    let mut tree: GuiTree = GuiTree::new();
    let root = tree.create_object();
    let child = tree.create_child_object(root).unwrap();
    let grandchild = tree.create_child_object(child).unwrap();

    assert_eq!(tree.attach(root, child), Err(TreeError::AlreadyAttached));
    assert_eq!(tree.detach(root), Err(TreeError::Detached));

    assert_eq!(
        tree.attach(grandchild, root),
        Err(TreeError::WouldCycle),
        "attaching an ancestor under its descendant must fail"
    );
    assert_eq!(tree.attach(root, root), Err(TreeError::WouldCycle));
}

#[test]
fn test_set_label_replaces_text_and_recomputes_cache() {
    let fonts = MonospaceFont::new(1, 2.0);
    let mut tree: GuiTree = GuiTree::new();
    let id = tree.create_object();

    tree.set_label(id, "first", 3, 4, &fonts).unwrap();
    {
        let label = tree.object(id).unwrap().label.as_ref().unwrap();
        assert_eq!(label.text, "first");
        assert_eq!(label.font_id, 3);
        assert_eq!(label.style_id, 4);
        assert_eq!(label.line_count, 1);
        assert_eq!(label.line_height, 2.0);
    }

    tree.set_label(id, "one\ntwo\nthree", 7, 8, &fonts).unwrap();
    {
        let label = tree.object(id).unwrap().label.as_ref().unwrap();
        assert_eq!(label.text, "one\ntwo\nthree", "old text must be replaced");
        assert_eq!(label.font_id, 7);
        assert_eq!(label.line_count, 3, "line count recomputed for the new text");
        assert_eq!(label.wrap_width, 0, "wrap cache reset until next layout");
    }

    tree.clear_label(id).unwrap();
    assert!(tree.object(id).unwrap().label.is_none());
}
