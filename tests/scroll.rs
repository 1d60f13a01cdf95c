use guidom::{ensure_visible, GuiTree, ObjectId};

fn sized(tree: &mut GuiTree, w: i16, h: i16) -> ObjectId {
    let id = tree.create_object();
    let object = tree.object_mut(id).unwrap();
    object.w = w;
    object.h = h;
    id
}

fn place(tree: &mut GuiTree, id: ObjectId, x: i16, y: i16, w: i16, h: i16) {
    let object = tree.object_mut(id).unwrap();
    object.x = x;
    object.y = y;
    object.w = w;
    object.h = h;
}

fn offset(tree: &GuiTree, id: ObjectId) -> (i16, i16) {
    let object = tree.object(id).unwrap();
    (object.content_dx, object.content_dy)
}

#[test]
fn test_scrolls_node_below_view_into_sight() {
    let mut tree: GuiTree = GuiTree::new();
    let root = sized(&mut tree, 100, 100);
    let child = tree.create_child_object(root).unwrap();
    place(&mut tree, child, 0, 150, 10, 20);

    ensure_visible(&mut tree, child);
    assert_eq!(offset(&tree, root), (0, -70), "170 of content in a 100 window");

    // Idempotent: a second call changes nothing.
    ensure_visible(&mut tree, child);
    assert_eq!(offset(&tree, root), (0, -70));
}

#[test]
fn test_scrolls_back_up_for_node_above_view() {
    let mut tree: GuiTree = GuiTree::new();
    let root = sized(&mut tree, 100, 100);
    let filler = tree.create_child_object(root).unwrap();
    place(&mut tree, filler, 0, 0, 10, 170);
    let target = tree.create_child_object(root).unwrap();
    place(&mut tree, target, 0, 10, 10, 20);

    tree.object_mut(root).unwrap().content_dy = -70;
    ensure_visible(&mut tree, target);
    assert_eq!(offset(&tree, root), (0, -10), "minimal delta to reveal the top edge");
}

#[test]
fn test_visible_node_changes_nothing() {
    let mut tree: GuiTree = GuiTree::new();
    let root = sized(&mut tree, 100, 100);
    let filler = tree.create_child_object(root).unwrap();
    place(&mut tree, filler, 0, 0, 10, 170);
    let target = tree.create_child_object(root).unwrap();
    place(&mut tree, target, 0, 30, 10, 20);

    tree.object_mut(root).unwrap().content_dy = -20;
    ensure_visible(&mut tree, target);
    assert_eq!(offset(&tree, root), (0, -20), "already in view");
}

#[test]
fn test_offset_pinned_when_content_fits() {
    let mut tree: GuiTree = GuiTree::new();
    let root = sized(&mut tree, 100, 100);
    let child = tree.create_child_object(root).unwrap();
    place(&mut tree, child, 0, 10, 10, 20);

    tree.object_mut(root).unwrap().content_dy = -40;
    ensure_visible(&mut tree, child);
    assert_eq!(
        offset(&tree, root),
        (0, 0),
        "no meaningful scroll range when content fits the box"
    );
}

#[test]
fn test_never_scrolls_past_content_extent() {
    let mut tree: GuiTree = GuiTree::new();
    let root = sized(&mut tree, 100, 100);
    let child = tree.create_child_object(root).unwrap();
    place(&mut tree, child, 0, 100, 10, 20);

    ensure_visible(&mut tree, child);
    // Bringing the child fully in view needs dy = -20; the extent allows it.
    assert_eq!(offset(&tree, root), (0, -20));

    // Extent clamp: asking again cannot overshoot.
    ensure_visible(&mut tree, child);
    assert_eq!(offset(&tree, root), (0, -20));
}

#[test]
fn test_oversized_node_aligns_start_edge() {
    let mut tree: GuiTree = GuiTree::new();
    let root = sized(&mut tree, 100, 100);
    let child = tree.create_child_object(root).unwrap();
    place(&mut tree, child, 0, 50, 10, 200);

    ensure_visible(&mut tree, child);
    assert_eq!(offset(&tree, root), (0, -50), "top edge aligned when it cannot fit");
    ensure_visible(&mut tree, child);
    assert_eq!(offset(&tree, root), (0, -50));
}

#[test]
fn test_horizontal_axis_mirrors_vertical() {
    let mut tree: GuiTree = GuiTree::new();
    let root = sized(&mut tree, 100, 100);
    let child = tree.create_child_object(root).unwrap();
    place(&mut tree, child, 150, 0, 20, 10);

    ensure_visible(&mut tree, child);
    assert_eq!(offset(&tree, root), (-70, 0));
}

#[test]
fn test_adjusts_every_scrollable_ancestor() {
    let mut tree: GuiTree = GuiTree::new();
    let outer = sized(&mut tree, 100, 50);
    let inner = tree.create_child_object(outer).unwrap();
    place(&mut tree, inner, 0, 0, 100, 100);
    let leaf = tree.create_child_object(inner).unwrap();
    place(&mut tree, leaf, 0, 80, 10, 10);

    ensure_visible(&mut tree, leaf);

    // The leaf fits in the inner box, so only the outer one scrolls: the
    // leaf sits at y = 80 in outer space, its bottom at 90 in a 50 window.
    assert_eq!(offset(&tree, inner), (0, 0));
    assert_eq!(offset(&tree, outer), (0, -40));
}
