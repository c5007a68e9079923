// ABOUTME: Wraps an element in a newly created parent element.
// ABOUTME: Used to put blockquotes in <figure> and video iframes in ratio containers.

use ego_tree::NodeId;

use super::fragment::{Element, Fragment, Node};

/// Wrap `id` in a new `tag` element, optionally classed.
///
/// The wrapper takes the node's place among its parent's children and the
/// node becomes its only child. Returns the wrapper's id, or `None` when `id`
/// is unknown or has no parent (the fragment root).
pub fn wrap(fragment: &mut Fragment, id: NodeId, tag: &str, class: Option<&str>) -> Option<NodeId> {
    fragment.tree.get(id)?.parent()?;

    let mut wrapper = Element::new(tag);
    if let Some(class) = class.filter(|c| !c.is_empty()) {
        wrapper.set_attr("class", class);
    }

    let wrapper_id = {
        let mut node = fragment.tree.get_mut(id)?;
        let new_node = node.insert_before(Node::Element(wrapper));
        new_node.id()
    };

    fragment.tree.get_mut(id)?.detach();
    fragment.tree.get_mut(wrapper_id)?.append_id(id);

    Some(wrapper_id)
}
