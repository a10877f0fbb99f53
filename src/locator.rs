use spotlight_core::{HostContract, LocateError};
use web_sys::{Document, Element, Node};

/// Resolves the editor's current selection to the image it frames.
pub(crate) fn locate(document: &Document, contract: &HostContract) -> Result<Element, LocateError> {
    let workspace = document
        .get_element_by_id(contract.workspace_id)
        .ok_or(LocateError::NoWorkspace)?;
    let marker = workspace
        .query_selector(&contract.selection_selector())
        .ok()
        .flatten()
        .ok_or(LocateError::NoSelection)?;
    let group = ascend_to_object_group(marker.parent_element(), &workspace, contract)
        .ok_or(LocateError::NoObjectGroup)?;
    group
        .query_selector("image")
        .ok()
        .flatten()
        .ok_or(LocateError::NoImage)
}

/// Walks up from `start` (inclusive) to the nearest object group. The walk
/// gives up on reaching `boundary`.
pub(crate) fn ascend_to_object_group(
    start: Option<Element>,
    boundary: &Element,
    contract: &HostContract,
) -> Option<Element> {
    let boundary: &Node = boundary;
    let mut current = start;
    while let Some(element) = current {
        if element.is_same_node(Some(boundary)) {
            return None;
        }
        if contract.is_object_id(&element.id()) {
            return Some(element);
        }
        current = element.parent_element();
    }
    None
}
