// SPDX-License-Identifier: MPL-2.0
//! Order-preserving moves inside entry lists.

/// Removes the element at `from` and reinserts it at `to`.
///
/// All other elements keep their relative order. Returns `false` (and leaves
/// the list untouched) when `from == to` or either index is out of range.
pub fn move_item<T>(items: &mut Vec<T>, from: usize, to: usize) -> bool {
    if from == to || from >= items.len() || to >= items.len() {
        return false;
    }
    let item = items.remove(from);
    items.insert(to, item);
    true
}
