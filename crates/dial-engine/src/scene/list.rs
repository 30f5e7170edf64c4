use super::{DrawCmd, SortKey, ZIndex};

/// A single draw item: sort key + command.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub key: SortKey,
    pub cmd: DrawCmd,
}

/// Recorded draw stream for a frame.
///
/// Items paint back to front in [`SortKey`] order. Each renderer draws its
/// own shape kind in one pass (circles, then lines, then text), so ordering
/// across kinds is by pass while ordering within a kind follows the keys.
///
/// - `push()` is O(1)
/// - the paint-order index buffer is reused across frames
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,

    sorted_indices: Vec<usize>,
    sorted_dirty: bool,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
        self.sorted_indices.clear();
        self.sorted_dirty = true;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    /// Pushes a draw command on layer `z`.
    #[inline]
    pub fn push(&mut self, z: ZIndex, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);

        self.items.push(DrawItem { key: SortKey::new(z, order), cmd });
        self.sorted_dirty = true;
    }

    /// Iterates items in paint order without cloning draw commands.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DrawItem> {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }

        self.sorted_indices.iter().map(|&i| &self.items[i])
    }

    fn rebuild_sorted_indices(&mut self) {
        self.sorted_indices.clear();
        self.sorted_indices.extend(0..self.items.len());

        let items = &self.items;
        self.sorted_indices.sort_by_key(|&i| items[i].key);

        self.sorted_dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::Color;

    fn radii_in_paint_order(dl: &mut DrawList) -> Vec<f32> {
        dl.iter_in_paint_order()
            .filter_map(|item| match &item.cmd {
                DrawCmd::Circle(c) => Some(c.radius),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn same_layer_keeps_insertion_order() {
        let mut dl = DrawList::new();
        for r in [3.0, 1.0, 2.0] {
            dl.push_solid_circle(ZIndex(0), Vec2::zero(), r, Color::transparent());
        }
        assert_eq!(radii_in_paint_order(&mut dl), vec![3.0, 1.0, 2.0]);
    }

    #[test]
    fn higher_layer_paints_later() {
        let mut dl = DrawList::new();
        dl.push_solid_circle(ZIndex(5), Vec2::zero(), 1.0, Color::transparent());
        dl.push_solid_circle(ZIndex(0), Vec2::zero(), 2.0, Color::transparent());
        assert_eq!(radii_in_paint_order(&mut dl), vec![2.0, 1.0]);
    }

    #[test]
    fn clear_resets_items_and_order() {
        let mut dl = DrawList::new();
        dl.push_line(ZIndex(0), Vec2::zero(), Vec2::new(1.0, 0.0), Color::transparent(), 1.0);
        dl.clear();
        assert!(dl.is_empty());
        dl.push_solid_circle(ZIndex(0), Vec2::zero(), 1.0, Color::transparent());
        assert_eq!(dl.items()[0].key.order, 0);
        assert_eq!(dl.iter_in_paint_order().count(), 1);
    }
}
