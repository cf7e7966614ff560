use crate::tag::Tag;

use super::DrawCmd;

/// A single recorded item: call order, owning entity, and command.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    /// Position in the session's call sequence.
    pub order: u32,
    /// Entity announced by the last `begin_entity` before this call, if any.
    pub entity: Option<Tag>,
    pub cmd: DrawCmd,
}

/// Draw stream recorded during one session.
///
/// `push()` is O(1); items stay in call order.
#[derive(Debug, Default, Clone)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,
    entity: Option<Tag>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items and the current entity. Keeps allocated capacity.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
        self.entity = None;
    }

    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, DrawItem> {
        self.items.iter()
    }

    /// Commands in call order, without item metadata.
    pub fn commands(&self) -> impl Iterator<Item = &DrawCmd> {
        self.items.iter().map(|item| &item.cmd)
    }

    /// Items drawn while `entity` was the current entity.
    pub fn for_entity<'a>(&'a self, entity: &'a Tag) -> impl Iterator<Item = &'a DrawItem> + 'a {
        self.items
            .iter()
            .filter(move |item| item.entity.as_ref() == Some(entity))
    }

    /// Sets the entity attached to subsequent pushes.
    #[inline]
    pub fn set_entity(&mut self, entity: Option<Tag>) {
        self.entity = entity;
    }

    #[inline]
    pub fn entity(&self) -> Option<&Tag> {
        self.entity.as_ref()
    }

    /// Records a command under the current entity.
    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);

        self.items.push(DrawItem {
            order,
            entity: self.entity.clone(),
            cmd,
        });
    }
}

impl<'a> IntoIterator for &'a DrawList {
    type Item = &'a DrawItem;
    type IntoIter = std::slice::Iter<'a, DrawItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_keeps_call_order() {
        let mut list = DrawList::new();
        list.push(DrawCmd::BeginLines);
        list.push(DrawCmd::EndLines);
        let orders: Vec<u32> = list.iter().map(|i| i.order).collect();
        assert_eq!(orders, vec![0, 1]);
        assert_eq!(list.commands().next(), Some(&DrawCmd::BeginLines));
    }

    #[test]
    fn items_carry_current_entity() {
        let hand = Tag::new("hand");
        let mut list = DrawList::new();
        list.push(DrawCmd::BeginLines);
        list.set_entity(Some(hand.clone()));
        list.push(DrawCmd::EndLines);

        assert_eq!(list.items()[0].entity, None);
        assert_eq!(list.for_entity(&hand).count(), 1);
    }

    #[test]
    fn clear_resets_order_and_entity() {
        let mut list = DrawList::new();
        list.set_entity(Some(Tag::new(1u8)));
        list.push(DrawCmd::BeginLines);
        list.clear();
        assert!(list.is_empty());
        assert!(list.entity().is_none());
        list.push(DrawCmd::EndLines);
        assert_eq!(list.items()[0].order, 0);
    }
}
