use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Type-erased side-channel slot attached to value types.
///
/// Back ends use tags to hang private data (a cached brush, a resolved font
/// handle, an uploaded texture) off otherwise immutable values such as
/// [`Color`](crate::paint::Color) or [`Polygon`](crate::coords::Polygon).
/// Application code uses them as entity identifiers for
/// [`Graphics::begin_entity`](crate::graphics::Graphics::begin_entity).
///
/// Cloning is cheap and shares the payload. Equality is identity: two tags
/// are equal only when they point at the same payload.
#[derive(Clone)]
pub struct Tag(Arc<dyn Any + Send + Sync>);

impl Tag {
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self(Arc::new(value))
    }

    /// Returns the payload if it is of type `T`.
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        (*self.0).downcast_ref::<T>()
    }

    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        (*self.0).is::<T>()
    }

    /// Address of the shared payload, stable for the tag's lifetime.
    #[inline]
    pub fn addr(&self) -> usize {
        Arc::as_ptr(&self.0).cast::<()>() as usize
    }

    #[inline]
    pub fn ptr_eq(&self, other: &Tag) -> bool {
        self.addr() == other.addr()
    }
}

impl PartialEq for Tag {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Tag {}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag({:#x})", self.addr())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn downcast_matches_payload_type() {
        let tag = Tag::new(42u32);
        assert_eq!(tag.downcast_ref::<u32>(), Some(&42));
        assert!(tag.downcast_ref::<String>().is_none());
        assert!(tag.is::<u32>());
    }

    #[test]
    fn clones_share_identity() {
        let a = Tag::new("clock-face");
        let b = a.clone();
        assert_eq!(a, b);
    }

    #[test]
    fn equal_payloads_are_distinct_tags() {
        assert_ne!(Tag::new(1u8), Tag::new(1u8));
    }

    #[test]
    fn zero_sized_payloads_are_distinct_tags() {
        let a = Tag::new(());
        let b = Tag::new(());
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }
}
