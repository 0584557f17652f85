/// Bound for item keys used by the key-based lookup helpers (`slide_to_key`, `is_active_key`, ...).
///
/// Keys are compared linearly against `get_item_key(i)`, so only equality is required.
pub trait CarouselKey: PartialEq {}
impl<K: PartialEq> CarouselKey for K {}
