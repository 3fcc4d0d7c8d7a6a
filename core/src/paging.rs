//! Circular paging over a bounded window of records.

/// Number of properties the seller dashboard pages through.
pub const SELLER_WINDOW: usize = 3;

/// The first `size` items of a list plus a selected index.
///
/// `next`/`previous` wrap around. With fewer than two items paging is
/// disabled and both are no-ops.
#[derive(Clone, Debug, PartialEq)]
pub struct Window<T> {
    items: Vec<T>,
    index: usize,
}

impl<T> Window<T> {
    /// Keep at most `size` items from the front of `items`.
    pub fn first(mut items: Vec<T>, size: usize) -> Self {
        items.truncate(size);
        Self { items, index: 0 }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Option<&T> {
        self.items.get(self.index)
    }

    /// Whether the previous/next controls are enabled.
    pub fn can_page(&self) -> bool {
        self.items.len() >= 2
    }

    pub fn next(&mut self) {
        if self.can_page() {
            self.index = (self.index + 1) % self.items.len();
        }
    }

    pub fn previous(&mut self) {
        if self.can_page() {
            let len = self.items.len();
            self.index = (self.index + len - 1) % len;
        }
    }
}

impl<T> Default for Window<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            index: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_keeps_first_three() {
        let window = Window::first(vec![1, 2, 3, 4, 5], SELLER_WINDOW);
        assert_eq!(window.items(), &[1, 2, 3]);
        assert_eq!(window.current(), Some(&1));
    }

    #[test]
    fn test_previous_wraps_to_last() {
        let mut window = Window::first(vec!["a", "b", "c"], SELLER_WINDOW);
        window.previous();
        assert_eq!(window.index(), 2);
    }

    #[test]
    fn test_next_advances_and_wraps() {
        let mut window = Window::first(vec!["a", "b", "c"], SELLER_WINDOW);
        window.next();
        assert_eq!(window.index(), 1);
        window.next();
        window.next();
        assert_eq!(window.index(), 0);
    }

    #[test]
    fn test_paging_disabled_for_single_entry() {
        let mut window = Window::first(vec!["only"], SELLER_WINDOW);
        assert!(!window.can_page());
        window.next();
        window.previous();
        assert_eq!(window.index(), 0);
        assert_eq!(window.current(), Some(&"only"));
    }

    #[test]
    fn test_empty_window() {
        let mut window: Window<u8> = Window::first(Vec::new(), SELLER_WINDOW);
        assert!(window.is_empty());
        assert!(!window.can_page());
        window.next();
        assert_eq!(window.current(), None);
    }

    #[test]
    fn test_two_entries_enable_paging() {
        let mut window = Window::first(vec![10, 20], SELLER_WINDOW);
        assert!(window.can_page());
        window.previous();
        assert_eq!(window.current(), Some(&20));
    }
}
