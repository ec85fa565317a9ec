// Cursor over the poem list. Only this type moves the cursor.
use crate::error::BrowseError;

#[derive(Clone, Debug, PartialEq)]
pub struct BrowseList<T> {
    items: Vec<T>,
    /// Valid index into `items`, or 0 when empty.
    cursor: usize,
}

impl<T> Default for BrowseList<T> {
    fn default() -> Self {
        Self { items: Vec::new(), cursor: 0 }
    }
}

impl<T> BrowseList<T> {
    #[cfg(test)]
    pub fn new(items: Vec<T>) -> Self {
        Self { items, cursor: 0 }
    }

    pub fn current(&self) -> Option<&T> {
        self.items.get(self.cursor)
    }

    /// Next item, wrapping to the first.
    pub fn advance(&mut self) -> Result<usize, BrowseError> {
        if self.items.is_empty() {
            return Err(BrowseError::Empty);
        }
        self.cursor = (self.cursor + 1) % self.items.len();
        Ok(self.cursor)
    }

    /// Previous item, wrapping to the last.
    pub fn retreat(&mut self) -> Result<usize, BrowseError> {
        if self.items.is_empty() {
            return Err(BrowseError::Empty);
        }
        self.cursor = if self.cursor == 0 { self.items.len() - 1 } else { self.cursor - 1 };
        Ok(self.cursor)
    }

    /// New items go to the front and become current.
    pub fn prepend(&mut self, item: T) {
        self.items.insert(0, item);
        self.cursor = 0;
    }

    /// Full refresh. The cursor keeps its position when it still fits.
    pub fn replace_all(&mut self, items: Vec<T>) {
        self.items = items;
        if self.cursor >= self.items.len() {
            self.cursor = self.items.len().saturating_sub(1);
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_stays_in_bounds_and_cycles() {
        let mut list = BrowseList::new(vec!['a', 'b', 'c', 'd']);
        let moves = [true, true, false, false, false, true, false, false, false, false, true];
        for forward in moves {
            let idx = (if forward { list.advance() } else { list.retreat() }).unwrap();
            assert!(idx < list.len());
            assert_eq!(idx, list.cursor());
        }
        let start = list.cursor();
        for _ in 0..list.len() {
            list.advance().unwrap();
        }
        assert_eq!(list.cursor(), start);
    }

    #[test]
    fn retreat_from_first_wraps_to_last() {
        let mut list = BrowseList::new(vec![1, 2, 3]);
        assert_eq!(list.retreat(), Ok(2));
        assert_eq!(list.current(), Some(&3));
    }

    #[test]
    fn two_advances_on_three_items() {
        let mut list = BrowseList::new(vec!["x", "y", "z"]);
        list.advance().unwrap();
        list.advance().unwrap();
        assert_eq!(list.current(), Some(&"z"));
        list.advance().unwrap();
        assert_eq!(list.current(), Some(&"x"));
    }

    #[test]
    fn empty_list_moves_are_refused() {
        let mut list: BrowseList<u8> = BrowseList::default();
        assert!(list.is_empty());
        assert_eq!(list.current(), None);
        assert_eq!(list.advance(), Err(BrowseError::Empty));
        assert_eq!(list.retreat(), Err(BrowseError::Empty));
        assert_eq!(list.cursor(), 0);
    }

    #[test]
    fn prepend_becomes_current() {
        let mut list = BrowseList::new(vec![10, 20, 30]);
        list.advance().unwrap();
        list.prepend(5);
        assert_eq!(list.current(), Some(&5));
        assert_eq!(list.len(), 4);
        assert_eq!(list.cursor(), 0);

        let mut empty = BrowseList::default();
        empty.prepend("only");
        assert_eq!(empty.current(), Some(&"only"));
    }

    #[test]
    fn replace_all_clamps_cursor() {
        let mut list = BrowseList::new(vec![1, 2, 3, 4]);
        list.retreat().unwrap();
        assert_eq!(list.cursor(), 3);

        list.replace_all(vec![7, 8]);
        assert_eq!(list.cursor(), 1);
        assert_eq!(list.current(), Some(&8));

        list.replace_all(vec![9, 9, 9]);
        assert_eq!(list.cursor(), 1);

        list.replace_all(Vec::new());
        assert_eq!(list.cursor(), 0);
        assert_eq!(list.current(), None);
    }
}
