//! Submitted-line history with an up/down recall cursor.

/// Result of moving the recall cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recall<'a> {
    /// The cursor moved onto this entry; the input line should show it.
    Entry(&'a str),
    /// The cursor moved past the newest entry; the input line should be emptied.
    Cleared,
    /// Nothing moved.
    Unchanged,
}

/// Ordered list of submitted lines.
///
/// The cursor ranges over `0..=len`; `len` means no entry is selected.
#[derive(Debug, Clone, Default)]
pub struct HistoryBuffer {
    entries: Vec<String>,
    cursor: usize,
}

impl HistoryBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line (duplicates are kept) and park the cursor past the end.
    pub fn push(&mut self, line: impl Into<String>) {
        self.entries.push(line.into());
        self.cursor = self.entries.len();
    }

    /// Step towards older entries. No-op at the oldest entry.
    pub fn up(&mut self) -> Recall<'_> {
        if self.cursor == 0 {
            return Recall::Unchanged;
        }
        self.cursor -= 1;
        Recall::Entry(&self.entries[self.cursor])
    }

    /// Step towards newer entries. Stepping off the newest entry clears the
    /// input; stepping from past the end does nothing.
    pub fn down(&mut self) -> Recall<'_> {
        let len = self.entries.len();
        if self.cursor >= len {
            return Recall::Unchanged;
        }
        self.cursor += 1;
        if self.cursor == len {
            Recall::Cleared
        } else {
            Recall::Entry(&self.entries[self.cursor])
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(lines: &[&str]) -> HistoryBuffer {
        let mut h = HistoryBuffer::new();
        for l in lines {
            h.push(*l);
        }
        h
    }

    #[test]
    fn empty_buffer_is_noop_both_ways() {
        let mut h = HistoryBuffer::new();
        assert_eq!(h.up(), Recall::Unchanged);
        assert_eq!(h.down(), Recall::Unchanged);
        assert_eq!(h.cursor(), 0);
    }

    #[test]
    fn push_parks_cursor_at_len() {
        let h = filled(&["a", "b"]);
        assert_eq!(h.cursor(), 2);
        assert_eq!(h.len(), 2);
    }

    #[test]
    fn duplicates_are_kept() {
        let h = filled(&["ls", "ls", "ls"]);
        assert_eq!(h.entries(), ["ls", "ls", "ls"]);
    }

    #[test]
    fn up_walks_to_oldest_then_stops() {
        let mut h = filled(&["a", "b", "c"]);
        assert_eq!(h.up(), Recall::Entry("c"));
        assert_eq!(h.up(), Recall::Entry("b"));
        assert_eq!(h.up(), Recall::Entry("a"));
        assert_eq!(h.cursor(), 0);
        assert_eq!(h.up(), Recall::Unchanged);
        assert_eq!(h.cursor(), 0);
    }

    #[test]
    fn down_from_len_is_noop() {
        let mut h = filled(&["a"]);
        assert_eq!(h.down(), Recall::Unchanged);
        assert_eq!(h.cursor(), 1);
    }

    #[test]
    fn down_advances_then_clears_at_end() {
        let mut h = filled(&["a", "b", "c"]);
        h.up();
        h.up();
        h.up();
        assert_eq!(h.down(), Recall::Entry("b"));
        assert_eq!(h.down(), Recall::Entry("c"));
        assert_eq!(h.down(), Recall::Cleared);
        assert_eq!(h.cursor(), 3);
        assert_eq!(h.down(), Recall::Unchanged);
    }

    #[test]
    fn push_after_recall_resets_cursor() {
        let mut h = filled(&["a", "b"]);
        h.up();
        h.up();
        h.push("c");
        assert_eq!(h.cursor(), 3);
        assert_eq!(h.up(), Recall::Entry("c"));
    }

    #[test]
    fn clear_resets_cursor() {
        let mut h = filled(&["a", "b"]);
        h.up();
        h.clear();
        assert!(h.is_empty());
        assert_eq!(h.cursor(), 0);
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        #[derive(Debug, Clone)]
        enum Op {
            Push(String),
            Up,
            Down,
        }

        fn arb_op() -> impl Strategy<Value = Op> {
            prop_oneof![
                "[a-z]{1,6}".prop_map(Op::Push),
                Just(Op::Up),
                Just(Op::Down),
            ]
        }

        proptest! {
            #[test]
            fn cursor_stays_in_range(ops in proptest::collection::vec(arb_op(), 0..64)) {
                let mut h = HistoryBuffer::new();
                for op in ops {
                    match op {
                        Op::Push(s) => h.push(s),
                        Op::Up => { h.up(); },
                        Op::Down => { h.down(); },
                    }
                    prop_assert!(h.cursor() <= h.len());
                }
            }

            #[test]
            fn len_ups_land_on_oldest(lines in proptest::collection::vec("[a-z]{1,6}", 1..20)) {
                let mut h = HistoryBuffer::new();
                for l in &lines {
                    h.push(l.clone());
                }
                for _ in 0..lines.len() {
                    h.up();
                }
                prop_assert_eq!(h.cursor(), 0);
                prop_assert_eq!(h.up(), Recall::Unchanged);
            }
        }
    }
}
