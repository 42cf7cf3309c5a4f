use std::collections::VecDeque;

/// The most recently kept lines, oldest first.
#[derive(Debug)]
pub struct Window {
    lines: VecDeque<Vec<u8>>,
    capacity: usize,
}

impl Window {
    pub fn new(capacity: usize) -> Window {
        Window {
            lines: VecDeque::new(),
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn contains(&self, line: &[u8]) -> bool {
        self.lines.iter().any(|kept| kept.as_slice() == line)
    }

    /// Appends `line` and returns the evicted oldest line, if any.
    pub fn push(&mut self, line: Vec<u8>) -> Option<Vec<u8>> {
        self.lines.push_back(line);
        if self.lines.len() > self.capacity {
            self.lines.pop_front()
        } else {
            None
        }
    }
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Stats {
    pub duplicates: u64,
    pub rows: u64,
}

impl Stats {
    pub fn total(&self) -> u64 {
        self.duplicates + self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_evicts_oldest_when_full() {
        let mut window = Window::new(2);
        assert_eq!(window.push(b"a\n".to_vec()), None);
        assert_eq!(window.push(b"b\n".to_vec()), None);
        assert_eq!(window.push(b"c\n".to_vec()), Some(b"a\n".to_vec()));
        assert_eq!(window.len(), 2);
        assert!(!window.contains(b"a\n"));
        assert!(window.contains(b"b\n"));
        assert!(window.contains(b"c\n"));
    }

    #[test]
    fn contains_compares_terminators() {
        let mut window = Window::new(2);
        window.push(b"line\n".to_vec());
        assert!(window.contains(b"line\n"));
        assert!(!window.contains(b"line"));
        assert!(!window.contains(b"line \n"));
        assert!(!window.contains(b"line\r\n"));
    }

    #[test]
    fn zero_capacity_never_holds_anything() {
        let mut window = Window::new(0);
        assert_eq!(window.push(b"a\n".to_vec()), Some(b"a\n".to_vec()));
        assert!(window.is_empty());
        assert!(!window.contains(b"a\n"));
    }

    #[test]
    fn stats_total() {
        let stats = Stats {
            duplicates: 3,
            rows: 4,
        };
        assert_eq!(stats.total(), 7);
        assert_eq!(Stats::default().total(), 0);
    }
}
