/// Monotonic id source for one record type.
///
/// Reusing the same sequence across several `generate` calls continues the
/// numbering instead of restarting it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdSequence {
    next: i64,
}

impl IdSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// The id the next call to [`IdSequence::next_id`] will return.
    pub fn peek(&self) -> i64 {
        self.next
    }

    pub fn next_id(&mut self) -> i64 {
        let id = self.next;
        self.next = self.next.saturating_add(1);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero_and_increments() {
        let mut ids = IdSequence::new();
        assert_eq!(ids.next_id(), 0);
        assert_eq!(ids.next_id(), 1);
        assert_eq!(ids.peek(), 2);
    }
}
