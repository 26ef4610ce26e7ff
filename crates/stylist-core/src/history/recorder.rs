use super::record::InteractionRecord;

/// Append-only log of the interactions of one session.
///
/// `append` is the only mutator. Readers see records most recent first.
#[derive(Debug, Default)]
pub struct InteractionRecorder {
    records: Vec<InteractionRecord>,
}

impl InteractionRecorder {
    /// Creates an empty recorder.
    ///
    /// # Examples
    ///
    /// ```
    /// use stylist_core::history::InteractionRecorder;
    ///
    /// let recorder = InteractionRecorder::new();
    /// assert!(recorder.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record at the end of the log.
    ///
    /// # Examples
    ///
    /// ```
    /// use stylist_core::history::{InteractionRecord, InteractionRecorder};
    ///
    /// let mut recorder = InteractionRecorder::new();
    /// recorder.append(InteractionRecord::new("hi", "Style Analysis", "- greeting"));
    /// assert_eq!(recorder.len(), 1);
    /// ```
    pub fn append(&mut self, record: InteractionRecord) {
        self.records.push(record);
    }

    /// Iterates all records, most recent first.
    pub fn all(&self) -> impl ExactSizeIterator<Item = &InteractionRecord> + '_ {
        self.records.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
