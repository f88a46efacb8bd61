use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct FrequencyRecord {
    pub word: String,
    pub count: usize,
}

/// Counts keywords of a single analysis.
///
/// Records are kept in the order their words first appear, so that ranking
/// can break ties by first occurrence instead of by hash order.
#[derive(Clone, Debug, Default)]
pub struct FrequencyTable {
    records: Vec<FrequencyRecord>,

    // word -> index of `records`
    indices: HashMap<String, usize>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        FrequencyTable::default()
    }

    pub fn add(&mut self, word: &str) {
        match self.indices.get(word) {
            Some(index) => {
                self.records[*index].count += 1;
            },
            None => {
                self.indices.insert(word.to_string(), self.records.len());
                self.records.push(FrequencyRecord {
                    word: word.to_string(),
                    count: 1,
                });
            },
        }
    }

    pub fn get(&self, word: &str) -> Option<usize> {
        self.indices.get(word).map(|index| self.records[*index].count)
    }

    /// number of distinct words
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sorted by count, descending. Words with the same count are in the
    /// order they first appeared.
    pub fn into_ranked(self) -> Vec<FrequencyRecord> {
        let mut records = self.records;

        // `sort_by_key` is stable
        records.sort_by_key(|record| usize::MAX - record.count);
        records
    }
}

/// `count<TAB>word`, one record per line
pub fn render_records(records: &[FrequencyRecord]) -> String {
    records.iter().map(
        |FrequencyRecord { word, count }| format!("{count}\t{word}")
    ).collect::<Vec<_>>().join("\n")
}
