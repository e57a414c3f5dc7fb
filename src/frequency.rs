//! Byte frequency counting.

/// Occurrence count of every byte value in an input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FreqTable {
    counts: [u64; 256],
    total: u64,
}

impl FreqTable {
    pub fn new() -> Self {
        Self {
            counts: [0; 256],
            total: 0,
        }
    }

    /// Count every byte of `input` in a single pass.
    pub fn from_bytes(input: &[u8]) -> Self {
        let mut table = Self::new();
        table.count(input);
        table
    }

    /// Add the bytes of `input` to the running counts.
    pub fn count(&mut self, input: &[u8]) {
        for &byte in input {
            self.counts[byte as usize] += 1;
        }
        self.total += input.len() as u64;
    }

    pub fn get(&self, symbol: u8) -> u64 {
        self.counts[symbol as usize]
    }

    /// Total number of symbols counted.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of distinct symbols with a nonzero count.
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Present symbols and their counts, in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, c)| **c > 0)
            .map(|(symbol, &c)| (symbol as u8, c))
    }

    /// Shannon entropy of the distribution in bits per symbol.
    ///
    /// Returns 0.0 for an empty table.
    pub fn entropy(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let total = self.total as f64;
        self.iter()
            .map(|(_, count)| {
                let p = count as f64 / total;
                -p * p.log2()
            })
            .sum()
    }
}

impl Default for FreqTable {
    fn default() -> Self {
        Self::new()
    }
}
