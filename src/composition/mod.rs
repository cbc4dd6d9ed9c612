use std::fmt;

use crate::error::{Error, Result};
use crate::seq::{Alphabet, ALPHABET_SIZE};

/// Relative base frequencies of a sequence, in percent.
#[derive(Clone, Debug, PartialEq)]
pub struct CompositionReport {
    alphabet: Alphabet,
    pair: [u8; 2],
    counts: [usize; ALPHABET_SIZE],
    total: usize,
    percents: [f64; ALPHABET_SIZE],
    pair_percent: f64,
}

impl CompositionReport {
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn pair(&self) -> [u8; 2] {
        self.pair
    }

    /// Number of symbols counted; characters outside the alphabet are not included.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn count(&self, symbol: u8) -> Option<usize> {
        self.alphabet.index_of(symbol).map(|i| self.counts[i])
    }

    pub fn percent(&self, symbol: u8) -> Option<f64> {
        self.alphabet.index_of(symbol).map(|i| self.percents[i])
    }

    pub fn pair_percent(&self) -> f64 {
        self.pair_percent
    }

    /// (symbol, percent) in alphabet order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, f64)> + '_ {
        self.alphabet.symbols().iter().copied().zip(self.percents.iter().copied())
    }
}

/// Lines of the console report, one decimal per value.
impl fmt::Display for CompositionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (symbol, percent) in self.iter() {
            writeln!(f, "{}: {:.1}%", symbol as char, percent)?;
        }
        write!(f, "%{}{}: {:.1}", self.pair[0] as char, self.pair[1] as char, self.pair_percent)
    }
}

fn percent_of(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        100.0 * count as f64 / total as f64
    }
}

/// Count each symbol of `alphabet` in `sequence` and convert to percentages of
/// the counted total. An empty total gives all zeros.
pub fn analyze<S: AsRef<[u8]> + ?Sized>(sequence: &S, alphabet: &Alphabet, pair: [u8; 2]) -> Result<CompositionReport> {
    let pair_idx = [
        alphabet.index_of(pair[0]).ok_or(Error::PairNotInAlphabet { symbol: pair[0] as char })?,
        alphabet.index_of(pair[1]).ok_or(Error::PairNotInAlphabet { symbol: pair[1] as char })?,
    ];

    let mut counts = [0usize; ALPHABET_SIZE];
    for &b in sequence.as_ref() {
        if let Some(i) = alphabet.index_of(b) {
            counts[i] += 1;
        }
    }
    let total: usize = counts.iter().sum();

    let mut percents = [0.0; ALPHABET_SIZE];
    for (p, &c) in percents.iter_mut().zip(counts.iter()) {
        *p = percent_of(c, total);
    }
    let pair_percent = percent_of(counts[pair_idx[0]] + counts[pair_idx[1]], total);

    Ok(CompositionReport { alphabet: *alphabet, pair, counts, total, percents, pair_percent })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seq::{generate, CG_PAIR, DNA};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const EPS: f64 = 1.0e-9;

    fn rounded(x: f64) -> String {
        format!("{:.1}", x)
    }

    #[test]
    fn test_analyze_known_sequence() {
        let report = analyze("AACGTTGCA", &DNA, CG_PAIR).unwrap();
        assert_eq!(report.total(), 9);
        assert_eq!(rounded(report.percent(b'A').unwrap()), "33.3");
        assert_eq!(rounded(report.percent(b'C').unwrap()), "22.2");
        assert_eq!(rounded(report.percent(b'G').unwrap()), "22.2");
        assert_eq!(rounded(report.percent(b'T').unwrap()), "22.2");
        assert_eq!(rounded(report.pair_percent()), "44.4");
    }

    #[test]
    fn test_analyze_empty_is_all_zero() {
        let report = analyze("", &DNA, CG_PAIR).unwrap();
        assert_eq!(report.total(), 0);
        assert!(report.iter().all(|(_, p)| p == 0.0));
        assert_eq!(report.pair_percent(), 0.0);
    }

    #[test]
    fn test_analyze_no_alphabet_symbols_is_all_zero() {
        let report = analyze("Bob", &DNA, CG_PAIR).unwrap();
        assert_eq!(report.total(), 0);
        assert!(report.iter().all(|(_, p)| p == 0.0));
    }

    #[test]
    fn test_analyze_ignores_foreign_characters() {
        let report = analyze("ACGTBobACGTAC", &DNA, CG_PAIR).unwrap();
        assert_eq!(report.total(), 10);
        assert_eq!(report.count(b'A'), Some(3));
        assert_eq!(report.count(b'C'), Some(3));
        assert!((report.percent(b'A').unwrap() - 30.0).abs() < EPS);
        assert!((report.pair_percent() - 50.0).abs() < EPS);
    }

    #[test]
    fn test_analyze_is_case_sensitive() {
        let report = analyze("acgtA", &DNA, CG_PAIR).unwrap();
        assert_eq!(report.total(), 1);
        assert_eq!(report.percent(b'A'), Some(100.0));
    }

    #[test]
    fn test_pair_equals_sum_of_members() {
        let mut rng = StdRng::seed_from_u64(99);
        for length in [1usize, 2, 7, 60, 333, 1000] {
            let seq = generate(length, &DNA, &mut rng);
            let report = analyze(seq.as_bytes(), &DNA, CG_PAIR).unwrap();
            for (_, p) in report.iter() {
                assert!((0.0..=100.0).contains(&p));
            }
            let sum = report.percent(b'C').unwrap() + report.percent(b'G').unwrap();
            assert!((report.pair_percent() - sum).abs() < EPS);
            assert!((0.0..=100.0).contains(&report.pair_percent()));
        }
    }

    #[test]
    fn test_custom_pair() {
        let report = analyze("AATTCG", &DNA, [b'A', b'T']).unwrap();
        assert_eq!(report.pair(), [b'A', b'T']);
        assert!((report.pair_percent() - 400.0 / 6.0).abs() < EPS);
    }

    #[test]
    fn test_pair_outside_alphabet() {
        assert!(matches!(
            analyze("ACGT", &DNA, [b'C', b'U']),
            Err(Error::PairNotInAlphabet { symbol: 'U' })
        ));
    }

    #[test]
    fn test_display_report() {
        let report = analyze("AACGTTGCA", &DNA, CG_PAIR).unwrap();
        assert_eq!(
            report.to_string(),
            "A: 33.3%\nC: 22.2%\nG: 22.2%\nT: 22.2%\n%CG: 44.4"
        );
    }

    #[test]
    fn test_symbol_outside_alphabet_has_no_percent() {
        let report = analyze("ACGT", &DNA, CG_PAIR).unwrap();
        assert_eq!(report.percent(b'N'), None);
        assert_eq!(report.count(b'N'), None);
    }
}
