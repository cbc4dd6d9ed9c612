pub mod composition;
pub mod error;
pub mod input;
pub mod logger;
pub mod record;
pub mod seq;

pub use error::{Error, Result};

use log::info;
use rand::Rng;

use composition::CompositionReport;
use seq::{MarkedSequence, Sequence, CG_PAIR, DNA};

/// Output of one run: the generated bases, the same bases with the marker
/// spliced in, and the composition of the generated bases.
#[derive(Clone, Debug)]
pub struct Synthesis {
    pub sequence: Sequence,
    pub marked: MarkedSequence,
    pub report: CompositionReport,
}

/// Generate `length` DNA bases, insert `marker` at a random offset and
/// analyze the bases. The report never counts marker characters, even ones
/// that happen to be nucleotide letters.
pub fn synthesize<R: Rng + ?Sized>(length: usize, marker: &str, rng: &mut R) -> Result<Synthesis> {
    let sequence = seq::generate(length, &DNA, &mut *rng);
    let marked = seq::insert_marker(&sequence, marker, &mut *rng);
    info!("Inserted '{}' at position {}", marked.marker(), marked.offset());

    let report = composition::analyze(sequence.as_bytes(), &DNA, CG_PAIR)?;
    Ok(Synthesis { sequence, marked, report })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_report_ignores_marker_bases() {
        let mut rng = StdRng::seed_from_u64(17);
        let synthesis = synthesize(30, "CAT", &mut rng).unwrap();

        assert_eq!(synthesis.report.total(), 30);
        assert_eq!(synthesis.marked.as_str().len(), 33);
        assert_eq!(synthesis.marked.marker(), "CAT");
        assert_eq!(synthesis.marked.without_marker(), synthesis.sequence.as_str());

        let expected = composition::analyze(synthesis.sequence.as_bytes(), &DNA, CG_PAIR).unwrap();
        assert_eq!(synthesis.report, expected);
        for &symbol in b"CAT" {
            let in_sequence = synthesis.sequence.as_bytes().iter().filter(|&&b| b == symbol).count();
            assert_eq!(synthesis.report.count(symbol), Some(in_sequence));
        }
    }

    #[test]
    fn test_zero_length_counts_nothing() {
        let mut rng = StdRng::seed_from_u64(1);
        let synthesis = synthesize(0, "GATTACA", &mut rng).unwrap();

        assert_eq!(synthesis.marked.as_str(), "GATTACA");
        assert_eq!(synthesis.report.total(), 0);
        assert_eq!(synthesis.report.pair_percent(), 0.0);
    }

    #[test]
    fn test_synthesize_is_reproducible_with_seed() {
        let a = synthesize(90, "Bob", &mut StdRng::seed_from_u64(8)).unwrap();
        let b = synthesize(90, "Bob", &mut StdRng::seed_from_u64(8)).unwrap();
        assert_eq!(a.marked, b.marked);
        assert_eq!(a.report, b.report);
    }
}
