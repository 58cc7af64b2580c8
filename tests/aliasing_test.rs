use bist_rs::masks::{candidate_count, DUAL_CHANNEL_WINDOW, SINGLE_CHANNEL_WINDOW};
use bist_rs::prelude::*;
use bist_rs::tester::DEFAULT_POLYNOMIAL;
use bist_rs::util::bits::hamming_distance;
use bist_rs::util::rand_bits::reference_bits;

fn polynomial() -> Polynomial {
    Polynomial::new(&DEFAULT_POLYNOMIAL).unwrap()
}

#[test]
fn test_aliases_really_alias() {
    let reference = reference_bits(48, Some(2024));
    let tester = AliasTester::new(polynomial(), reference.clone()).unwrap();
    let mut single = SignatureAnalyzer::new(polynomial());
    let mut dual = DualSignatureAnalyzer::new(polynomial());

    for errors in 0..=4 {
        for alias in tester.compute_aliases(ChannelMode::Single, errors).unwrap() {
            assert_eq!(hamming_distance(&alias, &reference), errors);
            assert_eq!(
                single.signature_chain(&alias).unwrap(),
                single.signature_chain(&reference).unwrap()
            );
        }
        for alias in tester.compute_aliases(ChannelMode::Dual, errors).unwrap() {
            assert_eq!(
                dual.signature_chain(&alias).unwrap(),
                dual.signature_chain(&reference).unwrap()
            );
        }
    }
}

#[test]
fn test_sweep_order_and_counts() {
    let tester = AliasTester::new(polynomial(), reference_bits(40, Some(99))).unwrap();
    let reports = tester.sweep().unwrap();
    assert_eq!(reports.len(), 8);
    for (i, report) in reports.iter().enumerate() {
        let errors = i / 2 + 1;
        let (mode, window) = if i % 2 == 0 {
            (ChannelMode::Single, SINGLE_CHANNEL_WINDOW)
        } else {
            (ChannelMode::Dual, DUAL_CHANNEL_WINDOW)
        };
        assert_eq!(report.errors, errors);
        assert_eq!(report.mode, mode);
        assert_eq!(report.candidates, candidate_count(window, errors));
        assert!(report.aliases.len() <= report.candidates);
    }
}

#[test]
fn test_dual_window_only_touches_tail() {
    let reference = reference_bits(64, Some(8));
    for errors in 1..=4 {
        for seq in noised_sequences(&reference, errors, ChannelMode::Dual).unwrap() {
            assert_eq!(seq[..48], reference[..48]);
        }
        for seq in noised_sequences(&reference, errors, ChannelMode::Single).unwrap() {
            assert_eq!(seq[..56], reference[..56]);
        }
    }
}

#[test]
fn test_errors_are_discriminated() {
    let tester = AliasTester::new(polynomial(), vec![0; 12]).unwrap();
    let err = tester.compute_aliases(ChannelMode::Dual, 1).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    let err = tester.compute_aliases(ChannelMode::Single, 7).unwrap_err();
    assert_eq!(err, SigError::InvalidErrorCount(7));

    let mut sa = SignatureAnalyzer::new(polynomial());
    assert_eq!(sa.advance(2).unwrap_err().kind(), ErrorKind::InvalidInput);
}
