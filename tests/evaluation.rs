use std::iter;

use bloomcheck::{evaluate, BloomFilter, Confusion};

fn url(rng: &fastrand::Rng, scheme: &str) -> String {
    let host: String = iter::repeat_with(|| rng.alphanumeric()).take(16).collect();
    format!("{}://{}.example/{}", scheme, host, rng.u32(..))
}

fn labeled(rng: &fastrand::Rng, positives: usize, negatives: usize) -> Vec<(String, bool)> {
    let mut samples: Vec<(String, bool)> = (0..positives)
        .map(|_| (url(rng, "http"), true))
        .chain((0..negatives).map(|_| (url(rng, "https"), false)))
        .collect();
    rng.shuffle(&mut samples);
    samples
}

#[test]
fn no_false_negatives_on_labeled_data() {
    let rng = fastrand::Rng::with_seed(11);
    let samples = labeled(&rng, 2_000, 8_000);

    let evaluation = evaluate(
        0.05,
        samples.iter().map(|(url, label)| (url.as_str(), *label)),
    )
    .unwrap();
    let confusion = evaluation.confusion;

    assert_eq!(evaluation.params.capacity(), 2_000);
    assert_eq!(confusion.total(), 10_000);
    assert_eq!(confusion.positives(), 2_000);
    assert_eq!(confusion.false_negatives, 0);
    assert_eq!(confusion.false_negative_rate(), 0.);
    assert!(
        confusion.false_positive_rate() < 0.10,
        "observed false positive rate {}",
        confusion.false_positive_rate()
    );
    assert!(evaluation.expected_false_positive_rate < 0.06);
}

#[test]
fn measure_matches_manual_tally() {
    let rng = fastrand::Rng::with_seed(12);
    let samples = labeled(&rng, 300, 700);

    let mut filter = BloomFilter::<str>::new(300, 0.01).unwrap();
    for (url, positive) in &samples {
        if *positive {
            filter.insert(url);
        }
    }

    let mut manual = Confusion::default();
    for (url, positive) in &samples {
        manual.record(filter.contains(url), *positive);
    }
    let measured = Confusion::measure(
        &filter,
        samples.iter().map(|(url, label)| (url.as_str(), *label)),
    );

    assert_eq!(measured, manual);
    assert_eq!(measured.true_positives, 300);
}

#[test]
fn evaluation_is_reproducible() {
    let rng = fastrand::Rng::with_seed(13);
    let samples = labeled(&rng, 500, 500);
    let run = || {
        evaluate(
            0.2,
            samples.iter().map(|(url, label)| (url.as_str(), *label)),
        )
        .unwrap()
    };

    assert_eq!(run(), run());
}
