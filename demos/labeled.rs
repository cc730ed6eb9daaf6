//! Measure observed against expected error rates on a synthetic labeled set
//! of URLs, where roughly one in five is malicious.
use bloomcheck::evaluate;

fn main() -> bloomcheck::Result<()> {
    let rng = fastrand::Rng::with_seed(0x5eed);
    let samples: Vec<(String, bool)> = (0..100_000)
        .map(|i| {
            let malicious = rng.u8(0..5) == 0;
            let host: String = std::iter::repeat_with(|| rng.lowercase()).take(12).collect();
            let url = if malicious {
                format!("http://{}.example/login?id={}", host, i)
            } else {
                format!("https://{}.example/{}", host, i)
            };
            (url, malicious)
        })
        .collect();

    let evaluation = evaluate(0.05, samples.iter().map(|(url, label)| (url.as_str(), *label)))?;
    let confusion = evaluation.confusion;

    println!("{} URLs processed", confusion.total());
    println!();
    println!("Ground truth:");
    println!("    {} benign    {} malicious", confusion.negatives(), confusion.positives());
    println!("Bloom filter results:");
    println!(
        "    {} benign    {} malicious",
        confusion.total() - confusion.flagged(),
        confusion.flagged()
    );
    println!();
    println!("False positive rate: {:.6}", confusion.false_positive_rate());
    println!("Expected FPR: {:.6}", evaluation.expected_false_positive_rate);
    println!("False negative rate: {:.6}", confusion.false_negative_rate());
    println!("Expected FNR: {:.6}", 0.);

    Ok(())
}
