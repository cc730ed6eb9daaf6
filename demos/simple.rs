//! A simple example showing the use of a Bloom filter.
use bloomcheck::BloomFilter;

fn main() -> bloomcheck::Result<()> {
    let capacity = 128;
    let mut bf = BloomFilter::<str>::with_capacity(capacity)?;

    bf.insert("foo");
    bf.insert("bar");

    println!("foo: {}", bf.contains("foo")); // true
    println!("bar: {}", bf.contains("bar")); // true
    println!("baz: {}", bf.contains("baz")); // false, most likely

    println!("{} bits, {} hashes", bf.bits(), bf.hashes());
    println!("expected false positive rate: {:.6}", bf.expected_false_positive_rate());

    Ok(())
}
