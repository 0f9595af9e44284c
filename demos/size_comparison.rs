use stream_sketches::*;

fn report<S: serde::Serialize>(label: &str, state: &S) {
    let json_bytes = serde_json::to_vec(state).unwrap();
    let bincode_bytes = bincode::serialize(state).unwrap();

    println!("{}:", label);
    println!("  JSON size: {} bytes", json_bytes.len());
    println!("  Bincode size: {} bytes", bincode_bytes.len());
    println!(
        "  Ratio: {:.2}x",
        json_bytes.len() as f32 / bincode_bytes.len() as f32
    );
}

fn main() {
    let mut hll = HyperLogLog::new(0.01).unwrap();
    for i in 0..100_000 {
        hll.push(&format!("user_{}", i));
    }
    report("HyperLogLog (p=14, 100k users)", &hll.snapshot());

    let mut shll = SlidingHyperLogLog::new(0.05, 3600).unwrap();
    for ts in 0..86_400u64 {
        shll.add(ts, &(ts % 5_000));
    }
    report("\nSlidingHyperLogLog (W=3600, one day)", &shll.snapshot());

    let mut topk = TopK::new(10, 0.99, 0.002).unwrap();
    for i in 0..50_000u64 {
        topk.push(format!("page_{}", i % 997), 1);
    }
    report("\nTopK (k=10, 1360x5 sketch)", &topk.snapshot());

    let mut td = TDigest::new(100).unwrap();
    td.push_unsorted(&(0..100_000).map(|i| f64::from(i).sqrt()).collect::<Vec<_>>());
    report("\nTDigest (compression 100, 100k values)", &td.snapshot());
}
