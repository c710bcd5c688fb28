use argminmax::ArgMinMax;

pub fn get_max(vec: &[f64]) -> f64 {
    let max_index: usize = vec.argmax();
    vec[max_index]
}

pub fn get_min(vec: &[f64]) -> f64 {
    let min_index: usize = vec.argmin();
    vec[min_index]
}

pub fn get_min_max(vec: &[f64]) -> (f64, f64) {
    (get_min(vec), get_max(vec))
}

/// Trailing-window mean. Positions with fewer than `window` values so far
/// are `None`, mirroring how a spreadsheet rolling mean leaves leading gaps.
///
/// Runs off a prefix-sum so the whole series is O(n) regardless of window.
pub fn rolling_mean(values: &[f64], window: usize) -> Vec<Option<f64>> {
    assert!(window > 0, "rolling window must be positive");

    let mut prefix = Vec::with_capacity(values.len() + 1);
    prefix.push(0.0);
    let mut acc = 0.0;
    for v in values {
        acc += v;
        prefix.push(acc);
    }

    (0..values.len())
        .map(|i| {
            if i + 1 < window {
                None
            } else {
                let sum = prefix[i + 1] - prefix[i + 1 - window];
                Some(sum / window as f64)
            }
        })
        .collect()
}
