use indexmap::IndexMap;

/// Item carrying a score that the top-N filter can rescale
pub trait Scored {
    fn score(&self) -> f64;
    fn set_score(&mut self, score: f64);
}

/// 上位N件の抽出と正規化
///
/// Buckets `items` by exact raw score, walks the buckets from the highest
/// score down and rescales every member to `score / max_score`, so the top
/// bucket always lands on 1.0. Whole buckets are appended until at least
/// `maximum` items are collected: a tie at the cutoff is never split, and the
/// first bucket is always returned even when `maximum` is 0.
///
/// Items with a non-positive (or NaN) raw score are never returned.
///
/// # Arguments
/// * `items` - keyed items in discovery order
/// * `maximum` - target lower bound on the result length
///
/// # Returns
/// * `Vec<T>` - items ordered by descending score, discovery order within a tie
pub fn filter_top<K, T>(items: IndexMap<K, T>, maximum: usize) -> Vec<T>
where
    T: Scored,
{
    let mut buckets: IndexMap<u64, Vec<T>> = IndexMap::new();
    for (_, item) in items {
        let score = item.score();
        if score.is_nan() {
            continue;
        }
        buckets.entry(score.to_bits()).or_default().push(item);
    }

    // 降順ソート
    buckets.sort_by(|a, _, b, _| f64::from_bits(*b).total_cmp(&f64::from_bits(*a)));

    let Some(max_score) = buckets.keys().next().map(|bits| f64::from_bits(*bits)) else {
        return Vec::new();
    };

    let mut filtered = Vec::new();
    for (bits, mut bucket) in buckets {
        let score = f64::from_bits(bits);
        if score <= 0.0 {
            break;
        }
        let interpolated = score / max_score;
        for item in bucket.iter_mut() {
            item.set_score(interpolated);
        }
        filtered.append(&mut bucket);

        if filtered.len() >= maximum {
            break;
        }
    }
    filtered
}
