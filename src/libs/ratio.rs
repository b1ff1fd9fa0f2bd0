use serde::Serialize;

pub const MATCH: &str = "Match";
pub const MISMATCH: &str = "Mismatch";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frequency {
    pub key: String,
    pub frequency: f64,
}

impl Frequency {
    pub fn new(key: &str, frequency: f64) -> Self {
        Self {
            key: key.to_string(),
            frequency,
        }
    }
}

/// Match/mismatch distribution of `matched` positions out of `total`.
///
/// `total` must be positive.
///
/// ```
/// # use quadview::libs::ratio::ratio;
/// let freqs = ratio(3.0, 4.0);
/// assert_eq!(freqs[0].key, "Match");
/// assert_eq!(freqs[0].frequency, 0.75);
/// assert_eq!(freqs[1].key, "Mismatch");
/// assert_eq!(freqs[1].frequency, 0.25);
/// ```
pub fn ratio(matched: f64, total: f64) -> [Frequency; 2] {
    assert!(total > 0.0, "ratio over a non-positive total {}", total);

    let frequency = matched / total;
    [
        Frequency::new(MATCH, frequency),
        Frequency::new(MISMATCH, 1.0 - frequency),
    ]
}
