/// Sample stamped with milliseconds elapsed since session start.
pub trait TimedSample: Send + Sync + Clone + 'static {
    ///  Returns the timestamp of the sample in milliseconds.
    fn get_timestamp_millis(&self) -> u64;
    /// Returns true when every measured component is finite.
    fn is_finite(&self) -> bool;
}

/// Returns the index of the first sample whose timestamp is smaller than its predecessor.
pub fn first_decreasing<T: TimedSample>(samples: &[T]) -> Option<usize> {
    samples
        .windows(2)
        .position(|w| w[1].get_timestamp_millis() < w[0].get_timestamp_millis())
        .map(|idx| idx + 1)
}
