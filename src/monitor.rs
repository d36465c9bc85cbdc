//! Recording sinks for propagation progress.
//!
//! A monitor observes the state once per driver iteration, at the *current*
//! time before the step is taken. Over a span `T` with step `dt` it therefore
//! receives `ceil(T/dt)` samples, each at a time strictly less than `T`, in
//! strictly increasing time order. The monitor never sees the final
//! post-integration state; read that from the state object itself.

/// Append-only sink of (time, observation) samples.
///
/// Any `FnMut(f64, &S)` closure is a monitor:
///
/// ```
/// use imexrk::Monitor;
///
/// let mut times = Vec::new();
/// let mut m = |t: f64, _z: &f64| times.push(t);
/// m.record(0.0, &1.0);
/// m.record(0.1, &1.0);
/// assert_eq!(times, vec![0.0, 0.1]);
/// ```
pub trait Monitor<S> {
    /// Record one sample at time `t`.
    fn record(&mut self, t: f64, state: &S);
}

impl<S, F> Monitor<S> for F
where
    F: FnMut(f64, &S),
{
    fn record(&mut self, t: f64, state: &S) {
        self(t, state);
    }
}

/// Vector-backed monitor storing an observable extracted from each sample.
pub struct SampleHistory<O, F> {
    extract: F,
    times: Vec<f64>,
    samples: Vec<O>,
}

impl<O, F> SampleHistory<O, F> {
    /// Create a history that stores `extract(state)` for each sample.
    pub fn new(extract: F) -> Self {
        Self {
            extract,
            times: Vec::new(),
            samples: Vec::new(),
        }
    }

    /// Sample times, in recording order.
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Recorded observables, aligned with [`times`](Self::times).
    pub fn samples(&self) -> &[O] {
        &self.samples
    }

    /// Number of recorded samples.
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Whether nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }
}

impl<S, O, F> Monitor<S> for SampleHistory<O, F>
where
    F: Fn(&S) -> O,
{
    fn record(&mut self, t: f64, state: &S) {
        self.times.push(t);
        self.samples.push((self.extract)(state));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_records_in_order() {
        let mut h = SampleHistory::new(|z: &Vec<f64>| z[0]);
        h.record(0.0, &vec![1.0, 9.0]);
        h.record(0.5, &vec![2.0, 9.0]);
        assert_eq!(h.len(), 2);
        assert_eq!(h.times(), &[0.0, 0.5]);
        assert_eq!(h.samples(), &[1.0, 2.0]);
    }

    #[test]
    fn test_empty_history() {
        let h: SampleHistory<f64, _> = SampleHistory::new(|z: &f64| *z);
        assert!(h.is_empty());
        assert_eq!(h.samples(), &[] as &[f64]);
    }
}
