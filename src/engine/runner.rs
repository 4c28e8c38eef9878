//! Timing protocol shared by every algorithm family.

use std::hint::black_box;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::core::{Category, RunConfig};
use crate::{BenchError, BenchResult};

/// Outcome of one protocol run: mean time of the measured runs and the last run's output.
#[derive(Debug, Clone)]
pub struct Measurement<T> {
    pub average_ms: f64,
    pub output: T,
    pub config: RunConfig,
}

/// Executes an operation under a warm-up plus repeated-measurement protocol.
#[derive(Debug, Clone, Copy)]
pub struct BenchmarkRunner {
    config: RunConfig,
}

impl BenchmarkRunner {
    /// Runner with an explicit protocol.
    ///
    /// # Errors
    /// `InvalidArgument` if `measured_runs` is zero.
    pub fn new(config: RunConfig) -> BenchResult<Self> {
        if config.measured_runs == 0 {
            return Err(BenchError::InvalidArgument(
                "measured_runs must be at least 1".into(),
            ));
        }
        Ok(BenchmarkRunner { config })
    }

    /// Runner with the fixed protocol of `category`.
    pub fn for_category(category: Category) -> Self {
        BenchmarkRunner {
            config: RunConfig::for_category(category),
        }
    }

    pub fn config(&self) -> RunConfig {
        self.config
    }

    /// Measure `operation`.
    ///
    /// Every invocation, warm-up included, receives a fresh input from `input_factory`;
    /// producing that input is not timed. Warm-up outputs and timings are discarded.
    pub fn run<I, T>(
        &self,
        mut input_factory: impl FnMut() -> I,
        mut operation: impl FnMut(I) -> T,
    ) -> Measurement<T> {
        for _ in 0..self.config.warmup_runs {
            black_box(operation(input_factory()));
        }

        let (mut total, mut output) = timed(&mut input_factory, &mut operation);
        for _ in 1..self.config.measured_runs {
            let (elapsed, next) = timed(&mut input_factory, &mut operation);
            total += elapsed;
            output = next;
        }

        let average_ms = total.as_secs_f64() * 1000.0 / f64::from(self.config.measured_runs);
        debug!(
            warmup = self.config.warmup_runs,
            runs = self.config.measured_runs,
            average_ms,
            "measurement complete"
        );

        Measurement {
            average_ms,
            output,
            config: self.config,
        }
    }
}

fn timed<I, T>(
    input_factory: &mut impl FnMut() -> I,
    operation: &mut impl FnMut(I) -> T,
) -> (Duration, T) {
    let input = input_factory();
    let started = Instant::now();
    let output = black_box(operation(black_box(input)));
    (started.elapsed(), output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_runs_warmup_plus_measured() {
        let calls = Cell::new(0u32);
        let inputs = Cell::new(0u32);
        let runner = BenchmarkRunner::for_category(Category::Sorting);

        let m = runner.run(
            || inputs.set(inputs.get() + 1),
            |_| calls.set(calls.get() + 1),
        );

        assert_eq!(calls.get(), 11);
        assert_eq!(inputs.get(), 11);
        assert_eq!(m.config.measured_runs, 10);
        assert!(m.average_ms >= 0.0);
    }

    #[test]
    fn test_output_comes_from_last_measured_run() {
        let counter = Cell::new(0u32);
        let runner = BenchmarkRunner::new(RunConfig {
            warmup_runs: 1,
            measured_runs: 3,
        })
        .unwrap();

        let m = runner.run(
            || {
                counter.set(counter.get() + 1);
                counter.get()
            },
            |n| n * 10,
        );

        // warm-up consumed input 1, measured runs consumed 2, 3 and 4
        assert_eq!(m.output, 40);
    }

    #[test]
    fn test_each_run_gets_fresh_input() {
        let runner = BenchmarkRunner::for_category(Category::Graph);
        let original = vec![3, 1, 2];

        let m = runner.run(
            || original.clone(),
            |mut v: Vec<i32>| {
                // Would fail on a reused, already-sorted vector.
                assert_eq!(v, vec![3, 1, 2]);
                v.sort();
                v
            },
        );
        assert_eq!(m.output, vec![1, 2, 3]);
    }

    #[test]
    fn test_average_is_mean_of_measured_runs() {
        let runner = BenchmarkRunner::new(RunConfig {
            warmup_runs: 0,
            measured_runs: 4,
        })
        .unwrap();
        let m = runner.run(|| (), |_| std::thread::sleep(Duration::from_millis(2)));
        assert!(m.average_ms >= 2.0, "average {} below sleep time", m.average_ms);
    }

    #[test]
    fn test_zero_measured_runs_rejected() {
        let result = BenchmarkRunner::new(RunConfig {
            warmup_runs: 1,
            measured_runs: 0,
        });
        assert!(matches!(result, Err(BenchError::InvalidArgument(_))));
    }
}
