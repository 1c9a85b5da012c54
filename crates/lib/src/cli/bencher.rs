use std::hint::black_box;
use std::io::Write;
use std::time::{Duration, Instant};

use anyhow::Result;

use crate::cli::{Opts, Output, Report};

/// Default warmup period in milliseconds.
const DEFAULT_WARMUP: u64 = 100;

/// Default time limit in milliseconds.
const DEFAULT_TIME_LIMIT: u64 = 400;

/// Runs a solution repeatedly and reports how long it took.
#[derive(Default)]
pub struct Bencher {
    samples: Vec<Duration>,
}

impl Bencher {
    /// Construct a new bencher.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bench the given fn, checking each produced value with `check`.
    pub(crate) fn iter<T, O, C>(
        &mut self,
        o: &mut Output<impl Write>,
        opts: &Opts,
        mut iter: T,
        check: C,
    ) -> Result<Report>
    where
        T: FnMut() -> Result<O>,
        C: Fn(&O) -> Result<()>,
    {
        let warmup = Duration::from_millis(opts.warmup.unwrap_or(DEFAULT_WARMUP));
        let time_limit = Duration::from_millis(opts.time_limit.unwrap_or(DEFAULT_TIME_LIMIT));

        self.samples.clear();

        if !warmup.is_zero() {
            o.info(format_args!("warming up ({warmup:?})..."))?;

            let start = Instant::now();

            loop {
                let value = iter()?;
                check(&value)?;
                let _ = black_box(value);

                if start.elapsed() >= warmup {
                    break;
                }
            }
        }

        let mut sample = || -> Result<Instant> {
            let before = Instant::now();
            let value = iter()?;
            let after = Instant::now();
            check(&value)?;
            let _ = black_box(value);
            self.samples.push(after.duration_since(before));
            Ok(after)
        };

        if let Some(count) = opts.count {
            let count = count.max(1);
            o.info(format_args!("running benches {count} time(s)..."))?;

            for _ in 0..count {
                sample()?;
            }
        } else {
            o.info(format_args!("running benches ({time_limit:?})..."))?;

            let start = Instant::now();

            while sample()?.duration_since(start) < time_limit {}
        }

        self.samples.sort();
        Ok(Report::from_sorted(&self.samples))
    }
}
