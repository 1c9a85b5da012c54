//! CLI helpers used by the code generated through `#[entry]`.

mod bencher;
pub(crate) mod error;
mod output;
mod output_eq;
mod stdout_logger;

use core::fmt;
use core::ops::AddAssign;
use core::time::Duration;

use anyhow::{anyhow, bail, Context, Error, Result};
use serde::Serialize;

use crate::input::IStr;

pub use self::bencher::Bencher;
pub use self::error::{error_context, CliError, LineCol};
pub(self) use self::output::{Output, OutputKind};
pub use self::output_eq::OutputEq;

static STDOUT_LOGGER: stdout_logger::StdoutLogger = stdout_logger::StdoutLogger;

/// Run mode.
#[derive(Default)]
pub enum Mode {
    /// Default run mode.
    #[default]
    Default,
    /// Run as benchmark.
    Bench,
}

/// Input options.
#[derive(Default)]
pub struct Opts {
    /// Run as a benchmark.
    pub mode: Mode,
    /// Run in verbose mode.
    verbose: bool,
    /// Output JSON report.
    json: bool,
    /// Warmup period.
    warmup: Option<u64>,
    /// Bench period.
    time_limit: Option<u64>,
    /// Number of times to run benches.
    count: Option<usize>,
}

impl Opts {
    /// Parse CLI options and set up logging.
    pub fn parse() -> Result<Self> {
        let opts = Self::parse_from(std::env::args().skip(1))?;

        if !opts.json {
            let level = if opts.verbose {
                log::LevelFilter::Debug
            } else {
                log::LevelFilter::Info
            };

            log::set_max_level(level);
            log::set_logger(&STDOUT_LOGGER)
                .map_err(|error| anyhow!("failed to set log: {error}"))?;
        }

        Ok(opts)
    }

    /// Parse options from the given arguments.
    pub fn parse_from<I>(args: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut opts = Self::default();
        let mut it = args.into_iter();

        while let Some(arg) = it.next() {
            match arg.as_ref() {
                "--bench" => {
                    if !matches!(opts.mode, Mode::Default) {
                        bail!("duplicate `--bench` arguments");
                    }

                    opts.mode = Mode::Bench;
                }
                "--verbose" => {
                    opts.verbose = true;
                }
                "--warmup" => {
                    let warmup = it.next().context("missing argument to `--warmup`")?;
                    opts.warmup = Some(
                        warmup
                            .as_ref()
                            .parse()
                            .context("bad argument to `--warmup`")?,
                    );
                }
                "--time-limit" => {
                    let time_limit = it.next().context("missing argument to `--time-limit`")?;
                    opts.time_limit = Some(
                        time_limit
                            .as_ref()
                            .parse()
                            .context("bad argument to `--time-limit`")?,
                    );
                }
                "--count" => {
                    let count = it.next().context("missing argument to `--count`")?;
                    opts.count = Some(
                        count
                            .as_ref()
                            .parse()
                            .context("bad argument to `--count`")?,
                    );
                }
                "--json" => {
                    opts.json = true;
                }
                "--" => {
                    break;
                }
                other => {
                    bail!("unsupported argument: {other}");
                }
            }
        }

        Ok(opts)
    }

    fn output_kind(&self) -> OutputKind {
        if self.json {
            OutputKind::Json
        } else {
            OutputKind::Normal
        }
    }
}

/// Run a solution according to the given options.
pub fn run<T, O, E>(opts: &Opts, path: &'static str, input: IStr, solve: T) -> Result<()>
where
    T: FnMut(IStr) -> Result<O, E>,
    O: fmt::Debug,
    Error: From<E>,
{
    run_with(opts, path, input, solve, |_| Ok(()))
}

/// Run a solution according to the given options, failing if it does not
/// produce the `expected` answer.
pub fn run_expect<T, O, C, E>(
    opts: &Opts,
    path: &'static str,
    input: IStr,
    expected: C,
    solve: T,
) -> Result<()>
where
    T: FnMut(IStr) -> Result<O, E>,
    O: fmt::Debug + OutputEq<C>,
    C: fmt::Debug,
    Error: From<E>,
{
    run_with(opts, path, input, solve, |value: &O| {
        if !value.output_eq(&expected) {
            bail!("{value:?} (value) != {expected:?} (expected)");
        }

        Ok(())
    })
}

fn run_with<T, O, E, C>(
    opts: &Opts,
    path: &'static str,
    input: IStr,
    mut solve: T,
    check: C,
) -> Result<()>
where
    T: FnMut(IStr) -> Result<O, E>,
    O: fmt::Debug,
    C: Fn(&O) -> Result<()>,
    Error: From<E>,
{
    let stdout = std::io::stdout();
    let mut o = Output::new(stdout.lock(), opts.output_kind());

    let mut solve = move || solve(input).map_err(|error| error_context(path, input, error));

    let result = match opts.mode {
        Mode::Default => solve().and_then(|value| {
            o.answer(&value)?;
            check(&value)
        }),
        Mode::Bench => {
            let mut bencher = Bencher::new();

            bencher
                .iter(&mut o, opts, solve, &check)
                .and_then(|report| Ok(o.report(&report)?))
        }
    };

    if let Err(error) = &result {
        if opts.json {
            o.error(format_args!("{error:#}"))?;
        }
    }

    result
}

/// Timing report produced by a benchmark.
#[derive(Default, Serialize)]
pub struct Report {
    pub p50: Duration,
    pub p95: Duration,
    pub p99: Duration,
    pub count: usize,
    pub min: Duration,
    pub max: Duration,
    pub avg: Duration,
}

impl Report {
    /// Build a report out of sorted samples.
    fn from_sorted(samples: &[Duration]) -> Self {
        let count = samples.len();

        let percentile = |p: usize| {
            let n = (count * p / 100).min(count.saturating_sub(1));
            samples.get(n).copied().unwrap_or_default()
        };

        let sum = samples.iter().sum::<Duration>();

        let avg = match u32::try_from(count) {
            Ok(0) | Err(..) => Duration::default(),
            Ok(n) => sum / n,
        };

        Self {
            p50: percentile(50),
            p95: percentile(95),
            p99: percentile(99),
            count,
            min: samples.first().copied().unwrap_or_default(),
            max: samples.last().copied().unwrap_or_default(),
            avg,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Report {
            p50,
            p95,
            p99,
            count,
            min,
            max,
            avg,
        } = self;

        write!(f, "count: {count}, min: {min:?}, max: {max:?}, avg: {avg:?}, 50th: {p50:?}, 95th: {p95:?}, 99th: {p99:?}")
    }
}

impl AddAssign<&Report> for Report {
    fn add_assign(&mut self, rhs: &Report) {
        self.p50 += rhs.p50;
        self.p95 += rhs.p95;
        self.p99 += rhs.p99;
        self.count += rhs.count;
        self.min += rhs.min;
        self.max += rhs.max;
        self.avg += rhs.avg;
    }
}

#[cfg(test)]
mod tests;
