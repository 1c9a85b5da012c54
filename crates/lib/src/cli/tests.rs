use core::time::Duration;

use anyhow::{ensure, Context};

use super::*;
use crate::input::IStr;

#[test]
fn parse_options() -> Result<()> {
    let opts = Opts::parse_from(["--bench", "--warmup", "10", "--count", "3", "--json"])?;

    assert!(matches!(opts.mode, Mode::Bench));
    assert_eq!(opts.warmup, Some(10));
    assert_eq!(opts.count, Some(3));
    assert!(opts.json);
    assert!(!opts.verbose);
    Ok(())
}

#[test]
fn parse_stops_at_separator() -> Result<()> {
    let opts = Opts::parse_from(["--verbose", "--", "--bench"])?;
    assert!(matches!(opts.mode, Mode::Default));
    assert!(opts.verbose);
    Ok(())
}

#[test]
fn parse_rejects_bad_options() {
    assert!(Opts::parse_from(["--bench", "--bench"]).is_err());
    assert!(Opts::parse_from(["--warmup"]).is_err());
    assert!(Opts::parse_from(["--count", "many"]).is_err());
    assert!(Opts::parse_from(["--frobnicate"]).is_err());
}

#[test]
fn report_from_samples() {
    let samples = (1..=100).map(Duration::from_millis).collect::<Vec<_>>();
    let report = Report::from_sorted(&samples);

    assert_eq!(report.count, 100);
    assert_eq!(report.min, Duration::from_millis(1));
    assert_eq!(report.max, Duration::from_millis(100));
    assert_eq!(report.p50, Duration::from_millis(51));
    assert_eq!(report.p99, Duration::from_millis(100));
    assert_eq!(report.avg, Duration::from_micros(50500));

    let empty = Report::from_sorted(&[]);
    assert_eq!(empty.count, 0);
    assert_eq!(empty.avg, Duration::ZERO);
}

#[test]
fn report_sums() {
    let mut total = Report::default();
    let report = Report::from_sorted(&[Duration::from_millis(2)]);
    total += &report;
    total += &report;
    assert_eq!(total.count, 2);
    assert_eq!(total.max, Duration::from_millis(4));
}

#[test]
fn answer_output() -> Result<()> {
    let mut out = Vec::new();
    Output::new(&mut out, OutputKind::Normal).answer((1u32, 2u64))?;
    assert_eq!(out, b"answer: (1, 2)\n");

    let mut out = Vec::new();
    Output::new(&mut out, OutputKind::Json).answer(42usize)?;
    let value: serde_json::Value = serde_json::from_slice(&out)?;
    assert_eq!(value["type"], "answer");
    assert_eq!(value["data"], "42");
    Ok(())
}

#[test]
fn json_lines() -> Result<()> {
    let mut out = Vec::new();
    let mut o = Output::new(&mut out, OutputKind::Json);
    o.info("warming up")?;
    o.error("no answer")?;
    o.report(&Report::from_sorted(&[Duration::from_millis(2)]))?;

    let lines = out
        .split(|&b| b == b'\n')
        .filter(|line| !line.is_empty())
        .map(serde_json::from_slice::<serde_json::Value>)
        .collect::<Result<Vec<_>, _>>()?;

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0]["type"], "message");
    assert_eq!(lines[0]["data"]["kind"], "info");
    assert_eq!(lines[0]["data"]["output"], "warming up");
    assert_eq!(lines[1]["data"]["kind"], "error");
    assert_eq!(lines[2]["type"], "report");
    assert_eq!(lines[2]["data"]["count"], 1);
    Ok(())
}

#[test]
fn bench_counted_runs() -> Result<()> {
    let opts = Opts::parse_from(["--bench", "--warmup", "0", "--count", "3"])?;
    let mut out = Vec::new();
    let mut runs = 0;

    let report = Bencher::new().iter(
        &mut Output::new(&mut out, OutputKind::Normal),
        &opts,
        || -> Result<u32> {
            runs += 1;
            Ok(runs)
        },
        |value| {
            ensure!(*value > 0, "no runs");
            Ok(())
        },
    )?;

    assert_eq!(report.count, 3);
    assert_eq!(runs, 3);
    assert_eq!(out, b"info: running benches 3 time(s)...\n");
    Ok(())
}

#[test]
fn bench_stops_on_failed_check() -> Result<()> {
    let opts = Opts::parse_from(["--bench", "--warmup", "0", "--count", "3"])?;
    let mut out = Vec::new();

    let result = Bencher::new().iter(
        &mut Output::new(&mut out, OutputKind::Json),
        &opts,
        || -> Result<u32> { Ok(1) },
        |value| {
            ensure!(*value == 2, "wrong answer");
            Ok(())
        },
    );

    assert!(result.is_err());
    Ok(())
}

#[test]
fn error_points_at_line() {
    let input = IStr::new(b"1 2\n3 x\n");

    let error = (|| -> Result<u32> {
        let mut input = input;
        let mut sum = 0;

        while let Some((a, b)) = input.try_line::<(u32, u32)>()? {
            sum += a + b;
        }

        Ok(sum)
    })()
    .context("parsing");

    let Err(error) = error else {
        panic!("expected error");
    };

    let error = error_context("inputs/test.txt", input, error);
    assert_eq!(error.to_string(), "inputs/test.txt:2:2-3");
}

#[test]
fn error_without_position() {
    let input = IStr::new(b"");
    let error = error_context("inputs/test.txt", input, anyhow!("no answer"));
    assert_eq!(error.to_string(), "inputs/test.txt");
    assert_eq!(format!("{error:#}"), "inputs/test.txt: no answer");
}

#[test]
fn output_eq_through_tuples() {
    assert!((1u32, 2u64).output_eq(&(1, 2)));
    assert!(!(1u32, 2u64).output_eq(&(1, 3)));
    assert!(Some(5usize).output_eq(&Some(5)));
    assert!(!None::<usize>.output_eq(&Some(5)));
    assert!(String::from("abc").output_eq(&"abc"));
}
