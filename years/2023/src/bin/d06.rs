use lib::prelude::*;

#[entry(input = "d06.txt", expect = (2269432, 35865985))]
fn main(mut input: IStr) -> Result<(u64, u64)> {
    let (times, distances) = parse(&mut input)?;

    let o1 = times
        .iter()
        .zip(&distances)
        .map(|(&t, &d)| ways(t, d))
        .product();

    let o2 = ways(concat(&times), concat(&distances));
    Ok((o1, o2))
}

fn parse(input: &mut IStr) -> Result<(Vec<u64>, Vec<u64>)> {
    let (W(_), Nl(times)) = input.next::<(W, Nl<Vec<u64>>)>()?;
    let (W(_), Nl(distances)) = input.next::<(W, Nl<Vec<u64>>)>()?;
    ensure!(times.len() == distances.len(), "times and distances differ");
    Ok((times, distances))
}

/// Number of ways to hold the button for `h` out of `time` milliseconds so
/// that `h * (time - h) > distance`.
fn ways(time: u64, distance: u64) -> u64 {
    let beats = |h: u64| h * (time - h) > distance;

    let mid = time / 2;

    if !beats(mid) {
        return 0;
    }

    let disc = (time as f64).powi(2) - 4.0 * distance as f64;
    let mut lo = ((time as f64 - disc.max(0.0).sqrt()) / 2.0).max(0.0) as u64;
    lo = lo.min(mid);

    // The estimate might be off by one in either direction.
    while lo < mid && !beats(lo) {
        lo += 1;
    }

    while lo > 0 && beats(lo - 1) {
        lo -= 1;
    }

    time - 2 * lo + 1
}

/// Concatenate the digits of every value.
fn concat(values: &[u64]) -> u64 {
    values.iter().fold(0, |acc, &v| {
        let digits = v.checked_ilog10().map_or(1, |n| n + 1);
        acc * 10u64.pow(digits) + v
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const INPUT: &[u8] = br"Time:      7  15   30
Distance:  9  40  200
";

    #[test]
    fn sample() -> Result<()> {
        let (times, distances) = parse(&mut IStr::new(INPUT))?;
        assert_eq!(ways(7, 9), 4);
        assert_eq!(ways(15, 40), 8);
        assert_eq!(ways(30, 200), 9);
        assert_eq!(concat(&times), 71530);
        assert_eq!(ways(concat(&times), concat(&distances)), 71503);
        Ok(())
    }

    #[test]
    fn unbeatable() {
        assert_eq!(ways(4, 4), 0);
        assert_eq!(ways(5, 5), 2);
    }
}
