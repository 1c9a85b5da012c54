use lib::prelude::*;

#[entry(input = "d09.txt", expect = (1921197370, 1124))]
fn main(mut input: IStr) -> Result<(i64, i64)> {
    sums(&mut input)
}

fn sums(input: &mut IStr) -> Result<(i64, i64)> {
    let mut o1 = 0;
    let mut o2 = 0;

    for values in input.lines::<Vec<i64>>() {
        let (next, prev) = extrapolate(&values?);
        o1 += next;
        o2 += prev;
    }

    Ok((o1, o2))
}

/// Extrapolate the next and previous values of a sequence through repeated
/// differences.
fn extrapolate(values: &[i64]) -> (i64, i64) {
    let mut row = values.to_vec();
    let mut next = 0;
    let mut prev = 0;
    let mut sign = 1;

    while row.iter().any(|&v| v != 0) {
        if let (Some(first), Some(last)) = (row.first(), row.last()) {
            next += last;
            prev += sign * first;
        }

        sign = -sign;
        row = row.windows(2).map(|w| w[1] - w[0]).collect();
    }

    (next, prev)
}
