use lib::prelude::*;

const DIGITS: [&[u8]; 9] = [
    b"one", b"two", b"three", b"four", b"five", b"six", b"seven", b"eight", b"nine",
];

#[entry(input = "d01.txt", expect = (55208, 54578))]
fn main(mut input: IStr) -> Result<(u32, u32)> {
    sums(&mut input)
}

/// Sum calibration values over every line.
fn sums(input: &mut IStr) -> Result<(u32, u32)> {
    let mut o1 = 0;
    let mut o2 = 0;

    while let Some(line) = input.try_line::<&[u8]>()? {
        let (a, b) = calibration(line);
        o1 += a;
        o2 += b;
    }

    Ok((o1, o2))
}

/// Calibration value of a line, first using only digits and then also
/// counting spelled out digits.
fn calibration(line: &[u8]) -> (u32, u32) {
    let mut f1 = None;
    let mut l1 = 0;
    let mut f2 = None;
    let mut l2 = 0;

    for n in 0..line.len() {
        let rest = &line[n..];

        let (spelled, d) = match rest {
            [d @ b'0'..=b'9', ..] => (false, u32::from(d - b'0')),
            _ => {
                let Some(index) = DIGITS.iter().position(|w| rest.starts_with(w)) else {
                    continue;
                };

                (true, index as u32 + 1)
            }
        };

        if !spelled {
            f1.get_or_insert(d);
            l1 = d;
        }

        f2.get_or_insert(d);
        l2 = d;
    }

    (
        f1.map_or(0, |f| f * 10 + l1),
        f2.map_or(0, |f| f * 10 + l2),
    )
}
