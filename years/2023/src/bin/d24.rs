use lib::prelude::*;
use num::{BigInt, BigRational, ToPrimitive, Zero};

const AREA: (i64, i64) = (200000000000000, 400000000000000);

#[entry(input = "d24.txt", expect = (17867, 557743507346379))]
fn main(mut input: IStr) -> Result<(usize, i64)> {
    let hail = parse(&mut input)?;
    Ok((crossings(&hail, AREA), rock(&hail)?))
}

/// Position and velocity of a hailstone.
type Hail = ([i64; 3], [i64; 3]);

fn parse(input: &mut IStr) -> Result<Vec<Hail>> {
    let mut hail = Vec::new();

    for line in input.lines::<Split<'@', (Split<',', [i64; 3]>, Split<',', [i64; 3]>)>>() {
        let Split((Split(p), Split(v))) = line?;
        hail.push((p, v));
    }

    Ok(hail)
}

/// Count pairs of hailstones whose paths cross inside of the test area in the
/// future, ignoring the z axis.
fn crossings(hail: &[Hail], (lo, hi): (i64, i64)) -> usize {
    let (lo, hi) = (i128::from(lo), i128::from(hi));

    hail.pairs()
        .filter(|&(&(p1, v1), &(p2, v2))| {
            let [p1x, p1y, _] = p1.map(i128::from);
            let [v1x, v1y, _] = v1.map(i128::from);
            let [p2x, p2y, _] = p2.map(i128::from);
            let [v2x, v2y, _] = v2.map(i128::from);

            let mut det = v2x * v1y - v1x * v2y;

            if det == 0 {
                return false;
            }

            let (dx, dy) = (p2x - p1x, p2y - p1y);
            let mut t = v2x * dy - dx * v2y;
            let mut s = v1x * dy - v1y * dx;

            if det < 0 {
                det = -det;
                t = -t;
                s = -s;
            }

            if t < 0 || s < 0 {
                return false;
            }

            // Intersection scaled by `det`.
            let x = p1x * det + t * v1x;
            let y = p1y * det + t * v1y;
            let range = lo * det..=hi * det;
            range.contains(&x) && range.contains(&y)
        })
        .count()
}

/// Find the position a rock thrown in a straight line must start from to hit
/// every hailstone, and sum its coordinates.
///
/// For a rock at `P` moving at `V`, every hailstone satisfies
/// `(P - p) × (V - v) = 0`. Subtracting that equation for two hailstones
/// cancels the non-linear `P × V` term, so two pairs give six linear equations.
fn rock(hail: &[Hail]) -> Result<i64> {
    let n = hail.len().min(8);

    for a in 0..n {
        for b in a + 1..n {
            for c in b + 1..n {
                let Some(u) = solve(system(&hail[a], &hail[b], &hail[c])) else {
                    continue;
                };

                debug!(
                    "rock at {}, {}, {} moving {}, {}, {}",
                    u[0], u[1], u[2], u[3], u[4], u[5]
                );

                let sum = &u[0] + &u[1] + &u[2];
                ensure!(sum.is_integer(), "rock is not at an integer position");

                return sum
                    .to_integer()
                    .to_i64()
                    .context("rock position out of range");
            }
        }
    }

    bail!("hailstones do not determine a rock")
}

fn cross(a: [i64; 3], b: [i64; 3]) -> [BigInt; 3] {
    let [a, b] = [a, b].map(|v| v.map(BigInt::from));

    [
        &a[1] * &b[2] - &a[2] * &b[1],
        &a[2] * &b[0] - &a[0] * &b[2],
        &a[0] * &b[1] - &a[1] * &b[0],
    ]
}

/// Build the augmented matrix of the linear system from the pairs `(a, b)` and
/// `(a, c)`, with unknowns `Px Py Pz Vx Vy Vz`.
fn system(a: &Hail, b: &Hail, c: &Hail) -> Vec<Vec<BigRational>> {
    let mut rows = Vec::with_capacity(6);

    for other in [b, c] {
        let (pi, vi) = *a;
        let (pj, vj) = *other;

        let dv = [0, 1, 2].map(|n| vi[n] - vj[n]);
        let dp = [0, 1, 2].map(|n| pi[n] - pj[n]);

        let ci = cross(pi, vi);
        let cj = cross(pj, vj);
        let [rx, ry, rz] = [0, 1, 2].map(|n| &ci[n] - &cj[n]);

        let [dvx, dvy, dvz] = dv;
        let [dpx, dpy, dpz] = dp;

        let equations = [
            ([0, dvz, -dvy, 0, -dpz, dpy], rx),
            ([-dvz, 0, dvx, dpz, 0, -dpx], ry),
            ([dvy, -dvx, 0, -dpy, dpx, 0], rz),
        ];

        for (coefficients, rhs) in equations {
            let mut row = coefficients
                .into_iter()
                .map(|v| BigRational::from_integer(BigInt::from(v)))
                .collect::<Vec<_>>();

            row.push(BigRational::from_integer(rhs));
            rows.push(row);
        }
    }

    rows
}

/// Gaussian elimination over an augmented matrix, returning `None` if it is
/// singular.
fn solve(mut m: Vec<Vec<BigRational>>) -> Option<Vec<BigRational>> {
    let n = m.len();

    for col in 0..n {
        let pivot = (col..n).find(|&row| !m[row][col].is_zero())?;
        m.swap(col, pivot);

        let pivot = m[col][col].clone();

        for v in &mut m[col][col..] {
            *v = &*v / &pivot;
        }

        for row in 0..n {
            if row == col || m[row][col].is_zero() {
                continue;
            }

            let factor = m[row][col].clone();

            for k in col..=n {
                let d = &factor * &m[col][k];
                m[row][k] -= d;
            }
        }
    }

    Some(m.into_iter().map(|mut row| row.swap_remove(n)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const INPUT: &[u8] = br"19, 13, 30 @ -2,  1, -2
18, 19, 22 @ -1, -1, -2
20, 25, 34 @ -2, -2, -4
12, 31, 28 @ -1, -2, -1
20, 19, 15 @  1, -5, -3
";

    #[test]
    fn sample() -> Result<()> {
        let hail = parse(&mut IStr::new(INPUT))?;
        assert_eq!(hail[0], ([19, 13, 30], [-2, 1, -2]));
        assert_eq!(crossings(&hail, (7, 27)), 2);
        assert_eq!(rock(&hail)?, 47);
        Ok(())
    }

    fn matrix<const N: usize>(rows: &[[i64; N]]) -> Vec<Vec<BigRational>> {
        rows.iter()
            .map(|row| {
                row.iter()
                    .map(|&v| BigRational::from_integer(BigInt::from(v)))
                    .collect()
            })
            .collect()
    }

    #[test]
    fn gaussian_elimination() {
        let solution = solve(matrix(&[[2, 1, 5], [1, -1, 1]]));
        let expected = [2, 1].map(|v| BigRational::from_integer(BigInt::from(v)));
        assert_eq!(solution.as_deref(), Some(&expected[..]));
        assert!(solve(matrix(&[[1, 2, 3], [2, 4, 6]])).is_none());
    }
}
