use std::collections::HashSet;

use lib::prelude::*;

const STEPS: u64 = 64;
const INFINITE_STEPS: u64 = 26501365;
/// Largest number of steps which is searched directly on the infinite map.
const DIRECT: u64 = 1000;

#[entry(input = "d21.txt", expect = (3632, 600336060511101))]
fn main(mut input: IStr) -> Result<(u64, u64)> {
    let grid = input.next::<Grid<u8>>()?;
    let start = grid.position(&b'S').context("missing start")?;

    let o1 = reachable(&grid, start, STEPS, false);
    let o2 = infinite(&grid, start, INFINITE_STEPS)?;
    Ok((o1, o2))
}

/// Plots reachable in exactly `steps` steps, optionally on an infinitely
/// repeating map.
///
/// A plot reached in `n` steps can be reached again in `n + 2` steps, so this
/// counts plots first reached in a number of steps with the same parity.
fn reachable(grid: &Grid<u8>, start: Point, steps: u64, wrapping: bool) -> u64 {
    let mut seen = HashSet::from([start]);
    let mut frontier = vec![start];
    let mut next = Vec::new();
    let mut count = u64::from(steps % 2 == 0);

    for step in 1..=steps {
        for p in frontier.drain(..) {
            for (_, n) in p.neighbours(false) {
                let tile = if wrapping {
                    Some(grid.get_wrapping(n))
                } else {
                    grid.get(n)
                };

                if matches!(tile, Some(b'.' | b'S')) && seen.insert(n) {
                    next.push(n);
                }
            }
        }

        if step % 2 == steps % 2 {
            count += next.len() as u64;
        }

        std::mem::swap(&mut frontier, &mut next);

        if frontier.is_empty() {
            break;
        }
    }

    count
}

/// Plots reachable on the infinite map.
///
/// Large step counts grow quadratically in the number of whole map widths
/// walked, so they are extrapolated from three direct searches.
fn infinite(grid: &Grid<u8>, start: Point, steps: u64) -> Result<u64> {
    if steps <= DIRECT {
        return Ok(reachable(grid, start, steps, true));
    }

    ensure!(grid.columns() == grid.rows(), "map must be square");

    let size = grid.columns() as u64;
    let offset = steps % size;

    let [y1, y2, y3] = [0, 1, 2].map(|n| reachable(grid, start, offset + n * size, true) as i128);

    let a = (y3 - 2 * y2 + y1) / 2;
    let b = y2 - y1 - a;
    let c = y1;
    let n = ((steps - offset) / size) as i128;

    debug!("{a}n^2 + {b}n + {c} at n = {n}");

    let value = a * n * n + b * n + c;
    Ok(u64::try_from(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const INPUT: &[u8] = br"...........
.....###.#.
.###.##..#.
..#.#...#..
....#.#....
.##..S####.
.##..#...#.
.......##..
.##.#.####.
.##..##.##.
...........
";

    #[test]
    fn finite() -> Result<()> {
        let grid = IStr::new(INPUT).next::<Grid<u8>>()?;
        let start = grid.position(&b'S').context("missing start")?;
        assert_eq!(reachable(&grid, start, 6, false), 16);
        Ok(())
    }

    #[test]
    fn infinite_map() -> Result<()> {
        let grid = IStr::new(INPUT).next::<Grid<u8>>()?;
        let start = grid.position(&b'S').context("missing start")?;
        assert_eq!(infinite(&grid, start, 6)?, 16);
        assert_eq!(infinite(&grid, start, 10)?, 50);
        assert_eq!(infinite(&grid, start, 50)?, 1594);
        assert_eq!(infinite(&grid, start, 100)?, 6536);
        assert_eq!(infinite(&grid, start, 500)?, 167004);
        assert_eq!(infinite(&grid, start, DIRECT)?, 668697);
        Ok(())
    }

    const OPEN: &[u8] = br".....
.....
..S..
.....
.....
";

    #[test]
    fn extrapolated() -> Result<()> {
        let grid = IStr::new(OPEN).next::<Grid<u8>>()?;
        let start = grid.position(&b'S').context("missing start")?;

        // Without rocks every plot of matching parity within reach counts.
        assert_eq!(infinite(&grid, start, 1102)?, 1103 * 1103);
        assert_eq!(infinite(&grid, start, INFINITE_STEPS)?, 26501366 * 26501366);
        Ok(())
    }

    #[test]
    fn extrapolation_needs_square_map() -> Result<()> {
        let grid = IStr::new(b"...\n.S.\n").next::<Grid<u8>>()?;
        let start = grid.position(&b'S').context("missing start")?;
        assert!(infinite(&grid, start, DIRECT + 1).is_err());
        Ok(())
    }
}
