use std::cmp::Reverse;
use std::collections::BinaryHeap;

use lib::prelude::*;

#[entry(input = "d17.txt", expect = (767, 904))]
fn main(mut input: IStr) -> Result<(u32, u32)> {
    let grid = parse(&mut input)?;
    Ok((heat_loss(&grid, 1, 3)?, heat_loss(&grid, 4, 10)?))
}

fn parse(input: &mut IStr) -> Result<Grid<u32>> {
    let grid = input.next::<Grid<u8>>()?;

    ensure!(
        grid.as_slice().iter().all(u8::is_ascii_digit),
        "heat loss must be digits"
    );

    Ok(grid.map(|&d| u32::from(d - b'0')))
}

/// Least heat lost moving from the top left to the bottom right, when the
/// crucible must move between `min` and `max` blocks before turning.
///
/// States are a position together with whether the last run was horizontal,
/// since every run is followed by a turn.
fn heat_loss(grid: &Grid<u32>, min: i64, max: i64) -> Result<u32> {
    let end = Point::at(grid.columns() - 1, grid.rows() - 1);

    let mut dist = vec![u32::MAX; grid.as_slice().len() * 2];
    let mut queue = BinaryHeap::new();

    for horizontal in [false, true] {
        dist[usize::from(horizontal)] = 0;
        queue.push(Reverse((0, Point::ZERO, horizontal)));
    }

    while let Some(Reverse((cost, pos, horizontal))) = queue.pop() {
        if pos == end {
            return Ok(cost);
        }

        let Some(index) = grid.index_of(pos) else {
            continue;
        };

        if cost > dist[index * 2 + usize::from(horizontal)] {
            continue;
        }

        let dirs = if horizontal {
            [Dir::Up, Dir::Down]
        } else {
            [Dir::Left, Dir::Right]
        };

        for dir in dirs {
            let mut cost = cost;

            for n in 1..=max {
                let next = pos + dir.offset() * n;

                let Some(index) = grid.index_of(next) else {
                    break;
                };

                cost += grid.as_slice()[index];

                if n < min {
                    continue;
                }

                let state = index * 2 + usize::from(!horizontal);

                if cost < dist[state] {
                    dist[state] = cost;
                    queue.push(Reverse((cost, next, !horizontal)));
                }
            }
        }
    }

    bail!("no path to {end:?}")
}
