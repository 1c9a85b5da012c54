use std::collections::HashMap;

use lib::prelude::*;

const CYCLES: usize = 1_000_000_000;

#[entry(input = "d14.txt", expect = (108935, 100876))]
fn main(mut input: IStr) -> Result<(usize, usize)> {
    let grid = input.next::<Grid<u8>>()?;

    let mut tilted = grid.clone();
    tilt_north(&mut tilted);

    Ok((load(&tilted), load(&spin_many(grid, CYCLES))))
}

/// Roll every round rock as far north as it goes.
fn tilt_north(grid: &mut Grid<u8>) {
    for x in 0..grid.columns() {
        let mut free = 0;

        for y in 0..grid.rows() {
            let p = Point::at(x, y);

            match grid[p] {
                b'#' => {
                    free = y + 1;
                }
                b'O' => {
                    grid[p] = b'.';
                    grid[Point::at(x, free)] = b'O';
                    free += 1;
                }
                _ => {}
            }
        }
    }
}

/// Tilt north, west, south and east.
fn spin(grid: Grid<u8>) -> Grid<u8> {
    let mut grid = grid;

    for _ in 0..4 {
        tilt_north(&mut grid);
        grid = grid.rotate_clockwise();
    }

    grid
}

fn spin_many(mut grid: Grid<u8>, cycles: usize) -> Grid<u8> {
    let mut seen = HashMap::new();
    let mut n = 0;

    while n < cycles {
        if let Some(start) = seen.insert(grid.clone(), n) {
            let period = n - start;
            debug!("cycle of period {period} starting at {start}");

            for _ in 0..(cycles - n) % period {
                grid = spin(grid);
            }

            return grid;
        }

        grid = spin(grid);
        n += 1;
    }

    grid
}

fn load(grid: &Grid<u8>) -> usize {
    grid.iter()
        .filter(|(_, c)| **c == b'O')
        .map(|(p, _)| grid.rows() - p.y as usize)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    const INPUT: &[u8] = br"O....#....
O.OO#....#
.....##...
OO.#O....O
.O.....O#.
O.#..O.#.#
..O..#O..O
.......O..
#....###..
#OO..#....
";

    const CYCLE1: &str = ".....#....
....#...O#
...OO##...
.OO#......
.....OOO#.
.O#...O#.#
....O#....
......OOOO
#...O###..
#..OO#....
";

    const CYCLE2: &str = ".....#....
....#...O#
.....##...
..O#......
.....OOO#.
.O#...O#.#
....O#...O
.......OOO
#..OO###..
#.OOO#...O
";

    const CYCLE3: &str = ".....#....
....#...O#
.....##...
..O#......
.....OOO#.
.O#...O#.#
....O#...O
.......OOO
#...O###.O
#.OOO#...O
";

    #[test]
    fn tilt() -> Result<()> {
        let mut grid = IStr::new(INPUT).next::<Grid<u8>>()?;
        tilt_north(&mut grid);
        assert_eq!(load(&grid), 136);
        Ok(())
    }

    #[test]
    fn spin_cycles() -> Result<()> {
        let grid = IStr::new(INPUT).next::<Grid<u8>>()?;

        let grid = spin(grid);
        assert_eq!(grid.to_string(), CYCLE1);
        let grid = spin(grid);
        assert_eq!(grid.to_string(), CYCLE2);
        let grid = spin(grid);
        assert_eq!(grid.to_string(), CYCLE3);
        Ok(())
    }

    #[test]
    fn many_cycles() -> Result<()> {
        let grid = IStr::new(INPUT).next::<Grid<u8>>()?;
        assert_eq!(load(&spin_many(grid, CYCLES)), 64);
        Ok(())
    }
}
