use lib::prelude::*;

#[entry(input = "d16.txt", expect = (7728, 8061))]
fn main(mut input: IStr) -> Result<(u32, u32)> {
    let grid = input.next::<Grid<u8>>()?;
    let mut beams = Beams::new(&grid);
    let o1 = beams.energize(Point::ZERO, Dir::Right);
    Ok((o1, beams.best()))
}

/// Beam tracing with reusable visited sets.
struct Beams<'a> {
    grid: &'a Grid<u8>,
    /// One bit per tile and direction a beam has passed through it in.
    visited: Vec<u64>,
    energized: Vec<u64>,
    queue: Vec<(Point, Dir)>,
}

impl<'a> Beams<'a> {
    fn new(grid: &'a Grid<u8>) -> Self {
        let tiles = grid.columns() * grid.rows();

        Self {
            grid,
            visited: vec![0; (tiles * 4).div_ceil(64)],
            energized: vec![0; tiles.div_ceil(64)],
            queue: Vec::new(),
        }
    }

    /// Count energized tiles for a beam entering at `start` heading in `dir`.
    fn energize(&mut self, start: Point, dir: Dir) -> u32 {
        self.visited.clear_bits();
        self.energized.clear_bits();
        self.queue.clear();
        self.queue.push((start, dir));

        while let Some((pos, dir)) = self.queue.pop() {
            let Some(index) = self.grid.index_of(pos) else {
                continue;
            };

            let bit = (index * 4 + dir.index()) as u32;

            if self.visited.test_bit(bit) {
                continue;
            }

            self.visited.set_bit(bit);
            self.energized.set_bit(index as u32);

            let (a, b) = redirect(self.grid[pos], dir);
            self.queue.push((pos.step(a), a));

            if let Some(b) = b {
                self.queue.push((pos.step(b), b));
            }
        }

        self.energized.count_ones()
    }

    /// Most energized tiles for a beam entering from any edge.
    fn best(&mut self) -> u32 {
        let columns = self.grid.columns();
        let rows = self.grid.rows();
        let mut best = 0;

        for x in 0..columns {
            best = best.max(self.energize(Point::at(x, 0), Dir::Down));
            best = best.max(self.energize(Point::at(x, rows - 1), Dir::Up));
        }

        for y in 0..rows {
            best = best.max(self.energize(Point::at(0, y), Dir::Right));
            best = best.max(self.energize(Point::at(columns - 1, y), Dir::Left));
        }

        best
    }
}

/// Directions a beam continues in after entering a tile.
fn redirect(tile: u8, dir: Dir) -> (Dir, Option<Dir>) {
    match (tile, dir) {
        (b'/', Dir::Right) | (b'\\', Dir::Left) => (Dir::Up, None),
        (b'/', Dir::Left) | (b'\\', Dir::Right) => (Dir::Down, None),
        (b'/', Dir::Up) | (b'\\', Dir::Down) => (Dir::Right, None),
        (b'/', Dir::Down) | (b'\\', Dir::Up) => (Dir::Left, None),
        (b'|', Dir::Left | Dir::Right) => (Dir::Up, Some(Dir::Down)),
        (b'-', Dir::Up | Dir::Down) => (Dir::Left, Some(Dir::Right)),
        _ => (dir, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INPUT: &[u8] = br".|...\....
|.-.\.....
.....|-...
........|.
..........
.........\
..../.\\..
.-.-/..|..
.|....-|.\
..//.|....
";

    #[test]
    fn sample() -> Result<()> {
        let grid = IStr::new(INPUT).next::<Grid<u8>>()?;
        let mut beams = Beams::new(&grid);
        assert_eq!(beams.energize(Point::ZERO, Dir::Right), 46);
        assert_eq!(beams.best(), 51);
        Ok(())
    }

    #[test]
    fn straight_through() -> Result<()> {
        let grid = IStr::new(b"...\n").next::<Grid<u8>>()?;
        let mut beams = Beams::new(&grid);
        assert_eq!(beams.energize(Point::ZERO, Dir::Right), 3);
        assert_eq!(beams.energize(Point::new(2, 0), Dir::Up), 1);
        Ok(())
    }
}
