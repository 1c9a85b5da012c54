use lib::prelude::*;

#[entry(input = "d10.txt", expect = (6864, 349))]
fn main(mut input: IStr) -> Result<(usize, usize)> {
    let mut grid = input.next::<Grid<u8>>()?;
    let path = find_loop(&mut grid)?;
    Ok((path.len() / 2, enclosed(&grid, &path)))
}

/// The two directions a pipe connects.
fn connections(pipe: u8) -> Option<[Dir; 2]> {
    Some(match pipe {
        b'|' => [Dir::Up, Dir::Down],
        b'-' => [Dir::Left, Dir::Right],
        b'L' => [Dir::Up, Dir::Right],
        b'J' => [Dir::Up, Dir::Left],
        b'7' => [Dir::Down, Dir::Left],
        b'F' => [Dir::Down, Dir::Right],
        _ => return None,
    })
}

/// Replace the start tile with the pipe which connects to its neighbours and
/// return every tile on the loop.
fn find_loop(grid: &mut Grid<u8>) -> Result<Vec<Point>> {
    let start = grid.position(&b'S').context("missing start")?;

    let open = Dir::CARDINAL
        .into_iter()
        .filter(|&dir| {
            grid.get(start.step(dir))
                .and_then(|&pipe| connections(pipe))
                .is_some_and(|c| c.contains(&dir.reverse()))
        })
        .collect::<ArrayVec<Dir, 4>>();

    let [a, b] = open[..] else {
        bail!("start does not connect to exactly two pipes");
    };

    let shape = b"|-LJ7F"
        .iter()
        .copied()
        .find(|&pipe| {
            connections(pipe).is_some_and(|c| c.contains(&a) && c.contains(&b))
        })
        .context("no pipe fits the start")?;

    debug!("start at {start:?} is {}", shape as char);
    grid[start] = shape;

    let mut path = vec![start];
    let mut pos = start;
    let mut dir = a;

    loop {
        pos = pos.step(dir);

        if pos == start {
            break;
        }

        let pipe = *grid.get(pos).context("loop leaves the grid")?;
        let [c1, c2] = connections(pipe).with_context(|| anyhow!("loop broken at {pos:?}"))?;

        dir = if c1 == dir.reverse() {
            c2
        } else if c2 == dir.reverse() {
            c1
        } else {
            bail!("loop broken at {pos:?}");
        };

        path.push(pos);
    }

    Ok(path)
}

/// Count tiles inside of the loop by scanning each row and flipping between
/// inside and outside at each loop tile which connects upwards.
fn enclosed(grid: &Grid<u8>, path: &[Point]) -> usize {
    let mut on_loop = Grid::new(grid.columns(), grid.rows(), false);

    for &p in path {
        on_loop[p] = true;
    }

    let mut count = 0;

    for y in 0..grid.rows() {
        let mut inside = false;

        for x in 0..grid.columns() {
            let p = Point::at(x, y);

            if on_loop[p] {
                if matches!(grid[p], b'|' | b'L' | b'J') {
                    inside = !inside;
                }
            } else if inside {
                count += 1;
            }
        }
    }

    count
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solve(input: &'static [u8]) -> Result<(usize, usize)> {
        let mut grid = IStr::new(input).next::<Grid<u8>>()?;
        let path = find_loop(&mut grid)?;
        Ok((path.len() / 2, enclosed(&grid, &path)))
    }

    #[test]
    fn farthest() -> Result<()> {
        let input = br"-L|F7
7S-7|
L|7||
-L-J|
L|-JF
";

        assert_eq!(solve(input)?.0, 4);
        Ok(())
    }

    #[test]
    fn enclosed_tiles() -> Result<()> {
        let input = br"...........
.S-------7.
.|F-----7|.
.||.....||.
.||.....||.
.|L-7.F-J|.
.|..|.|..|.
.L--J.L--J.
...........
";

        assert_eq!(solve(input)?.1, 4);

        let input = br".F----7F7F7F7F-7....
.|F--7||||||||FJ....
.||.FJ||||||||L7....
FJL7L7LJLJ||LJ.L-7..
L--J.L7...LJS7F-7L7.
....F-J..F7FJ|L7L7L7
....L7.F7||L7|.L7L7|
.....|FJLJ|FJ|F7|.LJ
....FJL-7.||.||||...
....L---J.LJ.LJLJ...
";

        assert_eq!(solve(input)?.1, 8);
        Ok(())
    }

    #[test]
    fn missing_start() {
        assert!(solve(b"...\n.|.\n...\n").is_err());
    }
}
