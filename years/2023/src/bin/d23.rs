use std::collections::HashMap;

use lib::prelude::*;

#[entry(input = "d23.txt", expect = (2170, 6502))]
fn main(mut input: IStr) -> Result<(u32, u32)> {
    let grid = input.next::<Grid<u8>>()?;
    Ok((longest(&grid, true)?, longest(&grid, false)?))
}

/// Direction a slope forces you to move in.
fn slope(tile: u8) -> Option<Dir> {
    match tile {
        b'^' => Some(Dir::Up),
        b'v' => Some(Dir::Down),
        b'<' => Some(Dir::Left),
        b'>' => Some(Dir::Right),
        _ => None,
    }
}

fn is_open(grid: &Grid<u8>, p: Point) -> bool {
    grid.get(p).is_some_and(|&t| t != b'#')
}

/// Test if moving from `from` in direction `dir` is allowed.
fn can_move(grid: &Grid<u8>, from: Point, dir: Dir, slopes: bool) -> bool {
    let to = from.step(dir);

    if !is_open(grid, to) {
        return false;
    }

    if !slopes {
        return true;
    }

    [grid[from], grid[to]]
        .into_iter()
        .all(|t| slope(t).map_or(true, |d| d == dir))
}

/// Trails compressed into a graph between junctions, weighted by the number of
/// steps between them.
struct Graph {
    edges: Vec<Vec<(usize, u32)>>,
    start: usize,
    end: usize,
}

impl Graph {
    fn new(grid: &Grid<u8>, slopes: bool) -> Result<Self> {
        let start = gap(grid, 0)?;
        let end = gap(grid, grid.rows() - 1)?;

        let mut nodes = HashMap::new();
        nodes.insert(start, 0);
        nodes.insert(end, 1);

        for (p, &t) in grid.iter() {
            if t != b'#' && p.neighbours(false).filter(|&(_, n)| is_open(grid, n)).count() > 2 {
                let next = nodes.len();
                nodes.entry(p).or_insert(next);
            }
        }

        ensure!(nodes.len() <= 64, "too many junctions ({})", nodes.len());

        let mut edges = vec![Vec::new(); nodes.len()];

        for (&p, &from) in &nodes {
            for dir in Dir::CARDINAL {
                if let Some((to, len)) = walk(grid, &nodes, p, dir, slopes) {
                    edges[from].push((to, len));
                }
            }
        }

        Ok(Self {
            edges,
            start: 0,
            end: 1,
        })
    }

    /// Longest path from start to end which never visits a junction twice.
    fn longest(&self) -> Option<u32> {
        let mut best = None;
        let mut visited = 0u64;
        visited.set_bit(self.start as u32);
        self.search(self.start, visited, 0, &mut best);
        best
    }

    fn search(&self, node: usize, visited: u64, len: u32, best: &mut Option<u32>) {
        if node == self.end {
            *best = Some(best.map_or(len, |b| b.max(len)));
            return;
        }

        for &(next, edge) in &self.edges[node] {
            if visited.test_bit(next as u32) {
                continue;
            }

            let mut visited = visited;
            visited.set_bit(next as u32);
            self.search(next, visited, len + edge, best);
        }
    }
}

/// Position of the single gap in the given row.
fn gap(grid: &Grid<u8>, y: usize) -> Result<Point> {
    let row = grid.row(y).context("missing row")?;
    let x = row.iter().position(|&t| t == b'.').context("no gap in row")?;
    Ok(Point::at(x, y))
}

/// Walk from a junction in the given direction until the next junction.
fn walk(
    grid: &Grid<u8>,
    nodes: &HashMap<Point, usize>,
    from: Point,
    dir: Dir,
    slopes: bool,
) -> Option<(usize, u32)> {
    if !can_move(grid, from, dir, slopes) {
        return None;
    }

    let mut pos = from.step(dir);
    let mut dir = dir;
    let mut len = 1;

    loop {
        if let Some(&node) = nodes.get(&pos) {
            return Some((node, len));
        }

        let back = dir.reverse();
        let next = Dir::CARDINAL
            .into_iter()
            .find(|&d| d != back && is_open(grid, pos.step(d)))?;

        if !can_move(grid, pos, next, slopes) {
            return None;
        }

        pos = pos.step(next);
        dir = next;
        len += 1;
    }
}

fn longest(grid: &Grid<u8>, slopes: bool) -> Result<u32> {
    Graph::new(grid, slopes)?
        .longest()
        .context("no path to the end")
}

#[cfg(test)]
mod tests {
    use super::*;

    const INPUT: &[u8] = br"#.#####################
#.......#########...###
#######.#########.#.###
###.....#.>.>.###.#.###
###v#####.#v#.###.#.###
###.>...#.#.#.....#...#
###v###.#.#.#########.#
###...#.#.#.......#...#
#####.#.#.#######.#.###
#.....#.#.#.......#...#
#.#####.#.#.#########v#
#.#...#...#...###...>.#
#.#.#v#######v###.###v#
#...#.>.#...>.>.#.###.#
#####v#.#.###v#.#.###.#
#.....#...#...#.#.#...#
#.#########.###.#.#.###
#...###...#...#...#.###
###.###.#.###v#####v###
#...#...#.#.>.#...>.###
#.###.###.#.###.#.#v###
#.....###...###...#...#
#####################.#
";

    #[test]
    fn sample() -> Result<()> {
        let grid = IStr::new(INPUT).next::<Grid<u8>>()?;
        assert_eq!(longest(&grid, true)?, 94);
        assert_eq!(longest(&grid, false)?, 154);
        Ok(())
    }

    #[test]
    fn junctions_are_visited_once() {
        // 0 - 1 - 3, with a long detour 1 - 2 - 1 that would revisit 1.
        let graph = Graph {
            edges: vec![
                vec![(1, 1)],
                vec![(0, 1), (2, 10), (3, 1)],
                vec![(1, 10)],
                vec![(1, 1)],
            ],
            start: 0,
            end: 3,
        };

        assert_eq!(graph.longest(), Some(2));
    }
}
