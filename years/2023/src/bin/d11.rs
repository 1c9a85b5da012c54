use lib::prelude::*;

#[entry(input = "d11.txt", expect = (10276166, 598693078798))]
fn main(mut input: IStr) -> Result<(u64, u64)> {
    let grid = input.next::<Grid<u8>>()?;
    Ok((distances(&grid, 2), distances(&grid, 1_000_000)))
}

/// Sum of distances between every pair of galaxies, where empty rows and
/// columns are `factor` times as large.
fn distances(grid: &Grid<u8>, factor: u64) -> u64 {
    let mut xs = Vec::new();
    let mut ys = Vec::new();

    for (p, &c) in grid.iter() {
        if c == b'#' {
            xs.push(p.x as u64);
            ys.push(p.y as u64);
        }
    }

    axis(xs, grid.columns(), factor) + axis(ys, grid.rows(), factor)
}

/// Sum of pairwise distances along a single axis.
fn axis(mut values: Vec<u64>, len: usize, factor: u64) -> u64 {
    let mut occupied = vec![false; len];

    for &v in &values {
        occupied[v as usize] = true;
    }

    let mut expanded = Vec::with_capacity(len);
    let mut offset = 0;

    for &o in &occupied {
        expanded.push(offset);
        offset += if o { 1 } else { factor };
    }

    for v in &mut values {
        *v = expanded[*v as usize];
    }

    values.sort_unstable();

    let mut sum = 0;
    let mut prefix = 0;

    for (n, &v) in values.iter().enumerate() {
        sum += v * n as u64 - prefix;
        prefix += v;
    }

    sum
}

#[cfg(test)]
mod tests {
    use super::*;

    const INPUT: &[u8] = br"...#......
.......#..
#.........
..........
......#...
.#........
.........#
..........
.......#..
#...#.....
";

    #[test]
    fn sample() -> Result<()> {
        let grid = IStr::new(INPUT).next::<Grid<u8>>()?;
        assert_eq!(distances(&grid, 2), 374);
        assert_eq!(distances(&grid, 10), 1030);
        assert_eq!(distances(&grid, 100), 8410);
        Ok(())
    }
}
