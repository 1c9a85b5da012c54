use lib::prelude::*;

#[entry(input = "d13.txt", expect = (40006, 28627))]
fn main(mut input: IStr) -> Result<(usize, usize)> {
    let mut o1 = 0;
    let mut o2 = 0;

    for mut p in input.paragraphs() {
        let pattern = Pattern::new(&p.next::<Grid<u8>>()?)?;
        o1 += pattern.summarize(0)?;
        o2 += pattern.summarize(1)?;
    }

    Ok((o1, o2))
}

/// Rows and columns of a pattern as bitmasks of rocks.
struct Pattern {
    rows: Vec<u64>,
    columns: Vec<u64>,
}

impl Pattern {
    fn new(grid: &Grid<u8>) -> Result<Self> {
        ensure!(
            grid.columns() <= 64 && grid.rows() <= 64,
            "pattern larger than 64 cells"
        );

        let mut rows = vec![0u64; grid.rows()];
        let mut columns = vec![0u64; grid.columns()];

        for (p, &c) in grid.iter() {
            if c == b'#' {
                rows[p.y as usize].set_bit(p.x as u32);
                columns[p.x as usize].set_bit(p.y as u32);
            }
        }

        Ok(Self { rows, columns })
    }

    /// Columns left of a vertical mirror, or 100 times the rows above a
    /// horizontal one, where the reflection differs in exactly `smudges`
    /// cells.
    fn summarize(&self, smudges: u32) -> Result<usize> {
        if let Some(n) = mirror(&self.columns, smudges) {
            return Ok(n);
        }

        if let Some(n) = mirror(&self.rows, smudges) {
            return Ok(n * 100);
        }

        bail!("no mirror with {smudges} smudges")
    }
}

fn mirror(lines: &[u64], smudges: u32) -> Option<usize> {
    (1..lines.len()).find(|&at| {
        let (before, after) = lines.split_at(at);

        let differences = before
            .iter()
            .rev()
            .zip(after)
            .map(|(a, b)| (a ^ b).count_ones())
            .sum::<u32>();

        differences == smudges
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const INPUT: &[u8] = br"#.##..##.
..#.##.#.
##......#
##......#
..#.##.#.
..##..##.
#.#.##.#.

#...##..#
#....#..#
..##..###
#####.##.
#####.##.
..##..###
#....#..#
";

    #[test]
    fn sample() -> Result<()> {
        let mut input = IStr::new(INPUT);
        let mut patterns = Vec::new();

        for mut p in input.paragraphs() {
            patterns.push(Pattern::new(&p.next::<Grid<u8>>()?)?);
        }

        assert_eq!(patterns.len(), 2);
        assert_eq!(patterns[0].summarize(0)?, 5);
        assert_eq!(patterns[1].summarize(0)?, 400);
        assert_eq!(patterns[0].summarize(1)?, 300);
        assert_eq!(patterns[1].summarize(1)?, 100);
        Ok(())
    }
}
