use std::collections::HashMap;

use lib::prelude::*;

#[entry(input = "d03.txt", expect = (560670, 91622824))]
fn main(mut input: IStr) -> Result<(u32, u32)> {
    let grid = input.next::<Grid<u8>>()?;
    Ok(solve(&grid))
}

/// A number in the schematic.
struct Number {
    value: u32,
    start: Point,
    len: usize,
}

impl Number {
    /// Cells surrounding the number, including diagonally.
    fn border(&self) -> impl Iterator<Item = Point> + '_ {
        let len = self.len as i64;

        (-1..=len).flat_map(move |dx| {
            [-1, 0, 1].into_iter().filter_map(move |dy| {
                if dy == 0 && (0..len).contains(&dx) {
                    return None;
                }

                Some(self.start + Point::new(dx, dy))
            })
        })
    }
}

fn numbers(grid: &Grid<u8>) -> Vec<Number> {
    let mut numbers = Vec::new();

    for (y, row) in grid.rows_iter().enumerate() {
        let mut x = 0;

        while x < row.len() {
            if !row[x].is_ascii_digit() {
                x += 1;
                continue;
            }

            let start = x;
            let mut value = 0;

            while let Some(d) = row.get(x).filter(|d| d.is_ascii_digit()) {
                value = value * 10 + u32::from(d - b'0');
                x += 1;
            }

            numbers.push(Number {
                value,
                start: Point::at(start, y),
                len: x - start,
            });
        }
    }

    numbers
}

fn solve(grid: &Grid<u8>) -> (u32, u32) {
    let mut o1 = 0;
    let mut gears = HashMap::<Point, Vec<u32>>::new();

    for number in numbers(grid) {
        let mut is_part = false;

        for p in number.border() {
            let Some(&c) = grid.get(p) else {
                continue;
            };

            if c == b'.' || c.is_ascii_digit() {
                continue;
            }

            is_part = true;

            if c == b'*' {
                gears.entry(p).or_default().push(number.value);
            }
        }

        if is_part {
            o1 += number.value;
        }
    }

    let o2 = gears
        .values()
        .filter_map(|values| match values[..] {
            [a, b] => Some(a * b),
            _ => None,
        })
        .sum();

    (o1, o2)
}

#[cfg(test)]
mod tests {
    use super::*;

    const INPUT: &[u8] = br"467..114..
...*......
..35..633.
......#...
617*......
.....+.58.
..592.....
......755.
...$.*....
.664.598..
";

    #[test]
    fn sample() -> Result<()> {
        let grid = IStr::new(INPUT).next::<Grid<u8>>()?;
        assert_eq!(solve(&grid), (4361, 467835));
        Ok(())
    }

    #[test]
    fn number_at_edge() -> Result<()> {
        let grid = IStr::new(b"..12\n...#\n").next::<Grid<u8>>()?;
        assert_eq!(solve(&grid), (12, 0));
        Ok(())
    }
}
