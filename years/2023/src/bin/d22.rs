use lib::prelude::*;

#[entry(input = "d22.txt", expect = (503, 98431))]
fn main(mut input: IStr) -> Result<(usize, usize)> {
    let bricks = parse(&mut input)?;
    let tower = Tower::settle(bricks)?;
    Ok((tower.safe(), tower.chain_reactions()))
}

type Brick = ([u32; 3], [u32; 3]);

fn parse(input: &mut IStr) -> Result<Vec<Brick>> {
    let mut bricks = Vec::new();

    for line in input.lines::<Split<'~', (Split<',', [u32; 3]>, Split<',', [u32; 3]>)>>() {
        let Split((Split(a), Split(b))) = line?;
        let lo = [a[0].min(b[0]), a[1].min(b[1]), a[2].min(b[2])];
        let hi = [a[0].max(b[0]), a[1].max(b[1]), a[2].max(b[2])];
        bricks.push((lo, hi));
    }

    Ok(bricks)
}

/// Bricks after falling into place, ordered from the ground up.
struct Tower {
    /// Bricks resting directly on each brick.
    supports: Vec<Vec<usize>>,
    /// Bricks each brick rests directly on.
    supported_by: Vec<Vec<usize>>,
}

impl Tower {
    fn settle(mut bricks: Vec<Brick>) -> Result<Self> {
        bricks.sort_by_key(|(lo, _)| lo[2]);

        let columns = bricks.iter().map(|(_, hi)| hi[0] + 1).max().unwrap_or(0) as usize;
        let rows = bricks.iter().map(|(_, hi)| hi[1] + 1).max().unwrap_or(0) as usize;

        // Height and brick at the top of every column.
        let mut top = Grid::new(columns, rows, (0u32, None::<usize>));

        let mut supports = vec![Vec::new(); bricks.len()];
        let mut supported_by = vec![Vec::new(); bricks.len()];

        for (n, (lo, hi)) in bricks.iter().enumerate() {
            let cells = (lo[1]..=hi[1]).flat_map(|y| {
                (lo[0]..=hi[0]).map(move |x| Point::at(x as usize, y as usize))
            });

            let rest = cells.clone().map(|p| top[p].0).max().unwrap_or(0);
            ensure!(rest < lo[2], "brick {n} overlaps with another");

            for p in cells {
                let (height, below) = top[p];

                if height == rest {
                    if let Some(below) = below {
                        if !supported_by[n].contains(&below) {
                            supported_by[n].push(below);
                            supports[below].push(n);
                        }
                    }
                }

                top[p] = (rest + 1 + hi[2] - lo[2], Some(n));
            }
        }

        Ok(Self {
            supports,
            supported_by,
        })
    }

    /// Bricks which can be removed without any other brick falling.
    fn safe(&self) -> usize {
        self.supports
            .iter()
            .filter(|above| above.iter().all(|&b| self.supported_by[b].len() > 1))
            .count()
    }

    /// Sum over every brick of the number of other bricks which would fall if
    /// it was removed.
    ///
    /// Supporting bricks always come before the bricks they support, so the
    /// falling bricks can be found in a single pass.
    fn chain_reactions(&self) -> usize {
        let n = self.supports.len();
        let mut falling = vec![false; n];
        let mut total = 0;

        for removed in 0..n {
            falling.fill(false);
            falling[removed] = true;

            for b in removed + 1..n {
                let below = &self.supported_by[b];

                if !below.is_empty() && below.iter().all(|&s| falling[s]) {
                    falling[b] = true;
                    total += 1;
                }
            }
        }

        total
    }
}
