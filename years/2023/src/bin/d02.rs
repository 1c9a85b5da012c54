use lib::prelude::*;

const LIMITS: [u32; 3] = [12, 13, 14];

#[entry(input = "d02.txt", expect = (2006, 84911))]
fn main(mut input: IStr) -> Result<(u32, u32)> {
    totals(&mut input)
}

/// Sum the ids of possible games and the powers of every game.
fn totals(input: &mut IStr) -> Result<(u32, u32)> {
    let mut o1 = 0;
    let mut o2 = 0;

    while let Some(line) = input.try_line::<&str>()? {
        let (id, max) = game(line)?;

        if max.iter().zip(LIMITS).all(|(n, limit)| *n <= limit) {
            o1 += id;
        }

        o2 += max.iter().product::<u32>();
    }

    Ok((o1, o2))
}

/// Parse a game into its id and the largest number of red, green and blue
/// cubes shown at once.
fn game(line: &str) -> Result<(u32, [u32; 3])> {
    let (head, draws) = line.split_once(": ").context("missing `: `")?;
    let id = head
        .strip_prefix("Game ")
        .context("missing `Game`")?
        .parse()?;

    let mut max = [0u32; 3];

    for cubes in draws.split([';', ',']) {
        let (n, color) = cubes.trim().split_once(' ').context("bad cubes")?;
        let n = n.parse::<u32>()?;

        let index = match color {
            "red" => 0,
            "green" => 1,
            "blue" => 2,
            other => bail!("unknown color `{other}`"),
        };

        max[index] = max[index].max(n);
    }

    Ok((id, max))
}

#[cfg(test)]
mod tests {
    use super::*;

    const INPUT: &[u8] = br"Game 1: 3 blue, 4 red; 1 red, 2 green, 6 blue; 2 green
Game 2: 1 blue, 2 green; 3 green, 4 blue, 1 red; 1 green, 1 blue
Game 3: 8 green, 6 blue, 20 red; 5 blue, 4 red, 13 green; 5 green, 1 red
Game 4: 1 green, 3 red, 6 blue; 3 green, 6 red; 3 green, 15 blue, 14 red
Game 5: 6 red, 1 blue, 3 green; 2 blue, 1 red, 2 green";

    #[test]
    fn sample() -> Result<()> {
        let third = game("Game 3: 8 green, 6 blue, 20 red; 5 blue, 4 red, 13 green")?;
        assert_eq!(third, (3, [20, 13, 6]));
        assert_eq!(totals(&mut IStr::new(INPUT))?, (8, 2286));
        Ok(())
    }

    #[test]
    fn unknown_color() {
        assert!(game("Game 1: 3 purple").is_err());
    }
}
