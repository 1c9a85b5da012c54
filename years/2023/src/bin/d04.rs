use lib::prelude::*;

#[entry(input = "d04.txt", expect = (23678, 15455663))]
fn main(mut input: IStr) -> Result<(u32, u32)> {
    let cards = parse(&mut input)?;
    Ok((points(&cards), copies(&cards)))
}

/// Number of winning numbers on each card.
fn parse(input: &mut IStr) -> Result<Vec<usize>> {
    let mut cards = Vec::new();

    for line in input.lines::<(W, W, Split<'|', (Vec<u32>, Vec<u32>)>)>() {
        let (_, _, Split((winning, have))) = line?;
        cards.push(have.iter().filter(|n| winning.contains(n)).count());
    }

    Ok(cards)
}

fn points(cards: &[usize]) -> u32 {
    cards
        .iter()
        .filter(|&&m| m > 0)
        .map(|&m| 1u32 << (m - 1))
        .sum()
}

fn copies(cards: &[usize]) -> u32 {
    let mut counts = vec![1u32; cards.len()];

    for (n, &m) in cards.iter().enumerate() {
        let count = counts[n];

        for c in counts.iter_mut().skip(n + 1).take(m) {
            *c += count;
        }
    }

    counts.iter().sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    const INPUT: &[u8] = br"Card 1: 41 48 83 86 17 | 83 86  6 31 17  9 48 53
Card 2: 13 32 20 16 61 | 61 30 68 82 17 32 24 19
Card 3:  1 21 53 59 44 | 69 82 63 72 16 21 14  1
Card 4: 41 92 73 84 69 | 59 84 76 51 58  5 54 83
Card 5: 87 83 26 28 32 | 88 30 70 12 93 22 82 36
Card 6: 31 18 13 56 72 | 74 77 10 23 35 67 36 11
";

    #[test]
    fn sample() -> Result<()> {
        let cards = parse(&mut IStr::new(INPUT))?;
        assert_eq!(cards, [4, 2, 2, 1, 0, 0]);
        assert_eq!(points(&cards), 13);
        assert_eq!(copies(&cards), 30);
        Ok(())
    }
}
