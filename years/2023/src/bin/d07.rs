use lib::prelude::*;

#[entry(input = "d07.txt", expect = (253638586, 253253225))]
fn main(mut input: IStr) -> Result<(u64, u64)> {
    let hands = parse(&mut input)?;
    Ok((winnings(&hands, false)?, winnings(&hands, true)?))
}

type Hand = ([u8; 5], u64);

fn parse(input: &mut IStr) -> Result<Vec<Hand>> {
    let mut hands = Vec::new();

    for line in input.lines::<(W<&str>, u64)>() {
        let (W(cards), bid) = line?;

        let Ok(cards) = <[u8; 5]>::try_from(cards.as_bytes()) else {
            bail!("hand `{cards}` does not have five cards");
        };

        hands.push((cards, bid));
    }

    Ok(hands)
}

/// Strength of a single card, where a joker is the weakest card.
fn strength(card: u8, jokers: bool) -> Result<u8> {
    Ok(match card {
        b'2'..=b'9' => card - b'0',
        b'T' => 10,
        b'J' if jokers => 1,
        b'J' => 11,
        b'Q' => 12,
        b'K' => 13,
        b'A' => 14,
        _ => bail!("bad card `{}`", card as char),
    })
}

/// Type of a hand, from high card (0) up to five of a kind (6).
fn kind(strengths: &[u8; 5], jokers: bool) -> u8 {
    let mut counts = [0u8; 15];

    for &s in strengths {
        counts[s as usize] += 1;
    }

    let wild = if jokers { std::mem::take(&mut counts[1]) } else { 0 };

    counts.sort_unstable_by(|a, b| b.cmp(a));
    counts[0] += wild;

    match (counts[0], counts[1]) {
        (5, _) => 6,
        (4, _) => 5,
        (3, 2) => 4,
        (3, _) => 3,
        (2, 2) => 2,
        (2, _) => 1,
        _ => 0,
    }
}

fn winnings(hands: &[Hand], jokers: bool) -> Result<u64> {
    let mut ranked = Vec::with_capacity(hands.len());

    for &(cards, bid) in hands {
        let mut strengths = [0; 5];

        for (s, &card) in strengths.iter_mut().zip(&cards) {
            *s = strength(card, jokers)?;
        }

        ranked.push((kind(&strengths, jokers), strengths, bid));
    }

    ranked.sort_unstable();

    Ok(ranked
        .iter()
        .zip(1..)
        .map(|(&(_, _, bid), rank)| bid * rank)
        .sum())
}

#[cfg(test)]
mod tests {
    use super::*;

    const INPUT: &[u8] = br"32T3K 765
T55J5 684
KK677 28
KTJJT 220
QQQJA 483
";

    #[test]
    fn sample() -> Result<()> {
        let hands = parse(&mut IStr::new(INPUT))?;
        assert_eq!(winnings(&hands, false)?, 6440);
        assert_eq!(winnings(&hands, true)?, 5905);
        Ok(())
    }

    #[test]
    fn all_jokers() {
        assert_eq!(kind(&[1; 5], true), 6);
        assert_eq!(kind(&[1, 1, 2, 3, 4], true), 3);
        assert_eq!(kind(&[11, 11, 2, 3, 4], false), 1);
        assert!(strength(b'X', false).is_err());
    }
}
