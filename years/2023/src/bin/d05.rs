use core::ops::Range;

use lib::prelude::*;

/// A single `(destination, source, length)` mapping.
type Mapping = (u64, u64, u64);

#[entry(input = "d05.txt", expect = (484023871, 46294175))]
fn main(mut input: IStr) -> Result<(u64, u64)> {
    let (seeds, maps) = parse(&mut input)?;
    Ok((lowest(&seeds, &maps)?, lowest_ranges(&seeds, &maps)?))
}

fn parse(input: &mut IStr) -> Result<(Vec<u64>, Vec<Vec<Mapping>>)> {
    let mut header = input.paragraph().context("missing seeds")?;
    let (W(_), seeds) = header.next::<(W, Vec<u64>)>()?;

    let mut maps = Vec::new();

    for mut p in input.paragraphs() {
        let _ = p.line::<&str>()?;
        maps.push(p.lines::<Mapping>().collect::<Result<Vec<_>, _>>()?);
    }

    Ok((seeds, maps))
}

fn map_one(value: u64, map: &[Mapping]) -> u64 {
    for &(dst, src, len) in map {
        if (src..src + len).contains(&value) {
            return value - src + dst;
        }
    }

    value
}

fn lowest(seeds: &[u64], maps: &[Vec<Mapping>]) -> Result<u64> {
    seeds
        .iter()
        .map(|&seed| maps.iter().fold(seed, |value, map| map_one(value, map)))
        .min()
        .context("no seeds")
}

/// Map ranges through a single map, splitting them where they partially
/// overlap a mapping.
fn map_ranges(mut queue: Vec<Range<u64>>, map: &[Mapping]) -> Vec<Range<u64>> {
    let mut out = Vec::with_capacity(queue.len());

    'next: while let Some(range) = queue.pop() {
        for &(dst, src, len) in map {
            let start = range.start.max(src);
            let end = range.end.min(src + len);

            if start >= end {
                continue;
            }

            out.push(start - src + dst..end - src + dst);

            if range.start < start {
                queue.push(range.start..start);
            }

            if end < range.end {
                queue.push(end..range.end);
            }

            continue 'next;
        }

        out.push(range);
    }

    out
}

fn lowest_ranges(seeds: &[u64], maps: &[Vec<Mapping>]) -> Result<u64> {
    ensure!(seeds.len() % 2 == 0, "seeds must come in pairs");

    let mut ranges = seeds
        .chunks_exact(2)
        .map(|pair| pair[0]..pair[0] + pair[1])
        .collect::<Vec<_>>();

    for map in maps {
        ranges = map_ranges(ranges, map);
    }

    ranges
        .iter()
        .map(|range| range.start)
        .min()
        .context("no seed ranges")
}

#[cfg(test)]
mod tests {
    use super::*;

    const INPUT: &[u8] = br"seeds: 79 14 55 13

seed-to-soil map:
50 98 2
52 50 48

soil-to-fertilizer map:
0 15 37
37 52 2
39 0 15

fertilizer-to-water map:
49 53 8
0 11 42
42 0 7
57 7 4

water-to-light map:
88 18 7
18 25 70

light-to-temperature map:
45 77 23
81 45 19
68 64 13

temperature-to-humidity map:
0 69 1
1 0 69

humidity-to-location map:
60 56 37
56 93 4
";

    #[test]
    fn sample() -> Result<()> {
        let (seeds, maps) = parse(&mut IStr::new(INPUT))?;
        assert_eq!(seeds, [79, 14, 55, 13]);
        assert_eq!(maps.len(), 7);
        assert_eq!(lowest(&seeds, &maps)?, 35);
        assert_eq!(lowest_ranges(&seeds, &maps)?, 46);
        Ok(())
    }

    #[test]
    fn split_partial_overlap() {
        let mut ranges = map_ranges(vec![5..15], &[(100, 10, 10)]);
        ranges.sort_by_key(|r| r.start);
        assert_eq!(ranges, [5..10, 100..105]);
    }
}
