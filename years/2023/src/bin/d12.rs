use lib::prelude::*;

#[entry(input = "d12.txt", expect = (7221, 7139671893722))]
fn main(mut input: IStr) -> Result<(u64, u64)> {
    let mut o1 = 0;
    let mut o2 = 0;

    for line in input.lines::<(W<&[u8]>, Split<',', Vec<usize>>)>() {
        let (W(springs), Split(groups)) = line?;
        o1 += arrangements(springs, &groups);
        let (springs, groups) = unfold(springs, &groups);
        o2 += arrangements(&springs, &groups);
    }

    Ok((o1, o2))
}

/// Repeat the record five times, joined by unknown springs.
fn unfold(springs: &[u8], groups: &[usize]) -> (Vec<u8>, Vec<usize>) {
    let mut unfolded = Vec::with_capacity(springs.len() * 5 + 4);

    for n in 0..5 {
        if n > 0 {
            unfolded.push(b'?');
        }

        unfolded.extend_from_slice(springs);
    }

    (unfolded, groups.repeat(5))
}

/// Count the ways unknown springs can be assigned so that the damaged springs
/// form exactly the given groups.
///
/// `ways[i][j]` is the number of arrangements of `springs[i..]` with
/// `groups[j..]`.
fn arrangements(springs: &[u8], groups: &[usize]) -> u64 {
    let n = springs.len();
    let m = groups.len();
    let stride = m + 1;

    let mut ways = vec![0u64; (n + 1) * stride];
    ways[n * stride + m] = 1;

    for i in (0..n).rev() {
        for j in 0..=m {
            let mut count = 0;

            if springs[i] != b'#' {
                count += ways[(i + 1) * stride + j];
            }

            if springs[i] != b'.' && j < m {
                let end = i + groups[j];

                let fits = end <= n
                    && !springs[i..end].contains(&b'.')
                    && springs.get(end) != Some(&b'#');

                if fits {
                    count += ways[(end + 1).min(n) * stride + j + 1];
                }
            }

            ways[i * stride + j] = count;
        }
    }

    ways[0]
}

#[cfg(test)]
mod tests {
    use super::*;

    const INPUT: &[u8] = br"???.### 1,1,3
.??..??...?##. 1,1,3
?#?#?#?#?#?#?#? 1,3,1,6
????.#...#... 4,1,1
????.######..#####. 1,6,5
?###???????? 3,2,1
";

    #[test]
    fn sample() -> Result<()> {
        let mut input = IStr::new(INPUT);
        let mut folded = Vec::new();
        let mut unfolded = Vec::new();

        for line in input.lines::<(W<&[u8]>, Split<',', Vec<usize>>)>() {
            let (W(springs), Split(groups)) = line?;
            folded.push(arrangements(springs, &groups));
            let (springs, groups) = unfold(springs, &groups);
            unfolded.push(arrangements(&springs, &groups));
        }

        assert_eq!(folded, [1, 4, 1, 1, 4, 10]);
        assert_eq!(unfolded, [1, 16384, 1, 16, 2500, 506250]);
        assert_eq!(folded.iter().sum::<u64>(), 21);
        assert_eq!(unfolded.iter().sum::<u64>(), 525152);
        Ok(())
    }

    #[test]
    fn no_groups() {
        assert_eq!(arrangements(b"..??", &[]), 1);
        assert_eq!(arrangements(b"#", &[]), 0);
        assert_eq!(arrangements(b"", &[1]), 0);
    }
}
