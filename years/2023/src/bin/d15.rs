use lib::prelude::*;

#[entry(input = "d15.txt", expect = (504449, 262044))]
fn main(mut input: IStr) -> Result<(u32, usize)> {
    let line = input.line::<&[u8]>()?;
    let steps = line.split(|&b| b == b',').collect::<Vec<_>>();
    let o1 = steps.iter().map(|step| u32::from(hash(step))).sum();
    Ok((o1, focusing_power(&steps)?))
}

/// The HASH algorithm.
fn hash(data: &[u8]) -> u8 {
    data.iter()
        .fold(0u8, |h, &c| h.wrapping_add(c).wrapping_mul(17))
}

fn focusing_power(steps: &[&[u8]]) -> Result<usize> {
    let mut boxes: [Vec<(&[u8], usize)>; 256] = std::array::from_fn(|_| Vec::new());

    for &step in steps {
        if let Some(label) = step.strip_suffix(b"-") {
            boxes[hash(label) as usize].retain(|(l, _)| *l != label);
            continue;
        }

        let Some(at) = step.iter().position(|&b| b == b'=') else {
            bail!("bad step `{}`", step.as_bstr());
        };

        let (label, focal) = (&step[..at], &step[at + 1..]);
        let focal = focal.to_str()?.parse::<usize>()?;

        let lenses = &mut boxes[hash(label) as usize];

        match lenses.iter_mut().find(|(l, _)| *l == label) {
            Some((_, f)) => *f = focal,
            None => lenses.push((label, focal)),
        }
    }

    let mut power = 0;

    for (n, lenses) in boxes.iter().enumerate() {
        for (slot, &(_, focal)) in lenses.iter().enumerate() {
            power += (n + 1) * (slot + 1) * focal;
        }
    }

    Ok(power)
}

#[cfg(test)]
mod tests {
    use super::*;

    const INPUT: &[u8] = b"rn=1,cm-,qp=3,cm=2,qp-,pc=4,ot=9,ab=5,pc-,pc=6,ot=7\n";

    #[test]
    fn hashes() {
        assert_eq!(hash(b"HASH"), 52);
        assert_eq!(hash(b"rn=1"), 30);
    }

    #[test]
    fn sample() -> Result<()> {
        let line = IStr::new(INPUT).line::<&[u8]>()?;
        let steps = line.split(|&b| b == b',').collect::<Vec<_>>();
        assert_eq!(steps.iter().map(|s| u32::from(hash(s))).sum::<u32>(), 1320);
        assert_eq!(focusing_power(&steps)?, 145);
        Ok(())
    }

    #[test]
    fn bad_step() {
        assert!(focusing_power(&[&b"abc"[..]]).is_err());
        assert!(focusing_power(&[&b"abc=x"[..]]).is_err());
    }
}
