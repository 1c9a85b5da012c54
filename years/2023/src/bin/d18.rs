use lib::prelude::*;

#[entry(input = "d18.txt", expect = (36725, 97874103749720))]
fn main(mut input: IStr) -> Result<(i64, i64)> {
    let (plan, colors) = parse(&mut input)?;
    Ok((lagoon(&plan), lagoon(&colors)))
}

type Step = (Dir, i64);

/// A dig instruction, both as written and as decoded from its color.
struct Instruction {
    plan: Step,
    color: Step,
}

lib::from_input! {
    |((B(d), n, W(color))): (B, i64, W<&'static str>)| -> Instruction {
        let dir = match d {
            b'U' => Dir::Up,
            b'D' => Dir::Down,
            b'L' => Dir::Left,
            b'R' => Dir::Right,
            d => bail!("bad direction `{}`", d as char),
        };

        Ok(Instruction {
            plan: (dir, n),
            color: decode(color)?,
        })
    }
}

fn parse(input: &mut IStr) -> Result<(Vec<Step>, Vec<Step>)> {
    let mut plan = Vec::new();
    let mut colors = Vec::new();

    for line in input.lines::<Instruction>() {
        let line = line?;
        plan.push(line.plan);
        colors.push(line.color);
    }

    Ok((plan, colors))
}

/// Decode a color like `(#70c710)` into five hex digits of distance followed
/// by a direction.
fn decode(color: &str) -> Result<Step> {
    let hex = color
        .strip_prefix("(#")
        .and_then(|c| c.strip_suffix(')'))
        .filter(|c| c.len() == 6 && c.is_ascii())
        .with_context(|| anyhow!("bad color `{color}`"))?;

    let (n, d) = hex.split_at(5);

    let dir = match d {
        "0" => Dir::Right,
        "1" => Dir::Down,
        "2" => Dir::Left,
        "3" => Dir::Up,
        d => bail!("bad direction `{d}`"),
    };

    Ok((dir, i64::from_str_radix(n, 16)?))
}

/// Area dug out by the plan, including the trench itself.
///
/// The shoelace formula gives the area inside the center of the trench, half
/// of the trench lies outside of it and the corners add up to one more.
fn lagoon(plan: &[Step]) -> i64 {
    let mut pos = Point::ZERO;
    let mut area = 0;
    let mut perimeter = 0;

    for &(dir, n) in plan {
        let next = pos + dir.offset() * n;
        area += pos.x * next.y - next.x * pos.y;
        perimeter += n;
        pos = next;
    }

    area.abs() / 2 + perimeter / 2 + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    const INPUT: &[u8] = br"R 6 (#70c710)
D 5 (#0dc571)
L 2 (#5713f0)
D 2 (#d2c081)
R 2 (#59c680)
D 2 (#411b91)
L 5 (#8ceee2)
U 2 (#caa173)
L 1 (#1b58a2)
U 2 (#caa171)
R 2 (#7807d2)
U 3 (#a77fa3)
L 2 (#015232)
U 2 (#7a21e3)
";

    #[test]
    fn sample() -> Result<()> {
        let (plan, colors) = parse(&mut IStr::new(INPUT))?;
        assert_eq!(colors[0], (Dir::Right, 461937));
        assert_eq!(lagoon(&plan), 62);
        assert_eq!(lagoon(&colors), 952408144115);
        Ok(())
    }

    #[test]
    fn bad_color() {
        assert!(decode("(#70c71)").is_err());
        assert!(decode("(#70c714)").is_err());
        assert!(parse(&mut IStr::new(b"R 6 (#70c710)\nX 1 (#70c710)\n")).is_err());
    }
}
