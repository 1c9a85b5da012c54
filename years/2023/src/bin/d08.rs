use std::collections::HashMap;

use lib::prelude::*;

#[entry(input = "d08.txt", expect = (17141, 10818234074807))]
fn main(mut input: IStr) -> Result<(u64, u64)> {
    let network = Network::parse(&mut input)?;
    let o1 = network.steps("AAA", |name| name == "ZZZ")?;
    Ok((o1, network.ghost_steps()?))
}

struct Network {
    turns: Vec<usize>,
    names: Vec<&'static str>,
    nodes: Vec<[usize; 2]>,
    lookup: HashMap<&'static str, usize>,
}

impl Network {
    fn parse(input: &mut IStr) -> Result<Self> {
        let turns = input
            .line::<&[u8]>()?
            .iter()
            .map(|b| match b {
                b'L' => Ok(0),
                b'R' => Ok(1),
                b => Err(anyhow!("bad turn `{}`", *b as char)),
            })
            .collect::<Result<Vec<_>>>()?;

        ensure!(!turns.is_empty(), "no instructions");
        input.ws()?;

        let mut names = Vec::new();
        let mut edges = Vec::new();

        for line in input.lines::<(W<&str>, W, W<&str>, W<&str>)>() {
            let (W(name), _, W(left), W(right)) = line?;
            let left = left.trim_start_matches('(').trim_end_matches(',');
            let right = right.trim_end_matches(')');
            names.push(name);
            edges.push([left, right]);
        }

        let lookup = names
            .iter()
            .enumerate()
            .map(|(n, &name)| (name, n))
            .collect::<HashMap<_, _>>();

        let mut nodes = Vec::with_capacity(edges.len());

        for [left, right] in edges {
            let left = *lookup.get(left).with_context(|| anyhow!("missing `{left}`"))?;
            let right = *lookup.get(right).with_context(|| anyhow!("missing `{right}`"))?;
            nodes.push([left, right]);
        }

        Ok(Self {
            turns,
            names,
            nodes,
            lookup,
        })
    }

    /// Number of steps from `start` until a node matching `is_end` is
    /// reached.
    fn steps(&self, start: &str, is_end: impl Fn(&str) -> bool) -> Result<u64> {
        let mut node = *self
            .lookup
            .get(start)
            .with_context(|| anyhow!("missing `{start}`"))?;

        let limit = self.turns.len() * self.nodes.len();

        for (step, &turn) in self.turns.iter().cycle().enumerate().take(limit) {
            node = self.nodes[node][turn];

            if is_end(self.names[node]) {
                return Ok(step as u64 + 1);
            }
        }

        bail!("`{start}` never reaches an end")
    }

    /// Every ghost starts on a node ending in `A` and loops through a node
    /// ending in `Z` at a fixed period.
    fn ghost_steps(&self) -> Result<u64> {
        let mut cycles = Vec::new();

        for name in self.names.iter().filter(|name| name.ends_with('A')) {
            let steps = self.steps(name, |name| name.ends_with('Z'))?;
            debug!("{name}: {steps}");
            cycles.push(steps);
        }

        ensure!(!cycles.is_empty(), "no starting nodes");
        Ok(lcm_all(cycles))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INPUT1: &[u8] = br"RL

AAA = (BBB, CCC)
BBB = (DDD, EEE)
CCC = (ZZZ, GGG)
DDD = (DDD, DDD)
EEE = (EEE, EEE)
GGG = (GGG, GGG)
ZZZ = (ZZZ, ZZZ)
";

    const INPUT2: &[u8] = br"LLR

AAA = (BBB, BBB)
BBB = (AAA, ZZZ)
ZZZ = (ZZZ, ZZZ)
";

    const INPUT3: &[u8] = br"LR

11A = (11B, XXX)
11B = (XXX, 11Z)
11Z = (11B, XXX)
22A = (22B, XXX)
22B = (22C, 22C)
22C = (22Z, 22Z)
22Z = (22B, 22B)
XXX = (XXX, XXX)
";

    #[test]
    fn camel() -> Result<()> {
        let network = Network::parse(&mut IStr::new(INPUT1))?;
        assert_eq!(network.steps("AAA", |name| name == "ZZZ")?, 2);
        let network = Network::parse(&mut IStr::new(INPUT2))?;
        assert_eq!(network.steps("AAA", |name| name == "ZZZ")?, 6);
        Ok(())
    }

    #[test]
    fn ghosts() -> Result<()> {
        let network = Network::parse(&mut IStr::new(INPUT3))?;
        assert!(network.steps("AAA", |name| name == "ZZZ").is_err());
        assert_eq!(network.ghost_steps()?, 6);
        Ok(())
    }
}
