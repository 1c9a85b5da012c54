use std::collections::{HashMap, VecDeque};

use lib::prelude::*;

/// Number of wires to disconnect.
const CUT: usize = 3;

#[entry(input = "d25.txt", expect = 582590)]
fn main(mut input: IStr) -> Result<usize> {
    let graph = parse(&mut input)?;
    graph.split()
}

/// Undirected graph of components where every wire has a capacity of one in
/// each direction.
struct Graph {
    names: Vec<&'static str>,
    /// Neighbour, wire and the sign of flow going towards the neighbour.
    adjacent: Vec<Vec<(usize, usize, i8)>>,
    wires: usize,
}

fn parse(input: &mut IStr) -> Result<Graph> {
    let mut lookup = HashMap::new();
    let mut graph = Graph {
        names: Vec::new(),
        adjacent: Vec::new(),
        wires: 0,
    };

    let mut node = |graph: &mut Graph, name: &'static str| {
        *lookup.entry(name).or_insert_with(|| {
            graph.names.push(name);
            graph.adjacent.push(Vec::new());
            graph.names.len() - 1
        })
    };

    for line in input.lines::<(W<&str>, Vec<W<&str>>)>() {
        let (W(name), others) = line?;

        let name = name
            .strip_suffix(':')
            .with_context(|| anyhow!("missing `:` after `{name}`"))?;

        let a = node(&mut graph, name);

        for W(other) in others {
            let b = node(&mut graph, other);
            let wire = graph.wires;
            graph.adjacent[a].push((b, wire, 1));
            graph.adjacent[b].push((a, wire, -1));
            graph.wires += 1;
        }
    }

    Ok(graph)
}

/// Scratch state for finding augmenting paths.
struct Flow {
    flow: Vec<i8>,
    seen: Vec<bool>,
    parent: Vec<(usize, usize, i8)>,
    queue: VecDeque<usize>,
}

impl Graph {
    /// Find the wires to cut, and multiply the sizes of the two groups that
    /// remain.
    ///
    /// The first component lies in one of the groups, so the maximum flow
    /// from it to any component in the other group is exactly the size of the
    /// cut. Components in the same group are connected by more paths than
    /// that.
    fn split(&self) -> Result<usize> {
        let n = self.adjacent.len();

        let mut state = Flow {
            flow: vec![0; self.wires],
            seen: vec![false; n],
            parent: vec![(0, 0, 0); n],
            queue: VecDeque::new(),
        };

        for sink in 1..n {
            state.flow.fill(0);
            let mut total = 0;

            while total <= CUT && self.augment(0, sink, &mut state) {
                total += 1;
            }

            if total != CUT {
                continue;
            }

            // Components still reachable after the last search form the first
            // group.
            let k = state.seen.iter().filter(|&&seen| seen).count();

            if k == 1 || k == n - 1 {
                continue;
            }

            for (node, adjacent) in self.adjacent.iter().enumerate() {
                for &(to, ..) in adjacent {
                    if state.seen[node] && !state.seen[to] {
                        debug!("cut {} / {}", self.names[node], self.names[to]);
                    }
                }
            }

            return Ok(k * (n - k));
        }

        bail!("no cut of {CUT} wires splits the components")
    }

    /// Search for a path with remaining capacity from `source` to `sink` and
    /// push one unit of flow through it.
    fn augment(&self, source: usize, sink: usize, state: &mut Flow) -> bool {
        state.seen.fill(false);
        state.queue.clear();

        state.seen[source] = true;
        state.queue.push_back(source);

        while let Some(node) = state.queue.pop_front() {
            if node == sink {
                let mut at = sink;

                while at != source {
                    let (prev, wire, sign) = state.parent[at];
                    state.flow[wire] += sign;
                    at = prev;
                }

                return true;
            }

            for &(to, wire, sign) in &self.adjacent[node] {
                if state.seen[to] || sign * state.flow[wire] >= 1 {
                    continue;
                }

                state.seen[to] = true;
                state.parent[to] = (node, wire, sign);
                state.queue.push_back(to);
            }
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INPUT: &[u8] = br"jqt: rhn xhk nvd
rsh: frs pzl lsr
xhk: hfx
cmg: qnr nvd lhk bvb
rhn: xhk bvb hfx
bvb: xhk hfx
pzl: lsr hfx nvd
qnr: nvd
ntq: jqt hfx bvb xhk
nvd: lhk
lsr: lhk
rzs: qnr cmg lsr rsh
frs: qnr lhk lsr
";

    #[test]
    fn sample() -> Result<()> {
        let graph = parse(&mut IStr::new(INPUT))?;
        assert_eq!(graph.names.len(), 15);
        assert_eq!(graph.wires, 33);
        assert_eq!(graph.split()?, 54);
        Ok(())
    }

    #[test]
    fn missing_colon() {
        assert!(parse(&mut IStr::new(b"jqt rhn\n")).is_err());
    }

    #[test]
    fn no_cut() -> Result<()> {
        let graph = parse(&mut IStr::new(b"a: b c\nb: c\n"))?;
        assert!(graph.split().is_err());
        Ok(())
    }
}
