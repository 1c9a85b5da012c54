use std::collections::{HashMap, VecDeque};

use lib::prelude::*;

const PRESSES: usize = 1000;
const MAX_PRESSES: u64 = 1 << 20;

#[entry(input = "d20.txt", expect = (666795063, 253302889093151))]
fn main(mut input: IStr) -> Result<(u64, u64)> {
    let network = Network::parse(&mut input)?;
    Ok((network.pulses(PRESSES), network.presses_to_rx()?))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Broadcaster,
    FlipFlop,
    Conjunction,
    /// A module which only receives pulses.
    Output,
}

struct Module {
    kind: Kind,
    /// Target module and which of its inputs a pulse arrives at.
    outputs: Vec<(usize, usize)>,
    /// Modules sending pulses to this one.
    inputs: Vec<usize>,
}

struct Network {
    names: Vec<&'static str>,
    modules: Vec<Module>,
    broadcaster: usize,
}

/// Mutable state of every module.
struct State {
    on: Vec<bool>,
    /// Bitmask of inputs a conjunction last received a high pulse from.
    memory: Vec<u64>,
    queue: VecDeque<(usize, usize, usize, bool)>,
}

impl Network {
    fn parse(input: &mut IStr) -> Result<Self> {
        let mut lookup = HashMap::new();
        let mut names = Vec::new();
        let mut modules = Vec::new();
        let mut edges = Vec::new();

        let mut index = |name: &'static str, names: &mut Vec<_>, modules: &mut Vec<Module>| {
            *lookup.entry(name).or_insert_with(|| {
                names.push(name);
                modules.push(Module {
                    kind: Kind::Output,
                    outputs: Vec::new(),
                    inputs: Vec::new(),
                });
                modules.len() - 1
            })
        };

        for line in input.lines::<&'static str>() {
            let line = line?;
            let (name, targets) = line.split_once(" -> ").context("missing `->`")?;

            let (kind, name) = if let Some(name) = name.strip_prefix('%') {
                (Kind::FlipFlop, name)
            } else if let Some(name) = name.strip_prefix('&') {
                (Kind::Conjunction, name)
            } else if name == "broadcaster" {
                (Kind::Broadcaster, name)
            } else {
                bail!("unknown module `{name}`");
            };

            let from = index(name, &mut names, &mut modules);
            modules[from].kind = kind;

            for target in targets.split(", ") {
                let to = index(target, &mut names, &mut modules);
                edges.push((from, to));
            }
        }

        for (from, to) in edges {
            let slot = modules[to].inputs.len();
            ensure!(slot < 64, "module `{}` has too many inputs", names[to]);
            modules[to].inputs.push(from);
            modules[from].outputs.push((to, slot));
        }

        let broadcaster = names
            .iter()
            .position(|&name| name == "broadcaster")
            .context("missing broadcaster")?;

        Ok(Self {
            names,
            modules,
            broadcaster,
        })
    }

    fn state(&self) -> State {
        State {
            on: vec![false; self.modules.len()],
            memory: vec![0; self.modules.len()],
            queue: VecDeque::new(),
        }
    }

    /// Press the button once, calling `observe` with the sender, receiver and
    /// level of every pulse.
    fn press(&self, state: &mut State, mut observe: impl FnMut(usize, usize, bool)) {
        state.queue.push_back((usize::MAX, self.broadcaster, 0, false));

        while let Some((from, to, slot, high)) = state.queue.pop_front() {
            observe(from, to, high);

            let module = &self.modules[to];

            let out = match module.kind {
                Kind::Broadcaster => high,
                Kind::FlipFlop => {
                    if high {
                        continue;
                    }

                    state.on[to] = !state.on[to];
                    state.on[to]
                }
                Kind::Conjunction => {
                    if high {
                        state.memory[to].set_bit(slot as u32);
                    } else {
                        state.memory[to].clear_bit(slot as u32);
                    }

                    state.memory[to].count_ones() as usize != module.inputs.len()
                }
                Kind::Output => continue,
            };

            for &(target, slot) in &module.outputs {
                state.queue.push_back((to, target, slot, out));
            }
        }
    }

    /// Product of low and high pulses sent over the given number of presses.
    fn pulses(&self, presses: usize) -> u64 {
        let mut state = self.state();
        let mut counts = [0u64; 2];

        for _ in 0..presses {
            self.press(&mut state, |_, _, high| counts[usize::from(high)] += 1);
        }

        counts[0] * counts[1]
    }

    /// Fewest presses until `rx` receives a low pulse.
    ///
    /// `rx` is fed by a single conjunction, whose inputs each send it a high
    /// pulse periodically.
    fn presses_to_rx(&self) -> Result<u64> {
        let rx = self
            .names
            .iter()
            .position(|&name| name == "rx")
            .context("missing `rx` module")?;

        let [feeder] = self.modules[rx].inputs[..] else {
            bail!("`rx` must have exactly one input");
        };

        ensure!(
            self.modules[feeder].kind == Kind::Conjunction,
            "`{}` feeding `rx` is not a conjunction",
            self.names[feeder]
        );

        let inputs = &self.modules[feeder].inputs;
        let mut periods = vec![None; inputs.len()];
        let mut state = self.state();

        for n in 1..=MAX_PRESSES {
            self.press(&mut state, |from, to, high| {
                if !high || to != feeder {
                    return;
                }

                if let Some(index) = inputs.iter().position(|&i| i == from) {
                    periods[index].get_or_insert(n);
                }
            });

            if periods.iter().all(Option::is_some) {
                for (&input, period) in inputs.iter().zip(&periods) {
                    debug!("{}: {period:?}", self.names[input]);
                }

                return Ok(lcm_all(periods.into_iter().flatten()));
            }
        }

        bail!("no period found in {MAX_PRESSES} presses")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INPUT1: &[u8] = br"broadcaster -> a, b, c
%a -> b
%b -> c
%c -> inv
&inv -> a
";

    const INPUT2: &[u8] = br"broadcaster -> a
%a -> inv, con
&inv -> b
%b -> con
&con -> output
";

    #[test]
    fn pulses() -> Result<()> {
        let network = Network::parse(&mut IStr::new(INPUT1))?;
        assert_eq!(network.pulses(1000), 32000000);
        let network = Network::parse(&mut IStr::new(INPUT2))?;
        assert_eq!(network.pulses(1000), 11687500);
        Ok(())
    }

    #[test]
    fn single_press() -> Result<()> {
        let network = Network::parse(&mut IStr::new(INPUT1))?;
        let mut state = network.state();
        let mut pulses = Vec::new();

        network.press(&mut state, |from, to, high| {
            let from = network.names.get(from).copied().unwrap_or("button");
            let level = if high { "high" } else { "low" };
            pulses.push(format!("{from} -{level}-> {}", network.names[to]));
        });

        assert_eq!(
            pulses,
            [
                "button -low-> broadcaster",
                "broadcaster -low-> a",
                "broadcaster -low-> b",
                "broadcaster -low-> c",
                "a -high-> b",
                "b -high-> c",
                "c -high-> inv",
                "inv -low-> a",
                "a -low-> b",
                "b -low-> c",
                "c -low-> inv",
                "inv -high-> a",
            ]
        );

        Ok(())
    }

    #[test]
    fn missing_rx() -> Result<()> {
        let network = Network::parse(&mut IStr::new(INPUT1))?;
        assert!(network.presses_to_rx().is_err());
        Ok(())
    }

    #[test]
    fn conjunction_memory() -> Result<()> {
        let input = br"broadcaster -> a, b
%a -> con
%b -> con
&con -> output
";

        let network = Network::parse(&mut IStr::new(input))?;
        let con = network
            .names
            .iter()
            .position(|&name| name == "con")
            .context("missing con")?;

        let mut state = network.state();
        network.press(&mut state, |_, _, _| {});
        assert_eq!(state.memory[con], 0b11);
        network.press(&mut state, |_, _, _| {});
        assert_eq!(state.memory[con], 0);
        Ok(())
    }

    #[test]
    fn rx_feeder() -> Result<()> {
        let input = br"broadcaster -> a, b
%a -> c
%b -> d
%d -> e
&c -> feed
&e -> feed
&feed -> rx
";

        let network = Network::parse(&mut IStr::new(input))?;
        assert_eq!(network.presses_to_rx()?, 4);
        Ok(())
    }
}
