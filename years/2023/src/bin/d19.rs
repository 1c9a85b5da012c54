use core::ops::Range;
use std::collections::HashMap;

use lib::prelude::*;

#[entry(input = "d19.txt", expect = (367602, 125317461667458))]
fn main(mut input: IStr) -> Result<(u64, u64)> {
    let (system, parts) = parse(&mut input)?;

    let mut o1 = 0;

    for part in &parts {
        if system.accepts(part)? {
            o1 += part.iter().sum::<u64>();
        }
    }

    Ok((o1, system.combinations()?))
}

/// Ratings of a part, in `xmas` order.
type Part = [u64; 4];

struct Rule<'a> {
    /// Category, whether the rating must be less than the value, and the
    /// value.
    condition: Option<(usize, bool, u64)>,
    target: &'a str,
}

struct System<'a> {
    workflows: HashMap<&'a str, Vec<Rule<'a>>>,
}

fn category(name: &str) -> Result<usize> {
    Ok(match name {
        "x" => 0,
        "m" => 1,
        "a" => 2,
        "s" => 3,
        other => bail!("unknown category `{other}`"),
    })
}

fn parse(input: &mut IStr) -> Result<(System<'static>, Vec<Part>)> {
    let mut workflows = HashMap::new();

    let mut block = input.paragraph().context("missing workflows")?;

    for line in block.lines::<&'static str>() {
        let line = line?;

        let (name, rules) = line
            .strip_suffix('}')
            .and_then(|line| line.split_once('{'))
            .with_context(|| anyhow!("bad workflow `{line}`"))?;

        let mut parsed = Vec::new();

        for rule in rules.split(',') {
            let Some((condition, target)) = rule.split_once(':') else {
                parsed.push(Rule {
                    condition: None,
                    target: rule,
                });
                continue;
            };

            let Some(at) = condition.find(['<', '>']) else {
                bail!("bad condition `{condition}`");
            };

            let less = condition[at..].starts_with('<');
            let value = condition[at + 1..].parse()?;

            parsed.push(Rule {
                condition: Some((category(&condition[..at])?, less, value)),
                target,
            });
        }

        workflows.insert(name, parsed);
    }

    let mut parts = Vec::new();

    if let Some(mut block) = input.paragraph() {
        for line in block.lines::<&str>() {
            let line = line?;

            let ratings = line
                .strip_prefix('{')
                .and_then(|line| line.strip_suffix('}'))
                .with_context(|| anyhow!("bad part `{line}`"))?;

            let mut part = [0; 4];

            for rating in ratings.split(',') {
                let (name, value) = rating.split_once('=').context("bad rating")?;
                part[category(name)?] = value.parse()?;
            }

            parts.push(part);
        }
    }

    Ok((System { workflows }, parts))
}

impl System<'_> {
    fn rules(&self, name: &str) -> Result<&[Rule<'_>]> {
        match self.workflows.get(name) {
            Some(rules) => Ok(rules),
            None => bail!("missing workflow `{name}`"),
        }
    }

    fn accepts(&self, part: &Part) -> Result<bool> {
        let mut name = "in";

        for _ in 0..=self.workflows.len() {
            match name {
                "A" => return Ok(true),
                "R" => return Ok(false),
                _ => {}
            }

            let rules = self.rules(name)?;

            let rule = rules
                .iter()
                .find(|rule| match rule.condition {
                    Some((c, true, value)) => part[c] < value,
                    Some((c, false, value)) => part[c] > value,
                    None => true,
                })
                .with_context(|| anyhow!("no rule in `{name}` matches"))?;

            name = rule.target;
        }

        bail!("workflows loop")
    }

    /// Count accepted combinations of ratings in `1..=4000`.
    fn combinations(&self) -> Result<u64> {
        self.count("in", [1..4001, 1..4001, 1..4001, 1..4001], 0)
    }

    fn count(&self, name: &str, mut ranges: [Range<u64>; 4], depth: usize) -> Result<u64> {
        match name {
            "A" => return Ok(ranges.iter().map(|r| r.end - r.start).product()),
            "R" => return Ok(0),
            _ => {}
        }

        ensure!(depth <= self.workflows.len(), "workflows loop");

        let mut total = 0;

        for rule in self.rules(name)? {
            let Some((c, less, value)) = rule.condition else {
                total += self.count(rule.target, ranges, depth + 1)?;
                return Ok(total);
            };

            let r = ranges[c].clone();

            let (matching, rest) = if less {
                (r.start..r.end.min(value), r.start.max(value)..r.end)
            } else {
                (r.start.max(value + 1)..r.end, r.start..r.end.min(value + 1))
            };

            if !matching.is_empty() {
                let mut split = ranges.clone();
                split[c] = matching;
                total += self.count(rule.target, split, depth + 1)?;
            }

            if rest.is_empty() {
                return Ok(total);
            }

            ranges[c] = rest;
        }

        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INPUT: &[u8] = br"px{a<2006:qkq,m>2090:A,rfg}
pv{a>1716:R,A}
lnx{m>1548:A,A}
rfg{s<537:gd,x>2440:R,A}
qs{s>3448:A,lnx}
qkq{x<1416:A,crn}
crn{x>2662:A,R}
in{s<1351:px,qqz}
qqz{s>2770:qs,m<1801:hdj,R}
gd{a>3333:R,R}
hdj{m>838:A,pv}

{x=787,m=2655,a=1222,s=2876}
{x=1679,m=44,a=2067,s=496}
{x=2036,m=264,a=79,s=2244}
{x=2461,m=1339,a=466,s=291}
{x=2127,m=1623,a=2188,s=1013}
";

    #[test]
    fn sample() -> Result<()> {
        let (system, parts) = parse(&mut IStr::new(INPUT))?;

        let accepted = parts
            .iter()
            .filter_map(|part| match system.accepts(part) {
                Ok(true) => Some(Ok(part.iter().sum::<u64>())),
                Ok(false) => None,
                Err(error) => Some(Err(error)),
            })
            .collect::<Result<Vec<_>>>()?;

        assert_eq!(accepted, [7540, 4623, 6951]);
        assert_eq!(accepted.iter().sum::<u64>(), 19114);
        assert_eq!(system.combinations()?, 167409079868000);
        Ok(())
    }

    #[test]
    fn missing_workflow() -> Result<()> {
        let (system, parts) = parse(&mut IStr::new(b"in{x<10:nope,A}\n\n{x=1,m=1,a=1,s=1}\n"))?;
        assert!(system.accepts(&parts[0]).is_err());
        assert!(system.combinations().is_err());
        Ok(())
    }
}
