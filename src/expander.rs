//! Parallel rewriting of an axiom through successive generations.

use crate::grammar::Rules;

/// Rewrites `axiom` through `iterations` generations of `rules`.
///
/// Every symbol is replaced by its rule, or by itself when it has none. `iterations == 0`
/// returns the axiom unchanged. Output growth is not bounded here; callers choose an
/// iteration count that stays tractable for their grammar.
pub fn expand(axiom: &str, rules: &Rules, iterations: usize) -> String {
    let mut current = axiom.to_string();
    for _ in 0..iterations {
        let mut next = String::with_capacity(current.len() * growth_hint(rules));
        for c in current.chars() {
            match rules.get(&c) {
                Some(expansion) => next.push_str(expansion),
                None => next.push(c),
            }
        }
        current = next;
    }
    current
}

/// Upper bound on the per-symbol growth factor, used only to pre-size buffers.
fn growth_hint(rules: &Rules) -> usize {
    rules.values().map(String::len).max().unwrap_or(1).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules(pairs: &[(char, &str)]) -> Rules {
        pairs.iter().map(|&(k, v)| (k, v.to_string())).collect()
    }

    #[test]
    fn zero_iterations_is_identity() {
        let r = rules(&[('F', "F+F")]);
        assert_eq!(expand("F-F", &r, 0), "F-F");
    }

    #[test]
    fn rewrites_in_parallel() {
        // Algae: each generation applies to the previous string only.
        let r = rules(&[('A', "AB"), ('B', "A")]);
        assert_eq!(expand("A", &r, 1), "AB");
        assert_eq!(expand("A", &r, 2), "ABA");
        assert_eq!(expand("A", &r, 4), "ABAABABA");
    }

    #[test]
    fn unknown_symbols_pass_through() {
        let r = rules(&[('X', "X+YF+"), ('Y', "-FX-Y")]);
        assert_eq!(expand("FX", &r, 1), "FX+YF+");
        assert_eq!(expand("FX", &r, 2), "FX+YF++-FX-YF+");
    }

    #[test]
    fn empty_rules_leave_axiom() {
        assert_eq!(expand("F+F", &Rules::new(), 5), "F+F");
    }
}
