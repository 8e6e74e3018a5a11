use crate::cell::State;
use crate::engine::next_generation;

/// Endless sequence of generations, starting with the seed itself.
///
/// Each generation is computed only when it is asked for.
#[derive(Debug, Clone)]
pub struct Generations {
    seed: Option<State>,
    last: Option<State>,
}

impl Generations {
    pub fn new(seed: State) -> Self {
        Generations {
            seed: Some(seed),
            last: None,
        }
    }
}

impl Iterator for Generations {
    type Item = State;

    fn next(&mut self) -> Option<State> {
        let state = match self.seed.take() {
            Some(seed) => seed,
            None => next_generation(self.last.as_ref()?),
        };
        self.last = Some(state.clone());
        Some(state)
    }
}

/// Largest iteration count accepted from text input.
pub const MAX_ITERATIONS: usize = 1_000_000;

/// Parses a non-negative iteration count, strictly: no minus sign, no trailing
/// text, nothing above [`MAX_ITERATIONS`].
pub fn parse_iterations(text: &str) -> Option<usize> {
    text.parse::<usize>()
        .ok()
        .filter(|&iterations| iterations <= MAX_ITERATIONS)
}

fn history_len(iterations: usize) -> usize {
    if iterations == 0 {
        0
    } else {
        iterations.saturating_add(1)
    }
}

/// Runs `iterations` generations from `state` and returns every state along
/// the way, the seed included, so the result holds `iterations + 1` states.
///
/// Zero iterations yields an empty history, not a history holding only the
/// seed.
pub fn iterate(state: State, iterations: usize) -> Vec<State> {
    match history_len(iterations) {
        0 => Vec::new(),
        len => Generations::new(state).take(len).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::seed;
    use crate::patterns::pattern;

    #[test]
    fn zero_iterations_is_empty() {
        assert!(iterate(pattern("rpentomino").unwrap(), 0).is_empty());
        assert!(iterate(Vec::new(), 0).is_empty());
    }

    #[test]
    fn square_history() {
        let square = pattern("square").unwrap();
        let states = iterate(square.clone(), 3);
        assert_eq!(states.len(), 4);
        assert_eq!(states[0], square);
    }

    #[test]
    fn each_state_follows_the_previous() {
        let states = iterate(pattern("rpentomino").unwrap(), 5);
        assert_eq!(states.len(), 6);
        for pair in states.windows(2) {
            assert_eq!(pair[1], next_generation(&pair[0]));
        }
    }

    #[test]
    fn history_len_saturates_at_the_top() {
        assert_eq!(history_len(0), 0);
        assert_eq!(history_len(3), 4);
        assert_eq!(history_len(usize::MAX), usize::MAX);
    }

    #[test]
    fn parse_iterations_is_strict_and_capped() {
        assert_eq!(parse_iterations("0"), Some(0));
        assert_eq!(parse_iterations("50"), Some(50));
        assert_eq!(parse_iterations("1000000"), Some(MAX_ITERATIONS));
        assert_eq!(parse_iterations("1000001"), None);
        assert_eq!(parse_iterations("18446744073709551615"), None);
        assert_eq!(parse_iterations("18446744073709551616"), None);
        assert_eq!(parse_iterations("-2"), None);
        assert_eq!(parse_iterations("50abc"), None);
        assert_eq!(parse_iterations("abc"), None);
        assert_eq!(parse_iterations(""), None);
    }

    #[test]
    fn generations_start_with_seed() {
        let blinker = seed([(0, 0), (1, 0), (2, 0)]);
        let mut generations = Generations::new(blinker.clone());
        assert_eq!(generations.next(), Some(blinker.clone()));
        assert_eq!(generations.next(), Some(seed([(1, -1), (1, 0), (1, 1)])));
        assert_eq!(generations.next(), Some(blinker));
    }
}
