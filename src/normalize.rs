use std::collections::BTreeMap;

use structure::{Polynomial, Term};

impl Polynomial {
    /// Bring a flat, sign-adjusted term list to canonical dense form.
    ///
    /// Coefficients of equal degree are summed. A sum that cancels to zero
    /// keeps its explicit zero slot, so a cancelled leading term lowers the
    /// effective degree instead of leaving a gap. An empty list reduces to
    /// the zero polynomial.
    pub fn reduce(terms: &[Term]) -> Polynomial {
        let mut by_degree = BTreeMap::new();
        for t in terms {
            *by_degree.entry(t.degree).or_insert(0i64) += t.coefficient;
        }

        let max = by_degree.keys().next_back().cloned().unwrap_or(0);
        let reduced = (0..max + 1)
            .map(|d| Term::new(by_degree.get(&d).cloned().unwrap_or(0), d))
            .collect();

        Polynomial { terms: reduced }
    }
}
