use std::iter::Peekable;
use std::str::Chars;
use std::u32;

use structure::{EquationError, Error, Term, TermError};

const VARIABLE: char = 'X';

// drop whitespace and fold the lowercase variable marker
fn normalize(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == 'x' { VARIABLE } else { c })
        .collect()
}

fn is_term_char(c: char) -> bool {
    c.is_ascii_digit() || c == '+' || c == '-' || c == '*' || c == '^' || c == VARIABLE
}

/// Decompose a full equation into a flat term list, every right-hand term
/// sign-flipped so the whole equation reads `... = 0`.
pub fn parse_equation(input: &str) -> Result<Vec<Term>, Error> {
    let eq = normalize(input);

    for (at, c) in eq.char_indices() {
        if !is_term_char(c) && c != '=' {
            return Err(Error::InvalidEquation {
                kind: EquationError::IllegalCharacter(c),
                at,
            });
        }
    }

    let split = match eq.find('=') {
        Some(i) => i,
        None => {
            return Err(Error::InvalidEquation {
                kind: EquationError::MissingEquals,
                at: eq.len(),
            })
        }
    };
    if let Some(second) = eq[split + 1..].find('=') {
        return Err(Error::InvalidEquation {
            kind: EquationError::MultipleEquals,
            at: split + 1 + second,
        });
    }
    if split == 0 || split + 1 == eq.len() {
        return Err(Error::InvalidEquation {
            kind: EquationError::EmptySide,
            at: split,
        });
    }

    let mut terms = Vec::new();
    for chunk in split_side(&eq[..split], 0)? {
        terms.push(parse_term(chunk)?);
    }
    for chunk in split_side(&eq[split + 1..], split + 1)? {
        let t = parse_term(chunk)?;
        terms.push(Term::new(-t.coefficient, t.degree));
    }
    Ok(terms)
}

// maximal signed term substrings. A `+`/`-` directly after `*` stays
// inside its term so a signed coefficient like `X*-2` survives the split.
fn split_side(side: &str, base: usize) -> Result<Vec<&str>, Error> {
    let bytes = side.as_bytes();
    let mut chunks = Vec::new();
    let mut start = 0;
    for i in 1..bytes.len() {
        if (bytes[i] == b'+' || bytes[i] == b'-') && bytes[i - 1] != b'*' {
            chunks.push((start, &side[start..i]));
            start = i;
        }
    }
    chunks.push((start, &side[start..]));

    for &(offset, chunk) in &chunks {
        if chunk == "+" || chunk == "-" {
            return Err(Error::InvalidEquation {
                kind: EquationError::DanglingOperator,
                at: base + offset,
            });
        }
    }
    Ok(chunks.into_iter().map(|(_, c)| c).collect())
}

fn read_number(it: &mut Peekable<Chars>) -> Option<i64> {
    let mut n: i64 = 0;
    let mut any = false;
    while let Some(&c) = it.peek() {
        match c.to_digit(10) {
            Some(d) => {
                n = n.checked_mul(10)?.checked_add(d as i64)?;
                any = true;
                it.next();
            }
            None => break,
        }
    }
    if any {
        Some(n)
    } else {
        None
    }
}

/// Parse one signed term substring into a Term.
///
/// Whitespace is stripped and a lowercase variable marker folded first, so
/// the function also accepts free-standing input like `" 2 * X ^ 2 "`.
pub fn parse_term(raw: &str) -> Result<Term, Error> {
    let term = normalize(raw);
    let invalid = |kind| Error::InvalidTerm {
        term: term.clone(),
        kind,
    };

    if term.is_empty() {
        return Err(invalid(TermError::Empty));
    }
    for c in term.chars() {
        if !is_term_char(c) {
            return Err(invalid(TermError::IllegalCharacter(c)));
        }
    }
    if term.matches(VARIABLE).count() > 1 {
        return Err(invalid(TermError::MultipleVariables));
    }
    for op in &['*', '^'] {
        if term.matches(*op).count() > 1 {
            return Err(invalid(TermError::MultipleOperators(*op)));
        }
    }

    let mut it = term.chars().peekable();

    let mut sign = 1i64;
    if let Some(&c) = it.peek() {
        if c == '+' || c == '-' {
            it.next();
            if c == '-' {
                sign = -1;
            }
            if it.peek() == Some(&'*') {
                return Err(invalid(TermError::Adjacency(c, '*')));
            }
        }
    }

    // optional coefficient in front of the variable
    let mut coefficient = None;
    if it.peek().map_or(false, |c| c.is_ascii_digit()) {
        let n = match read_number(&mut it) {
            Some(n) => n,
            None => return Err(invalid(TermError::BadCoefficient)),
        };
        coefficient = Some(n);
    }

    // optional '*' between coefficient and variable
    if coefficient.is_some() && it.peek() == Some(&'*') {
        it.next();
        match it.peek() {
            Some(&VARIABLE) => {}
            Some(&c) => return Err(invalid(TermError::Unexpected(c))),
            None => return Err(invalid(TermError::Dangling('*'))),
        }
    }

    let mut saw_variable = false;
    let mut degree = None;
    if it.peek() == Some(&VARIABLE) {
        it.next();
        saw_variable = true;

        if it.peek() == Some(&'^') {
            it.next();
            match it.peek() {
                Some(&'*') => return Err(invalid(TermError::Adjacency('^', '*'))),
                Some(&c) if c.is_ascii_digit() => {
                    let e = match read_number(&mut it) {
                        Some(e) => e,
                        None => return Err(invalid(TermError::BadExponent)),
                    };
                    if e > u32::MAX as i64 {
                        return Err(invalid(TermError::BadExponent));
                    }
                    degree = Some(e as u32);
                }
                _ => return Err(invalid(TermError::BadExponent)),
            }
        }

        // trailing coefficient, optionally signed: `X*2`, `X^2*5`, `X*-2`
        if it.peek() == Some(&'*') {
            it.next();
            if coefficient.is_some() {
                return Err(invalid(TermError::Unexpected('*')));
            }
            let mut trailing_sign = 1i64;
            if let Some(&c) = it.peek() {
                if c == '+' || c == '-' {
                    it.next();
                    if c == '-' {
                        trailing_sign = -1;
                    }
                }
            }
            match it.peek() {
                Some(&c) if c.is_ascii_digit() => {
                    let n = match read_number(&mut it) {
                        Some(n) => n,
                        None => return Err(invalid(TermError::BadCoefficient)),
                    };
                    coefficient = Some(trailing_sign * n);
                }
                Some(&c) => return Err(invalid(TermError::Unexpected(c))),
                None => return Err(invalid(TermError::Dangling('*'))),
            }
        }
    } else if it.peek() == Some(&'^') {
        // an exponent with no variable in front of it, e.g. `^2` or `3^X`
        return Err(invalid(TermError::BadExponent));
    }

    if let Some(&c) = it.peek() {
        return Err(invalid(TermError::Unexpected(c)));
    }

    if !saw_variable {
        return match coefficient {
            Some(n) => Ok(Term::new(sign * n, 0)),
            None => Err(invalid(TermError::Empty)),
        };
    }
    Ok(Term::new(sign * coefficient.unwrap_or(1), degree.unwrap_or(1)))
}
