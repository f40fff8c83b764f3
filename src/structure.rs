use std::error;
use std::fmt;

/// A single monomial: `coefficient * X^degree`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Term {
    pub coefficient: i64,
    pub degree: u32,
}

impl Term {
    pub fn new(coefficient: i64, degree: u32) -> Term {
        Term { coefficient, degree }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} * X^{}", self.coefficient, self.degree)
    }
}

/// An equation brought to `... = 0` in canonical dense form: exactly one
/// term per degree from 0 up to the highest degree that appeared in the
/// input, missing degrees filled with explicit zero terms.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Polynomial {
    pub terms: Vec<Term>,
}

impl Polynomial {
    /// Highest degree with a non-zero coefficient; zero for the zero
    /// polynomial.
    pub fn degree(&self) -> u32 {
        self.terms
            .iter()
            .rev()
            .find(|t| t.coefficient != 0)
            .map(|t| t.degree)
            .unwrap_or(0)
    }

    /// Coefficient at `degree`, zero past the stored range.
    pub fn coefficient(&self, degree: u32) -> i64 {
        self.terms
            .get(degree as usize)
            .map(|t| t.coefficient)
            .unwrap_or(0)
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, t) in self.terms.iter().rev().enumerate() {
            if i == 0 {
                if t.coefficient < 0 {
                    write!(f, "-")?;
                }
            } else if t.coefficient < 0 {
                write!(f, " - ")?;
            } else {
                write!(f, " + ")?;
            }
            write!(f, "{} * X^{}", t.coefficient.abs(), t.degree)?;
        }
        write!(f, " = 0")
    }
}

/// Reasons a single term substring is rejected.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum TermError {
    Empty,
    IllegalCharacter(char),
    MultipleVariables,
    MultipleOperators(char),
    Adjacency(char, char),
    BadExponent,
    BadCoefficient,
    Unexpected(char),
    Dangling(char),
}

impl fmt::Display for TermError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            TermError::Empty => write!(f, "empty term"),
            TermError::IllegalCharacter(c) => write!(f, "illegal character '{}'", c),
            TermError::MultipleVariables => write!(f, "more than one variable"),
            TermError::MultipleOperators(c) => write!(f, "more than one '{}'", c),
            TermError::Adjacency(a, b) => write!(f, "'{}' may not be followed by '{}'", a, b),
            TermError::BadExponent => write!(f, "the exponent is not a nonnegative integer"),
            TermError::BadCoefficient => {
                write!(f, "the coefficient does not fit a 64-bit integer")
            }
            TermError::Unexpected(c) => write!(f, "unexpected '{}'", c),
            TermError::Dangling(c) => write!(f, "'{}' with nothing after it", c),
        }
    }
}

/// Structural problems with the equation as a whole.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum EquationError {
    MissingEquals,
    MultipleEquals,
    EmptySide,
    DanglingOperator,
    IllegalCharacter(char),
}

impl fmt::Display for EquationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            EquationError::MissingEquals => write!(f, "no '=' sign"),
            EquationError::MultipleEquals => write!(f, "more than one '=' sign"),
            EquationError::EmptySide => write!(f, "one side of '=' is empty"),
            EquationError::DanglingOperator => write!(f, "sign with no term after it"),
            EquationError::IllegalCharacter(c) => write!(f, "illegal character '{}'", c),
        }
    }
}

/// Everything that can go wrong between the raw input and a report.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Error {
    /// A term substring is malformed; carries the offending substring.
    InvalidTerm { term: String, kind: TermError },
    /// The equation structure is malformed; `at` is the byte position in
    /// the whitespace-stripped input.
    InvalidEquation { kind: EquationError, at: usize },
    /// The reduced polynomial has a degree this solver does not handle.
    UnsupportedDegree(u32),
    DivisionByZero,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::InvalidTerm { ref term, ref kind } => {
                write!(f, "invalid term '{}': {}", term, kind)
            }
            Error::InvalidEquation { ref kind, at } => {
                write!(f, "invalid equation at position {}: {}", at, kind)
            }
            Error::UnsupportedDegree(d) => {
                write!(f, "polynomial degree {} is out of range, at most 2 is supported", d)
            }
            Error::DivisionByZero => write!(f, "division by zero"),
        }
    }
}

impl error::Error for Error {}

/// Numeric solution set of a reduced equation.
#[derive(Debug, Clone, PartialEq)]
pub enum Solutions {
    None,
    Infinite,
    One(f64),
    TwoReal(f64, f64),
    /// The conjugate pair `re + im*i` and `re - im*i`.
    TwoComplex { re: f64, im: f64 },
}

impl Solutions {
    pub fn count(&self) -> SolutionCount {
        match *self {
            Solutions::None => SolutionCount::Finite(0),
            Solutions::Infinite => SolutionCount::Infinite,
            Solutions::One(_) => SolutionCount::Finite(1),
            Solutions::TwoReal(..) | Solutions::TwoComplex { .. } => SolutionCount::Finite(2),
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SolutionCount {
    Finite(usize),
    Infinite,
}

impl fmt::Display for SolutionCount {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            SolutionCount::Finite(n) => write!(f, "{}", n),
            SolutionCount::Infinite => write!(f, "infinite"),
        }
    }
}

/// Everything a caller needs to print about one solved equation.
#[derive(Debug, Clone, PartialEq)]
pub struct SolutionReport {
    pub reduced_form: String,
    pub degree: u32,
    /// Present for degree-2 equations only.
    pub discriminant: Option<i64>,
    pub count: SolutionCount,
    pub solutions: Solutions,
    /// Exact human-readable rendering of the solutions.
    pub display: String,
}
