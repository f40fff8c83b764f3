use itertools::Itertools;
use num_traits::Zero;

use parser;
use structure::{Error, Polynomial, SolutionReport, Solutions};
use tools;

/// Parse, reduce and solve an equation given as raw text.
///
/// This is the one entry point the command line wraps: the report carries
/// the reduced form, the effective degree, the discriminant for degree-2
/// equations, the numeric solution set and its exact rendering.
pub fn solve(input: &str) -> Result<SolutionReport, Error> {
    let terms = parser::parse_equation(input)?;
    let polynomial = Polynomial::reduce(&terms);
    solve_reduced(&polynomial)
}

/// Solve a polynomial already brought to canonical form.
pub fn solve_reduced(polynomial: &Polynomial) -> Result<SolutionReport, Error> {
    match polynomial.degree() {
        0 => solve_constant(polynomial),
        1 => solve_linear(polynomial),
        2 => solve_quadratic(polynomial),
        degree => Err(Error::UnsupportedDegree(degree)),
    }
}

fn report(
    polynomial: &Polynomial,
    discriminant: Option<i64>,
    solutions: Solutions,
    display: String,
) -> SolutionReport {
    SolutionReport {
        reduced_form: polynomial.to_string(),
        degree: polynomial.degree(),
        discriminant,
        count: solutions.count(),
        solutions,
        display,
    }
}

// only a constant k is left: either every X works or none does
fn solve_constant(polynomial: &Polynomial) -> Result<SolutionReport, Error> {
    let k = polynomial.coefficient(0);
    let (solutions, display) = if k == 0 {
        (Solutions::Infinite, "any real number is a solution".to_string())
    } else {
        (Solutions::None, "no solution".to_string())
    };
    Ok(report(polynomial, None, solutions, display))
}

fn solve_linear(polynomial: &Polynomial) -> Result<SolutionReport, Error> {
    let a = polynomial.coefficient(1);
    let b = polynomial.coefficient(0);
    let x = tools::simplify_fraction(-b, a)?;
    Ok(report(
        polynomial,
        None,
        Solutions::One(x.to_f64()),
        x.to_string(),
    ))
}

fn solve_quadratic(polynomial: &Polynomial) -> Result<SolutionReport, Error> {
    let a = polynomial.coefficient(2);
    let b = polynomial.coefficient(1);
    let c = polynomial.coefficient(0);
    let discriminant = b * b - 4 * a * c;

    if discriminant == 0 {
        let x = tools::simplify_fraction(-b, 2 * a)?;
        return Ok(report(
            polynomial,
            Some(0),
            Solutions::One(x.to_f64()),
            x.to_string(),
        ));
    }

    let root = tools::sqrt_decompose(discriminant);
    let (solutions, display) = if root.radicand == 1 && !root.imaginary {
        // perfect square: both roots are exact rational quotients
        let x1 = tools::simplify_fraction(-b + root.coefficient, 2 * a)?;
        let x2 = tools::simplify_fraction(-b - root.coefficient, 2 * a)?;
        (
            Solutions::TwoReal(x1.to_f64(), x2.to_f64()),
            vec![x1.to_string(), x2.to_string()].into_iter().join(", "),
        )
    } else {
        // left +- right, with the radical part divided by |2a| so its
        // rendered coefficient stays nonnegative
        let left = tools::simplify_fraction(-b, 2 * a)?;
        let right = tools::format_root_quotient(&root, (2 * a).abs())?;
        let rendered = if left.is_zero() {
            vec![right.clone(), format!("-{}", right)]
        } else {
            vec![
                format!("{} + {}", left, right),
                format!("{} - {}", left, right),
            ]
        };
        let solutions = if root.imaginary {
            Solutions::TwoComplex {
                re: left.to_f64(),
                im: root.to_f64() / (2 * a).abs() as f64,
            }
        } else {
            let offset = root.to_f64() / (2 * a) as f64;
            Solutions::TwoReal(left.to_f64() + offset, left.to_f64() - offset)
        };
        (solutions, rendered.into_iter().join(", "))
    };
    Ok(report(polynomial, Some(discriminant), solutions, display))
}
