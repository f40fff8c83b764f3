extern crate clap;
extern crate env_logger;
#[macro_use]
extern crate log;

extern crate computor;

use clap::{App, Arg};

fn main() {
    env_logger::init();

    let matches = App::new("computor")
        .version("0.1.0")
        .about("Solves polynomial equations up to the second degree, keeping the solutions exact")
        .arg(
            Arg::with_name("EQUATION")
                .help("The equation to solve, e.g. \"5 * X^0 + 4 * X^1 = 4 * X^0\"")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .help("Also print the reduced form, the degree and the discriminant"),
        )
        .get_matches();

    let equation = matches.value_of("EQUATION").unwrap();
    debug!("raw input: {:?}", equation);

    match computor::solve(equation) {
        Ok(report) => {
            if matches.is_present("verbose") {
                println!("Reduced form: {}", report.reduced_form);
                println!("Polynomial degree: {}", report.degree);
                if let Some(d) = report.discriminant {
                    println!("Discriminant: {}", d);
                }
                println!("Solutions count: {}", report.count);
            }
            println!("Solutions: {}", report.display);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
