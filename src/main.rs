// Copyright (c)  by Gleb E. Zaslavkiy
//MIT License
use std::collections::BTreeMap;
use std::env;
use std::process;
use std::time::Instant;

use log::error;
use num_complex::Complex64;
use simplelog::{ColorChoice, CombinedLogger, Config, LevelFilter, TermLogger, TerminalMode};

use differentiator::symbolic::expression::ComplexExpression;
use differentiator::symbolic::node::Node;
use differentiator::symbolic::parser::Parser;

fn help() -> ! {
    println!(
        "Usage:\n\
         \n\
         Symbolic simplification:       differentiator --simplify <expression>\n\
         Example:                       differentiator --simplify \"sin(x)^2 + cos(x)^2\"\n\
         \n\
         Expression substitution:       differentiator --subs <expression> [<substitutions>]\n\
         Example:                       differentiator --subs \"exp(x * y)\" x=\"x * ln(y)\" y=1\n\
         \n\
         Evaluate an expression:        differentiator --eval <expression> [<substitutions>]\n\
         Example:                       differentiator --eval \"exp(x) + y^2\" x=1 y=5\n\
         \n\
         Calculate the nth derivative:  differentiator --diff <expression> --by <variable> --nth <number>\n\
         Example:                       differentiator --diff \"sin(x) / cos(x)\" --by x --nth 2"
    );
    process::exit(1);
}

fn parse_or_exit(source: &str) -> ComplexExpression {
    match ComplexExpression::parse(source) {
        Ok(expression) => expression,
        Err(err) => {
            error!("Failed to parse \"{}\": {}", source, err);
            process::exit(1);
        }
    }
}

// substitutions are applied in name order
fn parse_assignments(assignments: &[String]) -> BTreeMap<String, ComplexExpression> {
    let mut substitutions = BTreeMap::new();
    for assignment in assignments {
        let (variable, value) = match Parser::<Complex64>::new(assignment).parse_assignment() {
            Ok(pair) => pair,
            Err(err) => {
                error!("Failed to parse \"{}\": {}", assignment, err);
                process::exit(1);
            }
        };
        if substitutions.contains_key(&variable) {
            error!("Double assignment of the variable \"{}\"", variable);
            process::exit(1);
        }
        substitutions.insert(variable, ComplexExpression::new(value));
    }
    substitutions
}

fn run_simplify(source: &str) {
    let expression = parse_or_exit(source);
    println!("Operation: simplify");
    println!("Expression:\n\t{}", expression);
    let simplified = match expression.simplify() {
        Ok(result) => result,
        Err(err) => {
            error!("{}", err);
            process::exit(1);
        }
    };
    println!("-----------------------------------------------");
    println!("After simplification:\n\t{}", simplified);
}

fn run_substitute(source: &str, assignments: &[String]) {
    let mut expression = parse_or_exit(source);
    let substitutions = parse_assignments(assignments);
    println!("Operation: substitute");
    println!("Expression:\n\t{}", expression);
    println!("Substitutions:");
    for (variable, value) in &substitutions {
        println!("\t{}={}", variable, value);
        expression = match expression.substitute(variable, value) {
            Ok(result) => result,
            Err(err) => {
                error!("{}", err);
                process::exit(1);
            }
        };
    }
    println!("-----------------------------------------------");
    println!("After substitution and simplification:\n\t{}", expression);
}

fn run_evaluate(source: &str, assignments: &[String]) {
    let expression = parse_or_exit(source);
    let substitutions = parse_assignments(assignments);
    println!("Operation: evaluate");
    println!("Expression:\n\t{}", expression);
    println!("Substitutions:");
    let mut variables: Vec<&str> = Vec::new();
    let mut values: Vec<Complex64> = Vec::new();
    for (variable, value) in &substitutions {
        println!("\t{}={}", variable, value);
        variables.push(variable.as_str());
        match value.evaluate(&[], &[]) {
            Ok(number) => values.push(number),
            Err(err) => {
                error!("{}", err);
                process::exit(1);
            }
        }
    }
    let result = match expression.evaluate(&variables, &values) {
        Ok(number) => ComplexExpression::number(number),
        Err(err) => {
            error!("{}", err);
            process::exit(1);
        }
    };
    println!("-----------------------------------------------");
    println!("Calculated value:\n\t{}", result);
}

fn run_differentiate(source: &str, variable: &str, order: u32) {
    let expression = parse_or_exit(source);
    let is_variable = matches!(
        Parser::<Complex64>::new(variable).parse_expression(),
        Ok(Node::Variable(_))
    );
    if !is_variable {
        error!("Incorrect variable \"{}\"", variable);
        process::exit(1);
    }
    println!("Operation: differentiate");
    println!("With respect to:\n\t{}", variable);
    println!("Derivative number:\n\t{}", order);
    println!("Expression:\n\t{}", expression);
    let start = Instant::now();
    let derivative = match expression.differentiate(variable, order) {
        Ok(result) => result,
        Err(err) => {
            error!("{}", err);
            process::exit(1);
        }
    };
    let elapsed = start.elapsed();
    println!("-----------------------------------------------");
    println!("After differentiation and simplification:\n\t{}", derivative);
    println!("Calculation time: {}ms", elapsed.as_millis());
}

fn parse_order(text: &str) -> u32 {
    let order: i64 = match text.parse() {
        Ok(value) => value,
        Err(_) => {
            error!("Conversion error");
            process::exit(1);
        }
    };
    if order <= 0 {
        error!("The number of the derivative must be positive");
        process::exit(1);
    }
    order as u32
}

fn main() {
    CombinedLogger::init(vec![TermLogger::new(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )])
    .ok();

    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        help();
    }

    match args[1].as_str() {
        "--simplify" => {
            if args.len() != 3 {
                error!("Incorrect number of arguments");
                process::exit(1);
            }
            run_simplify(&args[2]);
        }
        "--subs" => run_substitute(&args[2], &args[3..]),
        "--eval" => run_evaluate(&args[2], &args[3..]),
        "--diff" => {
            let mut variable = "x".to_string();
            let mut order: u32 = 1;
            match args.len() {
                3 => {}
                5 => match args[3].as_str() {
                    "--by" => variable = args[4].clone(),
                    "--nth" => order = parse_order(&args[4]),
                    _ => {
                        error!("Incorrect arguments");
                        process::exit(1);
                    }
                },
                7 => {
                    if args[3] == "--by" && args[5] == "--nth" {
                        variable = args[4].clone();
                        order = parse_order(&args[6]);
                    } else if args[3] == "--nth" && args[5] == "--by" {
                        order = parse_order(&args[4]);
                        variable = args[6].clone();
                    } else {
                        error!("Incorrect arguments");
                        process::exit(1);
                    }
                }
                _ => {
                    error!("Incorrect number of arguments");
                    process::exit(1);
                }
            }
            run_differentiate(&args[2], &variable, order);
        }
        _ => help(),
    }
}
