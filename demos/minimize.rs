//! Command-line front end for the minimizer.
//!
//! Reads a normal-form expression from the argument, a file, or stdin,
//! minimizes it into NAND-only or NOR-only form, and prints the result in
//! infix or postfix notation.
//!
//! Run with:
//! ```bash
//! cargo run --example minimize -- --gate nand "1 3 v 2'"
//! ```

use std::io::Read;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use color_eyre::eyre::WrapErr;

use gatemin::gate::GateKind;
use gatemin::minimize::minimize;
use gatemin::parse::parse_normal_form;
use gatemin::postfix::render;
use gatemin::verify::equivalent;

#[derive(Debug, Copy, Clone, ValueEnum)]
enum TargetGate {
    Nand,
    Nor,
}

#[derive(Debug, Copy, Clone, ValueEnum)]
enum OutputForm {
    Infix,
    Postfix,
}

#[derive(Debug, Parser)]
#[command(author, version, about = "Minimal NAND-only / NOR-only synthesis of boolean normal forms")]
struct Cli {
    /// Normal-form expression, e.g. "1 3 v 2'" or "(1 v 2)(1' v 3)".
    /// Reads stdin when neither this nor --file is given.
    expression: Option<String>,

    /// Read the expression from a file instead.
    #[arg(long, conflicts_with = "expression")]
    file: Option<PathBuf>,

    /// Target gate kind.
    #[arg(long, value_enum, default_value = "nand")]
    gate: TargetGate,

    /// Output notation.
    #[arg(long, value_enum, default_value = "infix")]
    form: OutputForm,

    /// Check the result against the input with the truth-table oracle.
    #[arg(long)]
    verify: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Info,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let cli = Cli::parse();

    let input = match (&cli.expression, &cli.file) {
        (Some(expr), _) => expr.clone(),
        (None, Some(path)) => std::fs::read_to_string(path)
            .wrap_err_with(|| format!("reading {}", path.display()))?,
        (None, None) => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let target = match cli.gate {
        TargetGate::Nand => GateKind::Nand,
        TargetGate::Nor => GateKind::Nor,
    };

    let nf = parse_normal_form(&input)?;
    println!("y = {}", nf);

    let expr = minimize(&nf, target);
    match cli.form {
        OutputForm::Infix => println!("y = {}", expr),
        OutputForm::Postfix => println!("y = {}", render(&expr.to_postfix()?)),
    }
    println!(
        "{} {} gates",
        expr.gate_count(),
        match target {
            GateKind::Nand => "NAND",
            GateKind::Nor => "NOR",
            _ => unreachable!(),
        }
    );

    if cli.verify {
        let verdict = equivalent(&nf.to_expr(), &expr)?;
        println!("equivalence: {:?}", verdict);
    }

    Ok(())
}
