use anyhow::{anyhow, Result};
use clap::{arg, Command};
use ksat_algorithms::{beam_search, hill_climbing, variable_neighborhood, SearchResult};
use ksat_instance::{Assignment, Formula, Params, ParsedFormula};
use log::info;
use rand::{
    rngs::{SmallRng, StdRng},
    Rng, SeedableRng,
};
use serde_json::json;

fn cli() -> Command {
    Command::new("ksat-runner")
        .about("Generates random k-SAT instances and runs local-search solvers on them")
        .arg_required_else_help(true)
        .subcommand(
            Command::new("generate")
                .about("Generates a random instance and prints it")
                .arg(arg!(<SEED> "Seed value").value_parser(clap::value_parser!(u64)))
                .arg(
                    arg!(--"num-vars" [NUM_VARS] "Number of distinct variables")
                        .default_value("25")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    arg!(--"clause-size" [CLAUSE_SIZE] "Literals per clause")
                        .default_value("3")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    arg!(--"num-clauses" [NUM_CLAUSES] "Number of clauses")
                        .default_value("1000")
                        .value_parser(clap::value_parser!(usize)),
                ),
        )
        .subcommand(
            Command::new("solve")
                .about("Generates an instance and runs the selected solvers")
                .arg(arg!(<SEED> "Seed value").value_parser(clap::value_parser!(u64)))
                .arg(
                    arg!(--"num-vars" [NUM_VARS] "Number of distinct variables")
                        .default_value("25")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    arg!(--"clause-size" [CLAUSE_SIZE] "Literals per clause")
                        .default_value("3")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    arg!(--"num-clauses" [NUM_CLAUSES] "Number of clauses")
                        .default_value("1000")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    arg!(--solver [SOLVER] "hill-climb, beam, vns or all")
                        .default_value("all")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(--"beam-width" [BEAM_WIDTH] "Beam search frontier capacity")
                        .default_value("3")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    arg!(--"max-steps" [MAX_STEPS] "Evaluation budget for beam search and VNS")
                        .default_value("1000")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    arg!(--"max-depth" [MAX_DEPTH] "Scan budget for hill climbing")
                        .default_value("100")
                        .value_parser(clap::value_parser!(usize)),
                ),
        )
}

fn main() {
    env_logger::init();
    let matches = cli().get_matches();

    if let Err(e) = match matches.subcommand() {
        Some(("generate", sub_m)) => generate(
            *sub_m.get_one::<u64>("SEED").unwrap(),
            params_from_args(sub_m),
        ),
        Some(("solve", sub_m)) => solve(
            *sub_m.get_one::<u64>("SEED").unwrap(),
            params_from_args(sub_m),
            sub_m.get_one::<String>("solver").unwrap().clone(),
            *sub_m.get_one::<usize>("beam-width").unwrap(),
            *sub_m.get_one::<usize>("max-steps").unwrap(),
            *sub_m.get_one::<usize>("max-depth").unwrap(),
        ),
        _ => Err(anyhow!("Invalid subcommand")),
    } {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn params_from_args(sub_m: &clap::ArgMatches) -> Params {
    Params {
        num_vars: *sub_m.get_one::<usize>("num-vars").unwrap(),
        clause_size: *sub_m.get_one::<usize>("clause-size").unwrap(),
        num_clauses: *sub_m.get_one::<usize>("num-clauses").unwrap(),
    }
}

fn instance_seed(seed: u64) -> [u8; 32] {
    let mut bytes = [0u8; 32];
    bytes[..8].copy_from_slice(&seed.to_le_bytes());
    bytes
}

fn generate(seed: u64, params: Params) -> Result<()> {
    let formula = Formula::generate(&instance_seed(seed), &params)?;
    println!("{}", formula);
    println!("{}", serde_json::to_string(&formula)?);
    Ok(())
}

fn solve(
    seed: u64,
    params: Params,
    solver: String,
    beam_width: usize,
    max_steps: usize,
    max_depth: usize,
) -> Result<()> {
    if !matches!(solver.as_str(), "all" | "hill-climb" | "beam" | "vns") {
        return Err(anyhow!("Unknown solver '{}'", solver));
    }

    let formula = Formula::generate(&instance_seed(seed), &params)?;
    let parsed = ParsedFormula::new(&formula);
    let mut rng = SmallRng::from_seed(StdRng::from_seed(instance_seed(seed)).gen());
    let initial = Assignment::random(parsed.distinct(), &mut rng);
    let initial_fitness = parsed.fitness(&initial)?;
    info!(
        "generated {} clauses over {} variables, initial fitness {}",
        parsed.num_clauses(),
        parsed.distinct().len(),
        initial_fitness
    );
    println!(
        "{}",
        json!({
            "num_clauses": parsed.num_clauses(),
            "target": parsed.target(),
            "initial_fitness": initial_fitness,
        })
    );

    let run_all = solver == "all";
    if run_all || solver == "hill-climb" {
        let result = hill_climbing::solve(&parsed, initial.clone(), max_depth)?;
        report("hill-climb", &parsed, &result)?;
    }
    if run_all || solver == "beam" {
        let result = beam_search::solve(&parsed, initial.clone(), beam_width, max_steps)?;
        report("beam", &parsed, &result)?;
    }
    if run_all || solver == "vns" {
        let result = variable_neighborhood::solve(&parsed, initial, max_steps, &mut rng)?;
        report("vns", &parsed, &result)?;
    }
    Ok(())
}

fn report(name: &str, parsed: &ParsedFormula, result: &SearchResult) -> Result<()> {
    println!(
        "{}",
        json!({
            "solver": name,
            "fitness": result.fitness,
            "target": parsed.target(),
            "satisfied": result.satisfies(parsed),
            "steps": result.steps,
            "assignment": &result.assignment,
        })
    );
    Ok(())
}
