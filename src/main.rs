use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;
use u_tsp::distance::DistanceMatrix;
use u_tsp::ga::{Crossover, GaConfig, Mutation, Selection};
use u_tsp::random::rng_from_seed;
use u_tsp::vbss::VbssConfig;
use u_tsp::{solve, tsplib, Solution, Strategy};

#[derive(Parser)]
#[command(version, about = "Heuristic TSP solver for TSPLIB instances")]
struct Args {
    /// TSPLIB instance with NODE_COORD_SECTION coordinates
    #[arg(default_value = "dj38.tsp")]
    file: PathBuf,

    /// optimization strategy
    #[arg(long, value_enum, default_value_t = StrategyArg::Vbss)]
    strategy: StrategyArg,

    /// GA population size
    #[arg(long, default_value_t = 50)]
    population: usize,

    /// GA generations
    #[arg(long, default_value_t = 25_000)]
    generations: usize,

    /// GA selection strategy
    #[arg(long, value_enum, default_value_t = SelectionArg::FitnessDiversity)]
    selection: SelectionArg,

    /// tournament size (only with --selection tournament)
    #[arg(long, default_value_t = 3)]
    tournament_size: usize,

    /// GA crossover operator
    #[arg(long, value_enum, default_value_t = CrossoverArg::Cycle)]
    crossover: CrossoverArg,

    /// GA mutation operator
    #[arg(long, value_enum, default_value_t = MutationArg::Reversal)]
    mutation: MutationArg,

    /// probability of crossing a pair
    #[arg(long, default_value_t = 0.5)]
    crossover_rate: f64,

    /// probability of mutating a member
    #[arg(long, default_value_t = 0.5)]
    mutation_rate: f64,

    /// samples for vbss and sampling
    #[arg(long, default_value_t = 10_000)]
    samples: usize,

    /// VBSS bias exponent
    #[arg(long, default_value_t = 7.0)]
    bias: f64,

    /// RNG seed; random when omitted
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Clone, Copy, ValueEnum)]
enum StrategyArg {
    Ga,
    Vbss,
    Sampling,
}

#[derive(Clone, Copy, ValueEnum)]
enum SelectionArg {
    FitnessDiversity,
    Tournament,
}

#[derive(Clone, Copy, ValueEnum)]
enum CrossoverArg {
    Cycle,
    Order,
}

#[derive(Clone, Copy, ValueEnum)]
enum MutationArg {
    Swap,
    Insertion,
    Reversal,
    BlockMove,
    Scramble,
}

impl Args {
    fn strategy(&self) -> Strategy {
        match self.strategy {
            StrategyArg::Ga => {
                let selection = match self.selection {
                    SelectionArg::FitnessDiversity => Selection::FitnessDiversity,
                    SelectionArg::Tournament => Selection::Tournament(self.tournament_size),
                };
                let crossover = match self.crossover {
                    CrossoverArg::Cycle => Crossover::Cycle,
                    CrossoverArg::Order => Crossover::Order,
                };
                let mutation = match self.mutation {
                    MutationArg::Swap => Mutation::Swap,
                    MutationArg::Insertion => Mutation::Insertion,
                    MutationArg::Reversal => Mutation::Reversal,
                    MutationArg::BlockMove => Mutation::BlockMove,
                    MutationArg::Scramble => Mutation::Scramble,
                };
                Strategy::Genetic(
                    GaConfig::default()
                        .with_population_size(self.population)
                        .with_generations(self.generations)
                        .with_selection(selection)
                        .with_crossover(crossover)
                        .with_mutation(mutation)
                        .with_crossover_rate(self.crossover_rate)
                        .with_mutation_rate(self.mutation_rate),
                )
            }
            StrategyArg::Vbss => Strategy::Vbss(
                VbssConfig::default()
                    .with_samples(self.samples)
                    .with_bias(self.bias),
            ),
            StrategyArg::Sampling => Strategy::RandomSampling {
                samples: self.samples,
            },
        }
    }
}

fn run(args: &Args) -> u_tsp::Result<Solution> {
    let points = tsplib::read(&args.file)?;
    let matrix = DistanceMatrix::from_points(&points);
    let strategy = args.strategy();
    info!(
        event = "instance_loaded",
        file = %args.file.display(),
        cities = matrix.size(),
        strategy = strategy.name(),
    );

    let mut rng = rng_from_seed(args.seed);
    solve(&matrix, &strategy, &mut rng)
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(solution) => {
            print!("{solution}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(event = "run_failed", error = %e);
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
