use clap::Parser;
use clap::ValueEnum;
use roshambo::play::table::Table;
use roshambo::players::console::Console;
use roshambo::players::human::Human;
use roshambo::players::robot::Robot;
use roshambo::symbols::flavor::Flavor;

fn flavors() -> String {
    Flavor::value_variants()
        .iter()
        .map(|flavor| format!("{}\n\n", flavor.describe()))
        .collect::<String>()
}

#[derive(Parser)]
#[command(about = "Play a game of Rock-Paper-Scissors", after_help = flavors())]
struct Args {
    /// Number of decisive rounds to play
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    rounds: u32,
    /// Game flavor
    #[arg(long, value_enum, default_value_t = Flavor::Vanilla)]
    flavor: Flavor,
}

fn main() {
    let args = Args::parse();
    roshambo::log();
    log::info!("dealing {} decisive rounds of {}", args.rounds, args.flavor);
    Table::new(
        args.flavor.ruleset(),
        Box::new(Human),
        Box::new(Robot),
        Box::new(Console),
    )
    .play(args.rounds as usize);
    println!("That was fun ! bye !");
}
