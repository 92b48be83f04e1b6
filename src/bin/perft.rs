use clap::Parser;
use minichess::Board;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 4)]
    depth: u8,
}

fn main() {
    let args = Args::parse();

    println!("Running perft from the start position up to depth {}", args.depth);

    let mut board = Board::start();
    for depth in 1..=args.depth {
        let start = std::time::Instant::now();
        let nodes = board.perft(depth);
        let duration = start.elapsed();

        println!(
            "perft({}) = {} nodes ({} ms, {:.2} Mnps)",
            depth,
            nodes,
            duration.as_millis(),
            nodes as f64 / (duration.as_micros().max(1) as f64)
        );
    }
}
