// Builds a tree from 0..n, prints it, removes 7 and prints it again.
//
//   cargo run --example rbdemo -- [count] [log level]
use std::{env, process::ExitCode};

use log::{LevelFilter, error, info};
use rougeset::RbTree;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

fn init_logging(level: LevelFilter) {
    let config = ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Trace)
        .build();
    if let Err(e) = TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto) {
        eprintln!("logger already set: {e}");
    }
}

fn main() -> ExitCode {
    let mut args = env::args().skip(1);
    let count = match args.next().map(|a| a.parse::<u32>()) {
        None => 10,
        Some(Ok(count)) => count,
        Some(Err(e)) => {
            eprintln!("count must be a non-negative integer: {e}");
            return ExitCode::FAILURE;
        }
    };
    let level = match args.next().map(|a| a.parse::<LevelFilter>()) {
        None => LevelFilter::Info,
        Some(Ok(level)) => level,
        Some(Err(e)) => {
            eprintln!("unknown log level: {e}");
            return ExitCode::FAILURE;
        }
    };
    init_logging(level);

    let mut tree = RbTree::with_capacity(count as usize);
    for k in 0..count {
        tree.insert(k);
    }
    println!("{tree}");
    info!("{} keys, height {}", tree.len(), tree.height());

    if tree.remove(&7) {
        info!("removed 7");
    } else {
        info!("7 is not in the tree");
    }
    println!("{tree}");

    match tree.validate() {
        Ok(black_height) => {
            info!("valid, black-height {black_height}, height {}", tree.height());
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("invalid tree: {e}");
            ExitCode::FAILURE
        }
    }
}
