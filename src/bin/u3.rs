use std::{
    error::Error,
    io::{stdin, Read},
};

use clap::Parser;
use gelfand::{dim::weyl_dim, max_threads, GelfandRow, Settings, U3Weight, UnToU3, U3};
use serde::Serialize;

/// reduce a U((n+1)(n+2)/2) irrep into U(3) irreps
///
/// Reads the HO shell number n and the number of fours, threes, twos, ones,
/// and zeros of the input irrep from standard input, then prints one
/// `[f1,f2,f3] : D` line per U(3) irrep with nonzero level dimensionality
/// and the total dimension they account for.
#[derive(Parser, Debug)]
#[command(about, long_about = None)]
struct Args {
    /// run the reduction on a single thread
    #[arg(short, long, default_value_t = false)]
    serial: bool,

    /// the maximum number of threads to use by rayon
    #[arg(short, long, default_value_t = 0)]
    threads: usize,

    /// row size above which subtrees are dispatched as tasks
    #[arg(long, default_value_t = 8)]
    spawn_threshold: usize,

    /// disable the precomputed base-case table
    #[arg(long, default_value_t = false)]
    no_precalc: bool,

    /// write the resulting irreps as JSON to this file
    #[arg(short, long)]
    json: Option<String>,
}

#[derive(Serialize)]
struct Irrep {
    f: U3Weight,
    level_dim: u32,
}

#[derive(Serialize)]
struct Report {
    row: GelfandRow,
    irreps: Vec<Irrep>,
    dim: u64,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();
    max_threads(args.threads);

    let mut buf = String::new();
    stdin().read_to_string(&mut buf)?;
    let mut fields = buf.split_ascii_whitespace();
    let mut next = || fields.next().unwrap_or("").parse::<u16>();
    let n = next()?;
    let row = GelfandRow::new(next()?, next()?, next()?, next()?, next()?);

    let settings = Settings {
        parallel: !args.serial,
        spawn_threshold: args.spawn_threshold,
        precalc: !args.no_precalc,
    };
    let mut gen = UnToU3::with_settings(U3::new(n as u32), settings);
    gen.reduce(row)?;

    println!("U(N) irrep dim = {}", weyl_dim(&row.labels()));

    let mut ws: Vec<U3Weight> = gen.mult_map().iter().map(|(&w, _)| w).collect();
    ws.sort_unstable();
    let mut sum = 0;
    let mut irreps = Vec::new();
    for w in ws {
        let d = gen.level_dimensionality(w);
        if d > 0 {
            println!("[{w}] : {d}");
            sum += d as u64 * weyl_dim(&w.0);
            irreps.push(Irrep { f: w, level_dim: d });
        }
    }
    println!("dim = {sum}");

    if let Some(path) = args.json {
        let report = Report { row, irreps, dim: sum };
        std::fs::write(path, serde_json::to_string_pretty(&report)?)?;
    }

    Ok(())
}
