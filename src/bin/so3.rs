use std::{
    error::Error,
    io::{stdin, Read},
};

use clap::Parser;
use gelfand::{
    dim::{so3_dim, weyl_dim},
    max_threads, GelfandRow, Settings, So3, UnToSo3,
};
use serde::Serialize;

/// reduce a U(2l+1) irrep into SO(3) irreps
///
/// Reads the orbital angular momentum l and the number of fours, threes,
/// twos, ones, and zeros of the input irrep from standard input, then prints
/// one `[l] : D` line per SO(3) irrep with nonzero level dimensionality and
/// the total dimension they account for.
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
    l: i32,
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
    let l = next()?;
    let row = GelfandRow::new(next()?, next()?, next()?, next()?, next()?);

    let settings = Settings {
        parallel: !args.serial,
        spawn_threshold: args.spawn_threshold,
        precalc: !args.no_precalc,
    };
    let mut gen = UnToSo3::with_settings(So3::new(l as u32), settings);
    gen.reduce(row)?;

    println!("U(N) irrep dim = {}", weyl_dim(&row.labels()));

    let mut ms: Vec<i32> = gen.mult_map().iter().map(|(&m, _)| m).collect();
    ms.sort_unstable();
    let mut sum = 0;
    let mut irreps = Vec::new();
    for m in ms {
        let d = gen.level_dimensionality(m);
        if d > 0 {
            println!("[{m}] : {d}");
            sum += d as u64 * so3_dim(m);
            irreps.push(Irrep { l: m, level_dim: d });
        }
    }
    println!("dim = {sum}");

    if let Some(path) = args.json {
        let report = Report { row, irreps, dim: sum };
        std::fs::write(path, serde_json::to_string_pretty(&report)?)?;
    }

    Ok(())
}
