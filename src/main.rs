use anyhow::Result;
use clap::{Parser, ValueEnum};
use rack_solver::{Error, Language, OnInvalid, Rack, TileBag, TileSet, Wordlist};
use rand::{rngs::StdRng, SeedableRng};
use std::io::{self, BufRead};
use std::time::Instant;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Lang {
    En,
    Nl,
}

impl From<Lang> for Language {
    fn from(lang: Lang) -> Self {
        match lang {
            Lang::En => Language::EN,
            Lang::Nl => Language::NL,
        }
    }
}

#[derive(Parser)]
#[command(
    name = "rack",
    about = "Find the highest scoring word that can be formed from a rack of letter tiles",
    version
)]
struct Cli {
    /// Wordlist with one lower case word per line
    wordfile: String,

    /// Racks to solve, for example "iogsvooely".
    /// Read from stdin, one rack per line, if no racks are given
    racks: Vec<String>,

    /// Tile values to use
    #[arg(short, long, value_enum, default_value = "en")]
    language: Lang,

    /// Stop at the first invalid line in the wordlist, instead of skipping it
    #[arg(long)]
    strict: bool,

    /// Also solve this number of racks drawn at random from the tile bag
    #[arg(short, long)]
    random: Option<usize>,

    /// Number of tiles in a random rack
    #[arg(short, long, default_value = "10")]
    tiles: usize,

    /// Seed for drawing random racks
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print all words that can be formed, best first
    #[arg(short, long)]
    all: bool,
}

/// Collect the racks to solve, in input order. Racks that can not be parsed are kept as error.
fn read_racks(cli: &Cli, wordlist: &Wordlist) -> Result<Vec<(String, Result<Rack, Error>)>> {
    let mut inputs = cli.racks.clone();
    if inputs.is_empty() && cli.random.is_none() {
        for line in io::stdin().lock().lines() {
            let line = line?;
            let line = line.trim();
            if !line.is_empty() {
                inputs.push(String::from(line));
            }
        }
    }
    let mut racks: Vec<_> = inputs
        .into_iter()
        .map(|input| {
            let rack = Rack::parse(&input, wordlist.codec());
            (input, rack)
        })
        .collect();

    if let Some(n) = cli.random {
        let bag = TileBag::from(wordlist.tileset());
        let mut rng = match cli.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        for _ in 0..n {
            let rack = bag.draw(cli.tiles, &mut rng)?;
            info!(%rack, "drew random rack");
            racks.push((rack.to_string(), Ok(rack)));
        }
    }
    Ok(racks)
}

fn print_all(wordlist: &Wordlist, rack: &Rack) {
    let mut words = wordlist.formable_words(rack);
    words.sort_by(|a, b| b.1.cmp(&a.1));
    for (word, score) in words {
        println!("{} {}", word, score);
    }
    println!();
}

/// Solve all racks and print the results. Returns false if some rack was invalid.
fn run() -> Result<bool> {
    let cli = Cli::parse();
    let on_invalid = if cli.strict {
        OnInvalid::Abort
    } else {
        OnInvalid::Skip
    };
    let tileset = TileSet::new(cli.language.into());
    let (wordlist, skipped) = Wordlist::from_file(&cli.wordfile, tileset, on_invalid)?;
    if !skipped.is_empty() {
        eprintln!(
            "Skipped {} invalid lines in {}",
            skipped.len(),
            wordlist.wordfile()
        );
    }
    debug!("{}", wordlist);

    let racks = read_racks(&cli, &wordlist)?;
    let valid: Vec<Rack> = racks
        .iter()
        .filter_map(|(_, rack)| rack.as_ref().ok().copied())
        .collect();

    let t0 = Instant::now();
    let mut results = wordlist.highest_values(&valid).into_iter();
    info!(racks = valid.len(), elapsed = ?t0.elapsed(), "solved racks");

    let mut ok = true;
    for (input, rack) in &racks {
        match rack {
            Err(err) => {
                error!(rack = %input, %err, "invalid rack");
                ok = false;
            }
            Ok(rack) => {
                let best = results.next();
                if cli.all {
                    print_all(&wordlist, rack);
                    continue;
                }
                match best {
                    Some((Some(word), score)) => println!("{} {}", word, score),
                    _ => println!("- 0"),
                }
            }
        }
    }
    Ok(ok)
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    match run() {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => {
            eprintln!("Error: {:?}", err);
            std::process::exit(1);
        }
    }
}
