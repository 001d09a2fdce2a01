use std::error::Error;
use std::io::{stdin, stdout, BufRead, Write};

use chromatch::opt::Options;
use chromatch::{tailwind, Matches, NearestColorRanker, RankedMatch};

fn swatch(m: &RankedMatch<'_>) -> String {
    let [r, g, b]: [u8; 3] = m.entry().rgb().into();
    format!("\x1b[48;2;{};{};{}m    \x1b[0m", r, g, b)
}

fn show(out: &mut impl Write, query: &str, matches: &Matches<'_>) -> std::io::Result<()> {
    writeln!(out, "\n{}", query)?;

    let Some(best) = matches.best() else {
        return writeln!(out, "    (not a hex color)");
    };

    writeln!(out, "  Best match")?;
    writeln!(out, "    {} {:.2}", swatch(best), best)?;

    if !matches.close().is_empty() {
        writeln!(out, "  Close matches")?;
        for m in matches.close() {
            writeln!(out, "    {} {:.2}", swatch(m), m)?;
        }
    }

    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let options = Options::from_environment()?;
    let ranker = NearestColorRanker::with_options(tailwind::palette(), &options);
    let mut out = stdout().lock();

    let queries: Vec<String> = std::env::args().skip(1).collect();
    if queries.is_empty() {
        for line in stdin().lock().lines() {
            let line = line?;
            show(&mut out, &line, &ranker.matches(&line))?;
        }
    } else {
        for query in &queries {
            show(&mut out, query, &ranker.matches(query))?;
        }
    }

    Ok(())
}
