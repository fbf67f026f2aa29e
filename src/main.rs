// src/main.rs
use anyhow::Result;
use log::debug;
use std::env;

mod args;
mod counts;

use args::Invocation;
use counts::Totals;

fn main() -> Result<()> {
    env_logger::init();

    let argv: Vec<String> = env::args().skip(1).collect();
    let Some(invocation) = args::parse(&argv) else {
        // Usage was already shown; the run stops here.
        return Ok(());
    };

    run(&invocation)
}

fn run(invocation: &Invocation) -> Result<()> {
    let flags = invocation.flags.effective();
    debug!("counting with {:?}", flags);

    let mut totals = Totals::default();
    for path in &invocation.files {
        debug!("processing file: {}", path);
        let counts = counts::count_file(path, flags)?;
        totals.add(&counts);
        println!("{}", counts.render(path));
    }

    if invocation.files.len() > 1 {
        println!("{}", totals.render());
    }

    Ok(())
}
