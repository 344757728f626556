use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use fftb::prelude::*;

/// Stimulus driver for the async-reset D flip-flop model.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Waveform output path
    #[arg(long, default_value = "dump.vcd")]
    wave: PathBuf,

    /// Data width of the flip-flop
    #[arg(long, default_value_t = 4)]
    width: u32,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let dut = TbObj::new(Dff::async_rst_n(args.width));
    let trace = VcdTrace::open(&args.wave, dut.clone())?;
    let mut drv = Driver::new(dut, trace);

    let started = Instant::now();
    let q = tb::async_rst_walk(&mut drv)?;
    println!("q = {:x}", q);

    let sim_time_ns = drv.time_ns() as u64;
    drv.finish()?;
    log::info!("wrote {}", args.wave.display());

    let mut report = RunReport::new();
    report.record(RunRecord {
        name: "async_rst_walk".to_string(),
        result: Ok(format!("q = {:x}", q)),
        time_secs: started.elapsed().as_secs_f64(),
        sim_time_ns,
    });
    let _ = report.summary_table().print(&mut std::io::stderr());
    report.write_junit(Path::new("results.xml"), "fftb")?;

    Ok(())
}
