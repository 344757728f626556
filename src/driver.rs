use std::time::Instant;

use num_format::{Locale, ToFormattedString};

use crate::model::SimModel;
use crate::tb_obj::TbObj;
use crate::trace::Trace;
use crate::TbResult;

/// Testbench clock frequency. 100 MHz -> 10 ns period -> 5 ns half period.
pub const CLK_MHZ: f64 = 100.0;

/// Owns the dut handle, the trace recorder and the simulated time, and
/// advances all three together: one `half_tick` is one clock-level
/// transition, one model evaluation and one trace dump.
///
/// Models driven by a `Driver` are expected to expose their clock as `clk`.
pub struct Driver<M: SimModel, T: Trace> {
    dut: TbObj<M>,
    trace: T,
    time_ns: f64,
    half_ticks: u64,
    started: Instant,
}

impl<M: SimModel, T: Trace> Driver<M, T> {
    pub fn new(dut: TbObj<M>, trace: T) -> Self {
        Self {
            dut,
            trace,
            time_ns: 0.0,
            half_ticks: 0,
            started: Instant::now(),
        }
    }

    pub fn dut(&self) -> TbObj<M> {
        self.dut.clone()
    }

    pub fn trace(&self) -> &T {
        &self.trace
    }

    pub fn time_ns(&self) -> f64 {
        self.time_ns
    }

    pub fn half_ticks(&self) -> u64 {
        self.half_ticks
    }

    pub fn set(&mut self, signal: &str, value: u64) -> TbResult<()> {
        self.dut.get_mut().set(signal, value)
    }

    pub fn get(&self, signal: &str) -> TbResult<u64> {
        self.dut.get().get(signal)
    }

    /// Drive the clock to `edge`, evaluate the model, dump the trace at the
    /// current simulated time and advance time by half a clock period.
    pub fn half_tick(&mut self, edge: bool) -> TbResult<()> {
        self.dut.with_mut(|mut dut| -> TbResult<()> {
            dut.set("clk", edge as u64)?;
            dut.eval();
            Ok(())
        })?;
        self.trace.dump(self.time_ns as u64)?;
        self.time_ns += 500.0 / CLK_MHZ;
        self.half_ticks += 1;
        Ok(())
    }

    /// One full clock cycle: rising edge, then falling edge.
    pub fn tick(&mut self) -> TbResult<()> {
        self.half_tick(true)?;
        self.half_tick(false)
    }

    /// Close the trace recorder, log the run summary and release both
    /// handles.
    pub fn finish(mut self) -> TbResult<()> {
        self.trace.finish()?;
        let wall = self.started.elapsed().as_secs_f64();
        let sim_ns = self.time_ns as u64;
        log::info!(
            "simulation time: {} ns ({} half ticks)",
            sim_ns.to_formatted_string(&Locale::en),
            self.half_ticks
        );
        log::info!("real time: {:.3} s", wall);
        log::info!("simulation speed: {:.3} ns/s", self.time_ns / wall);
        Ok(())
    }
}
