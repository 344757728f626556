use crate::driver::Driver;
use crate::model::SimModel;
use crate::trace::Trace;
use crate::TbResult;

/// The scripted stimulus of the flip-flop driver program.
///
/// Holds reset low with `data = 0xA` for one cycle, releases it, then walks
/// `data` through 0xB..0xE, changing the value between the rising and the
/// falling edge of each cycle. Returns the final `q`.
///
/// Each value is written after the rising edge of its own cycle, so it is
/// latched by the *next* one; the last rising edge still sees 0xD and 0xE is
/// never captured. Against `Dff::async_rst_n` the returned value is 0xD.
pub fn async_rst_walk<M: SimModel, T: Trace>(drv: &mut Driver<M, T>) -> TbResult<u64> {
    drv.set("rst_n", 0)?;
    drv.set("data", 0xA)?;
    drv.tick()?;

    drv.set("rst_n", 1)?;

    for value in [0xB, 0xC, 0xD, 0xE] {
        drv.half_tick(true)?;
        drv.set("data", value)?;
        drv.half_tick(false)?;
    }

    drv.get("q")
}

/// Run `n_cycles` idle clock cycles.
pub fn clock_cycles<M: SimModel, T: Trace>(drv: &mut Driver<M, T>, n_cycles: u32) -> TbResult<()> {
    for _ in 0..n_cycles {
        drv.tick()?;
    }
    Ok(())
}
