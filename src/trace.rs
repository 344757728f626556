use crate::model::SimModel;
use crate::tb_obj::TbObj;
use crate::TbResult;

/// A waveform recorder. The driver calls `dump` once per half-tick; `finish`
/// flushes whatever sink the recorder writes to and may be called once at
/// the end of the run.
pub trait Trace {
    fn dump(&mut self, timestamp: u64) -> TbResult<()>;

    fn finish(&mut self) -> TbResult<()>;
}

/// In-memory recorder keeping every sample as a `(timestamp, values)` tuple,
/// values in port-table order. Used by testbenches to check dump counts,
/// timestamps and run-to-run determinism without going through a file.
pub struct CaptureTrace<M: SimModel> {
    dut: TbObj<M>,
    records: Vec<(u64, Vec<u64>)>,
}

impl<M: SimModel> CaptureTrace<M> {
    pub fn new(dut: TbObj<M>) -> Self {
        Self {
            dut,
            records: Vec::new(),
        }
    }

    pub fn records(&self) -> &[(u64, Vec<u64>)] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<M: SimModel> Trace for CaptureTrace<M> {
    fn dump(&mut self, timestamp: u64) -> TbResult<()> {
        let dut = self.dut.get();
        let mut values = Vec::with_capacity(dut.signals().len());
        for sig in dut.signals() {
            values.push(dut.get(sig.name)?);
        }
        drop(dut);
        self.records.push((timestamp, values));
        Ok(())
    }

    fn finish(&mut self) -> TbResult<()> {
        Ok(())
    }
}
