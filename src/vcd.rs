use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::model::SimModel;
use crate::tb_obj::TbObj;
use crate::trace::Trace;
use crate::TbResult;

/// Value-change-dump recorder.
///
/// `open` writes the header from the dut's port table; every `dump` emits a
/// `#<timestamp>` record followed by the signals that changed since the
/// previous dump (all of them, inside `$dumpvars`, on the first).
pub struct VcdTrace<M: SimModel> {
    dut: TbObj<M>,
    out: BufWriter<File>,
    path: PathBuf,
    last: Vec<Option<u64>>,
    dumped: bool,
}

impl<M: SimModel> VcdTrace<M> {
    pub fn open(path: impl AsRef<Path>, dut: TbObj<M>) -> TbResult<Self> {
        let path = path.as_ref().to_path_buf();
        let mut out = BufWriter::new(File::create(&path)?);
        let n_signals = {
            let d = dut.get();
            writeln!(out, "$version fftb {} $end", env!("CARGO_PKG_VERSION"))?;
            writeln!(out, "$timescale 1ns $end")?;
            writeln!(out, "$scope module {} $end", d.name())?;
            for (i, sig) in d.signals().iter().enumerate() {
                writeln!(out, "$var wire {} {} {} $end", sig.width, id_code(i), sig.name)?;
            }
            writeln!(out, "$upscope $end")?;
            writeln!(out, "$enddefinitions $end")?;
            d.signals().len()
        };
        Ok(Self {
            dut,
            out,
            path,
            last: vec![None; n_signals],
            dumped: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<M: SimModel> Trace for VcdTrace<M> {
    fn dump(&mut self, timestamp: u64) -> TbResult<()> {
        let dut = self.dut.get();
        let first = !self.dumped;
        writeln!(self.out, "#{}", timestamp)?;
        if first {
            writeln!(self.out, "$dumpvars")?;
        }
        for (i, sig) in dut.signals().iter().enumerate() {
            let value = dut.get(sig.name)?;
            if self.last[i] != Some(value) {
                if sig.width == 1 {
                    writeln!(self.out, "{}{}", value, id_code(i))?;
                } else {
                    writeln!(self.out, "b{:b} {}", value, id_code(i))?;
                }
                self.last[i] = Some(value);
            }
        }
        if first {
            writeln!(self.out, "$end")?;
        }
        self.dumped = true;
        Ok(())
    }

    fn finish(&mut self) -> TbResult<()> {
        self.out.flush()?;
        Ok(())
    }
}

// Identifier codes are the printable ASCII range '!'..'~' read as base-94
// digits, least significant first.
fn id_code(mut index: usize) -> String {
    let mut code = String::new();
    loop {
        code.push((b'!' + (index % 94) as u8) as char);
        index /= 94;
        if index == 0 {
            break;
        }
    }
    code
}
