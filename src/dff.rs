use crate::model::{Dir, SignalDecl, SimModel};
use crate::{TbError, TbResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResetKind {
    /// Reset acts on the output as soon as it is asserted, clock or not.
    Async,
    /// Reset is sampled at the rising clock edge only.
    Sync,
}

/// Posedge-triggered D flip-flop with active-low reset, parametric data
/// width and an optional clock enable.
///
/// Truth table per `eval`:
/// - `Async`: `rst_n == 0` forces `q = 0` immediately; otherwise a 0->1
///   clock transition latches `data` (if the enable, where present, is high).
/// - `Sync`: only a 0->1 clock transition acts; `rst_n == 0` clears `q`,
///   otherwise `data` is latched (enable permitting).
#[derive(Debug)]
pub struct Dff {
    reset: ResetKind,
    has_enable: bool,
    width: u32,
    signals: Vec<SignalDecl>,
    clk: bool,
    prev_clk: bool,
    rst_n: bool,
    en: bool,
    data: u64,
    q: u64,
}

impl Dff {
    pub fn async_rst_n(width: u32) -> Self {
        Self::new(ResetKind::Async, width)
    }

    pub fn sync_rst_n(width: u32) -> Self {
        Self::new(ResetKind::Sync, width)
    }

    fn new(reset: ResetKind, width: u32) -> Self {
        assert!(
            (1..=64).contains(&width),
            "data width must be between 1 and 64, got {}",
            width
        );
        Self {
            reset,
            has_enable: false,
            width,
            signals: Self::port_table(width, false),
            clk: false,
            prev_clk: false,
            rst_n: false,
            en: false,
            data: 0,
            q: 0,
        }
    }

    /// Add a clock enable port. While `en` is low, rising edges latch nothing.
    pub fn with_enable(mut self) -> Self {
        self.has_enable = true;
        self.signals = Self::port_table(self.width, true);
        self
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn q(&self) -> u64 {
        self.q
    }

    fn port_table(width: u32, has_enable: bool) -> Vec<SignalDecl> {
        let mut table = vec![
            SignalDecl {
                name: "clk",
                width: 1,
                dir: Dir::Input,
            },
            SignalDecl {
                name: "rst_n",
                width: 1,
                dir: Dir::Input,
            },
        ];
        if has_enable {
            table.push(SignalDecl {
                name: "en",
                width: 1,
                dir: Dir::Input,
            });
        }
        table.push(SignalDecl {
            name: "data",
            width,
            dir: Dir::Input,
        });
        table.push(SignalDecl {
            name: "q",
            width,
            dir: Dir::Output,
        });
        table
    }

    fn check_width(&self, signal: &str, value: u64, width: u32) -> TbResult<()> {
        let mask = if width == 64 {
            u64::MAX
        } else {
            (1u64 << width) - 1
        };
        if value & !mask != 0 {
            return Err(TbError::ValueTooWide {
                signal: signal.to_string(),
                value,
                width,
            });
        }
        Ok(())
    }
}

impl SimModel for Dff {
    fn name(&self) -> &str {
        match (self.reset, self.has_enable) {
            (ResetKind::Async, false) => "dff_async_rst_n",
            (ResetKind::Async, true) => "dff_async_rst_n_en",
            (ResetKind::Sync, false) => "dff_sync_rst_n",
            (ResetKind::Sync, true) => "dff_sync_rst_n_en",
        }
    }

    fn signals(&self) -> &[SignalDecl] {
        &self.signals
    }

    fn set(&mut self, signal: &str, value: u64) -> TbResult<()> {
        match signal {
            "clk" => {
                self.check_width(signal, value, 1)?;
                self.clk = value != 0;
            }
            "rst_n" => {
                self.check_width(signal, value, 1)?;
                self.rst_n = value != 0;
            }
            "en" if self.has_enable => {
                self.check_width(signal, value, 1)?;
                self.en = value != 0;
            }
            "data" => {
                self.check_width(signal, value, self.width)?;
                self.data = value;
            }
            "q" => return Err(TbError::NotWritable(signal.to_string())),
            _ => return Err(TbError::NoSuchSignal(signal.to_string())),
        }
        Ok(())
    }

    fn get(&self, signal: &str) -> TbResult<u64> {
        match signal {
            "clk" => Ok(self.clk as u64),
            "rst_n" => Ok(self.rst_n as u64),
            "en" if self.has_enable => Ok(self.en as u64),
            "data" => Ok(self.data),
            "q" => Ok(self.q),
            _ => Err(TbError::NoSuchSignal(signal.to_string())),
        }
    }

    fn eval(&mut self) {
        let rising = self.clk && !self.prev_clk;
        let enabled = !self.has_enable || self.en;
        match self.reset {
            ResetKind::Async => {
                if !self.rst_n {
                    self.q = 0;
                } else if rising && enabled {
                    self.q = self.data;
                }
            }
            ResetKind::Sync => {
                if rising {
                    if !self.rst_n {
                        self.q = 0;
                    } else if enabled {
                        self.q = self.data;
                    }
                }
            }
        }
        self.prev_clk = self.clk;
    }
}
