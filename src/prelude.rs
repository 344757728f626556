pub use crate::dff::{Dff, ResetKind};
pub use crate::driver::{Driver, CLK_MHZ};
pub use crate::model::{Dir, SignalDecl, SimModel};
pub use crate::report::{RunRecord, RunReport};
pub use crate::tb;
pub use crate::tb_obj::TbObj;
pub use crate::trace::{CaptureTrace, Trace};
pub use crate::utils;
pub use crate::vcd::VcdTrace;
pub use crate::{TbError, TbResult};
