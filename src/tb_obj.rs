use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

// TbObj shares testbench objects (most importantly the dut, which both the
// driver and the trace recorder hold on to) within a run. The simulation is
// single threaded, so Rc and RefCell are all that is needed.
pub struct TbObj<T>(Rc<RefCell<T>>);

impl<T> TbObj<T> {
    pub fn new(data: T) -> TbObj<T> {
        TbObj(Rc::new(RefCell::new(data)))
    }

    pub fn get(&self) -> Ref<'_, T> {
        (*self.0).borrow()
    }

    pub fn get_mut(&self) -> RefMut<'_, T> {
        (*self.0).borrow_mut()
    }

    pub fn with_mut<R>(&self, f: impl FnOnce(RefMut<'_, T>) -> R) -> R {
        f(self.get_mut())
    }
}

impl<T> Clone for TbObj<T> {
    fn clone(&self) -> Self {
        TbObj(self.0.clone())
    }
}
