use std::ffi::CStr;
use std::fmt;
use std::mem;
use std::os::raw::c_void;
use std::ptr;

use crate::error::{Error, Result};
use crate::resolve::{self, ProcLoader};

/// Pointer width of the host, which decides the offset type of
/// `GLintptr`/`GLsizeiptr` parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerWidth {
    /// 32-bit offsets.
    Narrow,
    /// 64-bit offsets.
    Wide,
}

impl PointerWidth {
    pub fn host() -> Self {
        if cfg!(target_pointer_width = "64") {
            PointerWidth::Wide
        } else {
            PointerWidth::Narrow
        }
    }
}

impl Default for PointerWidth {
    fn default() -> Self {
        PointerWidth::host()
    }
}

/// A resolved (or absent) native entry point.
pub struct Slot<F> {
    // nul-terminated
    symbol: &'static str,
    func: Option<F>,
}

impl<F: Copy> Slot<F> {
    pub(crate) fn new(symbol: &'static str) -> Self {
        Slot { symbol, func: None }
    }

    pub(crate) fn resolve(&mut self, loader: &mut dyn ProcLoader) {
        self.func = unsafe { resolve::get_address(loader, self.c_name()) };
        if self.func.is_none() {
            debug!("{} is not exported by the current context", self.name());
        }
    }

    pub(crate) fn reset(&mut self) {
        self.func = None;
    }

    /// Native symbol name.
    pub fn name(&self) -> &'static str {
        &self.symbol[..self.symbol.len() - 1]
    }

    fn c_name(&self) -> &'static CStr {
        resolve::symbol(self.symbol.as_bytes())
    }

    pub fn is_set(&self) -> bool {
        self.func.is_some()
    }

    pub fn func(&self) -> Option<F> {
        self.func
    }

    pub fn get(&self) -> Result<F> {
        self.func.ok_or(Error::Unavailable(self.name()))
    }

    /// Raw address of the entry point, null if unset.
    pub fn address(&self) -> *const c_void {
        match self.func {
            Some(ref func) => unsafe { mem::transmute_copy::<F, *const c_void>(func) },
            None => ptr::null(),
        }
    }
}

impl<F: Copy> fmt::Debug for Slot<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        let state = if self.is_set() { "set" } else { "unset" };
        write!(formatter, "Slot({}, {})", self.name(), state)
    }
}

/// The host-selected form of a width-dependent entry point.
#[derive(Clone, Copy)]
pub enum Variant<N, W> {
    Narrow(N),
    Wide(W),
}

/// Both width forms of one entry point. Only the form matching the
/// width the table was loaded with is ever populated.
pub struct WidthSlot<N, W> {
    narrow: Slot<N>,
    wide: Slot<W>,
}

impl<N: Copy, W: Copy> WidthSlot<N, W> {
    pub(crate) fn new(symbol: &'static str) -> Self {
        WidthSlot {
            narrow: Slot::new(symbol),
            wide: Slot::new(symbol),
        }
    }

    pub(crate) fn resolve(&mut self, loader: &mut dyn ProcLoader, width: PointerWidth) {
        self.reset();
        match width {
            PointerWidth::Narrow => self.narrow.resolve(loader),
            PointerWidth::Wide => self.wide.resolve(loader),
        }
    }

    pub(crate) fn reset(&mut self) {
        self.narrow.reset();
        self.wide.reset();
    }

    pub fn name(&self) -> &'static str {
        self.narrow.name()
    }

    pub fn is_set(&self) -> bool {
        self.narrow.is_set() || self.wide.is_set()
    }

    /// The 32-bit form, only populated on narrow tables.
    pub fn narrow(&self) -> &Slot<N> {
        &self.narrow
    }

    /// The 64-bit form, only populated on wide tables.
    pub fn wide(&self) -> &Slot<W> {
        &self.wide
    }

    pub fn variant(&self) -> Result<Variant<N, W>> {
        match (self.narrow.func(), self.wide.func()) {
            (Some(narrow), _) => Ok(Variant::Narrow(narrow)),
            (None, Some(wide)) => Ok(Variant::Wide(wide)),
            (None, None) => Err(Error::Unavailable(self.name())),
        }
    }

    pub fn address(&self) -> *const c_void {
        if self.narrow.is_set() {
            self.narrow.address()
        } else {
            self.wide.address()
        }
    }
}

impl<N: Copy, W: Copy> fmt::Debug for WidthSlot<N, W> {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter
            .debug_struct("WidthSlot")
            .field("narrow", &self.narrow)
            .field("wide", &self.wide)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type PFN_narrow = unsafe extern "system" fn(i32);
    type PFN_wide = unsafe extern "system" fn(i64);

    extern "system" fn stub(_: i64) {}

    fn loader(_: &CStr) -> *const c_void {
        stub as PFN_wide as *const c_void
    }

    #[test]
    fn name_strips_nul() {
        let slot = Slot::<PFN_wide>::new("glBufferData\0");
        assert_eq!(slot.name(), "glBufferData");
        assert!(slot.address().is_null());
        assert_eq!(slot.get().err(), Some(Error::Unavailable("glBufferData")));
        assert_eq!(format!("{:?}", slot), "Slot(glBufferData, unset)");
    }

    #[test]
    fn resolves_only_selected_width() {
        let mut slot = WidthSlot::<PFN_narrow, PFN_wide>::new("glBufferData\0");
        slot.resolve(&mut loader, PointerWidth::Wide);
        assert!(slot.wide().is_set());
        assert!(!slot.narrow().is_set());
        assert!(matches!(slot.variant(), Ok(Variant::Wide(_))));

        slot.resolve(&mut loader, PointerWidth::Narrow);
        assert!(slot.narrow().is_set());
        assert!(!slot.wide().is_set());
        assert!(matches!(slot.variant(), Ok(Variant::Narrow(_))));
    }

    #[test]
    fn host_width_matches_pointer_size() {
        let expected = if mem::size_of::<usize>() == 8 {
            PointerWidth::Wide
        } else {
            PointerWidth::Narrow
        };
        assert_eq!(PointerWidth::host(), expected);
    }
}
