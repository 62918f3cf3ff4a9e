use copyless::BoxHelper;

use std::{borrow, fmt, ops, ptr};

/// Boxed value behind a raw pointer, handed out to C callers.
#[repr(C)]
pub struct Handle<T>(*mut T);

impl<T> Handle<T> {
    pub fn new(value: T) -> Self {
        let ptr = Box::into_raw(Box::alloc().init(value));
        Handle(ptr)
    }

    pub fn null() -> Self {
        Handle(ptr::null_mut())
    }

    pub fn unwrap(self) -> Box<T> {
        unsafe { Box::from_raw(self.0) }
    }

    pub fn is_null(&self) -> bool {
        self.0.is_null()
    }

    pub fn as_ref(&self) -> Option<&T> {
        unsafe { self.0.as_ref() }
    }

    pub fn as_mut(&mut self) -> Option<&mut T> {
        unsafe { self.0.as_mut() }
    }
}

impl<T> Clone for Handle<T> {
    fn clone(&self) -> Self {
        Handle(self.0)
    }
}

impl<T> Copy for Handle<T> {}

impl<T> ops::Deref for Handle<T> {
    type Target = T;
    fn deref(&self) -> &T {
        unsafe { &*self.0 }
    }
}

impl<T> ops::DerefMut for Handle<T> {
    fn deref_mut(&mut self) -> &mut T {
        unsafe { &mut *self.0 }
    }
}

impl<T> borrow::Borrow<T> for Handle<T> {
    fn borrow(&self) -> &T {
        unsafe { &*self.0 }
    }
}

impl<T> fmt::Debug for Handle<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "Handle({:p})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip() {
        let mut handle = Handle::new(vec![1u32, 2]);
        assert!(!handle.is_null());
        handle.push(3);
        assert_eq!(handle.as_ref().map(|v| v.len()), Some(3));
        assert_eq!(*handle.unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn null_handle() {
        let handle = Handle::<u32>::null();
        assert!(handle.is_null());
        assert!(handle.as_ref().is_none());
    }
}
