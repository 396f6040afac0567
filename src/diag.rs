//! Diagnostic hooks for surfacing raw register traffic.
//!
//! When [`Config::debug`](crate::Config::debug) is set, the driver reports
//! every completed register access through an injected observer. The
//! embedding application decides where the events go, whether a console, a
//! trace buffer or nowhere. The observer has no effect on protocol behaviour.

use crate::registers::Register;

/// Receives raw register-traffic events.
pub trait DiagnosticObserver {
    /// Called after a completed register read with the bytes read.
    fn register_read(&mut self, reg: Register, value: &[u8]);

    /// Called after a completed register write with the bytes written.
    fn register_write(&mut self, reg: Register, value: &[u8]);
}

/// An observer that discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpObserver;

impl DiagnosticObserver for NoOpObserver {
    fn register_read(&mut self, _reg: Register, _value: &[u8]) {}

    fn register_write(&mut self, _reg: Register, _value: &[u8]) {}
}
