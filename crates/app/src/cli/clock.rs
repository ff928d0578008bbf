//! Source of the current moment for booking validation.

use jiff::civil::DateTime;

/// Supplies the moment a new booking's check-in is compared against.
///
/// Read once per booking, so a long interactive session never validates
/// against the time it was started.
pub trait Clock {
    /// The current local date-time.
    fn now(&self) -> DateTime;
}

/// The local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime {
        jiff::Zoned::now().datetime()
    }
}

impl<F: Fn() -> DateTime> Clock for F {
    fn now(&self) -> DateTime {
        self()
    }
}
