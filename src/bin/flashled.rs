//! Flashes two LEDs at independent on/off intervals.
//!
//! Mirrors the classic prototyping-board sample: DS2 on port bit 2 flashing
//! 50 ms on / 50 ms off, DS3 on port bit 3 flashing 500 ms on / 100 ms off.
//! Runs until killed; there is nothing to return to on the target this
//! models.

use cosched::{Level, MonotonicClock, PinDriver, PinError, PinId, Scheduler, SchedulerError, TaskId};

const DS2: TaskId = TaskId::new(0);
const DS3: TaskId = TaskId::new(1);

const DS2_PIN: PinId = PinId::new(2);
const DS3_PIN: PinId = PinId::new(3);

/// Console stand-in for the board's digital-output write.
///
/// On the real board the wiring is inverted: `Off` drives the line HIGH and
/// `On` drives it LOW, because the LED sinks current. The console has no such
/// constraint, so this driver reports logical levels directly.
struct ConsoleLeds;

impl PinDriver for ConsoleLeds {
    fn set_pin(&self, pin: PinId, level: Level) -> Result<(), PinError> {
        let name = if pin == DS2_PIN { "DS2" } else { "DS3" };
        println!("{name} ({pin}) -> {level:?}");
        Ok(())
    }
}

fn main() -> Result<(), SchedulerError> {
    let mut scheduler = Scheduler::new(MonotonicClock::new(), ConsoleLeds);

    scheduler.register(DS2, DS2_PIN, 50, 50)?;
    scheduler.register(DS3, DS3_PIN, 500, 100)?;

    match scheduler.run_forever()? {}
}
