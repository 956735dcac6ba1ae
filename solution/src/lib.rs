pub mod journey;
pub mod json_serialisation;
pub mod schedule;

pub use journey::{Journey, ScheduledTask};
pub use schedule::{Schedule, ScheduleStatus};
