use derive_more::Display;
use derive_more::From;

pub mod limits;
pub mod position;

pub use limits::OperationalLimits;
pub use limits::SeaCondition;
pub use position::Position;
pub use position::UtmZone;

pub type Idx = u16;

#[derive(Display, From, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[display(fmt = "elem_{}", _0)]
pub struct ElementIdx(pub Idx);

#[derive(Display, From, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[display(fmt = "vess_{}", _0)]
pub struct VesselIdx(pub Idx);

#[derive(Display, From, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[display(fmt = "equi_{}", _0)]
pub struct EquipmentIdx(pub Idx);

#[derive(Display, From, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[display(fmt = "jour_{}", _0)]
pub struct JourneyIdx(pub Idx);

pub type ElementCount = u32;
pub type VesselCount = u32;
pub type Meter = f64;
pub type SquareMeter = f64;
pub type Tonne = f64;
pub type MeterPerSecond = f64;
