use std::fmt;

use crate::base_types::{ElementIdx, Position, SquareMeter, Tonne};

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ElementKind {
    Foundation,
    MooringSegment,
    CableSegment,
    Device,
    SubAssembly,
}

/// A physical item to transport and install. Immutable once loaded; batching
/// consumes elements read-only and in their given installation order.
#[derive(Clone, PartialEq, Debug)]
pub struct Element {
    idx: ElementIdx,
    kind: ElementKind,
    area: SquareMeter,
    dry_mass: Tonne,
    position: Position,
}

impl Element {
    pub fn new(
        idx: ElementIdx,
        kind: ElementKind,
        area: SquareMeter,
        dry_mass: Tonne,
        position: Position,
    ) -> Element {
        Element {
            idx,
            kind,
            area,
            dry_mass,
            position,
        }
    }

    pub fn idx(&self) -> ElementIdx {
        self.idx
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    pub fn area(&self) -> SquareMeter {
        self.area
    }

    pub fn dry_mass(&self) -> Tonne {
        self.dry_mass
    }

    pub fn position(&self) -> &Position {
        &self.position
    }
}

/// the ordered element list of one logistic phase (installation order is
/// fixed by upstream domain logic and must not be reordered)
pub struct Elements {
    elements: Vec<Element>,
}

// static functions:
impl Elements {
    pub fn new(elements: Vec<Element>) -> Elements {
        Elements { elements }
    }
}

// methods:
impl Elements {
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Element> + '_ {
        self.elements.iter()
    }

    pub fn get(&self, idx: ElementIdx) -> Option<&Element> {
        self.elements.iter().find(|e| e.idx() == idx)
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ElementKind::Foundation => write!(f, "foundation"),
            ElementKind::MooringSegment => write!(f, "mooring segment"),
            ElementKind::CableSegment => write!(f, "cable segment"),
            ElementKind::Device => write!(f, "device"),
            ElementKind::SubAssembly => write!(f, "sub-assembly"),
        }
    }
}
