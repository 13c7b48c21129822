//! Component classification.

use std::fmt;

use serde::Serialize;

/// Kind of component a BOM row describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum ComponentKind {
    Resistor,
    Capacitor,
    Other,
}

impl ComponentKind {
    /// Classify a component by its name field.
    ///
    /// "CAP" is checked before "RES", so a name containing both is a capacitor.
    pub fn classify(name: &str) -> Self {
        if name.contains("CAP") {
            Self::Capacitor
        } else if name.contains("RES") {
            Self::Resistor
        } else {
            Self::Other
        }
    }

    /// Label written to the `componentSorter` column.
    ///
    /// Other components get an empty label, which sorts before "CAP" and "RES".
    pub fn label(self) -> &'static str {
        match self {
            Self::Resistor => "RES",
            Self::Capacitor => "CAP",
            Self::Other => "",
        }
    }

    /// Returns true for kinds the normalizer can produce a value for.
    pub fn is_sortable(self) -> bool {
        !matches!(self, Self::Other)
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Resistor => "resistor",
            Self::Capacitor => "capacitor",
            Self::Other => "other",
        };
        f.write_str(name)
    }
}
