use std::fmt;

/// Kind of record held by the external catalog and the local store
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CatalogKind {
    Character,
    Planet,
}

impl CatalogKind {
    /// Value stored in a favorite's `nature` column
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Character => "character",
            Self::Planet => "planet",
        }
    }

    /// Path segment of the catalog resource
    pub fn resource(&self) -> &'static str {
        match self {
            Self::Character => "people",
            Self::Planet => "planets",
        }
    }

    /// Summary page fetched by a population run
    pub fn page(&self) -> u32 {
        match self {
            Self::Character => 1,
            Self::Planet => 2,
        }
    }

    /// Page size of the summary request
    pub fn limit(&self) -> u32 {
        match self {
            Self::Character => 20,
            Self::Planet => 100,
        }
    }
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
