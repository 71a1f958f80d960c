//! The fixed set of supported icon libraries.

use serde::{Deserialize, Serialize};

/// A supported icon library.
///
/// Library ids are the stable string keys used in the `sources` table and
/// as the prefix of every icon id (`"lucide:arrow-left"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Library {
    #[serde(rename = "lucide")]
    Lucide,
    #[serde(rename = "feather")]
    Feather,
    #[serde(rename = "phosphor")]
    Phosphor,
    #[serde(rename = "heroicons")]
    Heroicons,
    #[serde(rename = "hugeicons")]
    HugeIcons,
    #[serde(rename = "simple-icons")]
    SimpleIcons,
}

impl Library {
    /// All supported libraries, in extraction order.
    pub const ALL: [Library; 6] = [
        Library::Lucide,
        Library::Feather,
        Library::Phosphor,
        Library::Heroicons,
        Library::HugeIcons,
        Library::SimpleIcons,
    ];

    /// The canonical reference library for cross-library mapping.
    /// Fixed by design: the mappings schema anchors on it.
    pub const CANONICAL: Library = Library::Lucide;

    /// Stable string id.
    pub fn id(self) -> &'static str {
        match self {
            Library::Lucide => "lucide",
            Library::Feather => "feather",
            Library::Phosphor => "phosphor",
            Library::Heroicons => "heroicons",
            Library::HugeIcons => "hugeicons",
            Library::SimpleIcons => "simple-icons",
        }
    }

    /// Human-readable display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Library::Lucide => "Lucide",
            Library::Feather => "Feather Icons",
            Library::Phosphor => "Phosphor",
            Library::Heroicons => "Heroicons",
            Library::HugeIcons => "HugeIcons",
            Library::SimpleIcons => "Simple Icons",
        }
    }

    /// The npm package the library is vendored from.
    pub fn npm_package(self) -> &'static str {
        match self {
            Library::Lucide => "lucide-static",
            Library::Feather => "feather-icons",
            Library::Phosphor => "@phosphor-icons/core",
            Library::Heroicons => "heroicons",
            Library::HugeIcons => "hugeicons-react",
            Library::SimpleIcons => "simple-icons",
        }
    }

    /// Upstream license identifier.
    pub fn license(self) -> &'static str {
        match self {
            Library::Lucide => "ISC",
            Library::Feather => "MIT",
            Library::Phosphor => "MIT",
            Library::Heroicons => "MIT",
            Library::HugeIcons => "MIT",
            Library::SimpleIcons => "CC0-1.0",
        }
    }

    /// Parse a stable string id back into a library.
    pub fn from_id(id: &str) -> Option<Library> {
        Library::ALL.into_iter().find(|lib| lib.id() == id)
    }
}

impl std::fmt::Display for Library {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// The non-canonical libraries that participate in equivalence mapping.
///
/// Each has a dedicated id column in the `mappings` table; adding a
/// library here means adding a column there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MappedLibrary {
    #[serde(rename = "phosphor")]
    Phosphor,
    #[serde(rename = "hugeicons")]
    HugeIcons,
}

impl MappedLibrary {
    /// All mapped libraries, in matching order.
    pub const ALL: [MappedLibrary; 2] = [MappedLibrary::Phosphor, MappedLibrary::HugeIcons];

    /// The underlying library.
    pub fn library(self) -> Library {
        match self {
            MappedLibrary::Phosphor => Library::Phosphor,
            MappedLibrary::HugeIcons => Library::HugeIcons,
        }
    }

    /// Stable string id, same as the underlying library's.
    pub fn id(self) -> &'static str {
        self.library().id()
    }
}

impl std::fmt::Display for MappedLibrary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}
