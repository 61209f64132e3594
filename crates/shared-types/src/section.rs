use serde::{Deserialize, Serialize};

use crate::access::{has_capability, Capability};
use crate::models::Role;

/// Identifier of a navigable top-level view.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Dashboard,
    Analytics,
    Reports,
    Tickets,
    Users,
    Docs,
}

impl SectionId {
    /// Parse a URL segment. Unknown ids yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "dashboard" => Some(SectionId::Dashboard),
            "analytics" => Some(SectionId::Analytics),
            "reports" => Some(SectionId::Reports),
            "tickets" => Some(SectionId::Tickets),
            "users" => Some(SectionId::Users),
            "docs" => Some(SectionId::Docs),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::Dashboard => "dashboard",
            SectionId::Analytics => "analytics",
            SectionId::Reports => "reports",
            SectionId::Tickets => "tickets",
            SectionId::Users => "users",
            SectionId::Docs => "docs",
        }
    }

    pub fn section(&self) -> &'static Section {
        // SECTIONS is indexed in declaration order
        &SECTIONS[*self as usize]
    }
}

impl std::fmt::Display for SectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub id: SectionId,
    pub label: &'static str,
    pub required: Capability,
}

/// Every section, in sidebar order.
pub static SECTIONS: [Section; 6] = [
    Section {
        id: SectionId::Dashboard,
        label: "Dashboard",
        required: Capability::Dashboard,
    },
    Section {
        id: SectionId::Analytics,
        label: "Análisis",
        required: Capability::Analysis,
    },
    Section {
        id: SectionId::Reports,
        label: "Reportes",
        required: Capability::Analysis,
    },
    Section {
        id: SectionId::Tickets,
        label: "Métricas",
        required: Capability::Analysis,
    },
    Section {
        id: SectionId::Users,
        label: "Usuarios",
        required: Capability::Admin,
    },
    Section {
        id: SectionId::Docs,
        label: "Documentación",
        required: Capability::Dashboard,
    },
];

/// Sections the role may open, in sidebar order.
pub fn sections_for(role: Option<Role>) -> Vec<&'static Section> {
    SECTIONS
        .iter()
        .filter(|s| has_capability(role, s.required))
        .collect()
}

/// Look up a section by URL segment, only if the role may view it.
pub fn reachable_section(role: Option<Role>, id: &str) -> Option<SectionId> {
    SectionId::parse(id).filter(|s| has_capability(role, s.section().required))
}

/// Static project document linked from the docs section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectDoc {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub href: &'static str,
}

pub static PROJECT_DOCS: [ProjectDoc; 3] = [
    ProjectDoc {
        title: "Checklist",
        subtitle: "Lista de verificación",
        href: "/docs/Checklist.html",
    },
    ProjectDoc {
        title: "Diagrama Gantt",
        subtitle: "Cronograma",
        href: "/docs/Gannt.html",
    },
    ProjectDoc {
        title: "Matriz",
        subtitle: "Matriz de análisis",
        href: "/docs/Matriz.html",
    },
];
