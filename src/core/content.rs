//! Typed content documents and the read-only store that owns them.
//!
//! Every page renders from exactly one of these documents. The shapes are
//! the contract: a field a page needs but a document lacks is a
//! deserialization error at [`Store::load`], never a render-time branch.

use crate::core::assets;
use crate::core::error::FolioError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Home page: internship overview facts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HomeDoc {
    pub title: String,
    pub tagline: String,
    pub internship: InternshipFacts,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InternshipFacts {
    pub dates: String,
    pub length: String,
    pub company: String,
    pub tutor: String,
}

/// Company page: organization profile fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyDoc {
    pub activity: String,
    pub sector: String,
    pub history: String,
    pub organization: String,
    pub practices: String,
}

/// One Context-Actions-Result narrative block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarItem {
    pub context: String,
    pub actions: Vec<String>,
    pub result: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kpis: Option<Vec<String>>,
}

/// A single media proof. The tag is the contract: anything other than
/// `image` or `video` fails deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum EvidenceItem {
    Image {
        src: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        caption: Option<String>,
    },
    Video {
        src: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        caption: Option<String>,
    },
}

impl EvidenceItem {
    pub fn caption(&self) -> Option<&str> {
        match self {
            EvidenceItem::Image { caption, .. } | EvidenceItem::Video { caption, .. } => {
                caption.as_deref()
            }
        }
    }
}

/// Experience page: CAR items plus evidence and footnote ids.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceDoc {
    pub items: Vec<CarItem>,
    #[serde(default)]
    pub proofs: Vec<EvidenceItem>,
    #[serde(default)]
    pub sources: Vec<String>,
}

/// Critical-thinking page: four narrative fields plus footnote ids.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CriticalThinkingDoc {
    pub observed: String,
    pub assumptions: String,
    pub validation: String,
    pub proscons: String,
    #[serde(default)]
    pub sources: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CvLink {
    pub url: String,
    pub label: String,
}

/// On-this-subject page: CV reference plus career narrative.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OnThisSubjectDoc {
    pub cv: CvLink,
    pub career: String,
    #[serde(default)]
    pub sources: Vec<String>,
}

/// One footnote registry record, resolved by stable string id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceEntry {
    pub url: String,
    pub label: String,
}

/// Process-wide, read-only content store. Parsed once at startup from the
/// embedded documents; getters never fail after a successful load.
#[derive(Debug, Clone)]
pub struct Store {
    home: HomeDoc,
    company: CompanyDoc,
    experience: ExperienceDoc,
    critical_thinking: CriticalThinkingDoc,
    on_this_subject: OnThisSubjectDoc,
    sources: BTreeMap<String, SourceEntry>,
}

fn embedded(topic: &str) -> Result<&'static str, FolioError> {
    assets::get_embedded_doc(topic).ok_or_else(|| {
        FolioError::ValidationError(format!("no embedded content document for topic '{topic}'"))
    })
}

impl Store {
    /// Parse all embedded documents. A malformed document is an authoring
    /// defect and fails the whole load.
    pub fn load() -> Result<Self, FolioError> {
        Ok(Store {
            home: serde_json::from_str(embedded("home")?)?,
            company: serde_json::from_str(embedded("company")?)?,
            experience: serde_json::from_str(embedded("experience")?)?,
            critical_thinking: serde_json::from_str(embedded("critical-thinking")?)?,
            on_this_subject: serde_json::from_str(embedded("on-this-subject")?)?,
            sources: serde_json::from_str(embedded("sources")?)?,
        })
    }

    pub fn home(&self) -> &HomeDoc {
        &self.home
    }

    pub fn company(&self) -> &CompanyDoc {
        &self.company
    }

    pub fn experience(&self) -> &ExperienceDoc {
        &self.experience
    }

    pub fn critical_thinking(&self) -> &CriticalThinkingDoc {
        &self.critical_thinking
    }

    pub fn on_this_subject(&self) -> &OnThisSubjectDoc {
        &self.on_this_subject
    }

    /// Resolve a footnote id. A missing id is a content-authoring bug and
    /// must surface as an error, never as a skipped entry.
    pub fn source(&self, id: &str) -> Result<&SourceEntry, FolioError> {
        self.sources
            .get(id)
            .ok_or_else(|| FolioError::NotFound(format!("source id '{id}' is not registered")))
    }

    /// Registry contents in id order, for the CLI listing surface.
    pub fn sources(&self) -> impl Iterator<Item = (&str, &SourceEntry)> {
        self.sources.iter().map(|(id, entry)| (id.as_str(), entry))
    }
}
