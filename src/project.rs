//! Project record model
//!
//! A [`ProjectRecord`] is one row of output, built in full from a single
//! project detail page before it is handed to the writer.

/// Column names of the output file, in record field order
pub const COLUMNS: [&str; 12] = [
    "title",
    "headline",
    "media",
    "inspiration",
    "what_it_does",
    "how_we_built_it",
    "challenges",
    "accomplishments",
    "lessons",
    "whats_next",
    "built_with",
    "demos",
];

/// The free-text sections of a project write-up
///
/// Each section is found by an `h2` heading whose visible text equals
/// [`NarrativeSection::label`] exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NarrativeSection {
    Inspiration,
    WhatItDoes,
    HowWeBuiltIt,
    Challenges,
    Accomplishments,
    Lessons,
    WhatsNext,
}

impl NarrativeSection {
    /// All sections in column order
    pub const ALL: [NarrativeSection; 7] = [
        Self::Inspiration,
        Self::WhatItDoes,
        Self::HowWeBuiltIt,
        Self::Challenges,
        Self::Accomplishments,
        Self::Lessons,
        Self::WhatsNext,
    ];

    /// Returns the column name of this section
    pub fn field_name(&self) -> &'static str {
        match self {
            Self::Inspiration => "inspiration",
            Self::WhatItDoes => "what_it_does",
            Self::HowWeBuiltIt => "how_we_built_it",
            Self::Challenges => "challenges",
            Self::Accomplishments => "accomplishments",
            Self::Lessons => "lessons",
            Self::WhatsNext => "whats_next",
        }
    }

    /// Returns the heading text that introduces this section.
    ///
    /// The "what's next" heading names the project, so the label is rendered
    /// with the project title before matching.
    pub fn label(&self, title: &str) -> String {
        match self {
            Self::Inspiration => "Inspiration".to_string(),
            Self::WhatItDoes => "What it does".to_string(),
            Self::HowWeBuiltIt => "How we built it".to_string(),
            Self::Challenges => "Challenges we ran into".to_string(),
            Self::Accomplishments => "Accomplishments that we're proud of".to_string(),
            Self::Lessons => "What we learned".to_string(),
            Self::WhatsNext => format!("What's next for {}", title),
        }
    }
}

/// Narrative text keyed by section
///
/// `None` means the heading was not found; `Some("")` means the heading was
/// found with no paragraphs after it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Narrative {
    pub inspiration: Option<String>,
    pub what_it_does: Option<String>,
    pub how_we_built_it: Option<String>,
    pub challenges: Option<String>,
    pub accomplishments: Option<String>,
    pub lessons: Option<String>,
    pub whats_next: Option<String>,
}

impl Narrative {
    /// Returns the text of a section
    pub fn get(&self, section: NarrativeSection) -> Option<&str> {
        self.slot(section).as_deref()
    }

    /// Sets the text of a section
    pub fn set(&mut self, section: NarrativeSection, text: Option<String>) {
        *self.slot_mut(section) = text;
    }

    /// Returns true if no section is present
    pub fn is_empty(&self) -> bool {
        NarrativeSection::ALL
            .iter()
            .all(|section| self.get(*section).is_none())
    }

    fn slot(&self, section: NarrativeSection) -> &Option<String> {
        match section {
            NarrativeSection::Inspiration => &self.inspiration,
            NarrativeSection::WhatItDoes => &self.what_it_does,
            NarrativeSection::HowWeBuiltIt => &self.how_we_built_it,
            NarrativeSection::Challenges => &self.challenges,
            NarrativeSection::Accomplishments => &self.accomplishments,
            NarrativeSection::Lessons => &self.lessons,
            NarrativeSection::WhatsNext => &self.whats_next,
        }
    }

    fn slot_mut(&mut self, section: NarrativeSection) -> &mut Option<String> {
        match section {
            NarrativeSection::Inspiration => &mut self.inspiration,
            NarrativeSection::WhatItDoes => &mut self.what_it_does,
            NarrativeSection::HowWeBuiltIt => &mut self.how_we_built_it,
            NarrativeSection::Challenges => &mut self.challenges,
            NarrativeSection::Accomplishments => &mut self.accomplishments,
            NarrativeSection::Lessons => &mut self.lessons,
            NarrativeSection::WhatsNext => &mut self.whats_next,
        }
    }
}

/// One crawled project
///
/// `media` and every narrative section are derived from the gallery block,
/// so a page without one has all of them absent together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectRecord {
    pub title: String,
    pub headline: String,
    pub media: Option<Vec<String>>,
    pub narrative: Narrative,
    pub built_with: Option<Vec<String>>,
    pub demos: Option<Vec<String>>,
}
