//! Site copy, deserialized from the embedded content document.
//!
//! Sections only read from these records; nothing here is mutated after load.

use serde::{Deserialize, Serialize};

use crate::config;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct SiteContent {
    pub hero: Hero,
    pub services: Services,
    pub case_studies: Vec<CaseStudy>,
    pub framework: Framework,
    pub testimonials: Vec<Testimonial>,
    pub gallery: Gallery,
    pub contact: Contact,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Hero {
    pub name: String,
    pub headline: String,
    pub philosophy: String,
    pub resume_href: String,
    pub snapshot_bars: Vec<u32>,
    pub stats: Vec<HeroStat>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct HeroStat {
    pub label: String,
    pub value: f64,
    #[serde(default)]
    pub decimals: u32,
    #[serde(default)]
    pub suffix: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Services {
    pub intro: String,
    pub skills: Vec<Skill>,
    pub highlights: Vec<Highlight>,
    pub platforms: Vec<Platform>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Skill {
    pub name: String,
    pub percentage: u32,
    pub accent: Accent,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Highlight {
    pub value: String,
    pub label: String,
    pub accent: Accent,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Platform {
    pub name: String,
    pub note: String,
    pub accent: Accent,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    Blue,
    Yellow,
    Green,
    Red,
    Purple,
    Teal,
    Pink,
}

impl Accent {
    pub fn class(self) -> &'static str {
        match self {
            Accent::Blue => "accent-blue",
            Accent::Yellow => "accent-yellow",
            Accent::Green => "accent-green",
            Accent::Red => "accent-red",
            Accent::Purple => "accent-purple",
            Accent::Teal => "accent-teal",
            Accent::Pink => "accent-pink",
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct CaseStudy {
    pub id: String,
    pub company: String,
    pub period: String,
    pub headline: String,
    pub client: String,
    pub industry: String,
    pub overview: String,
    pub objective: String,
    pub phases: Vec<Phase>,
    #[serde(default)]
    pub insight: Option<String>,
    pub outcome: Vec<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Phase {
    pub title: String,
    #[serde(default)]
    pub period: Option<String>,
    pub challenge: String,
    pub actions: Vec<String>,
    pub result: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Framework {
    pub title: String,
    pub subtitle: String,
    pub intro: String,
    pub steps: Vec<FrameworkStep>,
    pub result: Callout,
    pub bonus: Callout,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct FrameworkStep {
    pub letter: String,
    pub title: String,
    pub description: String,
    pub accent: Accent,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Callout {
    pub title: String,
    pub body: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Testimonial {
    pub name: String,
    pub role: String,
    pub company: String,
    pub quote: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Gallery {
    pub categories: Vec<String>,
    pub items: Vec<GalleryItem>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct GalleryItem {
    pub id: String,
    pub title: String,
    pub category: String,
    pub description: String,
    pub image: String,
    pub date: String,
    pub tags: Vec<String>,
}

pub const ALL_CATEGORIES: &str = "All";

impl Gallery {
    pub fn filtered<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a GalleryItem> + 'a {
        self.items
            .iter()
            .filter(move |item| category == ALL_CATEGORIES || item.category == category)
    }

    pub fn has_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Contact {
    pub intro: String,
    pub email: String,
    pub linkedin: String,
    pub availability_note: String,
    pub location: String,
    pub response_time: String,
    pub closing_pitch: String,
}

impl SiteContent {
    pub fn load() -> Result<Self, serde_json::Error> {
        Self::parse(config::SITE_CONTENT)
    }

    pub fn parse(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn case_study_ids(&self) -> Vec<String> {
        self.case_studies.iter().map(|c| c.id.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn embedded_content_parses() {
        let content = SiteContent::load().unwrap();
        assert_eq!(content.hero.stats.len(), 3);
        assert!(!content.services.skills.is_empty());
        assert!(!content.case_studies.is_empty());
        assert_eq!(content.framework.steps.len(), 4);
        assert_eq!(content.testimonials.len(), 5);
    }

    #[test]
    fn hero_counters_show_one_decimal_place() {
        let content = SiteContent::load().unwrap();
        for stat in &content.hero.stats {
            assert_eq!(stat.decimals, 1, "{}", stat.label);
        }
    }

    #[test]
    fn ids_are_unique() {
        let content = SiteContent::load().unwrap();
        let cases: HashSet<_> = content.case_study_ids().into_iter().collect();
        assert_eq!(cases.len(), content.case_studies.len());
        let items: HashSet<_> = content.gallery.items.iter().map(|i| &i.id).collect();
        assert_eq!(items.len(), content.gallery.items.len());
    }

    #[test]
    fn every_gallery_item_has_a_listed_category() {
        let content = SiteContent::load().unwrap();
        assert_eq!(content.gallery.categories.first().map(String::as_str), Some(ALL_CATEGORIES));
        for item in &content.gallery.items {
            assert!(content.gallery.has_category(&item.category), "{}", item.category);
        }
    }

    #[test]
    fn filtering_by_category() {
        let content = SiteContent::load().unwrap();
        let gallery = &content.gallery;
        assert_eq!(gallery.filtered(ALL_CATEGORIES).count(), gallery.items.len());
        assert!(gallery.filtered("Analytics").all(|i| i.category == "Analytics"));
        assert_eq!(gallery.filtered("Analytics").count(), 1);
        assert_eq!(gallery.filtered("Nonexistent").count(), 0);
    }

    #[test]
    fn malformed_content_is_an_error() {
        assert!(SiteContent::parse("{\"hero\": 3}").is_err());
    }

    #[test]
    fn accents_deserialize_lowercase() {
        let accent: Accent = serde_json::from_str("\"teal\"").unwrap();
        assert_eq!(accent.class(), "accent-teal");
    }
}
