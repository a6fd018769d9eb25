//! Static portfolio content: the records the ready view iterates over.
//! The shell never validates or transforms these; rendering only.

use bevy::prelude::*;
use serde::Deserialize;
use std::{fs, path::Path};

/// Reference content compiled into the binary; used whenever no content
/// file is supplied or the supplied one fails to load.
const EMBEDDED_PROFILE: &str = include_str!("../../assets/content/profile.ron");

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct PersonalInfo {
    pub name: String,
    pub location: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub github: String,
    pub leetcode: String,
    pub summary: String,
    pub profile_photo: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tech: Vec<String>,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Experience {
    pub role: String,
    pub company: String,
    pub location: String,
    pub duration: String,
    pub duties: Vec<String>,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    pub image: String,
}

/// Ordered category -> skill names. A vec of pairs rather than a map so the
/// on-screen order is exactly the file order.
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct SkillGroup {
    pub category: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub location: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Leadership {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Deserialize, Resource, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Portfolio {
    pub personal: PersonalInfo,
    pub experiences: Vec<Experience>,
    pub projects: Vec<Project>,
    pub skills: Vec<SkillGroup>,
    pub education: Education,
    pub certifications: Vec<Certification>,
    pub leadership: Vec<Leadership>,
}

impl Portfolio {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read content: {e}"))?;
        ron::from_str(&data).map_err(|e| format!("parse RON: {e}"))
    }

    /// Embedded reference content; infallible for callers (a broken embed is
    /// a build defect, surfaced as an empty portfolio rather than a panic).
    pub fn embedded() -> Self {
        ron::from_str(EMBEDDED_PROFILE).unwrap_or_default()
    }

    /// Load from `path`, falling back to the embedded content on any error.
    pub fn load_or_embedded(path: impl AsRef<Path>) -> (Self, Option<String>) {
        match Self::load_from_file(&path) {
            Ok(p) => (p, None),
            Err(e) => (Self::embedded(), Some(e)),
        }
    }
}
