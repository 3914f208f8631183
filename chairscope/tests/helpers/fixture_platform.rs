//! In-memory review platform
//!
//! Backs pipeline tests with plain tables instead of HTTP. Lookup semantics
//! mirror the real client: unknown groups fail, unknown edge invitations
//! come back empty, listings return whatever was added, profile search only
//! returns profiles that exist.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chairscope_common::platform::{
    Edge, Group, Note, NoteDetails, Platform, PlatformError, Profile, ProfileContent, Reply,
};
use serde_json::Value;

#[derive(Default)]
pub struct FixturePlatform {
    groups: BTreeMap<String, Vec<String>>,
    edges: BTreeMap<String, Vec<Edge>>,
    notes: BTreeMap<String, Vec<Note>>,
    profiles: Vec<Profile>,
}

impl FixturePlatform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_group(&mut self, id: &str, members: &[&str]) {
        self.groups.insert(
            id.to_string(),
            members.iter().map(|m| m.to_string()).collect(),
        );
    }

    pub fn add_edge(&mut self, invitation: &str, head: &str, tail: &str, weight: Option<f64>) {
        self.edges
            .entry(invitation.to_string())
            .or_default()
            .push(Edge {
                head: head.to_string(),
                tail: tail.to_string(),
                weight,
            });
    }

    pub fn add_note(&mut self, invitation: &str, note: Note) {
        self.notes
            .entry(invitation.to_string())
            .or_default()
            .push(note);
    }

    pub fn add_profile(
        &mut self,
        id: &str,
        preferred: Option<&str>,
        confirmed: &[&str],
        listed: &[&str],
    ) {
        self.profiles.push(Profile {
            id: id.to_string(),
            content: ProfileContent {
                preferred_email: preferred.map(str::to_string),
                emails_confirmed: confirmed.iter().map(|e| e.to_string()).collect(),
                emails: listed.iter().map(|e| e.to_string()).collect(),
            },
        });
    }
}

#[async_trait]
impl Platform for FixturePlatform {
    async fn get_group(&self, id: &str) -> Result<Group, PlatformError> {
        self.groups
            .get(id)
            .map(|members| Group {
                id: id.to_string(),
                members: members.clone(),
            })
            .ok_or_else(|| PlatformError::GroupNotFound(id.to_string()))
    }

    async fn get_edges(
        &self,
        invitation: &str,
        head: Option<&str>,
        tail: Option<&str>,
    ) -> Result<Vec<Edge>, PlatformError> {
        let edges = self.edges.get(invitation).cloned().unwrap_or_default();
        Ok(edges
            .into_iter()
            .filter(|e| head.map_or(true, |h| e.head == h))
            .filter(|e| tail.map_or(true, |t| e.tail == t))
            .collect())
    }

    async fn list_notes(
        &self,
        invitation: &str,
        _details: Option<&str>,
    ) -> Result<Vec<Note>, PlatformError> {
        Ok(self.notes.get(invitation).cloned().unwrap_or_default())
    }

    async fn search_profiles(&self, ids: &[String]) -> Result<Vec<Profile>, PlatformError> {
        Ok(self
            .profiles
            .iter()
            .filter(|p| ids.contains(&p.id))
            .cloned()
            .collect())
    }
}

/// Note with the given content fields and no replies.
pub fn note(number: u64, id: &str, original: Option<&str>, content: Value) -> Note {
    Note {
        id: id.to_string(),
        number,
        original: original.map(str::to_string),
        content: content.as_object().cloned().unwrap_or_default(),
        details: None,
    }
}

/// Note carrying direct replies, the shape commitment-site listings return.
pub fn note_with_replies(number: u64, id: &str, content: Value, replies: Vec<Reply>) -> Note {
    let mut n = note(number, id, None, content);
    n.details = Some(NoteDetails {
        direct_replies: replies,
    });
    n
}

/// Reply with a single invitation and signature.
pub fn reply(invitation: &str, signature: &str, content: Value) -> Reply {
    Reply {
        invitation: Some(invitation.to_string()),
        invitations: Vec::new(),
        signatures: vec![signature.to_string()],
        content: content.as_object().cloned().unwrap_or_default(),
    }
}
