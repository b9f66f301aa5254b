use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single member file of a package.
///
/// `name` is the file name without its extension and is unique within a
/// manifest. `alias` is a human-assigned label that survives rescans.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub alias: String,
}

impl FileEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: String::new(),
        }
    }

    pub fn with_alias(name: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: alias.into(),
        }
    }
}

/// Persisted record of a package's identity, alias and member list.
///
/// Field names on the wire (`uuid`, `path`, `files`) are shared by the
/// persisted manifest and the exported `.mf` files so downstream loaders can
/// read either.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageManifest {
    #[serde(rename = "uuid", default)]
    pub identifier: String,
    #[serde(rename = "path", default)]
    pub group_path: String,
    #[serde(default)]
    pub alias: String,
    #[serde(rename = "files", default)]
    pub members: Vec<FileEntry>,
}

impl PackageManifest {
    pub fn new(identifier: impl Into<String>, group_path: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            group_path: group_path.into(),
            alias: String::new(),
            members: Vec::new(),
        }
    }

    pub fn member(&self, name: &str) -> Option<&FileEntry> {
        self.members.iter().find(|m| m.name == name)
    }

    /// Rebuild the member list from the names currently on disk.
    ///
    /// The list is replaced wholesale in the given order. Aliases of members
    /// whose name survives are carried forward, new members get an empty alias.
    pub fn reconcile<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut previous: HashMap<String, String> = self
            .members
            .drain(..)
            .map(|entry| (entry.name, entry.alias))
            .collect();

        for name in names {
            let name = name.into();
            if self.members.iter().any(|m| m.name == name) {
                // Two files sharing a stem collapse into one member
                continue;
            }
            let alias = previous.remove(&name).unwrap_or_default();
            self.members.push(FileEntry { name, alias });
        }
    }
}
