use std::collections::HashSet;
use std::path::PathBuf;

use crate::domain::error::DomainError;

/// Project tree ready for materialization.
///
/// Output of rendering the starter templates. It contains no business
/// logic, only data; the scaffold service writes it through the
/// `Filesystem` port.
#[derive(Debug, Clone)]
pub struct ProjectStructure {
    pub(crate) root: PathBuf,
    pub(crate) entries: Vec<FsEntry>,
}

impl ProjectStructure {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            entries: Vec::new(),
        }
    }

    pub fn add_file(&mut self, path: impl Into<PathBuf>, content: String) {
        self.entries.push(FsEntry::File(FileToWrite {
            path: path.into(),
            content,
        }));
    }

    pub fn add_directory(&mut self, path: impl Into<PathBuf>) {
        self.entries.push(FsEntry::Directory(DirectoryToCreate { path: path.into() }));
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, content: String) -> Self {
        self.add_file(path, content);
        self
    }

    pub fn with_directory(mut self, path: impl Into<PathBuf>) -> Self {
        self.add_directory(path);
        self
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.entries.is_empty() {
            return Err(DomainError::EmptyStructure);
        }

        let mut seen = HashSet::new();
        for entry in &self.entries {
            let path = entry.path();

            let path_str = path.display().to_string();
            if !seen.insert(path_str.clone()) {
                return Err(DomainError::DuplicatePath { path: path_str });
            }

            if path.is_absolute() {
                return Err(DomainError::AbsolutePathNotAllowed { path: path_str });
            }
        }

        Ok(())
    }

    pub fn root(&self) -> &PathBuf {
        &self.root
    }

    pub fn entries(&self) -> &[FsEntry] {
        &self.entries
    }

    pub fn files(&self) -> impl Iterator<Item = &FileToWrite> {
        self.entries.iter().filter_map(|e| match e {
            FsEntry::File(f) => Some(f),
            _ => None,
        })
    }

    pub fn directories(&self) -> impl Iterator<Item = &DirectoryToCreate> {
        self.entries.iter().filter_map(|e| match e {
            FsEntry::Directory(d) => Some(d),
            _ => None,
        })
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}

#[derive(Debug, Clone)]
pub enum FsEntry {
    File(FileToWrite),
    Directory(DirectoryToCreate),
}

impl FsEntry {
    pub fn path(&self) -> &PathBuf {
        match self {
            FsEntry::File(f) => &f.path,
            FsEntry::Directory(d) => &d.path,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FileToWrite {
    pub path: PathBuf,
    pub content: String,
}

#[derive(Debug, Clone)]
pub struct DirectoryToCreate {
    pub path: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_structure_is_invalid() {
        assert_eq!(
            ProjectStructure::new("p").validate(),
            Err(DomainError::EmptyStructure)
        );
    }

    #[test]
    fn duplicate_paths_rejected() {
        let s = ProjectStructure::new("p")
            .with_file("a.txt", "1".into())
            .with_file("a.txt", "2".into());
        assert!(matches!(s.validate(), Err(DomainError::DuplicatePath { .. })));
    }

    #[test]
    fn absolute_paths_rejected() {
        let s = ProjectStructure::new("p").with_directory("/etc");
        assert!(matches!(
            s.validate(),
            Err(DomainError::AbsolutePathNotAllowed { .. })
        ));
    }

    #[test]
    fn files_and_directories_are_split() {
        let s = ProjectStructure::new("p")
            .with_directory("src")
            .with_file("src/a.rs", String::new());
        assert_eq!(s.files().count(), 1);
        assert_eq!(s.directories().count(), 1);
        assert_eq!(s.entry_count(), 2);
    }
}
