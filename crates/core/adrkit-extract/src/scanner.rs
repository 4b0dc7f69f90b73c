//! Directory scanning.
//!
//! Walks one or more paths below a project root, skipping anything that
//! matches an exclude glob, and runs the extractor on every readable text
//! file with the comment syntax chosen by its extension.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Component, Path, PathBuf};

use adrkit_types::{LocatedRecord, OrphanBlock};
use regex::Regex;
use tracing::{debug, trace};
use walkdir::WalkDir;

use crate::error::{ExtractError, ExtractResult};
use crate::extractor::Extractor;
use crate::syntax::SyntaxTable;

/// Compiled doublestar-style exclude globs.
///
/// Patterns are matched against root-relative paths with `/` separators.
/// `**` spans any number of segments (including none), `*` stays within
/// a segment and `?` matches one non-separator character. Character
/// classes and brace alternation are not supported.
#[derive(Debug, Clone, Default)]
pub struct ExcludeSet {
    patterns: Vec<(String, Regex)>,
}

impl ExcludeSet {
    pub fn new<I, S>(patterns: I) -> ExtractResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = patterns
            .into_iter()
            .map(|p| {
                let p = p.as_ref();
                compile_glob(p).map(|re| (p.to_string(), re))
            })
            .collect::<ExtractResult<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    /// An empty set that excludes nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_excluded(&self, relative: &str) -> bool {
        self.patterns.iter().any(|(_, re)| re.is_match(relative))
    }

    /// The patterns as given.
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(|(p, _)| p.as_str())
    }
}

fn compile_glob(pattern: &str) -> ExtractResult<Regex> {
    let invalid = |reason: &str| ExtractError::InvalidPattern {
        pattern: pattern.to_string(),
        reason: reason.to_string(),
    };

    if pattern.trim().is_empty() {
        return Err(invalid("pattern is empty"));
    }
    if pattern.contains("***") {
        return Err(invalid("more than two consecutive '*'"));
    }
    if let Some(c) = pattern.chars().find(|c| matches!(c, '[' | ']' | '{' | '}')) {
        return Err(invalid(&format!("unsupported character '{c}'")));
    }

    let mut re = String::from("^");
    let mut rest = pattern;
    while !rest.is_empty() {
        if let Some(tail) = rest.strip_prefix("**/") {
            re.push_str("(?:.*/)?");
            rest = tail;
        } else if rest == "/**" {
            re.push_str("(?:/.*)?");
            rest = "";
        } else if let Some(tail) = rest.strip_prefix("**") {
            re.push_str(".*");
            rest = tail;
        } else if let Some(tail) = rest.strip_prefix('*') {
            re.push_str("[^/]*");
            rest = tail;
        } else if let Some(tail) = rest.strip_prefix('?') {
            re.push_str("[^/]");
            rest = tail;
        } else {
            let len = rest.chars().next().map_or(1, char::len_utf8);
            re.push_str(&regex::escape(&rest[..len]));
            rest = &rest[len..];
        }
    }
    re.push('$');

    Regex::new(&re).map_err(|e| invalid(&e.to_string()))
}

/// Records and orphan blocks collected from a tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanOutput {
    /// Records in file order, then line order
    pub records: Vec<LocatedRecord>,
    pub orphans: Vec<OrphanBlock>,
    /// Number of files read and extracted
    pub files_scanned: usize,
}

impl ScanOutput {
    /// Records plus orphan blocks.
    pub fn annotation_count(&self) -> usize {
        self.records.len() + self.orphans.len()
    }
}

/// Walks directories and extracts records from every file.
#[derive(Debug, Clone, Default)]
pub struct Scanner {
    syntaxes: SyntaxTable,
    excludes: ExcludeSet,
}

impl Scanner {
    pub fn new(syntaxes: SyntaxTable, excludes: ExcludeSet) -> Self {
        Self { syntaxes, excludes }
    }

    /// Scan the whole tree below `root`.
    pub fn scan_root(&self, root: &Path) -> ExtractResult<ScanOutput> {
        self.scan_paths(root, &[PathBuf::from(".")])
    }

    /// Scan each of `paths` (relative to `root`), reporting locations
    /// relative to `root`. A file reachable from several paths is read once.
    pub fn scan_paths<P: AsRef<Path>>(&self, root: &Path, paths: &[P]) -> ExtractResult<ScanOutput> {
        if !root.is_dir() {
            return Err(ExtractError::RootNotFound {
                path: root.to_path_buf(),
            });
        }

        let mut output = ScanOutput::default();
        let mut seen = BTreeSet::new();

        for path in paths {
            let start = root.join(path.as_ref());
            if !start.exists() {
                return Err(ExtractError::RootNotFound { path: start });
            }

            for entry in self.walk(root, &start) {
                if !entry.file_type().is_file() {
                    continue;
                }
                let Some(relative) = relative_path(root, entry.path()) else {
                    continue;
                };
                if !seen.insert(relative.clone()) {
                    continue;
                }
                self.scan_file(entry.path(), &relative, &mut output);
            }
        }

        debug!(
            files = output.files_scanned,
            records = output.records.len(),
            orphans = output.orphans.len(),
            "scan complete"
        );
        Ok(output)
    }

    fn walk<'a>(
        &'a self,
        root: &'a Path,
        start: &Path,
    ) -> impl Iterator<Item = walkdir::DirEntry> + 'a {
        WalkDir::new(start)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(move |e| {
                if e.depth() == 0 {
                    return true;
                }
                match relative_path(root, e.path()) {
                    Some(rel) => {
                        let excluded = self.excludes.is_excluded(&rel);
                        if excluded {
                            trace!(path = %rel, "excluded");
                        }
                        !excluded
                    }
                    None => true,
                }
            })
            .filter_map(|e| match e {
                Ok(entry) => Some(entry),
                Err(err) => {
                    debug!(error = %err, "skipping unreadable entry");
                    None
                }
            })
    }

    fn scan_file(&self, path: &Path, relative: &str, output: &mut ScanOutput) {
        let source = match fs::read_to_string(path) {
            Ok(source) => source,
            Err(err) => {
                debug!(path = %relative, error = %err, "skipping unreadable file");
                return;
            }
        };

        let extractor = Extractor::new(self.syntaxes.for_path(path).clone());
        let extraction = extractor.scan(&source).with_file(relative);
        if !extraction.is_empty() {
            debug!(
                path = %relative,
                records = extraction.records.len(),
                "found decision tags"
            );
        }

        output.files_scanned += 1;
        output.records.extend(extraction.records);
        output.orphans.extend(extraction.orphans);
    }
}

/// Root-relative path with `/` separators; `None` outside the root.
fn relative_path(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let parts: Vec<_> = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy()),
            _ => None,
        })
        .collect();
    Some(parts.join("/"))
}
