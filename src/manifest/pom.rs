//! Maven POM scope resolution
//!
//! Handles:
//! - `<dependencyManagement><dependencies>` declarations
//! - Top-level `<dependencies>` declarations (outside dependency management)
//! - `<exclusion>` entries, which are never taken for declarations
//! - Implicit `compile` scope when a declaration has no `<scope>`
//!
//! The POM is scanned line by line with a small tag stack instead of a
//! full XML parser: every tag of interest sits on its own line, and tag
//! names are matched case-insensitively regardless of indentation.

use crate::domain::DependencyScope;
use crate::error::{AppError, StructureError};
use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

const DOCUMENT: &str = "the POM";

// Opening tag on its own line: <dependency> or <plugin combine.children="append">
static OPEN_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^<([A-Za-z][\w.\-]*)(?:\s[^>]*)?>$").unwrap());

// Closing tag on its own line: </dependency>
static CLOSE_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^</([A-Za-z][\w.\-]*)\s*>$").unwrap());

// Single-line element: <groupId>org.example</groupId>
static ELEMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^<([A-Za-z][\w.\-]*)>([^<]*)</([A-Za-z][\w.\-]*)>$").unwrap()
});

/// Trait for classifying the scope of a dependency
pub trait ScopeResolver {
    /// Resolve the effective scope of `groupId:artifactId`.
    ///
    /// Returns `None` when the dependency is not declared at all.
    fn resolve(
        &self,
        group_id: &str,
        artifact_id: &str,
    ) -> Result<Option<DependencyScope>, AppError>;
}

/// A single line classified by the tag scanner
#[derive(Debug, PartialEq, Eq)]
enum Tag<'a> {
    Open(String),
    Close(String),
    Element { name: String, value: &'a str },
}

impl<'a> Tag<'a> {
    fn parse(line: &'a str) -> Option<Self> {
        if let Some(caps) = ELEMENT_RE.captures(line) {
            let name = caps.get(1)?.as_str();
            let closing = caps.get(3)?.as_str();
            if !name.eq_ignore_ascii_case(closing) {
                return None;
            }
            return Some(Tag::Element {
                name: name.to_lowercase(),
                value: caps.get(2)?.as_str().trim(),
            });
        }

        if let Some(caps) = CLOSE_TAG_RE.captures(line) {
            return Some(Tag::Close(caps.get(1)?.as_str().to_lowercase()));
        }

        if line.ends_with("/>") {
            return None;
        }

        OPEN_TAG_RE
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|name| Tag::Open(name.as_str().to_lowercase()))
    }
}

/// A `<dependency>` block with its direct children
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Declaration {
    group_id: Option<String>,
    artifact_id: Option<String>,
    scope: Option<String>,
}

impl Declaration {
    fn explicit_scope(&self) -> Result<Option<DependencyScope>, AppError> {
        match &self.scope {
            Some(raw) => Ok(Some(raw.parse::<DependencyScope>()?)),
            None => Ok(None),
        }
    }
}

/// Scope resolver backed by the dependency sections of a POM
#[derive(Debug, Clone, Default)]
pub struct PomScopeResolver {
    /// Declarations in `<dependencyManagement><dependencies>`
    managed: Vec<Declaration>,
    /// Declarations in the top-level `<dependencies>`
    dependencies: Vec<Declaration>,
}

impl PomScopeResolver {
    /// Parse the dependency sections of a POM
    pub fn parse(content: &str) -> Result<Self, StructureError> {
        let lines: Vec<&str> = content.lines().collect();

        let management = find_block(
            &lines,
            "<dependencyManagement>",
            "</dependencyManagement>",
            None,
        )?;
        let dependencies = find_block(
            &lines,
            "<dependencies>",
            "</dependencies>",
            management.as_ref(),
        )?;

        let scan = |range: Option<Range<usize>>| match range {
            Some(range) => scan_declarations(&lines[range]),
            None => Ok(Vec::new()),
        };

        Ok(Self {
            managed: scan(management)?,
            dependencies: scan(dependencies)?,
        })
    }

    /// Number of declarations in the top-level `<dependencies>`
    pub fn dependency_count(&self) -> usize {
        self.dependencies.len()
    }

    /// Number of declarations in `<dependencyManagement>`
    pub fn managed_count(&self) -> usize {
        self.managed.len()
    }
}

impl ScopeResolver for PomScopeResolver {
    fn resolve(
        &self,
        group_id: &str,
        artifact_id: &str,
    ) -> Result<Option<DependencyScope>, AppError> {
        let declared = find_declaration(&self.dependencies, group_id, artifact_id)?;
        if let Some(scope) = declared.map(Declaration::explicit_scope).transpose()?.flatten() {
            return Ok(Some(scope));
        }

        let managed = find_declaration(&self.managed, group_id, artifact_id)?;
        if let Some(scope) = managed.map(Declaration::explicit_scope).transpose()?.flatten() {
            return Ok(Some(scope));
        }

        if declared.is_some() || managed.is_some() {
            return Ok(Some(DependencyScope::Compile));
        }

        Ok(None)
    }
}

/// Locate the lines between `open` and `close`, both excluded.
///
/// Lines inside `skip` are never taken as the opening line.
fn find_block(
    lines: &[&str],
    open: &str,
    close: &str,
    skip: Option<&Range<usize>>,
) -> Result<Option<Range<usize>>, StructureError> {
    let Some(open_idx) = lines
        .iter()
        .enumerate()
        .filter(|(idx, _)| !skip.is_some_and(|range| range.contains(idx)))
        .find(|(_, line)| is_tag_line(line, open))
        .map(|(idx, _)| idx)
    else {
        return Ok(None);
    };

    let start = open_idx + 1;
    let end = lines[start..]
        .iter()
        .position(|line| is_tag_line(line, close))
        .map(|offset| start + offset)
        .ok_or_else(|| StructureError::unterminated(close, DOCUMENT))?;

    Ok(Some(start..end))
}

fn is_tag_line(line: &str, tag: &str) -> bool {
    line.trim().eq_ignore_ascii_case(tag)
}

/// Collect the `<dependency>` blocks of a section.
///
/// Elements are attributed to a declaration only when they are direct
/// children of `<dependency>`, so coordinates inside `<exclusion>` blocks
/// are ignored.
fn scan_declarations(lines: &[&str]) -> Result<Vec<Declaration>, StructureError> {
    let mut declarations = Vec::new();
    let mut stack: Vec<String> = Vec::new();
    let mut current: Option<Declaration> = None;

    for line in lines {
        match Tag::parse(line.trim()) {
            Some(Tag::Open(name)) => {
                if name == "dependency" && current.is_none() {
                    current = Some(Declaration::default());
                }
                stack.push(name);
            }
            Some(Tag::Close(name)) => {
                // tolerate stray closing tags
                if let Some(pos) = stack.iter().rposition(|open| *open == name) {
                    stack.truncate(pos);
                }
                if name == "dependency" && !stack.iter().any(|open| open == "dependency") {
                    declarations.extend(current.take());
                }
            }
            Some(Tag::Element { name, value }) => {
                let Some(declaration) = current.as_mut() else {
                    continue;
                };
                // empty elements such as <scope></scope> count as absent
                if value.is_empty() || stack.last().map(String::as_str) != Some("dependency") {
                    continue;
                }
                let slot = match name.as_str() {
                    "groupid" => &mut declaration.group_id,
                    "artifactid" => &mut declaration.artifact_id,
                    "scope" => &mut declaration.scope,
                    _ => continue,
                };
                slot.get_or_insert_with(|| value.to_string());
            }
            None => {}
        }
    }

    if current.is_some() {
        return Err(StructureError::unterminated("</dependency>", DOCUMENT));
    }

    Ok(declarations)
}

/// Find the first declaration of `groupId:artifactId`.
///
/// Group ids compare case-insensitively, artifact ids exactly.
fn find_declaration<'a>(
    declarations: &'a [Declaration],
    group_id: &str,
    artifact_id: &str,
) -> Result<Option<&'a Declaration>, StructureError> {
    for declaration in declarations {
        let matches_group = declaration
            .group_id
            .as_deref()
            .is_some_and(|group| group.eq_ignore_ascii_case(group_id));
        if !matches_group {
            continue;
        }

        let actual = declaration.artifact_id.as_deref().ok_or_else(|| {
            StructureError::MissingArtifactId {
                group_id: group_id.to_string(),
            }
        })?;
        if actual == artifact_id {
            return Ok(Some(declaration));
        }
    }

    Ok(None)
}
