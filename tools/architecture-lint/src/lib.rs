//! Repo-local lint that keeps the vibecheck hexagon intact.
//!
//! `backend/src/domain` holds the classification and streak rules and
//! their ports; `backend/src/outbound` holds the HTTP clients and stores
//! that implement those ports. The lint parses every file under both
//! directories and reports:
//!
//! - domain code that names `crate::outbound` (or `vibecheck::outbound`)
//! - domain code that uses HTTP client, configuration, CLI or subscriber
//!   crates
//! - outbound code that loads configuration or parses command lines itself
//!
//! Run it with `cargo run -p architecture-lint` from the workspace root.

use std::collections::BTreeSet;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use syn::visit::Visit;

/// Name of the linted crate as seen from its integration tests and bins.
const CRATE_NAME: &str = "vibecheck";

/// Top-level modules of the linted crate that rules may refer to.
const KNOWN_MODULES: [&str; 3] = ["domain", "outbound", "settings"];

/// One broken boundary rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// File path relative to `backend/src`.
    pub file: PathBuf,
    /// Which rule was broken.
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.file.display(), self.message)
    }
}

/// Failure modes returned by the lint.
#[derive(Debug)]
pub enum ArchitectureLintError {
    /// Reading the source tree failed.
    Io(io::Error),
    /// A file could not be parsed or sits outside a known layer.
    Parse {
        /// File path relative to `backend/src`.
        file: PathBuf,
        /// Parser or layout message.
        message: String,
    },
    /// At least one rule was broken.
    Violations(Vec<Violation>),
}

impl fmt::Display for ArchitectureLintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "architecture lint could not read sources: {err}"),
            Self::Parse { file, message } => {
                write!(f, "architecture lint could not parse {}: {message}", file.display())
            }
            Self::Violations(violations) => {
                writeln!(f, "{} architecture violation(s):", violations.len())?;
                violations
                    .iter()
                    .try_for_each(|violation| writeln!(f, "- {violation}"))
            }
        }
    }
}

impl std::error::Error for ArchitectureLintError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse { .. } | Self::Violations(_) => None,
        }
    }
}

impl From<io::Error> for ArchitectureLintError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

/// A Rust source file to be linted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintSource {
    /// Path relative to `backend/src`.
    pub file: PathBuf,
    /// File contents.
    pub contents: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Layer {
    Domain,
    Outbound,
}

struct LayerRules {
    name: &'static str,
    forbidden_modules: &'static [&'static str],
    forbidden_crates: &'static [&'static str],
}

const DOMAIN_RULES: LayerRules = LayerRules {
    name: "domain",
    forbidden_modules: &["outbound", "settings"],
    forbidden_crates: &[
        "clap",
        "hyper",
        "ortho_config",
        "reqwest",
        "tracing_subscriber",
    ],
};

const OUTBOUND_RULES: LayerRules = LayerRules {
    name: "outbound",
    forbidden_modules: &["settings"],
    forbidden_crates: &["clap", "ortho_config", "tracing_subscriber"],
};

impl Layer {
    const DIRECTORIES: [&'static str; 2] = ["domain", "outbound"];

    fn of(file: &Path) -> Option<Self> {
        match file.components().next()?.as_os_str().to_str()? {
            "domain" => Some(Self::Domain),
            "outbound" => Some(Self::Outbound),
            _ => None,
        }
    }

    const fn rules(self) -> &'static LayerRules {
        match self {
            Self::Domain => &DOMAIN_RULES,
            Self::Outbound => &OUTBOUND_RULES,
        }
    }
}

/// Lint the sources under `backend_dir/src`.
///
/// # Errors
///
/// Returns [`ArchitectureLintError`] when the tree cannot be read or parsed,
/// or when any rule is broken.
pub fn lint_backend_sources(backend_dir: &Path) -> Result<(), ArchitectureLintError> {
    let src_dir = backend_dir.join("src");
    let mut sources = Vec::new();
    for directory in Layer::DIRECTORIES {
        let layer_dir = src_dir.join(directory);
        if layer_dir.is_dir() {
            read_tree(&src_dir, &layer_dir, &mut sources)?;
        }
    }
    lint_sources(&sources)
}

/// Lint in-memory sources.
///
/// # Errors
///
/// Returns [`ArchitectureLintError`] when a file cannot be parsed or sits
/// outside a known layer, or when any rule is broken.
pub fn lint_sources(sources: &[LintSource]) -> Result<(), ArchitectureLintError> {
    let mut violations = Vec::new();
    for source in sources {
        let layer = Layer::of(&source.file).ok_or_else(|| ArchitectureLintError::Parse {
            file: source.file.clone(),
            message: "file is not under domain/ or outbound/".to_owned(),
        })?;
        let syntax =
            syn::parse_file(&source.contents).map_err(|err| ArchitectureLintError::Parse {
                file: source.file.clone(),
                message: err.to_string(),
            })?;
        violations.extend(check_file(&source.file, layer.rules(), &syntax));
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(ArchitectureLintError::Violations(violations))
    }
}

fn check_file(file: &Path, rules: &LayerRules, syntax: &syn::File) -> Vec<Violation> {
    let mut collector = PathCollector::default();
    collector.visit_file(syntax);

    let mut messages = BTreeSet::new();
    for path in &collector.paths {
        if let Some(module) = crate_module(path).filter(|m| forbids(rules.forbidden_modules, m)) {
            messages.insert(format!(
                "{} module must not depend on crate::{module}",
                rules.name
            ));
        }
        if let Some(name) = external_crate(path).filter(|c| forbids(rules.forbidden_crates, c)) {
            messages.insert(format!(
                "{} module must not depend on external crate `{name}`",
                rules.name
            ));
        }
    }

    messages
        .into_iter()
        .map(|message| Violation {
            file: file.to_path_buf(),
            message,
        })
        .collect()
}

fn forbids(list: &[&str], name: &str) -> bool {
    list.iter().any(|entry| *entry == name)
}

fn is_relative(segment: &str) -> bool {
    matches!(segment, "crate" | "self" | "super")
}

/// First module below the crate root that `path` names, if it is internal.
fn crate_module(path: &[String]) -> Option<&str> {
    let first = path.first()?.as_str();
    let module = if is_relative(first) || first == CRATE_NAME {
        path.iter().map(String::as_str).find(|s| !is_relative(s) && *s != CRATE_NAME)?
    } else {
        first
    };
    KNOWN_MODULES.into_iter().find(|known| *known == module)
}

fn external_crate(path: &[String]) -> Option<&str> {
    let first = path.first()?.as_str();
    (!is_relative(first) && first != CRATE_NAME).then_some(first)
}

#[derive(Default)]
struct PathCollector {
    paths: BTreeSet<Vec<String>>,
}

impl PathCollector {
    fn collect_use(&mut self, tree: &syn::UseTree, prefix: &[String]) {
        let extend = |ident: &syn::Ident| {
            let mut path = prefix.to_vec();
            path.push(ident.to_string());
            path
        };
        match tree {
            syn::UseTree::Path(node) => self.collect_use(&node.tree, &extend(&node.ident)),
            syn::UseTree::Name(node) => {
                self.paths.insert(extend(&node.ident));
            }
            syn::UseTree::Rename(node) => {
                self.paths.insert(extend(&node.ident));
            }
            syn::UseTree::Glob(_) => {
                let mut path = prefix.to_vec();
                path.push("*".to_owned());
                self.paths.insert(path);
            }
            syn::UseTree::Group(group) => {
                for item in &group.items {
                    self.collect_use(item, prefix);
                }
            }
        }
    }
}

impl<'ast> Visit<'ast> for PathCollector {
    fn visit_path(&mut self, node: &'ast syn::Path) {
        let path: Vec<String> = node
            .segments
            .iter()
            .map(|segment| segment.ident.to_string())
            .collect();
        if !path.is_empty() {
            self.paths.insert(path);
        }
        syn::visit::visit_path(self, node);
    }

    fn visit_item_use(&mut self, node: &'ast syn::ItemUse) {
        self.collect_use(&node.tree, &[]);
    }
}

fn read_tree(
    src_root: &Path,
    dir: &Path,
    sources: &mut Vec<LintSource>,
) -> Result<(), ArchitectureLintError> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            read_tree(src_root, &path, sources)?;
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            let file = path
                .strip_prefix(src_root)
                .map_err(|err| ArchitectureLintError::Parse {
                    file: path.clone(),
                    message: err.to_string(),
                })?
                .to_path_buf();
            sources.push(LintSource {
                contents: fs::read_to_string(&path)?,
                file,
            });
        }
    }
    Ok(())
}
