//! Site configuration and page context loading
//!
//! Site configuration pipeline:
//! 1. Read `docpage.yaml` (missing default file → built-in defaults)
//! 2. YAML parsing into [`SiteConfig`]
//! 3. Environment overrides
//! 4. Validation (errors abort, warnings are returned)
//!
//! Page contexts load from `.yaml`/`.yml` or `.json` by extension.

use std::path::{Path, PathBuf};

use docpage_core::config::SiteConfig;
use docpage_core::error::{ConfigError, ValidationIssue};
use docpage_core::page::PageContext;
use docpage_render::content::{ComponentRegistry, HtmlFragment};
use tracing::{debug, info};

use crate::config::validation::Validator;

/// Site configuration looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "docpage.yaml";

/// Overrides `github_repository`.
pub const ENV_GITHUB_REPOSITORY: &str = "DOCPAGE_GITHUB_REPOSITORY";

/// Overrides `fixed_header_offset`.
pub const ENV_FIXED_HEADER_OFFSET: &str = "DOCPAGE_FIXED_HEADER_OFFSET";

// ============================================================================
// Site Configuration
// ============================================================================

/// A loaded, validated site configuration.
#[derive(Debug, Clone)]
pub struct LoadedSite {
    /// The configuration, with environment overrides applied.
    pub config: SiteConfig,
    /// Directory component paths resolve against.
    pub base_dir: PathBuf,
    /// Non-fatal validation issues.
    pub warnings: Vec<ValidationIssue>,
}

impl LoadedSite {
    /// Reads every configured component fragment into a registry.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingFile`] if a fragment does not exist and
    /// [`ConfigError::Io`] if it cannot be read.
    pub fn components(&self) -> Result<ComponentRegistry, ConfigError> {
        let mut registry = ComponentRegistry::new();
        for (name, relative) in &self.config.components {
            let path = self.base_dir.join(relative);
            let html = std::fs::read_to_string(&path)
                .map_err(|e| ConfigError::read_failed(&path, e))?;
            debug!(component = %name, file = %path.display(), "component loaded");
            registry.register(name.clone(), HtmlFragment::new(html));
        }
        Ok(registry)
    }
}

/// Loads the site configuration.
///
/// With `path == None`, `./docpage.yaml` is used when it exists and the
/// built-in defaults otherwise. An explicit path must exist.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or if
/// validation reports errors.
pub fn load_site_config(path: Option<&Path>) -> Result<LoadedSite, ConfigError> {
    load_site_config_with(path, |name| std::env::var(name).ok())
}

/// [`load_site_config`] with an explicit environment lookup.
///
/// # Errors
///
/// See [`load_site_config`].
pub fn load_site_config_with<F>(path: Option<&Path>, env: F) -> Result<LoadedSite, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let (mut config, base_dir, source) = match path {
        Some(path) => {
            let config = parse_site_config(path)?;
            (config, parent_dir(path), path.display().to_string())
        }
        None => {
            let default = Path::new(DEFAULT_CONFIG_FILE);
            if default.is_file() {
                (
                    parse_site_config(default)?,
                    PathBuf::from("."),
                    DEFAULT_CONFIG_FILE.to_string(),
                )
            } else {
                debug!("no site configuration found, using defaults");
                (SiteConfig::default(), PathBuf::from("."), "<defaults>".to_string())
            }
        }
    };

    apply_env_overrides(&mut config, &env);

    let result = Validator::new().validate(&config, &base_dir);
    if result.has_errors() {
        return Err(ConfigError::ValidationError {
            path: source,
            errors: result.errors,
        });
    }

    info!(config = %source, repository = config.repository().unwrap_or("-"), "site configuration loaded");
    Ok(LoadedSite {
        config,
        base_dir,
        warnings: result.warnings,
    })
}

fn parse_site_config(path: &Path) -> Result<SiteConfig, ConfigError> {
    let raw = read_file(path)?;
    let raw = raw.strip_prefix('\u{feff}').unwrap_or(&raw);

    if raw.trim().is_empty() {
        return Ok(SiteConfig::default());
    }

    serde_yaml::from_str(raw).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        line: e.location().map(|l| l.line()),
        message: e.to_string(),
    })
}

/// Applies `DOCPAGE_*` overrides from `env`.
pub fn apply_env_overrides<F>(config: &mut SiteConfig, env: &F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(repo) = env(ENV_GITHUB_REPOSITORY).filter(|r| !r.trim().is_empty()) {
        config.github_repository = Some(repo);
    }
    config.fixed_header_offset = env_or(env, ENV_FIXED_HEADER_OFFSET, config.fixed_header_offset);
}

/// Parses an environment variable, falling back to `default` when unset or
/// unparseable.
fn env_or<T, F>(env: &F, name: &str, default: T) -> T
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    env(name)
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

// ============================================================================
// Page Contexts
// ============================================================================

/// Page context file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageFormat {
    /// `.yaml` / `.yml`
    Yaml,
    /// `.json`
    Json,
}

impl PageFormat {
    /// Detects the format from the file extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Loads one page context.
///
/// # Errors
///
/// Returns [`ConfigError::UnsupportedFormat`] for unknown extensions,
/// [`ConfigError::MissingFile`] if the file cannot be read and
/// [`ConfigError::ParseError`] if it does not deserialize.
pub fn load_page_context(path: &Path) -> Result<PageContext, ConfigError> {
    let format = PageFormat::from_path(path).ok_or_else(|| ConfigError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;
    let raw = read_file(path)?;
    let raw = raw.strip_prefix('\u{feff}').unwrap_or(&raw);

    match format {
        PageFormat::Yaml => serde_yaml::from_str(raw).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            line: e.location().map(|l| l.line()),
            message: e.to_string(),
        }),
        PageFormat::Json => serde_json::from_str(raw).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            line: Some(e.line()),
            message: e.to_string(),
        }),
    }
}

/// Loads every page context under `dir`, recursively, sorted by path.
///
/// Files with other extensions are skipped.
///
/// # Errors
///
/// Returns the first read or parse error encountered.
pub fn load_pages_dir(dir: &Path) -> Result<Vec<(PathBuf, PageContext)>, ConfigError> {
    let mut files = Vec::new();
    collect_page_files(dir, &mut files)?;
    files.sort();

    files
        .into_iter()
        .map(|path| {
            let page = load_page_context(&path)?;
            Ok((path, page))
        })
        .collect()
}

fn collect_page_files(dir: &Path, out: &mut Vec<PathBuf>) -> Result<(), ConfigError> {
    let entries = std::fs::read_dir(dir).map_err(|e| ConfigError::read_failed(dir, e))?;

    for entry in entries {
        let path = entry.map_err(|e| ConfigError::read_failed(dir, e))?.path();
        if path.is_dir() {
            collect_page_files(&path, out)?;
        } else if PageFormat::from_path(&path).is_some() {
            out.push(path);
        }
    }
    Ok(())
}

fn read_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|e| ConfigError::read_failed(path, e))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_explicit_config_and_components() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "components/faq.html", "<section>faq</section>");
        let config = write(
            dir.path(),
            "docpage.yaml",
            "github_repository: a/b\ncomponents:\n  Faq: components/faq.html\n",
        );

        let site = load_site_config_with(Some(config.as_path()), no_env).unwrap();
        assert_eq!(site.config.repository(), Some("a/b"));
        assert_eq!(site.base_dir, dir.path());
        assert!(site.warnings.is_empty());

        let registry = site.components().unwrap();
        assert_eq!(registry.render("Faq").as_deref(), Some("<section>faq</section>"));
    }

    #[test]
    fn test_missing_explicit_config() {
        let err = load_site_config_with(Some(Path::new("/nonexistent/docpage.yaml")), no_env)
            .unwrap_err();
        assert!(matches!(err, ConfigError::MissingFile { .. }));
    }

    #[test]
    fn test_empty_config_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = write(dir.path(), "docpage.yaml", "\u{feff}\n");
        let site = load_site_config_with(Some(config.as_path()), no_env).unwrap();
        assert_eq!(site.config, SiteConfig::default());
    }

    #[test]
    fn test_parse_error_has_line() {
        let dir = tempfile::tempdir().unwrap();
        let config = write(dir.path(), "docpage.yaml", "github_repository: a/b\nnope: [\n");
        let err = load_site_config_with(Some(config.as_path()), no_env).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let config = write(dir.path(), "docpage.yaml", "github_repo: a/b\n");
        let err = load_site_config_with(Some(config.as_path()), no_env).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn test_validation_error_aborts() {
        let dir = tempfile::tempdir().unwrap();
        let config = write(dir.path(), "docpage.yaml", "github_repository: not-a-repo\n");
        let err = load_site_config_with(Some(config.as_path()), no_env).unwrap_err();
        let ConfigError::ValidationError { errors, .. } = err else {
            panic!("expected validation error");
        };
        assert_eq!(errors[0].path, "github_repository");
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = HashMap::from([
            (ENV_GITHUB_REPOSITORY, "org/site"),
            (ENV_FIXED_HEADER_OFFSET, " 96 "),
        ]);
        let lookup = |name: &str| env.get(name).map(ToString::to_string);

        let mut config = SiteConfig::default();
        apply_env_overrides(&mut config, &lookup);
        assert_eq!(config.repository(), Some("org/site"));
        assert!((config.fixed_header_offset - 96.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_unparseable_env_keeps_value() {
        let lookup = |name: &str| (name == ENV_FIXED_HEADER_OFFSET).then(|| "tall".to_string());
        let mut config = SiteConfig::default();
        apply_env_overrides(&mut config, &lookup);
        assert!((config.fixed_header_offset - 64.0).abs() < f64::EPSILON);
        assert!(config.repository().is_none());
    }

    #[test]
    fn test_page_formats() {
        let dir = tempfile::tempdir().unwrap();
        let yaml = write(dir.path(), "a.yml", "page_title: A\ncontent: a\n");
        let json = write(dir.path(), "b.json", r#"{"pageTitle": "B", "content": "b"}"#);
        let txt = write(dir.path(), "c.txt", "nope");

        assert_eq!(load_page_context(&yaml).unwrap().page_title, "A");
        assert_eq!(load_page_context(&json).unwrap().page_title, "B");
        assert!(matches!(
            load_page_context(&txt),
            Err(ConfigError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn test_json_parse_error_line() {
        let dir = tempfile::tempdir().unwrap();
        let json = write(dir.path(), "bad.json", "{\n  \"pageTitle\": \n}");
        let Err(ConfigError::ParseError { line, .. }) = load_page_context(&json) else {
            panic!("expected parse error");
        };
        assert_eq!(line, Some(3));
    }

    #[test]
    fn test_load_pages_dir_recursive_sorted() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "b.yaml", "page_title: B\ncontent: b\n");
        write(dir.path(), "nested/a.json", r#"{"page_title": "A", "content": "a"}"#);
        write(dir.path(), "notes.md", "# ignored");

        let pages = load_pages_dir(dir.path()).unwrap();
        let titles: Vec<&str> = pages.iter().map(|(_, p)| p.page_title.as_str()).collect();
        assert_eq!(titles, ["B", "A"]);
    }

    #[test]
    fn test_unreadable_page_keeps_io_source() {
        let dir = tempfile::tempdir().unwrap();
        let page = dir.path().join("folder.yaml");
        std::fs::create_dir(&page).unwrap();

        let err = load_page_context(&page).unwrap_err();
        let ConfigError::Io { path, source } = &err else {
            panic!("expected I/O error, got {err:?}");
        };
        assert_eq!(path, &page);
        assert_ne!(source.kind(), std::io::ErrorKind::NotFound);
        assert!(err.to_string().starts_with("failed to read "));
    }

    #[test]
    fn test_missing_pages_dir() {
        let err = load_pages_dir(Path::new("/nonexistent/docpage/pages")).unwrap_err();
        assert!(matches!(err, ConfigError::MissingFile { .. }));
    }
}
