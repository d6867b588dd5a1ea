//! View resolution backed by a directory of template files.

use tailor::{
    error::{ErrorContext, OpaqueError},
    telemetry::tracing,
    view::{ViewResolver, is_passthrough_view_name},
};

use std::{
    io,
    path::{Component, Path, PathBuf},
};

/// A [`ViewResolver`] which resolves view names to files in a template directory.
///
/// The view name `mobile/home` resolves to `<root>/mobile/home.<extension>`,
/// if that file exists. View names escaping the root directory never resolve,
/// and neither do `redirect:` and `forward:` names, which are not templates.
#[derive(Debug, Clone)]
pub struct FsViewResolver {
    root: PathBuf,
    extension: Option<String>,
}

impl FsViewResolver {
    /// Create a new [`FsViewResolver`] for the given template directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extension: None,
        }
    }

    /// Set the file extension appended to view names.
    #[must_use]
    pub fn with_extension(mut self, extension: Option<String>) -> Self {
        self.extension = extension.map(|ext| ext.trim_start_matches('.').to_owned());
        self
    }

    fn template_path(&self, view_name: &str) -> Option<PathBuf> {
        if is_passthrough_view_name(view_name) {
            return None;
        }
        let relative = Path::new(view_name.trim_start_matches('/'));
        if relative.as_os_str().is_empty()
            || !relative
                .components()
                .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
        {
            return None;
        }
        let mut path = self.root.join(relative);
        if let Some(extension) = self.extension.as_deref() {
            let mut file_name = path.file_name()?.to_owned();
            file_name.push(".");
            file_name.push(extension);
            path.set_file_name(file_name);
        }
        Some(path)
    }
}

impl ViewResolver for FsViewResolver {
    type View = PathBuf;
    type Error = OpaqueError;

    fn resolve_view_name(&self, view_name: &str) -> Result<Option<PathBuf>, OpaqueError> {
        let Some(path) = self.template_path(view_name) else {
            tracing::trace!(view_name, "view name does not map to a template path");
            return Ok(None);
        };
        match std::fs::metadata(&path) {
            Ok(metadata) if metadata.is_file() => {
                tracing::trace!(view_name, path = %path.display(), "template found");
                Ok(Some(path))
            }
            Ok(_) => Ok(None),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::trace!(view_name, path = %path.display(), "template not found");
                Ok(None)
            }
            Err(err) => Err(err)
                .with_context(|| format!("read template metadata of {}", path.display())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("mobile")).unwrap();
        std::fs::write(dir.path().join("home.html"), "home").unwrap();
        std::fs::write(dir.path().join("mobile/home.html"), "mobile home").unwrap();
        std::fs::write(dir.path().join("about"), "about").unwrap();
        dir
    }

    #[test]
    fn test_resolve_with_extension() {
        let dir = template_dir();
        let resolver = FsViewResolver::new(dir.path()).with_extension(Some(".html".to_owned()));

        assert_eq!(
            resolver.resolve_view_name("mobile/home").unwrap(),
            Some(dir.path().join("mobile/home.html"))
        );
        assert_eq!(
            resolver.resolve_view_name("/home").unwrap(),
            Some(dir.path().join("home.html"))
        );
        assert_eq!(resolver.resolve_view_name("tablet/home").unwrap(), None);
    }

    #[test]
    fn test_resolve_without_extension() {
        let dir = template_dir();
        let resolver = FsViewResolver::new(dir.path());

        assert_eq!(
            resolver.resolve_view_name("about").unwrap(),
            Some(dir.path().join("about"))
        );
        assert_eq!(resolver.resolve_view_name("home").unwrap(), None);
        // directories are not views
        assert_eq!(resolver.resolve_view_name("mobile").unwrap(), None);
        assert_eq!(resolver.resolve_view_name("mobile/").unwrap(), None);
    }

    #[test]
    fn test_names_outside_root_never_resolve() {
        let dir = template_dir();
        let resolver = FsViewResolver::new(dir.path().join("mobile"));

        assert_eq!(resolver.resolve_view_name("../about").unwrap(), None);
        assert_eq!(resolver.resolve_view_name("").unwrap(), None);
        assert_eq!(resolver.resolve_view_name("/").unwrap(), None);
    }

    #[test]
    fn test_redirect_and_forward_are_not_templates() {
        let dir = template_dir();
        let resolver = FsViewResolver::new(dir.path()).with_extension(Some("html".to_owned()));

        assert_eq!(resolver.template_path("redirect:/login"), None);
        assert_eq!(resolver.template_path("forward:/home"), None);
        assert_eq!(resolver.resolve_view_name("redirect:/login").unwrap(), None);
        assert_eq!(resolver.resolve_view_name("forward:home").unwrap(), None);
        assert_eq!(
            resolver.template_path("home"),
            Some(dir.path().join("home.html"))
        );
    }
}
