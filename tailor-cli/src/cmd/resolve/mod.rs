//! Resolve a view against a directory of templates,
//! running the full device-aware request pipeline.

use tailor::{
    Layer, Service, ServiceInput,
    device::{Device, DeviceResolverLayer, SitePreference, SitePreferenceLayer},
    error::{BoxError, ErrorContext, OpaqueError},
    service::service_fn,
    telemetry::tracing,
    view::DeviceDelegatingViewResolver,
};

use clap::Args;
use std::{io::Write as _, path::PathBuf, sync::Arc};

use crate::utils::{
    args::{DeviceArgs, ViewArgs},
    fs::FsViewResolver,
};

#[derive(Debug, Args)]
/// tailor resolve command (resolve a view to a template file)
pub struct CliCommandResolve {
    /// the logical view name to resolve
    name: String,

    #[arg(long, short = 't')]
    /// the directory containing the templates
    templates: PathBuf,

    #[arg(long, short = 'e')]
    /// file extension of the templates (e.g. html)
    extension: Option<String>,

    #[command(flatten)]
    device: DeviceArgs,

    #[command(flatten)]
    view: ViewArgs,
}

/// The request as seen by the resolve pipeline.
#[derive(Debug, Clone)]
struct ViewRequest {
    view_name: String,
    device: Option<Device>,
    site_preference: Option<SitePreference>,
}

/// Resolve the template of the given command, if one exists.
pub async fn resolve_template(cfg: CliCommandResolve) -> Result<Option<PathBuf>, BoxError> {
    let config = cfg.view.into_config()?;
    let templates =
        FsViewResolver::new(cfg.templates.clone()).with_extension(cfg.extension.clone());
    let resolver = Arc::new(DeviceDelegatingViewResolver::from_config(templates, config));

    let svc = (
        DeviceResolverLayer::new(|req: &ServiceInput<ViewRequest>| req.device),
        SitePreferenceLayer::new(|req: &ServiceInput<ViewRequest>| req.site_preference),
    )
        .into_layer(service_fn(move |req: ServiceInput<ViewRequest>| {
            let resolver = resolver.clone();
            async move { resolver.resolve_view_for(&req.view_name, &req) }
        }));

    let request = ViewRequest {
        view_name: cfg.name,
        device: cfg.device.device(),
        site_preference: cfg.device.site_preference,
    };
    tracing::debug!(
        view_name = %request.view_name,
        templates = %cfg.templates.display(),
        "resolve view",
    );

    Ok(svc.serve(ServiceInput::new(request)).await?)
}

/// run the tailor resolve command
pub async fn run(cfg: CliCommandResolve) -> Result<(), BoxError> {
    let name = cfg.name.clone();
    let path = resolve_template(cfg)
        .await?
        .ok_or_else(|| OpaqueError::from_display(format!("no view found for '{name}'")))?;
    writeln!(std::io::stdout().lock(), "{}", path.display())
        .context("write template path to stdout")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Debug, Parser)]
    struct TestCli {
        #[command(flatten)]
        cmd: CliCommandResolve,
    }

    fn template_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        for (path, content) in [
            ("home.html", "home"),
            ("about.html", "about"),
            ("mobile/home.html", "mobile home"),
            ("tablet/home.html", "tablet home"),
        ] {
            let path = dir.path().join(path);
            std::fs::create_dir_all(path.parent().unwrap()).unwrap();
            std::fs::write(path, content).unwrap();
        }
        dir
    }

    async fn resolve(dir: &tempfile::TempDir, args: &[&str]) -> Option<PathBuf> {
        let templates = dir.path().to_str().unwrap();
        let cli = TestCli::try_parse_from(
            ["tailor", "--templates", templates, "--extension", "html"]
                .into_iter()
                .chain(args.iter().copied()),
        )
        .unwrap();
        resolve_template(cli.cmd).await.unwrap()
    }

    const PREFIXES: [&str; 4] = ["--mobile-prefix", "mobile/", "--tablet-prefix", "tablet/"];

    #[tokio::test]
    async fn test_resolve_per_device() {
        let dir = template_dir();
        let args = |extra: &[&'static str]| {
            let mut args = vec!["home"];
            args.extend_from_slice(&PREFIXES);
            args.extend_from_slice(extra);
            args
        };

        assert_eq!(
            resolve(&dir, &args(&[])).await,
            Some(dir.path().join("home.html"))
        );
        assert_eq!(
            resolve(&dir, &args(&["--device", "mobile"])).await,
            Some(dir.path().join("mobile/home.html"))
        );
        assert_eq!(
            resolve(&dir, &args(&["--device", "mobile", "--site-preference", "tablet"])).await,
            Some(dir.path().join("tablet/home.html"))
        );
    }

    #[tokio::test]
    async fn test_resolve_fallback() {
        let dir = template_dir();
        let mut args = vec!["about", "--device", "mobile"];
        args.extend_from_slice(&PREFIXES);

        assert_eq!(resolve(&dir, &args).await, None);

        args.push("--fallback");
        assert_eq!(
            resolve(&dir, &args).await,
            Some(dir.path().join("about.html"))
        );
    }

    #[tokio::test]
    async fn test_run_without_view_fails() {
        let dir = template_dir();
        let cli = TestCli::try_parse_from([
            "tailor",
            "contact",
            "--templates",
            dir.path().to_str().unwrap(),
        ])
        .unwrap();
        let err = run(cli.cmd).await.unwrap_err();
        assert_eq!(err.to_string(), "no view found for 'contact'");
    }
}
