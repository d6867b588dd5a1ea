use tailor::{
    Layer, Service, ServiceInput,
    device::{
        Device, DevicePlatform, DeviceResolverLayer, DeviceType, EffectiveCategory,
        MissingDeviceError, SitePreference, SitePreferenceLayer, current_category,
        required_current_device,
    },
    error::{BoxError, OpaqueError},
    service::service_fn,
    view::{
        DeviceDelegatingViewResolver, DeviceViewConfig, StaticViewResolver, ViewResolver,
        ViewResolverChain, view_resolver_fn,
    },
};

use std::{convert::Infallible, sync::Arc};

/// A request with an already classified user agent and
/// an optional `site_preference` query parameter.
#[derive(Debug, Clone)]
struct Request {
    user_agent: &'static str,
    query: &'static str,
}

fn request(user_agent: &'static str, query: &'static str) -> ServiceInput<Request> {
    ServiceInput::new(Request { user_agent, query })
}

fn classify(req: &ServiceInput<Request>) -> Option<Device> {
    match req.user_agent {
        "iphone" => Some(Device::new(DeviceType::Mobile, DevicePlatform::IOS)),
        "ipad" => Some(Device::new(DeviceType::Tablet, DevicePlatform::IOS)),
        "android" => Some(Device::new(DeviceType::Mobile, DevicePlatform::Android)),
        "desktop" => Some(Device::NORMAL),
        _ => None,
    }
}

fn site_preference(req: &ServiceInput<Request>) -> Option<SitePreference> {
    req.query
        .strip_prefix("site_preference=")
        .and_then(|value| value.parse().ok())
}

fn templates() -> StaticViewResolver<&'static str> {
    StaticViewResolver::new()
        .with_view("page/home", "normal home")
        .with_view("page/mobile/home", "mobile home")
        .with_view("page/tablet/home", "tablet home")
        .with_view("page/about", "normal about")
        .with_view("redirect:/login", "login redirect")
}

fn config() -> DeviceViewConfig {
    DeviceViewConfig::from_json(
        r#"{
            "view_names": {
                "normal": { "prefix": "page/" },
                "mobile": { "prefix": "page/mobile/" },
                "tablet": { "prefix": "page/tablet/" }
            }
        }"#,
    )
    .unwrap()
}

fn pipeline(
    view_name: &'static str,
    config: DeviceViewConfig,
) -> impl Service<ServiceInput<Request>, Response = Option<&'static str>, Error = Infallible> {
    let resolver = Arc::new(DeviceDelegatingViewResolver::from_config(
        templates(),
        config,
    ));
    (
        DeviceResolverLayer::new(classify),
        SitePreferenceLayer::new(site_preference),
    )
        .into_layer(service_fn(move |req: ServiceInput<Request>| {
            let resolver = resolver.clone();
            async move { resolver.resolve_view_for(view_name, &req) }
        }))
}

#[tokio::test]
async fn test_device_specific_views() {
    let svc = pipeline("home", config());

    for (user_agent, query, expected) in [
        ("desktop", "", "normal home"),
        ("iphone", "", "mobile home"),
        ("android", "", "mobile home"),
        ("ipad", "", "tablet home"),
        ("curl", "", "normal home"),
        ("iphone", "site_preference=normal", "normal home"),
        ("desktop", "site_preference=tablet", "tablet home"),
        ("curl", "site_preference=mobile", "mobile home"),
        ("ipad", "site_preference=bogus", "tablet home"),
    ] {
        assert_eq!(
            svc.serve(request(user_agent, query)).await.unwrap(),
            Some(expected),
            "user agent: {user_agent}, query: {query}",
        );
    }
}

#[tokio::test]
async fn test_fallback_resolution() {
    let svc = pipeline("about", config());
    assert_eq!(svc.serve(request("iphone", "")).await.unwrap(), None);
    assert_eq!(
        svc.serve(request("desktop", "")).await.unwrap(),
        Some("normal about")
    );

    let svc = pipeline(
        "page/about",
        DeviceViewConfig {
            enable_fallback: true,
            ..config()
        },
    );
    assert_eq!(
        svc.serve(request("iphone", "")).await.unwrap(),
        Some("normal about")
    );
}

#[tokio::test]
async fn test_redirect_is_not_adjusted() {
    let svc = pipeline("redirect:/login", config());
    assert_eq!(
        svc.serve(request("ipad", "")).await.unwrap(),
        Some("login redirect")
    );
}

#[tokio::test]
async fn test_required_device_reports_configuration_error() {
    let handler = service_fn(async |req: ServiceInput<Request>| {
        let device = required_current_device(&req)?;
        Ok::<_, BoxError>(device.to_string())
    });

    let err = handler.serve(request("iphone", "")).await.unwrap_err();
    assert!(err.downcast_ref::<MissingDeviceError>().is_some());

    let svc = DeviceResolverLayer::new(classify).into_layer(handler);
    assert_eq!(
        svc.serve(request("iphone", "")).await.unwrap(),
        "[Device type=mobile platform=iOS]"
    );
    assert!(svc.serve(request("curl", "")).await.is_err());
}

#[tokio::test]
async fn test_category_without_view_resolution() {
    let svc = (
        DeviceResolverLayer::new(classify),
        SitePreferenceLayer::new(site_preference),
    )
        .into_layer(service_fn(async |req: ServiceInput<Request>| {
            Ok::<_, Infallible>(current_category(&req))
        }));

    assert_eq!(
        svc.serve(request("android", "")).await.unwrap(),
        EffectiveCategory::Mobile
    );
    assert_eq!(
        svc.serve(request("android", "site_preference=NORMAL"))
            .await
            .unwrap(),
        EffectiveCategory::Normal
    );
}

#[test]
fn test_chain_with_failing_delegate() {
    let failing = view_resolver_fn(|name: &str| -> Result<Option<&'static str>, OpaqueError> {
        Err(OpaqueError::from_display(format!("template {name} is corrupt")))
    });

    let device = DeviceDelegatingViewResolver::from_config(templates(), config())
        .for_category(EffectiveCategory::Tablet);
    let order = device.order();

    let chain = ViewResolverChain::new()
        .with_resolver(order, failing)
        .with_resolver(0, view_resolver_fn(|name: &str| {
            Ok::<_, OpaqueError>((name == "about").then_some("static about"))
        }));
    assert_eq!(chain.resolve_view_name("about").unwrap(), Some("static about"));

    let err = chain.resolve_view_name("home").unwrap_err();
    assert_eq!(err.to_string(), "template home is corrupt");

    let chain = ViewResolverChain::new().with_resolver(order, device);
    assert_eq!(chain.resolve_view_name("home").unwrap(), Some("tablet home"));
}
