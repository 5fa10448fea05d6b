//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Top-level API metadata. Domain paths are merged in at runtime because
/// they live at the server root rather than under a prefix.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Event Registration API",
        version = "0.1.0",
        description = "REST API for managing events and participant registrations",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    )
)]
struct ApiDoc;

/// Full OpenAPI document: app metadata plus the domain paths and schemas.
pub fn openapi() -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.merge(domain_events::ApiDoc::openapi());
    doc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_includes_domain_paths() {
        let doc = openapi();
        assert!(doc.paths.paths.contains_key("/events"));
        assert!(doc.paths.paths.contains_key("/participants"));
        assert!(doc.paths.paths.contains_key("/events/{id}/participants"));
        assert_eq!(doc.info.title, "Event Registration API");
    }
}
