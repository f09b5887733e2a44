use std::sync::Arc;

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    routing, Router,
};
use hnf_core_sitemap_contracts::SitemapFeatureService;

use crate::routes::internal_server_error;

pub fn router(service: Arc<impl SitemapFeatureService>) -> Router<()> {
    Router::new()
        .route("/sitemap.xml", routing::get(sitemap))
        .with_state(service)
}

async fn sitemap(service: State<Arc<impl SitemapFeatureService>>) -> Response {
    match service.get_sitemap() {
        Ok(xml) => ([(header::CONTENT_TYPE, "application/xml")], xml).into_response(),
        Err(err) => internal_server_error(err),
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use hnf_core_sitemap_contracts::MockSitemapFeatureService;
    use tower::ServiceExt;

    use super::*;

    #[tokio::test]
    async fn ok() {
        // Arrange
        let xml = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset></urlset>\n";
        let service = MockSitemapFeatureService::new().with_get_sitemap(xml.into());

        // Act
        let response = router(Arc::new(service))
            .oneshot(Request::get("/sitemap.xml").body(Body::empty()).unwrap())
            .await
            .unwrap();

        // Assert
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/xml"
        );
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(body, xml.as_bytes());
    }

    #[tokio::test]
    async fn render_error() {
        let mut service = MockSitemapFeatureService::new();
        service
            .expect_get_sitemap()
            .once()
            .returning(|| Err(anyhow::anyhow!("template error")));

        let response = router(Arc::new(service))
            .oneshot(Request::get("/sitemap.xml").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
