use axum::{
    Extension, Json,
    body::Body,
    http::{Request, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use base64::{Engine, engine::general_purpose::STANDARD};
use shared::{abstract_trait::DynSessionToken, errors::ErrorResponse};

pub const SESSION_COOKIE: &str = "admin_session";

/// Gate for the admin mutation surface. Accepts either the signed session
/// cookie or an `Authorization: Basic` header carrying the raw credentials.
/// Every failure produces the same generic response regardless of cause.
pub async fn admin_auth_middleware(
    cookie_jar: CookieJar,
    Extension(tokens): Extension<DynSessionToken>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    match authenticate(&cookie_jar, &req, &tokens) {
        Some(username) => {
            req.extensions_mut().insert(username);
            next.run(req).await
        }
        None => unauthorized_response(&req),
    }
}

fn authenticate(
    cookie_jar: &CookieJar,
    req: &Request<Body>,
    tokens: &DynSessionToken,
) -> Option<String> {
    if let Some(cookie) = cookie_jar.get(SESSION_COOKIE) {
        if let Ok(username) = tokens.verify_token(cookie.value()) {
            return Some(username);
        }
    }

    let auth_header = req.headers().get(header::AUTHORIZATION)?.to_str().ok()?;
    let encoded = auth_header.strip_prefix("Basic ")?;
    let decoded = STANDARD.decode(encoded).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (username, password) = decoded.split_once(':')?;

    tokens.verify_credentials(username, password).ok()?;
    Some(username.to_string())
}

fn unauthorized_response(req: &Request<Body>) -> Response {
    let wants_html = req
        .headers()
        .get(header::ACCEPT)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.contains("text/html"));

    if wants_html {
        Redirect::to("/admin/login").into_response()
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse {
                status: "fail".to_string(),
                message: "Unauthorized".to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, middleware, routing::get};
    use shared::{
        abstract_trait::SessionTokenTrait,
        config::{AdminCredentials, SessionTokenConfig},
    };
    use std::sync::Arc;
    use tower::ServiceExt;

    async fn protected() -> &'static str {
        "OK"
    }

    fn tokens() -> DynSessionToken {
        Arc::new(SessionTokenConfig::new(
            "test-secret",
            AdminCredentials {
                username: "admin".into(),
                password: "hunter2".into(),
            },
        ))
    }

    fn app(tokens: DynSessionToken) -> Router {
        Router::new()
            .route("/admin/ping", get(protected))
            .route_layer(middleware::from_fn(admin_auth_middleware))
            .layer(Extension(tokens))
    }

    #[tokio::test]
    async fn missing_credentials_rejected() {
        let resp = app(tokens())
            .oneshot(
                Request::builder()
                    .uri("/admin/ping")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn valid_session_cookie_accepted() {
        let tokens = tokens();
        let token = tokens.generate_token("admin").unwrap();

        let resp = app(tokens)
            .oneshot(
                Request::builder()
                    .uri("/admin/ping")
                    .header(header::COOKIE, format!("{SESSION_COOKIE}={token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn garbage_cookie_rejected() {
        let resp = app(tokens())
            .oneshot(
                Request::builder()
                    .uri("/admin/ping")
                    .header(header::COOKIE, format!("{SESSION_COOKIE}=not.a.token"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn basic_auth_header_accepted() {
        let encoded = STANDARD.encode("admin:hunter2");

        let resp = app(tokens())
            .oneshot(
                Request::builder()
                    .uri("/admin/ping")
                    .header(header::AUTHORIZATION, format!("Basic {encoded}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn basic_auth_wrong_password_rejected() {
        let encoded = STANDARD.encode("admin:wrong");

        let resp = app(tokens())
            .oneshot(
                Request::builder()
                    .uri("/admin/ping")
                    .header(header::AUTHORIZATION, format!("Basic {encoded}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn browser_requests_redirect_to_login() {
        let resp = app(tokens())
            .oneshot(
                Request::builder()
                    .uri("/admin/ping")
                    .header(header::ACCEPT, "text/html,application/xhtml+xml")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            resp.headers().get(header::LOCATION).unwrap(),
            "/admin/login"
        );
    }
}
