use crate::{
    middleware::{SESSION_COOKIE, admin_auth_middleware},
    state::AppState,
    view::{DashboardTemplate, HtmlTemplate, LoginTemplate},
};
use axum::{
    Form, Json, Router,
    extract::{Extension, Multipart, Path, Query},
    http::StatusCode,
    middleware,
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;
use shared::{
    abstract_trait::{
        DynSessionToken,
        product::service::{DynProductCommandService, DynProductQueryService},
    },
    domain::requests::{
        CreateProductRequest, FindAllProducts, LoginRequest, StoreImageRequest,
        UpdateProductRequest,
    },
    errors::HttpError,
    utils::parse_price_to_cents,
};
use tracing::{info, warn};

pub async fn dashboard(
    Extension(service): Extension<DynProductQueryService>,
    Extension(username): Extension<String>,
    Query(params): Query<FindAllProducts>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all(&params).await?;

    Ok(HtmlTemplate(DashboardTemplate {
        products: response.data,
        pagination: response.pagination,
        username,
    }))
}

#[derive(Debug, Deserialize)]
pub struct LoginQuery {
    pub error: Option<String>,
}

pub async fn login_form(Query(query): Query<LoginQuery>) -> impl IntoResponse {
    HtmlTemplate(LoginTemplate {
        error: query.error.is_some(),
    })
}

pub async fn login(
    jar: CookieJar,
    Extension(tokens): Extension<DynSessionToken>,
    Form(body): Form<LoginRequest>,
) -> Response {
    if tokens
        .verify_credentials(&body.username, &body.password)
        .is_err()
    {
        warn!("⚠️ Rejected admin login for '{}'", body.username);
        return Redirect::to("/admin/login?error=1").into_response();
    }

    match tokens.generate_token(&body.username) {
        Ok(token) => {
            info!("✅ Admin '{}' logged in", body.username);

            let cookie = Cookie::build((SESSION_COOKIE, token))
                .path("/")
                .http_only(true)
                .same_site(SameSite::Lax)
                .build();

            (jar.add(cookie), Redirect::to("/admin")).into_response()
        }
        Err(err) => HttpError::from(err).into_response(),
    }
}

pub async fn logout(jar: CookieJar) -> impl IntoResponse {
    let cookie = Cookie::build((SESSION_COOKIE, "")).path("/").build();

    (jar.remove(cookie), Redirect::to("/"))
}

/// Fields collected from the admin product form. Browsers only send GET and
/// POST, so edit forms smuggle the intended verb in a `_method` field.
struct ProductForm {
    name: String,
    description: Option<String>,
    price_cents: i64,
    image_url: Option<String>,
    is_active: bool,
    method: Option<String>,
    image: Option<StoreImageRequest>,
}

async fn read_product_form(mut multipart: Multipart) -> Result<ProductForm, HttpError> {
    let mut name = None;
    let mut description = None;
    let mut price_cents = None;
    let mut image_url = None;
    let mut is_active = false;
    let mut method = None;
    let mut image = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| HttpError::BadRequest(format!("Malformed form data: {err}")))?
    {
        let field_name = field.name().unwrap_or_default().to_string();

        match field_name.as_str() {
            "image" => {
                let declared_mime = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|err| HttpError::BadRequest(format!("Upload failed: {err}")))?;

                // An empty file input means "keep the current image".
                if !bytes.is_empty() {
                    image = Some(StoreImageRequest::from_upload(
                        bytes.to_vec(),
                        &declared_mime,
                    )?);
                }
            }
            _ => {
                let text = field
                    .text()
                    .await
                    .map_err(|err| HttpError::BadRequest(format!("Malformed form data: {err}")))?;

                match field_name.as_str() {
                    "name" => name = Some(text.trim().to_string()),
                    "description" => {
                        if !text.trim().is_empty() {
                            description = Some(text.trim().to_string());
                        }
                    }
                    "price" => {
                        price_cents = Some(parse_price_to_cents(&text).ok_or_else(|| {
                            HttpError::BadRequest(format!("Invalid price: '{text}'"))
                        })?);
                    }
                    "image_url" => {
                        if !text.trim().is_empty() {
                            image_url = Some(text.trim().to_string());
                        }
                    }
                    "is_active" => {
                        is_active = matches!(text.as_str(), "on" | "true" | "1");
                    }
                    "_method" => method = Some(text.to_lowercase()),
                    _ => {}
                }
            }
        }
    }

    // Soft deletes post only the override field, so name and price are
    // required just for create/update.
    let is_delete = method.as_deref() == Some("delete");

    Ok(ProductForm {
        name: match name {
            Some(name) => name,
            None if is_delete => String::new(),
            None => return Err(HttpError::BadRequest("Name is required".to_string())),
        },
        description,
        price_cents: match price_cents {
            Some(cents) => cents,
            None if is_delete => 0,
            None => return Err(HttpError::BadRequest("Price is required".to_string())),
        },
        image_url,
        is_active,
        method,
        image,
    })
}

pub async fn create_product(
    Extension(service): Extension<DynProductCommandService>,
    multipart: Multipart,
) -> Result<Response, HttpError> {
    let form = read_product_form(multipart).await?;

    let req = CreateProductRequest {
        name: form.name,
        description: form.description,
        price_cents: form.price_cents,
        image_url: form.image_url,
    };

    let response = service.create(&req, form.image).await?;

    info!("🟢 Admin created product {}", response.data.id);
    Ok(Redirect::to("/admin").into_response())
}

/// Edit-form target. A `_method` of `delete` soft-deletes the product;
/// anything else is a full update.
pub async fn mutate_product(
    Extension(service): Extension<DynProductCommandService>,
    Path(id): Path<i32>,
    multipart: Multipart,
) -> Result<Response, HttpError> {
    let form = read_product_form(multipart).await?;

    if form.method.as_deref() == Some("delete") {
        service.trash(id).await?;
        info!("🗑️ Admin trashed product {id}");
        return Ok(Redirect::to("/admin").into_response());
    }

    let req = UpdateProductRequest {
        id: Some(id),
        name: form.name,
        description: form.description,
        price_cents: form.price_cents,
        image_url: form.image_url,
        is_active: form.is_active,
    };

    service.update(&req, form.image).await?;

    info!("🔄 Admin updated product {id}");
    Ok(Redirect::to("/admin").into_response())
}

pub async fn restore_product(
    Extension(service): Extension<DynProductCommandService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    service.restore(id).await?;

    info!("♻️ Admin restored product {id}");
    Ok(Redirect::to("/admin"))
}

pub async fn delete_product_permanent(
    Extension(service): Extension<DynProductCommandService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.delete_permanent(id).await?;

    info!("🗑️ Admin permanently deleted product {id}");
    Ok((StatusCode::OK, Json(response)))
}

pub fn admin_routes(app_state: &AppState) -> Router {
    let guarded = Router::new()
        .route("/admin", get(dashboard))
        .route("/admin/product", post(create_product))
        .route(
            "/admin/product/{id}",
            post(mutate_product).delete(delete_product_permanent),
        )
        .route("/admin/product/{id}/restore", post(restore_product))
        .route_layer(middleware::from_fn(admin_auth_middleware));

    Router::new()
        .merge(guarded)
        .route("/admin/login", get(login_form).post(login))
        .route("/admin/logout", get(logout))
        .layer(Extension(app_state.di_container.product_query.clone()))
        .layer(Extension(app_state.di_container.product_command.clone()))
        .layer(Extension(app_state.session_token.clone()))
}
