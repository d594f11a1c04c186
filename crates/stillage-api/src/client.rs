// Hand-crafted async HTTP client for the inventory service REST API.
//
// Auth: `Authorization: Bearer <token>` from the shared SessionStore.
// All bodies are JSON; DELETE endpoints answer 204 with no body.

use reqwest::StatusCode;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::Error;
use crate::session::SessionStore;
use crate::transport::TransportConfig;
use crate::types;

// ── Error response shape from the service ────────────────────────────

#[derive(serde::Deserialize)]
struct ErrorResponse {
    #[serde(default, alias = "Message")]
    message: Option<String>,
}

// ── Client ───────────────────────────────────────────────────────────

/// Async client for the inventory service.
///
/// Holds a [`SessionStore`] handle; the bearer header is attached
/// per-request from whatever token the store currently holds, so a
/// token cleared mid-session stops being sent immediately.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    session: SessionStore,
}

impl ApiClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build from a base URL, session store, and transport config.
    pub fn new(
        base_url: &str,
        session: SessionStore,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let http = transport.build_client()?;
        let base_url = Self::normalize_base_url(base_url)?;
        Ok(Self {
            http,
            base_url,
            session,
        })
    }

    /// Wrap an existing `reqwest::Client` (tests inject mock servers here).
    pub fn from_reqwest(
        base_url: &str,
        http: reqwest::Client,
        session: SessionStore,
    ) -> Result<Self, Error> {
        let base_url = Self::normalize_base_url(base_url)?;
        Ok(Self {
            http,
            base_url,
            session,
        })
    }

    /// The session store this client reads its token from.
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Parse and normalize the base URL to end with a single `/`.
    fn normalize_base_url(raw: &str) -> Result<Url, Error> {
        let mut url = Url::parse(raw)?;
        let path = url.path().trim_end_matches('/').to_owned();
        url.set_path(&format!("{path}/"));
        Ok(url)
    }

    // ── URL builders ─────────────────────────────────────────────────

    /// Join a fixed relative path (e.g. `"containers"`) onto the base URL.
    fn url(&self, path: &str) -> Url {
        // base_url always ends with `/`, so joining relative paths works.
        self.base_url
            .join(path)
            .expect("path should be a valid relative URL")
    }

    /// Build a URL from raw path segments, percent-encoding each one.
    /// Used wherever a user-supplied value (name, title, email) lands
    /// in the path.
    fn url_from_segments(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        {
            let mut parts = url
                .path_segments_mut()
                .expect("base URL should have path segments");
            parts.pop_if_empty();
            for segment in segments {
                parts.push(segment);
            }
        }
        url
    }

    // ── HTTP verbs ───────────────────────────────────────────────────

    fn authorize(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.session.bearer() {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, Error> {
        debug!("GET {url}");
        let resp = self.authorize(self.http.get(url)).send().await?;
        self.handle_response(resp).await
    }

    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        url: Url,
        body: &B,
    ) -> Result<T, Error> {
        debug!("POST {url}");
        let resp = self.authorize(self.http.post(url).json(body)).send().await?;
        self.handle_response(resp).await
    }

    async fn post_no_body<T: DeserializeOwned>(&self, url: Url) -> Result<T, Error> {
        debug!("POST {url}");
        let resp = self.authorize(self.http.post(url)).send().await?;
        self.handle_response(resp).await
    }

    async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        url: Url,
        body: &B,
    ) -> Result<T, Error> {
        debug!("PUT {url}");
        let resp = self.authorize(self.http.put(url).json(body)).send().await?;
        self.handle_response(resp).await
    }

    async fn put_empty<B: Serialize + Sync>(&self, url: Url, body: &B) -> Result<(), Error> {
        debug!("PUT {url}");
        let resp = self.authorize(self.http.put(url).json(body)).send().await?;
        self.handle_empty(resp).await
    }

    async fn delete(&self, url: Url) -> Result<(), Error> {
        debug!("DELETE {url}");
        let resp = self.authorize(self.http.delete(url)).send().await?;
        self.handle_empty(resp).await
    }

    // ── Response handling ────────────────────────────────────────────

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, Error> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            serde_json::from_str(&body).map_err(|e| {
                let preview = &body[..body.len().min(200)];
                Error::Deserialization {
                    message: format!("{e} (body preview: {preview:?})"),
                    body,
                }
            })
        } else {
            Err(self.parse_error(status, resp).await)
        }
    }

    /// Success path for endpoints that answer with no body (204).
    async fn handle_empty(&self, resp: reqwest::Response) -> Result<(), Error> {
        let status = resp.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(self.parse_error(status, resp).await)
        }
    }

    /// Turn a non-2xx response into an [`Error`].
    ///
    /// A 401 clears the session token before returning -- the caller
    /// must not reuse it, and subsequent requests go out anonymous.
    async fn parse_error(&self, status: StatusCode, resp: reqwest::Response) -> Error {
        if status == StatusCode::UNAUTHORIZED {
            self.session.clear();
            return Error::Unauthorized;
        }

        let raw = resp.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorResponse>(&raw)
            .ok()
            .and_then(|e| e.message)
            .unwrap_or_else(|| {
                format!(
                    "HTTP {}: {}",
                    status.as_u16(),
                    status.canonical_reason().unwrap_or("Unknown")
                )
            });

        Error::Http {
            status: status.as_u16(),
            message,
        }
    }

    // ━━ Public API ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    // ── Auth ─────────────────────────────────────────────────────────

    /// Exchange a third-party identity token for a service token
    /// (first-user registration).
    pub async fn register(&self, id_token: &str) -> Result<types::AuthResponse, Error> {
        self.post(
            self.url("auth/register"),
            &types::AuthRequest {
                id_token: id_token.to_owned(),
            },
        )
        .await
    }

    /// Exchange a third-party identity token for a service token.
    pub async fn login(&self, id_token: &str) -> Result<types::AuthResponse, Error> {
        self.post(
            self.url("auth/login"),
            &types::AuthRequest {
                id_token: id_token.to_owned(),
            },
        )
        .await
    }

    /// Fetch the authenticated user's own record.
    pub async fn current_user(&self) -> Result<types::UserDto, Error> {
        self.get(self.url("auth/me")).await
    }

    // ── Containers ───────────────────────────────────────────────────

    pub async fn list_containers(&self) -> Result<Vec<types::ContainerDto>, Error> {
        self.get(self.url("containers")).await
    }

    pub async fn get_container(&self, id: i64) -> Result<types::ContainerDto, Error> {
        self.get(self.url(&format!("containers/{id}"))).await
    }

    pub async fn get_container_by_name(&self, name: &str) -> Result<types::ContainerDto, Error> {
        self.get(self.url_from_segments(&["containers", "name", name]))
            .await
    }

    pub async fn get_container_by_code(&self, code: &str) -> Result<types::ContainerDto, Error> {
        self.get(self.url_from_segments(&["containers", "code", code]))
            .await
    }

    pub async fn list_containers_by_type(
        &self,
        type_id: i64,
    ) -> Result<Vec<types::ContainerDto>, Error> {
        self.get(self.url(&format!("containers/type/{type_id}")))
            .await
    }

    pub async fn list_containers_by_product(
        &self,
        product_id: i64,
    ) -> Result<Vec<types::ContainerDto>, Error> {
        self.get(self.url(&format!("containers/product/{product_id}")))
            .await
    }

    /// Status values: Default, Active, Inactive, Maintenance, Disposed.
    pub async fn list_containers_by_status(
        &self,
        status: &str,
    ) -> Result<Vec<types::ContainerDto>, Error> {
        self.get(self.url_from_segments(&["containers", "status", status]))
            .await
    }

    pub async fn create_container(
        &self,
        body: &types::ContainerCreate,
    ) -> Result<types::ContainerDto, Error> {
        self.post(self.url("containers"), body).await
    }

    pub async fn update_container(
        &self,
        body: &types::ContainerUpdate,
    ) -> Result<types::ContainerDto, Error> {
        self.put(self.url("containers"), body).await
    }

    pub async fn delete_container(&self, id: i64) -> Result<(), Error> {
        self.delete(self.url(&format!("containers/{id}"))).await
    }

    // ── Container types ──────────────────────────────────────────────

    pub async fn list_container_types(&self) -> Result<Vec<types::ContainerTypeDto>, Error> {
        self.get(self.url("container-types")).await
    }

    pub async fn get_container_type(&self, id: i64) -> Result<types::ContainerTypeDto, Error> {
        self.get(self.url(&format!("container-types/{id}"))).await
    }

    pub async fn get_container_type_by_name(
        &self,
        name: &str,
    ) -> Result<types::ContainerTypeDto, Error> {
        self.get(self.url_from_segments(&["container-types", "name", name]))
            .await
    }

    /// Container types ordered by volume.
    pub async fn list_container_types_by_volume(
        &self,
    ) -> Result<Vec<types::ContainerTypeDto>, Error> {
        self.get(self.url("container-types/volume")).await
    }

    pub async fn list_container_types_by_unit(
        &self,
        unit_id: i64,
    ) -> Result<Vec<types::ContainerTypeDto>, Error> {
        self.get(self.url(&format!("container-types/unit/{unit_id}")))
            .await
    }

    pub async fn create_container_type(
        &self,
        body: &types::ContainerTypeCreate,
    ) -> Result<types::ContainerTypeDto, Error> {
        self.post(self.url("container-types"), body).await
    }

    pub async fn update_container_type(
        &self,
        body: &types::ContainerTypeUpdate,
    ) -> Result<types::ContainerTypeDto, Error> {
        self.put(self.url("container-types"), body).await
    }

    pub async fn delete_container_type(&self, id: i64) -> Result<(), Error> {
        self.delete(self.url(&format!("container-types/{id}")))
            .await
    }

    // ── Products ─────────────────────────────────────────────────────

    pub async fn list_products(&self) -> Result<Vec<types::ProductDto>, Error> {
        self.get(self.url("products")).await
    }

    pub async fn get_product(&self, id: i64) -> Result<types::ProductDto, Error> {
        self.get(self.url(&format!("products/{id}"))).await
    }

    pub async fn list_products_by_type(
        &self,
        type_id: i64,
    ) -> Result<Vec<types::ProductDto>, Error> {
        self.get(self.url(&format!("products/type/{type_id}")))
            .await
    }

    /// Products past their expiration date.
    pub async fn list_expired_products(&self) -> Result<Vec<types::ProductDto>, Error> {
        self.get(self.url("products/expired")).await
    }

    pub async fn create_product(
        &self,
        body: &types::ProductCreate,
    ) -> Result<types::ProductDto, Error> {
        self.post(self.url("products"), body).await
    }

    pub async fn update_product(
        &self,
        body: &types::ProductUpdate,
    ) -> Result<types::ProductDto, Error> {
        self.put(self.url("products"), body).await
    }

    pub async fn delete_product(&self, id: i64) -> Result<(), Error> {
        self.delete(self.url(&format!("products/{id}"))).await
    }

    // ── Product types ────────────────────────────────────────────────

    pub async fn list_product_types(&self) -> Result<Vec<types::ProductTypeDto>, Error> {
        self.get(self.url("product-types")).await
    }

    pub async fn get_product_type(&self, id: i64) -> Result<types::ProductTypeDto, Error> {
        self.get(self.url(&format!("product-types/{id}"))).await
    }

    pub async fn get_product_type_by_title(
        &self,
        title: &str,
    ) -> Result<types::ProductTypeDto, Error> {
        self.get(self.url_from_segments(&["product-types", "title", title]))
            .await
    }

    pub async fn create_product_type(
        &self,
        body: &types::ProductTypeCreate,
    ) -> Result<types::ProductTypeDto, Error> {
        self.post(self.url("product-types"), body).await
    }

    pub async fn update_product_type(
        &self,
        body: &types::ProductTypeUpdate,
    ) -> Result<types::ProductTypeDto, Error> {
        self.put(self.url("product-types"), body).await
    }

    pub async fn delete_product_type(&self, id: i64) -> Result<(), Error> {
        self.delete(self.url(&format!("product-types/{id}"))).await
    }

    // ── Units ────────────────────────────────────────────────────────

    pub async fn list_units(&self) -> Result<Vec<types::UnitDto>, Error> {
        self.get(self.url("units")).await
    }

    pub async fn get_unit(&self, id: i64) -> Result<types::UnitDto, Error> {
        self.get(self.url(&format!("units/{id}"))).await
    }

    pub async fn create_unit(&self, body: &types::UnitCreate) -> Result<types::UnitDto, Error> {
        self.post(self.url("units"), body).await
    }

    pub async fn update_unit(&self, body: &types::UnitUpdate) -> Result<types::UnitDto, Error> {
        self.put(self.url("units"), body).await
    }

    pub async fn delete_unit(&self, id: i64) -> Result<(), Error> {
        self.delete(self.url(&format!("units/{id}"))).await
    }

    // ── Users ────────────────────────────────────────────────────────

    pub async fn list_users(&self) -> Result<Vec<types::UserDto>, Error> {
        self.get(self.url("users")).await
    }

    pub async fn get_user(&self, id: i64) -> Result<types::UserDto, Error> {
        self.get(self.url(&format!("users/{id}"))).await
    }

    pub async fn get_user_by_email(&self, email: &str) -> Result<types::UserDto, Error> {
        self.get(self.url_from_segments(&["users", "email", email]))
            .await
    }

    pub async fn list_users_by_role(&self, role_id: i64) -> Result<Vec<types::UserDto>, Error> {
        self.get(self.url(&format!("users/role/{role_id}"))).await
    }

    pub async fn create_user(&self, body: &types::UserCreate) -> Result<types::UserDto, Error> {
        self.post(self.url("users"), body).await
    }

    pub async fn update_user(&self, body: &types::UserUpdate) -> Result<types::UserDto, Error> {
        self.put(self.url("users"), body).await
    }

    /// Admin confirmation of a self-registered account.
    pub async fn confirm_user(&self, id: i64) -> Result<types::UserDto, Error> {
        self.post_no_body(self.url(&format!("users/{id}/confirm")))
            .await
    }

    /// Role-only update; the full `PUT /users` body is not required.
    pub async fn set_user_role(&self, id: i64, role_id: i64) -> Result<(), Error> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Body {
            role_id: i64,
        }

        self.put_empty(self.url(&format!("users/{id}/role")), &Body { role_id })
            .await
    }

    pub async fn delete_user(&self, id: i64) -> Result<(), Error> {
        self.delete(self.url(&format!("users/{id}"))).await
    }

    // ── Roles (read-only) ────────────────────────────────────────────

    pub async fn list_roles(&self) -> Result<Vec<types::RoleDto>, Error> {
        self.get(self.url("roles")).await
    }

    pub async fn get_role(&self, id: i64) -> Result<types::RoleDto, Error> {
        self.get(self.url(&format!("roles/{id}"))).await
    }

    // ── Container history (read-only, append-only server side) ───────

    pub async fn list_history(&self) -> Result<Vec<types::HistoryRecordDto>, Error> {
        self.get(self.url("api/containerhistory")).await
    }

    pub async fn get_history_record(&self, id: i64) -> Result<types::HistoryRecordDto, Error> {
        self.get(self.url(&format!("api/containerhistory/{id}")))
            .await
    }

    pub async fn list_history_by_container(
        &self,
        container_id: i64,
    ) -> Result<Vec<types::HistoryRecordDto>, Error> {
        self.get(self.url(&format!("api/containerhistory/container/{container_id}")))
            .await
    }

    pub async fn list_history_by_product(
        &self,
        product_id: i64,
    ) -> Result<Vec<types::HistoryRecordDto>, Error> {
        self.get(self.url(&format!("api/containerhistory/product/{product_id}")))
            .await
    }

    pub async fn list_history_by_user(
        &self,
        user_id: i64,
    ) -> Result<Vec<types::HistoryRecordDto>, Error> {
        self.get(self.url(&format!("api/containerhistory/user/{user_id}")))
            .await
    }

    pub async fn list_history_by_action_type(
        &self,
        action_type: &str,
    ) -> Result<Vec<types::HistoryRecordDto>, Error> {
        self.get(self.url_from_segments(&["api", "containerhistory", "action-type", action_type]))
            .await
    }

    /// The `n` most recent history records.
    pub async fn list_recent_history(
        &self,
        count: u32,
    ) -> Result<Vec<types::HistoryRecordDto>, Error> {
        self.get(self.url(&format!("api/containerhistory/recent/{count}")))
            .await
    }
}
