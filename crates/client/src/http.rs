use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared_types::{coerce_list, AppError, ClientConfig};

/// Credentialed JSON transport to the SEIRA backend.
///
/// Native builds keep a cookie jar; browser builds ask `fetch` to include
/// cookies on every request.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

/// Clients talking to the same origin are interchangeable.
impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url
    }
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, AppError> {
        let builder = reqwest::Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.cookie_store(true);
        let http = builder
            .build()
            .map_err(|e| AppError::network(format!("No se pudo crear el cliente HTTP: {e}")))?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, AppError> {
        Self::new(config.api_base())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, format!("{}{}", self.base_url, path));
        #[cfg(target_arch = "wasm32")]
        let builder = builder.fetch_credentials_include();
        builder
    }

    /// Send a request and return the raw status and body. Only transport
    /// failures are errors here.
    pub(crate) async fn execute(&self, builder: RequestBuilder) -> Result<(u16, String), AppError> {
        let response = builder.send().await.map_err(|e| {
            tracing::warn!(error = %e, "request failed");
            AppError::network(format!("No se pudo conectar con el servidor: {e}"))
        })?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::network(format!("Respuesta incompleta del servidor: {e}")))?;
        Ok((status, body))
    }

    /// Map a non-2xx status to an error, passing the body through otherwise.
    pub(crate) fn check(status: u16, body: String) -> Result<String, AppError> {
        if (200..300).contains(&status) {
            Ok(body)
        } else {
            let err = AppError::from_response(status, &body);
            tracing::debug!(status, kind = %err.kind, "backend returned an error");
            Err(err)
        }
    }

    pub(crate) fn decode<T: DeserializeOwned>(body: &str) -> Result<T, AppError> {
        serde_json::from_str(body)
            .map_err(|e| AppError::parse(format!("Respuesta inválida del servidor: {e}")))
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        let (status, body) = self.execute(self.request(Method::GET, path)).await?;
        Self::decode(&Self::check(status, body)?)
    }

    /// GET a list endpoint. A body that is not a JSON array yields an empty list.
    pub(crate) async fn get_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, AppError> {
        let value: serde_json::Value = self.get_json(path).await?;
        coerce_list(value).map_err(|e| AppError::parse(format!("Elemento inválido en la lista: {e}")))
    }

    pub(crate) async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, AppError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let (status, text) = self.execute(self.request(Method::POST, path).json(body)).await?;
        Self::decode(&Self::check(status, text)?)
    }

    pub(crate) async fn put_json<B, T>(&self, path: &str, body: &B) -> Result<T, AppError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let (status, text) = self.execute(self.request(Method::PUT, path).json(body)).await?;
        Self::decode(&Self::check(status, text)?)
    }
}
