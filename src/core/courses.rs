use crate::domain::model::{Course, CourseChanges, CourseId, Lesson, LessonQuery, Payload};
use crate::domain::ports::{ConfigProvider, CourseApi};
use crate::utils::error::{CatalogError, Result};
use async_trait::async_trait;
use hyper::ext::ReasonPhrase;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

pub const COURSES_PATH: &str = "/api/courses";
pub const LESSONS_PATH: &str = "/api/lessons";

/// 以 REST 後端為來源的課程資料服務。
///
/// 每個操作只送出一個請求，不重試、不快取；非 2xx 回應一律以
/// [`CatalogError::Http`] 回報。
#[derive(Debug, Clone)]
pub struct CoursesService {
    client: Client,
    base_url: String,
}

impl CoursesService {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        let mut headers = HeaderMap::new();
        for (name, value) in config.default_headers() {
            let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
                CatalogError::InvalidConfigValueError {
                    field: "api.headers".to_string(),
                    value: name.clone(),
                    reason: e.to_string(),
                }
            })?;
            let header_value =
                HeaderValue::from_str(&value).map_err(|e| CatalogError::InvalidConfigValueError {
                    field: format!("api.headers.{}", name),
                    value: value.clone(),
                    reason: e.to_string(),
                })?;
            headers.insert(header_name, header_value);
        }

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| CatalogError::ConfigError {
                message: format!("Failed to build HTTP client: {}", e),
            })?;

        Ok(Self::with_client(client, config.base_url()))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn course_url(&self, id: CourseId) -> String {
        self.api_url(&format!("{}/{}", COURSES_PATH, id))
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder, url: &str) -> Result<T> {
        let response = request
            .send()
            .await
            .map_err(|e| CatalogError::network(url, e))?;

        tracing::debug!("Response status from {}: {}", url, response.status());
        Self::handle_response(response, url).await
    }

    async fn handle_response<T: DeserializeOwned>(response: Response, url: &str) -> Result<T> {
        let status = response.status();
        // hyper 只在說明文字與標準不同時保留 ReasonPhrase
        let reason = response
            .extensions()
            .get::<ReasonPhrase>()
            .map(|phrase| String::from_utf8_lossy(phrase.as_bytes()).into_owned());
        let body = response
            .text()
            .await
            .map_err(|e| CatalogError::network(url, e))?;

        if !status.is_success() {
            tracing::warn!("❌ Request to {} failed with status {}", url, status);
            return Err(CatalogError::http(status, reason, url, body));
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl CourseApi for CoursesService {
    async fn find_all_courses(&self) -> Result<Vec<Course>> {
        let url = self.api_url(COURSES_PATH);
        tracing::debug!("GET {}", url);

        let envelope: Payload<Course> = self.send(self.client.get(&url), &url).await?;
        tracing::debug!("Fetched {} courses", envelope.payload.len());
        Ok(envelope.payload)
    }

    async fn find_course_by_id(&self, id: CourseId) -> Result<Course> {
        let url = self.course_url(id);
        tracing::debug!("GET {}", url);

        self.send(self.client.get(&url), &url).await
    }

    async fn save_course(&self, id: CourseId, changes: &CourseChanges) -> Result<Course> {
        let url = self.course_url(id);
        tracing::debug!("PUT {}", url);

        self.send(self.client.put(&url).json(changes), &url).await
    }

    async fn find_lessons_with(&self, query: &LessonQuery) -> Result<Vec<Lesson>> {
        let url = self.api_url(LESSONS_PATH);
        tracing::debug!("GET {} {:?}", url, query);

        let request = self.client.get(&url).query(&query.to_query_pairs());
        let envelope: Payload<Lesson> = self.send(request, &url).await?;
        tracing::debug!(
            "Fetched {} lessons for course {}",
            envelope.payload.len(),
            query.course_id
        );
        Ok(envelope.payload)
    }
}
