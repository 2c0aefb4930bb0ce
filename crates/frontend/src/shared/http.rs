//! Единый конвейер HTTP-запросов к backend.
//!
//! Каждый запрос проходит через `authorize`, который добавляет
//! `Authorization: Bearer <token>`. Ответ 401 вызывает принудительный выход.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::cell::RefCell;

use super::api_error::ApiError;
use super::config;
use crate::system::auth::storage;

thread_local! {
    static ON_UNAUTHORIZED: RefCell<Option<Box<dyn Fn()>>> = RefCell::new(None);
}

/// Регистрирует обработчик 401 (устанавливается AuthProvider)
pub fn set_unauthorized_handler(handler: impl Fn() + 'static) {
    ON_UNAUTHORIZED.with(|h| *h.borrow_mut() = Some(Box::new(handler)));
}

fn notify_unauthorized() {
    ON_UNAUTHORIZED.with(|h| {
        if let Some(handler) = h.borrow().as_ref() {
            handler();
        }
    });
}

pub fn api_base() -> String {
    let cfg = config::current();
    let (protocol, host) = match web_sys::window() {
        Some(w) => {
            let location = w.location();
            (
                location.protocol().unwrap_or_else(|_| "http:".to_string()),
                location
                    .hostname()
                    .unwrap_or_else(|_| "127.0.0.1".to_string()),
            )
        }
        None => ("http:".to_string(), "127.0.0.1".to_string()),
    };
    cfg.api_root(&protocol, &host)
}

pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Интерцептор: добавляет bearer-токен, если он есть
fn authorize(builder: RequestBuilder) -> RequestBuilder {
    match storage::get_access_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

#[derive(Clone, Copy, Debug)]
enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }

    fn builder(&self, url: &str) -> RequestBuilder {
        match self {
            Method::Get => Request::get(url),
            Method::Post => Request::post(url),
            Method::Put => Request::put(url),
            Method::Patch => Request::patch(url),
            Method::Delete => Request::delete(url),
        }
    }
}

async fn send<B: Serialize>(
    method: Method,
    path: &str,
    body: Option<&B>,
) -> Result<Response, ApiError> {
    let url = api_url(path);
    log::debug!("{} {}", method.as_str(), url);

    let builder = authorize(method.builder(&url)).header("Accept", "application/json");
    let result = match body {
        Some(body) => builder
            .json(body)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await,
        None => builder.send().await,
    };
    let response = result.map_err(|e| {
        log::warn!("{} {} failed: {}", method.as_str(), url, e);
        ApiError::Network(e.to_string())
    })?;

    if response.ok() {
        return Ok(response);
    }

    let status = response.status();
    let text = response.text().await.unwrap_or_default();
    log::warn!("{} {} -> HTTP {}", method.as_str(), url, status);
    let err = ApiError::from_response(status, &text);
    if matches!(err, ApiError::Unauthorized) {
        notify_unauthorized();
    }
    Err(err)
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = send::<()>(Method::Get, path, None).await?;
    decode(response).await
}

/// GET, где 204/404 означают «нет записи»
pub async fn get_optional<T: DeserializeOwned>(path: &str) -> Result<Option<T>, ApiError> {
    match send::<()>(Method::Get, path, None).await {
        Ok(response) if response.status() == 204 => Ok(None),
        Ok(response) => decode(response).await.map(Some),
        Err(ApiError::NotFound) => Ok(None),
        Err(e) => Err(e),
    }
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let response = send(Method::Post, path, Some(body)).await?;
    decode(response).await
}

pub async fn post<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    send(Method::Post, path, Some(body)).await.map(|_| ())
}

pub async fn put<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    send(Method::Put, path, Some(body)).await.map(|_| ())
}

pub async fn patch<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    send(Method::Patch, path, Some(body)).await.map(|_| ())
}

pub async fn patch_empty(path: &str) -> Result<(), ApiError> {
    send::<()>(Method::Patch, path, None).await.map(|_| ())
}

pub async fn delete(path: &str) -> Result<(), ApiError> {
    send::<()>(Method::Delete, path, None).await.map(|_| ())
}

/// `path?k=v&...` с URL-кодированием значений; пустые значения пропускаются
pub fn with_query(path: &str, params: &[(&str, &str)]) -> String {
    let query: Vec<String> = params
        .iter()
        .filter(|(_, v)| !v.is_empty())
        .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
        .collect();
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, query.join("&"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_query() {
        assert_eq!(
            with_query("/reports/sales", &[("from", "2024-05-01"), ("to", "")]),
            "/reports/sales?from=2024-05-01"
        );
        assert_eq!(with_query("/sales", &[]), "/sales");
        assert_eq!(
            with_query("/clients", &[("q", "a b&c")]),
            "/clients?q=a%20b%26c"
        );
    }
}
