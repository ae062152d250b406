//! Client for the signals REST API, with local mock fallback.
//!
//! Read paths (`random_signals`, `search_signals`) never fail: any transport
//! or server error falls back to the fixed mock catalog, so the discovery
//! grid always has something to render. Auth paths surface errors to the
//! caller instead; there is no retry and no timeout on either path.

use std::fmt::{Display, Formatter};

use log::warn;
use reqwest::blocking::{Client, Response};
use serde::{Deserialize, Serialize};

use crate::models::Signal;

/// Base URL of the development backend.
pub const DEFAULT_API_BASE: &str = "http://localhost:5000";

#[derive(Debug)]
pub enum ApiError {
    /// The request never produced a server answer (DNS, refused, TLS, ...).
    Network(String),
    /// The server answered with an error payload.
    Server(String),
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Server(msg) => write!(f, "{}", msg),
        }
    }
}

/// Credentials for `POST /api/login`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LoginRequest {
    pub email: String,
    pub senha: String,
}

/// Payload for `POST /api/register`, matching the backend's field names.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RegisterRequest {
    pub nome: String,
    pub sobrenome: String,
    pub email: String,
    pub senha: String,
    pub matricula: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Blocking client for the signals backend. One instance per embedder; the
/// cookie store keeps the auth session across calls on the same handle.
pub struct SignalsApi {
    client: Client,
    base_url: String,
}

impl SignalsApi {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let client = Client::builder()
            .cookie_store(true)
            .build()
            .map_err(|e| ApiError::Network(format!("Could not build HTTP client: {e}")))?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Fetches up to `limit` signals for the discovery grid. Falls back to
    /// the first `limit` entries of the mock catalog when the backend is
    /// unreachable or answers with an error.
    pub fn random_signals(&self, limit: usize) -> Vec<Signal> {
        let url = format!("{}/api/signals/random", self.base_url);
        let result = self
            .client
            .get(&url)
            .query(&[("limit", limit.to_string())])
            .send()
            .and_then(|response| response.error_for_status())
            .and_then(|response| response.json::<Vec<Signal>>());
        match result {
            Ok(signals) => signals,
            Err(e) => {
                warn!("Erro ao carregar outros sinais: {e}");
                mock_catalog().into_iter().take(limit).collect()
            }
        }
    }

    /// Searches signals by query. Falls back to a single mock result naming
    /// the query when the backend is unreachable or answers with an error.
    pub fn search_signals(&self, query: &str) -> Vec<Signal> {
        let url = format!("{}/api/signals/search", self.base_url);
        let result = self
            .client
            .get(&url)
            .query(&[("q", query)])
            .send()
            .and_then(|response| response.error_for_status())
            .and_then(|response| response.json::<Vec<Signal>>());
        match result {
            Ok(signals) => signals,
            Err(e) => {
                warn!("Erro ao buscar sinais: {e}");
                mock_search_results(query)
            }
        }
    }

    /// Authenticates against `POST /api/login`. The session cookie lands in
    /// this client's cookie store.
    pub fn login(&self, request: &LoginRequest) -> Result<(), ApiError> {
        let url = format!("{}/api/login", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check_auth_response(response, "Erro ao fazer login")
    }

    /// Creates an account through `POST /api/register`.
    pub fn register(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        let url = format!("{}/api/register", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check_auth_response(response, "Erro ao criar conta")
    }
}

fn check_auth_response(response: Response, fallback_msg: &str) -> Result<(), ApiError> {
    if response.status().is_success() {
        return Ok(());
    }
    let message = response
        .json::<ErrorBody>()
        .ok()
        .and_then(|body| body.error)
        .unwrap_or_else(|| fallback_msg.to_string());
    Err(ApiError::Server(message))
}

/// The eight starter signals shown while the backend is unavailable.
pub fn mock_catalog() -> Vec<Signal> {
    [
        ("5", "Olá", "Saudação básica", "Ola"),
        ("6", "Obrigado", "Expressão de gratidão", "Obrigado"),
        ("7", "Sim", "Afirmação", "Sim"),
        ("8", "Não", "Negação", "Nao"),
        ("9", "Por favor", "Pedido educado", "Por+favor"),
        ("10", "Desculpa", "Pedido de desculpas", "Desculpa"),
        ("11", "Bom dia", "Saudação matinal", "Bom+dia"),
        ("12", "Boa noite", "Saudação noturna", "Boa+noite"),
    ]
    .into_iter()
    .map(|(id, title, description, slug)| Signal {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        video_url: None,
        image_url: Some(format!("https://via.placeholder.com/300x200?text={slug}")),
    })
    .collect()
}

/// Single placeholder result for a failed search, naming the query.
pub fn mock_search_results(query: &str) -> Vec<Signal> {
    vec![Signal {
        id: "1".to_string(),
        title: format!("Resultado para \"{query}\""),
        description: "Descrição do sinal encontrado".to_string(),
        video_url: None,
        image_url: Some("https://via.placeholder.com/300x200?text=Sinal+1".to_string()),
    }]
}
