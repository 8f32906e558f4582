//! Mock JSON API.
//!
//! Every route answers with a fixed shape so tests can pin down how the
//! fetcher treats each class of response:
//! - `/api/user`: 200 with a `data` envelope
//! - `/api/fail`, `/api/not-found`: error statuses with a JSON body
//! - `/api/not-json`, `/api/broken`: malformed bodies with 200 and 500
//! - `/api/no-data`: 200 with valid JSON lacking the `data` field
//! - `/api/counter`: a new value on each call
//! - `/api/flaky`: alternates between failing and succeeding
//! - `/api/echo`: reflects the method, headers and body it received
//! - `/api/slow/{ms}`: answers after a delay
//! - `/api/session`: the current user, or `null` when signed out

use actix_cors::Cors;
use actix_web::dev::Server;
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use fetcher::{CurrentUser, EmailAddress};
use serde_json::json;
use std::collections::BTreeMap;
use std::net::TcpListener;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;
use uuid::Uuid;

pub struct Config {
    /// set to "0.0.0.0" for public access, "127.0.0.1" for local dev
    pub ip: String,
    /// set to 0 to get an os-assigned port
    pub port: u16,
    /// List of allowed CORS origins. Use "*" to allow any origin (development only)
    pub allowed_origins: Vec<String>,
    /// Whether `/api/session` starts out reporting a signed-in user.
    pub signed_in: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            ip: "127.0.0.1".into(),
            port: 0,
            allowed_origins: vec!["*".to_string()],
            signed_in: true,
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        use std::env::var;

        let defaults = Config::default();
        let allowed_origins = var("ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Config {
            ip: var("IP_ADDRESS").unwrap_or(defaults.ip),
            port: match var("PORT") {
                Ok(port) => port.parse()?,
                Err(_) => 8000,
            },
            allowed_origins,
            signed_in: match var("SIGNED_IN") {
                Ok(flag) => flag.parse()?,
                Err(_) => defaults.signed_in,
            },
        })
    }
}

/// Mutable state shared by the mock routes.
#[derive(Debug)]
pub struct MockState {
    counter: AtomicU64,
    flaky_calls: AtomicU64,
    signed_in: AtomicBool,
    user: CurrentUser,
}

impl MockState {
    fn new(signed_in: bool) -> Self {
        Self {
            counter: AtomicU64::new(0),
            flaky_calls: AtomicU64::new(0),
            signed_in: AtomicBool::new(signed_in),
            user: CurrentUser {
                id: Uuid::new_v4().to_string(),
                email_addresses: vec![EmailAddress {
                    email_address: "alice@example.com".into(),
                }],
            },
        }
    }

    pub fn set_signed_in(&self, signed_in: bool) {
        self.signed_in.store(signed_in, Ordering::SeqCst);
    }

    pub fn user(&self) -> &CurrentUser {
        &self.user
    }

    /// Number of times `/api/counter` has been hit.
    pub fn counter_hits(&self) -> u64 {
        self.counter.load(Ordering::SeqCst)
    }
}

/// Build the server, but not await it.
///
/// Returns the port that the server has bound to by modifying the config,
/// along with the state the routes share.
pub fn build(
    config: &mut Config,
) -> std::io::Result<(Server, web::Data<MockState>)> {
    let state = web::Data::new(MockState::new(config.signed_in));
    let allowed_origins = config.allowed_origins.clone();

    // OS assigns the port if binding to 0
    let listener = TcpListener::bind(format!("{}:{}", config.ip, config.port))?;
    config.port = listener.local_addr()?.port();

    let app_state = state.clone();
    let server = HttpServer::new(move || {
        let cors = if allowed_origins.contains(&"*".to_string()) {
            Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .supports_credentials()
        } else {
            let mut cors = Cors::default()
                .allow_any_method()
                .allow_any_header()
                .supports_credentials();
            for origin in &allowed_origins {
                cors = cors.allowed_origin(origin);
            }
            cors
        };

        App::new()
            .wrap(cors)
            .service(api_services())
            .app_data(app_state.clone())
    })
    .listen(listener)?
    .run();

    Ok((server, state))
}

pub fn api_services() -> actix_web::Scope {
    web::scope("/api")
        .route("/user", web::get().to(user))
        .route("/fail", web::get().to(fail))
        .route("/not-found", web::get().to(not_found))
        .route("/not-json", web::get().to(not_json))
        .route("/broken", web::get().to(broken))
        .route("/no-data", web::get().to(no_data))
        .route("/counter", web::get().to(counter))
        .route("/flaky", web::get().to(flaky))
        .route("/echo", web::route().to(echo))
        .route("/slow/{ms}", web::get().to(slow))
        .route("/session", web::get().to(session))
        .route("/session/sign-out", web::post().to(sign_out))
}

async fn user() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "data": { "id": 1 } }))
}

async fn fail() -> HttpResponse {
    HttpResponse::InternalServerError().json(json!({ "message": "fail" }))
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(json!({ "message": "not found" }))
}

async fn not_json() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain")
        .body("not json")
}

async fn broken() -> HttpResponse {
    HttpResponse::InternalServerError()
        .content_type("text/plain")
        .body("not json")
}

async fn no_data() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "id": 1 }))
}

async fn counter(state: web::Data<MockState>) -> HttpResponse {
    let count = state.counter.fetch_add(1, Ordering::SeqCst) + 1;
    HttpResponse::Ok().json(json!({ "data": { "count": count } }))
}

/// Odd-numbered calls fail, even-numbered calls succeed.
async fn flaky(state: web::Data<MockState>) -> HttpResponse {
    let call = state.flaky_calls.fetch_add(1, Ordering::SeqCst) + 1;
    if call % 2 == 1 {
        HttpResponse::ServiceUnavailable()
            .json(json!({ "message": "try again" }))
    } else {
        HttpResponse::Ok().json(json!({ "data": { "call": call } }))
    }
}

async fn echo(req: HttpRequest, body: String) -> HttpResponse {
    let headers: BTreeMap<String, String> = req
        .headers()
        .iter()
        .filter_map(|(name, value)| {
            Some((name.as_str().to_string(), value.to_str().ok()?.to_string()))
        })
        .collect();

    HttpResponse::Ok().json(json!({
        "data": {
            "method": req.method().as_str(),
            "headers": headers,
            "body": body,
        }
    }))
}

async fn slow(path: web::Path<u64>) -> HttpResponse {
    let ms = path.into_inner();
    tokio::time::sleep(Duration::from_millis(ms)).await;
    HttpResponse::Ok().json(json!({ "data": { "delay_ms": ms } }))
}

async fn session(state: web::Data<MockState>) -> HttpResponse {
    if state.signed_in.load(Ordering::SeqCst) {
        HttpResponse::Ok().json(json!({ "data": state.user }))
    } else {
        HttpResponse::Ok().json(json!({ "data": null }))
    }
}

async fn sign_out(state: web::Data<MockState>) -> HttpResponse {
    state.set_signed_in(false);
    HttpResponse::Ok().json(json!({ "data": null }))
}
