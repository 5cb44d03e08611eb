use std::{io::Read, net::SocketAddr};

use overlap::Rect;
use serde::Deserialize;
use thiserror::Error;
use time::{macros::format_description, OffsetDateTime};
use tiny_http::{Header, Method, Request, Response, ResponseBox};

use crate::store::{Intersection, IntersectionStore};

/// The decoded body of a check request: one reference rectangle and the
/// candidate rectangles to test against it.
///
/// Both fields default when absent; only undecodable JSON is rejected.
#[derive(Debug, Deserialize)]
struct CheckRequest {
    #[serde(default)]
    main: Rect,

    #[serde(default)]
    input: Vec<Rect>,
}

/// The HTTP front end, bound to an address and holding the store that
/// intersections are recorded into.
pub struct Server<S> {
    http: tiny_http::Server,
    store: S,
}

impl<S: IntersectionStore> Server<S> {
    pub fn bind(address: SocketAddr, store: S) -> Result<Self, ServerError> {
        let http =
            tiny_http::Server::http(address).map_err(|source| ServerError::Bind { address, source })?;

        Ok(Self { http, store })
    }

    /// The address the server actually bound to. Differs from the requested
    /// address when binding to port 0.
    pub fn local_addr(&self) -> SocketAddr {
        self.http
            .server_addr()
            .to_ip()
            .expect("server is always bound to an IP address")
    }

    /// Serves requests until the process exits.
    pub fn run(self) {
        log::info!("Listening on http://{}", self.local_addr());

        let Self { http, mut store } = self;

        for request in http.incoming_requests() {
            handle_request(&mut store, request);
        }
    }
}

fn handle_request<S: IntersectionStore>(store: &mut S, mut request: Request) {
    let method = request.method().clone();
    let url = request.url().to_owned();

    log::debug!("{} {}", method, url);

    let response = match (method, url.as_str()) {
        (Method::Post, "/") => {
            let mut body = String::new();

            match request.as_reader().read_to_string(&mut body) {
                Ok(_) => check_response(store, &body),
                Err(err) => {
                    log::warn!("Failed to read request body: {}", err);
                    bad_request(format!("Could not read request body: {}", err))
                }
            }
        }
        (Method::Get, "/") => list_response(store),
        (_, "/") => Response::empty(405).boxed(),
        _ => Response::empty(404).boxed(),
    };

    if let Err(err) = request.respond(response) {
        log::error!("Failed to send response: {}", err);
    }
}

fn check_response<S: IntersectionStore>(store: &mut S, body: &str) -> ResponseBox {
    match handle_check(store, body) {
        Ok(()) => Response::empty(204).boxed(),
        Err(err) => {
            log::warn!("Failed to decode check request: {}", err);
            bad_request(format!("Invalid request body: {}", err))
        }
    }
}

/// Decodes a check request and records every candidate that overlaps the
/// reference rectangle. The outcome of the individual writes does not affect
/// the response.
fn handle_check<S: IntersectionStore>(store: &mut S, body: &str) -> Result<(), serde_json::Error> {
    let check: CheckRequest = serde_json::from_str(body)?;

    record_intersections(store, &check);

    Ok(())
}

fn record_intersections<S: IntersectionStore>(store: &mut S, check: &CheckRequest) {
    for candidate in &check.input {
        if check.main.intersects(candidate) {
            let intersection = Intersection {
                rect: *candidate,
                time: current_timestamp(),
            };

            // A failed insert loses this intersection but must not abort the
            // rest of the batch.
            if let Err(err) = store.record(&intersection) {
                log::error!("Failed to record intersection: {}", err);
            }
        }
    }
}

fn list_response<S: IntersectionStore>(store: &mut S) -> ResponseBox {
    let intersections = match store.list_all() {
        Ok(intersections) => intersections,
        Err(err) => {
            log::error!("Failed to read recorded intersections: {}", err);
            Vec::new()
        }
    };

    let body = serde_json::to_string(&intersections)
        .expect("a list of intersections always serializes to JSON");

    let content_type = Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..]).unwrap();

    Response::from_string(body).with_header(content_type).boxed()
}

fn bad_request(message: String) -> ResponseBox {
    Response::from_string(message).with_status_code(400).boxed()
}

/// The current wall-clock time as `YYYY-MM-DD HH:MM:SS`, preferring the
/// server's local time and falling back to UTC when the local offset cannot
/// be determined.
fn current_timestamp() -> String {
    let format = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());

    now.format(&format)
        .expect("formatting a timestamp with a fixed format always succeeds")
}

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Could not bind to {address}")]
    Bind {
        address: SocketAddr,
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}
