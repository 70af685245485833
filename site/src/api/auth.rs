use actix_web::http::StatusCode;
use actix_web::{HttpResponse, post, web};
use serde::Serialize;
use std::time::Duration;

/// Relays sign-up requests from the browser to the auth service.
pub struct AuthRelay {
    client: reqwest::Client,
    upstream: Option<String>,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    message: &'a str,
}

impl AuthRelay {
    pub fn new(upstream: Option<String>) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .build()?;
        Ok(Self { client, upstream })
    }

    pub fn upstream(&self) -> Option<&str> {
        self.upstream.as_deref()
    }
}

fn error_response(status: StatusCode, message: &str) -> HttpResponse {
    HttpResponse::build(status).json(ErrorBody { message })
}

/// Mirrors the upstream status and body so the client sees the auth
/// service's own `message` on failure.
#[post("/api/auth/signup")]
pub async fn signup(relay: web::Data<AuthRelay>, body: web::Bytes) -> HttpResponse {
    let Some(upstream) = relay.upstream() else {
        log::warn!("sign up attempted but AUTH_BACKEND_URL is not set");
        return error_response(
            StatusCode::SERVICE_UNAVAILABLE,
            "Sign up is not available right now",
        );
    };

    let sent = relay
        .client
        .post(upstream)
        .header(reqwest::header::CONTENT_TYPE, "application/json")
        .body(body.to_vec())
        .send()
        .await;

    let response = match sent {
        Ok(r) => r,
        Err(e) => {
            log::error!("auth service at {upstream} unreachable: {e}");
            return error_response(StatusCode::BAD_GATEWAY, "Authentication service unreachable");
        }
    };

    // actix and reqwest sit on different `http` majors
    let status =
        StatusCode::from_u16(response.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("application/json")
        .to_owned();

    match response.bytes().await {
        Ok(bytes) => {
            log::info!("sign up relayed, upstream answered {status}");
            HttpResponse::build(status)
                .content_type(content_type)
                .body(bytes.to_vec())
        }
        Err(e) => {
            log::error!("reading auth service response failed: {e}");
            error_response(StatusCode::BAD_GATEWAY, "Authentication service unreachable")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test};
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    fn payload() -> serde_json::Value {
        serde_json::json!({
            "name": "Ada",
            "email": "ada@example.com",
            "password": "hunter2",
        })
    }

    /// One-shot HTTP upstream answering with a fixed status line and body.
    /// Hands back the request body it received.
    fn fake_upstream(status_line: &'static str, body: &'static str) -> (String, thread::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/signup", listener.local_addr().unwrap());

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut raw = Vec::new();
            let mut chunk = [0u8; 1024];

            let (head_end, content_length) = loop {
                let n = stream.read(&mut chunk).unwrap();
                raw.extend_from_slice(&chunk[..n]);
                let text = String::from_utf8_lossy(&raw);
                if let Some(pos) = text.find("\r\n\r\n") {
                    let len = text[..pos]
                        .lines()
                        .find_map(|l| {
                            let (k, v) = l.split_once(':')?;
                            k.eq_ignore_ascii_case("content-length")
                                .then(|| v.trim().parse::<usize>().ok())?
                        })
                        .unwrap_or(0);
                    break (pos + 4, len);
                }
            };
            while raw.len() < head_end + content_length {
                let n = stream.read(&mut chunk).unwrap();
                raw.extend_from_slice(&chunk[..n]);
            }

            let reply = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(reply.as_bytes()).unwrap();

            String::from_utf8_lossy(&raw[head_end..head_end + content_length]).into_owned()
        });

        (url, handle)
    }

    #[actix_web::test]
    async fn unavailable_without_upstream() {
        let relay = web::Data::new(AuthRelay::new(None).unwrap());
        let app = test::init_service(App::new().app_data(relay).service(signup)).await;

        let req = test::TestRequest::post()
            .uri("/api/auth/signup")
            .set_json(payload())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Sign up is not available right now");
    }

    #[actix_web::test]
    async fn mirrors_upstream_rejection() {
        let (url, upstream) =
            fake_upstream("409 Conflict", r#"{"message":"Email already registered"}"#);
        let relay = web::Data::new(AuthRelay::new(Some(url)).unwrap());
        let app = test::init_service(App::new().app_data(relay).service(signup)).await;

        let req = test::TestRequest::post()
            .uri("/api/auth/signup")
            .set_json(payload())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::CONFLICT);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Email already registered");

        let forwarded: serde_json::Value =
            serde_json::from_str(&upstream.join().unwrap()).unwrap();
        assert_eq!(forwarded, payload());
    }

    #[actix_web::test]
    async fn bad_gateway_when_upstream_down() {
        // bind then drop so nothing listens on the port
        let port = TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();
        let url = format!("http://127.0.0.1:{port}/signup");
        let relay = web::Data::new(AuthRelay::new(Some(url)).unwrap());
        let app = test::init_service(App::new().app_data(relay).service(signup)).await;

        let req = test::TestRequest::post()
            .uri("/api/auth/signup")
            .set_json(payload())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Authentication service unreachable");
    }
}
