use axum::{
    http::header::USER_AGENT,
    http::Request,
    middleware::Next,
    response::Response,
    RequestPartsExt,
};
use axum_client_ip::InsecureClientIp;
use log::info;

pub async fn request_logger<B>(req: Request<B>, next: Next<B>) -> Response {
    let (mut parts, body) = req.into_parts();

    if parts.uri.path() != "/healthz" {
        let remote_addr = match parts.extract::<InsecureClientIp>().await {
            Ok(InsecureClientIp(ip)) => ip.to_string(),
            Err(_) => "-".to_string(),
        };
        let user_agent = parts
            .headers
            .get(USER_AGENT)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("");

        info!(
            "{} - \"{} {} {:?}\" \"{}\"",
            remote_addr,
            parts.method,
            parts.uri.path(),
            parts.version,
            user_agent
        );
    }

    let req = Request::from_parts(parts, body);
    next.run(req).await
}
