use std::future::Future;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use actix_cors::Cors;
use actix_web::{App, http, HttpRequest, HttpResponse, HttpServer, web};
use actix_web::dev::ServerHandle;
use actix_web::http::header::ContentType;
use actix_web::web::{Data, ServiceConfig};
use log::{debug, info};
use crate::common::common::parse_query;
use crate::http::structs::http_service_data::HttpServiceData;
use crate::stats::enums::stats_event::StatsEvent;
use crate::tracker::impls::tracker_core::failure_response;

pub fn http_service_cors() -> Cors
{
    Cors::default()
        .send_wildcard()
        .allowed_methods(vec!["GET"])
        .allowed_headers(vec![http::header::X_FORWARDED_FOR, http::header::ACCEPT])
        .allowed_header(http::header::CONTENT_TYPE)
        .max_age(1)
}

pub fn http_service_routes(data: Arc<HttpServiceData>) -> Box<dyn Fn(&mut ServiceConfig)>
{
    Box::new(move |cfg: &mut ServiceConfig| {
        cfg.app_data(Data::new(data.clone()));
        cfg.service(web::resource("/announce").route(web::get().to(http_service_announce)));
        cfg.default_service(web::route().to(http_service_not_found));
    })
}

/// Binds the listener and returns the server future together with its handle.
pub async fn http_service(
    addr: SocketAddr,
    data: Arc<HttpServiceData>
) -> Result<(ServerHandle, impl Future<Output=Result<(), std::io::Error>>), std::io::Error>
{
    let config = data.http_trackers_config.clone();
    info!("[HTTP] Starting server listener on {}", addr);
    let server = HttpServer::new(move || {
        App::new()
            .wrap(http_service_cors())
            .configure(http_service_routes(data.clone()))
    })
        .keep_alive(Duration::from_secs(config.keep_alive))
        .client_request_timeout(Duration::from_secs(config.request_timeout))
        .client_disconnect_timeout(Duration::from_secs(config.disconnect_timeout))
        .max_connections(config.max_connections as usize)
        .workers(config.threads as usize)
        .bind((addr.ip(), addr.port()))?
        .disable_signals()
        .run();

    Ok((server.handle(), server))
}

pub async fn http_service_announce(request: HttpRequest, data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    let ip = match http_validate_ip(&request, &data) {
        Ok(ip) => ip,
        Err(result) => {
            return result;
        }
    };

    let query_map = parse_query(Some(request.query_string().to_string()));

    let body = data.tracker_core.announce(&query_map, ip, data.announce_interval).await;
    HttpResponse::Ok().content_type(ContentType::plaintext()).body(body)
}

pub async fn http_service_not_found(request: HttpRequest, data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    data.tracker_core.stats.update_stats(StatsEvent::HttpNotFound, 1);
    debug!("[HTTP] Request for unknown path {}", request.path());
    HttpResponse::Ok().content_type(ContentType::plaintext()).body(failure_response("unknown request"))
}

/// The configured real ip header wins over the socket address when it holds a
/// parsable address.
pub fn http_service_retrieve_remote_ip(request: &HttpRequest, data: &HttpServiceData) -> Result<IpAddr, ()>
{
    let header_ip = match data.http_trackers_config.real_ip.as_str() {
        "" => None,
        header_name => request.headers().get(header_name)
            .and_then(|header| header.to_str().ok())
            .and_then(|header| IpAddr::from_str(header.trim()).ok())
    };
    match header_ip {
        Some(ip) => Ok(ip),
        None => request.peer_addr().map(|addr| addr.ip()).ok_or(())
    }
}

pub fn http_validate_ip(request: &HttpRequest, data: &HttpServiceData) -> Result<IpAddr, HttpResponse>
{
    http_service_retrieve_remote_ip(request, data).map_err(|_| {
        data.tracker_core.stats.update_stats(StatsEvent::HttpFailure, 1);
        HttpResponse::Ok().content_type(ContentType::plaintext()).body(failure_response("unknown origin ip"))
    })
}
