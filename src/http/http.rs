use std::borrow::Cow;
use std::collections::HashMap;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use actix_cors::Cors;
use actix_web::{App, http, HttpRequest, HttpResponse, HttpServer, web};
use actix_web::dev::{Server, ServerHandle};
use actix_web::http::header::ContentType;
use actix_web::web::{Data, ServiceConfig};
use bip_bencode::{ben_bytes, ben_int, ben_map, BMutAccess, BencodeMut};
use log::{debug, error, info};
use serde_json::json;
use crate::common::common::{current_time, parse_query};
use crate::common::structs::custom_error::CustomError;
use crate::config::structs::http_trackers_config::HttpTrackersConfig;
use crate::http::structs::http_service_data::HttpServiceData;
use crate::stats::enums::stats_event::StatsEvent;
use crate::tracker::enums::announce_event::AnnounceEvent;
use crate::tracker::enums::announce_outcome::AnnounceOutcome;
use crate::tracker::enums::announce_peers::AnnouncePeers;
use crate::tracker::enums::baseline_hint::BaselineHint;
use crate::tracker::enums::tracker_error::TrackerError;
use crate::tracker::structs::announce_query_request::AnnounceQueryRequest;
use crate::tracker::structs::announce_result::AnnounceResult;
use crate::tracker::structs::tracker_context::TrackerContext;

pub type HttpQueryMap = HashMap<String, Vec<Vec<u8>>>;

/// Key of the optional trusted-seed hint in announce replies.
pub const BASELINE_PROVIDER_KEY: &[u8] = b"baseline provider";

pub fn http_service_cors() -> Cors
{
    Cors::default()
        .allow_any_origin()
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
        cfg.service(web::resource("/scrape").route(web::get().to(http_service_scrape)));
        cfg.service(web::resource("/stats").route(web::get().to(http_service_stats)));
        cfg.default_service(web::route().to(http_service_not_found));
    })
}

/// Binds one configured listener; the returned server must be awaited to run.
pub async fn http_service(
    addr: SocketAddr,
    ctx: Arc<TrackerContext>,
    config: Arc<HttpTrackersConfig>
) -> Result<(ServerHandle, Server), std::io::Error>
{
    let keep_alive = config.keep_alive;
    let client_request_timeout = config.request_timeout;
    let client_disconnect_timeout = config.disconnect_timeout;
    let threads = config.threads.max(1);
    let data = Arc::new(HttpServiceData {
        ctx,
        http_trackers_config: config,
    });

    info!("[HTTP] Starting server listener on {addr}");
    let server = HttpServer::new(move || {
        App::new()
            .wrap(http_service_cors())
            .configure(http_service_routes(data.clone()))
    })
        .keep_alive(Duration::from_secs(keep_alive))
        .client_request_timeout(Duration::from_secs(client_request_timeout))
        .client_disconnect_timeout(Duration::from_secs(client_disconnect_timeout))
        .workers(threads as usize)
        .bind((addr.ip(), addr.port()))?
        .disable_signals()
        .run();

    Ok((server.handle(), server))
}

pub async fn http_service_announce(request: HttpRequest, data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    let ip = match http_validate_ip(&request, &data) {
        Ok(ip) => ip,
        Err(result) => return result,
    };

    let query_map = match http_service_query_hashing(parse_query(Some(request.query_string().to_string()))) {
        Ok(result) => result,
        Err(err) => {
            data.ctx.stats.update_stats(StatsEvent::ClientErrors, 1);
            return err;
        }
    };

    http_service_announce_handler(&query_map, ip, &data.ctx, current_time())
}

#[tracing::instrument(level = "debug", skip(query_map, ctx))]
pub fn http_service_announce_handler(query_map: &HttpQueryMap, ip: IpAddr, ctx: &TrackerContext, now: i64) -> HttpResponse
{
    let request = AnnounceQueryRequest {
        info_hash: query_value(query_map, "info_hash").unwrap_or_default(),
        peer_id: query_value(query_map, "peer_id").unwrap_or_default(),
        port: query_number::<i64>(query_map, "port").and_then(Result::ok).unwrap_or(0),
        event: AnnounceEvent::from_query(query_value(query_map, "event").unwrap_or_default()),
        numwant: query_number::<i64>(query_map, "numwant").map(|value| value.unwrap_or(-1)),
        uploaded: query_number::<u64>(query_map, "uploaded").and_then(Result::ok).unwrap_or(0),
        downloaded: query_number::<u64>(query_map, "downloaded").and_then(Result::ok).unwrap_or(0),
        left: query_number::<u64>(query_map, "left").and_then(Result::ok),
        compact: query_flag(query_map, "compact"),
        no_peer_id: query_flag(query_map, "no_peer_id"),
        remote_ip: ip,
    };

    match ctx.announce.announce(&request, now) {
        Ok(AnnounceOutcome::Stopped) => HttpResponse::Ok().content_type(ContentType::plaintext()).finish(),
        Ok(AnnounceOutcome::Announced(result)) => {
            let body = http_service_announce_body(&result);
            result.recycle(&ctx.pools);
            HttpResponse::Ok().content_type(ContentType::plaintext()).body(body)
        }
        Err(e) => http_service_tracker_error(&e),
    }
}

/// Bencodes an announce reply.
///
/// Verbose peers and a verbose baseline hint are already encoded
/// dictionaries, so they are spliced in around the rest of the reply:
/// `peers` sorts after every other key and `baseline provider` before.
pub fn http_service_announce_body(result: &AnnounceResult) -> Vec<u8>
{
    let mut reply = ben_map! {
        "interval" => ben_int!(result.interval),
        "complete" => ben_int!(result.complete as i64),
        "incomplete" => ben_int!(result.incomplete as i64)
    };

    match &result.peers {
        AnnouncePeers::Compact { ipv4, ipv6 } => {
            if let Some(dict) = reply.dict_mut() {
                dict.insert(Cow::from(&b"peers"[..]), ben_bytes!(&ipv4[..]));
                dict.insert(Cow::from(&b"peers6"[..]), ben_bytes!(&ipv6[..]));
            }
            insert_baseline_hint(&mut reply, result);
            reply.encode()
        }
        AnnouncePeers::Verbose(entries) => {
            let mut body = reply.encode();
            // `baseline provider` sorts before every other key
            if let Some(BaselineHint::Verbose(hint)) = &result.baseline_hint {
                let mut prefix = format!("d{}:", BASELINE_PROVIDER_KEY.len()).into_bytes();
                prefix.extend_from_slice(BASELINE_PROVIDER_KEY);
                prefix.extend_from_slice(hint);
                prefix.extend_from_slice(&body[1..]);
                body = prefix;
            }
            body.pop();
            body.extend_from_slice(b"5:peersl");
            for entry in entries {
                body.extend_from_slice(entry);
            }
            body.extend_from_slice(b"ee");
            body
        }
    }
}

fn insert_baseline_hint<'a>(reply: &mut BencodeMut<'a>, result: &'a AnnounceResult)
{
    if let Some(BaselineHint::Compact(hint)) = &result.baseline_hint
        && let Some(dict) = reply.dict_mut()
    {
        dict.insert(Cow::from(BASELINE_PROVIDER_KEY), ben_bytes!(&hint[..]));
    }
}

pub async fn http_service_scrape(request: HttpRequest, data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    let ip = match http_validate_ip(&request, &data) {
        Ok(ip) => ip,
        Err(result) => return result,
    };

    debug!("[HTTP] Request from {ip}: Scrape");

    let query_map = match http_service_query_hashing(parse_query(Some(request.query_string().to_string()))) {
        Ok(result) => result,
        Err(err) => {
            data.ctx.stats.update_stats(StatsEvent::ClientErrors, 1);
            return err;
        }
    };

    http_service_scrape_handler(&query_map, &data.ctx)
}

#[tracing::instrument(level = "debug", skip(query_map, ctx))]
pub fn http_service_scrape_handler(query_map: &HttpQueryMap, ctx: &TrackerContext) -> HttpResponse
{
    let hashes = match query_map.get("info_hash") {
        Some(hashes) if !hashes.is_empty() => hashes,
        _ => {
            ctx.stats.update_stats(StatsEvent::ClientErrors, 1);
            return http_service_failure("no infohashes");
        }
    };

    let entries = match ctx.scrape.scrape(hashes.as_slice()) {
        Ok(entries) => entries,
        Err(e) => return http_service_tracker_error(&e),
    };

    let mut files = ben_map!();
    if let Some(files_mut) = files.dict_mut() {
        for (hash, entry) in hashes.iter().zip(entries.iter()) {
            files_mut.insert(Cow::from(&hash[..]), ben_map! {
                "complete" => ben_int!(entry.complete as i64),
                "downloaded" => ben_int!(entry.downloaded as i64),
                "incomplete" => ben_int!(entry.incomplete as i64)
            });
        }
    }
    HttpResponse::Ok().content_type(ContentType::plaintext()).body(ben_map! {
        "files" => files
    }.encode())
}

pub async fn http_service_stats(request: HttpRequest, data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    if let Err(result) = http_validate_ip(&request, &data) {
        return result;
    }
    let stats = data.ctx.stats.get_stats();
    HttpResponse::Ok().content_type(ContentType::json()).json(json!({
        "stats": stats,
        "torrents": data.ctx.store.hashes(),
        "peers": data.ctx.store.peers(),
    }))
}

pub async fn http_service_not_found(request: HttpRequest, data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    let ip = match http_validate_ip(&request, &data) {
        Ok(ip) => ip,
        Err(result) => return result,
    };

    debug!("[HTTP] Request from {ip}: 404 Not Found");

    HttpResponse::NotFound().content_type(ContentType::plaintext()).body(ben_map! {
        "failure reason" => ben_bytes!("unknown request")
    }.encode())
}

pub fn http_service_failure(message: &str) -> HttpResponse
{
    HttpResponse::Ok().content_type(ContentType::plaintext()).body(ben_map! {
        "failure reason" => ben_bytes!(message)
    }.encode())
}

/// Service errors were already counted; server faults are logged here.
pub fn http_service_tracker_error(error: &TrackerError) -> HttpResponse
{
    if !error.is_client_error() {
        error!("[HTTP] Internal error: {error}");
    }
    http_service_failure(&error.public_message())
}

pub fn http_service_retrieve_remote_ip(request: &HttpRequest, real_ip: &str) -> Result<IpAddr, ()>
{
    let origin_ip = match request.peer_addr() {
        None => return Err(()),
        Some(addr) => addr.ip(),
    };
    if real_ip.is_empty() {
        return Ok(origin_ip);
    }
    match request.headers().get(real_ip) {
        Some(header) => header.to_str().ok()
            .and_then(|value| IpAddr::from_str(value.trim()).ok())
            .ok_or(()),
        None => Ok(origin_ip),
    }
}

pub fn http_validate_ip(request: &HttpRequest, data: &HttpServiceData) -> Result<IpAddr, HttpResponse>
{
    http_service_retrieve_remote_ip(request, &data.http_trackers_config.real_ip).map_err(|_| {
        data.ctx.stats.update_stats(StatsEvent::ClientErrors, 1);
        http_service_failure("unknown origin ip")
    })
}

pub fn http_service_query_hashing(query_map_result: Result<HttpQueryMap, CustomError>) -> Result<HttpQueryMap, HttpResponse>
{
    query_map_result.map_err(|e| http_service_failure(&e.to_string()))
}

/// First value of `key`; a key given without `=` reads as empty.
pub fn query_value<'a>(query_map: &'a HttpQueryMap, key: &str) -> Option<&'a [u8]>
{
    query_map.get(key).map(|values| values.first().map(Vec::as_slice).unwrap_or_default())
}

/// `None` when absent or empty, otherwise the parse outcome.
pub fn query_number<T: FromStr>(query_map: &HttpQueryMap, key: &str) -> Option<Result<T, ()>>
{
    let value = query_value(query_map, key).filter(|value| !value.is_empty())?;
    Some(std::str::from_utf8(value).ok().and_then(|text| text.parse::<T>().ok()).ok_or(()))
}

/// Set when the key carries `1`, or is given without a value.
pub fn query_flag(query_map: &HttpQueryMap, key: &str) -> bool
{
    match query_map.get(key) {
        Some(values) => values.first().is_none_or(|value| value == b"1"),
        None => false,
    }
}
