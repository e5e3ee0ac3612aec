//! Static host for the meme generator.
//!
//! Serves the Trunk bundle embedded at compile time and opens it in the
//! default browser. The widget itself talks to the public catalog directly;
//! nothing here knows about memes.

mod config;

use crate::config::ServerConfig;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use env_logger::Env;
use include_dir::{include_dir, Dir, File};
use log::{debug, info, warn};
use mime_guess::from_path;
use std::thread;
use std::time::Duration;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

/// Maps a request path onto a bundle-relative file path; `/` is `index.html`.
fn asset_path(request_path: &str) -> &str {
    let path = request_path.trim_start_matches('/');
    if path.is_empty() {
        "index.html"
    } else {
        path
    }
}

/// Looks `request_path` up in `dir`, falling back to `index.html` so deep
/// links still load the widget.
fn resolve_asset<'a>(dir: &'a Dir<'a>, request_path: &str) -> Option<(&'a File<'a>, String)> {
    let file_path = asset_path(request_path);
    dir.get_file(file_path)
        .map(|file| (file, file_path.to_string()))
        .or_else(|| {
            dir.get_file("index.html")
                .map(|index| (index, "index.html".to_string()))
        })
}

async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    match resolve_asset(&STATIC_DIR, req.path()) {
        Some((file, served_path)) => {
            debug!("{} -> {}", req.path(), served_path);
            let mime = from_path(&served_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => {
            warn!("no embedded bundle; run `trunk build` in frontend/ first");
            HttpResponse::NotFound().body("Not Found")
        }
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = ServerConfig::default();
    let url = config.url();

    if config.open_browser {
        let url_clone = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            if let Err(e) = webbrowser::open(&url_clone) {
                warn!("could not open a browser: {}", e);
            }
        });
    }

    info!("Meme generator running at {}", url);

    HttpServer::new(|| App::new().default_service(web::route().to(serve_embedded)))
        .bind((config.host, config.port))?
        .run()
        .await
}
