use crate::config::Config;
use crate::http::request::{Method, Request};
use crate::http::response::{Response, ResponseBuilder, StatusCode};
use crate::routes::files;

/// Maps a parsed request to a response.
///
/// Dispatch is a deterministic match on the first path segment. Routes
/// that need a second segment (`/echo/<text>`, `/files/<name>`) answer
/// 400 when it is missing rather than taking down the connection.
pub async fn dispatch(cfg: &Config, req: &Request) -> Response {
    match req.route() {
        "" => ResponseBuilder::new(StatusCode::Ok).build(),

        "echo" => match req.segment(1) {
            Some(text) => Response::ok(text.as_bytes().to_vec()),
            None => Response::bad_request(),
        },

        "user-agent" => Response::ok(req.header("User-Agent").unwrap_or("").as_bytes().to_vec()),

        "files" => match (req.method, req.segment(1)) {
            (_, None) => Response::bad_request(),
            (Method::GET, Some(name)) => files::serve(&cfg.files_dir, name).await,
            (Method::POST, Some(name)) => files::create(&cfg.files_dir, name, &req.body).await,
            _ => Response::not_found(),
        },

        _ => Response::not_found(),
    }
}
