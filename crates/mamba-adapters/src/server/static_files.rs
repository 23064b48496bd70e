//! Static file server over `tiny_http`.
//!
//! Serves a directory read-only: `GET`/`HEAD` only, `index.html` for
//! directories, no listings, nothing outside the root.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use mamba_core::{
    application::{ApplicationError, ports::StaticServer},
    error::MambaResult,
};
use percent_encoding::percent_decode_str;
use thiserror::Error;
use tiny_http::{Header, Method, Request, Response, Server};
use tracing::{debug, info, warn};

const INDEX_FILE: &str = "index.html";

/// Why a request path could not be mapped to a file.
#[derive(Debug, Error, PartialEq, Eq)]
enum Rejection {
    #[error("path escapes the served directory")]
    Forbidden,
    #[error("not found")]
    NotFound,
}

/// Outcome of mapping a URL onto the served root.
#[derive(Debug, PartialEq, Eq)]
enum Resolved {
    File(PathBuf),
    /// Directory requested without a trailing slash.
    Redirect(String),
}

/// Blocking static file server bound at construction time.
pub struct TinyHttpServer {
    server: Server,
    root: PathBuf,
}

impl TinyHttpServer {
    /// Bind `addr` and serve files below `root`.
    pub fn bind(addr: SocketAddr, root: impl Into<PathBuf>) -> MambaResult<Self> {
        let server = Server::http(addr).map_err(|e| ApplicationError::ServerBind {
            addr: addr.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            server,
            root: root.into(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn handle(&self, request: Request) {
        let method = request.method().clone();
        let url = request.url().to_owned();

        let response = if !matches!(method, Method::Get | Method::Head) {
            with_header(text(405, "Method Not Allowed"), "Allow", "GET, HEAD")
        } else {
            match resolve(&self.root, &url) {
                Ok(Resolved::File(path)) => match std::fs::read(&path) {
                    Ok(bytes) => with_header(
                        Response::from_data(bytes),
                        "Content-Type",
                        content_type(&path),
                    ),
                    Err(e) => {
                        warn!(path = %path.display(), error = %e, "read failed");
                        text(404, "Not Found")
                    }
                },
                Ok(Resolved::Redirect(location)) => {
                    with_header(text(301, "Moved Permanently"), "Location", &location)
                }
                Err(Rejection::Forbidden) => text(403, "Forbidden"),
                Err(Rejection::NotFound) => text(404, "Not Found"),
            }
        };

        let status = response.status_code().0;
        info!(%method, %url, status, "request");
        if let Err(e) = request.respond(response) {
            debug!(error = %e, "client went away");
        }
    }
}

impl StaticServer for TinyHttpServer {
    fn local_addr(&self) -> Option<SocketAddr> {
        self.server.server_addr().to_ip()
    }

    /// Blocks until [`StaticServer::shutdown`] unblocks the listener.
    fn serve(&self) -> MambaResult<()> {
        for request in self.server.incoming_requests() {
            self.handle(request);
        }
        debug!("listener unblocked");
        Ok(())
    }

    fn shutdown(&self) {
        self.server.unblock();
    }
}

type Body = Response<std::io::Cursor<Vec<u8>>>;

fn text(status: u16, body: &str) -> Body {
    with_header(
        Response::from_string(body).with_status_code(status),
        "Content-Type",
        "text/plain; charset=utf-8",
    )
}

fn with_header(response: Body, name: &str, value: &str) -> Body {
    match Header::from_bytes(name, value) {
        Ok(header) => response.with_header(header),
        Err(()) => {
            warn!(name, value, "invalid header dropped");
            response
        }
    }
}

/// Map a request URL onto a file below `root`.
fn resolve(root: &Path, url: &str) -> Result<Resolved, Rejection> {
    let raw_path = url.split(['?', '#']).next().unwrap_or("/");
    let decoded = percent_decode_str(raw_path)
        .decode_utf8()
        .map_err(|_| Rejection::NotFound)?;

    let mut path = root.to_path_buf();
    for segment in decoded.split('/') {
        match segment {
            "" | "." => continue,
            ".." => return Err(Rejection::Forbidden),
            s if s.contains('\\') || s.contains('\0') => return Err(Rejection::Forbidden),
            s => path.push(s),
        }
    }

    if path.is_dir() {
        if !raw_path.ends_with('/') {
            return Ok(Resolved::Redirect(format!("{raw_path}/")));
        }
        path.push(INDEX_FILE);
    }

    if path.is_file() {
        Ok(Resolved::File(path))
    } else {
        Err(Rejection::NotFound)
    }
}

fn content_type(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("html" | "htm") => "text/html; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("js" | "mjs") => "text/javascript; charset=utf-8",
        Some("json") => "application/json",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("ico") => "image/x-icon",
        Some("txt") => "text/plain; charset=utf-8",
        Some("woff2") => "font/woff2",
        Some("woff") => "font/woff",
        Some("wasm") => "application/wasm",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpStream;
    use std::sync::Arc;
    use tempfile::TempDir;

    fn site() -> TempDir {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("index.html"), "<h1>home</h1>").unwrap();
        std::fs::write(tmp.path().join("tailwind.css"), "body{}").unwrap();
        std::fs::create_dir(tmp.path().join("docs")).unwrap();
        std::fs::write(tmp.path().join("docs/index.html"), "docs").unwrap();
        std::fs::create_dir(tmp.path().join("empty")).unwrap();
        tmp
    }

    #[test]
    fn root_maps_to_index() {
        let tmp = site();
        assert_eq!(
            resolve(tmp.path(), "/"),
            Ok(Resolved::File(tmp.path().join("index.html")))
        );
        assert_eq!(
            resolve(tmp.path(), "/docs/?x=1"),
            Ok(Resolved::File(tmp.path().join("docs/index.html")))
        );
    }

    #[test]
    fn directory_without_slash_redirects() {
        let tmp = site();
        assert_eq!(
            resolve(tmp.path(), "/docs"),
            Ok(Resolved::Redirect("/docs/".into()))
        );
    }

    #[test]
    fn traversal_is_forbidden() {
        let tmp = site();
        assert_eq!(resolve(tmp.path(), "/../secret"), Err(Rejection::Forbidden));
        assert_eq!(resolve(tmp.path(), "/%2e%2e/secret"), Err(Rejection::Forbidden));
    }

    #[test]
    fn missing_and_unindexed_are_not_found() {
        let tmp = site();
        assert_eq!(resolve(tmp.path(), "/nope.html"), Err(Rejection::NotFound));
        assert_eq!(resolve(tmp.path(), "/empty/"), Err(Rejection::NotFound));
        assert_eq!(resolve(tmp.path(), "/bad%zz"), Err(Rejection::NotFound));
        assert_eq!(resolve(tmp.path(), "/%ff.html"), Err(Rejection::NotFound));
    }

    #[test]
    fn escaped_names_are_decoded() {
        let tmp = site();
        std::fs::write(tmp.path().join("my page.html"), "spaced").unwrap();
        assert_eq!(
            resolve(tmp.path(), "/my%20page.html"),
            Ok(Resolved::File(tmp.path().join("my page.html")))
        );
    }

    #[test]
    fn content_types_by_extension() {
        assert_eq!(content_type(Path::new("a.HTML")), "text/html; charset=utf-8");
        assert_eq!(content_type(Path::new("tailwind.css")), "text/css; charset=utf-8");
        assert_eq!(content_type(Path::new("blob")), "application/octet-stream");
    }

    fn raw_request(addr: SocketAddr, request: &str) -> String {
        let mut stream = TcpStream::connect(addr).unwrap();
        stream.write_all(request.as_bytes()).unwrap();
        let mut response = String::new();
        stream.read_to_string(&mut response).unwrap();
        response
    }

    #[test]
    fn serves_until_shutdown() {
        let tmp = site();
        let server = Arc::new(
            TinyHttpServer::bind("127.0.0.1:0".parse().unwrap(), tmp.path()).unwrap(),
        );
        let addr = server.local_addr().unwrap();

        let worker = {
            let server = Arc::clone(&server);
            std::thread::spawn(move || server.serve())
        };

        let ok = raw_request(addr, "GET / HTTP/1.0\r\n\r\n");
        assert!(ok.starts_with("HTTP/1.0 200") || ok.starts_with("HTTP/1.1 200"));
        assert!(ok.contains("text/html"));
        assert!(ok.ends_with("<h1>home</h1>"));

        let missing = raw_request(addr, "GET /missing.css HTTP/1.0\r\n\r\n");
        assert!(missing.contains(" 404 "));

        let post = raw_request(addr, "POST / HTTP/1.0\r\nContent-Length: 0\r\n\r\n");
        assert!(post.contains(" 405 "));

        server.shutdown();
        worker.join().unwrap().unwrap();
    }

    #[test]
    fn occupied_port_is_a_bind_error() {
        let tmp = site();
        let first = TinyHttpServer::bind("127.0.0.1:0".parse().unwrap(), tmp.path()).unwrap();
        let taken = first.local_addr().unwrap();

        let err = TinyHttpServer::bind(taken, tmp.path()).err().unwrap();
        assert!(err.to_string().contains(&taken.to_string()));
    }
}
