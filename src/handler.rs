//! Serving labels in response to requests.
//!
//! [Handler] is deliberately independent of any web framework or function runtime: an
//! adapter turns its platform's request into a [Request], calls [Handler::handle], and
//! writes the returned [Response] back out.

use crate::font::Font;
use crate::metrics::GlyphMetrics;
use crate::svg::Composer;
use crate::template::{FieldValues, Template};

/// HTTP methods a request may arrive with
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    Get,
    Head,
    Post,
    Put,
    Delete,
    Other(String),
}

impl From<&str> for Method {
    fn from(method: &str) -> Self {
        match method.to_ascii_uppercase().as_str() {
            "GET" => Method::Get,
            "HEAD" => Method::Head,
            "POST" => Method::Post,
            "PUT" => Method::Put,
            "DELETE" => Method::Delete,
            _ => Method::Other(method.to_string()),
        }
    }
}

/// A request for one rendered label. `fields` usually comes from the query string.
#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,
    pub fields: FieldValues,
}

impl Request {
    pub fn get(fields: FieldValues) -> Request {
        Request {
            method: Method::Get,
            fields,
        }
    }
}

/// What to send back: a status code, the body and its content type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub content_type: &'static str,
    pub body: String,
}

impl Response {
    fn svg(body: String) -> Response {
        Response {
            status: 200,
            content_type: "image/svg+xml",
            body,
        }
    }

    fn error(status: u16, body: String) -> Response {
        Response {
            status,
            content_type: "text/plain; charset=utf-8",
            body,
        }
    }
}

/// Renders labels for incoming requests. A handler owns its font and template, so one
/// instance can be built at startup and shared by every request.
pub struct Handler<M: GlyphMetrics = Font> {
    font: M,
    template: Template,
    composer: Composer,
}

impl Handler<Font> {
    /// Serve `template`, measured with `font`, using a composer that names `font`'s family
    pub fn new(font: Font, template: Template) -> Handler<Font> {
        let composer = Composer::for_font(&font);
        Handler::with_composer(font, template, composer)
    }
}

impl<M: GlyphMetrics> Handler<M> {
    /// Serve `template`, measured with `font`, writing documents with `composer`
    pub fn with_composer(font: M, template: Template, composer: Composer) -> Handler<M> {
        Handler {
            font,
            template,
            composer,
        }
    }

    /// `GET` renders the label; every other method is refused with `405`. A render that
    /// fails answers `500` with the reason.
    pub fn handle(&self, request: &Request) -> Response {
        log::info!("handling {:?} request", request.method);
        if request.method != Method::Get {
            log::error!("method not allowed: {:?}", request.method);
            return Response::error(405, "Method not allowed".to_string());
        }

        match self
            .composer
            .compose(&self.template, &request.fields, &self.font)
        {
            Ok(svg) => {
                log::debug!("created svg: {svg}");
                Response::svg(svg)
            }
            Err(err) => {
                log::error!("failed to render label: {err}");
                Response::error(500, err.to_string())
            }
        }
    }
}
