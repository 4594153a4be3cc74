//! Template rendering with Tera
//!
//! Every call parses its template body from scratch; there is no shared
//! registry. Undefined variables and parse errors surface as
//! [`Error::Render`](crate::Error::Render).

use std::io::Write;

use serde::Serialize;
use tera::{Context, Tera};

use crate::error::{Error, Result};

/// Build a Tera context from any serializable value
pub fn context_from<T: Serialize>(template_name: &str, value: &T) -> Result<Context> {
    Context::from_serialize(value).map_err(|e| Error::render(template_name, e))
}

/// Parse `body` and render it with `context` into `writer`
pub fn render<W: Write>(
    template_name: &str,
    body: &str,
    context: &Context,
    writer: W,
) -> Result<()> {
    let tera = compile(template_name, body)?;
    tera.render_to(template_name, context, writer)
        .map_err(|e| Error::render(template_name, e))
}

/// Parse `body` and render it with `context` into a string
pub fn render_to_string(template_name: &str, body: &str, context: &Context) -> Result<String> {
    let tera = compile(template_name, body)?;
    tera.render(template_name, context)
        .map_err(|e| Error::render(template_name, e))
}

fn compile(template_name: &str, body: &str) -> Result<Tera> {
    let mut tera = Tera::default();
    // Generated sources are not HTML
    tera.autoescape_on(vec![]);
    tera.add_raw_template(template_name, body)
        .map_err(|e| Error::render(template_name, e))?;
    Ok(tera)
}
