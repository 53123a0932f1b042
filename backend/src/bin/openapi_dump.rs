//! Print the OpenAPI document as JSON.

use std::io::{self, Write};

use backend::ApiDoc;
use utoipa::OpenApi;

fn main() -> io::Result<()> {
    let json = ApiDoc::openapi()
        .to_pretty_json()
        .map_err(|err| io::Error::other(format!("failed to encode OpenAPI document: {err}")))?;
    writeln!(io::stdout().lock(), "{json}")
}
