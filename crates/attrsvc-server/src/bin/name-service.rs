//! Name service: `GET`/`PUT /users/:id/name`, port 9001 by default.

use attrsvc_config::ServiceKind;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    attrsvc_server::run(ServiceKind::Name).await
}
