//! Score service: `GET`/`PUT /users/:id/score`, port 9002 by default.

use attrsvc_config::ServiceKind;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    attrsvc_server::run(ServiceKind::Score).await
}
