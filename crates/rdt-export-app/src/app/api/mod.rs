mod export;
mod healthcheck;

use salvo::Router;

/// ## Summary
/// Constructs the router serving the health check at `/` and the export at
/// `/export`.
#[must_use]
pub fn routes() -> Router {
    Router::new()
        .push(healthcheck::routes())
        .push(export::routes())
}

#[cfg(test)]
mod test_support;
