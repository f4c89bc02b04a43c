use axum::{
    Router,
    http::{HeaderValue, Method, request},
    routing::{get, post},
};
use reclaim_adapters::{
    config::AllowedOrigins,
    http::routes::{create_item, get_user, list_items, list_owner_items, login, register},
};
use reclaim_core::{ItemStore, PasswordHasher, UserStore};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::tracing::{make_span_with_request_id, on_request, on_response};

/// HTTP service exposing registration, login and lost-and-found item routes.
pub struct ReclaimService {
    router: Router,
}

impl ReclaimService {
    /// Assemble the router from the provided store and hasher implementations.
    ///
    /// # Note on Architecture
    /// Stores implement Clone via internal sharing (Arc or a connection pool),
    /// so each route is given exactly the state it needs and nothing more.
    pub fn new<U, H, I>(user_store: U, password_hasher: H, item_store: I) -> Self
    where
        U: UserStore + Clone + 'static,
        H: PasswordHasher + Clone + 'static,
        I: ItemStore + Clone + 'static,
    {
        let router = Router::new()
            // Register and login need the user store and the hasher
            .route("/api/auth/register", post(register::<U, H>))
            .with_state((user_store.clone(), password_hasher.clone()))
            .route("/api/auth/login", post(login::<U, H>))
            .with_state((user_store.clone(), password_hasher))
            // Profile lookup only needs the user store
            .route("/api/auth/user/{username}", get(get_user::<U>))
            .with_state(user_store.clone())
            // Creating an item resolves its owner, so both stores are required;
            // the shared method router means listing carries the same state
            .route(
                "/api/items",
                post(create_item::<U, I>).get(list_items::<U, I>),
            )
            .with_state((user_store, item_store.clone()))
            // Listing by owner only needs the item store
            .route("/api/items/user/{user_id}", get(list_owner_items::<I>))
            .with_state(item_store);

        Self { router }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Convert the service into a router that can be mounted on another router.
    ///
    /// # Arguments
    /// * `allowed_origins` - Optional list of allowed CORS origins
    pub fn as_nested_router(mut self, allowed_origins: Option<AllowedOrigins>) -> Router {
        if let Some(allowed_origins) = allowed_origins {
            let cors = CorsLayer::new()
                .allow_methods([Method::GET, Method::POST])
                .allow_credentials(true)
                .allow_origin(AllowOrigin::predicate(
                    move |origin: &HeaderValue, _request_parts: &request::Parts| {
                        allowed_origins.contains(origin)
                    },
                ));

            self.router = self.router.layer(cors);
        }
        self.with_trace_layer().router
    }

    /// Run the service as a standalone server on the given listener.
    pub async fn run_standalone(
        self,
        listener: TcpListener,
        allowed_origins: Option<AllowedOrigins>,
    ) -> Result<(), std::io::Error> {
        let router = self.as_nested_router(allowed_origins);

        tracing::info!("Reclaim service listening on {}", listener.local_addr()?);

        axum::serve(listener, router).await
    }
}
