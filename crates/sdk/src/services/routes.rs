//! Routes service
//!
//! Lists and creates routes under `/rutas`. Bodies go out and come back
//! exactly as given; errors are the transport's own.

use crate::client::Client;
use crate::models::Route;
use crate::transport::HttpTransport;
use serde::{de::DeserializeOwned, Serialize};

/// Resource path for routes
pub const ROUTES_PATH: &str = "/rutas";

/// Service for route operations
#[derive(Clone)]
pub struct RoutesService<T = Client> {
    transport: T,
}

impl<T: HttpTransport> RoutesService<T> {
    /// Create a routes service over any transport
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Get the underlying transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// List all routes
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use rutas_sdk::Client;
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = Client::builder().base_url("http://localhost:8080").build()?;
    ///
    /// for route in client.routes().get_all().await? {
    ///     println!("{:?}", route.get("nombre"));
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_all(&self) -> Result<Vec<Route>, T::Error> {
        self.get_all_as().await
    }

    /// List all routes, decoding each record as `R`
    ///
    /// ```rust,no_run
    /// use rutas_sdk::{Client, Ruta};
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = Client::from_env()?;
    /// let rutas: Vec<Ruta> = client.routes().get_all_as().await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_all_as<R>(&self) -> Result<Vec<R>, T::Error>
    where
        R: DeserializeOwned + Send,
    {
        let response = self.transport.get(ROUTES_PATH).await?;
        Ok(response.data)
    }

    /// Create a route
    ///
    /// The body is sent as-is and the server's reply is returned as-is.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use rutas_sdk::{Client, RutaRequest};
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = Client::builder().bearer_token("jwt").build()?;
    ///
    /// let request = RutaRequest::new("Costanera")
    ///     .with_punto(-33.41, -70.60)
    ///     .with_punto(-33.42, -70.61);
    ///
    /// let created = client.routes().create(&request).await?;
    /// println!("Created: {}", created);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create<B>(&self, route_data: &B) -> Result<serde_json::Value, T::Error>
    where
        B: Serialize + Sync,
    {
        self.create_as(route_data).await
    }

    /// Create a route, decoding the reply as `R`
    pub async fn create_as<B, R>(&self, route_data: &B) -> Result<R, T::Error>
    where
        B: Serialize + Sync,
        R: DeserializeOwned + Send,
    {
        let response = self.transport.post(ROUTES_PATH, route_data).await?;
        Ok(response.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Ruta, RutaRequest};
    use crate::transport::ApiResponse;
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use serde_json::{json, Value};
    use std::sync::Arc;

    #[derive(Debug, Clone, PartialEq, thiserror::Error)]
    enum MockError {
        #[error("connection refused")]
        Refused,
        #[error("decode: {0}")]
        Decode(String),
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Call {
        method: &'static str,
        path: String,
        body: Option<Value>,
    }

    /// Replies with one canned body and records every request
    struct MockTransport {
        reply: Result<Value, MockError>,
        calls: Mutex<Vec<Call>>,
    }

    impl MockTransport {
        fn ok(data: Value) -> Self {
            Self {
                reply: Ok(data),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn failing(err: MockError) -> Self {
            Self {
                reply: Err(err),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.lock().clone()
        }

        fn respond<T: DeserializeOwned>(&self) -> Result<ApiResponse<T>, MockError> {
            let data = self.reply.clone()?;
            serde_json::from_value(data)
                .map(|data| ApiResponse::new(200, data))
                .map_err(|e| MockError::Decode(e.to_string()))
        }
    }

    #[async_trait]
    impl HttpTransport for MockTransport {
        type Error = MockError;

        async fn get<T>(&self, path: &str) -> Result<ApiResponse<T>, MockError>
        where
            T: DeserializeOwned + Send,
        {
            self.calls.lock().push(Call {
                method: "GET",
                path: path.to_string(),
                body: None,
            });
            self.respond()
        }

        async fn post<B, T>(&self, path: &str, body: &B) -> Result<ApiResponse<T>, MockError>
        where
            B: Serialize + Sync,
            T: DeserializeOwned + Send,
        {
            let body = serde_json::to_value(body).map_err(|e| MockError::Decode(e.to_string()))?;
            self.calls.lock().push(Call {
                method: "POST",
                path: path.to_string(),
                body: Some(body),
            });
            self.respond()
        }
    }

    fn route(value: Value) -> Route {
        match value {
            Value::Object(map) => map,
            other => panic!("not an object: {}", other),
        }
    }

    #[tokio::test]
    async fn test_get_all_returns_data_unmodified() {
        let mock = MockTransport::ok(json!([{ "id": 1, "name": "A" }]));
        let service = RoutesService::new(&mock);

        let routes = service.get_all().await.unwrap();

        assert_eq!(routes, vec![route(json!({ "id": 1, "name": "A" }))]);
        assert_eq!(
            mock.calls(),
            vec![Call {
                method: "GET",
                path: "/rutas".to_string(),
                body: None,
            }]
        );
    }

    #[tokio::test]
    async fn test_get_all_empty_list() {
        let mock = MockTransport::ok(json!([]));
        let routes = RoutesService::new(&mock).get_all().await.unwrap();
        assert!(routes.is_empty());
        assert_eq!(mock.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_create_posts_body_and_returns_data() {
        let mock = MockTransport::ok(json!({ "id": 2, "name": "B" }));
        let service = RoutesService::new(&mock);

        let created = service.create(&json!({ "name": "B" })).await.unwrap();

        assert_eq!(created, json!({ "id": 2, "name": "B" }));
        assert_eq!(
            mock.calls(),
            vec![Call {
                method: "POST",
                path: "/rutas".to_string(),
                body: Some(json!({ "name": "B" })),
            }]
        );
    }

    #[tokio::test]
    async fn test_create_passes_opaque_fields_through() {
        let record = route(json!({
            "name": "C",
            "extra": { "nested": [1, 2, 3] },
            "flag": null
        }));
        let mock = MockTransport::ok(json!(5));

        let created = RoutesService::new(&mock).create(&record).await.unwrap();

        assert_eq!(created, json!(5));
        assert_eq!(mock.calls()[0].body, Some(Value::Object(record)));
    }

    #[tokio::test]
    async fn test_errors_propagate_unchanged() {
        let mock = MockTransport::failing(MockError::Refused);
        let service = RoutesService::new(&mock);

        assert_eq!(service.get_all().await.unwrap_err(), MockError::Refused);
        assert_eq!(
            service.create(&json!({ "name": "B" })).await.unwrap_err(),
            MockError::Refused
        );
        assert_eq!(mock.calls().len(), 2);
    }

    #[tokio::test]
    async fn test_typed_views() {
        let mock = MockTransport::ok(json!([{
            "id": 1,
            "nombre": "Costanera",
            "longitudKm": 4.5
        }]));
        let rutas: Vec<Ruta> = RoutesService::new(&mock).get_all_as().await.unwrap();
        assert_eq!(rutas[0].nombre.as_deref(), Some("Costanera"));
        assert_eq!(rutas[0].longitud_km, Some(4.5));

        let mock = MockTransport::ok(json!(42));
        let request = RutaRequest::new("Cerro")
            .with_punto(-33.4, -70.6)
            .with_punto(-33.5, -70.7);
        let id: i64 = RoutesService::new(&mock).create_as(&request).await.unwrap();
        assert_eq!(id, 42);
        assert_eq!(
            mock.calls()[0].body,
            Some(json!({
                "nombre": "Cerro",
                "coordenadas": [[-33.4, -70.6], [-33.5, -70.7]]
            }))
        );
    }

    #[tokio::test]
    async fn test_concurrent_calls_are_independent() {
        let mock = Arc::new(MockTransport::ok(json!([])));
        let service = RoutesService::new(Arc::clone(&mock));
        let other = service.clone();

        let (a, b) = tokio::join!(service.get_all(), other.get_all());

        assert!(a.unwrap().is_empty());
        assert!(b.unwrap().is_empty());
        assert_eq!(mock.calls().len(), 2);
    }
}
