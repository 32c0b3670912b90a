//! SDK data models
//!
//! Route records are owned by the server. [`Route`] keeps them opaque; the
//! typed views below mirror what the routes backend currently sends and
//! accepts, for callers that want field access.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An opaque route record, passed through untouched
pub type Route = serde_json::Map<String, serde_json::Value>;

/// A stored route as returned by `GET /rutas`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ruta {
    /// Route identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
    /// Free-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
    /// Owner's user id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_usuario: Option<i64>,
    /// Owner's user name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nombre_usuario: Option<String>,
    /// Route geometry as a raw GeoJSON string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geo_json: Option<String>,
    /// Route length in kilometres, computed server-side
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitud_km: Option<f64>,
    /// Creation timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fecha_creacion: Option<DateTime<Utc>>,
}

impl Ruta {
    /// Parse the embedded GeoJSON geometry, if any
    pub fn geometry(&self) -> Option<serde_json::Result<serde_json::Value>> {
        self.geo_json.as_deref().map(serde_json::from_str)
    }
}

/// Body for `POST /rutas`
///
/// Points are `[lat, lon]` pairs. The server needs at least two of them;
/// nothing is checked here.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RutaRequest {
    /// Display name
    pub nombre: String,
    /// Free-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
    /// Owner's user id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_usuario: Option<i64>,
    /// Ordered points along the route
    #[serde(default)]
    pub coordenadas: Vec<[f64; 2]>,
}

impl RutaRequest {
    /// Create a request with the given name and no points
    pub fn new(nombre: impl Into<String>) -> Self {
        Self {
            nombre: nombre.into(),
            ..Default::default()
        }
    }

    /// Set the description
    pub fn with_descripcion(mut self, descripcion: impl Into<String>) -> Self {
        self.descripcion = Some(descripcion.into());
        self
    }

    /// Set the owning user
    pub fn with_usuario(mut self, id_usuario: i64) -> Self {
        self.id_usuario = Some(id_usuario);
        self
    }

    /// Append a point
    pub fn with_punto(mut self, lat: f64, lon: f64) -> Self {
        self.coordenadas.push([lat, lon]);
        self
    }
}
