use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// Enums that travel as bare strings and must tolerate values this build
/// does not know about.
pub trait WireValue: Sized {
    fn from_wire(s: &str) -> Option<Self>;
    fn as_wire(&self) -> &'static str;

    /// Numeric encoding, for columns the backend stores as integers.
    fn from_wire_number(_n: i64) -> Option<Self> {
        None
    }
}

/// Deserialize an optional wire enum from a string or a number. Unknown,
/// missing or otherwise-typed values map to `None`.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: WireValue,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(serde_json::Value::String(s)) => T::from_wire(&s),
        Some(serde_json::Value::Number(n)) => n.as_i64().and_then(T::from_wire_number),
        _ => None,
    })
}

/// Deserialize a value the backend may send as `null` (nullable column).
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Deserialize a flag stored as an integer column (`0` / `1`), a bool or `null`.
fn int_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(serde_json::Value::Bool(b)) => b,
        Some(serde_json::Value::Number(n)) => n.as_f64().is_some_and(|v| v != 0.0),
        _ => false,
    })
}

/// Deserialize a list that the backend sometimes sends as `null`.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

fn default_true() -> bool {
    true
}

/// Coerce a JSON payload into a list.
///
/// Anything that is not a JSON array (`null`, `{}`, a string) becomes an empty
/// list. Elements of an actual array must still match `T`.
pub fn coerce_list<T: DeserializeOwned>(value: serde_json::Value) -> Result<Vec<T>, serde_json::Error> {
    match value {
        serde_json::Value::Array(_) => serde_json::from_value(value),
        _ => Ok(Vec::new()),
    }
}

/// Dashboard user role.
///
/// - `Admin`: every section, including user administration.
/// - `Analyst`: dashboard plus the analysis sections.
/// - `Operator`: dashboard overview and docs only.
/// - `Client`: no dashboard access at all.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Role {
    #[serde(rename = "admin")]
    Admin,
    #[serde(rename = "analista")]
    Analyst,
    #[serde(rename = "operador")]
    Operator,
    #[serde(rename = "cliente")]
    Client,
}

pub const ALL_ROLES: [Role; 4] = [Role::Admin, Role::Analyst, Role::Operator, Role::Client];

impl Role {
    /// Capitalized Spanish label for badges and selects.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Analyst => "Analista",
            Role::Operator => "Operador",
            Role::Client => "Cliente",
        }
    }
}

impl WireValue for Role {
    fn from_wire(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "admin" => Some(Role::Admin),
            "analista" => Some(Role::Analyst),
            "operador" => Some(Role::Operator),
            "cliente" => Some(Role::Client),
            _ => None,
        }
    }

    fn as_wire(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Analyst => "analista",
            Role::Operator => "operador",
            Role::Client => "cliente",
        }
    }
}

/// An authenticated dashboard user, as returned by `/auth/me`, login and the
/// admin user list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: String,
    /// `None` when the backend sent no role or one this build does not know.
    #[serde(rename = "rol", default, deserialize_with = "lenient")]
    pub role: Option<Role>,
    #[serde(rename = "activo", default = "default_true")]
    pub active: bool,
    #[serde(rename = "nombre_completo", default, deserialize_with = "null_as_default")]
    pub display_name: String,
}

impl User {
    /// Name shown in the header and menus; falls back to the username.
    pub fn display_label(&self) -> &str {
        if self.display_name.trim().is_empty() {
            &self.username
        } else {
            &self.display_name
        }
    }

    /// First letter of the username, uppercased, for the avatar bubble.
    pub fn initial(&self) -> String {
        self.username
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

/// Automation recommendation verdict computed upstream.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum RecommendationLevel {
    #[serde(rename = "ALTAMENTE_RECOMENDADO")]
    HighlyRecommended,
    #[serde(rename = "EVALUAR")]
    Evaluate,
    #[serde(rename = "NO_RECOMENDADO")]
    NotRecommended,
}

pub const ALL_LEVELS: [RecommendationLevel; 3] = [
    RecommendationLevel::HighlyRecommended,
    RecommendationLevel::Evaluate,
    RecommendationLevel::NotRecommended,
];

impl RecommendationLevel {
    pub fn label(&self) -> &'static str {
        match self {
            RecommendationLevel::HighlyRecommended => "Altamente Recomendado",
            RecommendationLevel::Evaluate => "Evaluar",
            RecommendationLevel::NotRecommended => "No Recomendado",
        }
    }

    /// Compact label used by the distribution chart legend.
    pub fn short_label(&self) -> &'static str {
        match self {
            RecommendationLevel::HighlyRecommended => "Altamente Rec.",
            RecommendationLevel::Evaluate => "Evaluar",
            RecommendationLevel::NotRecommended => "No Rec.",
        }
    }
}

impl WireValue for RecommendationLevel {
    fn from_wire(s: &str) -> Option<Self> {
        match s.trim() {
            "ALTAMENTE_RECOMENDADO" => Some(RecommendationLevel::HighlyRecommended),
            "EVALUAR" => Some(RecommendationLevel::Evaluate),
            "NO_RECOMENDADO" => Some(RecommendationLevel::NotRecommended),
            _ => None,
        }
    }

    fn as_wire(&self) -> &'static str {
        match self {
            RecommendationLevel::HighlyRecommended => "ALTAMENTE_RECOMENDADO",
            RecommendationLevel::Evaluate => "EVALUAR",
            RecommendationLevel::NotRecommended => "NO_RECOMENDADO",
        }
    }
}

/// Implementation priority attached to a recommendation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Priority {
    #[serde(rename = "BAJA")]
    Low,
    #[serde(rename = "MEDIA")]
    Medium,
    #[serde(rename = "ALTA")]
    High,
}

impl WireValue for Priority {
    fn from_wire(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "BAJA" => Some(Priority::Low),
            "MEDIA" => Some(Priority::Medium),
            "ALTA" => Some(Priority::High),
            _ => None,
        }
    }

    /// Priority score 1 to 10 (higher is more urgent); 0 means unset.
    fn from_wire_number(n: i64) -> Option<Self> {
        match n {
            8.. => Some(Priority::High),
            4..=7 => Some(Priority::Medium),
            1..=3 => Some(Priority::Low),
            _ => None,
        }
    }

    fn as_wire(&self) -> &'static str {
        match self {
            Priority::Low => "BAJA",
            Priority::Medium => "MEDIA",
            Priority::High => "ALTA",
        }
    }
}

/// Per-category automation recommendation (`GET /api/recomendaciones`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct RecommendationRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(rename = "categoria", default, deserialize_with = "null_as_default")]
    pub category: String,
    /// IAR, 0 to 100.
    #[serde(default, deserialize_with = "null_as_default")]
    pub iar_score: f64,
    #[serde(rename = "nivel_recomendacion", default, deserialize_with = "lenient")]
    pub recommendation_level: Option<RecommendationLevel>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_tickets: u64,
    #[serde(rename = "roi_anual_estimado", default, deserialize_with = "null_as_default")]
    pub annual_roi_estimate: f64,
    #[serde(rename = "roi_porcentaje", default, deserialize_with = "null_as_default")]
    pub roi_percentage: f64,
    #[serde(rename = "razon_principal", default, deserialize_with = "null_as_default")]
    pub main_reason: String,
    #[serde(rename = "prioridad", default, deserialize_with = "lenient")]
    pub priority: Option<Priority>,
    #[serde(rename = "acciones_sugeridas", default, deserialize_with = "null_as_empty")]
    pub suggested_actions: Vec<String>,
    #[serde(rename = "recomendacion_texto", default, deserialize_with = "null_as_default")]
    pub recommendation_text: String,
}

/// Per-category ticket metrics (`GET /api/metricas`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct MetricRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(rename = "categoria", default, deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_tickets: u64,
    #[serde(rename = "complejidad_promedio", default, deserialize_with = "null_as_default")]
    pub average_complexity: f64,
    #[serde(rename = "urgencia_critica", default, deserialize_with = "null_as_default")]
    pub urgency_critical: u64,
    #[serde(rename = "urgencia_alta", default, deserialize_with = "null_as_default")]
    pub urgency_high: u64,
    #[serde(rename = "urgencia_media", default, deserialize_with = "null_as_default")]
    pub urgency_medium: u64,
    #[serde(rename = "urgencia_baja", default, deserialize_with = "null_as_default")]
    pub urgency_low: u64,
    #[serde(rename = "sentimiento_positivo", default, deserialize_with = "null_as_default")]
    pub sentiment_positive: u64,
    #[serde(rename = "sentimiento_neutral", default, deserialize_with = "null_as_default")]
    pub sentiment_neutral: u64,
    #[serde(rename = "sentimiento_negativo", default, deserialize_with = "null_as_default")]
    pub sentiment_negative: u64,
    #[serde(rename = "tasa_resolucion", default, deserialize_with = "null_as_default")]
    pub resolution_rate: f64,
    /// Only the per-category endpoint sends this; the list endpoint omits it.
    #[serde(rename = "es_anomalia", default, deserialize_with = "int_flag")]
    pub is_anomaly: bool,
}

impl MetricRecord {
    pub fn urgency_total(&self) -> u64 {
        self.urgency_critical + self.urgency_high + self.urgency_medium + self.urgency_low
    }

    pub fn sentiment_total(&self) -> u64 {
        self.sentiment_positive + self.sentiment_neutral + self.sentiment_negative
    }
}

/// Headline KPIs for the dashboard overview (`GET /api/dashboard/resumen`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DashboardSummary {
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_tickets: u64,
    #[serde(rename = "total_categorias", default, deserialize_with = "null_as_default")]
    pub total_categories: u64,
    #[serde(rename = "promedio_iar", default, deserialize_with = "null_as_default")]
    pub average_iar: f64,
    #[serde(rename = "ahorro_total_anual", default, deserialize_with = "null_as_default")]
    pub total_annual_savings: f64,
    #[serde(rename = "categorias_altamente_recomendadas", default, deserialize_with = "null_as_default")]
    pub highly_recommended_categories: u64,
    #[serde(rename = "roi_promedio_porcentaje", default, deserialize_with = "null_as_default")]
    pub average_roi_percentage: f64,
}
