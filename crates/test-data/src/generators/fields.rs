//! Random field generators backed by fixed value pools.
//!
//! Every function samples uniformly with replacement from its pool or range,
//! except [`random_roles`], which draws without replacement.

use std::collections::BTreeMap;

use json_bench::ContextValue;
use rand::Rng;
use time::{Duration, OffsetDateTime};

pub const NAMES: [&str; 18] = [
    "João", "Maria", "Pedro", "Ana", "Carlos", "Juliana", "Lucas", "Fernanda", "Rafael",
    "Beatriz", "Felipe", "Camila", "Gabriel", "Amanda", "Bruno", "Patricia", "Rodrigo", "Letícia",
];

pub const BIOS: [&str; 8] = [
    "Desenvolvedor apaixonado por Go e sistemas distribuídos",
    "Engenheira de software especialista em backend e APIs",
    "Tech lead focado em performance e escalabilidade",
    "Arquiteto de soluções cloud native e microsserviços",
    "Full stack developer com foco em Go e React",
    "DevOps engineer automatizando tudo que é possível",
    "Site Reliability Engineer mantendo sistemas no ar 24/7",
    "Backend developer construindo APIs que escalam",
];

pub const LOCATIONS: [&str; 8] = [
    "São Paulo, BR",
    "Rio de Janeiro, BR",
    "Blumenau, BR",
    "Florianópolis, BR",
    "Curitiba, BR",
    "Porto Alegre, BR",
    "Belo Horizonte, BR",
    "Brasília, BR",
];

pub const THEMES: [&str; 3] = ["dark", "light", "auto"];

pub const LANGUAGES: [&str; 4] = ["pt-BR", "en-US", "es-ES", "fr-FR"];

/// Every profile carries this timezone.
pub const TIMEZONE: &str = "UTC-3";

pub const ROLES: [&str; 5] = ["user", "admin", "moderator", "developer", "viewer"];

/// Largest role set a user is given.
pub const MAX_ROLES: usize = 3;

pub const LEVELS: [&str; 4] = ["DEBUG", "INFO", "WARN", "ERROR"];

pub const SERVICES: [&str; 4] = ["api", "worker", "scheduler", "mailer"];

pub const LOG_MESSAGES: [&str; 12] = [
    "Request processed successfully",
    "Database query completed in 45ms",
    "Cache miss, fetching from database",
    "User authentication successful",
    "Rate limit exceeded for IP address",
    "Background job started",
    "Email notification sent",
    "File upload completed",
    "API request validation failed",
    "Connection pool exhausted",
    "Retry attempt 3 of 5",
    "Transaction committed successfully",
];

/// `created_at` lies at most this many days before the generation time.
pub const CREATED_WITHIN_DAYS: i64 = 365;

/// Log timestamps lie at most this many seconds before the generation time.
pub const LOG_WINDOW_SECS: i64 = 3600;

/// Exclusive upper bounds of the numeric log fields.
pub const MAX_USER_ID: i64 = 1000;
pub const MAX_REQUEST_ID: u32 = 10_000;
pub const MAX_DURATION_MS: i64 = 1000;
pub const MAX_TRACE_ID: u32 = 100_000;

fn pick<'a>(pool: &[&'a str], rng: &mut impl Rng) -> &'a str {
    pool[rng.gen_range(0..pool.len())]
}

pub fn random_name(rng: &mut impl Rng) -> String {
    pick(&NAMES, rng).to_string()
}

pub fn random_bio(rng: &mut impl Rng) -> String {
    pick(&BIOS, rng).to_string()
}

pub fn random_location(rng: &mut impl Rng) -> String {
    pick(&LOCATIONS, rng).to_string()
}

pub fn random_theme(rng: &mut impl Rng) -> String {
    pick(&THEMES, rng).to_string()
}

pub fn random_language(rng: &mut impl Rng) -> String {
    pick(&LANGUAGES, rng).to_string()
}

/// Builds profile metadata: random theme and language, fixed timezone.
pub fn random_metadata(rng: &mut impl Rng) -> BTreeMap<String, String> {
    let mut metadata = BTreeMap::new();
    metadata.insert("theme".to_string(), random_theme(rng));
    metadata.insert("language".to_string(), random_language(rng));
    metadata.insert("timezone".to_string(), TIMEZONE.to_string());
    metadata
}

/// Draws 1..=[`MAX_ROLES`] distinct roles, in draw order.
pub fn random_roles(rng: &mut impl Rng) -> Vec<String> {
    let count = rng.gen_range(1..=MAX_ROLES);
    distinct_roles(count, rng)
}

/// Draws exactly `count` distinct roles, retrying on repeated indices.
///
/// # Panics
///
/// Panics if `count` exceeds the role pool, which could never terminate.
pub fn distinct_roles(count: usize, rng: &mut impl Rng) -> Vec<String> {
    assert!(
        count <= ROLES.len(),
        "cannot draw {count} distinct roles from a pool of {}",
        ROLES.len()
    );

    let mut used = [false; ROLES.len()];
    let mut roles = Vec::with_capacity(count);

    while roles.len() < count {
        let idx = rng.gen_range(0..ROLES.len());
        if !used[idx] {
            used[idx] = true;
            roles.push(ROLES[idx].to_string());
        }
    }

    roles
}

/// A time up to 364 whole days before `now`, keeping the time of day.
pub fn random_date(now: OffsetDateTime, rng: &mut impl Rng) -> OffsetDateTime {
    now - Duration::days(rng.gen_range(0..CREATED_WITHIN_DAYS))
}

/// A time up to 3599 whole seconds before `now`.
pub fn random_log_timestamp(now: OffsetDateTime, rng: &mut impl Rng) -> OffsetDateTime {
    now - Duration::seconds(rng.gen_range(0..LOG_WINDOW_SECS))
}

pub fn random_level(rng: &mut impl Rng) -> String {
    pick(&LEVELS, rng).to_string()
}

pub fn random_service(rng: &mut impl Rng) -> String {
    pick(&SERVICES, rng).to_string()
}

pub fn random_log_message(rng: &mut impl Rng) -> String {
    pick(&LOG_MESSAGES, rng).to_string()
}

/// Builds a request context with `user_id`, `request_id` and `duration_ms`.
pub fn random_context(rng: &mut impl Rng) -> BTreeMap<String, ContextValue> {
    let mut context = BTreeMap::new();
    context.insert(
        "user_id".to_string(),
        ContextValue::Integer(rng.gen_range(0..MAX_USER_ID)),
    );
    context.insert(
        "request_id".to_string(),
        ContextValue::String(format!("req_{}", rng.gen_range(0..MAX_REQUEST_ID))),
    );
    context.insert(
        "duration_ms".to_string(),
        ContextValue::Integer(rng.gen_range(0..MAX_DURATION_MS)),
    );
    context
}

pub fn random_trace_id(rng: &mut impl Rng) -> String {
    format!("trace_{}", rng.gen_range(0..MAX_TRACE_ID))
}
