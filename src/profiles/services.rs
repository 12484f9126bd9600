use time::OffsetDateTime;
use tracing::{info, warn};
use uuid::Uuid;

use serde_json::Value;

use super::dto::CreateProfileRequest;
use super::repo::ProfileStore;
use super::repo_types::UserProfile;
use crate::error::ProfileError;
use crate::ingest::parse_leading_int;

pub const MIN_AGE: i64 = 2;
pub const MAX_AGE: i64 = 120;
pub const MAX_NAME_LEN: usize = 50;

/// Rejects missing names and non-numeric or out-of-range ages before a
/// profile can reach menu generation.
pub fn validate(req: &CreateProfileRequest) -> Result<(String, u32), ProfileError> {
    let name = req.name.as_deref().unwrap_or_default().trim();
    if name.is_empty() || name.chars().count() > MAX_NAME_LEN {
        return Err(ProfileError::Invalid);
    }
    let age = req.age.as_ref().and_then(age_value).ok_or(ProfileError::Invalid)?;
    if !(MIN_AGE..=MAX_AGE).contains(&age) {
        return Err(ProfileError::Invalid);
    }
    let age = u32::try_from(age).map_err(|_| ProfileError::Invalid)?;
    Ok((name.to_string(), age))
}

/// Integer part of a numeric age, or the leading integer of age text.
fn age_value(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && f.abs() < i64::MAX as f64)
                .map(|f| f.trunc() as i64)
        }),
        Value::String(text) => parse_leading_int(text),
        _ => None,
    }
}

pub fn add_profile(store: &ProfileStore, req: CreateProfileRequest) -> Result<UserProfile, ProfileError> {
    let (name, age) = validate(&req).map_err(|e| {
        warn!(name = ?req.name, age = ?req.age, "profile rejected");
        e
    })?;
    let profile = UserProfile {
        id: Uuid::new_v4(),
        name,
        age,
        gender: req.gender.unwrap_or_default(),
        created_at: OffsetDateTime::now_utc(),
    };
    store.insert(profile.clone());
    info!(profile_id = %profile.id, age = profile.age, gender = %profile.gender, "profile added");
    Ok(profile)
}

pub fn remove_profile(store: &ProfileStore, id: Uuid) -> Result<UserProfile, ProfileError> {
    let removed = store.remove(id).ok_or(ProfileError::NotFound(id))?;
    info!(profile_id = %id, "profile removed");
    Ok(removed)
}
