use tracing::{error, info};

use super::store::ReferenceData;
use crate::error::ReferenceError;
use crate::ingest::{decode_text, parse_table};
use crate::storage::ReferenceSource;

pub const FOODS_FILE: &str = "foods-en_ONPP_rev.csv";
pub const FOOD_GROUPS_FILE: &str = "foodgroups-en_ONPP.csv";
pub const SERVINGS_FILE: &str = "servings_per_day-en_ONPP.csv";
pub const STATEMENTS_FILE: &str = "fg_directional_satements-en_ONPP.csv";

/// Fetches the four tables concurrently and builds a fresh store. Any fetch
/// failure fails the whole load; nothing partial is returned.
pub async fn load_reference_data(
    source: &dyn ReferenceSource,
) -> Result<ReferenceData, ReferenceError> {
    let fetched = tokio::try_join!(
        source.fetch(FOODS_FILE),
        source.fetch(FOOD_GROUPS_FILE),
        source.fetch(SERVINGS_FILE),
        source.fetch(STATEMENTS_FILE),
    );
    let (foods, groups, servings, statements) = fetched.map_err(|e| {
        error!(error = %format!("{:#}", e), source = %source.describe(), "error loading food data");
        ReferenceError::Load(e.into())
    })?;

    let data = ReferenceData::new(
        parse_table(&decode_text(&foods)),
        parse_table(&decode_text(&groups)),
        parse_table(&decode_text(&servings)),
        parse_table(&decode_text(&statements)),
    );
    let sizes = data.sizes();
    info!(
        source = %source.describe(),
        foods = sizes.foods,
        food_groups = sizes.food_groups,
        serving_requirements = sizes.serving_requirements,
        directional_statements = sizes.directional_statements,
        "reference data loaded"
    );
    Ok(data)
}
