use crate::ClientResult;
use crate::commands::common::{SourceOptions, load_config_and_source};
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::FacetsData;
use crate::view::derive_facets;

pub fn run(source: SourceOptions<'_>) -> ClientResult<SuccessEnvelope> {
    let (_config, loaded) = load_config_and_source(source)?;
    let facets = derive_facets(&loaded.transactions);

    success(
        "facets",
        FacetsData {
            source: loaded.source,
            categories: facets.categories,
            wallets: facets.wallets,
        },
    )
}
