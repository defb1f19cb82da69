//! Ranking profile fetcher.

use crate::error_handling::Unavailable;
use crate::models::{PlayerIdentity, ProfileSummary, RankingProfile};
use crate::upstream::{Endpoint, Upstream};

/// Fetches the character's ranking profile with mythic+ scores.
///
/// Single attempt. Any status, transport or decode failure is returned as
/// [`Unavailable`]; the caller treats it as fatal for the lookup.
pub async fn fetch_profile(
    upstream: &Upstream,
    identity: &PlayerIdentity,
) -> Result<ProfileSummary, Unavailable> {
    let raw: RankingProfile = upstream.fetch(&Endpoint::Profile(identity)).await?;
    Ok(raw.into())
}
