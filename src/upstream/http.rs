//! Live HTTP upstream.

use std::sync::Arc;

use url::Url;

use super::Endpoint;
use crate::config::PROFILE_FIELDS;
use crate::error_handling::{categorize_reqwest_error, InitializationError, Unavailable};

/// Client for the ranking and analytics providers.
#[derive(Debug)]
pub struct HttpUpstream {
    client: Arc<reqwest::Client>,
    ranking_base: Url,
    analytics_base: Url,
    api_key: Option<String>,
}

impl HttpUpstream {
    pub fn new(
        client: Arc<reqwest::Client>,
        ranking_base: &str,
        analytics_base: &str,
        api_key: Option<String>,
    ) -> Result<Self, InitializationError> {
        Ok(HttpUpstream {
            client,
            ranking_base: parse_base(ranking_base)?,
            analytics_base: parse_base(analytics_base)?,
            api_key,
        })
    }

    /// Full request URL of an endpoint, credentials included.
    pub fn url_for(&self, endpoint: &Endpoint<'_>) -> Url {
        match endpoint {
            Endpoint::Profile(identity) => {
                let mut url = join(&self.ranking_base, &["characters", "profile"]);
                url.query_pairs_mut()
                    .append_pair("name", &identity.character)
                    .append_pair("region", identity.region.as_str())
                    .append_pair("realm", &identity.realm)
                    .append_pair("fields", PROFILE_FIELDS);
                url
            }
            Endpoint::CharacterParses {
                identity,
                metric,
                zone,
            } => {
                let mut url = join(
                    &self.analytics_base,
                    &[
                        "parses",
                        "character",
                        identity.character.as_str(),
                        identity.realm.as_str(),
                        identity.region.as_str(),
                    ],
                );
                url.query_pairs_mut()
                    .append_pair("metric", metric.as_str())
                    .append_pair("zone", &zone.to_string());
                self.append_api_key(&mut url);
                url
            }
            Endpoint::ReportFights { report_id } => {
                let mut url = join(&self.analytics_base, &["report", "fights", *report_id]);
                url.query_pairs_mut().append_pair("translate", "true");
                self.append_api_key(&mut url);
                url
            }
            Endpoint::FightSummary {
                report_id,
                start,
                end,
            } => {
                let mut url = join(
                    &self.analytics_base,
                    &["report", "tables", "summary", *report_id],
                );
                url.query_pairs_mut()
                    .append_pair("start", &start.to_string())
                    .append_pair("end", &end.to_string());
                self.append_api_key(&mut url);
                url.query_pairs_mut().append_pair("translate", "true");
                url
            }
        }
    }

    pub(super) async fn get(&self, endpoint: &Endpoint<'_>) -> Result<Vec<u8>, Unavailable> {
        let url = self.url_for(endpoint);
        // Path only: the query carries the API key
        let path = url.path().to_string();
        log::debug!("GET {path}");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| categorize_reqwest_error(&e.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            log::debug!("GET {path} returned {status}");
            return Err(Unavailable::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| categorize_reqwest_error(&e.without_url()))?;
        Ok(body.to_vec())
    }

    fn append_api_key(&self, url: &mut Url) {
        if let Some(key) = &self.api_key {
            url.query_pairs_mut().append_pair("api_key", key);
        }
    }
}

fn parse_base(raw: &str) -> Result<Url, InitializationError> {
    let url = Url::parse(raw).map_err(|e| InitializationError::InvalidBaseUrlError {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;
    if url.cannot_be_a_base() {
        return Err(InitializationError::InvalidBaseUrlError {
            url: raw.to_string(),
            reason: "URL cannot be a base".to_string(),
        });
    }
    Ok(url)
}

/// Appends percent-encoded path segments to a base URL.
fn join(base: &Url, segments: &[&str]) -> Url {
    let mut url = base.clone();
    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty().extend(segments);
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Metric, PlayerIdentity, Region};

    fn upstream(api_key: Option<&str>) -> HttpUpstream {
        HttpUpstream::new(
            Arc::new(reqwest::Client::new()),
            "https://raider.io/api/v1",
            "https://www.warcraftlogs.com/v1/",
            api_key.map(str::to_string),
        )
        .unwrap()
    }

    #[test]
    fn test_profile_url() {
        let identity = PlayerIdentity::new(Region::Eu, "Blackmoore", "Dyrael");
        let url = upstream(Some("k")).url_for(&Endpoint::Profile(&identity));
        assert_eq!(
            url.as_str(),
            "https://raider.io/api/v1/characters/profile?name=Dyrael&region=eu&realm=Blackmoore&fields=mythic_plus_scores"
        );
    }

    #[test]
    fn test_parses_url_encodes_path_segments() {
        let identity = PlayerIdentity::new(Region::Us, "Area 52", "Dyrael");
        let url = upstream(Some("secret")).url_for(&Endpoint::CharacterParses {
            identity: &identity,
            metric: Metric::Hps,
            zone: 25,
        });
        assert_eq!(url.path(), "/v1/parses/character/Dyrael/Area%2052/us");
        assert_eq!(url.query(), Some("metric=hps&zone=25&api_key=secret"));
    }

    #[test]
    fn test_fights_url_without_api_key() {
        let url = upstream(None).url_for(&Endpoint::ReportFights { report_id: "aBc123" });
        assert_eq!(
            url.as_str(),
            "https://www.warcraftlogs.com/v1/report/fights/aBc123?translate=true"
        );
    }

    #[test]
    fn test_summary_url() {
        let url = upstream(Some("k")).url_for(&Endpoint::FightSummary {
            report_id: "aBc123",
            start: 100,
            end: 1_900_100,
        });
        assert_eq!(url.path(), "/v1/report/tables/summary/aBc123");
        assert_eq!(
            url.query(),
            Some("start=100&end=1900100&api_key=k&translate=true")
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let result = HttpUpstream::new(
            Arc::new(reqwest::Client::new()),
            "mailto:someone@example.com",
            "https://www.warcraftlogs.com/v1",
            None,
        );
        assert!(matches!(
            result,
            Err(InitializationError::InvalidBaseUrlError { .. })
        ));
    }
}
