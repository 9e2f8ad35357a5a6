use super::{read_dataset, DatasetError};
use crate::models::wire::RawTeamInfo;
use crate::models::TeamReference;
use crate::utils::colors::validate_color;
use std::path::Path;

/// Logo URLs excluded from the dataset. Upstream has shipped at least one
/// broken CDN entry; matching is exact, against the raw (pre-https) URL.
pub const DEFAULT_LOGO_DENYLIST: &[&str] =
    &["http://a.espncdn.com/i/teamlogos/ncaa/500/3253.png"];

/// Load the static team metadata dataset. Entries without a logo are
/// skipped; denylisted logos are dropped; colors are validated and logo
/// URLs forced to https. Missing file or bad JSON is fatal.
pub fn load_team_reference(path: &Path) -> Result<Vec<TeamReference>, DatasetError> {
    let bytes = read_dataset(path)?;
    team_reference_from_slice(&bytes, DEFAULT_LOGO_DENYLIST).map_err(|source| {
        DatasetError::Parse {
            path: path.display().to_string(),
            source,
        }
    })
}

/// Parse and clean the raw dataset bytes. Split out from file I/O so the
/// cleaning rules are testable in isolation.
pub fn team_reference_from_slice(
    bytes: &[u8],
    logo_denylist: &[&str],
) -> Result<Vec<TeamReference>, serde_json::Error> {
    let raw: Vec<RawTeamInfo> = serde_json::from_slice(bytes)?;

    Ok(raw
        .into_iter()
        .filter_map(|team| {
            let logo = team.logos.as_ref().and_then(|logos| logos.primary())?;
            if logo_denylist.contains(&logo) {
                return None;
            }
            Some(TeamReference {
                id: team.id,
                school: team.school,
                logo: logo.replacen("http://", "https://", 1),
                color: validate_color(team.color.as_deref()),
                alt_color: validate_color(team.alternate_color.as_deref()),
            })
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r##"[
        {
            "id": 333,
            "school": "Alabama",
            "mascot": "Crimson Tide",
            "color": "#9E1B32",
            "alternateColor": "#828A8F",
            "logos": ["http://a.espncdn.com/i/teamlogos/ncaa/500/333.png"]
        },
        {
            "id": 2429,
            "school": "Charlotte",
            "color": "#046A38",
            "alternateColor": "#A49665",
            "logos": ["http://a.espncdn.com/i/teamlogos/ncaa/500/3253.png"]
        },
        {
            "id": 2005,
            "school": "Air Force",
            "color": "bad",
            "alternateColor": null,
            "logos": "http://a.espncdn.com/i/teamlogos/ncaa/500/2005.png"
        },
        {
            "id": 2006,
            "school": "No Logo U",
            "color": "#123456",
            "logos": null
        }
    ]"##;

    #[test]
    fn test_logos_forced_to_https() {
        let teams = team_reference_from_slice(SAMPLE.as_bytes(), DEFAULT_LOGO_DENYLIST).unwrap();
        let alabama = teams.iter().find(|t| t.school == "Alabama").unwrap();
        assert_eq!(
            alabama.logo,
            "https://a.espncdn.com/i/teamlogos/ncaa/500/333.png"
        );
        assert_eq!(alabama.color, "#9E1B32");
        assert_eq!(alabama.alt_color, "#828A8F");
    }

    #[test]
    fn test_denylisted_logo_excluded() {
        let teams = team_reference_from_slice(SAMPLE.as_bytes(), DEFAULT_LOGO_DENYLIST).unwrap();
        assert!(teams.iter().all(|t| t.school != "Charlotte"));

        // With an empty denylist the entry survives
        let teams = team_reference_from_slice(SAMPLE.as_bytes(), &[]).unwrap();
        assert!(teams.iter().any(|t| t.school == "Charlotte"));
    }

    #[test]
    fn test_single_string_logo_accepted() {
        let teams = team_reference_from_slice(SAMPLE.as_bytes(), DEFAULT_LOGO_DENYLIST).unwrap();
        let air_force = teams.iter().find(|t| t.school == "Air Force").unwrap();
        assert_eq!(
            air_force.logo,
            "https://a.espncdn.com/i/teamlogos/ncaa/500/2005.png"
        );
        // Invalid and absent colors both default to white
        assert_eq!(air_force.color, "#ffffff");
        assert_eq!(air_force.alt_color, "#ffffff");
    }

    #[test]
    fn test_entries_without_logos_skipped() {
        let teams = team_reference_from_slice(SAMPLE.as_bytes(), DEFAULT_LOGO_DENYLIST).unwrap();
        assert!(teams.iter().all(|t| t.school != "No Logo U"));
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(team_reference_from_slice(b"{ not json", DEFAULT_LOGO_DENYLIST).is_err());
    }
}
