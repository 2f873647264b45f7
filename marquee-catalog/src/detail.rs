//! Release-date and trailer selection for the movie detail.

use chrono::DateTime;

use marquee_core::constants::{
    RELEASE_TYPE_THEATRICAL, VIDEO_SITE_YOUTUBE, VIDEO_TYPE_TEASER, VIDEO_TYPE_TRAILER,
};
use marquee_core::types::{ReleaseDates, Video};

/// Release date to display for `region`, as `YYYY-MM-DD`.
///
/// Prefers the theatrical release, falling back to the first release listed
/// for the region. `None` if the region has no releases.
pub fn regional_release_date(dates: &ReleaseDates, region: &str) -> Option<String> {
    let group = dates.results.iter().find(|g| g.iso_3166_1 == region)?;
    let release = group
        .release_dates
        .iter()
        .find(|r| r.release_type == RELEASE_TYPE_THEATRICAL)
        .or_else(|| group.release_dates.first())?;
    Some(date_only(&release.release_date))
}

/// Strips the time component from an ISO-8601 timestamp.
pub fn date_only(timestamp: &str) -> String {
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(dt) => dt.date_naive().format("%Y-%m-%d").to_string(),
        Err(_) => timestamp.split('T').next().unwrap_or(timestamp).to_string(),
    }
}

/// First YouTube trailer, else first YouTube teaser.
pub fn select_trailer(videos: Vec<Video>) -> Option<Video> {
    let position = videos
        .iter()
        .position(|v| v.is(VIDEO_TYPE_TRAILER, VIDEO_SITE_YOUTUBE))
        .or_else(|| {
            videos
                .iter()
                .position(|v| v.is(VIDEO_TYPE_TEASER, VIDEO_SITE_YOUTUBE))
        })?;
    videos.into_iter().nth(position)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse_dates(value: serde_json::Value) -> ReleaseDates {
        serde_json::from_value(value).unwrap()
    }

    fn video(video_type: &str, site: &str, key: &str) -> Video {
        serde_json::from_value(json!({ "type": video_type, "site": site, "key": key })).unwrap()
    }

    #[test]
    fn test_prefers_theatrical() {
        let dates = parse_dates(json!({ "results": [
            { "iso_3166_1": "US", "release_dates": [{ "release_date": "2024-04-01T00:00:00.000Z", "type": 3 }] },
            { "iso_3166_1": "KR", "release_dates": [
                { "release_date": "2024-04-20T00:00:00.000Z", "type": 1 },
                { "release_date": "2024-05-01T00:00:00.000Z", "type": 3 }
            ] }
        ] }));
        assert_eq!(regional_release_date(&dates, "KR").as_deref(), Some("2024-05-01"));
    }

    #[test]
    fn test_falls_back_to_first_release() {
        let dates = parse_dates(json!({ "results": [
            { "iso_3166_1": "KR", "release_dates": [
                { "release_date": "2023-11-22T00:00:00.000Z", "type": 4 },
                { "release_date": "2023-12-25T00:00:00.000Z", "type": 6 }
            ] }
        ] }));
        assert_eq!(regional_release_date(&dates, "KR").as_deref(), Some("2023-11-22"));
    }

    #[test]
    fn test_missing_region() {
        let dates = parse_dates(json!({ "results": [
            { "iso_3166_1": "JP", "release_dates": [{ "release_date": "2024-01-01T00:00:00.000Z", "type": 3 }] }
        ] }));
        assert_eq!(regional_release_date(&dates, "KR"), None);

        let empty = dates_empty_group();
        assert_eq!(regional_release_date(&empty, "KR"), None);
    }

    fn dates_empty_group() -> ReleaseDates {
        parse_dates(json!({ "results": [{ "iso_3166_1": "KR", "release_dates": [] }] }))
    }

    #[test]
    fn test_date_only() {
        assert_eq!(date_only("2024-05-01T00:00:00.000Z"), "2024-05-01");
        assert_eq!(date_only("2024-05-01T23:30:00+09:00"), "2024-05-01");
        assert_eq!(date_only("2024-05-01"), "2024-05-01");
    }

    #[test]
    fn test_trailer_wins_regardless_of_order() {
        let videos = vec![
            video("Teaser", "YouTube", "teaser"),
            video("Trailer", "YouTube", "trailer"),
        ];
        let selected = select_trailer(videos).unwrap();
        assert_eq!(selected.key(), Some("trailer"));
    }

    #[test]
    fn test_teaser_fallback() {
        let videos = vec![
            video("Trailer", "Vimeo", "vimeo-trailer"),
            video("Clip", "YouTube", "clip"),
            video("Teaser", "YouTube", "teaser"),
        ];
        let selected = select_trailer(videos).unwrap();
        assert_eq!(selected.key(), Some("teaser"));
    }

    #[test]
    fn test_no_trailer() {
        assert!(select_trailer(vec![video("Featurette", "YouTube", "f")]).is_none());
        assert!(select_trailer(Vec::new()).is_none());
    }
}
