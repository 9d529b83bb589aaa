//! Notices published by the school, read from a TOML file with one `[[notices]]` table each.

use crate::Result;
use models::Notice;
use serde::Deserialize;
use std::path::Path;
use tracing::{info, instrument, warn};

#[derive(Deserialize)]
struct NoticesFile {
    #[serde(default)]
    notices: Vec<Notice>,
}

/// Load notices from `path`, pinned ones first. A missing file means no notices.
#[instrument]
pub fn load(path: &Path) -> Result<Vec<Notice>> {
    if !path.is_file() {
        warn!("{} not found, serving no notices", path.display());
        return Ok(vec![]);
    }

    let notices = parse(&std::fs::read_to_string(path)?)?;
    info!("Loaded {} notices", notices.len());

    Ok(notices)
}

fn parse(content: &str) -> Result<Vec<Notice>> {
    let mut notices = toml::from_str::<NoticesFile>(content)?.notices;

    // Stable, so file order is kept within both groups.
    notices.sort_by_key(|notice| !notice.pinned);

    Ok(notices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::NoticeId;
    use std::io::Write;

    const FILE: &str = r#"
        [[notices]]
        id = 1
        title = "자료 배포"
        content = "현장에서 배포합니다."
        created_at = "2025-10-10T09:00:00+09:00"

        [[notices]]
        id = "parking"
        title = "주차 안내"
        content = "대중교통을 이용해 주세요."
        pinned = true
        created_at = "2025-10-20T09:00:00+09:00"

        [[notices]]
        id = 3
        title = "좌석 안내"
        content = "선착순입니다."
        created_at = "2025-10-21T09:00:00+09:00"
    "#;

    #[test]
    fn pinned_notices_come_first() {
        let ids: Vec<_> = parse(FILE).unwrap().into_iter().map(|n| n.id).collect();

        assert_eq!(
            ids,
            vec![
                NoticeId::Text("parking".into()),
                NoticeId::Number(1),
                NoticeId::Number(3)
            ]
        );
    }

    #[test]
    fn empty_file_has_no_notices() {
        assert!(parse("").unwrap().is_empty());
    }

    #[test]
    fn malformed_file_is_an_error() {
        assert!(parse("[[notices]]\nid = 1\n").is_err());
    }

    #[test]
    fn missing_file_has_no_notices() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load(&dir.path().join("notices.toml")).unwrap().is_empty());
    }

    #[test]
    fn loads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{FILE}").unwrap();

        assert_eq!(load(file.path()).unwrap().len(), 3);
    }
}
