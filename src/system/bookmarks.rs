#![allow(dead_code)]

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// 북마크 저장소
///
/// 문자열 배열 하나를 담는 JSON 파일. 추가/삭제 때마다 전체를 다시 쓴다.
/// 읽기 실패는 치명적이지 않다 - 기본 목록으로 대체된다.
#[derive(Debug, Clone, Default)]
pub struct BookmarkStore {
    /// 저장 경로 override (테스트 격리용)
    store_override: Option<PathBuf>,
}

impl BookmarkStore {
    /// 기본 경로를 사용하는 저장소 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 지정한 파일을 사용하는 저장소 생성
    pub fn with_store_path(path: PathBuf) -> Self {
        Self {
            store_override: Some(path),
        }
    }

    /// 저장 파일 경로 결정
    ///
    /// 우선순위: override → `BOKSLNAV_BOOKMARKS_FILE` → `~/.bokslnav/bookmarks.json`
    fn store_path(&self) -> Option<PathBuf> {
        if let Some(path) = &self.store_override {
            return Some(path.clone());
        }
        if let Ok(custom) = env::var("BOKSLNAV_BOOKMARKS_FILE") {
            let trimmed = custom.trim();
            if !trimmed.is_empty() {
                return Some(PathBuf::from(trimmed));
            }
        }
        dirs::home_dir().map(|home| home.join(".bokslnav").join("bookmarks.json"))
    }

    /// 첫 실행 기본 북마크 목록
    ///
    /// 첫 항목 "Home"은 홈 디렉토리를 뜻하는 고정 항목으로 삭제할 수 없다.
    pub fn default_bookmarks(home: &Path) -> Vec<String> {
        let mut bookmarks = vec!["Home".to_string()];
        for dir in ["Desktop", "Documents", "Downloads", "Music", "Pictures", "Videos"] {
            bookmarks.push(home.join(dir).to_string_lossy().to_string());
        }
        bookmarks
    }

    /// 북마크 목록 읽기
    ///
    /// 파일이 없으면 기본 목록을 만들어 저장하고 반환한다.
    /// 내용이 깨져 있으면 최소 목록 `["Home"]`으로 대체한다.
    pub fn load(&self, home: &Path) -> Vec<String> {
        let Some(path) = self.store_path() else {
            return Self::default_bookmarks(home);
        };

        let Ok(data) = fs::read_to_string(&path) else {
            let bookmarks = Self::default_bookmarks(home);
            let _ = self.save(&bookmarks);
            return bookmarks;
        };

        match serde_json::from_str::<Vec<String>>(&data) {
            Ok(bookmarks) => bookmarks,
            Err(_) => vec!["Home".to_string()],
        }
    }

    /// 북마크 목록 저장 (전체 다시 쓰기)
    pub fn save(&self, bookmarks: &[String]) -> std::io::Result<()> {
        let Some(path) = self.store_path() else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_string_pretty(bookmarks)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        fs::write(path, data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(temp: &TempDir) -> BookmarkStore {
        BookmarkStore::with_store_path(temp.path().join("bookmarks.json"))
    }

    #[test]
    fn test_missing_file_creates_defaults() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        let bookmarks = store.load(temp.path());

        assert_eq!(bookmarks[0], "Home");
        assert_eq!(bookmarks.len(), 7);
        assert!(bookmarks[1].ends_with("Desktop"));
        // 기본 목록이 파일로 저장되어야 함
        assert!(temp.path().join("bookmarks.json").exists());
    }

    #[test]
    fn test_corrupt_file_degrades_to_home_only() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        fs::write(temp.path().join("bookmarks.json"), "not json {{{").unwrap();

        let bookmarks = store.load(temp.path());
        assert_eq!(bookmarks, vec!["Home".to_string()]);
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        let saved = vec![
            "Home".to_string(),
            "/srv/media".to_string(),
            "/var/log".to_string(),
        ];
        store.save(&saved).unwrap();

        assert_eq!(store.load(temp.path()), saved);
    }

    #[test]
    fn test_save_creates_parent_directory() {
        let temp = TempDir::new().unwrap();
        let store =
            BookmarkStore::with_store_path(temp.path().join("deep/nested/bookmarks.json"));

        store.save(&["Home".to_string()]).unwrap();
        assert!(temp.path().join("deep/nested/bookmarks.json").exists());
    }
}
