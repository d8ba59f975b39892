#![allow(dead_code)]

use crate::utils::error::{BokslNavError, Result};
use crate::utils::formatter::{format_date, format_mode, human_size};
use std::fs;
use std::path::{Path, PathBuf};

/// 파일 시스템 모듈
///
/// 디렉토리 스냅샷과 삭제/이동/복사 원시 연산. 모든 호출은 동기식이며
/// 상태 머신은 이 경계 뒤의 구현을 알지 못한다.
pub struct FileSystem;

impl FileSystem {
    /// 새 파일 시스템 인스턴스 생성
    pub fn new() -> Self {
        Self
    }

    /// 디렉토리 읽기
    ///
    /// 표시 순서로 정렬된 항목 이름 목록을 반환합니다.
    ///
    /// 항목은 {숨김 디렉토리, 디렉토리, 파일, 숨김 파일} 네 버킷으로
    /// 나뉘고 각 버킷은 이름순(대소문자 구분) 정렬된다. 숨김 표시가
    /// 켜져 있으면 [숨김 디렉토리, 디렉토리, 파일, 숨김 파일] 순서로
    /// 이어붙이고, 꺼져 있으면 [디렉토리, 파일]만 반환한다.
    pub fn list_directory(&self, path: &Path, show_hidden: bool) -> Result<Vec<String>> {
        if !path.exists() {
            return Err(BokslNavError::PathNotFound {
                path: path.to_path_buf(),
            });
        }
        if !path.is_dir() {
            return Err(BokslNavError::NotADirectory {
                path: path.to_path_buf(),
            });
        }

        let mut hidden_dirs = Vec::new();
        let mut dirs = Vec::new();
        let mut files = Vec::new();
        let mut hidden_files = Vec::new();

        for entry in fs::read_dir(path)? {
            // 에러 발생 시 해당 엔트리는 스킵
            let Ok(entry) = entry else { continue };

            let name = entry.file_name().to_string_lossy().to_string();
            let is_hidden = name.starts_with('.');
            // 심볼릭 링크는 따라가지 않는다 - 링크 자체의 타입으로 분류
            let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);

            match (is_dir, is_hidden) {
                (true, true) => hidden_dirs.push(name),
                (true, false) => dirs.push(name),
                (false, false) => files.push(name),
                (false, true) => hidden_files.push(name),
            }
        }

        hidden_dirs.sort();
        dirs.sort();
        files.sort();
        hidden_files.sort();

        let mut result = Vec::new();
        if show_hidden {
            result.extend(hidden_dirs);
            result.extend(dirs);
            result.extend(files);
            result.extend(hidden_files);
        } else {
            result.extend(dirs);
            result.extend(files);
        }
        Ok(result)
    }

    /// 디렉토리 여부 확인
    #[allow(clippy::unused_self)]
    pub fn is_directory(&self, path: &Path) -> bool {
        path.is_dir()
    }

    /// 파일/디렉토리 삭제
    pub fn delete_entry(&self, path: &Path) -> Result<()> {
        let metadata = fs::symlink_metadata(path)?;
        if metadata.is_dir() {
            fs::remove_dir_all(path)?;
        } else {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    /// 파일/디렉토리 이동 (rename)
    ///
    /// 대상 충돌은 사전 검사하지 않는다 - 기존 파일은 교체되고,
    /// 비어있지 않은 디렉토리 대상은 OS 에러가 그대로 반환된다.
    pub fn move_entry(&self, src: &Path, dest: &Path) -> Result<()> {
        fs::rename(src, dest)?;
        Ok(())
    }

    /// 재귀 트리 복사 (깊이 우선)
    ///
    /// 기존 파일은 덮어쓰고 기존 디렉토리에는 병합한다.
    /// 심볼릭 링크 순환에 대한 보호는 없다.
    pub fn copy_tree(&self, src: &Path, dest: &Path) -> Result<()> {
        let metadata = fs::metadata(src)?;

        if metadata.is_dir() {
            fs::create_dir_all(dest)?;
            for entry in fs::read_dir(src)? {
                let entry = entry?;
                self.copy_tree(&entry.path(), &dest.join(entry.file_name()))?;
            }
        } else {
            fs::copy(src, dest)?;
        }
        Ok(())
    }

    /// 선택 항목의 상태줄 텍스트 생성
    ///
    /// `모드(12) 전체항목(6) 숨김항목(6) 크기(10)   수정시각` 형식.
    /// 디렉토리는 항목/숨김 개수와 크기 자리에 "-", 파일은 사람이 읽을 수
    /// 있는 크기를 표시한다. stat 실패 시 "error".
    pub fn status_line(&self, path: &Path) -> String {
        let Ok(metadata) = fs::metadata(path) else {
            return "error".to_string();
        };

        let mode = format_mode(&metadata);
        let modified = metadata
            .modified()
            .map(format_date)
            .unwrap_or_else(|_| "-".to_string());

        if metadata.is_dir() {
            let (total, hidden) = self.count_entries(path);
            format!(
                "{:<12}{:>6}{:>6}{:>10}   {}",
                mode, total, hidden, "-", modified
            )
        } else {
            format!(
                "{:<12}{:>6}{:>6}{:>10}   {}",
                mode,
                0,
                0,
                human_size(metadata.len()),
                modified
            )
        }
    }

    /// 디렉토리의 전체/숨김 항목 개수
    fn count_entries(&self, path: &Path) -> (usize, usize) {
        let Ok(read_dir) = fs::read_dir(path) else {
            return (0, 0);
        };

        let mut total = 0;
        let mut hidden = 0;
        for entry in read_dir.flatten() {
            total += 1;
            if entry.file_name().to_string_lossy().starts_with('.') {
                hidden += 1;
            }
        }
        (total, hidden)
    }

    /// OS 기본 프로그램으로 파일 열기
    pub fn open_with_default_app(&self, path: &Path) -> Result<()> {
        use std::process::Command;

        if !path.exists() {
            return Err(BokslNavError::PathNotFound {
                path: path.to_path_buf(),
            });
        }

        #[cfg(target_os = "macos")]
        let opener = "open";
        #[cfg(not(target_os = "macos"))]
        let opener = "xdg-open";

        Command::new(opener)
            .arg(path)
            .spawn()
            .map_err(|e| BokslNavError::ExternalOpenFailed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        Ok(())
    }
}

impl Default for FileSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn build_sample_tree(base: &Path) {
        fs::create_dir(base.join("zeta")).unwrap();
        fs::create_dir(base.join("Alpha")).unwrap();
        fs::create_dir(base.join(".git")).unwrap();
        fs::write(base.join("b.txt"), "b").unwrap();
        fs::write(base.join("a.txt"), "a").unwrap();
        fs::write(base.join(".env"), "secret").unwrap();
    }

    #[test]
    fn test_list_directory_hidden_off() {
        let temp = TempDir::new().unwrap();
        build_sample_tree(temp.path());

        let fs_layer = FileSystem::new();
        let items = fs_layer.list_directory(temp.path(), false).unwrap();

        // 디렉토리 먼저, 그 다음 파일, 각각 이름순. 숨김 항목은 완전히 제외.
        assert_eq!(items, vec!["Alpha", "zeta", "a.txt", "b.txt"]);
    }

    #[test]
    fn test_list_directory_hidden_on() {
        let temp = TempDir::new().unwrap();
        build_sample_tree(temp.path());

        let fs_layer = FileSystem::new();
        let items = fs_layer.list_directory(temp.path(), true).unwrap();

        // [숨김 디렉토리, 디렉토리, 파일, 숨김 파일] 순서
        assert_eq!(items, vec![".git", "Alpha", "zeta", "a.txt", "b.txt", ".env"]);
    }

    #[test]
    fn test_list_directory_sorts_case_sensitively() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("b.txt"), "").unwrap();
        fs::write(temp.path().join("A.txt"), "").unwrap();
        fs::write(temp.path().join("z.txt"), "").unwrap();

        let fs_layer = FileSystem::new();
        let items = fs_layer.list_directory(temp.path(), false).unwrap();

        // 대문자가 소문자보다 앞 (바이트 순서)
        assert_eq!(items, vec!["A.txt", "b.txt", "z.txt"]);
    }

    #[test]
    fn test_list_directory_missing_path_fails() {
        let temp = TempDir::new().unwrap();
        let fs_layer = FileSystem::new();

        let result = fs_layer.list_directory(&temp.path().join("nope"), false);
        assert!(matches!(result, Err(BokslNavError::PathNotFound { .. })));
    }

    #[test]
    fn test_list_directory_on_file_fails() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("plain.txt");
        fs::write(&file, "x").unwrap();

        let fs_layer = FileSystem::new();
        let result = fs_layer.list_directory(&file, false);
        assert!(matches!(result, Err(BokslNavError::NotADirectory { .. })));
    }

    #[test]
    fn test_delete_entry_file_and_dir() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("doomed.txt");
        let dir = temp.path().join("doomed_dir");
        fs::write(&file, "x").unwrap();
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join("inner.txt"), "y").unwrap();

        let fs_layer = FileSystem::new();
        fs_layer.delete_entry(&file).unwrap();
        fs_layer.delete_entry(&dir).unwrap();

        assert!(!file.exists());
        assert!(!dir.exists());
    }

    #[test]
    fn test_move_entry() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("src.txt");
        let dest_dir = temp.path().join("dest");
        fs::write(&src, "payload").unwrap();
        fs::create_dir(&dest_dir).unwrap();

        let fs_layer = FileSystem::new();
        let dest = dest_dir.join("src.txt");
        fs_layer.move_entry(&src, &dest).unwrap();

        assert!(!src.exists());
        assert_eq!(fs::read_to_string(&dest).unwrap(), "payload");
    }

    #[test]
    fn test_copy_tree_recursive() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("tree");
        fs::create_dir_all(src.join("nested/deeper")).unwrap();
        fs::write(src.join("root.txt"), "1").unwrap();
        fs::write(src.join("nested/mid.txt"), "2").unwrap();
        fs::write(src.join("nested/deeper/leaf.txt"), "3").unwrap();

        let fs_layer = FileSystem::new();
        let dest = temp.path().join("tree_copy");
        fs_layer.copy_tree(&src, &dest).unwrap();

        assert_eq!(fs::read_to_string(dest.join("root.txt")).unwrap(), "1");
        assert_eq!(fs::read_to_string(dest.join("nested/mid.txt")).unwrap(), "2");
        assert_eq!(
            fs::read_to_string(dest.join("nested/deeper/leaf.txt")).unwrap(),
            "3"
        );
        // 원본은 그대로
        assert!(src.join("root.txt").exists());
    }

    #[test]
    fn test_copy_tree_merges_into_existing_dir() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("src");
        let dest = temp.path().join("dest");
        fs::create_dir(&src).unwrap();
        fs::create_dir(&dest).unwrap();
        fs::write(src.join("new.txt"), "new").unwrap();
        fs::write(dest.join("kept.txt"), "kept").unwrap();

        let fs_layer = FileSystem::new();
        fs_layer.copy_tree(&src, &dest).unwrap();

        assert_eq!(fs::read_to_string(dest.join("new.txt")).unwrap(), "new");
        assert_eq!(fs::read_to_string(dest.join("kept.txt")).unwrap(), "kept");
    }

    #[test]
    fn test_status_line_for_file() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("sized.bin");
        fs::write(&file, vec![0u8; 1536]).unwrap();

        let fs_layer = FileSystem::new();
        let line = fs_layer.status_line(&file);

        assert!(line.contains("1.5K"));
        // 파일은 항목 개수가 0
        assert!(line.contains("     0     0"));
    }

    #[test]
    fn test_status_line_for_directory_counts_hidden() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("counted");
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join("visible.txt"), "").unwrap();
        fs::write(dir.join(".hidden"), "").unwrap();

        let fs_layer = FileSystem::new();
        let line = fs_layer.status_line(&dir);

        // 전체 2, 숨김 1, 크기 자리에는 "-"
        assert!(line.contains("     2     1"));
        assert!(line.contains("-"));
    }

    #[test]
    fn test_status_line_missing_path() {
        let temp = TempDir::new().unwrap();
        let fs_layer = FileSystem::new();
        assert_eq!(fs_layer.status_line(&temp.path().join("gone")), "error");
    }
}
