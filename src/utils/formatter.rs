// Formatters - 파일 크기, 날짜, 모드 문자열 포맷팅

use chrono::{DateTime, Local};
use std::fs::Metadata;
use std::time::SystemTime;

/// 파일 크기를 읽기 쉬운 형식으로 포맷팅 (이진 접두사, 단위 붙여쓰기)
///
/// 1024 미만은 바이트 그대로, 이상은 K/M/G 단위.
/// 10 미만은 소수점 한 자리, 이상은 정수로 표시.
///
/// # Examples
/// ```
/// use bokslnav::utils::formatter::human_size;
///
/// assert_eq!(human_size(512), "512B");
/// assert_eq!(human_size(1536), "1.5K");
/// assert_eq!(human_size(23 * 1024 * 1024), "23M");
/// ```
pub fn human_size(size: u64) -> String {
    const UNIT: u64 = 1024;

    if size < UNIT {
        return format!("{}B", size);
    }

    let mut div = UNIT;
    let mut exp = 0usize;
    let mut n = size / UNIT;
    while n >= UNIT && exp < 2 {
        div *= UNIT;
        exp += 1;
        n /= UNIT;
    }

    let suffix = ["K", "M", "G"][exp];
    let value = size as f64 / div as f64;
    if value < 10.0 {
        format!("{:.1}{}", value, suffix)
    } else {
        format!("{:.0}{}", value, suffix)
    }
}

/// 시스템 시간을 통일된 날짜 형식으로 포맷팅
///
/// 항상 "YYYY-MM-DD HH:MM" 형식 (16자 고정)
pub fn format_date(time: SystemTime) -> String {
    let datetime: DateTime<Local> = time.into();
    datetime.format("%Y-%m-%d %H:%M").to_string()
}

/// 파일 모드를 ls 스타일 문자열로 포맷팅 (타입 문자 + rwx 삼중자)
///
/// Unix: "drwxr-xr-x" 형식. 그 외 플랫폼은 타입 문자만 표시.
pub fn format_mode(metadata: &Metadata) -> String {
    let type_char = if metadata.is_dir() {
        'd'
    } else if metadata.file_type().is_symlink() {
        'l'
    } else {
        '-'
    };

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = metadata.permissions().mode();
        format!(
            "{}{}{}{}",
            type_char,
            triplet(mode, 0o400, 0o200, 0o100),
            triplet(mode, 0o040, 0o020, 0o010),
            triplet(mode, 0o004, 0o002, 0o001),
        )
    }

    #[cfg(not(unix))]
    {
        format!("{}---------", type_char)
    }
}

/// 권한 triplet (rwx) 생성
#[cfg(unix)]
fn triplet(mode: u32, read: u32, write: u32, exec: u32) -> String {
    let r = if mode & read != 0 { "r" } else { "-" };
    let w = if mode & write != 0 { "w" } else { "-" };
    let x = if mode & exec != 0 { "x" } else { "-" };
    format!("{}{}{}", r, w, x)
}
