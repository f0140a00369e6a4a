//! 환경변수 기반 설정 모듈.

use crate::error::ExtractError;
use crate::Result;

/// Extractor 전체 설정
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    /// 대상 데이터베이스 URL
    pub database_url: String,
    /// 전송 원본 데이터베이스 URL (transfer 워크플로우에서만 사용)
    pub source_database_url: Option<String>,
    /// 데이터셋 다운로드 설정
    pub dataset: DatasetConfig,
    /// CSV 스냅샷 출력 설정
    pub output: OutputConfig,
}

/// 데이터셋 다운로드 설정
#[derive(Debug, Clone)]
pub struct DatasetConfig {
    /// SQL 덤프 다운로드 URL
    pub sql_url: String,
    /// CSV 파일 다운로드 URL
    pub csv_url: String,
    /// 다운로드한 SQL 덤프를 임시 저장할 경로
    pub sql_temp_path: String,
    /// 실행 완료 후 임시 덤프 파일 삭제 여부
    pub remove_sql_after: bool,
}

/// CSV 스냅샷 출력 설정
///
/// 스냅샷은 날짜별 디렉터리에 저장됩니다:
/// - 테이블 스냅샷: `{root}/postgres/{table}/{YYYY-MM-DD}/{table}.csv`
/// - CSV 원본 사본: `{root}/csv/{YYYY-MM-DD}/{file}.csv`
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// 출력 루트 디렉터리
    pub root: String,
}

impl ExtractorConfig {
    /// 환경변수에서 설정 로드
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = std::env::var("DATABASE_URL").map_err(|_| {
            ExtractError::Config("DATABASE_URL 환경변수가 설정되지 않았습니다".to_string())
        })?;

        Ok(Self {
            database_url,
            source_database_url: std::env::var("SOURCE_DATABASE_URL").ok(),
            dataset: DatasetConfig {
                sql_url: env_var_or("DATASET_SQL_URL", DEFAULT_SQL_URL),
                csv_url: env_var_or("DATASET_CSV_URL", DEFAULT_CSV_URL),
                sql_temp_path: env_var_or("DATASET_SQL_TEMP_PATH", "northwind.sql"),
                remove_sql_after: env_var_bool("DATASET_REMOVE_SQL_AFTER", true),
            },
            output: OutputConfig {
                root: env_var_or("OUTPUT_ROOT", "data"),
            },
        })
    }
}

/// 기본 SQL 덤프 URL (Northwind 데이터셋)
const DEFAULT_SQL_URL: &str =
    "https://raw.githubusercontent.com/techindicium/code-challenge/main/data/northwind.sql";

/// 기본 CSV 파일 URL (order_details)
const DEFAULT_CSV_URL: &str =
    "https://raw.githubusercontent.com/techindicium/code-challenge/main/data/order_details.csv";

/// 환경변수에서 문자열 값 읽기 (없으면 기본값 사용)
fn env_var_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// 환경변수에서 bool 값 파싱
fn env_var_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .map(|v| v == "true" || v == "1")
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_var_bool_parsing() {
        std::env::set_var("EXTRACTOR_TEST_BOOL", "1");
        assert!(env_var_bool("EXTRACTOR_TEST_BOOL", false));
        std::env::set_var("EXTRACTOR_TEST_BOOL", "false");
        assert!(!env_var_bool("EXTRACTOR_TEST_BOOL", true));
        std::env::remove_var("EXTRACTOR_TEST_BOOL");
        assert!(env_var_bool("EXTRACTOR_TEST_BOOL", true));
    }

    #[test]
    fn test_env_var_or_default() {
        std::env::remove_var("EXTRACTOR_TEST_STR");
        assert_eq!(env_var_or("EXTRACTOR_TEST_STR", "fallback"), "fallback");
        std::env::set_var("EXTRACTOR_TEST_STR", "value");
        assert_eq!(env_var_or("EXTRACTOR_TEST_STR", "fallback"), "value");
        std::env::remove_var("EXTRACTOR_TEST_STR");
    }
}
