//! 에러 타입 정의.

use thiserror::Error;

/// Extractor 에러 타입.
///
/// 연결 수준 에러(접속, 커밋)와 개별 구문 실패를 구분합니다.
/// 개별 구문 실패는 에러로 전파되지 않고 [`crate::ExecutionReport`]에
/// 기록됩니다.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// 데이터베이스 에러 (접속, 쿼리, 커밋)
    #[error("데이터베이스 에러: {0}")]
    Database(#[from] sqlx::Error),

    /// HTTP 다운로드 에러 (non-2xx 포함)
    #[error("HTTP 요청 실패: {0}")]
    Http(#[from] reqwest::Error),

    /// 파일 시스템 에러
    #[error("파일 I/O 에러: {0}")]
    Io(#[from] std::io::Error),

    /// CSV 읽기/쓰기 에러
    #[error("CSV 처리 에러: {0}")]
    Csv(#[from] csv::Error),

    /// 설정 에러
    #[error("설정 에러: {0}")]
    Config(String),

    /// 다운로드한 데이터셋 내용 이상 (빈 파일, 형식 불일치 등)
    #[error("데이터셋 에러: {0}")]
    Dataset(String),

    /// 정리/분할 후 실행할 SQL 구문이 하나도 없음
    #[error("실행 가능한 SQL 구문이 없습니다")]
    NoValidStatements,
}

/// Result 타입 별칭
pub type Result<T> = std::result::Result<T, ExtractError>;
