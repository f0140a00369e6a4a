//! ETL Extractor 라이브러리.
//!
//! PostgreSQL/CSV 데이터셋을 받아 데이터베이스에 적재하고, 테이블
//! 내용을 날짜별 CSV 디렉터리 트리로 스냅샷하는 추출 워크플로우를
//! 제공합니다.
//!
//! # 구성
//!
//! - [`script`] — SQL 스크립트 실행기 (정리 → 분할 → 실행)
//! - [`modules`] — 워크플로우 (SQL 덤프 추출, CSV 추출, 테이블 전송)
//! - [`config`] — 환경변수 기반 설정
//! - [`stats`] — 실행 보고서 및 작업 통계

pub mod config;
pub mod error;
pub mod modules;
pub mod script;
pub mod stats;

pub use config::ExtractorConfig;
pub use error::{ExtractError, Result};
pub use script::CommitMode;
pub use stats::{CsvLoadStats, ExecutionReport, SnapshotStats, StatementFailure};
