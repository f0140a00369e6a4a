//! 실행 결과/스냅샷 통계 구조체.

use serde::{Deserialize, Serialize};

/// 개별 SQL 구문 실패 기록.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatementFailure {
    /// 구문 목록에서의 위치 (0부터)
    pub index: usize,
    /// 구문 앞부분 미리보기 (최대 50자)
    pub preview: String,
    /// 데이터베이스 에러 메시지
    pub message: String,
}

/// SQL 스크립트 실행 결과 보고서.
///
/// 전체 성공이 아니어도 보고서는 정상 반환됩니다. 부분 완료는
/// 설계된 동작이며, 실패한 구문은 `failures`에 개별 기록됩니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExecutionReport {
    /// 시도한 구문 수
    pub attempted: usize,
    /// 성공한 구문 수
    pub succeeded: usize,
    /// 실패한 구문 수
    pub failed: usize,
    /// 실패 상세 목록
    pub failures: Vec<StatementFailure>,
}

impl ExecutionReport {
    /// 새 보고서 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 성공 기록
    pub fn record_success(&mut self) {
        self.attempted += 1;
        self.succeeded += 1;
    }

    /// 실패 기록
    pub fn record_failure(&mut self, index: usize, preview: String, message: String) {
        self.attempted += 1;
        self.failed += 1;
        self.failures.push(StatementFailure {
            index,
            preview,
            message,
        });
    }

    /// 실행 요약 로그 출력
    pub fn log_summary(&self, operation: &str) {
        tracing::info!(
            operation = operation,
            attempted = self.attempted,
            succeeded = self.succeeded,
            failed = self.failed,
            "SQL 스크립트 실행 완료"
        );
        for failure in &self.failures {
            tracing::warn!(
                index = failure.index,
                preview = %failure.preview,
                error = %failure.message,
                "구문 실행 실패"
            );
        }
    }
}

/// 테이블 스냅샷 작업 통계.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SnapshotStats {
    /// 대상 테이블 수
    pub tables: usize,
    /// 스냅샷 성공 테이블 수
    pub success: usize,
    /// 스냅샷 실패 테이블 수
    pub errors: usize,
    /// 기록한 총 행 수 (헤더 제외)
    pub total_rows: usize,
}

impl SnapshotStats {
    /// 새 통계 객체 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 통계 요약 로그 출력
    pub fn log_summary(&self, operation: &str) {
        tracing::info!(
            operation = operation,
            tables = self.tables,
            success = self.success,
            errors = self.errors,
            total_rows = self.total_rows,
            "스냅샷 완료"
        );
    }
}

/// CSV 적재 작업 통계.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CsvLoadStats {
    /// 디스크에 저장한 행 수 (헤더 제외)
    pub rows_saved: usize,
    /// 데이터베이스에 적재한 행 수
    pub rows_loaded: usize,
}

impl CsvLoadStats {
    /// 통계 요약 로그 출력
    pub fn log_summary(&self, operation: &str) {
        tracing::info!(
            operation = operation,
            rows_saved = self.rows_saved,
            rows_loaded = self.rows_loaded,
            "CSV 적재 완료"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_execution_report_counts() {
        let mut report = ExecutionReport::new();
        report.record_success();
        report.record_failure(1, "INSERT INTO t".to_string(), "boom".to_string());
        report.record_success();

        assert_eq!(report.attempted, 3);
        assert_eq!(report.succeeded, 2);
        assert_eq!(report.failed, 1);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].index, 1);
    }
}
