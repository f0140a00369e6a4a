//! SQL 덤프 추출 워크플로우.
//!
//! SQL 덤프를 다운로드(또는 로컬 파일에서 읽기)하여 대상 데이터베이스에
//! 실행한 뒤, 생성된 public 테이블을 모두 날짜별 CSV 트리에 스냅샷합니다.

use sqlx::PgPool;

use super::{download, snapshot};
use crate::config::ExtractorConfig;
use crate::script::{self, CommitMode};
use crate::stats::SnapshotStats;
use crate::Result;

/// SQL 덤프 실행 + 전체 테이블 스냅샷.
///
/// `sql_file`이 주어지면 로컬 파일을 읽고, 없으면 설정된 URL에서
/// 다운로드하여 임시 경로에 저장합니다. 덤프는 DDL을 포함하므로
/// [`CommitMode::Autocommit`]으로 실행하며, 개별 구문 실패는 보고서에
/// 기록될 뿐 워크플로우를 중단하지 않습니다. 유효한 구문이 전혀 없으면
/// 실행 없이 에러로 중단합니다.
pub async fn extract_postgres(
    pool: &PgPool,
    client: &reqwest::Client,
    config: &ExtractorConfig,
    sql_file: Option<&str>,
) -> Result<SnapshotStats> {
    let (raw, downloaded) = match sql_file {
        Some(path) => {
            tracing::info!(path = path, "로컬 SQL 덤프 읽기");
            (std::fs::read_to_string(path)?, false)
        }
        None => {
            tracing::info!(url = %config.dataset.sql_url, "SQL 덤프 다운로드");
            let body = download::fetch_text(client, &config.dataset.sql_url).await?;
            std::fs::write(&config.dataset.sql_temp_path, &body)?;
            tracing::info!(path = %config.dataset.sql_temp_path, "SQL 덤프 저장 완료");
            (body, true)
        }
    };

    let report = script::run_script(pool, &raw, CommitMode::Autocommit).await?;
    report.log_summary("SQL 덤프 실행");

    let tables = snapshot::list_public_tables(pool).await?;
    let mut stats = SnapshotStats {
        tables: tables.len(),
        ..SnapshotStats::new()
    };

    if tables.is_empty() {
        tracing::warn!("생성된 테이블이 없습니다. SQL 실행 결과를 확인하세요.");
    } else {
        tracing::info!(tables = ?tables, "스냅샷 대상 테이블");
    }

    let date = snapshot::execution_date();
    for table in &tables {
        let dirs = [snapshot::postgres_snapshot_dir(
            &config.output.root,
            table,
            &date,
        )];
        match snapshot::snapshot_table(pool, table, &dirs).await {
            Ok(rows) => {
                stats.success += 1;
                stats.total_rows += rows;
            }
            Err(e) => {
                stats.errors += 1;
                tracing::error!(table = table, error = %e, "테이블 스냅샷 실패");
            }
        }
    }

    // 다운로드한 임시 덤프 파일 정리 (로컬 파일 입력은 건드리지 않음)
    if downloaded && config.dataset.remove_sql_after {
        std::fs::remove_file(&config.dataset.sql_temp_path)?;
        tracing::info!(path = %config.dataset.sql_temp_path, "임시 덤프 파일 삭제");
    }

    Ok(stats)
}
