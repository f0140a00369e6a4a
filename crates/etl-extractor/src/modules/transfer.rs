//! 테이블 전송 워크플로우.
//!
//! 원본 데이터베이스의 public 테이블을 대상 데이터베이스로 복사하고,
//! 복사된 각 테이블을 날짜별 CSV 트리 두 곳(테이블 트리 + 날짜 트리)에
//! 스냅샷합니다.
//!
//! Postgres는 세션 간 교차 데이터베이스 참조(`db.table`)를 지원하지
//! 않으므로, 복사는 원본 풀에서 행을 텍스트로 읽어 대상 풀에 삽입하는
//! 풀 간 복사로 수행합니다.

use sqlx::PgPool;

use super::snapshot;
use crate::config::ExtractorConfig;
use crate::stats::SnapshotStats;
use crate::Result;

/// 원본 → 대상 테이블 복사 + 이중 스냅샷.
///
/// 테이블 하나의 실패(복사 또는 스냅샷)는 기록하고 다음 테이블로
/// 진행합니다. 대상 테이블은 TEXT 컬럼으로 `CREATE TABLE IF NOT EXISTS`
/// 생성되므로, 이미 존재하는 테이블에 다시 실행하면 행이 중복됩니다.
pub async fn transfer_tables(
    source_pool: &PgPool,
    target_pool: &PgPool,
    config: &ExtractorConfig,
) -> Result<SnapshotStats> {
    let tables = snapshot::list_public_tables(source_pool).await?;
    tracing::info!(tables = ?tables, "원본 데이터베이스 테이블");

    let mut stats = SnapshotStats {
        tables: tables.len(),
        ..SnapshotStats::new()
    };

    let date = snapshot::execution_date();
    for table in &tables {
        match copy_table(source_pool, target_pool, table).await {
            Ok(rows) => {
                tracing::info!(table = table, rows = rows, "테이블 복사 완료");
            }
            Err(e) => {
                stats.errors += 1;
                tracing::error!(table = table, error = %e, "테이블 복사 실패");
                continue;
            }
        }

        let dirs = [
            snapshot::postgres_snapshot_dir(&config.output.root, table, &date),
            snapshot::csv_snapshot_dir(&config.output.root, &date),
        ];
        match snapshot::snapshot_table(target_pool, table, &dirs).await {
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

    Ok(stats)
}

/// 테이블 하나를 원본 풀에서 대상 풀로 복사. 복사한 행 수 반환.
async fn copy_table(source_pool: &PgPool, target_pool: &PgPool, table: &str) -> Result<usize> {
    let (headers, rows) = snapshot::fetch_table(source_pool, table).await?;

    let columns = headers
        .iter()
        .map(|h| format!("{} TEXT", snapshot::quote_ident(h)))
        .collect::<Vec<_>>()
        .join(", ");
    sqlx::raw_sql(&format!(
        "CREATE TABLE IF NOT EXISTS {} ({})",
        snapshot::quote_ident(table),
        columns
    ))
    .execute(target_pool)
    .await?;

    let placeholders = (1..=headers.len())
        .map(|i| format!("${}", i))
        .collect::<Vec<_>>()
        .join(", ");
    let insert = format!(
        "INSERT INTO {} VALUES ({})",
        snapshot::quote_ident(table),
        placeholders
    );

    let mut tx = target_pool.begin().await?;
    for row in &rows {
        let mut query = sqlx::query(&insert);
        for value in row {
            query = query.bind(value);
        }
        query.execute(&mut *tx).await?;
    }
    tx.commit().await?;

    Ok(rows.len())
}
