//! 테이블 CSV 스냅샷 모듈.
//!
//! public 스키마의 테이블을 열거하고, 행 데이터를 텍스트로 조회하여
//! 날짜별 디렉터리 트리에 CSV 파일로 저장합니다.
//!
//! # 디렉터리 구조
//!
//! - 테이블 스냅샷: `{root}/postgres/{table}/{YYYY-MM-DD}/{table}.csv`
//! - CSV 원본 사본: `{root}/csv/{YYYY-MM-DD}/{file}.csv`

use std::path::{Path, PathBuf};

use sqlx::{PgPool, Row};

use crate::Result;

/// 오늘 날짜를 스냅샷 디렉터리 형식(YYYY-MM-DD)으로 반환
pub fn execution_date() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

/// 테이블 스냅샷 디렉터리 경로: `{root}/postgres/{table}/{date}`
pub fn postgres_snapshot_dir(root: &str, table: &str, date: &str) -> PathBuf {
    Path::new(root).join("postgres").join(table).join(date)
}

/// CSV 사본 디렉터리 경로: `{root}/csv/{date}`
pub fn csv_snapshot_dir(root: &str, date: &str) -> PathBuf {
    Path::new(root).join("csv").join(date)
}

/// 식별자 인용. 내부의 `"`는 `""`로 이스케이프.
///
/// 테이블/컬럼 이름은 information_schema 조회 결과이지만, 대소문자나
/// 특수문자가 섞인 이름도 그대로 조회할 수 있도록 항상 인용합니다.
pub fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// public 스키마의 테이블 이름 목록 조회 (이름순)
pub async fn list_public_tables(pool: &PgPool) -> Result<Vec<String>> {
    let tables = sqlx::query_scalar::<_, String>(
        "SELECT table_name FROM information_schema.tables \
         WHERE table_schema = 'public' AND table_type = 'BASE TABLE' \
         ORDER BY table_name",
    )
    .fetch_all(pool)
    .await?;
    Ok(tables)
}

/// 테이블의 컬럼 이름 목록 조회 (정의 순서)
async fn table_columns(pool: &PgPool, table: &str) -> Result<Vec<String>> {
    let columns = sqlx::query_scalar::<_, String>(
        "SELECT column_name FROM information_schema.columns \
         WHERE table_schema = 'public' AND table_name = $1 \
         ORDER BY ordinal_position",
    )
    .bind(table)
    .fetch_all(pool)
    .await?;
    Ok(columns)
}

/// 테이블 전체 내용을 (헤더, 행) 형태로 조회.
///
/// 모든 컬럼을 서버 측에서 `::text`로 캐스팅해 조회하므로 컬럼 타입과
/// 무관하게 `Option<String>`으로 디코딩됩니다. NULL은 `None`으로
/// 반환되며 CSV에는 빈 필드로 기록됩니다.
pub async fn fetch_table(
    pool: &PgPool,
    table: &str,
) -> Result<(Vec<String>, Vec<Vec<Option<String>>>)> {
    let headers = table_columns(pool, table).await?;

    let projection = headers
        .iter()
        .map(|c| format!("{}::text", quote_ident(c)))
        .collect::<Vec<_>>()
        .join(", ");
    let query = format!("SELECT {} FROM {}", projection, quote_ident(table));

    let db_rows = sqlx::query(&query).fetch_all(pool).await?;
    let mut rows = Vec::with_capacity(db_rows.len());
    for db_row in &db_rows {
        let mut row = Vec::with_capacity(headers.len());
        for i in 0..headers.len() {
            row.push(db_row.try_get::<Option<String>, _>(i)?);
        }
        rows.push(row);
    }

    Ok((headers, rows))
}

/// 헤더와 행을 CSV 파일로 저장.
///
/// 디렉터리가 없으면 생성합니다. NULL(`None`) 값은 빈 필드로 기록됩니다.
pub fn write_csv(
    dir: &Path,
    file_name: &str,
    headers: &[String],
    rows: &[Vec<Option<String>>],
) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(file_name);

    let mut writer = csv::Writer::from_path(&path)?;
    writer.write_record(headers)?;
    for row in rows {
        writer.write_record(row.iter().map(|v| v.as_deref().unwrap_or("")))?;
    }
    writer.flush()?;

    tracing::info!(path = %path.display(), rows = rows.len(), "CSV 저장 완료");
    Ok(path)
}

/// 테이블 하나를 지정된 디렉터리들에 스냅샷.
///
/// 같은 데이터를 여러 경로에 저장할 때(테이블 트리 + 날짜 트리)
/// 조회는 한 번만 수행합니다. 기록한 행 수를 반환합니다.
pub async fn snapshot_table(pool: &PgPool, table: &str, dirs: &[PathBuf]) -> Result<usize> {
    let (headers, rows) = fetch_table(pool, table).await?;
    let file_name = format!("{}.csv", table);
    for dir in dirs {
        write_csv(dir, &file_name, &headers, &rows)?;
    }
    Ok(rows.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_ident() {
        assert_eq!(quote_ident("orders"), "\"orders\"");
        assert_eq!(quote_ident("order\"s"), "\"order\"\"s\"");
    }

    #[test]
    fn test_snapshot_dir_layout() {
        let dir = postgres_snapshot_dir("data", "orders", "2026-08-30");
        assert_eq!(dir, Path::new("data/postgres/orders/2026-08-30"));

        let dir = csv_snapshot_dir("data", "2026-08-30");
        assert_eq!(dir, Path::new("data/csv/2026-08-30"));
    }

    #[test]
    fn test_execution_date_format() {
        let date = execution_date();
        assert_eq!(date.len(), 10);
        assert_eq!(date.as_bytes()[4], b'-');
        assert_eq!(date.as_bytes()[7], b'-');
    }

    #[test]
    fn test_write_csv_creates_dirs_and_renders_null_as_empty() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let dir = tmp.path().join("postgres/orders/2026-08-30");

        let headers = vec!["id".to_string(), "note".to_string()];
        let rows = vec![
            vec![Some("1".to_string()), Some("ok".to_string())],
            vec![Some("2".to_string()), None],
        ];

        let path = write_csv(&dir, "orders.csv", &headers, &rows).expect("write");
        let content = std::fs::read_to_string(path).expect("read back");
        assert_eq!(content, "id,note\n1,ok\n2,\n");
    }

    #[test]
    fn test_write_csv_quotes_embedded_delimiters() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let headers = vec!["name".to_string()];
        let rows = vec![vec![Some("a,b".to_string())]];

        let path = write_csv(tmp.path(), "t.csv", &headers, &rows).expect("write");
        let content = std::fs::read_to_string(path).expect("read back");
        assert_eq!(content, "name\n\"a,b\"\n");
    }
}
