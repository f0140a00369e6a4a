//! 데이터셋 다운로드 모듈.

use crate::Result;

/// URL에서 텍스트 본문을 다운로드.
///
/// non-2xx 응답은 에러로 전파됩니다. SQL 덤프와 CSV 파일 모두
/// 이 함수로 받아옵니다.
pub async fn fetch_text(client: &reqwest::Client, url: &str) -> Result<String> {
    let response = client.get(url).send().await?.error_for_status()?;
    let body = response.text().await?;
    tracing::debug!(url = url, bytes = body.len(), "다운로드 완료");
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ExtractError;

    #[tokio::test]
    async fn test_fetch_text_returns_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/northwind.sql")
            .with_status(200)
            .with_body("CREATE TABLE t (a TEXT);")
            .create_async()
            .await;

        let client = reqwest::Client::new();
        let body = fetch_text(&client, &format!("{}/northwind.sql", server.url()))
            .await
            .expect("fetch");

        assert_eq!(body, "CREATE TABLE t (a TEXT);");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_text_non_2xx_is_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/missing.csv")
            .with_status(404)
            .create_async()
            .await;

        let client = reqwest::Client::new();
        let err = fetch_text(&client, &format!("{}/missing.csv", server.url()))
            .await
            .expect_err("must fail");

        assert!(matches!(err, ExtractError::Http(_)));
    }
}
