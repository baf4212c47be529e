use anyhow::Result;

use super::TokenFile;
use crate::domain::models::Storage;
use crate::domain::models::TokenPair;

fn tokens() -> TokenPair {
    return TokenPair {
        access_token: "access".to_string(),
        refresh_token: "refresh".to_string(),
    };
}

#[tokio::test]
async fn it_round_trips_tokens() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let storage = TokenFile::new(dir.path().join("nested/tokens.json"));

    assert!(storage.read_tokens().await.is_none());

    storage.write_tokens(&tokens()).await?;
    let read = storage.read_tokens().await;
    assert_eq!(read, Some(tokens()));

    return Ok(());
}

#[tokio::test]
async fn it_clears_tokens() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let storage = TokenFile::new(dir.path().join("tokens.json"));

    storage.write_tokens(&tokens()).await?;
    storage.clear_tokens().await?;
    assert!(storage.read_tokens().await.is_none());
    assert!(!storage.file_path.exists());

    return Ok(());
}

#[tokio::test]
async fn it_clears_missing_file_without_error() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let storage = TokenFile::new(dir.path().join("tokens.json"));

    storage.clear_tokens().await?;

    return Ok(());
}

#[tokio::test]
async fn it_ignores_corrupt_token_files() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let file_path = dir.path().join("tokens.json");
    tokio::fs::write(&file_path, "{not json").await?;

    let storage = TokenFile::new(file_path);
    assert!(storage.read_tokens().await.is_none());

    return Ok(());
}

#[tokio::test]
async fn it_ignores_empty_access_tokens() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let file_path = dir.path().join("tokens.json");
    tokio::fs::write(
        &file_path,
        r#"{"access_token": "", "refresh_token": "refresh"}"#,
    )
    .await?;

    let storage = TokenFile::new(file_path);
    assert!(storage.read_tokens().await.is_none());

    return Ok(());
}
