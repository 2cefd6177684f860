/*!
 * Tests for file utility functions and the decode policy
 */

use anyhow::Result;
use mojifix::app_config::DecodeMode;
use mojifix::file_utils::FileManager;
use std::fs;

use crate::common;

/// Test that file_exists returns true for existing files
#[test]
fn test_file_exists_withExistingFile_shouldReturnTrue() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_file = common::create_test_file(
        &temp_dir.path().to_path_buf(),
        "test_file_exists.tmp",
        "test content",
    )?;

    assert!(FileManager::file_exists(&test_file));

    Ok(())
}

/// Test that file_exists returns false for non-existent files
#[test]
fn test_file_exists_withNonExistentFile_shouldReturnFalse() {
    assert!(!FileManager::file_exists("non_existent_file.tmp"));
}

/// Test that read_text returns valid UTF-8 content unchanged in lossy mode
#[test]
fn test_read_text_withValidUtf8_shouldReturnContent() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let content = "Hello, 世界! ✅";
    let test_file =
        common::create_test_file(&temp_dir.path().to_path_buf(), "valid.txt", content)?;

    let read_content = FileManager::read_text(&test_file, DecodeMode::Lossy)?;
    assert_eq!(read_content, content);

    Ok(())
}

/// Test that lossy mode substitutes U+FFFD for undecodable bytes
#[test]
fn test_read_text_withInvalidUtf8InLossyMode_shouldSubstitutePlaceholder() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    // 0xFF 0xFE is not valid UTF-8
    let test_file = common::create_test_file_bytes(
        &temp_dir.path().to_path_buf(),
        "broken.txt",
        b"ok \xFF\xFE end",
    )?;

    let read_content = FileManager::read_text(&test_file, DecodeMode::Lossy)?;
    assert_eq!(read_content, "ok \u{FFFD}\u{FFFD} end");

    Ok(())
}

/// Test that strict mode fails on undecodable bytes
#[test]
fn test_read_text_withInvalidUtf8InStrictMode_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_file = common::create_test_file_bytes(
        &temp_dir.path().to_path_buf(),
        "broken.txt",
        b"ok \xFF end",
    )?;

    assert!(FileManager::read_text(&test_file, DecodeMode::Strict).is_err());

    Ok(())
}

/// Test that read_text fails with an I/O error for a missing file
#[test]
fn test_read_text_withMissingFile_shouldFail() {
    let result = FileManager::read_text("does_not_exist.txt", DecodeMode::Lossy);
    assert!(result.is_err());
}

/// Test that write_to_file creates file with content correctly
#[test]
fn test_write_to_file_withValidInput_shouldCreateFileWithContent() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_file = temp_dir.path().join("test_write_file.tmp");
    let content = "Test write content";

    FileManager::write_to_file(&test_file, content)?;

    assert!(test_file.exists());
    let read_content = fs::read_to_string(&test_file)?;
    assert_eq!(read_content, content);

    Ok(())
}

/// Test that find_files selects only the requested extension
#[test]
fn test_find_files_withMixedExtensions_shouldSelectOnlyMatching() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();
    common::create_test_file(&dir, "a.txt", "a")?;
    common::create_test_file(&dir, "b.txt", "b")?;
    common::create_test_file(&dir, "c.md", "c")?;

    let mut found = FileManager::find_files(&dir, "txt")?;
    found.sort();

    assert_eq!(found.len(), 2);
    assert!(found.iter().all(|p| p.extension().unwrap() == "txt"));

    Ok(())
}

/// Test that find_files accepts a leading dot in the extension
#[test]
fn test_find_files_withDottedExtension_shouldNormalize() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();
    common::create_test_file(&dir, "a.txt", "a")?;

    let found = FileManager::find_files(&dir, ".txt")?;
    assert_eq!(found.len(), 1);

    Ok(())
}
